use crate::{Error, Figure};
use softbuffer::{Context, Surface};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};
///opens one window per figure and blocks until all of them are closed,
///figures are rerendered to fit when their window is resized
pub fn show(figures: Vec<Figure>) -> Result<(), Error> {
    if figures.is_empty() {
        return Ok(());
    }
    let event_loop = EventLoop::new()?;
    let mut app = App {
        pending: figures,
        views: HashMap::new(),
        error: None,
    };
    event_loop.run_app(&mut app)?;
    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
struct View {
    figure: Figure,
    surface: Surface<Arc<Window>, Arc<Window>>,
}
struct App {
    pending: Vec<Figure>,
    views: HashMap<WindowId, View>,
    error: Option<Error>,
}
impl App {
    fn open(&mut self, event_loop: &ActiveEventLoop, figure: Figure) -> Result<(), Error> {
        let (width, height) = figure.size();
        let attributes = Window::default_attributes()
            .with_title(figure.title())
            .with_inner_size(PhysicalSize::new(width, height));
        let window = Arc::new(event_loop.create_window(attributes)?);
        let context = Context::new(window.clone())?;
        let surface = Surface::new(&context, window.clone())?;
        debug!(title = figure.title(), "opened window");
        self.views.insert(window.id(), View { figure, surface });
        Ok(())
    }
    fn redraw(&mut self, id: WindowId) -> Result<(), Error> {
        let Some(view) = self.views.get_mut(&id) else {
            return Ok(());
        };
        let size = view.surface.window().inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };
        view.surface.resize(width, height)?;
        view.figure.update(size.width, size.height)?;
        let mut buffer = view.surface.buffer_mut()?;
        view.figure.blit(&mut buffer, size.width as usize);
        buffer.present()?;
        Ok(())
    }
    fn fail(&mut self, event_loop: &ActiveEventLoop, e: Error) {
        error!(error = %e, "display failed");
        self.error.get_or_insert(e);
        event_loop.exit();
    }
}
impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        for figure in std::mem::take(&mut self.pending) {
            if let Err(e) = self.open(event_loop, figure) {
                self.fail(event_loop, e);
                return;
            }
        }
    }
    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::Resized(_) => {
                if let Some(view) = self.views.get(&id) {
                    view.surface.window().request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw(id) {
                    self.fail(event_loop, e);
                }
            }
            WindowEvent::CloseRequested => {
                if let Some(view) = self.views.remove(&id) {
                    debug!(title = view.figure.title(), "closed window");
                }
                if self.views.is_empty() {
                    info!("all figures closed");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}
