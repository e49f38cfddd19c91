use thiserror::Error;
///everything that can go wrong between sampling a curve and showing it,
///the math itself never fails
#[derive(Debug, Error)]
pub enum Error {
    ///tiny-skia refuses zero sized or oversized pixmaps
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
    #[error("embedded glyph font failed to parse: {0}")]
    Font(String),
    #[error("png encoding failed: {0}")]
    Png(String),
    #[error("invalid domain [{start}, {end}]")]
    Domain { start: f64, end: f64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    ///winit and softbuffer errors are not Send, only their message is kept
    #[cfg(feature = "winit")]
    #[error("event loop: {0}")]
    EventLoop(String),
    #[cfg(feature = "winit")]
    #[error("window: {0}")]
    Window(String),
}
#[cfg(feature = "winit")]
impl From<winit::error::EventLoopError> for Error {
    fn from(e: winit::error::EventLoopError) -> Self {
        Error::EventLoop(e.to_string())
    }
}
#[cfg(feature = "winit")]
impl From<winit::error::OsError> for Error {
    fn from(e: winit::error::OsError) -> Self {
        Error::Window(e.to_string())
    }
}
#[cfg(feature = "winit")]
impl From<softbuffer::SoftBufferError> for Error {
    fn from(e: softbuffer::SoftBufferError) -> Self {
        Error::Window(e.to_string())
    }
}
