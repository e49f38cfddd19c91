mod annotate;
pub mod config;
pub mod continuation;
mod error;
mod font;
pub mod types;
mod ui;
#[cfg(feature = "winit")]
mod window;
pub use crate::annotate::{agreement_regions, pi_label, pi_ticks};
pub use crate::continuation::extend;
pub use crate::error::Error;
#[cfg(feature = "winit")]
pub use crate::window::show;
use crate::config::Config;
use crate::font::Glyphs;
use crate::types::*;
use crate::ui::Painter;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::path::Path;
use tiny_skia::Pixmap;
use tracing::{debug, info};
impl Plot {
    ///samples extend(x, k) at sample_count evenly spaced points of the domain
    ///and derives the agreement squares and π ticks that annotate it,
    ///errors if the domain is empty or not finite
    pub fn new(k: f64, domain: Domain, sample_count: usize) -> Result<Self, Error> {
        let domain = domain.validate()?;
        Ok(Self {
            k,
            domain,
            data: continuation::sample(k, domain, sample_count),
            regions: agreement_regions(k, domain),
            ticks: pi_ticks(domain),
            title: format!("k = {k}"),
            ..Default::default()
        })
    }
    ///renders onto a new width by height canvas
    pub fn into_figure(mut self, width: u32, height: u32) -> Result<Figure, Error> {
        let canvas = self.draw(width, height)?;
        Ok(Figure { plot: self, canvas })
    }
    fn draw(&mut self, width: u32, height: u32) -> Result<Pixmap, Error> {
        let canvas = Pixmap::new(width, height).ok_or(Error::Canvas { width, height })?;
        let glyphs = Glyphs::new(self.text_color, self.font_scale)?;
        self.set_screen(width as f64, height as f64, &glyphs);
        let mut painter = Painter::new(self.background_color, self.anti_alias, canvas);
        self.write_axis(&mut painter);
        self.write_regions(&mut painter);
        self.write_curve(&mut painter);
        self.write_ticks(&mut painter, &glyphs);
        self.write_title(&mut painter, &glyphs);
        Ok(painter.canvas)
    }
    ///fits the largest square plot box that leaves room for labels and centers it
    fn set_screen(&mut self, width: f64, height: f64, glyphs: &Glyphs) {
        let label = self
            .ticks
            .iter()
            .map(|t| glyphs.width(&t.label))
            .fold(0.0, f32::max) as f64;
        let text = glyphs.height as f64;
        let tick = self.tick_length as f64;
        let (left, right) = (label + tick + 8.0, label / 2.0 + 4.0);
        let (top, bottom) = (text + 12.0, text + tick + 8.0);
        let avail = Vec2::new(width - left - right, height - top - bottom);
        let side = avail.x.min(avail.y).max(1.0);
        self.screen = Vec2::splat(side);
        self.screen_offset = Vec2::new(
            left + (avail.x - side).max(0.0) / 2.0,
            top + (avail.y - side).max(0.0) / 2.0,
        );
        let pad = self.domain.width() * self.view_margin;
        self.bound = Vec2::new(self.domain.start - pad, self.domain.end + pad);
    }
    ///pixels per unit, the same on both axes
    fn scale(&self) -> f64 {
        self.screen.x / (self.bound.y - self.bound.x)
    }
    pub(crate) fn to_screen(&self, x: f64, y: f64) -> Pos {
        let s = self.scale();
        Pos::new(
            (self.screen_offset.x + (x - self.bound.x) * s) as f32,
            (self.screen_offset.y + (self.bound.y - y) * s) as f32,
        )
    }
    fn corners(&self) -> (Pos, Pos) {
        let start = Pos::new(self.screen_offset.x as f32, self.screen_offset.y as f32);
        let size = Pos::new(self.screen.x as f32, self.screen.y as f32);
        (start, start + size)
    }
    fn write_axis(&self, painter: &mut Painter) {
        let (start, end) = self.corners();
        painter.rect_stroke(start, end - start, self.axis_width, &self.frame_color);
        if (self.bound.x..=self.bound.y).contains(&0.0) {
            let o = self.to_screen(0.0, 0.0);
            painter.hline([start.x, end.x], o.y, self.axis_width, &self.axis_color);
            painter.vline(o.x, [start.y, end.y], self.axis_width, &self.axis_color);
        }
    }
    fn write_regions(&self, painter: &mut Painter) {
        for region in &self.regions {
            let p = self.to_screen(region.x, region.y + region.side);
            let side = (self.scale() * region.side) as f32;
            painter.rect_stroke(
                p,
                Pos::new(side, side),
                self.region_width,
                &self.region_color,
            );
        }
        debug!(count = self.regions.len(), "agreement squares");
    }
    ///draws the sample set as one polyline, broken wherever a value is not finite
    fn write_curve(&self, painter: &mut Painter) {
        let mut run = Vec::with_capacity(self.data.len());
        for p in &self.data {
            let pos = self.to_screen(p.x, p.y);
            if p.is_finite() && pos.is_finite() {
                run.push(pos);
            } else {
                painter.polyline(&run, self.line_width, &self.curve_color);
                run.clear();
            }
        }
        painter.polyline(&run, self.line_width, &self.curve_color);
    }
    fn write_ticks(&self, painter: &mut Painter, glyphs: &Glyphs) {
        let (start, end) = self.corners();
        let gap = self.tick_length + 2.0;
        for tick in &self.ticks {
            let p = self.to_screen(tick.value, tick.value);
            painter.vline(
                p.x,
                [end.y, end.y + self.tick_length],
                self.axis_width,
                &self.frame_color,
            );
            painter.text(
                Pos::new(p.x, end.y + gap),
                Align::CenterTop,
                &tick.label,
                glyphs,
            );
            painter.hline(
                [start.x - self.tick_length, start.x],
                p.y,
                self.axis_width,
                &self.frame_color,
            );
            painter.text(
                Pos::new(start.x - gap, p.y),
                Align::RightCenter,
                &tick.label,
                glyphs,
            );
        }
    }
    fn write_title(&self, painter: &mut Painter, glyphs: &Glyphs) {
        let (start, end) = self.corners();
        painter.text(
            Pos::new((start.x + end.x) / 2.0, start.y - 4.0),
            Align::CenterBottom,
            &self.title,
            glyphs,
        );
    }
}
///a rendered plot, owned by whoever made it until it is saved or shown
#[derive(Debug)]
pub struct Figure {
    plot: Plot,
    canvas: Pixmap,
}
impl Figure {
    pub fn title(&self) -> &str {
        &self.plot.title
    }
    pub fn plot(&self) -> &Plot {
        &self.plot
    }
    pub fn pixmap(&self) -> &Pixmap {
        &self.canvas
    }
    pub fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }
    ///file name used when saving, "k=<k>.png"
    pub fn file_name(&self) -> String {
        format!("k={}.png", self.plot.k)
    }
    ///rerenders at a new size, does nothing if the size is unchanged
    pub fn update(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if self.size() != (width, height) {
            self.canvas = self.plot.draw(width, height)?;
            debug!(title = self.title(), width, height, "rerendered figure");
        }
        Ok(())
    }
    pub fn encode_png(&self) -> Result<Vec<u8>, Error> {
        self.canvas
            .encode_png()
            .map_err(|e| Error::Png(e.to_string()))
    }
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        std::fs::write(path, self.encode_png()?)?;
        info!(title = self.title(), path = %path.display(), "saved figure");
        Ok(())
    }
    ///copies the canvas into a 0RGB buffer that is width pixels wide,
    ///anything outside the canvas gets the background color
    pub fn blit(&self, buffer: &mut [u32], width: usize) {
        if width == 0 {
            return;
        }
        let rgb = |r: u8, g: u8, b: u8| ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
        let background = self.plot.background_color;
        let background = rgb(background.r, background.g, background.b);
        let (cw, ch) = (self.canvas.width() as usize, self.canvas.height() as usize);
        let pixels = self.canvas.pixels();
        for (i, out) in buffer.iter_mut().enumerate() {
            let (x, y) = (i % width, i / width);
            *out = if x < cw && y < ch {
                let p = pixels[y * cw + x];
                rgb(p.red(), p.green(), p.blue())
            } else {
                background
            };
        }
    }
}
///samples extend(x, k) over the domain and renders it with its annotations
pub fn render_plot(
    k: f64,
    domain: Domain,
    sample_count: usize,
    width: u32,
    height: u32,
) -> Result<Figure, Error> {
    let plot = Plot::new(k, domain, sample_count)?;
    debug!(k, samples = plot.data.len(), "sampled curve");
    let figure = plot.into_figure(width, height)?;
    info!(title = figure.title(), width, height, "rendered figure");
    Ok(figure)
}
///one figure per k of the config, in the same order
pub fn figures(config: &Config) -> Result<Vec<Figure>, Error> {
    let render = |k: &f64| {
        render_plot(
            *k,
            config.domain,
            config.samples,
            config.width,
            config.height,
        )
    };
    #[cfg(feature = "rayon")]
    let figures = config.ks.par_iter().map(render).collect();
    #[cfg(not(feature = "rayon"))]
    let figures = config.ks.iter().map(render).collect();
    figures
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
    fn near(figure: &Figure, pos: Pos, f: impl Fn(u8, u8, u8) -> bool) -> bool {
        (-1..=1).any(|dy| {
            (-1..=1).any(|dx| {
                let (x, y) = (pos.x as i32 + dx, pos.y as i32 + dy);
                (x >= 0 && y >= 0)
                    && figure
                        .pixmap()
                        .pixel(x as u32, y as u32)
                        .is_some_and(|p| f(p.red(), p.green(), p.blue()))
            })
        })
    }
    fn blue(r: u8, _: u8, b: u8) -> bool {
        b as i32 - r as i32 > 40
    }
    fn red(r: u8, g: u8, _: u8) -> bool {
        r as i32 - g as i32 > 50
    }
    #[test]
    fn default_render() {
        let figure = render_plot(1.0, Domain::default(), 1000, 400, 400).unwrap();
        assert_eq!(figure.size(), (400, 400));
        assert_eq!(figure.title(), "k = 1");
        let plot = figure.plot();
        assert_eq!(plot.data.len(), 1000);
        assert_eq!(plot.regions.len(), 5);
        assert_eq!(plot.ticks.len(), 6);
        assert!(near(&figure, plot.to_screen(1.0, extend(1.0, 1.0)), blue));
        assert!(near(&figure, plot.to_screen(FRAC_PI_4, -FRAC_PI_2), red));
        let corner = figure.pixmap().pixel(0, 0).unwrap();
        assert_eq!((corner.red(), corner.green(), corner.blue()), (255, 255, 255));
    }
    #[test]
    fn equal_aspect() {
        let figure = render_plot(2.0, Domain::default(), 100, 640, 480).unwrap();
        let plot = figure.plot();
        let o = plot.to_screen(0.0, 0.0);
        let x = plot.to_screen(1.0, 0.0);
        let y = plot.to_screen(0.0, 1.0);
        assert!(((x.x - o.x) - (o.y - y.y)).abs() < 1e-3);
        let (start, end) = plot.corners();
        assert!(start.x >= 0.0 && start.y >= 0.0 && end.x <= 640.0 && end.y <= 480.0);
        assert!(((end.x - start.x) - (end.y - start.y)).abs() < 1e-3);
    }
    #[test]
    fn regions_follow_sign() {
        let positive = Plot::new(1.0, Domain::default(), 10).unwrap();
        let negative = Plot::new(-1.0, Domain::default(), 10).unwrap();
        let zero = Plot::new(0.0, Domain::default(), 10).unwrap();
        assert!(positive.regions[1..].iter().all(|r| (r.center().x - r.center().y).abs() < 1e-12));
        assert!(negative.regions[1..].iter().all(|r| (r.center().x + r.center().y).abs() < 1e-12));
        assert_eq!(zero.regions.len(), 1);
        assert!(zero.data.iter().all(|p| p.y == 0.0));
        assert_eq!(Plot::new(0.5, Domain::default(), 10).unwrap().title, "k = 0.5");
        assert_eq!(Plot::new(-2.0, Domain::default(), 10).unwrap().title, "k = -2");
    }
    #[test]
    fn non_finite_samples_break_the_curve() {
        let mut plot = Plot::new(1.0, Domain::default(), 50).unwrap();
        plot.data[25].y = f64::NAN;
        plot.data.push(Vec2::new(f64::INFINITY, 0.0));
        assert!(plot.into_figure(200, 200).is_ok());
    }
    #[test]
    fn zero_sized_canvas_is_an_error() {
        let err = render_plot(1.0, Domain::default(), 10, 0, 100).unwrap_err();
        assert!(matches!(err, Error::Canvas { width: 0, height: 100 }));
    }
    #[test]
    fn invalid_domains_are_rejected() {
        for (start, end) in [(2.0, 1.0), (1.0, 1.0), (f64::NAN, 1.0), (0.0, f64::INFINITY)] {
            let err = render_plot(1.0, Domain { start, end }, 10, 100, 100).unwrap_err();
            assert!(matches!(err, Error::Domain { .. }), "[{start}, {end}]");
        }
        assert!(Plot::new(1.0, Domain { start: f64::NEG_INFINITY, end: 0.0 }, 10).is_err());
    }
    #[test]
    fn wide_domain_renders_with_bounded_annotations() {
        let figure = render_plot(2.0, Domain { start: -1e6, end: 1e6 }, 200, 200, 200).unwrap();
        assert!(figure.plot().regions.len() <= 17);
        assert!(figure.plot().ticks.len() <= 10);
    }
    #[test]
    fn update_only_rerenders_on_resize() {
        let mut figure = render_plot(-0.5, Domain::default(), 100, 300, 200).unwrap();
        figure.update(300, 200).unwrap();
        assert_eq!(figure.size(), (300, 200));
        figure.update(320, 240).unwrap();
        assert_eq!(figure.size(), (320, 240));
    }
    #[test]
    fn png_and_blit() {
        let figure = render_plot(2.0, Domain::default(), 100, 120, 90).unwrap();
        let png = figure.encode_png().unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
        let mut buffer = vec![0; 130 * 90];
        figure.blit(&mut buffer, 130);
        assert_eq!(buffer[0], 0x00ff_ffff);
        assert_eq!(buffer[129], 0x00ff_ffff);
        assert_eq!(figure.file_name(), "k=2.png");
    }
    #[test]
    fn figures_keep_config_order() {
        let config = Config {
            samples: 64,
            width: 160,
            height: 120,
            ..Config::default()
        };
        let titles: Vec<String> = figures(&config)
            .unwrap()
            .iter()
            .map(|f| f.title().to_string())
            .collect();
        assert_eq!(
            titles,
            ["k = 2", "k = 1", "k = 0.5", "k = 0", "k = -0.5", "k = -1", "k = -2"]
        );
    }
}
