use crate::font::Glyphs;
use crate::types::{Align, Color, Pos};
use tiny_skia::{Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke, Transform};
///draws onto an owned pixmap in screen coordinates
pub(crate) struct Painter {
    pub(crate) canvas: Pixmap,
    anti_alias: bool,
}
impl Painter {
    pub(crate) fn new(background: Color, anti_alias: bool, mut canvas: Pixmap) -> Self {
        canvas.fill(background.to_col());
        Self { canvas, anti_alias }
    }
    fn paint(&self, color: &Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.to_col());
        paint.anti_alias = self.anti_alias;
        paint
    }
    fn stroke(&mut self, path: &tiny_skia::Path, width: f32, color: &Color) {
        let paint = self.paint(color);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.canvas
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }
    pub(crate) fn line_segment(&mut self, p: [Pos; 2], width: f32, color: &Color) {
        self.polyline(&p, width, color)
    }
    ///connects the points in order, needs at least two
    pub(crate) fn polyline(&mut self, points: &[Pos], width: f32, color: &Color) {
        let mut iter = points.iter();
        let Some(first) = iter.next() else {
            return;
        };
        let mut path = PathBuilder::new();
        path.move_to(first.x, first.y);
        for p in iter {
            path.line_to(p.x, p.y);
        }
        if let Some(path) = path.finish() {
            self.stroke(&path, width, color)
        }
    }
    pub(crate) fn hline(&mut self, x: [f32; 2], y: f32, width: f32, color: &Color) {
        self.line_segment([Pos::new(x[0], y), Pos::new(x[1], y)], width, color)
    }
    pub(crate) fn vline(&mut self, x: f32, y: [f32; 2], width: f32, color: &Color) {
        self.line_segment([Pos::new(x, y[0]), Pos::new(x, y[1])], width, color)
    }
    ///outline of the rectangle with top left corner p
    pub(crate) fn rect_stroke(&mut self, p: Pos, size: Pos, width: f32, color: &Color) {
        if let Some(rect) = Rect::from_xywh(p.x, p.y, size.x, size.y) {
            let path = PathBuilder::from_rect(rect);
            self.stroke(&path, width, color)
        }
    }
    ///draws text anchored at pos, returns its width,
    ///characters without a glyph still take up space
    pub(crate) fn text(&mut self, pos: Pos, align: Align, text: &str, glyphs: &Glyphs) -> f32 {
        let width = glyphs.width(text);
        let mut pos = match align {
            Align::CenterBottom => Pos::new(pos.x - width / 2.0, pos.y - glyphs.height),
            Align::CenterTop => Pos::new(pos.x - width / 2.0, pos.y),
            Align::RightCenter => Pos::new(pos.x - width, pos.y - glyphs.height / 2.0),
        };
        let paint = PixmapPaint::default();
        for c in text.chars() {
            if let Some(glyph) = glyphs.get(c) {
                self.canvas.draw_pixmap(
                    pos.x.round() as i32,
                    pos.y.round() as i32,
                    glyph.as_ref(),
                    &paint,
                    Transform::identity(),
                    None,
                );
            } else {
                tracing::warn!(char = ?c, "no glyph for character");
            }
            pos.x += glyphs.advance;
        }
        width
    }
}
