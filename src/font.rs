use crate::error::Error;
use crate::types::Color;
use std::collections::HashMap;
use tiny_skia::{Paint, Pixmap, Rect, Transform};
///5x7 bitmap font covering digits, "-./= ", k, e and π
const FONT: &[u8] = include_bytes!("glyphs.bdf");
///glyphs of the embedded font prerendered in one color at an integer scale
#[derive(Debug)]
pub(crate) struct Glyphs {
    map: HashMap<char, Pixmap>,
    ///horizontal advance per character in pixels
    pub(crate) advance: f32,
    pub(crate) height: f32,
}
impl Glyphs {
    pub(crate) fn new(color: Color, scale: u32) -> Result<Self, Error> {
        let font = bdf2::read(FONT).map_err(|e| Error::Font(format!("{e:?}")))?;
        let scale = scale.max(1);
        let mut paint = Paint::default();
        paint.set_color(color.to_col());
        let transform = Transform::identity();
        let mut map = HashMap::new();
        let (mut width, mut height) = (0, 0);
        for (c, glyph) in font.glyphs() {
            width = width.max(glyph.width());
            height = height.max(glyph.height());
            let (w, h) = (glyph.width() * scale, glyph.height() * scale);
            let mut pixmap = Pixmap::new(w, h).ok_or(Error::Canvas {
                width: w,
                height: h,
            })?;
            for y in 0..glyph.height() {
                for x in 0..glyph.width() {
                    if glyph.get(x, y)
                        && let Some(rect) = Rect::from_xywh(
                            (x * scale) as f32,
                            (y * scale) as f32,
                            scale as f32,
                            scale as f32,
                        )
                    {
                        pixmap.fill_rect(rect, &paint, transform, None);
                    }
                }
            }
            map.insert(*c, pixmap);
        }
        Ok(Self {
            map,
            advance: ((width + 1) * scale) as f32,
            height: (height * scale) as f32,
        })
    }
    pub(crate) fn get(&self, c: char) -> Option<&Pixmap> {
        self.map.get(&c)
    }
    pub(crate) fn width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}
