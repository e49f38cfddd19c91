use crate::error::Error;
use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::{Add, Sub};
///closed interval of x values a plot covers
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}
impl Default for Domain {
    ///[-5π/2, 5π/2]
    fn default() -> Self {
        Self {
            start: -5.0 * FRAC_PI_2,
            end: 5.0 * FRAC_PI_2,
        }
    }
}
impl Domain {
    ///errors unless both ends are finite and start < end
    pub fn new(start: f64, end: f64) -> Result<Self, Error> {
        Self { start, end }.validate()
    }
    pub fn validate(self) -> Result<Self, Error> {
        let Self { start, end } = self;
        if start.is_finite() && end.is_finite() && start < end {
            Ok(self)
        } else {
            Err(Error::Domain { start, end })
        }
    }
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
    ///count evenly spaced values, the last one is exactly end
    pub fn linspace(self, count: usize) -> impl Iterator<Item = f64> {
        let step = if count > 1 {
            self.width() / (count - 1) as f64
        } else {
            0.0
        };
        (0..count).map(move |i| {
            if count > 1 && i + 1 == count {
                self.end
            } else {
                self.start + i as f64 * step
            }
        })
    }
}
///which way the continuation stacks its branches
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sign {
    ///branches step up by π per half turn
    Positive,
    ///branches step down by π per half turn
    Negative,
    ///k = 0, the continuation is flat
    Zero,
}
impl Sign {
    ///NaN is treated as zero
    pub fn of(k: f64) -> Self {
        if k > 0.0 {
            Sign::Positive
        } else if k < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
    pub fn signum(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
            Sign::Zero => 0.0,
        }
    }
}
///axis aligned square marking where the curve is a translated copy of
///arctan(k tan(x)) on (-π/2, π/2), (x, y) is the lower left corner
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub side: f64,
}
impl Region {
    ///square of side π centered on (x, y)
    pub fn centered(x: f64, y: f64) -> Self {
        Self {
            x: x - FRAC_PI_2,
            y: y - FRAC_PI_2,
            side: PI,
        }
    }
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.side / 2.0, self.y + self.side / 2.0)
    }
    #[cfg(test)]
    pub(crate) fn contains(&self, p: Vec2) -> bool {
        (self.x..=self.x + self.side).contains(&p.x) && (self.y..=self.y + self.side).contains(&p.y)
    }
}
///labeled tick shared by both axes
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    pub const fn splat(c: u8) -> Self {
        Self { r: c, g: c, b: c }
    }
    pub(crate) fn to_col(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}
///screen position in pixels, y grows downwards
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}
impl Pos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
impl Add for Pos {
    type Output = Pos;
    fn add(self, rhs: Self) -> Self::Output {
        Pos::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Pos {
    type Output = Pos;
    fn sub(self, rhs: Self) -> Self::Output {
        Pos::new(self.x - rhs.x, self.y - rhs.y)
    }
}
///point in plot coordinates
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}
impl Vec2 {
    pub fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Align {
    CenterBottom,
    CenterTop,
    RightCenter,
}
///one member of the arctan(k tan(x)) family, sampled and annotated, plus how to draw it
#[derive(Clone, Debug)]
pub struct Plot {
    pub k: f64,
    pub domain: Domain,
    ///the sample set, ordered by x
    pub data: Vec<Vec2>,
    pub regions: Vec<Region>,
    ///ticks used on both axes
    pub ticks: Vec<Tick>,
    pub title: String,
    pub background_color: Color,
    pub axis_color: Color,
    pub frame_color: Color,
    pub text_color: Color,
    pub curve_color: Color,
    pub region_color: Color,
    pub line_width: f32,
    pub axis_width: f32,
    pub region_width: f32,
    pub tick_length: f32,
    ///integer upscale of the bitmap font
    pub font_scale: u32,
    ///fraction of the domain added around it on both axes
    pub view_margin: f64,
    pub anti_alias: bool,
    ///side length of the square plot box
    pub(crate) screen: Vec2,
    ///top left corner of the plot box
    pub(crate) screen_offset: Vec2,
    ///visible coordinate range, identical on both axes
    pub(crate) bound: Vec2,
}
impl Default for Plot {
    fn default() -> Self {
        Self {
            k: 0.0,
            domain: Domain::default(),
            data: Vec::new(),
            regions: Vec::new(),
            ticks: Vec::new(),
            title: String::new(),
            background_color: Color::splat(255),
            axis_color: Color::splat(0),
            frame_color: Color::splat(0),
            text_color: Color::splat(0),
            curve_color: Color::new(31, 119, 180),
            region_color: Color::new(255, 0, 0),
            line_width: 2.0,
            axis_width: 1.0,
            region_width: 1.0,
            tick_length: 5.0,
            font_scale: 2,
            view_margin: 0.05,
            anti_alias: true,
            screen: Vec2::splat(0.0),
            screen_offset: Vec2::splat(0.0),
            bound: Vec2::splat(0.0),
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn domain_rejects_empty_and_non_finite() {
        assert!(Domain::new(1.0, 1.0).is_err());
        assert!(Domain::new(2.0, 1.0).is_err());
        assert!(Domain::new(f64::NAN, 1.0).is_err());
        assert!(Domain::new(0.0, f64::INFINITY).is_err());
        assert_eq!(Domain::new(-1.0, 1.0).unwrap(), Domain { start: -1.0, end: 1.0 });
        assert!(Domain { start: 0.0, end: f64::NAN }.validate().is_err());
        assert!(Domain::default().validate().is_ok());
    }
    #[test]
    fn linspace_is_even() {
        let v: Vec<f64> = Domain { start: 0.0, end: 1.0 }.linspace(5).collect();
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
    #[test]
    fn sign_of_k() {
        assert_eq!(Sign::of(0.5), Sign::Positive);
        assert_eq!(Sign::of(-2.0), Sign::Negative);
        assert_eq!(Sign::of(0.0), Sign::Zero);
        assert_eq!(Sign::of(-0.0), Sign::Zero);
        assert_eq!(Sign::of(f64::NAN), Sign::Zero);
    }
    #[test]
    fn region_geometry() {
        let r = Region::centered(PI, -PI);
        let c = r.center();
        assert!((c.x - PI).abs() < 1e-12 && (c.y + PI).abs() < 1e-12);
        assert!(r.contains(Vec2::new(PI + 1.0, -PI - 1.0)));
        assert!(!r.contains(Vec2::new(0.0, 0.0)));
    }
}
