//! the continuous extension of arctan(k tan(x))
//!
//! arctan(k tan(x)) jumps by π at every odd multiple of π/2. [`extend`] reduces x into
//! [-π/2, π/2] by a whole number of half turns, evaluates the base branch there with atan2,
//! and adds the half turns back so neighbouring branches join up
use crate::types::{Domain, Sign, Vec2};
use std::f64::consts::PI;
///x split into a branch index and the remainder left after removing n half turns
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Reduced {
    ///nearest integer to x/π
    pub n: i64,
    ///x - nπ, within [-π/2, π/2] up to rounding
    pub x: f64,
}
///arctan(k tan(x)) on (-π/2, π/2), evaluated as atan2 so x = ±π/2 is fine
pub fn branch(x: f64, k: f64) -> f64 {
    let (sin, cos) = x.sin_cos();
    (k * sin).atan2(cos)
}
///reduces x by the nearest whole number of half turns,
///exact halves round away from zero
pub fn reduce(x: f64) -> Reduced {
    let n = (x / PI).round();
    Reduced {
        n: n as i64,
        x: x - n * PI,
    }
}
///continuous extension of arctan(k tan(x)) to every real x
///
///agrees with arctan(k tan(x)) on (-π/2, π/2), is identically 0 for k = 0,
///and has slope k / (cos²(x) + k² sin²(x)) everywhere else
pub fn extend(x: f64, k: f64) -> f64 {
    let Reduced { n, x } = reduce(x);
    let npi = n as f64 * PI;
    match Sign::of(k) {
        Sign::Positive => branch(x, k) + npi,
        Sign::Negative => branch(x, k) - npi,
        Sign::Zero => 0.0,
    }
}
///the unextended arctan(k tan(x)), discontinuous at odd multiples of π/2
pub fn classic(x: f64, k: f64) -> f64 {
    (k * x.tan()).atan()
}
///slope of [`extend`]
pub fn derivative(x: f64, k: f64) -> f64 {
    if Sign::of(k) == Sign::Zero {
        return 0.0;
    }
    let (sin, cos) = x.sin_cos();
    k / (cos * cos + k * k * sin * sin)
}
///distance between the values just left and right of x0
pub fn gap(x0: f64, eps: f64, k: f64) -> f64 {
    (extend(x0 + eps, k) - extend(x0 - eps, k)).abs()
}
///evaluates [`extend`] at count evenly spaced points covering the domain,
///the first and last land exactly on its ends
pub fn sample(k: f64, domain: Domain, count: usize) -> Vec<Vec2> {
    domain
        .linspace(count)
        .map(|x| Vec2::new(x, extend(x, k)))
        .collect()
}
