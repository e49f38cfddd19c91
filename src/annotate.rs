//! agreement squares and π ticks, derived only from the sign of k and the domain
use crate::types::{Domain, Region, Sign, Tick};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::warn;
///slack for domain ends that are multiples of π/2 up to rounding
const EPS: f64 = 1e-9;
///non-central squares kept, nearest the origin first to go last
pub(crate) const MAX_REGIONS: usize = 16;
///more labels than this overlap on a default sized figure
pub(crate) const MAX_TICKS: usize = 10;
///squares of side π on which the curve is a translated copy of arctan(k tan(x)) on (-π/2, π/2)
///
///the central square is always first. for k > 0 further squares sit on the diagonal at (jπ, jπ),
///for k < 0 on the antidiagonal at (jπ, -jπ), for every j != 0 whose square fits in the domain,
///at most MAX_REGIONS of them with |j| <= MAX_REGIONS / 2
pub fn agreement_regions(k: f64, domain: Domain) -> Vec<Region> {
    let mut regions = vec![Region::centered(0.0, 0.0)];
    let sign = Sign::of(k);
    if sign == Sign::Zero {
        return regions;
    }
    let half = (MAX_REGIONS / 2) as f64;
    let lo = ((domain.start + FRAC_PI_2) / PI - EPS).ceil();
    let hi = ((domain.end - FRAC_PI_2) / PI + EPS).floor();
    if lo < -half || hi > half {
        warn!(lo, hi, "too many agreement squares, keeping those nearest the origin");
    }
    let (lo, hi) = (lo.max(-half) as i64, hi.min(half) as i64);
    regions.extend((lo..=hi).filter(|j| *j != 0).map(|j| {
        let x = j as f64 * PI;
        Region::centered(x, sign.signum() * x)
    }));
    regions
}
///ticks at each odd multiple of π/2 inside the domain, or of s·π/2 for the
///smallest odd s that keeps at most MAX_TICKS of them
pub fn pi_ticks(domain: Domain) -> Vec<Tick> {
    let count = domain.width() / PI + 1.0;
    let mut stride = (count / MAX_TICKS as f64).ceil().max(1.0);
    if stride % 2.0 == 0.0 {
        stride += 1.0;
    }
    if stride > 1.0 {
        warn!(stride, "thinning π ticks");
    }
    let unit = stride * FRAC_PI_2;
    let lo = ((domain.start / unit - 1.0) / 2.0 - EPS).ceil();
    let hi = ((domain.end / unit - 1.0) / 2.0 + EPS).floor();
    (0..MAX_TICKS)
        .map(|i| lo + i as f64)
        .take_while(|j| *j <= hi)
        .map(|j| {
            let m = stride * (2.0 * j + 1.0);
            Tick {
                value: m * FRAC_PI_2,
                label: pi_label(m as i64),
            }
        })
        .collect()
}
///label for m·π/2
pub fn pi_label(m: i64) -> String {
    let sign = if m < 0 { "-" } else { "" };
    let a = m.unsigned_abs();
    match (a, a % 2) {
        (0, _) => "0".to_string(),
        (1, _) => format!("{sign}π/2"),
        (_, 1) => format!("{sign}{a}π/2"),
        (2, _) => format!("{sign}π"),
        _ => format!("{sign}{}π", a / 2),
    }
}
