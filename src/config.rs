use crate::types::Domain;
///values of k plotted by default, in order
pub const KS: [f64; 7] = [2.0, 1.0, 0.5, 0.0, -0.5, -1.0, -2.0];
///what to plot and how large, one figure per entry of ks
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub ks: Vec<f64>,
    pub domain: Domain,
    ///points sampled per curve
    pub samples: usize,
    ///figure size in pixels
    pub width: u32,
    pub height: u32,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            ks: KS.to_vec(),
            domain: Domain::default(),
            samples: 1000,
            width: 640,
            height: 480,
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.ks, vec![2.0, 1.0, 0.5, 0.0, -0.5, -1.0, -2.0]);
        assert_eq!(config.samples, 1000);
        assert!((config.domain.width() - 5.0 * PI).abs() < 1e-12);
        assert_eq!(config.domain.start, -config.domain.end);
    }
}
