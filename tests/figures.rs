use arctanktan::config::Config;
use arctanktan::types::{Domain, Sign};
use arctanktan::{extend, figures, render_plot};
use std::f64::consts::{FRAC_PI_2, PI};
#[test]
fn seven_figures_in_order() {
    let config = Config {
        width: 200,
        height: 150,
        ..Config::default()
    };
    let figures = figures(&config).unwrap();
    assert_eq!(figures.len(), 7);
    for (figure, k) in figures.iter().zip(&config.ks) {
        assert_eq!(figure.size(), (200, 150));
        assert_eq!(figure.plot().k, *k);
        assert_eq!(figure.plot().data.len(), 1000);
        let extra = if Sign::of(*k) == Sign::Zero { 0 } else { 4 };
        assert_eq!(figure.plot().regions.len(), 1 + extra);
    }
}
#[test]
fn curve_through_origin_for_unit_k() {
    let figure = render_plot(1.0, Domain::default(), 1000, 320, 240).unwrap();
    let data = &figure.plot().data;
    let i = data.iter().position(|p| p.x > 0.0).unwrap();
    let (a, b) = (data[i - 1], data[i]);
    let t = -a.x / (b.x - a.x);
    let y0 = a.y + t * (b.y - a.y);
    assert!(y0.abs() < 1e-12);
    let quarter = data
        .iter()
        .min_by(|p, q| (p.x - PI / 4.0).abs().total_cmp(&(q.x - PI / 4.0).abs()))
        .unwrap();
    assert!((quarter.y - 1f64.atan()).abs() < 0.02);
}
#[test]
fn samples_are_the_continuation() {
    let figure = render_plot(-2.0, Domain::default(), 257, 100, 100).unwrap();
    for p in &figure.plot().data {
        assert_eq!(p.y, extend(p.x, -2.0));
    }
    let last = figure.plot().data.last().unwrap();
    assert!((last.y + 5.0 * FRAC_PI_2).abs() < 1e-9);
}
#[test]
fn writes_png_files() {
    let dir = std::env::temp_dir().join(format!("arctanktan-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let figure = render_plot(0.5, Domain::default(), 100, 120, 100).unwrap();
    let path = dir.join(figure.file_name());
    figure.save_png(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    std::fs::remove_dir_all(&dir).unwrap();
}
