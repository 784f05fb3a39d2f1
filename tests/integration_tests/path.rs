use assertables::assert_contains;
use svg2modelica::{convert_str, ConvertConfig};

fn convert(shapes: &str) -> String {
    let input = format!(r#"<svg width="100" height="100">{shapes}</svg>"#);
    convert_str(input, &ConvertConfig::default()).unwrap()
}

#[test]
fn test_closed_path_is_polygon() {
    let output = convert(r##"<path d="M0,0 L10,0 L10,10 Z" style="fill:#0000ff"/>"##);
    assert_contains!(output, "Polygon(");
    assert_contains!(output, "points= {{0, 0}, {10, 0}, {10, -10}}");
    assert_contains!(output, "fillColor= {0,0,255}");
}

#[test]
fn test_open_path_is_line() {
    let output = convert(r#"<path d="M0,0 h5 v5 h-5 v-5" style="fill:none;stroke-width:0.5"/>"#);
    assert_contains!(output, "Line(");
    assert_contains!(output, "points= {{0, 0}, {5, 0}, {5, -5}, {0, -5}, {0, 0}}");
    assert_contains!(output, "thickness= 0.50");
}

#[test]
fn test_relative_moves() {
    let output = convert(r#"<path d="m 10,10 20,0 0,20" fill="none"/>"#);
    assert_contains!(output, "points= {{10, -10}, {30, -10}, {30, -30}}");
}

#[test]
fn test_arrows() {
    let output = convert(
        r##"<path d="M0,0 L10,0" style="fill:none;stroke:#ff0000;stroke-width:3;marker-end:url(#Arrow2)"/>"##,
    );
    assert_contains!(output, "arrow= {Arrow.None, Arrow.Open}");
    assert_contains!(output, "arrowSize= 3");
    assert_contains!(output, "color= {255,0,0}");
}

#[test]
fn test_curve_dropped() {
    let output = convert(r#"<path d="M0,0 C 5,5 10,5 10,0" fill="none"/>"#);
    assert_contains!(output, "smooth= Smooth.Bezier");
    assert_contains!(output, "points= {}");
}

#[test]
fn test_malformed_path() {
    let input = r#"<svg width="100" height="100"><path d="M0,0 L10"/></svg>"#;
    assert!(convert_str(input, &ConvertConfig::default()).is_err());
}
