use assertables::assert_contains;
use svg2modelica::{convert_str, ConvertConfig};

fn convert(shapes: &str) -> String {
    let input = format!(r#"<svg width="100" height="100">{shapes}</svg>"#);
    convert_str(input, &ConvertConfig::default()).unwrap()
}

#[test]
fn test_rect_filled() {
    let output = convert(
        r##"<rect x="10" y="20" width="30" height="40" rx="5" ry="5" style="fill:#ff0000;stroke:none"/>"##,
    );
    assert_contains!(output, "extent= {{10,-20},{40,-60}}");
    assert_contains!(output, "fillColor= {255,0,0}");
    assert_contains!(output, "fillPattern= FillPattern.Solid");
    assert_contains!(output, "pattern= LinePattern.None");
    assert_contains!(output, "radius= 5");
    assert!(!output.contains("lineColor"));
}

#[test]
fn test_rect_stroked() {
    let output = convert(
        r##"<rect width="10" height="10" style="fill:none;stroke:#0000ff;stroke-width:2px"/>"##,
    );
    assert_contains!(output, "lineColor= {0,0,255}");
    assert_contains!(output, "lineThickness= 2");
    assert!(!output.contains("fillPattern"));
    assert!(!output.contains("fillColor"));
    assert!(!output.contains("LinePattern.None"));
}

#[test]
fn test_rect_black_is_default() {
    let output = convert(r##"<rect width="10" height="10" fill="#000" stroke="rgb(0,0,0)"/>"##);
    assert_contains!(output, "fillPattern= FillPattern.Solid");
    assert!(!output.contains("fillColor"));
    assert!(!output.contains("lineColor"));
}

#[test]
fn test_rect_mean_radius() {
    let output = convert(r#"<rect width="10" height="10" rx="1" ry="3"/>"#);
    assert_contains!(output, "radius= 2");
}

#[test]
fn test_rect_missing_size() {
    let input = r#"<svg width="100" height="100"><rect width="10"/></svg>"#;
    let err = convert_str(input, &ConvertConfig::default()).unwrap_err();
    assert_contains!(err.to_string(), "missing attribute 'height'");
}
