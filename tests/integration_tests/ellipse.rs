use assertables::assert_contains;
use svg2modelica::{convert_str, ConvertConfig};

fn convert(shapes: &str) -> String {
    let input = format!(
        r#"<svg xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd" width="100" height="100">{shapes}</svg>"#
    );
    convert_str(input, &ConvertConfig::default()).unwrap()
}

#[test]
fn test_circle() {
    let output = convert(r##"<circle cx="50" cy="50" r="10" style="fill:#00ff00"/>"##);
    assert_contains!(output, "Ellipse(");
    assert_contains!(output, "extent= {{40,-40},{60,-60}}");
    assert_contains!(output, "fillColor= {0,255,0}");
}

#[test]
fn test_ellipse() {
    let output = convert(r#"<ellipse cx="20" cy="10" rx="20" ry="10" fill="none"/>"#);
    assert_contains!(output, "extent= {{0,0},{40,-20}}");
    assert!(!output.contains("fillPattern"));
}

#[test]
fn test_inkscape_arc() {
    let output = convert(
        r#"<path sodipodi:type="arc" sodipodi:cx="50" sodipodi:cy="50" sodipodi:rx="10" sodipodi:ry="10"
  sodipodi:start="0" sodipodi:end="3.1415926535897931" d="M 60,50 A 10,10 0 0 1 40,50"/>"#,
    );
    assert_contains!(output, "Ellipse(");
    assert_contains!(output, "extent= {{40,-40},{60,-60}}");
    assert_contains!(output, "startAngle= 180");
    assert_contains!(output, "endAngle= 360");
    assert!(!output.contains("Line("));
}
