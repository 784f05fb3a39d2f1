use assertables::assert_contains;
use svg2modelica::{convert_str, ConvertConfig};

fn convert(shapes: &str) -> String {
    let input = format!(r#"<svg width="100" height="100">{shapes}</svg>"#);
    convert_str(input, &ConvertConfig::default()).unwrap()
}

#[test]
fn test_translate() {
    let output = convert(r#"<rect width="10" height="10" transform="translate(10,20)"/>"#);
    assert_contains!(output, "origin= {10,-20}");
    assert_contains!(output, "extent= {{0,0},{10,-10}}");
    assert!(!output.contains("rotation"));
}

#[test]
fn test_rotate() {
    let output = convert(r#"<rect width="10" height="10" transform="rotate(30)"/>"#);
    assert_contains!(output, "rotation= -30");
}

#[test]
fn test_group_chain() {
    let output = convert(
        r#"<g transform="translate(50, 0)"><g transform="translate(0, 10)"><circle r="5" transform="rotate(-90)"/></g></g>"#,
    );
    assert_contains!(output, "origin= {50,-10}");
    assert_contains!(output, "rotation= 90");
    assert_contains!(output, "extent= {{-5,5},{5,-5}}");
}

#[test]
fn test_uniform_scale() {
    let output = convert(r#"<rect width="10" height="5" transform="scale(2)"/>"#);
    assert_contains!(output, "extent= {{0,0},{20,-10}}");
}

#[test]
fn test_unsupported_transform_ignored() {
    let output = convert(r#"<rect width="10" height="10" transform="skewX(20) translate(5, 5)"/>"#);
    assert_contains!(output, "origin= {0,0}");
}
