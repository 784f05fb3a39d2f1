use assertables::assert_contains;
use svg2modelica::{convert_str, ConvertConfig};

fn normalized(input: &str) -> String {
    let cfg = ConvertConfig {
        normalize_extent: true,
        ..Default::default()
    };
    convert_str(input, &cfg).unwrap()
}

#[test]
fn test_normalized_extent() {
    let output = normalized(r#"<svg width="100" height="50"></svg>"#);
    assert_contains!(output, "extent= {{-100,-50},{100,50}}");
}

#[test]
fn test_normalized_shape() {
    let output = normalized(
        r#"<svg width="100" height="50"><rect width="100" height="50" style="stroke-width:2"/></svg>"#,
    );
    // origin and extent together span the whole icon
    assert_contains!(output, "origin= {-100,50}");
    assert_contains!(output, "extent= {{0,0},{200,-100}}");
    assert_contains!(output, "lineThickness= 4");
}

#[test]
fn test_viewbox() {
    let output = convert_str(
        r#"<svg width="200mm" height="100mm" viewBox="0 0 20 10"><rect width="20" height="10"/></svg>"#,
        &ConvertConfig::default(),
    )
    .unwrap();
    assert_contains!(output, "extent= {{0,-10},{20,0}}");

    let output = normalized(r#"<svg viewBox="0 0 20 10"></svg>"#);
    assert_contains!(output, "extent= {{-100,-50},{100,50}}");
}

#[test]
fn test_bad_root() {
    assert!(convert_str(r#"<svg viewBox="0 0 10"/>"#, &ConvertConfig::default()).is_err());
    assert!(convert_str(r#"<svg height="10"/>"#, &ConvertConfig::default()).is_err());
}
