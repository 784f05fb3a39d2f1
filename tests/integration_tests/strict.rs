use assertables::assert_contains;
use svg2modelica::{convert_str, ConvertConfig, Error};

fn convert(shapes: &str, strict: bool) -> svg2modelica::Result<String> {
    let input = format!("<svg width=\"100\" height=\"100\">\n{shapes}\n</svg>");
    let cfg = ConvertConfig {
        strict,
        ..Default::default()
    };
    convert_str(input, &cfg)
}

#[test]
fn test_strict_unstyled_rect() {
    let output = convert(r#"<rect x="1" y="2" width="3" height="4"/>"#, true).unwrap();
    assert_contains!(output, "Rectangle(");
    assert_contains!(output, "extent= {{1,-2},{4,-6}}");
    assert_contains!(output, "origin= {0,0}");
    for attr in ["Color", "Pattern", "pattern", "lineThickness", "radius"] {
        assert!(!output.contains(attr), "unexpected {attr} in {output}");
    }
}

#[test]
fn test_unsupported_features() {
    let cases = [
        r#"<image width="10" height="10"/>"#,
        r#"<rect width="10" height="10" rx="1" ry="2"/>"#,
        r#"<rect width="10" height="10" style="fill:url(#gradient)"/>"#,
        r#"<rect width="10" height="10" style="fill-opacity:0.5"/>"#,
        r#"<rect width="10" height="10" style="stroke-dasharray:1,1"/>"#,
        r#"<rect width="10" height="10" transform="skewX(10)"/>"#,
        r#"<path d="M0,0 Q 5,5 10,0"/>"#,
    ];
    for shape in cases {
        // dropped with a warning unless strict
        assert!(convert(shape, false).is_ok(), "{shape}");
        let err = convert(shape, true).expect_err(shape);
        assert!(matches!(err, Error::Element(_, 2, _)), "{shape}: {err}");
        assert!(matches!(err.cause(), Error::Unsupported(_)), "{shape}: {err}");
    }
}

#[test]
fn test_irreducible_transform() {
    let err = convert(
        r#"<g transform="rotate(30)"><rect width="1" height="1" transform="matrix(2,0,0,1,0,0)"/></g>"#,
        true,
    )
    .unwrap_err();
    assert!(
        matches!(err.cause(), Error::IrreducibleTransform(_)),
        "{err}"
    );
}

#[test]
fn test_malformed_always_fatal() {
    for shape in [
        r#"<rect width="ten" height="10"/>"#,
        r#"<circle cx="1"/>"#,
        r#"<path d="M0,0 X 3"/>"#,
    ] {
        assert!(convert(shape, false).is_err(), "{shape}");
        assert!(convert(shape, true).is_err(), "{shape}");
    }
}

#[test]
fn test_error_location() {
    let err = convert(r#"<g><circle cx="1"/></g>"#, false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "<circle> (line 2): Element <circle> missing attribute 'r'"
    );
}
