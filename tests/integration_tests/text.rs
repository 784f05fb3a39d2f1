use assertables::assert_contains;
use svg2modelica::{convert_str, ConvertConfig, TextExtent};

fn convert_with(shapes: &str, cfg: &ConvertConfig) -> String {
    let input = format!(r#"<svg width="100" height="100">{shapes}</svg>"#);
    convert_str(input, cfg).unwrap()
}

fn convert(shapes: &str) -> String {
    convert_with(shapes, &ConvertConfig::default())
}

#[test]
fn test_text_attributes() {
    let output = convert(
        r#"<text x="10" y="20" style="font-size:12pt;font-family:Courier New"><tspan style="text-anchor:middle;font-style:italic">Hi</tspan></text>"#,
    );
    assert_contains!(output, "Text(");
    assert_contains!(output, r#"textString= "Hi""#);
    assert_contains!(output, r#"fontName= "Courier New""#);
    assert_contains!(output, "fontSize= 12");
    assert_contains!(output, "textStyle= {TextStyle.Italic}");
    assert!(!output.contains("horizontalAlignment"));
}

#[test]
fn test_multiline_text() {
    let output = convert(
        r#"<text x="0" y="10" style="font-size:10pt"><tspan>one</tspan><tspan>two &amp; three</tspan></text>"#,
    );
    assert_contains!(output, r#"textString= "one\ntwo & three""#);
    assert_contains!(output, "horizontalAlignment= TextAlignment.Left");
}

#[test]
fn test_text_colour() {
    let output = convert(r##"<text style="fill:#808080;stroke:#ff0000">grey</text>"##);
    assert_contains!(output, "lineColor= {128,128,128}");
    assert!(!output.contains("{255,0,0}"));
    assert!(!output.contains("fillPattern"));
}

#[test]
fn test_text_extent_modes() {
    let text = r#"<text x="10" y="20" style="font-size:12pt">wide text</text>"#;
    let flow = convert_with(
        text,
        &ConvertConfig {
            text_extent: TextExtent::Flow,
            ..Default::default()
        },
    );
    // zero width box at the anchor point
    assert_contains!(flow, "extent= {{10,-20},{10,");
    assert_contains!(flow, "fontSize= 12");

    let scaled = convert_with(
        text,
        &ConvertConfig {
            text_extent: TextExtent::Scaled,
            ..Default::default()
        },
    );
    assert_contains!(scaled, "fontSize= 0");

    let normal = convert(text);
    assert_ne!(normal, flow);
}
