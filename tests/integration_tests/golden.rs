use svg2modelica::{convert_str, ConvertConfig, Indent};

#[test]
fn test_full_output() {
    let input = r#"<svg width="100" height="50"><rect x="10" y="10" width="20" height="10"/></svg>"#;
    let expected = r#"model DummyModel
    annotation(
        Icon(
            coordinateSystem(
                extent= {{0,-50},{100,0}},
                preserveAspectRatio= false
            ),
            graphics= {
                Rectangle(
                    extent= {{10,-10},{30,-20}},
                    origin= {0,0}
                )
            }
        )
    );
end DummyModel;
"#;
    let output = convert_str(input, &ConvertConfig::default()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn test_empty_document() {
    let input = r#"<svg width="10" height="10"></svg>"#;
    let cfg = ConvertConfig {
        model_name: "Empty".to_string(),
        indent: Indent::spaces(2),
        ..Default::default()
    };
    let expected = r#"model Empty
  annotation(
    Icon(
      coordinateSystem(
        extent= {{0,-10},{10,0}},
        preserveAspectRatio= false
      ),
      graphics= {
        
      }
    )
  );
end Empty;
"#;
    let output = convert_str(input, &cfg).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn test_idempotent() {
    let input = r##"<svg width="100" height="100" viewBox="0 0 50 50">
  <g transform="translate(5, 5)">
    <rect width="10" height="10" style="fill:#ff0000;stroke:#0000ff;stroke-width:0.5"/>
    <circle cx="20" cy="20" r="4"/>
    <path d="M 0,0 L 10,10 L 20,0" style="fill:none;stroke:#00ff00"/>
    <text x="3" y="40" style="font-size:8px">Label</text>
  </g>
</svg>"##;
    let cfg = ConvertConfig::default();
    let first = convert_str(input, &cfg).unwrap();
    let second = convert_str(input, &cfg).unwrap();
    assert_eq!(first, second);
}
