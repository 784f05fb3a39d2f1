//! ## svg2modelica - convert SVG drawings into Modelica icons
//!
//! `svg2modelica` is normally run as a command line tool, taking an SVG file
//! (e.g. drawn in Inkscape) and producing a Modelica model whose `Icon`
//! annotation draws the same picture.
//!
//! Rectangles, circles, ellipses, straight-line paths and text are supported.
//! Transforms on elements and their groups are reduced to the origin, rotation
//! and scale form used by Modelica graphic items.
//!
//! ## Library use
//!
//! A `ConvertConfig` object should be created as appropriate to configure the
//! conversion, and the appropriate `convert_*` function called passing this
//! and appropriate input / output parameters as required.
//!
//! Features which cannot be represented in Modelica are dropped with a logged
//! warning, or rejected when `strict` is set.
//!
//! ## Example
//!
//! ```
//! let cfg = svg2modelica::ConvertConfig::default();
//!
//! let input = r#"<svg width="100" height="100"><rect width="50" height="20"/></svg>"#;
//! let output = svg2modelica::convert_str(input, &cfg).unwrap();
//!
//! assert!(output.starts_with("model DummyModel"));
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use std::io::{BufRead, Cursor, Write};

#[cfg(feature = "cli")]
pub mod cli;
mod document;
mod elements;
pub mod errors;
mod geometry;
mod path;
mod serialize;
mod style;
mod transform_attr;
mod types;
mod units;

#[cfg(feature = "cli")]
use std::fs::{self, File};
#[cfg(feature = "cli")]
use std::io::{BufReader, IsTerminal, Read};

#[cfg(feature = "cli")]
use tempfile::NamedTempFile;

use document::Document;
pub use elements::TextExtent;
pub use errors::{Error, Result};
pub use serialize::Indent;

// Allow users of this as a library to easily retrieve the version of svg2modelica being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings to configure a single conversion.
///
/// Note the settings here are specific to a single conversion; the command
/// line front-end wraps this in its own `Config` struct.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Name of the generated Modelica model
    pub model_name: String,
    /// Fail on any feature which cannot be represented, rather than dropping it
    pub strict: bool,
    /// Center the icon and scale it to the default `{{-100,-100},{100,100}}` extent
    pub normalize_extent: bool,
    /// How text extents are estimated
    pub text_extent: TextExtent,
    /// Indentation unit of the output
    pub indent: Indent,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            model_name: "DummyModel".to_owned(),
            strict: false,
            normalize_extent: false,
            text_extent: TextExtent::default(),
            indent: Indent::default(),
        }
    }
}

/// Reads from the `reader` stream, converts the document, and writes the
/// Modelica model to `writer`.
///
/// The entire stream is read and converted before anything is written, so
/// nothing is written if the conversion fails.
pub fn convert_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &ConvertConfig,
) -> Result<()> {
    let doc = Document::from_reader(reader)?;
    let icon = elements::build_icon(&doc, config)?;
    let icon = icon.render(&config.indent, 3);
    let model = serialize::model_text(&config.model_name, &icon, &config.indent);
    writeln!(writer, "{model}")?;
    Ok(())
}

/// Convert `input` provided as a string, returning the result as a string.
///
/// Uses default settings apart from the model name.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn convert_string(input: String, model_name: String) -> core::result::Result<String, String> {
    let cfg = ConvertConfig {
        model_name,
        ..Default::default()
    };
    convert_str(input, &cfg).map_err(|e| e.to_string())
}

/// Convert `input` provided as a string, returning the result as a string.
///
/// The conversion can be modified by providing a suitable `ConvertConfig` value.
pub fn convert_str<T: Into<String>>(input: T, cfg: &ConvertConfig) -> Result<String> {
    let input = input.into();

    let mut input = Cursor::new(input);
    let mut output: Vec<u8> = vec![];

    convert_stream(&mut input, &mut output, cfg)?;

    Ok(String::from_utf8(output)?)
}

/// Read file from `input` ('-' for stdin), convert the result,
/// and write to file given by `output` ('-' for stdout).
///
/// The conversion can be modified by providing a suitable `ConvertConfig` value.
#[cfg(feature = "cli")]
pub fn convert_file(input: &str, output: &str, cfg: &ConvertConfig) -> Result<()> {
    let mut in_reader = if input == "-" {
        let mut stdin = std::io::stdin().lock();
        if stdin.is_terminal() {
            // At least on Mac, a single Ctrl-D is not otherwise enough to
            // signal end-of-input; read everything and wrap in a Cursor.
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf)?;
            Box::new(BufReader::new(Cursor::new(buf))) as Box<dyn BufRead>
        } else {
            Box::new(stdin) as Box<dyn BufRead>
        }
    } else {
        Box::new(BufReader::new(File::open(input)?)) as Box<dyn BufRead>
    };

    if output == "-" {
        convert_stream(&mut in_reader, &mut std::io::stdout(), cfg)?;
    } else {
        let mut out_temp = NamedTempFile::new()?;
        convert_stream(&mut in_reader, &mut out_temp, cfg)?;
        // Copy content rather than rename (by .persist()) since this
        // could cross filesystems.
        fs::copy(out_temp.path(), output)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_str() {
        let cfg = ConvertConfig {
            model_name: "Icons".to_string(),
            ..Default::default()
        };
        let output = convert_str(r#"<svg width="10" height="10"/>"#, &cfg).unwrap();
        assert!(output.starts_with("model Icons\n    annotation(\n        Icon("));
        assert!(output.ends_with("\n    );\nend Icons;\n"));
    }

    #[test]
    fn test_convert_string() {
        let output = convert_string(r#"<svg width="10" height="10"/>"#.to_string(), "X".to_string());
        assert!(output.unwrap().starts_with("model X\n"));

        let err = convert_string("<svg".to_string(), "X".to_string()).unwrap_err();
        assert!(err.starts_with("Document error"), "{err}");
    }

    #[test]
    fn test_no_output_on_error() {
        let mut output: Vec<u8> = vec![];
        let mut input = Cursor::new(r#"<svg width="10" height="10"><circle/></svg>"#);
        let result = convert_stream(&mut input, &mut output, &ConvertConfig::default());
        assert!(result.is_err());
        assert!(output.is_empty());
    }
}
