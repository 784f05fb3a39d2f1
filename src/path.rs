use log::warn;

use crate::errors::{Error, Result};

/// Ordered vertices of a path, in document units
pub type PathPoints = Vec<(f64, f64)>;

const CURVE_COMMANDS: &str = "CcSsQqTtAa";

pub struct SvgPathSyntax {
    data: Vec<char>,
    index: usize,
}

impl SvgPathSyntax {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }
}

impl PathSyntax for SvgPathSyntax {
    fn at_command(&self) -> Result<bool> {
        self.check_not_end()?;
        Ok(self.current().is_some_and(|c| c.is_ascii_alphabetic()))
    }

    fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }
}

pub trait PathSyntax {
    fn at_command(&self) -> Result<bool>;
    fn current(&self) -> Option<char>;
    fn advance(&mut self);
    fn at_end(&self) -> bool;

    fn check_not_end(&self) -> Result<()> {
        if self.at_end() {
            Err(Error::Malformed("path data ended unexpectedly".to_string()))
        } else {
            Ok(())
        }
    }

    fn skip_whitespace(&mut self) {
        // SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD. Rust's is_ascii_whitespace()
        // also includes 0xC, but is close enough and convenient.
        while self.current().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn skip_wsp_comma(&mut self) {
        self.skip_whitespace();
        if self.current() == Some(',') {
            self.advance();
            self.skip_whitespace();
        }
    }

    fn accept_digits(&mut self, s: &mut String) {
        while let Some(ch) = self.current().filter(|c| c.is_ascii_digit()) {
            s.push(ch);
            self.advance();
        }
    }

    /// Read a number: optional sign, integer and fraction parts, and exponent.
    fn read_number(&mut self) -> Result<f64> {
        self.check_not_end()?;
        let mut s = String::new();
        if let Some(sign) = self.current().filter(|c| *c == '-' || *c == '+') {
            s.push(sign);
            self.advance();
        }
        self.accept_digits(&mut s);
        if self.current() == Some('.') {
            s.push('.');
            self.advance();
            self.accept_digits(&mut s);
        }
        if s.chars().any(|c| c.is_ascii_digit()) && matches!(self.current(), Some('e' | 'E')) {
            s.push('e');
            self.advance();
            if let Some(sign) = self.current().filter(|c| *c == '-' || *c == '+') {
                s.push(sign);
                self.advance();
            }
            self.accept_digits(&mut s);
        }
        self.skip_wsp_comma();
        s.parse()
            .map_err(|_| Error::Malformed(format!("invalid number '{s}' in path data")))
    }

    fn read_coord(&mut self) -> Result<(f64, f64)> {
        let x = self.read_number()?;
        self.skip_wsp_comma();
        let y = self.read_number()?;
        self.skip_wsp_comma();
        Ok((x, y))
    }

    fn read_command(&mut self) -> Result<char> {
        if self.at_command()? {
            let command = self.current().unwrap_or_default();
            self.advance();
            self.skip_wsp_comma();
            Ok(command)
        } else {
            Err(Error::Malformed("expected a path command".to_string()))
        }
    }
}

/// Why a path could not be turned into a point sequence.
enum Abandon {
    Curve(char),
    Failed(Error),
}

impl From<Error> for Abandon {
    fn from(err: Error) -> Self {
        Abandon::Failed(err)
    }
}

struct PathParser {
    tokens: SvgPathSyntax,
    position: (f64, f64),
    command: Option<char>,
    points: PathPoints,
}

impl PathParser {
    fn new(data: &str) -> Self {
        PathParser {
            tokens: SvgPathSyntax::new(data),
            position: (0., 0.),
            command: None,
            points: Vec::new(),
        }
    }

    /// Move the cursor and append it as a vertex. The starting position is
    /// the first vertex when nothing has been drawn yet.
    fn line_to(&mut self, pos: (f64, f64)) {
        if self.points.is_empty() {
            self.points.push(self.position);
        }
        self.position = pos;
        self.points.push(pos);
    }

    fn process_instruction(&mut self) -> std::result::Result<(), Abandon> {
        if self.command.is_none() || self.tokens.at_command()? {
            // "The command letter can be eliminated on subsequent commands if the same
            // command is used multiple times in a row (e.g., you can drop the second
            // "L" in "M 100 200 L 200 100 L -100 -200" and use "M 100 200 L 200 100
            // -100 -200" instead)."
            self.command = Some(self.tokens.read_command()?);
        }

        let (cpx, cpy) = self.position;
        match self.command.unwrap_or_default() {
            'M' => {
                self.position = self.tokens.read_coord()?;
                // subsequent pairs are implicit lineto commands
                self.command = Some('L');
            }
            'm' => {
                let (dx, dy) = self.tokens.read_coord()?;
                self.position = (cpx + dx, cpy + dy);
                self.command = Some('l');
            }
            'L' => {
                let xy = self.tokens.read_coord()?;
                self.line_to(xy);
            }
            'l' => {
                let (dx, dy) = self.tokens.read_coord()?;
                self.line_to((cpx + dx, cpy + dy));
            }
            'H' => {
                let new_x = self.tokens.read_number()?;
                self.line_to((new_x, cpy));
            }
            'h' => {
                let dx = self.tokens.read_number()?;
                self.line_to((cpx + dx, cpy));
            }
            'V' => {
                let new_y = self.tokens.read_number()?;
                self.line_to((cpx, new_y));
            }
            'v' => {
                let dy = self.tokens.read_number()?;
                self.line_to((cpx, cpy + dy));
            }
            // closing is implied by the shape type; the cursor stays put
            'Z' | 'z' => {
                if !self.tokens.at_end() && !self.tokens.at_command()? {
                    return Err(Abandon::Failed(Error::Malformed(
                        "unexpected number after close path".to_string(),
                    )));
                }
            }
            c if CURVE_COMMANDS.contains(c) => return Err(Abandon::Curve(c)),
            c => {
                return Err(Abandon::Failed(Error::Malformed(format!(
                    "unknown path command '{c}'"
                ))))
            }
        }
        Ok(())
    }

    fn evaluate(&mut self) -> std::result::Result<(), Abandon> {
        self.tokens.skip_whitespace();
        while !self.tokens.at_end() {
            self.process_instruction()?;
        }
        Ok(())
    }
}

/// Convert path data to its sequence of vertices.
///
/// Only straight segments are understood. A path containing curves or arcs
/// is rejected in strict mode, and otherwise gives no points at all.
pub fn parse_path(d: &str, strict: bool) -> Result<PathPoints> {
    let mut pp = PathParser::new(d);
    match pp.evaluate() {
        Ok(()) => Ok(pp.points),
        Err(Abandon::Failed(err)) => Err(err),
        Err(Abandon::Curve(c)) if strict => Err(Error::Unsupported(format!(
            "path command '{c}' is not supported"
        ))),
        Err(Abandon::Curve(c)) => {
            warn!("path command '{c}' is not supported; dropping path points");
            Ok(Vec::new())
        }
    }
}

/// True if the path data contains any curve or arc commands
pub fn has_curves(d: &str) -> bool {
    d.chars().any(|c| CURVE_COMMANDS.contains(c))
}

/// True if the path data finishes with a close command
pub fn is_closed(d: &str) -> bool {
    d.trim_end().ends_with(['z', 'Z'])
}
