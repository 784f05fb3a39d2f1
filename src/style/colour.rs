use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// An sRGB colour, rendered as a Modelica `{r,g,b}` triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colour(pub u8, pub u8, pub u8);

impl Colour {
    pub fn is_black(&self) -> bool {
        *self == Colour(0, 0, 0)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            // '#rgb' is shorthand for '#rrggbb'
            3 => {
                let mut digits = hex.chars().map(|c| channel(&c.to_string()).map(|v| v * 17));
                Some(Colour(digits.next()??, digits.next()??, digits.next()??))
            }
            6 => Some(Colour(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    fn from_rgb(args: &str) -> Option<Self> {
        let channels = args
            .split(',')
            .map(|v| {
                let v = v.trim();
                if let Some(pct) = v.strip_suffix('%') {
                    let pct: u32 = pct.trim().parse().ok()?;
                    (pct <= 100).then(|| (f64::from(pct) * 255. / 100.).round() as u8)
                } else {
                    v.parse::<u8>().ok()
                }
            })
            .collect::<Option<Vec<_>>>()?;
        match channels.as_slice() {
            &[r, g, b] => Some(Colour(r, g, b)),
            _ => None,
        }
    }
}

impl FromStr for Colour {
    type Err = Error;

    /// Parse `#rgb`, `#rrggbb` or `rgb(r, g, b)` colours; components of the
    /// latter may be integers from 0 to 255 or integer percentages.
    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        let colour = if let Some(hex) = value.strip_prefix('#') {
            Self::from_hex(hex)
        } else if let Some(args) = value
            .strip_prefix("rgb")
            .map(|v| v.trim_start())
            .and_then(|v| v.strip_prefix('('))
            .and_then(|v| v.strip_suffix(')'))
        {
            Self::from_rgb(args)
        } else {
            None
        };
        colour.ok_or_else(|| Error::Unsupported(format!("colour definition '{value}'")))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{},{}}}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!("#ff0000".parse::<Colour>().ok(), Some(Colour(255, 0, 0)));
        assert_eq!("#00FF7f".parse::<Colour>().ok(), Some(Colour(0, 255, 127)));
        assert_eq!("#f80".parse::<Colour>().ok(), Some(Colour(255, 136, 0)));
        assert!("#ff00".parse::<Colour>().is_err());
        assert!("#gg0000".parse::<Colour>().is_err());
    }

    #[test]
    fn test_rgb() {
        assert_eq!(
            "rgb(50%,0,100%)".parse::<Colour>().ok(),
            Some(Colour(128, 0, 255))
        );
        assert_eq!(
            "rgb( 1, 2 ,3 )".parse::<Colour>().ok(),
            Some(Colour(1, 2, 3))
        );
        assert!("rgb(256,0,0)".parse::<Colour>().is_err());
        assert!("rgb(1,2)".parse::<Colour>().is_err());
        assert!("rgba(1,2,3,0.5)".parse::<Colour>().is_err());
    }

    #[test]
    fn test_unsupported() {
        for value in ["red", "currentColor", "url(#grad)", "inherit"] {
            assert!(
                matches!(value.parse::<Colour>(), Err(Error::Unsupported(_))),
                "{value}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour(1, 22, 255).to_string(), "{1,22,255}");
        assert!(Colour(0, 0, 0).is_black());
        assert!(!Colour(0, 0, 1).is_black());
    }
}
