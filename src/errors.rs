use std::error;
use std::fmt;
use std::num::ParseFloatError;
use std::string::FromUtf8Error;

use log::warn;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(String),
    Document(String),
    Cli(String),
    /// A feature with no Modelica counterpart; only fatal in strict mode.
    Unsupported(String),
    /// Geometry which cannot be interpreted at all; always fatal.
    Malformed(String),
    MissingAttribute(String, String),
    IrreducibleTransform(String),
    /// Error raised while converting a particular element: (tag, source line, cause)
    Element(String, usize, Box<Error>),
    Other(Box<dyn error::Error>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Parse(reason) => write!(f, "Parse error: {reason}"),
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Unsupported(reason) => write!(f, "Unsupported: {reason}"),
            Error::Malformed(reason) => write!(f, "Malformed input: {reason}"),
            Error::MissingAttribute(tag, attr) => {
                write!(f, "Element <{tag}> missing attribute '{attr}'")
            }
            Error::IrreducibleTransform(reason) => {
                write!(
                    f,
                    "Transformation matrix is not reducible to angle + origin [+ scaling] form: {reason}"
                )
            }
            Error::Element(tag, line, source) => write!(f, "<{tag}> (line {line}): {source}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Element(_, _, source) => Some(&**source),
            Error::Other(e) => Some(&**e),
            _ => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: error::Error + 'static,
    {
        Error::Other(Box::new(err))
    }

    /// Attach the offending element to an error, unless already attached.
    pub fn at_element(self, tag: &str, line: usize) -> Error {
        match self {
            Error::Element(..) => self,
            other => Error::Element(tag.to_string(), line, Box::new(other)),
        }
    }

    /// The innermost error, skipping any element context.
    pub fn cause(&self) -> &Error {
        match self {
            Error::Element(_, _, source) => source.cause(),
            other => other,
        }
    }
}

/// Degrade an `Unsupported` error to a fallback value with a warning,
/// unless in strict mode. Other errors are always propagated.
pub fn tolerate<T>(result: Result<T>, strict: bool, fallback: impl FnOnce() -> T) -> Result<T> {
    match result {
        Err(Error::Unsupported(reason)) if !strict => {
            warn!("{reason} (ignored)");
            Ok(fallback())
        }
        other => other,
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Parse(format!("float: {err}"))
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::Parse(format!("utf8: {err}"))
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Error {
        Error::Parse(err.to_string())
    }
}
