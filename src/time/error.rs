use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Syntax(String),
    UnitNotSupported(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Syntax(message) => message.fmt(f),
            Error::UnitNotSupported(unit) => write!(f, "Unsupported time unit '{}'", unit),
        }
    }
}
