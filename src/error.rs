#![warn(missing_docs)]
//! Lensim specific error structures
use std::{error::Error, fmt::Display};

/// Lensim application specific Result type
pub type LsResult<T> = std::result::Result<T, LensimError>;

/// Errors that can be returned by the various LENSIM functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LensimError {
    /// error while setting up the lens system or the simulator state
    Setup(String),
    /// degenerate imaging configuration (e.g. image at infinity)
    Imaging(String),
    /// errors while constructing lines or ray segments
    Geometry(String),
    /// errors while rendering a diagram frame
    Render(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for LensimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Setup(m) => {
                write!(f, "Setup:{m}")
            }
            Self::Imaging(m) => {
                write!(f, "Imaging:{m}")
            }
            Self::Geometry(m) => {
                write!(f, "Geometry:{m}")
            }
            Self::Render(m) => {
                write!(f, "Render:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Lensim Error:Other:{m}"),
        }
    }
}
impl Error for LensimError {}

impl std::convert::From<String> for LensimError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = LensimError::from("test".to_string());
        assert_eq!(error, LensimError::Other("test".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", LensimError::Setup("test".to_string())),
            "Setup:test"
        );
        assert_eq!(
            format!("{}", LensimError::Imaging("test".to_string())),
            "Imaging:test"
        );
        assert_eq!(
            format!("{}", LensimError::Geometry("test".to_string())),
            "Geometry:test"
        );
        assert_eq!(
            format!("{}", LensimError::Render("test".to_string())),
            "Render:test"
        );
        assert_eq!(
            format!("{}", LensimError::Console("test".to_string())),
            "Console:test"
        );
        assert_eq!(
            format!("{}", LensimError::Other("test".to_string())),
            "Lensim Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", LensimError::Setup("test".to_string())),
            "Setup(\"test\")"
        );
    }
}
