use log::SetLoggerError;
use std::error;
use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::result;

/// A broken structural invariant found while validating a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A key is not strictly between the keys of its ancestors.
    OutOfOrder,
    /// The root hangs off a red link.
    RedRoot,
    /// A node has a red right link.
    RedRightLink,
    /// More than two red links appear in a row.
    ConsecutiveRedLinks,
    /// The two subtrees of a node have different numbers of black links.
    UnbalancedBlackLinks { left: usize, right: usize },
}

impl error::Error for Violation {}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::OutOfOrder => write!(f, "keys are out of order"),
            Violation::RedRoot => write!(f, "root is red"),
            Violation::RedRightLink => write!(f, "node has a red right link"),
            Violation::ConsecutiveRedLinks => write!(f, "more than two consecutive red links"),
            Violation::UnbalancedBlackLinks { left, right } => write!(
                f,
                "unbalanced black links: {} on the left and {} on the right",
                left, right,
            ),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    ParseError(ParseIntError),
    LoggerError(SetLoggerError),
    InvariantError(Violation),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Error {
        Error::ParseError(err)
    }
}

impl From<SetLoggerError> for Error {
    fn from(err: SetLoggerError) -> Error {
        Error::LoggerError(err)
    }
}

impl From<Violation> for Error {
    fn from(err: Violation) -> Error {
        Error::InvariantError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::ParseError(error) => Some(error),
            Error::LoggerError(error) => Some(error),
            Error::InvariantError(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::ParseError(error) => write!(f, "{}", error),
            Error::LoggerError(error) => write!(f, "{}", error),
            Error::InvariantError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
