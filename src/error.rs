//! Error types for header option serialization.
//!
//! Serialization itself cannot fail: every byte sequence has a defined
//! encoding. Errors only come from the output sink, or from converting the
//! produced bytes into a `String`.
//!
//! ## Examples
//!
//! ```rust
//! use httphead::{to_string, Error, HeaderOption};
//!
//! let opts = vec![HeaderOption::new(vec![0xff_u8])];
//! let result = to_string(&opts);
//! assert!(matches!(result, Err(Error::Utf8(_))));
//! ```

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Represents all possible errors that can occur while writing header options.
#[derive(Debug, Error)]
pub enum Error {
    /// The output sink rejected a write. The sink's error is kept as is.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serialized output is not valid UTF-8.
    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

impl Error {
    /// Returns the kind of the underlying I/O error, if this is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use httphead::Error;
    /// use std::io;
    ///
    /// let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
    /// assert_eq!(err.io_kind(), Some(io::ErrorKind::BrokenPipe));
    /// ```
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::Io(e) => Some(e.kind()),
            Error::Utf8(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
