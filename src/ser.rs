//! Header option serialization.
//!
//! This module writes option lists in the form
//!
//! ```text
//! values = 1#value
//! value  = token *( ";" param )
//! param  = token [ "=" (token | quoted-string) ]
//! ```
//!
//! Names, keys and values go through [`write_token_sanitized`], which emits
//! them unchanged when they are valid tokens and as a quoted-string otherwise.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use httphead::{to_string, HeaderOption};
//!
//! let opts = vec![HeaderOption::new("a").param("x", "1"), HeaderOption::new("b")];
//! assert_eq!(to_string(&opts).unwrap(), "a;x=1,b");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! A [`Serializer`] keeps track of the separator between calls, so options
//! can be written one at a time into any `io::Write`:
//!
//! ```rust
//! use httphead::{HeaderOption, Serializer};
//! use std::io::BufWriter;
//!
//! let mut serializer = Serializer::new(BufWriter::new(Vec::new()));
//! serializer.write_option(&HeaderOption::new("gzip")).unwrap();
//! serializer.write_option(&HeaderOption::new("br").param("q", "0.5")).unwrap();
//!
//! let buf = serializer.into_inner().into_inner().unwrap();
//! assert_eq!(buf, b"gzip,br;q=0.5");
//! ```

use crate::octet::OCTET_TYPES;
use crate::{AsHeaderOption, Result};
use std::io;

/// Writes header options into an `io::Write` sink.
///
/// The serializer only appends to the sink. Buffering and flushing stay with
/// the caller.
pub struct Serializer<W> {
    writer: W,
    written: usize,
}

impl<W: io::Write> Serializer<W> {
    pub fn new(writer: W) -> Self {
        Serializer { writer, written: 0 }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Number of options written through this serializer so far.
    #[must_use]
    pub fn options_written(&self) -> usize {
        self.written
    }

    /// Writes a single option, preceded by `,` unless it is the first one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the sink fails. The sink
    /// may then hold a partially written option.
    pub fn write_option<T>(&mut self, option: &T) -> Result<()>
    where
        T: AsHeaderOption + ?Sized,
    {
        if self.written > 0 {
            self.writer.write_all(b",")?;
        }

        write_token_sanitized(&mut self.writer, option.name())?;

        for p in option.parameters() {
            self.writer.write_all(b";")?;
            write_token_sanitized(&mut self.writer, p.key())?;
            if !p.value().is_empty() {
                self.writer.write_all(b"=")?;
                write_token_sanitized(&mut self.writer, p.value())?;
            }
        }

        self.written += 1;
        Ok(())
    }

    /// Writes every option in order, continuing the list of any options
    /// already written through this serializer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) on the first sink failure.
    pub fn write_options<T: AsHeaderOption>(&mut self, options: &[T]) -> Result<()> {
        for option in options {
            self.write_option(option)?;
        }
        Ok(())
    }
}

/// Writes `options` to `dest` as a comma separated option list.
///
/// An empty slice writes nothing.
///
/// # Examples
///
/// ```rust
/// use httphead::{write_options, HeaderOption};
///
/// let mut buf = Vec::new();
/// let opts = vec![HeaderOption::new("foo").param("bar", "a,b"), HeaderOption::new("baz")];
/// write_options(&mut buf, &opts).unwrap();
/// assert_eq!(buf, br#"foo;bar="a,b",baz"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the sink fails.
pub fn write_options<W, T>(dest: &mut W, options: &[T]) -> Result<()>
where
    W: io::Write + ?Sized,
    T: AsHeaderOption,
{
    tracing::trace!(options = options.len(), "writing header options");
    Serializer::new(dest).write_options(options)
}

/// Writes `bytes` as a token if possible, or as a quoted-string otherwise.
///
/// Quoting starts at the first non-token byte. Control bytes and `"` are
/// escaped with a backslash, so CR and LF never reach the sink raw and no
/// header field continuation can be produced. Space and tab are quoted but
/// not escaped; bytes above 0x7F are quoted and copied through.
///
/// The backslash itself is not escaped.
///
/// # Examples
///
/// ```rust
/// use httphead::write_token_sanitized;
///
/// let mut buf = Vec::new();
/// write_token_sanitized(&mut buf, b"token").unwrap();
/// assert_eq!(buf, b"token");
///
/// buf.clear();
/// write_token_sanitized(&mut buf, b"a b").unwrap();
/// assert_eq!(buf, b"\"a b\"");
///
/// buf.clear();
/// write_token_sanitized(&mut buf, b"va\"l\r\n").unwrap();
/// assert_eq!(buf, b"\"va\\\"l\\\r\\\n\"");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the sink fails.
pub fn write_token_sanitized<W>(dest: &mut W, bytes: &[u8]) -> Result<()>
where
    W: io::Write + ?Sized,
{
    let mut quoted = false;
    let mut pos = 0;

    for (i, &c) in bytes.iter().enumerate() {
        let class = OCTET_TYPES[usize::from(c)];

        if !class.is_token() && !quoted {
            quoted = true;
            dest.write_all(b"\"")?;
        }
        if class.is_control() || c == b'"' {
            if !quoted {
                quoted = true;
                dest.write_all(b"\"")?;
            }
            dest.write_all(&bytes[pos..i])?;
            dest.write_all(&[b'\\', c])?;
            pos = i + 1;
        }
    }

    if quoted {
        dest.write_all(&bytes[pos..])?;
        dest.write_all(b"\"")?;
    } else {
        dest.write_all(bytes)?;
    }
    Ok(())
}
