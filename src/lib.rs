//! # httphead
//!
//! A writer for HTTP header option lists such as `Sec-WebSocket-Extensions`,
//! `Accept-Encoding` or `Transfer-Encoding` values.
//!
//! ## What is an option list?
//!
//! Many header fields carry a comma separated list of named options, each
//! with optional `;`-separated parameters:
//!
//! ```text
//! values = 1#value
//! value  = token *( ";" param )
//! param  = token [ "=" (token | quoted-string) ]
//! ```
//!
//! This crate produces that form from arbitrary bytes. Anything that is not a
//! valid token is wrapped in a quoted-string, and control characters (CR and
//! LF included) and `"` are backslash-escaped, so caller-supplied data can
//! never break out of the header field.
//!
//! ## Key Features
//!
//! - **Byte Level**: names, keys and values are `&[u8]`, never decoded
//! - **Lazy Quoting**: plain tokens are copied straight to the sink
//! - **Any Sink**: writes into any `std::io::Write`, without flushing it
//! - **Any Model**: options are read through the [`AsHeaderOption`] trait
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use httphead::{to_string, HeaderOption};
//!
//! let extensions = vec![
//!     HeaderOption::new("permessage-deflate")
//!         .flag("client_no_context_takeover")
//!         .param("server_max_window_bits", "10"),
//!     HeaderOption::new("x-custom").param("label", "a \"quoted\" word"),
//! ];
//!
//! let header = to_string(&extensions).unwrap();
//! assert_eq!(
//!     header,
//!     r#"permessage-deflate;client_no_context_takeover;server_max_window_bits=10,x-custom;label="a \"quoted\" word""#
//! );
//! ```
//!
//! ### Writing into a buffered sink
//!
//! ```rust
//! use httphead::{write_options, HeaderOption};
//! use std::io::{BufWriter, Write};
//!
//! let mut out = BufWriter::new(Vec::new());
//! out.write_all(b"Sec-WebSocket-Extensions: ").unwrap();
//! write_options(&mut out, &[HeaderOption::new("foo").param("bar", "1")]).unwrap();
//! out.write_all(b"\r\n").unwrap();
//!
//! let bytes = out.into_inner().unwrap();
//! assert_eq!(bytes, b"Sec-WebSocket-Extensions: foo;bar=1\r\n");
//! ```
//!
//! ## Performance Characteristics
//!
//! - O(n) in the number of bytes written, in a single pass
//! - No allocation while writing; only the minimal runs between escapes are copied
//! - The byte class table is built at compile time
//!
//! ## Logging
//!
//! Entry points emit `trace` level [`tracing`] events. The crate installs no
//! subscriber.
//!
//! See the [`grammar`] module for the exact output format.

pub mod error;
pub mod grammar;
pub mod octet;
pub mod option;
pub mod ser;

pub use error::{Error, Result};
pub use option::{AsHeaderOption, HeaderOption, Parameter, Parameters};
pub use ser::{write_options, write_token_sanitized, Serializer};

use std::io;

/// Serialize an option list to a byte vector.
///
/// # Examples
///
/// ```rust
/// use httphead::{to_vec, HeaderOption};
///
/// let bytes = to_vec(&[HeaderOption::new("a").param("x", "1"), HeaderOption::new("b")]).unwrap();
/// assert_eq!(bytes, b"a;x=1,b");
/// ```
///
/// # Errors
///
/// Writing into a `Vec` does not fail; the `Result` mirrors the other entry points.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T: AsHeaderOption>(options: &[T]) -> Result<Vec<u8>> {
    // Name plus a couple of short parameters per option
    let mut buf = Vec::with_capacity(options.len() * 32);
    write_options(&mut buf, options)?;
    tracing::trace!(
        options = options.len(),
        bytes = buf.len(),
        "serialized header options"
    );
    Ok(buf)
}

/// Serialize an option list to a `String`.
///
/// Output built from UTF-8 input is always valid UTF-8, since escapes and
/// quotes are only ever inserted next to ASCII bytes.
///
/// # Examples
///
/// ```rust
/// use httphead::{to_string, HeaderOption};
///
/// let s = to_string(&[HeaderOption::new("a,b")]).unwrap();
/// assert_eq!(s, "\"a,b\"");
/// ```
///
/// # Errors
///
/// Returns [`Error::Utf8`] if any name, key or value is not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T: AsHeaderOption>(options: &[T]) -> Result<String> {
    let buf = to_vec(options)?;
    Ok(String::from_utf8(buf)?)
}

/// Serialize an option list into a writer.
///
/// The writer is not flushed.
///
/// # Examples
///
/// ```rust
/// use httphead::{to_writer, HeaderOption};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[HeaderOption::new("gzip")]).unwrap();
/// assert_eq!(buffer, b"gzip");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, options: &[T]) -> Result<()>
where
    W: io::Write,
    T: AsHeaderOption,
{
    write_options(&mut writer, options)
}
