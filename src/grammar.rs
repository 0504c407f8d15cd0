//! Header Option List Format
//!
//! This module documents the exact output produced by this library.
//!
//! # Overview
//!
//! Option lists appear in header fields such as `Sec-WebSocket-Extensions`
//! ([RFC 6455 section 9.1](https://tools.ietf.org/html/rfc6455#section-9.1)),
//! `Transfer-Encoding` and `Accept-Encoding`. Each element is an option name
//! followed by zero or more parameters.
//!
//! # Core Syntax
//!
//! ```text
//! values        = option *( "," option )
//! option        = token *( ";" param )
//! param         = token [ "=" (token | quoted-string) ]
//! token         = 1*tchar
//! quoted-string = DQUOTE *qcontent DQUOTE
//! qcontent      = qtext | escaped-char
//! escaped-char  = "\" OCTET
//! ```
//!
//! **Rules**:
//! - No whitespace is written around `,`, `;` or `=`
//! - No separator precedes the first option or follows the last one
//! - A parameter with an empty value is written as its key alone
//! - Parameters keep their order, duplicates included
//!
//! **Examples**:
//! ```text
//! foo                        # single option
//! a;x=1,b                    # parameter on the first option
//! permessage-deflate;client_no_context_takeover
//! "a,b"                      # name with a separator
//! foo;bar="va\"l"            # escaped quote
//! ```
//!
//! # Token Characters
//!
//! | Class | Bytes |
//! |-------|-------|
//! | Token | digits, letters and `! # $ % & ' * + - . ^ _ \| ~` plus backtick |
//! | Control | `0x00`-`0x1F`, `0x7F` |
//! | Separator | `()<>@,;:\"/[]?={}`, space, tab |
//! | Other | `0x80`-`0xFF` |
//!
//! See [`octet`](crate::octet) for the lookup table.
//!
//! # Quoting
//!
//! A name, key or value is written unchanged when every byte is a token
//! character. The empty string is also written unchanged, as nothing.
//! Otherwise the whole item is wrapped in `"`:
//!
//! | Byte | Inside quotes |
//! |------|---------------|
//! | Token character | as is |
//! | Space, separator other than `"` | as is |
//! | `0x80`-`0xFF` | as is |
//! | Control byte (tab, CR and LF included) | `\` followed by the byte |
//! | `"` | `\"` |
//! | `\` | as is, see below |
//!
//! Control bytes keep their raw value after the backslash: CR is written as
//! the two bytes `\` `0x0D`, not as `\r`. A CRLF pair therefore never appears
//! in the output, so no header line folding can be introduced.
//!
//! # Backslash
//!
//! A backslash in the input is not escaped. A parser that unescapes every
//! `\X` pair inside a quoted-string will read `"a\b"` back as `ab`. Inputs
//! containing backslashes only round-trip through parsers that leave
//! unrecognized escapes alone.
//!
//! # Character Encoding
//!
//! All processing is byte level. UTF-8 input yields UTF-8 output, since
//! quotes and escapes are only inserted next to ASCII bytes, but no input is
//! ever validated or decoded.
