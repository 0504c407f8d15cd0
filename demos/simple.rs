//! Writing a `Sec-WebSocket-Extensions` response header.
//!
//! Run with: cargo run --example simple

use httphead::{write_options, HeaderOption};
use std::error::Error;
use std::io::{self, BufWriter, Write};

fn main() -> Result<(), Box<dyn Error>> {
    let extensions = vec![
        HeaderOption::new("permessage-deflate")
            .flag("client_no_context_takeover")
            .param("server_max_window_bits", "10"),
        // Caller-supplied text is quoted and escaped, never written raw
        HeaderOption::new("x-note").param("text", "hello, \"world\"\r\nInjected: yes"),
    ];

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    out.write_all(b"Sec-WebSocket-Extensions: ")?;
    write_options(&mut out, &extensions)?;
    out.write_all(b"\n")?;
    out.flush()?;

    Ok(())
}
