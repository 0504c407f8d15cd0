use httphead::{
    to_string, to_vec, to_writer, write_options, AsHeaderOption, Error, HeaderOption, Parameter,
    Parameters, Serializer,
};
use serde::Deserialize;
use std::io::{self, BufWriter, Write};

/// Accepts nothing once `closed` is set.
struct FlakySink {
    buf: Vec<u8>,
    closed: bool,
}

impl Write for FlakySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.closed {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away"));
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An option model owned elsewhere, with a borrowed name.
struct Codec<'a> {
    name: &'a [u8],
    params: Vec<Parameter>,
}

impl AsHeaderOption for Codec<'_> {
    fn name(&self) -> &[u8] {
        self.name
    }

    fn parameters(&self) -> &[Parameter] {
        &self.params
    }
}

#[derive(Deserialize)]
struct ExtensionConfig {
    extensions: Vec<HeaderOption>,
}

#[test]
fn test_response_header_line() {
    let opts = vec![
        HeaderOption::new("permessage-deflate").flag("server_no_context_takeover"),
        HeaderOption::new("x-webkit-deflate-frame"),
    ];

    let mut out = BufWriter::new(Vec::new());
    out.write_all(b"Sec-WebSocket-Extensions: ").unwrap();
    write_options(&mut out, &opts).unwrap();
    out.write_all(b"\r\n").unwrap();

    let bytes = out.into_inner().unwrap();
    println!("Header: {}", String::from_utf8_lossy(&bytes));
    assert_eq!(
        bytes,
        b"Sec-WebSocket-Extensions: permessage-deflate;server_no_context_takeover,x-webkit-deflate-frame\r\n"
    );
}

#[test]
fn test_write_does_not_flush() {
    let mut out = BufWriter::with_capacity(1024, Vec::new());
    write_options(&mut out, &[HeaderOption::new("gzip")]).unwrap();
    assert!(out.get_ref().is_empty());
    assert_eq!(out.buffer(), b"gzip");
}

#[test]
fn test_sink_failure_is_reported_unmodified() {
    let mut sink = FlakySink {
        buf: Vec::new(),
        closed: true,
    };
    let err = write_options(&mut sink, &[HeaderOption::new("a")]).unwrap_err();

    match err {
        Error::Io(e) => {
            assert_eq!(e.kind(), io::ErrorKind::ConnectionReset);
            assert_eq!(e.to_string(), "peer went away");
        }
        other => panic!("Expected Io error, got {:?}", other),
    }
    assert!(sink.buf.is_empty());
}

#[test]
fn test_to_writer_propagates_failure() {
    let sink = FlakySink {
        buf: Vec::new(),
        closed: true,
    };
    let result = to_writer(sink, &[HeaderOption::new("a")]);
    assert_eq!(
        result.unwrap_err().io_kind(),
        Some(io::ErrorKind::ConnectionReset)
    );
}

#[test]
fn test_serializer_streams_batches() {
    let mut sink = FlakySink {
        buf: Vec::new(),
        closed: false,
    };
    {
        let mut ser = Serializer::new(&mut sink);
        ser.write_options(&[HeaderOption::new("a"), HeaderOption::new("b")])
            .unwrap();
        ser.write_option(&HeaderOption::new("c").param("q", "0.1"))
            .unwrap();
        assert_eq!(ser.options_written(), 3);
    }
    assert_eq!(sink.buf, b"a,b,c;q=0.1");

    sink.closed = true;
    let mut ser = Serializer::new(&mut sink);
    assert!(ser.write_option(&HeaderOption::new("d")).is_err());
    assert_eq!(ser.options_written(), 0);
}

#[test]
fn test_custom_option_model() {
    let raw = b"br".to_vec();
    let codecs = vec![
        Codec {
            name: b"gzip",
            params: vec![Parameter::new("q", "1.0")],
        },
        Codec {
            name: &raw,
            params: vec![Parameter::flag("fast"), Parameter::new("level", "best effort")],
        },
    ];

    assert_eq!(
        to_string(&codecs).unwrap(),
        "gzip;q=1.0,br;fast;level=\"best effort\""
    );
}

#[test]
fn test_options_from_json_config() {
    let json = r#"{
        "extensions": [
            {"name": "permessage-deflate", "parameters": [
                {"key": "client_max_window_bits"},
                {"key": "server_max_window_bits", "value": "10"}
            ]},
            {"name": "x custom", "parameters": [{"key": "note", "value": "line1\r\nline2"}]}
        ]
    }"#;

    let config: ExtensionConfig = serde_json::from_str(json).unwrap();
    let bytes = to_vec(&config.extensions).unwrap();
    assert_eq!(
        bytes,
        &b"permessage-deflate;client_max_window_bits;server_max_window_bits=10,\"x custom\";note=\"line1\\\r\\\nline2\""[..]
    );
}

#[test]
fn test_parameters_collect() {
    let params: Parameters = vec![("a", "1"), ("b", ""), ("a", "2")]
        .into_iter()
        .map(|(k, v)| Parameter::new(k, v))
        .collect();
    let opt = HeaderOption::with_parameters("x", params);

    assert_eq!(opt.parameters().get("a"), Some(&b"1"[..]));
    assert_eq!(to_string(&[opt]).unwrap(), "x;a=1;b;a=2");
}

#[test]
fn test_display_matches_single_option_output() {
    let opt = HeaderOption::new("foo").param("bar", "a;b");
    assert_eq!(opt.to_string(), to_string(&[opt.clone()]).unwrap());
    assert_eq!(format!("{}", opt), "foo;bar=\"a;b\"");
}
