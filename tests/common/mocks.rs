//! Mock versions of std::fs::File and of the JSON emission sink.
use mockall::mock;

use std::io::{self, Write};

use temporal_json_rs::{core::generator::JsonGenerator, error::CodecError};

mock! {
    pub File {}
    impl Write for File {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}

mock! {
    pub Generator {}
    impl JsonGenerator for Generator {
        fn write_start_array(&mut self) -> Result<(), CodecError>;
        fn write_end_array(&mut self) -> Result<(), CodecError>;
        fn write_number(&mut self, value: i64) -> Result<(), CodecError>;
        fn write_string(&mut self, value: &str) -> Result<(), CodecError>;
    }
}
