//! Sink implementations

pub mod file;
pub mod file_writer;
pub mod null;
pub mod std_stream;
pub mod xml;

pub use file::FileSink;
pub use file_writer::{FileWriter, DEFAULT_REOPEN_INTERVAL};
pub use null::NullSink;
pub use std_stream::{StdSink, Stream};
pub use xml::XmlSink;

pub use crate::core::Sink;
