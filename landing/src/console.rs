//! Browser console sink for `tracing`.
//!
//! The fmt layer writes one formatted event per writer; the writer buffers
//! it and hands the line to the console method matching the event level
//! when dropped.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// Hands out a [`ConsoleWriter`] per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let Some(line) = take_line(&mut self.buf) else {
            return Ok(());
        };
        let line = JsValue::from_str(&line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::debug_1(&line),
            _ => web_sys::console::log_1(&line),
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

/// Drain the buffer into one console line, without the trailing newline.
fn take_line(buf: &mut Vec<u8>) -> Option<String> {
    if buf.is_empty() {
        return None;
    }
    let text = String::from_utf8_lossy(buf).trim_end().to_string();
    buf.clear();
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_line_strips_newline_and_drains() {
        let mut buf = b"INFO mounting landing page\n".to_vec();
        assert_eq!(
            take_line(&mut buf).as_deref(),
            Some("INFO mounting landing page")
        );
        assert!(buf.is_empty());
        assert_eq!(take_line(&mut buf), None);
    }

    #[test]
    fn take_line_skips_blank_output() {
        let mut buf = b"\n \n".to_vec();
        assert_eq!(take_line(&mut buf), None);
        assert!(buf.is_empty());
    }
}
