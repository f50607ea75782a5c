// adopted from libcore's `fmt/builders.rs`

use std::io::{Result, Write};

/// Prefixes every line written through it with a fixed indent
pub(crate) struct PadAdapter<'a> {
    buf: &'a mut (dyn Write + 'a),
    indent: &'static str,
    on_newline: bool,
}

impl<'a> PadAdapter<'a> {
    /// Indent by four spaces
    pub(crate) fn wrap<'fmt: 'a>(buf: &'fmt mut (dyn Write + 'a)) -> Self {
        PadAdapter::with_indent(buf, "    ")
    }

    pub(crate) fn with_indent<'fmt: 'a>(buf: &'fmt mut (dyn Write + 'a), indent: &'static str) -> Self {
        PadAdapter {
            buf,
            indent,
            on_newline: true,
        }
    }
}

impl Write for PadAdapter<'_> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        for line in data.split_inclusive(|byte| *byte == b'\n') {
            if self.on_newline {
                self.buf.write_all(self.indent.as_bytes())?;
            }
            self.buf.write_all(line)?;
            self.on_newline = line.ends_with(b"\n");
        }

        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        self.buf.flush()
    }
}
