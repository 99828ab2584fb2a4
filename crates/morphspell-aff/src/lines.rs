// Byte-oriented line reader shared by both parsers.
//
// Rule files and word lists are in the dictionary encoding, which need not
// be UTF-8, so lines are handled as raw bytes.

use std::io::BufRead;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(crate) struct ByteLines<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> ByteLines<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
        }
    }

    /// Next line without its terminator, with its 1-based number.
    pub(crate) fn next_line(&mut self) -> std::io::Result<Option<(usize, &[u8])>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        let mut line = self.buf.as_slice();
        if self.line_no == 1 {
            line = line.strip_prefix(UTF8_BOM).unwrap_or(line);
        }
        while let [rest @ .., b'\n' | b'\r'] = line {
            line = rest;
        }
        Ok(Some((self.line_no, line)))
    }
}

/// Whitespace separated fields of a line.
pub(crate) fn fields(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|b| b.is_ascii_whitespace()).filter(|f| !f.is_empty())
}

/// Lossy text for error messages and directive names.
pub(crate) fn text(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}
