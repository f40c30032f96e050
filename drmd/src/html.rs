// Copyright 2015 Google Inc. All rights reserved.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! HTML renderer that takes a parsed [`Document`] as input.
//!
//! Closing tags that HTML lets you omit (`</p>`, `</li>`, `</tr>`, `</td>`
//! and friends) are not written.

use std::io;

use drmd_escape::{escape_html_body, ByteWrite};
use log::debug;

use crate::{Document, Error, NodeKind, TreeIndex};

/// Nodes deeper than this abort rendering. The root is at depth zero.
pub const MAX_DEPTH: usize = 20;

/// Bytes of output reserved per node before rendering starts.
const BYTES_PER_NODE: usize = 120;

struct HtmlWriter<'a, 'b> {
    doc: &'b Document<'a>,
    out: &'b mut Vec<u8>,
}

impl<'a, 'b> HtmlWriter<'a, 'b> {
    fn new(doc: &'b Document<'a>, out: &'b mut Vec<u8>) -> Self {
        Self { doc, out }
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        Ok(self.out.write_bytes(bytes)?)
    }

    fn write_escaped(&mut self, ix: TreeIndex) -> Result<(), Error> {
        Ok(escape_html_body(&mut *self.out, self.doc.text(ix))?)
    }

    fn write_children(&mut self, ix: TreeIndex, depth: usize) -> Result<(), Error> {
        let doc = self.doc;
        for child in doc.children(ix) {
            self.write_node(child, depth + 1)?;
        }
        Ok(())
    }

    fn write_children_separated(
        &mut self,
        ix: TreeIndex,
        depth: usize,
        separator: &[u8],
    ) -> Result<(), Error> {
        let doc = self.doc;
        for (i, child) in doc.children(ix).enumerate() {
            if i != 0 {
                self.write(separator)?;
            }
            self.write_node(child, depth + 1)?;
        }
        Ok(())
    }

    fn write_node(&mut self, ix: TreeIndex, depth: usize) -> Result<(), Error> {
        if depth > MAX_DEPTH {
            return Err(Error::TooDeep);
        }
        match self.doc.kind(ix) {
            NodeKind::Document => self.write_children(ix, depth),
            NodeKind::Text => self.write_escaped(ix),
            NodeKind::Paragraph => {
                self.write(b"<p>")?;
                self.write_children_separated(ix, depth, b"\n")
            }
            NodeKind::BulletList => {
                self.write(b"<ul>\n")?;
                self.write_children(ix, depth)?;
                self.write(b"</ul>\n")
            }
            NodeKind::NumberedList => {
                self.write(b"<ol>\n")?;
                self.write_children(ix, depth)?;
                self.write(b"</ol>\n")
            }
            NodeKind::ListItem => {
                self.write(b"<li>")?;
                self.write_children_separated(ix, depth, b" ")
            }
            NodeKind::Table => self.write_table(ix, depth),
            NodeKind::TableRow => {
                self.write(b"<tr>")?;
                self.write_cells(ix, depth, b"<td>")
            }
            NodeKind::Quote => {
                self.write(b"<blockquote>\n")?;
                self.write_children_separated(ix, depth, b"\n")?;
                self.write(b"</blockquote>\n")
            }
            NodeKind::CodeBlock => {
                self.write(b"<pre>")?;
                let doc = self.doc;
                for child in doc.children(ix) {
                    self.write_node(child, depth + 1)?;
                    self.write(b"\n")?;
                }
                self.write(b"</pre>\n")
            }
            NodeKind::Heading { level } => {
                let digit = b'0' + level;
                self.write(&[b'<', b'h', digit, b'>'])?;
                self.write_escaped(ix)?;
                self.write(&[b'<', b'/', b'h', digit, b'>', b'\n'])
            }
        }
    }

    /// The first row is the header. Its cells are written here directly,
    /// one level below the table.
    fn write_table(&mut self, ix: TreeIndex, depth: usize) -> Result<(), Error> {
        self.write(b"<table>\n<thead>\n")?;
        let doc = self.doc;
        let mut rows = doc.children(ix);
        if let Some(head) = rows.next() {
            self.write(b"<tr>\n")?;
            self.write_cells(head, depth, b"<th>")?;
        }
        self.write(b"\n<tbody>\n")?;
        for row in rows {
            self.write_node(row, depth + 1)?;
        }
        self.write(b"</table>\n")
    }

    /// Writes each child of `row` at `depth + 1`, each behind `tag`.
    fn write_cells(&mut self, row: TreeIndex, depth: usize, tag: &[u8]) -> Result<(), Error> {
        let doc = self.doc;
        for cell in doc.children(row) {
            self.write(tag)?;
            self.write_node(cell, depth + 1)?;
        }
        Ok(())
    }
}

/// Renders `doc` as HTML and appends it to `out`.
///
/// On error `out` is left as it was.
///
/// # Examples
///
/// ```
/// let doc = drmd::parse(b"|a|b\n|1|2\n").unwrap();
/// let mut html = Vec::new();
/// drmd::html::push_html(&mut html, &doc).unwrap();
/// assert_eq!(
///     html,
///     b"<table>\n<thead>\n<tr>\n<th>a<th>b\n<tbody>\n<tr><td>1<td>2</table>\n"
/// );
/// ```
pub fn push_html(out: &mut Vec<u8>, doc: &Document<'_>) -> Result<(), Error> {
    let start = out.len();
    let reserve = doc.node_count().saturating_mul(BYTES_PER_NODE);
    let result = match out.try_reserve(reserve) {
        Ok(()) => HtmlWriter::new(doc, &mut *out).write_node(doc.root(), 0),
        Err(err) => Err(err.into()),
    };
    match result {
        Ok(()) => {
            debug!("rendered {} bytes of html", out.len() - start);
            Ok(())
        }
        Err(err) => {
            out.truncate(start);
            Err(err)
        }
    }
}

/// Renders `doc` as HTML and writes it to an I/O stream.
///
/// The whole document is rendered before anything is written, so nothing
/// reaches `writer` when rendering fails. That failure comes back as an
/// [`io::Error`] wrapping the [`Error`].
pub fn write_html_io<W>(mut writer: W, doc: &Document<'_>) -> io::Result<()>
where
    W: io::Write,
{
    let mut buf = Vec::new();
    push_html(&mut buf, doc).map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    writer.write_all(&buf)
}
