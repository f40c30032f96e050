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

//! Scanners for lines and line markers.

use memchr::memchr2;

/// The UTF-8 encoding of U+2022 BULLET followed by a space.
const UNICODE_BULLET: &[u8] = "\u{2022} ".as_bytes();

/// Bounds of one logical line of input.
///
/// `indent` counts the spaces, tabs and carriage returns at `start`; they
/// are still part of the line, so `start + indent` is where the content
/// begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Line {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) indent: usize,
}

impl Line {
    pub(crate) fn content_start(&self) -> usize {
        self.start + self.indent
    }

    /// A line is blank when its indentation runs all the way to its end.
    pub(crate) fn is_blank(&self) -> bool {
        self.content_start() == self.end
    }
}

/// Pull-based line splitter over the whole input.
///
/// Both `\n` and NUL end a line, and nothing is ever read past the end of
/// the slice.
#[derive(Clone, Debug)]
pub(crate) struct LineScanner<'a> {
    bytes: &'a [u8],
    ix: usize,
}

impl<'a> LineScanner<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        LineScanner { bytes, ix: 0 }
    }

    /// Computes the bounds of the line at the cursor without moving it.
    /// Returns `None` at end of input.
    pub(crate) fn analyze_line(&self) -> Option<Line> {
        if self.ix >= self.bytes.len() {
            return None;
        }
        let start = self.ix;
        let indent = scan_indent(&self.bytes[start..]);
        let content_start = start + indent;
        let end = memchr2(b'\n', b'\0', &self.bytes[content_start..])
            .map_or(self.bytes.len(), |n| content_start + n);
        Some(Line { start, end, indent })
    }

    /// Moves the cursor past the terminator of `line`.
    pub(crate) fn advance(&mut self, line: &Line) {
        self.ix = if line.end == self.bytes.len() {
            line.end
        } else {
            line.end + 1
        };
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let line = self.analyze_line()?;
        self.advance(&line);
        Some(line)
    }
}

/// Classification of a non-blank line by its first content byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineKind {
    /// `marker_len` is the number of `#` bytes.
    Heading { marker_len: usize },
    Bullet { marker_len: usize },
    Numbered { marker_len: usize },
    Table,
    Quote,
    Fence,
    Paragraph,
}

pub(crate) fn is_indent_char(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r')
}

pub(crate) fn is_ascii_whitespace(c: u8) -> bool {
    (0x09..=0x0d).contains(&c) || c == b' '
}

pub(crate) fn scan_while<F>(data: &[u8], mut f: F) -> usize
where
    F: FnMut(u8) -> bool,
{
    data.iter().take_while(|&&c| f(c)).count()
}

pub(crate) fn scan_rev_while<F>(data: &[u8], mut f: F) -> usize
where
    F: FnMut(u8) -> bool,
{
    data.iter().rev().take_while(|&&c| f(c)).count()
}

pub(crate) fn scan_ch_repeat(data: &[u8], c: u8) -> usize {
    scan_while(data, |x| x == c)
}

pub(crate) fn scan_indent(data: &[u8]) -> usize {
    scan_while(data, is_indent_char)
}

/// Returns `bytes` without leading and trailing ASCII whitespace.
pub(crate) fn stripped(bytes: &[u8]) -> &[u8] {
    let start = scan_while(bytes, is_ascii_whitespace);
    let rest = &bytes[start..];
    let end = rest.len() - scan_rev_while(rest, is_ascii_whitespace);
    &rest[..end]
}

/// Returns true when the content after the indentation is exactly three
/// backticks. Trailing whitespace, `\r` included, makes it a paragraph.
pub(crate) fn is_code_fence(content: &[u8]) -> bool {
    content == b"```"
}

/// Closing fences may carry trailing whitespace.
pub(crate) fn is_closing_fence(content: &[u8]) -> bool {
    stripped(content) == b"```"
}

/// Scan a bullet marker: U+2022 or one of `+-*o`, followed by a space.
///
/// Returns the number of bytes in the marker, not counting the space.
pub(crate) fn scan_bullet_marker(data: &[u8]) -> Option<usize> {
    if data.starts_with(UNICODE_BULLET) {
        // the space stays part of the item text and is stripped later
        return Some(UNICODE_BULLET.len());
    }
    match data {
        [b'+' | b'-' | b'*' | b'o', b' ', ..] => Some(1),
        _ => None,
    }
}

/// Scan a number followed by a `.`.
///
/// Returns the number of bytes in the marker, including the dot.
pub(crate) fn scan_numbered_marker(data: &[u8]) -> Option<usize> {
    let digits = scan_while(data, |c| c.is_ascii_digit());
    if digits > 0 && data.get(digits) == Some(&b'.') {
        Some(digits + 1)
    } else {
        None
    }
}

/// Classifies a line from its content, which starts at the first byte after
/// the indentation and stops before the line terminator.
pub(crate) fn scan_line_kind(content: &[u8]) -> LineKind {
    let first = match content.first() {
        Some(&c) => c,
        None => return LineKind::Paragraph,
    };
    match first {
        b'#' => LineKind::Heading {
            marker_len: scan_ch_repeat(content, b'#'),
        },
        b'|' => LineKind::Table,
        b'>' => LineKind::Quote,
        b'`' if is_code_fence(content) => LineKind::Fence,
        b'0'..=b'9' => match scan_numbered_marker(content) {
            Some(marker_len) => LineKind::Numbered { marker_len },
            None => LineKind::Paragraph,
        },
        _ => match scan_bullet_marker(content) {
            Some(marker_len) => LineKind::Bullet { marker_len },
            None => LineKind::Paragraph,
        },
    }
}
