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

//! Utility functions for HTML escaping.
//!
//! Text is escaped byte-wise, so input does not need to be valid UTF-8. Bytes
//! at or above `0x80` are always copied unchanged, which means valid UTF-8 in
//! gives valid UTF-8 out.
//!
//! A handful of inline tags are let through unescaped, see
//! [`escape_html_body`] for the full set of rules.

// Forbid unsafe code unless the SIMD feature is enabled.
#![cfg_attr(not(feature = "simd"), forbid(unsafe_code))]
#![warn(missing_debug_implementations)]

use std::collections::TryReserveError;

#[cfg(all(target_arch = "x86_64", feature = "simd"))]
mod simd;

/// Width of the chunks the bulk scan looks at.
const CHUNK_LEN: usize = 16;

/// This trait is a small abstraction over byte buffers that can fail to
/// grow, so that running out of memory is reported instead of aborting.
pub trait ByteWrite {
    type Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl ByteWrite for Vec<u8> {
    type Error = TryReserveError;

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.try_reserve(bytes.len())?;
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<W> ByteWrite for &'_ mut W
where
    W: ByteWrite,
{
    type Error = W::Error;

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }
}

/// Inline tags that are copied to the output verbatim.
static PASSTHROUGH_TAGS: [&[u8]; 14] = [
    b"<b>", b"<s>", b"<i>", b"<u>", b"</b>", b"</s>", b"</i>", b"</u>", b"<br>", b"<hr>",
    b"<code>", b"</code>", b"<tt>", b"</tt>",
];

// Bytes that can't be copied straight through by the byte-wise scanner.
// `\t` (9) is the only control character that passes unchanged.
static ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut b = 0;
    while b < 32 {
        table[b] = b != b'\t' as usize;
        b += 1;
    }
    table[b'-' as usize] = true;
    table[b'&' as usize] = true;
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table
};

/// Returns true when the bulk scan has to hand over to the byte-wise scanner.
/// This is a superset of the bytes in `ESCAPE_TABLE`.
#[inline]
#[cfg_attr(all(target_arch = "x86_64", feature = "simd"), allow(dead_code))]
fn is_watched(b: u8) -> bool {
    b < 0x20 || matches!(b, b'[' | b'-' | b'<' | b'>' | b'&')
}

/// Writes `text` to `w`, escaped for use in an HTML body.
///
/// Rules, applied left to right:
///
/// * `---` becomes `&mdash;` and `--` becomes `&ndash;`.
/// * `&lt;` and `&gt;` are kept as they are, any other `&` becomes `&amp;`.
/// * `<b>`, `<s>`, `<i>`, `<u>` (and their closing forms), `<br>`, `<hr>`,
///   `<code>`, `</code>`, `<tt>` and `</tt>` are kept, any other `<` becomes
///   `&lt;`.
/// * `>` becomes `&gt;`.
/// * `\r` and form feed become a space.
/// * All other ASCII control characters except tab are dropped.
///
/// Leading 16 byte chunks that contain none of the interesting bytes are
/// copied in bulk before the byte-wise scanner takes over. The result is
/// always identical to [`escape_html_body_scalar`].
pub fn escape_html_body<W: ByteWrite>(mut w: W, text: &[u8]) -> Result<(), W::Error> {
    let clean = clean_prefix_len(text);
    w.write_bytes(&text[..clean])?;
    escape_html_body_scalar(w, &text[clean..])
}

/// Byte-at-a-time version of [`escape_html_body`].
pub fn escape_html_body_scalar<W: ByteWrite>(mut w: W, text: &[u8]) -> Result<(), W::Error> {
    let mut mark = 0;
    let mut i = 0;

    while i < text.len() {
        match text[i..].iter().position(|&c| ESCAPE_TABLE[c as usize]) {
            Some(pos) => i += pos,
            None => break,
        }
        let rest = &text[i..];
        let (replacement, consumed): (&[u8], usize) = match rest[0] {
            b'-' if rest.starts_with(b"---") => (b"&mdash;", 3),
            b'-' if rest.starts_with(b"--") => (b"&ndash;", 2),
            b'-' => (b"-", 1),
            b'&' if rest.starts_with(b"&lt;") || rest.starts_with(b"&gt;") => (&rest[..4], 4),
            b'&' => (b"&amp;", 1),
            b'<' => match PASSTHROUGH_TAGS.iter().find(|tag| rest.starts_with(tag)) {
                Some(tag) => (*tag, tag.len()),
                None => (b"&lt;", 1),
            },
            b'>' => (b"&gt;", 1),
            b'\r' | b'\x0c' => (b" ", 1),
            _ => (b"", 1),
        };
        w.write_bytes(&text[mark..i])?;
        w.write_bytes(replacement)?;
        i += consumed;
        mark = i;
    }
    w.write_bytes(&text[mark..])
}

/// Length of the longest prefix made of whole chunks that need no escaping.
fn clean_prefix_len(bytes: &[u8]) -> usize {
    #[cfg(all(target_arch = "x86_64", feature = "simd"))]
    {
        simd::clean_prefix_len(bytes)
    }

    #[cfg(not(all(target_arch = "x86_64", feature = "simd")))]
    {
        bytes
            .chunks_exact(CHUNK_LEN)
            .take_while(|chunk| !chunk.iter().any(|&b| is_watched(b)))
            .count()
            * CHUNK_LEN
    }
}
