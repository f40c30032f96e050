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

//! Converter from a small, line oriented markdown dialect to HTML.
//!
//! The dialect has headings (`#`), bullet lists (`-`, `+`, `*`, `o` or `•`
//! followed by a space), numbered lists (`1.`), quotes (`>`), pipe tables
//! (`|`), fenced code blocks (a line of three backticks) and paragraphs.
//! List nesting follows indentation. Inline markup is limited to a fixed
//! set of HTML tags that are passed through, see [`drmd_escape`].
//!
//! Conversion happens in two steps: [`parse`] builds a [`Document`] tree that
//! borrows all of its text from the input, and [`html::push_html`] renders
//! it. [`convert`] does both.
//!
//! # Example
//! ```rust
//! let html = drmd::to_html("# Groceries\n- eggs\n- milk\n").unwrap();
//! assert_eq!(html, "<h1> Groceries</h1>\n<ul>\n<li>eggs<li>milk</ul>\n");
//! ```
//!
//! Input is treated as bytes. It does not need to be valid UTF-8, and NUL
//! bytes end a line just like `\n` does.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

pub mod html;

mod firstpass;
mod scanners;
mod tree;

pub use crate::tree::TreeIndex;
use crate::tree::Tree;

pub use drmd_escape;

/// Kind of a node in the document tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
    /// The root. There is exactly one per document.
    #[default]
    Document,
    /// A run of text. Its content is [`Document::text`].
    Text,
    Paragraph,
    Table,
    TableRow,
    BulletList,
    NumberedList,
    ListItem,
    Quote,
    CodeBlock,
    /// A heading. `level` is between 1 and 9, and the title is
    /// [`Document::text`].
    Heading { level: u8 },
}

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Item<'a> {
    pub kind: NodeKind,
    /// Text of a `Text` node, or the title of a heading. Empty otherwise.
    pub header: &'a [u8],
}

impl<'a> fmt::Debug for Item<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Text | NodeKind::Heading { .. } => write!(
                f,
                "{:?} {:?}",
                self.kind,
                String::from_utf8_lossy(self.header)
            ),
            kind => write!(f, "{:?}", kind),
        }
    }
}

/// Errors that abort a conversion.
///
/// No partial output is ever produced: whatever was built up to the point of
/// failure is dropped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("out of memory")]
    OutOfMemory,
    #[error("list nesting deeper than 16 levels")]
    NestingTooDeep,
    #[error("document nesting deeper than 20 levels")]
    TooDeep,
}

impl Error {
    /// Integer signal for this error, for process exit codes and the C API.
    ///
    /// Every variant is a kind of resource exhaustion, so they all share one
    /// code.
    pub fn code(&self) -> i32 {
        match self {
            Error::OutOfMemory | Error::NestingTooDeep | Error::TooDeep => 1,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

/// A parsed document. All text is borrowed from the input.
#[derive(Clone)]
pub struct Document<'a> {
    tree: Tree<Item<'a>>,
    root: TreeIndex,
}

impl<'a> Document<'a> {
    pub fn root(&self) -> TreeIndex {
        self.root
    }

    pub fn kind(&self, ix: TreeIndex) -> NodeKind {
        self.tree[ix].item.kind
    }

    /// Text of a `Text` node or title of a `Heading`; empty for other kinds.
    pub fn text(&self, ix: TreeIndex) -> &'a [u8] {
        self.tree[ix].item.header
    }

    /// Children of `ix`, in document order.
    pub fn children(&self, ix: TreeIndex) -> impl Iterator<Item = TreeIndex> + '_ {
        self.tree.children(ix)
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.tree.len()
    }
}

impl<'a> fmt::Debug for Document<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

/// Builds the document tree for `text`.
pub fn parse(text: &[u8]) -> Result<Document<'_>, Error> {
    let (tree, root) = firstpass::run_first_pass(text)?;
    Ok(Document { tree, root })
}

/// Converts `text` to HTML.
pub fn convert(text: &[u8]) -> Result<Vec<u8>, Error> {
    let doc = parse(text)?;
    let mut out = Vec::new();
    html::push_html(&mut out, &doc)?;
    Ok(out)
}

/// Converts `text` to an HTML string.
///
/// The output is valid UTF-8 whenever the input is. Invalid sequences that
/// came from the input are replaced with U+FFFD.
pub fn to_html(text: &str) -> Result<String, Error> {
    let out = convert(text.as_bytes())?;
    Ok(String::from_utf8(out)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}
