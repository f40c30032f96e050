//! The first pass resolves all block structure, building the tree line by
//! line with no lookahead.

use log::{debug, trace};
use memchr::memchr;

use crate::scanners::{is_closing_fence, scan_line_kind, stripped, Line, LineKind, LineScanner};
use crate::tree::{Tree, TreeIndex};
use crate::{Error, Item, NodeKind};

/// Maximum number of simultaneously open list levels.
pub(crate) const MAX_LIST_DEPTH: usize = 16;

/// Heading levels above this are clamped, so the level is a single digit.
const MAX_HEADING_LEVEL: usize = 9;

/// Runs the first pass, which builds the whole document tree.
pub(crate) fn run_first_pass(text: &[u8]) -> Result<(Tree<Item<'_>>, TreeIndex), Error> {
    // This is a very naive heuristic for the number of nodes
    // we'll need.
    let start_capacity = std::cmp::max(128, text.len() / 32);
    let mut tree = Tree::with_capacity(start_capacity)?;
    let root = tree.create_node(Item {
        kind: NodeKind::Document,
        header: b"",
    })?;
    let mut first_pass = FirstPass {
        text,
        tree,
        lines: LineScanner::new(text),
        parent: root,
        state: BlockState::None,
        stack: ListStack::new(),
        normal_indent: None,
    };
    first_pass.run()?;
    debug!("first pass built {} nodes", first_pass.tree.len());
    Ok((first_pass.tree, root))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    fn node_kind(self) -> NodeKind {
        match self {
            ListKind::Bullet => NodeKind::BulletList,
            ListKind::Numbered => NodeKind::NumberedList,
        }
    }
}

/// What the previous non-blank line left open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlockState {
    None,
    Paragraph(TreeIndex),
    /// The open lists themselves live on the `ListStack`.
    List,
    Table(TreeIndex),
    Quote(TreeIndex),
}

/// One open list level.
#[derive(Clone, Copy, Debug)]
struct StackEntry {
    list: TreeIndex,
    /// Most recent item of `list`.
    item: TreeIndex,
    indent: usize,
    kind: ListKind,
}

/// Fixed capacity stack of open list levels, innermost last.
#[derive(Debug)]
struct ListStack {
    entries: [Option<StackEntry>; MAX_LIST_DEPTH],
    len: usize,
}

impl ListStack {
    fn new() -> Self {
        ListStack {
            entries: [None; MAX_LIST_DEPTH],
            len: 0,
        }
    }

    fn get(&self, depth: usize) -> Option<StackEntry> {
        self.entries[..self.len].get(depth).copied().flatten()
    }

    fn top(&self) -> Option<StackEntry> {
        self.len.checked_sub(1).and_then(|depth| self.get(depth))
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Depth of the innermost level whose indentation is at most `indent`.
    fn innermost_at_or_below(&self, indent: usize) -> Option<usize> {
        (0..self.len)
            .rev()
            .find(|&depth| self.get(depth).map_or(false, |e| e.indent <= indent))
    }

    /// Stores `entry` at `depth`, dropping everything above it.
    fn set(&mut self, depth: usize, entry: StackEntry) -> Result<(), Error> {
        let slot = self.entries.get_mut(depth).ok_or(Error::NestingTooDeep)?;
        *slot = Some(entry);
        if depth + 1 != self.len {
            trace!("list stack depth {} -> {}", self.len, depth + 1);
        }
        self.len = depth + 1;
        Ok(())
    }

    fn clear(&mut self) {
        self.len = 0;
    }
}

struct FirstPass<'a> {
    text: &'a [u8],
    tree: Tree<Item<'a>>,
    lines: LineScanner<'a>,
    /// Container for every top level block.
    parent: TreeIndex,
    state: BlockState,
    stack: ListStack,
    /// Indentation of the first non-blank line. Lines at this indentation
    /// are plain prose, never list continuations.
    normal_indent: Option<usize>,
}

impl<'a> FirstPass<'a> {
    fn run(&mut self) -> Result<(), Error> {
        let text = self.text;
        while let Some(line) = self.lines.next() {
            if line.is_blank() {
                trace!("blank line at {}", line.start);
                self.reset();
                continue;
            }
            self.normal_indent.get_or_insert(line.indent);

            let content = &text[line.content_start()..line.end];
            let kind = scan_line_kind(content);
            trace!("line at {} indent {}: {:?}", line.start, line.indent, kind);
            match kind {
                LineKind::Heading { marker_len } => self.parse_heading(content, marker_len)?,
                LineKind::Fence => self.parse_fenced_code()?,
                LineKind::Bullet { marker_len } => {
                    self.parse_list_item(line, content, marker_len, ListKind::Bullet)?
                }
                LineKind::Numbered { marker_len } => {
                    self.parse_list_item(line, content, marker_len, ListKind::Numbered)?
                }
                LineKind::Table => self.parse_table_row(content)?,
                LineKind::Quote => self.parse_quote_line(line)?,
                LineKind::Paragraph => self.parse_paragraph_line(line, content)?,
            }
        }
        Ok(())
    }

    fn append(&mut self, parent: TreeIndex, kind: NodeKind) -> Result<TreeIndex, Error> {
        Ok(self.tree.append_child(parent, Item { kind, header: b"" })?)
    }

    fn append_text(&mut self, parent: TreeIndex, header: &'a [u8]) -> Result<TreeIndex, Error> {
        let item = Item {
            kind: NodeKind::Text,
            header,
        };
        Ok(self.tree.append_child(parent, item)?)
    }

    fn reset(&mut self) {
        self.state = BlockState::None;
        self.stack.clear();
    }

    /// Headings always go to the outer container and close everything open.
    /// The title is everything after the `#` run, whitespace included.
    fn parse_heading(&mut self, content: &'a [u8], marker_len: usize) -> Result<(), Error> {
        let level = marker_len.min(MAX_HEADING_LEVEL) as u8;
        let item = Item {
            kind: NodeKind::Heading { level },
            header: &content[marker_len..],
        };
        self.tree.append_child(self.parent, item)?;
        self.reset();
        Ok(())
    }

    /// Consumes lines up to and including the closing fence, or to the end
    /// of input. Lines are kept whole, indentation included.
    fn parse_fenced_code(&mut self) -> Result<(), Error> {
        let code_block = self.append(self.parent, NodeKind::CodeBlock)?;
        debug!("code block opened");
        let text = self.text;
        while let Some(line) = self.lines.next() {
            if is_closing_fence(&text[line.content_start()..line.end]) {
                break;
            }
            self.append_text(code_block, &text[line.start..line.end])?;
        }
        self.reset();
        Ok(())
    }

    fn parse_list_item(
        &mut self,
        line: Line,
        content: &'a [u8],
        marker_len: usize,
        kind: ListKind,
    ) -> Result<(), Error> {
        let (list, depth) = self.find_list(line.indent, kind)?;
        let item = self.append(list, NodeKind::ListItem)?;
        self.append_text(item, stripped(&content[marker_len..]))?;
        self.stack.set(
            depth,
            StackEntry {
                list,
                item,
                indent: line.indent,
                kind,
            },
        )?;
        self.state = BlockState::List;
        Ok(())
    }

    /// Returns the list an item at `indent` belongs in, along with the stack
    /// depth of that list. New lists are created as needed.
    fn find_list(&mut self, indent: usize, kind: ListKind) -> Result<(TreeIndex, usize), Error> {
        let top = match self.stack.top() {
            Some(top) => top,
            None => return Ok((self.open_list(self.parent, kind)?, 0)),
        };
        if indent > top.indent {
            let depth = self.stack.len();
            if depth == MAX_LIST_DEPTH {
                return Err(Error::NestingTooDeep);
            }
            return Ok((self.open_list(top.item, kind)?, depth));
        }

        // Unwind to a level with the same indentation. If the indentation
        // falls between two levels, or below all of them, nesting starts over.
        let level = self
            .stack
            .innermost_at_or_below(indent)
            .and_then(|depth| self.stack.get(depth).map(|entry| (depth, entry)));
        match level {
            Some((depth, entry)) if entry.indent == indent => {
                if entry.kind == kind {
                    Ok((entry.list, depth))
                } else {
                    let parent = match depth.checked_sub(1).and_then(|d| self.stack.get(d)) {
                        Some(outer) => outer.item,
                        None => self.parent,
                    };
                    Ok((self.open_list(parent, kind)?, depth))
                }
            }
            _ => Ok((self.open_list(self.parent, kind)?, 0)),
        }
    }

    fn open_list(&mut self, parent: TreeIndex, kind: ListKind) -> Result<TreeIndex, Error> {
        let list = self.append(parent, kind.node_kind())?;
        debug!("{:?} list opened under node {}", kind, parent.get());
        Ok(list)
    }

    /// Every `|` separates two cells. The leading one is skipped, a trailing
    /// one leaves an empty last cell.
    fn parse_table_row(&mut self, content: &'a [u8]) -> Result<(), Error> {
        let table = match self.state {
            BlockState::Table(table) => table,
            _ => {
                debug!("table opened");
                self.append(self.parent, NodeKind::Table)?
            }
        };
        let row = self.append(table, NodeKind::TableRow)?;
        let mut rest = &content[1..];
        loop {
            match memchr(b'|', rest) {
                Some(pos) => {
                    self.append_text(row, stripped(&rest[..pos]))?;
                    rest = &rest[pos + 1..];
                }
                None => {
                    self.append_text(row, stripped(rest))?;
                    break;
                }
            }
        }
        self.state = BlockState::Table(table);
        self.stack.clear();
        Ok(())
    }

    /// Only the first byte of the raw line is dropped, whatever it is.
    fn parse_quote_line(&mut self, line: Line) -> Result<(), Error> {
        let quote = match self.state {
            BlockState::Quote(quote) => quote,
            _ => {
                debug!("quote opened");
                self.stack.clear();
                self.append(self.parent, NodeKind::Quote)?
            }
        };
        let text = self.text;
        let raw = &text[line.start..line.end];
        self.append_text(quote, stripped(&raw[1..]))?;
        self.state = BlockState::Quote(quote);
        Ok(())
    }

    fn parse_paragraph_line(&mut self, line: Line, content: &'a [u8]) -> Result<(), Error> {
        let text = stripped(content);
        match self.state {
            BlockState::Quote(quote) => {
                self.append_text(quote, text)?;
                return Ok(());
            }
            BlockState::List if self.normal_indent != Some(line.indent) => {
                if let Some(top) = self.stack.top() {
                    self.append_text(top.item, text)?;
                    return Ok(());
                }
            }
            _ => (),
        }

        let paragraph = match self.state {
            BlockState::Paragraph(paragraph) => paragraph,
            _ => {
                debug!("paragraph opened");
                self.append(self.parent, NodeKind::Paragraph)?
            }
        };
        self.append_text(paragraph, text)?;
        self.state = BlockState::Paragraph(paragraph);
        self.stack.clear();
        Ok(())
    }
}
