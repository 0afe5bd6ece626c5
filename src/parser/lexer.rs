//! Flat parse: turn document lines into an ordered list of nodes with
//! attributes.
//!
//! A per-character automaton moves between three capture contexts
//! (node name, attribute name, attribute value) while quoted strings and
//! `<!` ... `!>` text blocks suspend structural interpretation.

use tracing::trace;

use super::scan::{self, Directive, ScanState};
use crate::base::DocumentLine;
use crate::base::constants::{
    ASSIGNMENT_SIGN, COMMENT_SIGN, NODE_SIGN, STRING_SIGN, TEXT_BLOCK_NEWLINE, TEXT_BLOCK_START,
};
use crate::errors::{IonError, IonResult};
use crate::syntax::{IonAttribute, IonNode};

/// Position of the automaton within a node definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    NodeName,
    AttributeName,
    AttributeValue,
}

/// Node under construction; the name is only known once its colon is read.
#[derive(Debug)]
struct NodeBuilder {
    name: Option<String>,
    level: usize,
    line: DocumentLine,
    is_root: bool,
    attributes: Vec<IonAttribute>,
}

impl NodeBuilder {
    fn new(level: usize, line: DocumentLine, is_root: bool) -> Self {
        Self {
            name: None,
            level,
            line,
            is_root,
            attributes: Vec::new(),
        }
    }

    fn finish(self) -> IonResult<IonNode> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(IonError::text_file_parser(
                    self.line,
                    format!("Node at file line {} does not have a name specified.", self.line),
                ));
            }
        };
        trace!(
            node = %name,
            level = self.level,
            line = self.line.number(),
            attributes = self.attributes.len(),
            "finalized node"
        );
        Ok(IonNode::new(
            name,
            self.level,
            self.line,
            self.is_root,
            self.attributes,
        ))
    }
}

/// Stack of level offsets opened by `IndentationPush` directives.
#[derive(Debug, Default)]
struct IndentStack(Vec<usize>);

impl IndentStack {
    fn offset(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }

    fn push(&mut self, level: usize) {
        let offset = level + self.offset();
        self.0.push(offset);
    }

    fn pop(&mut self, lnum: DocumentLine) -> IonResult<()> {
        self.0.pop().map(|_| ()).ok_or_else(|| {
            IonError::text_file_parser(
                lnum,
                "IndentationPop has no matching IndentationPush.",
            )
        })
    }
}

/// Parse one node structure starting at `root_line`.
///
/// Stops silently at the next level-0 node so that only a single structure
/// is returned per call.
pub(crate) fn parse_flat<S: AsRef<str>>(
    lines: &[S],
    root_line: DocumentLine,
) -> IonResult<Vec<IonNode>> {
    FlatParser::default().run(lines, root_line)
}

#[derive(Debug)]
struct FlatParser {
    state: ScanState,
    context: Context,
    buffer: String,
    indents: IndentStack,
    nodes: Vec<IonNode>,
    current: Option<NodeBuilder>,
    attribute_name: Option<String>,
}

impl Default for FlatParser {
    fn default() -> Self {
        Self {
            state: ScanState::default(),
            context: Context::NodeName,
            buffer: String::new(),
            indents: IndentStack::default(),
            nodes: Vec::new(),
            current: None,
            attribute_name: None,
        }
    }
}

impl FlatParser {
    fn run<S: AsRef<str>>(
        mut self,
        lines: &[S],
        root_line: DocumentLine,
    ) -> IonResult<Vec<IonNode>> {
        let mut last_line = root_line;
        // Levels are relative to the root line's depth.
        let mut root_depth: Option<usize> = None;

        for (index, line) in lines.iter().enumerate().skip(root_line.index()) {
            let line = line.as_ref();
            let lnum = DocumentLine::new(index);
            last_line = lnum;

            if !self.state.is_suppressed() {
                if scan::is_comment(line) || scan::is_blank(line) {
                    continue;
                }

                scan::validate_leading_whitespace(line, lnum)?;
                let tabs = scan::leading_tabs(line);

                match Directive::parse(line) {
                    Some(Directive::IndentationPush) => {
                        self.indents.push(tabs);
                        continue;
                    }
                    Some(Directive::IndentationPop) => {
                        self.indents.pop(lnum)?;
                        continue;
                    }
                    None => {}
                }

                if scan::contains_node_name(line) {
                    let depth = tabs + self.indents.offset();
                    let base = *root_depth.get_or_insert(depth);
                    if depth <= base && self.current.is_some() {
                        trace!(line = lnum.number(), "second root level node, stopping");
                        break;
                    }
                    self.start_node(depth - base, lnum, lnum == root_line)?;
                }
            }

            self.scan_line(line, lnum)?;
            self.end_line();
        }

        if self.state.is_suppressed() {
            let what = if self.state.in_text_block {
                "text block"
            } else {
                "quoted string"
            };
            return Err(IonError::text_file_parser(
                last_line,
                format!("Unterminated {what} at end of document."),
            ));
        }

        if let Some(node) = self.current.take() {
            self.nodes.push(node.finish()?);
        }
        if self.nodes.is_empty() {
            return Err(IonError::text_file_parser(
                root_line,
                "No node definition found on the root node line.",
            ));
        }
        Ok(self.nodes)
    }

    fn start_node(&mut self, level: usize, lnum: DocumentLine, is_root: bool) -> IonResult<()> {
        if let Some(node) = self.current.take() {
            self.nodes.push(node.finish()?);
        }
        self.current = Some(NodeBuilder::new(level, lnum, is_root));
        self.context = Context::NodeName;
        self.attribute_name = None;
        self.buffer.clear();
        Ok(())
    }

    fn scan_line(&mut self, line: &str, lnum: DocumentLine) -> IonResult<()> {
        let mut rest = line;

        while let Some(c) = rest.chars().next() {
            if self.state.enter_or_leave_text_block(rest) {
                rest = &rest[TEXT_BLOCK_START.len()..];
                continue;
            }
            rest = &rest[c.len_utf8()..];
            self.buffer.push(c);

            if self.state.in_text_block {
                continue;
            }
            if c == STRING_SIGN {
                self.state.in_string = !self.state.in_string;
            }
            if self.state.in_string {
                continue;
            }

            if c == COMMENT_SIGN && self.context != Context::AttributeValue {
                self.buffer.clear();
                break;
            }

            match self.context {
                Context::NodeName if c == NODE_SIGN => self.capture_node_name(lnum)?,
                Context::NodeName if c.is_whitespace() && self.has_node_name() => {
                    self.context = Context::AttributeName;
                }
                Context::AttributeValue if c.is_whitespace() => {
                    self.capture_attribute_value();
                    self.context = Context::AttributeName;
                }
                Context::AttributeName if c == ASSIGNMENT_SIGN => {
                    self.capture_attribute_name();
                    self.context = Context::AttributeValue;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn end_line(&mut self) {
        if self.state.in_text_block {
            self.buffer.push(TEXT_BLOCK_NEWLINE);
        } else if !self.state.in_string && self.context == Context::AttributeValue {
            self.capture_attribute_value();
            self.context = Context::AttributeName;
        }
    }

    fn has_node_name(&self) -> bool {
        self.current.as_ref().is_some_and(|n| n.name.is_some())
    }

    fn capture_node_name(&mut self, lnum: DocumentLine) -> IonResult<()> {
        let raw = self.buffer.trim();
        let raw = raw.strip_suffix(NODE_SIGN).unwrap_or(raw).trim();
        let name = scan::strip_qualifier(raw, lnum)?.to_string();
        if let Some(node) = self.current.as_mut() {
            node.name = Some(name);
        }
        self.buffer.clear();
        Ok(())
    }

    fn capture_attribute_name(&mut self) {
        let raw = self.buffer.trim();
        let raw = raw.strip_suffix(ASSIGNMENT_SIGN).unwrap_or(raw);
        self.attribute_name = Some(raw.trim().to_string());
        self.buffer.clear();
    }

    fn capture_attribute_value(&mut self) {
        let value = scan::clean_attribute_value(&self.buffer);
        let name = self.attribute_name.take().unwrap_or_default();
        if let Some(node) = self.current.as_mut() {
            node.attributes.push(IonAttribute { name, value });
        }
        self.buffer.clear();
    }
}
