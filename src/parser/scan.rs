//! Line-level helpers shared by root discovery and the flat parse.

use crate::base::DocumentLine;
use crate::base::constants::{
    COMMENT_SIGN, INDENT_POP, INDENT_PUSH, NODE_SIGN, QUALIFIER_SIGN, STRING_SIGN,
    TEXT_BLOCK_END, TEXT_BLOCK_START,
};
use crate::errors::{IonError, IonResult};

/// Suppressive states that disable structural interpretation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScanState {
    pub in_string: bool,
    pub in_text_block: bool,
}

impl ScanState {
    pub fn is_suppressed(&self) -> bool {
        self.in_string || self.in_text_block
    }

    /// Advance the quote and text block flags over a whole line without
    /// capturing anything.
    pub fn skim(&mut self, line: &str) {
        let mut rest = line;
        while let Some(c) = rest.chars().next() {
            if self.enter_or_leave_text_block(rest) {
                rest = &rest[TEXT_BLOCK_START.len()..];
                continue;
            }
            if c == STRING_SIGN && !self.in_text_block {
                self.in_string = !self.in_string;
            }
            rest = &rest[c.len_utf8()..];
        }
    }

    /// Toggle the text block flag if `rest` starts with the marker that is
    /// meaningful in the current state. Both markers are two bytes long.
    pub fn enter_or_leave_text_block(&mut self, rest: &str) -> bool {
        if self.in_text_block {
            if rest.starts_with(TEXT_BLOCK_END) {
                self.in_text_block = false;
                return true;
            }
        } else if !self.in_string && rest.starts_with(TEXT_BLOCK_START) {
            self.in_text_block = true;
            return true;
        }
        false
    }
}

/// Whole-line parser directives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Directive {
    IndentationPush,
    IndentationPop,
}

impl Directive {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            INDENT_PUSH => Some(Self::IndentationPush),
            INDENT_POP => Some(Self::IndentationPop),
            _ => None,
        }
    }
}

pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_SIGN)
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A line names a node when it has a colon before any quote character.
pub(crate) fn contains_node_name(line: &str) -> bool {
    match (line.find(NODE_SIGN), line.find(STRING_SIGN)) {
        (Some(_), None) => true,
        (Some(colon), Some(quote)) => colon < quote,
        (None, _) => false,
    }
}

/// Count tab characters at the start of the line
pub(crate) fn leading_tabs(line: &str) -> usize {
    line.chars().take_while(|&c| c == '\t').count()
}

/// Leading whitespace on a node line must be tabs only.
pub(crate) fn validate_leading_whitespace(line: &str, lnum: DocumentLine) -> IonResult<()> {
    let offending = line
        .chars()
        .take_while(|c| c.is_whitespace())
        .any(|c| c != '\t');
    if offending {
        return Err(IonError::text_file_parser(
            lnum,
            format!("Node definitions may only be indented using tabs (file line {lnum})."),
        ));
    }
    Ok(())
}

/// Drop a dot-qualified prefix, keeping the text after the final dot.
pub(crate) fn strip_qualifier(name: &str, lnum: DocumentLine) -> IonResult<&str> {
    match name.rfind(QUALIFIER_SIGN) {
        Some(dot) if dot + 1 == name.len() => Err(IonError::text_file_parser(
            lnum,
            format!("Node {name} ends with a full stop which is not allowed for node names."),
        )),
        Some(dot) => Ok(&name[dot + 1..]),
        None => Ok(name),
    }
}

/// Trim an attribute value and unwrap one surrounding pair of quotes.
pub(crate) fn clean_attribute_value(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(STRING_SIGN)
        .and_then(|inner| inner.strip_suffix(STRING_SIGN))
        .unwrap_or(trimmed)
        .to_string()
}
