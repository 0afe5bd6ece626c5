//! Lexical constants of the ION format.

/// Starts a comment that runs to the end of the line.
pub const COMMENT_SIGN: char = '#';

/// Terminates a node name.
pub const NODE_SIGN: char = ':';

/// Separates an attribute name from its value.
pub const ASSIGNMENT_SIGN: char = '=';

/// Opens and closes a quoted string.
pub const STRING_SIGN: char = '"';

/// Separates a namespace qualifier from the node name.
pub const QUALIFIER_SIGN: char = '.';

pub const TEXT_BLOCK_START: &str = "<!";
pub const TEXT_BLOCK_END: &str = "!>";

/// Whole-line directive shifting the level of every following line.
pub const INDENT_PUSH: &str = "--- IndentationPush ---";
/// Whole-line directive restoring the previous level shift.
pub const INDENT_POP: &str = "--- IndentationPop ---";

/// Appended to text block content at the end of every spanned line.
pub const TEXT_BLOCK_NEWLINE: char = '\n';
