//! The generated statement list and the text helpers that build it.

use std::fmt;

use crate::go::{self, COMMENT_MARKER, INDENT};
use crate::state::Fragment;

/// Append-only Go statement text, one statement or comment per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedBody {
    text: String,
    statements: usize,
    comments: usize,
}

impl GeneratedBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one fragment onto the end of the body.
    pub fn push(&mut self, fragment: &Fragment) {
        match *fragment {
            Fragment::Statement { indent, operator } => {
                write_line(&mut self.text, indent, go::statement(operator));
                self.statements += 1;
            }
            Fragment::CommentStart { indent } => {
                write_indent(&mut self.text, indent);
                self.text.push_str(COMMENT_MARKER);
                self.comments += 1;
            }
            Fragment::CommentChar(ch) => self.text.push(ch),
            Fragment::LineBreak => self.text.push('\n'),
        }
    }

    pub fn extend<'a>(&mut self, fragments: impl IntoIterator<Item = &'a Fragment>) {
        for fragment in fragments {
            self.push(fragment);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of operator statements written.
    pub fn statement_count(&self) -> usize {
        self.statements
    }

    /// Number of comment lines written.
    pub fn comment_count(&self) -> usize {
        self.comments
    }
}

impl fmt::Display for GeneratedBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Write `levels` indent units.
pub fn write_indent(buf: &mut String, levels: usize) {
    buf.extend(std::iter::repeat(INDENT).take(levels));
}

/// Write an indented line terminated by a line break.
pub fn write_line(buf: &mut String, levels: usize, text: &str) {
    write_indent(buf, levels);
    buf.push_str(text);
    buf.push('\n');
}

/// Count the leading indent units of a line.
pub fn indent_of(line: &str) -> usize {
    line.chars().take_while(|&ch| ch == INDENT).count()
}
