//! Go statement table.

use bfgo_lexer::Operator;

/// One level of indentation.
pub const INDENT: char = '\t';

/// Opens a commentary line.
pub const COMMENT_MARKER: &str = "// ";

/// The Go statement emitted for `op`, without indentation or line break.
pub fn statement(op: Operator) -> &'static str {
    match op {
        Operator::MoveRight => "index++",
        Operator::MoveLeft => "index--",
        Operator::Increment => "mem[index]++",
        Operator::Decrement => "mem[index]--",
        Operator::LoopOpen => "for mem[index] != 0 {",
        Operator::LoopClose => "}",
        Operator::Input => "mem[index] = readChar(reader)",
        Operator::Output => "fmt.Printf(\"%c\", mem[index])",
    }
}
