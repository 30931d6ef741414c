//! Output template filling.
//!
//! A template is Go source with two placeholders: `{{.Mem}}` receives the
//! memory cell count and `{{.Body}}` receives the generated body verbatim.
//! Whitespace inside the braces is tolerated (`{{ .Body }}`). Any other
//! action is rejected when the template is parsed, not when it is rendered.

use crate::error::TemplateError;

/// Memory cells allocated when no count is given.
pub const DEFAULT_MEMORY_CELLS: usize = 30_000;

/// Built-in Go program wrapper.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/main.go.tmpl");

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Mem,
    Body,
}

/// A parsed output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text, validating every action.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = text;
        let mut offset = 0;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after_open = &rest[open + 2..];
            let close = after_open
                .find("}}")
                .ok_or(TemplateError::Unterminated(offset + open))?;
            let action = after_open[..close].trim();
            segments.push(match action {
                ".Mem" => Segment::Mem,
                ".Body" => Segment::Body,
                other => return Err(TemplateError::UnknownAction(other.to_string())),
            });
            let consumed = open + 2 + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        if !segments.contains(&Segment::Body) {
            return Err(TemplateError::MissingBody);
        }
        Ok(Self { segments })
    }

    /// Fill the placeholders.
    pub fn render(&self, memory_cells: usize, body: &str) -> String {
        let mut out = String::with_capacity(body.len() + 512);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Mem => out.push_str(&memory_cells.to_string()),
                Segment::Body => out.push_str(body),
            }
        }
        out
    }
}
