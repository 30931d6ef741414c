use bfgo_codegen::DEFAULT_MEMORY_CELLS;

/// Parameters consumed by the assembler, never by the translation core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Number of memory cells in the generated program. Must be positive.
    pub memory_cells: usize,
    /// Template text; `None` selects the built-in Go template.
    pub template: Option<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            memory_cells: DEFAULT_MEMORY_CELLS,
            template: None,
        }
    }
}

impl CompileOptions {
    pub fn with_memory_cells(mut self, memory_cells: usize) -> Self {
        self.memory_cells = memory_cells;
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}
