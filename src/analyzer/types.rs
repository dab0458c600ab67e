/// One detected top-level counting loop, fully classified.
///
/// Fields are filled during detection/analysis and read-only afterwards;
/// the rewriter never mutates a record.
#[derive(Debug, Clone)]
pub struct LoopRecord {
    /// Line index of the `for` header in the original source (0-based).
    pub start_line: usize,
    /// Line index of the closing brace; equals `start_line` when no
    /// opening brace was ever found.
    pub end_line: usize,
    /// The induction variable, identical across all three header clauses.
    pub loop_var: String,
    pub is_parallelizable: bool,
    /// (variable, combine operator) pairs for the reduction clause.
    pub reduction_vars: Vec<(String, char)>,
    /// Always empty today: block-scoped declarations are already private
    /// under `parallel for`, so no private clause variable is produced.
    /// The field and its consumers stay until design review settles
    /// whether per-variable detection is wanted.
    pub private_vars: Vec<String>,
    /// Enclosing function at `start_line`, empty if none seen yet.
    pub function_name: String,
    /// Exact leading whitespace of the header, reused for the pragma line.
    pub indent: String,
}

/// Extent and header facts produced by loop location, before the body
/// has been analyzed.
#[derive(Debug, Clone)]
pub struct LoopExtent {
    pub start_line: usize,
    pub end_line: usize,
    pub loop_var: String,
    pub indent: String,
}
