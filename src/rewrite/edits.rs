/// One line insertion, positioned in ORIGINAL line coordinates.
///
/// Edits never shift each other: they are resolved in a single application
/// pass, so the order in which they were constructed cannot invalidate a
/// stored position.
#[derive(Debug, Clone)]
pub struct Edit {
    /// The inserted line appears immediately before this original index.
    /// `line == lines.len()` appends at the end.
    pub line: usize,
    pub text: String,
}

/// Apply all insertions in one pass over the original lines.
///
/// Edits are stable-sorted by position, so two edits at the same line keep
/// their construction order (the include edit is pushed before any pragma
/// edit and therefore lands first).
pub fn apply_inserts(lines: &[String], edits: &[Edit]) -> Vec<String> {
    let mut sorted: Vec<&Edit> = edits.iter().collect();
    sorted.sort_by_key(|e| e.line);

    let mut out = Vec::with_capacity(lines.len() + edits.len());
    let mut next = sorted.iter().peekable();

    for (i, line) in lines.iter().enumerate() {
        while next.peek().is_some_and(|e| e.line == i) {
            out.push(next.next().unwrap().text.clone());
        }
        out.push(line.clone());
    }
    while let Some(e) = next.next() {
        out.push(e.text.clone());
    }

    out
}
