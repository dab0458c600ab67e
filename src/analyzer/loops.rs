use super::types::LoopExtent;
use regex::Regex;
use std::sync::LazyLock;

/// A `for` header split into its three clauses. The clause contents are
/// validated separately so the induction variable only has to be named
/// once, instead of back-referencing it inside one large pattern.
static FOR_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)for\s*\(([^;]*);([^;]*);([^);]*)\)").unwrap());

static INIT_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*int\s+(\w+)\s*=\s*\S").unwrap());

/// Parse a canonical ascending counting-loop header.
///
/// Returns `(indent, induction variable)` only when the initializer
/// declares an `int`, the condition compares that same variable against an
/// upper bound with `<` (or `<=`), and the increment is a unit
/// post-increment of that same variable. Anything else is not a header.
pub fn parse_counting_header(line: &str) -> Option<(String, String)> {
    let caps = FOR_HEADER.captures(line)?;
    let indent = caps[1].to_string();

    let var = INIT_CLAUSE.captures(&caps[2])?[1].to_string();

    let cond = strip_var_prefix(&caps[3], &var)?.trim_start();
    if !cond.starts_with('<') || cond.len() < 2 {
        return None;
    }

    // The `++` must follow the identifier directly; `i ++` is not the
    // canonical increment.
    let incr = strip_var_prefix(&caps[4], &var)?;
    if !incr
        .strip_prefix("++")
        .is_some_and(|rest| rest.trim().is_empty())
    {
        return None;
    }

    Some((indent, var))
}

/// Strip a leading occurrence of `var` from a clause, requiring it to be a
/// whole identifier (so `i` does not match the start of `index`). The
/// remainder is returned untrimmed.
fn strip_var_prefix<'a>(clause: &'a str, var: &str) -> Option<&'a str> {
    let rest = clause.trim_start().strip_prefix(var)?;
    match rest.chars().next() {
        Some(c) if c.is_alphanumeric() || c == '_' => None,
        _ => Some(rest),
    }
}

/// Find the loop's closing line by counting braces from the header down.
///
/// The extent ends on the first line where the depth returns to zero after
/// at least one `{` has been seen. A loop with no opening brace at all
/// degenerates to the header line itself.
pub fn find_loop_end(lines: &[&str], start_line: usize) -> usize {
    let mut depth: i32 = 0;
    let mut found_open = false;

    for (i, line) in lines.iter().enumerate().skip(start_line) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    found_open = true;
                }
                '}' => {
                    depth -= 1;
                    if found_open && depth == 0 {
                        return i;
                    }
                }
                _ => {}
            }
        }
    }

    start_line
}

/// Locate every top-level counting loop. Scanning resumes past each
/// recorded extent, so loops nested inside one are never located on
/// their own.
pub fn locate_loops(lines: &[&str]) -> Vec<LoopExtent> {
    let mut extents = Vec::new();
    let mut i = 0usize;

    while i < lines.len() {
        if let Some((indent, loop_var)) = parse_counting_header(lines[i]) {
            let end_line = find_loop_end(lines, i);
            extents.push(LoopExtent {
                start_line: i,
                end_line,
                loop_var,
                indent,
            });
            i = end_line + 1;
        } else {
            i += 1;
        }
    }

    extents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_canonical_header() {
        let (indent, var) = parse_counting_header("    for (int i = 0; i < n; i++) {").unwrap();
        assert_eq!(indent, "    ");
        assert_eq!(var, "i");
    }

    #[test]
    fn accepts_non_strict_bound() {
        assert!(parse_counting_header("for (int k = 1; k <= count; k++)").is_some());
    }

    #[test]
    fn rejects_other_loop_forms() {
        // Decrementing.
        assert!(parse_counting_header("for (int i = n; i > 0; i--)").is_none());
        // Non-unit step.
        assert!(parse_counting_header("for (int i = 0; i < n; i += 2)").is_none());
        // Detached increment operator.
        assert!(parse_counting_header("for (int i = 0; i < n; i ++)").is_none());
        // Clauses disagree on the variable.
        assert!(parse_counting_header("for (int i = 0; j < n; i++)").is_none());
        // Prefix of a longer identifier is not the variable.
        assert!(parse_counting_header("for (int i = 0; index < n; i++)").is_none());
        // Iterator-based.
        assert!(parse_counting_header("for (auto it = v.begin(); it != v.end(); ++it)").is_none());
        // Condition-only.
        assert!(parse_counting_header("for (;;)").is_none());
    }

    #[test]
    fn extent_spans_nested_braces() {
        let src = [
            "for (int i = 0; i < n; i++) {",
            "    if (a[i] > 0) {",
            "        b[i] = a[i];",
            "    }",
            "}",
            "done();",
        ];
        assert_eq!(find_loop_end(&src, 0), 4);
    }

    #[test]
    fn missing_brace_degenerates_to_header() {
        let src = ["for (int i = 0; i < n; i++)", "    x[i] = 0;"];
        assert_eq!(find_loop_end(&src, 0), 0);
    }

    #[test]
    fn inner_loops_are_not_located_separately() {
        let src = [
            "for (int i = 0; i < n; i++) {",
            "    for (int j = 0; j < m; j++) {",
            "        c[i] += 1;",
            "    }",
            "}",
            "for (int k = 0; k < n; k++) {",
            "}",
        ];
        let extents = locate_loops(&src);
        assert_eq!(extents.len(), 2);
        assert_eq!(extents[0].start_line, 0);
        assert_eq!(extents[0].end_line, 4);
        assert_eq!(extents[1].start_line, 5);
        assert_eq!(extents[1].loop_var, "k");
    }
}
