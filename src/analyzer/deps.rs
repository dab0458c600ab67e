use regex::Regex;
use std::sync::LazyLock;

/// Targets of compound-add assignments (`total += …`).
static COMPOUND_ADD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)\s*\+=").unwrap());

/// Calls with input/output side effects.
static IO_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"cout|cin|printf|scanf|iostream").unwrap());

static BREAK_CONTINUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:break|continue)\b").unwrap());

/// Classification signals for one loop body.
#[derive(Debug)]
pub struct BodyAnalysis {
    pub is_parallelizable: bool,
    pub reduction_vars: Vec<(String, char)>,
    pub private_vars: Vec<String>,
}

/// Classify a loop body given its text and the induction variable.
///
/// The verdict is conservative: a body qualifies only when it indexes an
/// array by the induction variable and shows no I/O call and no
/// `break`/`continue` anywhere, nested conditionals included.
pub fn analyze_body(body: &str, loop_var: &str) -> BodyAnalysis {
    let is_simple_array_access = has_induction_subscript(body, loop_var);

    // Coarse reduction heuristic: any compound-add target pairs with any
    // induction-indexed array reference anywhere in the body. Whether the
    // accumulated value actually comes from that access is not checked.
    let mut reduction_vars = Vec::new();
    if is_simple_array_access {
        for caps in COMPOUND_ADD.captures_iter(body) {
            reduction_vars.push((caps[1].to_string(), '+'));
        }
    }

    let has_io = IO_CALL.is_match(body);
    let has_break_continue = BREAK_CONTINUE.is_match(body);

    BodyAnalysis {
        is_parallelizable: is_simple_array_access && !has_io && !has_break_continue,
        reduction_vars,
        // Block-scoped declarations are implicitly private under the
        // emitted directive, so no private clause variable is produced.
        private_vars: Vec::new(),
    }
}

/// True if some subscript expression is indexed exactly by `loop_var`,
/// e.g. `a[i]` or `a[ i ]` for induction variable `i`.
///
/// Each `]` is paired with the nearest preceding `[`, so inner subscripts
/// of a nested index like `a[idx[i]]` are seen on their own.
fn has_induction_subscript(body: &str, loop_var: &str) -> bool {
    let mut open: Option<usize> = None;
    for (pos, ch) in body.char_indices() {
        match ch {
            '[' => open = Some(pos),
            ']' => {
                if let Some(start) = open.take() {
                    if body[start + 1..pos].trim() == loop_var {
                        return true;
                    }
                }
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_over_array_is_a_reduction() {
        let a = analyze_body("{\n    sum += arr[i];\n}\n", "i");
        assert!(a.is_parallelizable);
        assert_eq!(a.reduction_vars, vec![("sum".to_string(), '+')]);
        assert!(a.private_vars.is_empty());
    }

    #[test]
    fn subscript_tolerates_inner_spaces() {
        assert!(has_induction_subscript("out[ i ] = in[ i ];", "i"));
        assert!(!has_induction_subscript("out[j] = in[i + 1];", "i"));
        assert!(!has_induction_subscript("out[idx] = 0;", "i"));
    }

    #[test]
    fn nested_index_exposes_the_inner_subscript() {
        assert!(has_induction_subscript("sum += a[idx[i]];", "i"));
        assert!(!has_induction_subscript("sum += a[idx[j]];", "i"));

        let a = analyze_body("{\n    sum += a[idx[i]];\n}\n", "i");
        assert!(a.is_parallelizable);
        assert_eq!(a.reduction_vars, vec![("sum".to_string(), '+')]);
    }

    #[test]
    fn io_blocks_parallelization() {
        let a = analyze_body("{\n    cout << a[i];\n}\n", "i");
        assert!(!a.is_parallelizable);
    }

    #[test]
    fn break_blocks_parallelization_at_any_depth() {
        let body = "{\n    if (a[i] < 0) {\n        break;\n    }\n    b[i] = a[i];\n}\n";
        assert!(!analyze_body(body, "i").is_parallelizable);
    }

    #[test]
    fn continue_blocks_parallelization() {
        let body = "{\n    if (a[i] == 0) continue;\n    b[i] = a[i];\n}\n";
        assert!(!analyze_body(body, "i").is_parallelizable);
    }

    #[test]
    fn plain_element_wise_body_has_no_reductions() {
        let a = analyze_body("{\n    b[i] = a[i] * 2;\n}\n", "i");
        assert!(a.is_parallelizable);
        assert!(a.reduction_vars.is_empty());
    }

    #[test]
    fn body_without_induction_subscript_is_rejected() {
        let a = analyze_body("{\n    total = total + step;\n}\n", "i");
        assert!(!a.is_parallelizable);
    }
}
