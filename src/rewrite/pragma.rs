use crate::analyzer::LoopRecord;

/// Build the directive line for a parallelizable loop.
///
/// Reduction clauses come first, one per (variable, operator) pair. A
/// private clause is emitted only when private variables exist and no
/// reduction does; the loop variable itself is filtered out since it is
/// already private under the directive. With no clauses the bare directive
/// is emitted. Indentation is copied from the header verbatim.
pub fn synthesize_pragma(loop_record: &LoopRecord) -> String {
    let mut clauses = Vec::new();

    for (var, op) in &loop_record.reduction_vars {
        clauses.push(format!("reduction({}:{})", op, var));
    }

    if loop_record.reduction_vars.is_empty() {
        let private: Vec<&str> = loop_record
            .private_vars
            .iter()
            .filter(|v| *v != &loop_record.loop_var)
            .map(String::as_str)
            .collect();
        if !private.is_empty() {
            clauses.push(format!("private({})", private.join(",")));
        }
    }

    if clauses.is_empty() {
        format!("{}#pragma omp parallel for", loop_record.indent)
    } else {
        format!(
            "{}#pragma omp parallel for {}",
            loop_record.indent,
            clauses.join(" ")
        )
    }
}
