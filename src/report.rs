use crate::analyzer::LoopRecord;
use std::path::Path;

/// Print the human-readable run summary to stdout: overall counts, then
/// per-loop status with enclosing function and 1-based line number.
pub fn print_report(input: &Path, output: &Path, loops: &[LoopRecord]) {
    let rule = "=".repeat(50);
    let parallelized = loops.iter().filter(|l| l.is_parallelizable).count();

    println!("Auto-Parallelization Report");
    println!("{}", rule);
    println!("Input file: {}", input.display());
    println!("Output file: {}", output.display());
    println!();
    println!("Parallelized {} out of {} loops:", parallelized, loops.len());
    println!();

    for (i, loop_record) in loops.iter().enumerate() {
        let line = loop_record.start_line + 1;
        if loop_record.is_parallelizable {
            println!(
                "\u{2713} Loop {} in function '{}' (line {})",
                i + 1,
                loop_record.function_name,
                line
            );
            if !loop_record.reduction_vars.is_empty() {
                let ops: Vec<String> = loop_record
                    .reduction_vars
                    .iter()
                    .map(|(var, op)| format!("{}:{}", op, var))
                    .collect();
                println!("  - Reduction operations: {}", ops.join(", "));
            }
            if !loop_record.private_vars.is_empty() {
                println!("  - Private variables: {}", loop_record.private_vars.join(", "));
            }
        } else {
            println!(
                "\u{2717} Loop {} in function '{}' (line {}) - Not parallelizable",
                i + 1,
                loop_record.function_name,
                line
            );
        }
    }

    println!();
    println!("{}", rule);
    println!("Parallel code generated successfully!");
}
