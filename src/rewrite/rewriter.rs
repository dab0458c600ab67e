use super::edits::{apply_inserts, Edit};
use super::patches::{apply_patches, TextPatch};
use super::pragma::synthesize_pragma;
use crate::analyzer::LoopRecord;

const OMP_INCLUDE: &str = "#include <omp.h>";

/// Produce the rewritten line sequence: runtime include, one pragma per
/// parallelizable loop, then the cosmetic patch pass.
///
/// All insertions are collected as edits in original line coordinates and
/// resolved in a single pass, so no insertion can shift another loop's
/// stored position.
pub fn rewrite_source(
    lines: &[String],
    loops: &[LoopRecord],
    patches: &[TextPatch],
) -> Vec<String> {
    let mut edits: Vec<Edit> = Vec::new();

    if let Some(line) = include_insert_position(lines) {
        edits.push(Edit {
            line,
            text: OMP_INCLUDE.to_string(),
        });
    }

    for loop_record in loops {
        if !loop_record.is_parallelizable {
            continue;
        }
        if already_annotated(lines, loop_record.start_line) {
            continue;
        }
        edits.push(Edit {
            line: loop_record.start_line,
            text: synthesize_pragma(loop_record),
        });
    }

    let mut out = apply_inserts(lines, &edits);
    apply_patches(&mut out, patches);
    out
}

/// Where the runtime include goes: after the last existing `#include`, at
/// the top of the file when there is none, nowhere when it is already
/// present.
fn include_insert_position(lines: &[String]) -> Option<usize> {
    if lines.iter().any(|l| l.contains(OMP_INCLUDE)) {
        return None;
    }
    let last_include = lines
        .iter()
        .rposition(|l| l.trim_start().starts_with("#include"));
    Some(match last_include {
        Some(i) => i + 1,
        None => 0,
    })
}

/// Guard against re-annotating already transformed output: a loop whose
/// preceding line carries an omp pragma is left alone.
fn already_annotated(lines: &[String], header_line: usize) -> bool {
    header_line > 0 && lines[header_line - 1].contains("#pragma omp")
}
