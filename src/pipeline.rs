use crate::analyzer::{analyze_body, build_function_map, locate_loops, LoopRecord};
use crate::rewrite::{rewrite_source, TextPatch};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of one full analysis-and-rewrite run.
#[derive(Debug)]
pub struct Transformed {
    pub loops: Vec<LoopRecord>,
    pub output_lines: Vec<String>,
}

/// Run the phases in order over an in-memory source buffer:
/// index functions, locate loops, analyze each body, then rewrite.
///
/// Each phase consumes the complete output of its predecessor; the
/// rewriter in particular needs the final loop list before any edit is
/// placed. The result is a pure function of the buffer and patch list.
pub fn analyze_and_rewrite(source: &str, patches: &[TextPatch]) -> Transformed {
    let lines: Vec<&str> = source.lines().collect();

    let function_map = build_function_map(&lines);
    let extents = locate_loops(&lines);

    let mut loops = Vec::with_capacity(extents.len());
    for extent in extents {
        let body = lines[extent.start_line..=extent.end_line].join("\n");
        let analysis = analyze_body(&body, &extent.loop_var);

        loops.push(LoopRecord {
            start_line: extent.start_line,
            end_line: extent.end_line,
            loop_var: extent.loop_var,
            is_parallelizable: analysis.is_parallelizable,
            reduction_vars: analysis.reduction_vars,
            private_vars: analysis.private_vars,
            function_name: function_map[extent.start_line].clone(),
            indent: extent.indent,
        });
    }

    let owned: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
    let output_lines = rewrite_source(&owned, &loops, patches);

    Transformed {
        loops,
        output_lines,
    }
}

/// Read the input source and run the pipeline. An unreadable input aborts
/// here, before any analysis phase runs.
pub fn run_file(input: &Path, patches: &[TextPatch]) -> io::Result<Transformed> {
    let source = fs::read_to_string(input)?;
    Ok(analyze_and_rewrite(&source, patches))
}

/// Write the transformed lines to `path` atomically: the contents go to a
/// sibling temporary file which is renamed over the destination on
/// success. On failure the temporary file is removed and the destination
/// is left untouched.
pub fn emit(path: &Path, lines: &[String]) -> io::Result<()> {
    let tmp = temp_sibling(path);

    let mut contents = lines.join("\n");
    contents.push('\n');

    if let Err(err) = fs::write(&tmp, &contents) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
