use autopar::{pipeline, report, rewrite};
use std::io;
use std::path::PathBuf;
use std::process;

const DEFAULT_OUTPUT: &str = "output_parallel.cpp";

fn print_usage() {
    eprintln!("Usage: autopar <input_file> [output_file] [--patches <patches.json>]");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  autopar codebase.cpp codebase_parallel.cpp");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut patches_path: Option<PathBuf> = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--patches" {
            match iter.next() {
                Some(path) => patches_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--patches requires a file argument");
                    print_usage();
                    process::exit(1);
                }
            }
        } else if input.is_none() {
            input = Some(PathBuf::from(arg));
        } else if output.is_none() {
            output = Some(PathBuf::from(arg));
        } else {
            eprintln!("Unexpected argument: {}", arg);
            print_usage();
            process::exit(1);
        }
    }

    let Some(input) = input else {
        print_usage();
        process::exit(1);
    };
    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let patches = match patches_path {
        Some(ref path) => match rewrite::load_patches(path) {
            Ok(patches) => patches,
            Err(err) => {
                eprintln!("Could not load patches from {}: {}", path.display(), err);
                process::exit(1);
            }
        },
        None => Vec::new(),
    };

    let transformed = match pipeline::run_file(&input, &patches) {
        Ok(transformed) => transformed,
        Err(err) => {
            eprintln!("Could not read {}: {}", input.display(), err);
            process::exit(1);
        }
    };

    pipeline::emit(&output, &transformed.output_lines)?;
    report::print_report(&input, &output, &transformed.loops);

    Ok(())
}
