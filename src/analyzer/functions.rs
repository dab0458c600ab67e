use regex::Regex;
use std::sync::LazyLock;

/// A function signature: recognized return-type keyword, identifier,
/// parenthesized parameter list, optional opening brace.
static FUNC_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:void|int|double|float|unsigned|char|long)\s+(\w+)\s*\([^)]*\)\s*\{?")
        .unwrap()
});

/// Build the line -> enclosing-function map by a single top-to-bottom scan.
///
/// Last match wins: a function stays "current" until the next signature
/// appears, even past its closing brace. Nested and class-scoped
/// definitions are not modeled.
pub fn build_function_map(lines: &[&str]) -> Vec<String> {
    let mut map = Vec::with_capacity(lines.len());
    let mut current = String::new();

    for line in lines {
        if let Some(caps) = FUNC_SIGNATURE.captures(line) {
            current = caps[1].to_string();
        }
        map.push(current.clone());
    }

    map
}
