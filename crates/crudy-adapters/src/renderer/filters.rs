//! Custom template filters.
//!
//! Registered filters:
//! - `comment`: turn text into a `//` line comment block

use minijinja::Environment;

/// Register every custom filter on `env`.
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("comment", comment);
}

/// Prefix each line with `// `.
///
/// Blank lines become a bare `//`, lines that already start with `//` are
/// kept as they are, and trailing newlines are dropped.
/// Example: "Copyright\n\nMIT" -> "// Copyright\n//\n// MIT"
pub fn comment(value: &str) -> String {
    value
        .trim_end_matches(['\n', '\r'])
        .lines()
        .map(|line| {
            if line.starts_with("//") {
                line.to_string()
            } else if line.trim().is_empty() {
                "//".to_string()
            } else {
                format!("// {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
