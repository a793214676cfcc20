//! Layer boundary checks: the domain stays pure and the application layer
//! only talks to the outside world through its ports.

use std::fs;
use std::path::{Path, PathBuf};

const DOMAIN_FORBIDDEN: &[&str] = &[
    "crate::infra",
    "crate::application",
    "crate::commands",
    "crate::output",
    "tokio",
    "std::fs",
    "std::process",
];

const APPLICATION_FORBIDDEN: &[&str] = &["crate::infra", "crate::commands", "crate::output"];

fn src_dir(layer: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join(layer)
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir).unwrap_or_else(|e| panic!("read {}: {e}", dir.display()));
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files
}

/// Lines of non-test code that mention a forbidden path in a `use` or
/// fully-qualified expression. Doc comments and `#[cfg(test)]` modules are
/// ignored.
fn violations(layer: &str, forbidden: &[&str]) -> Vec<String> {
    let mut found = Vec::new();
    for file in rust_files(&src_dir(layer)) {
        let content =
            fs::read_to_string(&file).unwrap_or_else(|e| panic!("read {}: {e}", file.display()));
        for (number, line) in content.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("#[cfg(test)]") {
                break;
            }
            if trimmed.starts_with("//") {
                continue;
            }
            for needle in forbidden {
                if trimmed.contains(needle) {
                    found.push(format!("{}:{}: {trimmed}", file.display(), number + 1));
                }
            }
        }
    }
    found
}

#[test]
fn test_domain_has_no_io_or_outer_layer_imports() {
    let found = violations("domain", DOMAIN_FORBIDDEN);
    assert!(found.is_empty(), "domain layer imports:\n{}", found.join("\n"));
}

#[test]
fn test_application_depends_only_on_domain_and_ports() {
    let found = violations("application", APPLICATION_FORBIDDEN);
    assert!(found.is_empty(), "application layer imports:\n{}", found.join("\n"));
}
