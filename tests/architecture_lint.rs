//! Architecture enforcement tests.
//!
//! The engines (`core`, `numbering`, `kinship`, `tradition`) must stay
//! independent of the presentation layer: they may not reference the
//! `cli` or `ui` modules and may not parse arguments. These tests catch
//! violations in CI before they calcify.
//!
//! # Why This Matters
//!
//! The engines are the embeddable part of the crate. A chart renderer or
//! web handler should be able to call them without dragging in clap or
//! terminal formatting, and concurrent callers rely on the engines being
//! pure. Keeping the dependency arrows pointing one way preserves that.

use std::fs;
use std::path::{Path, PathBuf};

/// Module trees that form the engine layer.
const ENGINE_DIRS: &[&str] = &["src/core", "src/numbering", "src/kinship", "src/tradition"];

/// References that must not appear in engine sources.
const FORBIDDEN: &[&str] = &["crate::cli", "crate::ui", "use clap"];

/// Collect all .rs files under a directory, recursively.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return files,
    };
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

#[test]
fn engines_do_not_reference_the_presentation_layer() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let mut violations = Vec::new();

    for dir in ENGINE_DIRS {
        for file in rust_files(&root.join(dir)) {
            let source = fs::read_to_string(&file).expect("source file is readable");
            for needle in FORBIDDEN {
                if source.contains(needle) {
                    violations.push(format!("{} references '{}'", file.display(), needle));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "engine modules must not depend on the CLI layer:\n{}",
        violations.join("\n")
    );
}

#[test]
fn engine_directories_exist() {
    // Guards the lint itself: if a module tree is renamed, this fails
    // instead of the lint silently scanning nothing.
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    for dir in ENGINE_DIRS {
        assert!(
            !rust_files(&root.join(dir)).is_empty(),
            "expected Rust sources under {dir}"
        );
    }
}
