use std::fs;
use std::path::{Path, PathBuf};

use imperial::lang::keywords::{KEYWORDS, KeywordId};
use imperial::lang::types::{DATA_TYPES, DataType};

/// Guardrail against stringly-typed keyword checks.
///
/// A coarse safety net: it looks for `== "Thou"` or `"Thou" =>` in Rust sources where callers should go through the
/// `imperial_core::lang` registries instead.
///
/// The registries themselves and tests are allowed to spell keywords directly.
#[test]
fn no_stringly_keyword_checks_in_rust_sources() {
    let root = repo_root();
    let spellings: Vec<&'static str> = KEYWORDS.iter().map(|k| k.canonical).collect();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    for dir in [root.join("src"), root.join("crates")] {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found stringly-typed keyword checks. Prefer imperial_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

/// Data types and their keywords map onto each other.
#[test]
fn data_types_round_trip_through_keywords() {
    for &ty in DATA_TYPES {
        assert_eq!(DataType::from_keyword(ty.keyword()), Some(ty));
    }
    assert_eq!(DataType::from_keyword(KeywordId::Embark), None);
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings.
    if rel.starts_with("crates/imperial_core/src/lang/") {
        return true;
    }
    rel.starts_with("tests/") || rel.ends_with("/tests.rs")
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in contents.lines().enumerate() {
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    spellings.iter().any(|s| {
        let eq = format!("== \"{s}\"");
        let arm = format!("\"{s}\" =>");
        line.contains(&eq) || line.contains(&arm)
    })
}
