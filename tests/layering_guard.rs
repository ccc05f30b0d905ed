//! Layering guardrails for the workspace crates.
//!
//! `imperial_core` holds the vocabulary registries and must stay dependency-free. `imperial_syntax` may depend on
//! `imperial_core` but never on the root `imperial` crate.

/// Names listed in the `[dependencies]` table of a manifest.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let manifest = include_str!("../crates/imperial_core/Cargo.toml");
    let deps = dependency_names(manifest);
    assert!(deps.is_empty(), "imperial_core must not depend on anything, found {:?}", deps);
}

#[test]
fn syntax_does_not_depend_on_root_crate() {
    let manifest = include_str!("../crates/imperial_syntax/Cargo.toml");
    let deps = dependency_names(manifest);
    assert!(deps.iter().any(|d| d == "imperial_core"), "{:?}", deps);
    assert!(!deps.iter().any(|d| d == "imperial"), "imperial_syntax must not depend on the root crate");
}
