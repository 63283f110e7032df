//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the editor's source tree for antipatterns: anything that
//! can crash the editor inside the browser tab, silently drop an error, or
//! pull browser types into code that is supposed to be testable natively.
//! Each pattern has a budget (ideally zero). The budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// Files allowed to name `web_sys` types. Everything else must run without a browser.
const BROWSER_EDGE: [&str; 2] = ["render.rs", "engine.rs"];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `canvas/src/`, excluding `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn report(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

/// One test per pattern: the number of matching lines must stay within `max`.
macro_rules! budget {
    ($name:ident, $pattern:expr, $max:expr) => {
        #[test]
        fn $name() {
            let found = hits(&source_files(), $pattern);
            let count: usize = found.iter().map(|(_, c)| c).sum();
            assert!(
                count <= $max,
                "{} budget exceeded: found {count}, max {}.\n{}",
                $pattern,
                $max,
                report(&found)
            );
        }
    };
}

// Panics — these take down the whole editor.
budget!(unwrap_budget, ".unwrap()", 0);
budget!(expect_budget, ".expect(", 0);
budget!(panic_budget, "panic!(", 0);
budget!(unreachable_budget, "unreachable!(", 0);
budget!(todo_budget, "todo!(", 0);
budget!(unimplemented_budget, "unimplemented!(", 0);

// Silent loss — discards errors without inspecting.
budget!(silent_discard_budget, "let _ =", 0);
budget!(dot_ok_budget, ".ok()", 0);

// Style / structure.
budget!(allow_dead_code_budget, "#[allow(dead_code)]", 0);

#[test]
fn browser_types_stay_at_the_edge() {
    let offenders: Vec<String> = source_files()
        .into_iter()
        .filter(|file| file.content.contains("web_sys"))
        .filter(|file| !BROWSER_EDGE.iter().any(|edge| file.path.ends_with(edge)))
        .map(|file| file.path)
        .collect();
    assert!(offenders.is_empty(), "web_sys used outside {BROWSER_EDGE:?}: {offenders:?}");
}
