//! Structural tests for layer boundaries.
//!
//! These scan source files so that the domain/application/infra/output split
//! stays intact as commands are added.

use std::path::{Path, PathBuf};

fn src_dir(sub: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join(sub)
}

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

fn relative(file: &Path) -> String {
    file.strip_prefix(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or(file)
        .display()
        .to_string()
}

/// Track brace depth and report whether a line is inside a `#[cfg(test)]` block.
struct CfgTestTracker {
    in_test_block: bool,
    brace_depth: i32,
    test_block_start_depth: i32,
}

impl CfgTestTracker {
    fn new() -> Self {
        Self {
            in_test_block: false,
            brace_depth: 0,
            test_block_start_depth: 0,
        }
    }

    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().contains("#[cfg(test)]") {
            self.in_test_block = true;
            self.test_block_start_depth = self.brace_depth;
        }
        for ch in line.chars() {
            match ch {
                '{' => self.brace_depth += 1,
                '}' => {
                    self.brace_depth -= 1;
                    if self.in_test_block && self.brace_depth <= self.test_block_start_depth {
                        self.in_test_block = false;
                    }
                }
                _ => {}
            }
        }
        self.in_test_block
    }
}

/// Non-test, non-comment lines of every file under `dir`, with 1-based line numbers.
fn production_lines(dir: &Path) -> Vec<(String, usize, String)> {
    let mut out = Vec::new();
    for file in collect_rs_files(dir) {
        let Ok(content) = std::fs::read_to_string(&file) else {
            continue;
        };
        let rel = relative(&file);
        let mut tracker = CfgTestTracker::new();
        for (i, line) in content.lines().enumerate() {
            let in_test = tracker.process_line(line);
            let trimmed = line.trim();
            if in_test || trimmed.starts_with("//") {
                continue;
            }
            out.push((rel.clone(), i + 1, line.to_string()));
        }
    }
    out
}

fn assert_no_match(dir: &str, needles: &[&str], reason: &str) {
    let violations: Vec<String> = production_lines(&src_dir(dir))
        .into_iter()
        .filter(|(_, _, line)| needles.iter().any(|n| line.contains(n)))
        .map(|(rel, n, line)| format!("{rel}:{n}: {}", line.trim()))
        .collect();
    assert!(
        violations.is_empty(),
        "{reason}:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_inline_json_branching_in_commands() {
    let violations: Vec<String> = production_lines(&src_dir("commands"))
        .into_iter()
        .filter(|(_, _, line)| {
            let trimmed = line.trim();
            line.contains("json: bool")
                || trimmed.starts_with("if json")
                || trimmed.starts_with("if !json")
                || line.contains("serde_json::")
        })
        .map(|(rel, n, line)| format!("{rel}:{n}: {}", line.trim()))
        .collect();
    assert!(
        violations.is_empty(),
        "Found inline JSON handling in commands/, use app.renderer() instead:\n{}",
        violations.join("\n")
    );
}

#[test]
fn domain_is_free_of_io() {
    assert_no_match(
        "domain",
        &[
            "tokio::",
            "std::process",
            "std::net",
            "std::fs",
            "sysinfo",
            "crate::infra",
            "crate::application",
            "println!",
        ],
        "domain/ must stay pure",
    );
}

#[test]
fn application_has_no_infra_or_presentation_imports() {
    assert_no_match(
        "application",
        &["crate::infra", "crate::output", "crate::commands", "std::process::Command", "sysinfo"],
        "application/ must depend only on domain/ and its own ports",
    );
}

#[test]
fn infra_has_no_imports_from_commands_or_output() {
    assert_no_match(
        "infra",
        &["crate::commands", "crate::output"],
        "infra/ must not import from commands/ or output/",
    );
}

#[test]
fn infra_has_no_print_macros_outside_tests() {
    assert_no_match(
        "infra",
        &["println!", "eprintln!"],
        "infra/ must log through tracing, not print",
    );
}

#[test]
fn commands_use_standardized_confirmation() {
    assert_no_match(
        "commands",
        &["Confirm::new()", "stdin().lock()"],
        "Commands must use app.confirm() for user prompts",
    );
}

#[test]
fn command_handlers_accept_app_context() {
    let mut violations = Vec::new();
    for file in collect_rs_files(&src_dir("commands")) {
        let Ok(content) = std::fs::read_to_string(&file) else {
            continue;
        };
        let is_handler = content.contains("pub fn run(") || content.contains("pub async fn run(");
        if is_handler && !content.contains("app: &AppContext") {
            violations.push(relative(&file));
        }
    }
    assert!(
        violations.is_empty(),
        "Command handlers must accept &AppContext:\n{}",
        violations.join("\n")
    );
}
