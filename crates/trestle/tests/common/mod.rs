//! Common test utilities shared across integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Input document with one connected four-vertex network. Both engines find
/// a tree of cost 6.0 with three edges on it.
pub const SAMPLE_INPUT: &str = r#"{
  "graphs": [
    {
      "id": 1,
      "name": "Small_Simple_Path",
      "nodes": ["A", "B", "C", "D"],
      "edges": [
        { "from": "A", "to": "B", "weight": 1.0 },
        { "from": "A", "to": "C", "weight": 4.0 },
        { "from": "B", "to": "C", "weight": 2.0 },
        { "from": "C", "to": "D", "weight": 3.0 },
        { "from": "B", "to": "D", "weight": 5.0 }
      ]
    }
  ]
}"#;

/// Input document whose only graph splits into two islands.
pub const DISCONNECTED_INPUT: &str = r#"{
  "graphs": [
    {
      "id": 9,
      "name": "Two_Islands",
      "nodes": ["A", "B", "C", "D"],
      "edges": [
        { "from": "A", "to": "B", "weight": 1.0 },
        { "from": "C", "to": "D", "weight": 2.0 }
      ]
    }
  ]
}"#;

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/trestle to workspace root
    manifest_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper that builds the binary once and runs it directly
pub fn get_trestle_binary() -> PathBuf {
    let workspace = workspace_root();

    // Build the binary first (this should be quick if already built)
    let status = Command::new("cargo")
        .args(["build", "--package", "trestle", "--quiet"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build trestle");

    assert!(status.success(), "Failed to build trestle binary");

    workspace.join("target/debug/trestle")
}

/// Run the trestle binary directly in the specified directory
pub fn run_trestle_in_dir(dir: &Path, args: &[&str]) -> Output {
    let binary = get_trestle_binary();

    Command::new(&binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute trestle binary")
}

/// Write `content` as `name` inside `dir` and return the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}
