//! Fake `cargo` executable for driving the process runner

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A shell script standing in for `cargo`
///
/// `metadata` and `tree` print canned output and exit with the configured
/// status; every invocation's arguments are appended to a log.
pub struct FakeCargo {
    _dir: TempDir,
    program: PathBuf,
    args_log: PathBuf,
}

impl FakeCargo {
    pub fn new(metadata: &str, tree: &str) -> Self {
        Self::with_exit_codes(metadata, 0, tree, 0)
    }

    pub fn with_exit_codes(metadata: &str, metadata_exit: i32, tree: &str, tree_exit: i32) -> Self {
        let dir = TempDir::new().unwrap();
        let metadata_out = dir.path().join("metadata.out");
        let tree_out = dir.path().join("tree.out");
        let args_log = dir.path().join("args.log");
        std::fs::write(&metadata_out, metadata).unwrap();
        std::fs::write(&tree_out, tree).unwrap();

        let script = format!(
            r#"#!/bin/sh
echo "$@" >> '{args_log}'
case "$1" in
  metadata)
    cat '{metadata_out}'
    [ {metadata_exit} -eq 0 ] || echo 'error: failed to parse manifest' >&2
    exit {metadata_exit}
    ;;
  tree)
    cat '{tree_out}'
    [ {tree_exit} -eq 0 ] || echo 'error: failed to select a version' >&2
    exit {tree_exit}
    ;;
esac
exit 2
"#,
            args_log = args_log.display(),
            metadata_out = metadata_out.display(),
            tree_out = tree_out.display(),
        );

        let program = dir.path().join("cargo");
        std::fs::write(&program, script).unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();

        Self {
            _dir: dir,
            program,
            args_log,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments of every invocation so far, one line per invocation
    pub fn invocations(&self) -> Vec<String> {
        std::fs::read_to_string(&self.args_log)
            .unwrap_or_default()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }
}
