//! Fake glslangValidator scripts for integration tests
//!
//! Each stub accepts `-V <input> -o <output>` like the real compiler.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Writes `<input>` contents prefixed with a marker to `<output>`, except for
/// sources whose name contains "broken", which exit 1 without output.
pub const BY_NAME: &str = r#"#!/bin/sh
in="$2"
out="$4"
case "$in" in
    *broken*)
        echo "ERROR: $in:1: syntax error" >&2
        exit 1
        ;;
esac
if [ ! -f "$in" ]; then
    echo "ERROR: cannot open file $in" >&2
    exit 2
fi
printf 'SPIRV\n' > "$out"
cat "$in" >> "$out"
"#;

/// Always fails, never writes output
pub const ALWAYS_FAIL: &str = r#"#!/bin/sh
echo "ERROR: $2: compilation failed" >&2
exit 1
"#;

/// Write an executable stub into `dir` and return its absolute path
pub fn install(dir: &Path, name: &str, script: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, script).expect("Failed to write stub compiler");
    let mut perms = std::fs::metadata(&path)
        .expect("Failed to stat stub compiler")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("Failed to chmod stub compiler");
    path
}

/// Create empty-ish shader sources in `dir`
pub fn write_sources(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), format!("#version 450\n// {}\n", name))
            .expect("Failed to write shader source");
    }
}

/// Sorted list of `.spv` files present in `dir`
pub fn artifacts(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read dir")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".spv"))
        .collect();
    names.sort();
    names
}
