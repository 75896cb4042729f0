//! End-to-end tests for the shader-build binary

#![cfg(unix)]

mod stub_compiler;

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn shader_build(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shader-build"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run shader-build")
}

fn write_manifest(dir: &Path, compiler: &Path, shaders: &[&str]) {
    let list = shaders
        .iter()
        .map(|s| format!("\"{}\"", s))
        .collect::<Vec<_>>()
        .join(", ");
    let manifest = format!(
        "compiler = \"{}\"\nshaders = [{}]\n",
        compiler.display(),
        list
    );
    std::fs::write(dir.join("shaders.toml"), manifest).expect("Failed to write manifest");
}

#[test]
fn test_no_arguments_builds_project_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    let bin = tempdir().expect("Failed to create temp dir");
    let compiler = stub_compiler::install(bin.path(), "glslangValidator", stub_compiler::BY_NAME);
    stub_compiler::write_sources(dir.path(), &["simple.vert", "simple.frag"]);
    write_manifest(dir.path(), &compiler, &["simple.vert", "simple.frag"]);

    let output = shader_build(dir.path(), &[]);

    assert!(output.status.success(), "shader-build failed: {:?}", output);
    assert_eq!(
        stub_compiler::artifacts(dir.path()),
        ["simple.frag.spv", "simple.vert.spv"]
    );
}

#[test]
fn test_build_fails_when_any_shader_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let bin = tempdir().expect("Failed to create temp dir");
    let compiler = stub_compiler::install(bin.path(), "glslangValidator", stub_compiler::BY_NAME);
    stub_compiler::write_sources(dir.path(), &["broken.comp", "simple.vert"]);
    write_manifest(dir.path(), &compiler, &["broken.comp", "simple.vert"]);

    let output = shader_build(dir.path(), &["build"]);

    assert_eq!(output.status.code(), Some(1));
    // Units after the failure are still compiled
    assert_eq!(stub_compiler::artifacts(dir.path()), ["simple.vert.spv"]);
}

#[test]
fn test_allow_failures_exits_zero() {
    let dir = tempdir().expect("Failed to create temp dir");
    let bin = tempdir().expect("Failed to create temp dir");
    let compiler = stub_compiler::install(bin.path(), "glslangValidator", stub_compiler::BY_NAME);
    stub_compiler::write_sources(dir.path(), &["broken.comp"]);
    write_manifest(dir.path(), &compiler, &["broken.comp"]);

    let output = shader_build(dir.path(), &["build", "--allow-failures"]);

    assert!(output.status.success());
    assert!(stub_compiler::artifacts(dir.path()).is_empty());
}

#[test]
fn test_compiler_flag_overrides_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    let bin = tempdir().expect("Failed to create temp dir");
    let compiler = stub_compiler::install(bin.path(), "stubc", stub_compiler::BY_NAME);
    stub_compiler::write_sources(dir.path(), &["simple.frag"]);
    write_manifest(dir.path(), Path::new("no-such-compiler-91b2"), &["simple.frag"]);

    let output = shader_build(
        dir.path(),
        &["build", "--compiler", compiler.to_str().unwrap()],
    );

    assert!(output.status.success(), "shader-build failed: {:?}", output);
    assert!(dir.path().join("simple.frag.spv").is_file());
}

#[test]
fn test_explicit_manifest_and_project() {
    let project = tempdir().expect("Failed to create temp dir");
    let bin = tempdir().expect("Failed to create temp dir");
    let compiler = stub_compiler::install(bin.path(), "glslangValidator", stub_compiler::BY_NAME);
    stub_compiler::write_sources(project.path(), &["GenSamples.comp"]);
    std::fs::write(
        project.path().join("compute.toml"),
        format!(
            "compiler = \"{}\"\nshaders = [\"GenSamples.comp\"]\n",
            compiler.display()
        ),
    )
    .unwrap();

    let elsewhere = tempdir().expect("Failed to create temp dir");
    let output = shader_build(
        elsewhere.path(),
        &[
            "build",
            "--project",
            project.path().to_str().unwrap(),
            "--manifest",
            "compute.toml",
        ],
    );

    assert!(output.status.success(), "shader-build failed: {:?}", output);
    assert!(project.path().join("GenSamples.comp.spv").is_file());
    assert!(stub_compiler::artifacts(elsewhere.path()).is_empty());
}

#[test]
fn test_list_uses_bundled_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = shader_build(dir.path(), &["list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.contains("simple.vert.spv"));
    assert!(stdout.contains("oneBounce.comp.spv"));
}

#[test]
fn test_check_reports_missing_compiler() {
    let dir = tempdir().expect("Failed to create temp dir");
    stub_compiler::write_sources(dir.path(), &["simple.vert"]);
    write_manifest(dir.path(), Path::new("no-such-compiler-91b2"), &["simple.vert"]);

    let output = shader_build(dir.path(), &["check"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no-such-compiler-91b2"));
}

#[test]
fn test_check_accepts_valid_project() {
    let dir = tempdir().expect("Failed to create temp dir");
    let bin = tempdir().expect("Failed to create temp dir");
    let compiler = stub_compiler::install(bin.path(), "glslangValidator", stub_compiler::BY_NAME);
    stub_compiler::write_sources(dir.path(), &["simple.vert"]);
    write_manifest(dir.path(), &compiler, &["simple.vert"]);

    let output = shader_build(dir.path(), &["check"]);

    assert!(output.status.success(), "check failed: {:?}", output);
    assert!(stub_compiler::artifacts(dir.path()).is_empty());
}

#[test]
fn test_invalid_manifest_is_an_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("shaders.toml"), "shaders = []\n").unwrap();

    let output = shader_build(dir.path(), &["build"]);

    assert!(!output.status.success());
}
