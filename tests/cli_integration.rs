//! CLI integration tests for codegen-arch.
//!
//! These tests run the binary against manifests written to temporary
//! directories, with the override variables cleared and the global config
//! directory pointed into the temporary directory.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const LIBRARY_MANIFEST: &str = r#"
[module]
name = "libart-compiler"
kind = "library"

[codegen.arm]
srcs = ["arm/calling_convention_arm.cc", "intrinsics_utils.cc"]
cflags = ["-DART_ENABLE_CODEGEN_arm"]
static.whole_static_libs = ["libvixl-arm"]

[codegen.arm64]
srcs = ["arm64/code_generator_arm64.cc", "intrinsics_utils.cc"]
cflags = ["-DART_ENABLE_CODEGEN_arm64"]
static.whole_static_libs = ["libvixl"]

[codegen.x86]
srcs = ["x86/code_generator_x86.cc", "intrinsics_utils.cc"]
cflags = ["-DART_ENABLE_CODEGEN_x86"]

[codegen.x86_64]
srcs = ["x86_64/code_generator_x86_64.cc", "x86/assembler_x86.cc"]
cflags = ["-DART_ENABLE_CODEGEN_x86_64"]
shared.shared_libs = ["liblog"]
"#;

const BINARY_MANIFEST: &str = r#"
[module]
name = "dex2oat"
kind = "binary"

[codegen.arm]
srcs = ["dex2oat_arm.cc"]
static.whole_static_libs = ["libignored"]
"#;

/// Get the codegen-arch binary command, isolated from the caller's setup.
fn codegen_arch(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("codegen-arch").unwrap();
    cmd.env("CODEGEN_ARCH_HOME", home)
        .env_remove("ART_HOST_CODEGEN_ARCHS")
        .env_remove("ART_TARGET_CODEGEN_ARCHS");
    cmd
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write_manifest(dir: &Path, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("Codegen.toml"), content).unwrap();
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// codegen-arch resolve
// ============================================================================

#[test]
fn test_resolve_library_module() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), LIBRARY_MANIFEST);

    let output = codegen_arch(&tmp.path().join("home"))
        .args(["resolve", "--device-arch", "arm64", "--host-arches", "x86 x86_64"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let target = &json["libart-compiler"]["target"];

    assert_eq!(
        strings(&target["device"]["srcs"]),
        vec![
            "arm/calling_convention_arm.cc",
            "intrinsics_utils.cc",
            "arm64/code_generator_arm64.cc",
        ]
    );
    assert_eq!(
        strings(&target["device"]["static"]["whole_static_libs"]),
        vec!["libvixl-arm", "libvixl"]
    );
    assert_eq!(
        strings(&target["host"]["srcs"]),
        vec![
            "x86/code_generator_x86.cc",
            "intrinsics_utils.cc",
            "x86_64/code_generator_x86_64.cc",
            "x86/assembler_x86.cc",
        ]
    );
    assert_eq!(
        strings(&target["host"]["cflags"]),
        vec!["-DART_ENABLE_CODEGEN_x86", "-DART_ENABLE_CODEGEN_x86_64"]
    );
    assert_eq!(strings(&target["host"]["shared"]["shared_libs"]), vec!["liblog"]);
}

#[test]
fn test_resolve_without_device_arches_has_no_device_properties() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), LIBRARY_MANIFEST);

    let output = codegen_arch(&tmp.path().join("home"))
        .args(["resolve"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let target = json["libart-compiler"]["target"].as_object().unwrap();
    assert!(target.contains_key("host"));
    assert!(!target.contains_key("device"));
}

#[test]
fn test_resolve_binary_module_has_no_library_properties() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), BINARY_MANIFEST);

    let output = codegen_arch(&tmp.path().join("home"))
        .args(["resolve", "--host-arches", "arm", "--device-arches", "arm"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    for axis in ["device", "host"] {
        let props = json["dex2oat"]["target"][axis].as_object().unwrap();
        assert_eq!(strings(&props["srcs"]), vec!["dex2oat_arm.cc"]);
        assert!(!props.contains_key("static"));
        assert!(!props.contains_key("shared"));
    }
}

#[test]
fn test_resolve_unknown_arch_from_environment() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), LIBRARY_MANIFEST);

    codegen_arch(&tmp.path().join("home"))
        .args(["resolve"])
        .env("ART_TARGET_CODEGEN_ARCHS", "arm aarch64")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("libart-compiler").not())
        .stderr(predicate::str::contains(
            "unknown codegen architecture \"aarch64\"",
        ))
        .stderr(predicate::str::contains("Use `arm64` instead of `aarch64`"));
}

#[test]
fn test_resolve_flag_overrides_environment() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), LIBRARY_MANIFEST);

    codegen_arch(&tmp.path().join("home"))
        .args(["resolve", "--host-arches", "arm"])
        .env("ART_HOST_CODEGEN_ARCHS", "mips")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("arm/calling_convention_arm.cc"));
}

#[test]
fn test_resolve_workspace_isolates_failures() {
    let tmp = temp_dir();
    write_manifest(&tmp.path().join("compiler"), LIBRARY_MANIFEST);
    write_manifest(
        &tmp.path().join("broken"),
        "[module]\nname = \"broken\"\nkind = \"library\"\n",
    );
    write_manifest(&tmp.path().join("dex2oat"), BINARY_MANIFEST);

    codegen_arch(&tmp.path().join("home"))
        .args(["resolve", "--workspace", ".", "--host-arches", "arm sparc"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("module `broken`"))
        .stderr(predicate::str::contains("\"sparc\""));

    let output = codegen_arch(&tmp.path().join("home"))
        .args(["resolve", "--workspace", ".", "--host-arches", "arm"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(names, vec!["broken", "dex2oat", "libart-compiler"]);
}

#[test]
fn test_resolve_toml_format() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), BINARY_MANIFEST);

    codegen_arch(&tmp.path().join("home"))
        .args(["resolve", "--format", "toml", "--host-arches", "arm"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("dex2oat"))
        .stdout(predicate::str::contains("srcs = "));
}

#[test]
fn test_resolve_fails_without_manifest() {
    let tmp = temp_dir();

    codegen_arch(&tmp.path().join("home"))
        .args(["resolve"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no Codegen.toml found"));
}

#[test]
fn test_resolve_rejects_unknown_manifest_arch() {
    let tmp = temp_dir();
    write_manifest(
        tmp.path(),
        "[module]\nname = \"libfoo\"\n\n[codegen.mips]\nsrcs = [\"mips.cc\"]\n",
    );

    codegen_arch(&tmp.path().join("home"))
        .args(["resolve"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_resolve_rejects_duplicate_module_names() {
    let tmp = temp_dir();
    write_manifest(
        &tmp.path().join("a"),
        "[module]\nname = \"libdup\"\n\n[codegen.arm]\nsrcs = [\"a.cc\"]\n",
    );
    write_manifest(
        &tmp.path().join("b"),
        "[module]\nname = \"libdup\"\n\n[codegen.arm]\nsrcs = [\"b.cc\"]\n",
    );

    codegen_arch(&tmp.path().join("home"))
        .args(["resolve", "--workspace", ".", "--host-arches", "arm"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("b.cc").not())
        .stderr(predicate::str::contains("module `libdup` is declared by both"));
}

#[test]
fn test_resolve_rejects_misspelled_property() {
    let tmp = temp_dir();
    write_manifest(
        tmp.path(),
        "[module]\nname = \"libfoo\"\n\n[codegen.arm]\nsrc = [\"arm.cc\"]\n",
    );

    codegen_arch(&tmp.path().join("home"))
        .args(["resolve", "--host-arches", "arm"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field `src`"));
}

// ============================================================================
// codegen-arch arches
// ============================================================================

#[test]
fn test_arches_defaults_and_widening() {
    let tmp = temp_dir();

    codegen_arch(&tmp.path().join("home"))
        .args(["arches", "--device-arch", "x86_64"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("device: x86 x86_64\n"))
        .stdout(predicate::str::contains("host: arm arm64 x86 x86_64\n"));
}

#[test]
fn test_arches_without_device() {
    let tmp = temp_dir();

    codegen_arch(&tmp.path().join("home"))
        .args(["arches"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("device: (none)"));
}

#[test]
fn test_arches_override_keeps_order_and_repeats() {
    let tmp = temp_dir();

    codegen_arch(&tmp.path().join("home"))
        .args(["arches"])
        .env("ART_HOST_CODEGEN_ARCHS", "  x86   arm x86 ")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("host: x86 arm x86\n"));
}

#[test]
fn test_arches_from_project_config() {
    let tmp = temp_dir();
    let config_dir = tmp.path().join(".codegen-arch");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[device]
arches = ["arm64", "x86_64"]

[overrides]
host = "x86_64"
"#,
    )
    .unwrap();

    codegen_arch(&tmp.path().join("home"))
        .args(["arches"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("device: arm arm64 x86 x86_64\n"))
        .stdout(predicate::str::contains("host: x86_64\n"));
}

#[test]
fn test_arches_empty_variable_uses_config_default() {
    let tmp = temp_dir();
    let config_dir = tmp.path().join(".codegen-arch");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[overrides]\nhost = \"arm64\"\n",
    )
    .unwrap();

    codegen_arch(&tmp.path().join("home"))
        .args(["arches"])
        .env("ART_HOST_CODEGEN_ARCHS", "")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("host: arm64\n"));
}

#[test]
fn test_no_color_disables_ansi_in_logs() {
    let tmp = temp_dir();

    codegen_arch(&tmp.path().join("home"))
        .args(["--no-color", "--verbose", "arches"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("arches derived"))
        .stderr(predicate::str::contains("\x1b[").not());
}

// ============================================================================
// codegen-arch completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let tmp = temp_dir();

    codegen_arch(&tmp.path().join("home"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("codegen-arch"));
}
