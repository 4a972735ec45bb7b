//! Test fixtures for common test scenarios.

use std::path::{Path, PathBuf};

use crate::core::manifest::{Manifest, MANIFEST_NAME};
use crate::core::module::{Module, ModuleKind};
use crate::core::table::CodegenTable;

/// A library manifest with properties for every supported architecture.
///
/// Sources shared between architectures (`optimizing/intrinsics_utils.cc`,
/// `utils/x86/assembler_x86.cc`) exercise deduplication.
pub const LIBRARY_MANIFEST: &str = r#"
[module]
name = "libart-compiler"
kind = "library"

[codegen.arm]
srcs = [
    "jni/quick/arm/calling_convention_arm.cc",
    "utils/arm/assembler_arm_vixl.cc",
    "optimizing/intrinsics_utils.cc",
]
cflags = ["-DART_ENABLE_CODEGEN_arm"]
static.whole_static_libs = ["libvixl-arm"]

[codegen.arm64]
srcs = [
    "optimizing/code_generator_arm64.cc",
    "utils/arm64/assembler_arm64.cc",
    "optimizing/intrinsics_utils.cc",
]
cflags = ["-DART_ENABLE_CODEGEN_arm64"]
static.whole_static_libs = ["libvixl"]

[codegen.x86]
srcs = [
    "optimizing/code_generator_x86.cc",
    "utils/x86/assembler_x86.cc",
    "optimizing/intrinsics_utils.cc",
]
cflags = ["-DART_ENABLE_CODEGEN_x86"]
static.whole_static_libs = ["libx86-asm"]

[codegen.x86_64]
srcs = [
    "optimizing/code_generator_x86_64.cc",
    "utils/x86_64/assembler_x86_64.cc",
    "utils/x86/assembler_x86.cc",
]
cflags = ["-DART_ENABLE_CODEGEN_x86_64"]
cppflags = ["-DART_X86_64_ABI"]
shared.shared_libs = ["liblog"]
"#;

/// The table described by [`LIBRARY_MANIFEST`].
pub fn sample_table() -> CodegenTable {
    match Manifest::parse(LIBRARY_MANIFEST, Path::new(MANIFEST_NAME)) {
        Ok(manifest) => manifest.codegen,
        Err(e) => panic!("fixture manifest does not parse: {:#}", e),
    }
}

/// A module using [`sample_table`], as a library or as a binary.
pub fn sample_module(library: bool) -> Module {
    let kind = if library {
        ModuleKind::Library
    } else {
        ModuleKind::Binary
    };
    Module::new("libart-compiler", kind).with_codegen(sample_table())
}

/// Manifest text for a module with a single architecture entry.
pub fn single_arch_manifest(name: &str, kind: &str, arch: &str, src: &str) -> String {
    format!(
        r#"[module]
name = "{name}"
kind = "{kind}"

[codegen.{arch}]
srcs = ["{src}"]
cflags = ["-DCODEGEN_{arch}"]
"#
    )
}

/// Write a manifest into `dir` (created if needed) and return its path.
pub fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    if let Err(e) = std::fs::create_dir_all(dir) {
        panic!("failed to create {}: {}", dir.display(), e);
    }
    let path = dir.join(MANIFEST_NAME);
    if let Err(e) = std::fs::write(&path, content) {
        panic!("failed to write {}: {}", path.display(), e);
    }
    path
}
