//! Codegen resolution error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::arch::Arch;
use crate::core::axis::Axis;
use crate::util::diagnostic::Diagnostic;

/// Fatal, module-scoped configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum CodegenError {
    /// A selected name is not a supported architecture.
    #[error("unknown codegen architecture {name:?} for {axis}")]
    #[diagnostic(
        code(codegen::merge::unknown_arch),
        help("supported architectures: arm, arm64, x86, x86_64")
    )]
    UnknownArch {
        axis: Axis,
        name: String,
        hint: Option<Arch>,
    },

    /// A supported architecture has no entry in the module's table.
    #[error("codegen architecture `{arch}` has no properties in this module's table ({axis})")]
    #[diagnostic(code(codegen::merge::unmapped_arch))]
    UnmappedArch { axis: Axis, arch: Arch },
}

impl CodegenError {
    /// Construct an unknown-architecture error, filling in the alias hint.
    pub fn unknown_arch(axis: Axis, name: impl Into<String>) -> Self {
        let name = name.into();
        let hint = Arch::hint_for(&name);
        CodegenError::UnknownArch { axis, name, hint }
    }

    /// The axis being merged when the error occurred.
    pub fn axis(&self) -> Axis {
        match self {
            CodegenError::UnknownArch { axis, .. } | CodegenError::UnmappedArch { axis, .. } => {
                *axis
            }
        }
    }

    /// Convert to a user-friendly diagnostic for a module.
    pub fn to_diagnostic(&self, module: &str) -> Diagnostic {
        match self {
            CodegenError::UnknownArch { axis, name, hint } => {
                let mut diag = Diagnostic::error(format!("module `{}`: {}", module, self))
                    .with_context(format!(
                        "{} architectures come from `{}` or the device configuration",
                        axis,
                        axis.default_override_var()
                    ));

                if let Some(arch) = hint {
                    diag = diag.with_suggestion(format!("Use `{}` instead of `{}`", arch, name));
                }

                diag.with_suggestion(format!(
                    "Supported architectures: {}",
                    Arch::all_names().join(", ")
                ))
            }

            CodegenError::UnmappedArch { arch, .. } => {
                Diagnostic::error(format!("module `{}`: {}", module, self)).with_suggestion(
                    format!("Add a [codegen.{}] section to the module's manifest", arch),
                )
            }
        }
    }
}
