//! Per-axis property merging.
//!
//! Fragments are appended in selection order. Only the source list is
//! deduplicated; flags and library lists are kept exactly as concatenated.

use crate::core::arch::Arch;
use crate::core::axis::Axis;
use crate::core::properties::{
    ArchProperties, CommonProperties, LibraryProperties, SourceProperties,
};
use crate::core::table::CodegenTable;
use crate::resolver::errors::CodegenError;

/// Merged properties of one axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisProperties {
    /// Deduplicated sources
    pub sources: SourceProperties,

    /// Concatenated flags
    pub common: CommonProperties,

    /// Concatenated libraries, present only for library modules
    pub library: Option<LibraryProperties>,
}

/// Resolve a selected name to its table entry.
pub fn lookup<'a>(
    axis: Axis,
    name: &str,
    table: &'a CodegenTable,
) -> Result<(Arch, &'a ArchProperties), CodegenError> {
    let arch: Arch = name
        .parse()
        .map_err(|_| CodegenError::unknown_arch(axis, name))?;
    let props = table
        .get(arch)
        .ok_or(CodegenError::UnmappedArch { axis, arch })?;
    Ok((arch, props))
}

/// Merge the properties of the selected architectures of one axis.
///
/// Fails on the first name that does not resolve; nothing merged so far is
/// returned in that case.
pub fn merge_axis(
    axis: Axis,
    arches: &[String],
    table: &CodegenTable,
    library: bool,
) -> Result<AxisProperties, CodegenError> {
    let mut merged = AxisProperties {
        library: library.then(LibraryProperties::default),
        ..Default::default()
    };

    for name in arches {
        let (arch, props) = lookup(axis, name, table)?;
        tracing::debug!(
            "{}: merging {} ({} srcs, {} cflags, {} cppflags)",
            axis,
            arch,
            props.sources.srcs.len(),
            props.common.cflags.len(),
            props.common.cppflags.len()
        );

        merged.sources.merge(&props.sources);
        merged.common.merge(&props.common);
        if let Some(ref mut libs) = merged.library {
            libs.merge(&props.library);
        }
    }

    merged.sources.dedup();
    Ok(merged)
}
