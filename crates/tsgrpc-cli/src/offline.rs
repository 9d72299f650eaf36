//! Generation from a descriptor set on disk
//!
//! Accepts the output of `protoc --descriptor_set_out=<FILE> --include_imports
//! --include_source_info` and writes the generated modules below an output directory.

use crate::driver;
use anyhow::{Context, Result, bail};
use prost::Message;
use prost_types::FileDescriptorSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Generate `files` (every file of the set when empty) into `out_dir`
///
/// Returns the paths written. Nothing is written when any file fails.
pub fn run(
    descriptor_set: &Path,
    out_dir: &Path,
    parameter: &str,
    files: &[String],
) -> Result<Vec<PathBuf>> {
    let bytes = fs::read(descriptor_set)
        .with_context(|| format!("Failed to read descriptor set {}", descriptor_set.display()))?;
    let set = FileDescriptorSet::decode(bytes.as_slice())
        .with_context(|| format!("Failed to decode descriptor set {}", descriptor_set.display()))?;

    let files = if files.is_empty() {
        set.file
            .iter()
            .map(|file| file.name().to_string())
            .collect()
    } else {
        files.to_vec()
    };
    debug!(files = files.len(), "generating from descriptor set");

    let output = driver::run(&set.file, &files, parameter)?;
    if let Some(message) = output.error_message() {
        bail!("Generation failed:\n{message}");
    }

    let mut written = Vec::with_capacity(output.files.len());
    for generated in output.files {
        let path = out_dir.join(&generated.name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, generated.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
