//! Generation of every file of one request
//!
//! The schema graph and options are built once per request. Each requested file is then
//! generated into its own buffer, so one file failing never changes the output of another.

use prost_types::FileDescriptorProto;
use std::fmt;
use tracing::{info, warn};
use tsgrpc_codegen::{GeneratedFile, Generator};
use tsgrpc_core::{GenerateError, GenerateResult, GeneratorOptions, SchemaGraph};

/// A requested file that could not be generated
#[derive(Debug)]
pub struct FileFailure {
    /// Schema path as requested
    pub file: String,
    pub error: GenerateError,
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.error)
    }
}

/// Outcome of generating every requested file
#[derive(Debug, Default)]
pub struct DriverOutput {
    /// Generated modules, in request order
    pub files: Vec<GeneratedFile>,
    /// Files that failed, in request order
    pub failures: Vec<FileFailure>,
}

impl DriverOutput {
    /// Check if every requested file was generated
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// One `<file>: <message>` line per failure
    pub fn error_message(&self) -> Option<String> {
        if self.failures.is_empty() {
            return None;
        }
        Some(
            self.failures
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

/// Generate `files_to_generate` from `descriptors`
///
/// Fails as a whole only when the parameter or the descriptor set is invalid; per-file
/// failures are collected in [`DriverOutput::failures`].
pub fn run(
    descriptors: &[FileDescriptorProto],
    files_to_generate: &[String],
    parameter: &str,
) -> GenerateResult<DriverOutput> {
    let options = GeneratorOptions::from_parameter(parameter)?;
    let graph = SchemaGraph::from_descriptors(descriptors)?;
    let generator = Generator::new(&graph, options);

    let mut output = DriverOutput::default();
    for file in files_to_generate {
        match generator.generate_path(file) {
            Ok(generated) => output.files.push(generated),
            Err(error) => {
                warn!(file = %file, kind = %error.kind(), error = %error, "generation failed");
                output.failures.push(FileFailure {
                    file: file.clone(),
                    error,
                });
            }
        }
    }

    info!(
        generated = output.files.len(),
        failed = output.failures.len(),
        "request processed"
    );

    Ok(output)
}
