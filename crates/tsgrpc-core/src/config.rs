//! Generator options parsed from the protoc parameter string

use crate::error::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Module specifier used for the runtime import when none is configured
pub const DEFAULT_RUNTIME_MODULE: &str = "grpc";

const KNOWN_OPTIONS: &[&str] = &["runtime_module"];

/// Options controlling generation of one request
///
/// Parsed from the `--tsgrpc_opt` / `--tsgrpc_out=<opts>:` parameter, a comma separated list of
/// `key=value` pairs. Keys other than the recognized ones are ignored with a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Module the runtime is imported from (`import * as grpc from '<runtime_module>'`)
    #[serde(default = "default_runtime_module")]
    pub runtime_module: String,

    /// Unrecognized option keys, in parameter order
    #[serde(skip)]
    pub ignored: Vec<String>,
}

fn default_runtime_module() -> String {
    DEFAULT_RUNTIME_MODULE.to_string()
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime_module: default_runtime_module(),
            ignored: Vec::new(),
        }
    }
}

impl GeneratorOptions {
    /// Create options with every value at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a protoc parameter string
    ///
    /// An empty parameter yields the defaults. Unknown keys are skipped and recorded in
    /// [`GeneratorOptions::ignored`]. A recognized key without a value, given twice, or with an
    /// invalid value is rejected.
    pub fn from_parameter(parameter: &str) -> GenerateResult<Self> {
        let mut values = serde_json::Map::new();
        let mut ignored = Vec::new();

        for pair in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (pair, None),
            };

            if !KNOWN_OPTIONS.contains(&key) {
                warn!(option = %pair, "ignoring unknown generator option");
                ignored.push(key.to_string());
                continue;
            }

            let Some(value) = value else {
                return Err(GenerateError::Config(format!(
                    "option `{key}` requires a value"
                )));
            };

            let previous = values.insert(
                key.to_string(),
                serde_json::Value::String(value.to_string()),
            );
            if previous.is_some() {
                return Err(GenerateError::Config(format!(
                    "option `{key}` given more than once"
                )));
            }
        }

        let mut options: Self = serde_json::from_value(serde_json::Value::Object(values))?;
        options.ignored = ignored;
        options.validate()?;
        Ok(options)
    }

    /// Override the runtime module specifier
    pub fn with_runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = module.into();
        self
    }

    fn validate(&self) -> GenerateResult<()> {
        if self.runtime_module.is_empty() {
            return Err(GenerateError::Config(
                "option `runtime_module` cannot be empty".to_string(),
            ));
        }
        if self.runtime_module.contains(['\'', '\\', '\n']) {
            return Err(GenerateError::Config(format!(
                "option `runtime_module` is not a valid module specifier: {:?}",
                self.runtime_module
            )));
        }
        Ok(())
    }
}
