//! protoc plugin protocol
//!
//! protoc writes a serialized `CodeGeneratorRequest` to the plugin's stdin and reads a
//! serialized `CodeGeneratorResponse` from its stdout. Generation failures are reported in
//! the response's `error` field; only transport failures make the process fail.

use crate::driver;
use anyhow::{Context, Result};
use prost::Message;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use std::io::{Read, Write};
use tracing::debug;
use tsgrpc_core::GenerateResult;

/// Decode a request from its wire bytes
pub fn decode_request(bytes: &[u8]) -> GenerateResult<CodeGeneratorRequest> {
    Ok(CodeGeneratorRequest::decode(bytes)?)
}

/// Encode a response to its wire bytes
pub fn encode_response(response: &CodeGeneratorResponse) -> Vec<u8> {
    response.encode_to_vec()
}

/// Build the response for one request
///
/// When any requested file fails, the response carries every failure and no files.
pub fn respond(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };

    match driver::run(
        &request.proto_file,
        &request.file_to_generate,
        request.parameter(),
    ) {
        Ok(output) => match output.error_message() {
            Some(message) => response.error = Some(message),
            None => {
                response.file = output
                    .files
                    .into_iter()
                    .map(|generated| File {
                        name: Some(generated.name),
                        content: Some(generated.content),
                        ..Default::default()
                    })
                    .collect();
            }
        },
        Err(error) => response.error = Some(error.to_string()),
    }

    response
}

/// Serve one request from `input`, writing the response to `output`
pub fn run<R: Read, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .context("Failed to read CodeGeneratorRequest")?;
    debug!(bytes = bytes.len(), "request received");

    let request = decode_request(&bytes).context("Failed to decode CodeGeneratorRequest")?;
    let response = respond(&request);

    output
        .write_all(&encode_response(&response))
        .context("Failed to write CodeGeneratorResponse")?;
    output.flush().context("Failed to flush CodeGeneratorResponse")?;

    Ok(())
}
