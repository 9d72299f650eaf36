//! tsgrpc-core - Schema graph, options and error types
//!
//! This crate provides the read-only model the tsgrpc generator works on:
//! - [`SchemaGraph`] built once from protobuf file descriptors
//! - [`StreamingMode`] classification of RPC methods
//! - [`GeneratorOptions`] parsed from the protoc parameter string
//! - [`GenerateError`] for error handling

mod config;
mod error;
mod schema;
mod source;
mod streaming;

pub use config::{DEFAULT_RUNTIME_MODULE, GeneratorOptions};
pub use error::{ErrorKind, GenerateError, GenerateResult};
pub use schema::{FileId, MessageId, MessageType, Method, SchemaFile, SchemaGraph, Service};
pub use source::SourceComments;
pub use streaming::StreamingMode;
