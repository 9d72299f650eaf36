//! tsgrpc-cli - protoc plugin host for the tsgrpc generator
//!
//! This crate provides:
//! - [`plugin`] decoding of `CodeGeneratorRequest` and encoding of `CodeGeneratorResponse`
//! - [`driver`] generation of every requested file with per-file failure isolation
//! - [`offline`] generation from a `FileDescriptorSet` on disk
//! - [`logging`] stderr tracing setup

pub mod driver;
pub mod logging;
pub mod offline;
pub mod plugin;

pub use driver::{DriverOutput, FileFailure};
pub use logging::{LOG_ENV, init_logging};
