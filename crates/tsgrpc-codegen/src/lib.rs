//! tsgrpc-codegen - TypeScript gRPC bindings from protobuf services
//!
//! Generates one `<stem>_grpc_pb.ts` module per schema file, declaring typed server
//! implementations, method definition tables, callback and promise clients for the Node.js
//! gRPC runtime.
//!
//! # Architecture
//!
//! ```text
//! SchemaGraph
//!     ↓
//!  [Emitters: imports, messages, service]
//!     ↓
//!    IR (Item, Member, Value)
//!     ↓
//!  [Renderer] → greeter_grpc_pb.ts
//! ```
//!
//! Emitters only decide what is declared; [`render`] owns the layout. Every name shared between
//! declarations comes from [`naming`].
//!
//! # Output
//!
//! For `greeter.proto` in package `greet` with a unary `SayHello`:
//!
//! ```text
//! // GENERATED CODE
//!
//! import * as grpc from 'grpc';
//! import * as greeter_pb from './greeter_pb';
//!
//! function serialize_greet_HelloReply(arg: greeter_pb.HelloReply): any { ... }
//! ...
//! export interface IGreeterImplementation { ... }
//! export const GreeterService: grpc.ServiceDefinition<IGreeterImplementation> = { ... }
//! export interface IGreeterClient extends grpc.Client { ... }
//! export interface GreeterClientConstructor { ... }
//! export const GreeterClient = <GreeterClientConstructor> ...
//! export interface IGreeterPromiseClient { ... }
//! ```

pub mod comments;
pub mod generator;
pub mod imports;
pub mod ir;
pub mod messages;
pub mod naming;
pub mod render;
pub mod service;

pub use generator::{GeneratedFile, Generator, Stage, generate_file};
pub use imports::RUNTIME_ALIAS;
