//! Read-only schema graph built from protobuf file descriptors
//!
//! The graph is resolved once per invocation and never mutated afterwards. Entities refer to
//! each other through [`FileId`] and [`MessageId`] handles into the owning [`SchemaGraph`].
//!
//! # Resolution
//!
//! ```text
//! [FileDescriptorProto]
//!     ↓ pass 1: register files and (nested) messages
//!     ↓ pass 2: resolve dependencies, services and method types
//! SchemaGraph
//! ```

use crate::error::{GenerateError, GenerateResult};
use crate::source::{FILE_SERVICE, FILE_SYNTAX, SERVICE_METHOD, SourceIndex};
use crate::{SourceComments, StreamingMode};
use prost_types::{DescriptorProto, FileDescriptorProto, ServiceDescriptorProto};
use std::collections::HashMap;
use tracing::debug;

/// Handle of a [`SchemaFile`] within its graph
///
/// Handles are only issued by [`SchemaGraph`]:
///
/// ```compile_fail
/// let id = tsgrpc_core::FileId(0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub(crate) usize);

/// Handle of a [`MessageType`] within its graph
///
/// ```compile_fail
/// let id = tsgrpc_core::MessageId(0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub(crate) usize);

/// One schema file.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    /// Root-relative, slash separated path (`greet/greeter.proto`).
    pub path: String,

    /// Declared package, empty when none.
    pub package: String,

    /// Top-level message types, in declaration order.
    pub messages: Vec<MessageId>,

    /// Services, in declaration order.
    pub services: Vec<Service>,

    /// Imported files, in declaration order (repeats preserved).
    pub dependencies: Vec<FileId>,

    /// Comments attached to the `syntax` declaration.
    pub comments: Option<SourceComments>,
}

/// A message type, used as a request or response payload.
#[derive(Debug, Clone)]
pub struct MessageType {
    /// Fully qualified name without leading dot (`greet.HelloRequest`).
    pub full_name: String,

    /// File declaring the message.
    pub file: FileId,
}

/// An RPC service.
#[derive(Debug, Clone)]
pub struct Service {
    pub name: String,

    /// Fully qualified name (`greet.Greeter`).
    pub full_name: String,

    /// Methods, in declaration order.
    pub methods: Vec<Method>,

    pub comments: Option<SourceComments>,
}

/// An RPC method of a [`Service`].
#[derive(Debug, Clone)]
pub struct Method {
    pub name: String,
    pub input: MessageId,
    pub output: MessageId,
    pub mode: StreamingMode,
    pub comments: Option<SourceComments>,
}

/// Every file of one generation run, fully resolved.
#[derive(Debug, Clone, Default)]
pub struct SchemaGraph {
    files: Vec<SchemaFile>,
    messages: Vec<MessageType>,
    file_index: HashMap<String, FileId>,
    message_index: HashMap<String, MessageId>,
}

impl SchemaGraph {
    /// Build the graph from a complete descriptor set.
    ///
    /// `descriptors` must contain every file transitively imported by the files that will be
    /// generated, as protoc supplies in `CodeGeneratorRequest.proto_file`.
    pub fn from_descriptors(descriptors: &[FileDescriptorProto]) -> GenerateResult<Self> {
        let mut graph = SchemaGraph::default();

        for descriptor in descriptors {
            graph.register_file(descriptor)?;
        }

        for (index, descriptor) in descriptors.iter().enumerate() {
            graph.resolve_file(FileId(index), descriptor)?;
        }

        debug!(
            files = graph.files.len(),
            messages = graph.messages.len(),
            "schema graph resolved"
        );

        Ok(graph)
    }

    /// Get a file by handle.
    pub fn file(&self, id: FileId) -> &SchemaFile {
        &self.files[id.0]
    }

    /// Get a message by handle.
    pub fn message(&self, id: MessageId) -> &MessageType {
        &self.messages[id.0]
    }

    /// Look up a file by path.
    pub fn file_id(&self, path: &str) -> GenerateResult<FileId> {
        self.file_index
            .get(path)
            .copied()
            .ok_or_else(|| GenerateError::UnknownFile(path.to_string()))
    }

    /// Look up a message by fully qualified name (leading dot optional).
    pub fn message_id(&self, full_name: &str) -> Option<MessageId> {
        let full_name = full_name.strip_prefix('.').unwrap_or(full_name);
        self.message_index.get(full_name).copied()
    }

    /// File declaring `message`.
    pub fn owner(&self, message: &MessageType) -> &SchemaFile {
        self.file(message.file)
    }

    /// All files with their handles, in descriptor order.
    pub fn files(&self) -> impl Iterator<Item = (FileId, &SchemaFile)> {
        self.files
            .iter()
            .enumerate()
            .map(|(index, file)| (FileId(index), file))
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    fn register_file(&mut self, descriptor: &FileDescriptorProto) -> GenerateResult<()> {
        let path = descriptor.name().to_string();
        let id = FileId(self.files.len());

        if self.file_index.insert(path.clone(), id).is_some() {
            return Err(GenerateError::DuplicateFile(path));
        }

        let index = SourceIndex::new(descriptor.source_code_info.as_ref());
        self.files.push(SchemaFile {
            path,
            package: descriptor.package().to_string(),
            messages: Vec::new(),
            services: Vec::new(),
            dependencies: Vec::new(),
            comments: index.comments(&[FILE_SYNTAX]),
        });

        let messages = descriptor
            .message_type
            .iter()
            .map(|message| self.register_message(id, descriptor.package(), message))
            .collect::<GenerateResult<Vec<_>>>()?;
        self.files[id.0].messages = messages;

        Ok(())
    }

    fn register_message(
        &mut self,
        file: FileId,
        scope: &str,
        descriptor: &DescriptorProto,
    ) -> GenerateResult<MessageId> {
        let full_name = qualify(scope, descriptor.name());
        let id = MessageId(self.messages.len());

        if let Some(previous) = self.message_index.insert(full_name.clone(), id) {
            return Err(GenerateError::DuplicateMessage {
                message: full_name,
                first: self.owner(self.message(previous)).path.clone(),
                second: self.file(file).path.clone(),
            });
        }

        self.messages.push(MessageType {
            full_name: full_name.clone(),
            file,
        });

        for nested in &descriptor.nested_type {
            self.register_message(file, &full_name, nested)?;
        }

        Ok(id)
    }

    fn resolve_file(&mut self, id: FileId, descriptor: &FileDescriptorProto) -> GenerateResult<()> {
        let dependencies = descriptor
            .dependency
            .iter()
            .map(|dependency| {
                self.file_index.get(dependency).copied().ok_or_else(|| {
                    GenerateError::MissingDependency {
                        file: descriptor.name().to_string(),
                        dependency: dependency.clone(),
                    }
                })
            })
            .collect::<GenerateResult<Vec<_>>>()?;

        let index = SourceIndex::new(descriptor.source_code_info.as_ref());
        let package = descriptor.package();
        let services = descriptor
            .service
            .iter()
            .enumerate()
            .map(|(position, service)| self.resolve_service(package, position, service, &index))
            .collect::<GenerateResult<Vec<_>>>()?;

        let file = &mut self.files[id.0];
        file.dependencies = dependencies;
        file.services = services;

        Ok(())
    }

    fn resolve_service(
        &self,
        package: &str,
        position: usize,
        descriptor: &ServiceDescriptorProto,
        index: &SourceIndex<'_>,
    ) -> GenerateResult<Service> {
        let name = descriptor.name().to_string();
        let full_name = qualify(package, &name);
        let service_path = [FILE_SERVICE, position as i32];

        let methods = descriptor
            .method
            .iter()
            .enumerate()
            .map(|(method_position, method)| {
                let method_name = method.name().to_string();
                let qualified = format!("{full_name}.{method_name}");
                let input = self.resolve_type(&qualified, method.input_type())?;
                let output = self.resolve_type(&qualified, method.output_type())?;
                let method_path = [
                    FILE_SERVICE,
                    position as i32,
                    SERVICE_METHOD,
                    method_position as i32,
                ];

                Ok(Method {
                    name: method_name,
                    input,
                    output,
                    mode: StreamingMode::from_flags(
                        method.client_streaming(),
                        method.server_streaming(),
                    ),
                    comments: index.comments(&method_path),
                })
            })
            .collect::<GenerateResult<Vec<_>>>()?;

        Ok(Service {
            name,
            full_name,
            methods,
            comments: index.comments(&service_path),
        })
    }

    fn resolve_type(&self, method: &str, type_name: &str) -> GenerateResult<MessageId> {
        self.message_id(type_name)
            .ok_or_else(|| GenerateError::UnknownMessageType {
                method: method.to_string(),
                type_name: type_name.trim_start_matches('.').to_string(),
            })
    }
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}
