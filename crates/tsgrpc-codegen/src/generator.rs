//! Per-file orchestration.
//!
//! A file is generated in fixed stages:
//!
//! ```text
//! Start → Header → Imports → MessageBindings → ServiceContracts → Done
//! ```
//!
//! Each stage renders straight into the sink. The first failing stage aborts the rest and
//! whatever was already written stays in the sink.

use crate::comments::{CommentPosition, prefixed_comments};
use crate::ir::Item;
use crate::render::Renderer;
use crate::{imports, messages, naming, service};
use std::fmt;
use tracing::{debug, info};
use tsgrpc_core::{FileId, GenerateResult, GeneratorOptions, SchemaFile, SchemaGraph};

/// Header marker of files declaring services.
pub const GENERATED_MARKER: &str = "// GENERATED CODE";

/// Header marker of files without services.
pub const NO_SERVICES_MARKER: &str = "// GENERATED CODE -- NO SERVICES IN PROTO";

/// Generation stage of one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Start,
    Header,
    Imports,
    MessageBindings,
    ServiceContracts,
    Done,
}

impl Stage {
    /// The stage following this one; `Done` is terminal.
    pub fn next(self) -> Self {
        match self {
            Stage::Start => Stage::Header,
            Stage::Header => Stage::Imports,
            Stage::Imports => Stage::MessageBindings,
            Stage::MessageBindings => Stage::ServiceContracts,
            Stage::ServiceContracts | Stage::Done => Stage::Done,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Start => write!(f, "start"),
            Stage::Header => write!(f, "header"),
            Stage::Imports => write!(f, "imports"),
            Stage::MessageBindings => write!(f, "message bindings"),
            Stage::ServiceContracts => write!(f, "service contracts"),
            Stage::Done => write!(f, "done"),
        }
    }
}

/// A generated module and the path it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Root-relative output path (`greet/greeter_grpc_pb.ts`).
    pub name: String,
    pub content: String,
}

/// Generate the module for one schema file into `sink`.
pub fn generate_file<W: fmt::Write>(
    graph: &SchemaGraph,
    file_id: FileId,
    options: &GeneratorOptions,
    sink: &mut W,
) -> GenerateResult<()> {
    let file = graph.file(file_id);
    naming::validate_path(&file.path)?;

    let mut renderer = Renderer::new(sink);
    let mut stage = Stage::Start;

    loop {
        stage = stage.next();
        debug!(file = %file.path, %stage, "generation stage");

        match stage {
            Stage::Start => {}
            Stage::Header => renderer.render_all(&header(file))?,
            Stage::Imports => {
                renderer.render_all(&imports::import_block(graph, file, options)?)?;
                renderer.render(&Item::Blank)?;
            }
            Stage::MessageBindings => {
                for id in messages::reachable_messages(graph, file) {
                    renderer.render_all(&messages::message_bindings(graph, id)?)?;
                }
            }
            Stage::ServiceContracts => {
                for service in &file.services {
                    renderer.render_all(&service::service_contract(graph, service)?)?;
                }
            }
            Stage::Done => break,
        }
    }

    Ok(())
}

fn header(file: &SchemaFile) -> Vec<Item> {
    let marker = if file.services.is_empty() {
        NO_SERVICES_MARKER
    } else {
        GENERATED_MARKER
    };
    let mut items = vec![Item::Comment(marker.to_string()), Item::Blank];

    let comments = prefixed_comments(file, CommentPosition::Leading, "//");
    if !comments.is_empty() {
        items.push(Item::Comment(comments));
        items.push(Item::Blank);
    }
    items
}

/// Generates modules for files of one schema graph.
///
/// # Example
///
/// ```
/// use prost_types::FileDescriptorProto;
/// use tsgrpc_codegen::Generator;
/// use tsgrpc_core::{GeneratorOptions, SchemaGraph};
///
/// let file = FileDescriptorProto {
///     name: Some("empty.proto".to_string()),
///     ..Default::default()
/// };
/// let graph = SchemaGraph::from_descriptors(&[file]).unwrap();
/// let generator = Generator::new(&graph, GeneratorOptions::default());
///
/// let generated = generator.generate_path("empty.proto").unwrap();
///
/// assert_eq!(generated.name, "empty_grpc_pb.ts");
/// assert!(generated.content.starts_with("// GENERATED CODE -- NO SERVICES IN PROTO\n"));
/// ```
pub struct Generator<'g> {
    graph: &'g SchemaGraph,
    options: GeneratorOptions,
}

impl<'g> Generator<'g> {
    pub fn new(graph: &'g SchemaGraph, options: GeneratorOptions) -> Self {
        Self { graph, options }
    }

    /// Generate the module for `file_id` into a fresh buffer.
    pub fn generate(&self, file_id: FileId) -> GenerateResult<GeneratedFile> {
        let file = self.graph.file(file_id);
        let mut content = String::new();
        generate_file(self.graph, file_id, &self.options, &mut content)?;

        let generated = GeneratedFile {
            name: naming::service_file_target(&file.path),
            content,
        };
        info!(
            file = %file.path,
            output = %generated.name,
            services = file.services.len(),
            "generated file"
        );
        Ok(generated)
    }

    /// Generate the module for the file at `path`.
    pub fn generate_path(&self, path: &str) -> GenerateResult<GeneratedFile> {
        self.generate(self.graph.file_id(path)?)
    }
}
