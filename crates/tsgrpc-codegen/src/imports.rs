//! Import block of a generated module.

use crate::ir::{Import, Item};
use crate::naming;
use tsgrpc_core::{GenerateResult, GeneratorOptions, SchemaFile, SchemaGraph};

/// Name the runtime module is imported under. Generated types reference the runtime through it.
pub const RUNTIME_ALIAS: &str = "grpc";

/// Runtime import, the file's own message module, then one import per dependency.
///
/// The own message module is imported only when the file declares at least one message.
/// Dependencies keep their declared order; a dependency listed twice is imported twice.
pub fn import_block(
    graph: &SchemaGraph,
    file: &SchemaFile,
    options: &GeneratorOptions,
) -> GenerateResult<Vec<Item>> {
    let mut items = vec![Item::Import(Import {
        alias: RUNTIME_ALIAS.to_string(),
        module: options.runtime_module.clone(),
    })];

    if !file.messages.is_empty() {
        items.push(message_module_import(file, &file.path));
    }

    for &dependency in &file.dependencies {
        let dependency = graph.file(dependency);
        naming::validate_path(&dependency.path)?;
        items.push(message_module_import(file, &dependency.path));
    }

    Ok(items)
}

fn message_module_import(file: &SchemaFile, target: &str) -> Item {
    Item::Import(Import {
        alias: naming::module_alias(target),
        module: naming::relative_path(&file.path, &naming::message_file_target(target)),
    })
}
