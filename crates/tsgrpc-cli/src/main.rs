//! protoc-gen-tsgrpc - TypeScript gRPC bindings for protoc
//!
//! Modes:
//! - no arguments: protoc plugin, request on stdin, response on stdout
//! - `--descriptor-set <FILE> --out <DIR>`: generate from a descriptor set on disk

use clap::Parser;
use std::io;
use std::path::PathBuf;
use tsgrpc_cli::{init_logging, offline, plugin};

#[derive(Parser)]
#[command(name = "protoc-gen-tsgrpc")]
#[command(author, version, about = "Generate TypeScript gRPC bindings from protobuf services", long_about = None)]
struct Cli {
    /// Binary FileDescriptorSet to read instead of a plugin request on stdin
    #[arg(long, requires = "out")]
    descriptor_set: Option<PathBuf>,

    /// Output directory for generated modules
    #[arg(long, requires = "descriptor_set")]
    out: Option<PathBuf>,

    /// Generator options (e.g., runtime_module=@grpc/grpc-js)
    #[arg(long, default_value = "")]
    parameter: String,

    /// Schema files to generate (default: every file in the descriptor set)
    #[arg(requires = "descriptor_set")]
    files: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match (cli.descriptor_set, cli.out) {
        (Some(descriptor_set), Some(out)) => {
            let written = offline::run(&descriptor_set, &out, &cli.parameter, &cli.files)?;
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
        _ => plugin::run(io::stdin().lock(), io::stdout().lock())?,
    }

    Ok(())
}
