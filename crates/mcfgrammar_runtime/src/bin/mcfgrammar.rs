//! mcfgrammar CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use mcfgrammar_compiler::{ArgumentTypeRegistry, SchemaCompiler};
use mcfgrammar_runtime::{emit_json, emit_json_pretty};
use mcfgrammar_schema::CommandSchema;

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    schema: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
    quiet: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-p" | "--pretty" => config.pretty = true,
            "-q" | "--quiet" => config.quiet = true,
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    return Err("--output requires a path".into());
                }
                config.output = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.schema.is_some() {
                    return Err("only one schema file may be given".into());
                }
                config.schema = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("mcfgrammar {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(config.quiet);

    let Some(schema_path) = config.schema else {
        return Err("no schema file given; see --help".into());
    };

    let source = fs::read_to_string(&schema_path)
        .map_err(|e| format!("cannot read {}: {e}", schema_path.display()))?;
    let schema = CommandSchema::from_json_str(&source)?;

    let registry = ArgumentTypeRegistry::builtin();
    let grammar = SchemaCompiler::new(&registry).compile(&schema)?;

    let json = if config.pretty {
        emit_json_pretty(&grammar)?
    } else {
        emit_json(&grammar)?
    };

    match config.output {
        Some(path) => fs::write(&path, json)
            .map_err(|e| format!("cannot write {}: {e}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}

fn init_tracing(quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!(
        "mcfgrammar {} - compile a command schema into a grammar rule set

USAGE:
    mcfgrammar [OPTIONS] <commands.json>

ARGS:
    <commands.json>    Command-tree schema document

OPTIONS:
    -o, --output <path>    Write the grammar JSON to a file (default: stdout)
    -p, --pretty           Human-readable JSON
    -q, --quiet            Only log hard errors
    -h, --help             Show this help
    -V, --version          Show version

Compilation never aborts on a recoverable schema problem; warnings go to
stderr and the emitted grammar covers everything else.",
        env!("CARGO_PKG_VERSION")
    );
}
