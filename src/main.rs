use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use pathdict::config::Config;
use pathdict::document::node::Node;
use pathdict::document::parser::parse_json;
use pathdict::document::tree::PathTree;
use pathdict::file::loader::load_file;
use pathdict::file::saver::{save_file, serialize_node};
use pathdict::file::Format;
use pathdict::rewrite::rewrite;

/// pathdict - read, write and delete values in JSON/YAML files by path
#[derive(Parser)]
#[command(name = "pathdict")]
#[command(version)]
#[command(about = "Read, write and delete values in JSON/YAML files by path", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/pathdict/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at PATH (null when absent)
    Get { file: PathBuf, path: String },
    /// Store a JSON VALUE at PATH and save the file
    Set {
        file: PathBuf,
        path: String,
        value: String,
    },
    /// Remove the value at PATH and save the file
    Delete { file: PathBuf, path: String },
    /// Fill the `$` placeholders of a JSON TEMPLATE from the file
    Rewrite { file: PathBuf, template: String },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(file: &Path, config: &Config) -> Result<PathTree> {
    let tree = load_file(file).with_context(|| format!("Failed to load {}", file.display()))?;
    Ok(PathTree::with_config(tree.into_root(), config))
}

fn print(node: &Node, config: &Config) -> Result<()> {
    println!("{}", serialize_node(node, Format::Json, config)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if cli.compact {
        config.pretty = false;
    }

    match cli.command {
        Command::Get { file, path } => {
            let tree = load(&file, &config)?;
            let value = tree.get(&path)?.unwrap_or_default();
            print(&value, &config)?;
        }
        Command::Set { file, path, value } => {
            let mut tree = load(&file, &config)?;
            let value = parse_json(&value).context("VALUE must be JSON")?;
            let stored = tree.set(&path, value)?;
            save_file(&file, &tree, &config)?;
            print(&stored, &config)?;
        }
        Command::Delete { file, path } => {
            let mut tree = load(&file, &config)?;
            let removed = tree.delete(&path)?;
            if removed.is_some() {
                save_file(&file, &tree, &config)?;
            }
            print(&removed.unwrap_or_default(), &config)?;
        }
        Command::Rewrite { file, template } => {
            let tree = load(&file, &config)?;
            let template = parse_json(&template).context("TEMPLATE must be JSON")?;
            print(&rewrite(&template, tree.root())?, &config)?;
        }
    }

    Ok(())
}
