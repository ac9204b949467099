use clap::{Parser, Subcommand};
use segname::commands::{
    run_concat, run_edit, run_inspect, run_render, run_schema, EditOp, NameArgs,
};
use segname::config::SegnameConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// segname - inspect and edit delimited structured names
#[derive(Parser)]
#[command(name = "segname", version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./segname.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Print components, renderings and hash of a name as JSON
    Inspect(NameArgs),
    /// Print the human-readable form of a name
    Render {
        #[command(flatten)]
        name: NameArgs,
        /// Join with this character instead of the name's delimiter
        #[arg(short, long)]
        with: Option<char>,
    },
    /// Apply one edit and print the resulting name
    Edit {
        #[command(flatten)]
        name: NameArgs,
        #[command(subcommand)]
        op: EditOp,
    },
    /// Concatenate two names
    Concat {
        #[command(flatten)]
        left: NameArgs,
        /// Masked name appended to the first one
        right: String,
    },
    /// Print the JSON schema of a serialized name
    Schema {
        /// Output file path (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SegnameConfig::load(cli.config.as_deref())?;

    let output = match &cli.command {
        Commands::Inspect(name) => run_inspect(name, &config),
        Commands::Render { name, with } => run_render(name, *with, &config),
        Commands::Edit { name, op } => run_edit(name, op, &config),
        Commands::Concat { left, right } => run_concat(left, right, &config),
        Commands::Schema { output } => run_schema(output.clone()),
    }?;

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
