use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use scrivano::{Config, DocumentBuilder};

#[derive(Parser)]
#[command(name = "scrivano", version, about = "Generate PDF commercial documents")]
struct Cli {
    /// Directory the PDF files are written to.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Directory holding additional .hbs templates.
    #[arg(long, global = true)]
    templates_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a commission acknowledgement from a JSON record.
    Commission {
        /// JSON input file.
        #[arg(short, long)]
        input: PathBuf,

        /// Render through a named template instead of the direct formatter.
        #[arg(short, long)]
        template: Option<String>,

        /// Output filename (defaults to a timestamped name).
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Generate a credit note from a JSON record.
    CreditNote {
        /// JSON input file.
        #[arg(short, long)]
        input: PathBuf,

        /// Render through a named template instead of the direct formatter.
        #[arg(short, long)]
        template: Option<String>,

        /// Output filename (defaults to a timestamped name).
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List all registered template names.
    Templates,
}

fn read_record(path: &PathBuf) -> anyhow::Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(value)
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let output_dir = cli.output_dir.unwrap_or_else(|| config.output_dir.clone());
    let templates_dir = cli
        .templates_dir
        .unwrap_or_else(|| config.templates_dir.clone());
    let builder = DocumentBuilder::create(output_dir, templates_dir)?;

    match cli.command {
        Commands::Commission {
            input,
            template,
            output,
        } => {
            let value = read_record(&input)?;
            let path = match template {
                Some(name) => {
                    let data = scrivano::CommissionAcknowledgementData::from_value(value)?;
                    builder.create_commission_acknowledgement_from_template(
                        &data,
                        &name,
                        output.as_deref(),
                    )?
                }
                None => builder
                    .create_commission_acknowledgement_from_value(value, output.as_deref())?,
            };
            println!("{}", path.display());
        }
        Commands::CreditNote {
            input,
            template,
            output,
        } => {
            let value = read_record(&input)?;
            let path = match template {
                Some(name) => {
                    let data = scrivano::CreditNoteData::from_value(value)?;
                    builder.create_credit_note_from_template(&data, &name, output.as_deref())?
                }
                None => builder.create_credit_note_from_value(value, output.as_deref())?,
            };
            println!("{}", path.display());
        }
        Commands::Templates => {
            for name in builder.list_templates() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
