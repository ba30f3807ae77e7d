//! lambdacraft-demos - runs the lambdacraft demonstration programs
//!
//! Usage:
//!   lambdacraft-demos fold-array
//!   lambdacraft-demos map-array
//!   lambdacraft-demos fold-struct [ARGS]...
//!   lambdacraft-demos map-struct

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lambdacraft-demos")]
#[command(about = "Demonstration programs for lambdacraft combinators")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fold nine doubles with a captured offset
    FoldArray,
    /// Map nine doubles into a second buffer
    MapArray,
    /// Build a linked list from the arguments, measure it, release it
    FoldStruct {
        /// Items to place in the list
        items: Vec<String>,
    },
    /// Square the linked list 1 -> 2 -> 3
    MapStruct,
}

fn render(data: &[i32]) -> String {
    let links: String = data.iter().map(|value| format!("{value} -> ")).collect();
    links + "NULL"
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lambdacraft=info,lambdacraft_demos=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::FoldArray => {
            let result = lambdacraft_demos::fold_array()?;
            println!("{result:.6}");
        }
        Commands::MapArray => {
            for (source, mapped) in lambdacraft_demos::map_array()? {
                println!("Source: {source:.6} -> Mapped: {mapped:.6}");
            }
        }
        Commands::FoldStruct { items } => {
            let summary = lambdacraft_demos::fold_struct(&items)?;
            tracing::info!(released = summary.released, "list released");
            println!("Total length: {}", summary.total_length);
        }
        Commands::MapStruct => {
            let (original, mapped) = lambdacraft_demos::map_struct()?;
            println!("Original list:\n{}", render(&original));
            println!("\nMapped list (squared values):\n{}", render(&mapped));
        }
    }

    Ok(())
}
