use std::path::PathBuf;

use clap::Parser;

mod aggregate;
mod ingest;
mod models;
mod report;
mod time;

#[derive(Parser)]
#[command(name = "outlier-earnings")]
#[command(about = "Summarize time worked and earnings from a work session CSV export", long_about = None)]
struct Cli {
    /// Path to the work session CSV export
    #[arg(long)]
    csv: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let records = ingest::load_records(&cli.csv)?;
    let summary = aggregate::aggregate(&records)?;
    let report = report::render(&summary)?;
    print!("{report}");

    Ok(())
}
