mod retag;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

/// Retag main parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Annotation file to read (start, end, tag; tab-separated, times in hundredths)
    input: PathBuf,

    /// File to write the relabeled segments to
    output: PathBuf,

    /// Activate debug mode
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        eprintln!("Debug mode is on");
    }

    match retag::run(&cli.input, &cli.output, cli.debug) {
        Ok(summary) => {
            if summary.unique_tags > 26 {
                eprintln!(
                    "{}",
                    format!(
                        "Warning: {} unique tags, codes past 'Z' are not letters",
                        summary.unique_tags
                    )
                    .yellow()
                );
            }
            println!(
                "Wrote {} ({} segments, {} unique tags)",
                cli.output.display().to_string().green(),
                summary.segments,
                summary.unique_tags
            );
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
