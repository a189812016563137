//! `fasta`: load a FASTA file, parse it and print what was found.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use monacomb::fasta::{self, Document};

#[derive(Debug, Parser)]
#[command(
    name = "fasta",
    version,
    about = "Parse a FASTA file and print its records."
)]
struct Args {
    /// The FASTA file to parse.
    #[arg(required = true)]
    file: PathBuf,

    /// Print the full parsed document instead of one summary line per record.
    #[arg(long)]
    debug: bool,
}

fn print_summary(document: &Document) {
    for record in document {
        println!(
            "{}\t{}\t{}",
            record.header.id,
            record.sequence.len(),
            record.header.description
        );
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match fasta::load(&args.file) {
        Ok(document) => {
            if args.debug {
                println!("{document:#?}");
            } else {
                print_summary(&document);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
