//! markdownify CLI - Word / PDF / Excel to Markdown

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;

use markdownify::{ConverterBuilder, HeadingStylePolicy};

#[derive(Parser)]
#[command(name = "markdownify")]
#[command(version)]
#[command(about = "Convert Word, PDF and Excel documents to Markdown", long_about = None)]
struct Cli {
    /// Input files (.docx, .pdf, .xlsx, .xls)
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory (must exist)
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Treat malformed heading styles as plain text instead of failing
    #[arg(long)]
    lenient_headings: bool,

    /// Disable table detection in PDF text
    #[arg(long)]
    no_pdf_tables: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let policy = if cli.lenient_headings {
        HeadingStylePolicy::Lenient
    } else {
        HeadingStylePolicy::Strict
    };

    let converter = match ConverterBuilder::new()
        .with_heading_policy(policy)
        .with_pdf_table_detection(!cli.no_pdf_tables)
        .build()
    {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // 各ファイルは独立して変換し、結果は入力順に報告する
    let results: Vec<_> = cli
        .inputs
        .par_iter()
        .map(|input| (input, converter.convert(input, &cli.output)))
        .collect();

    let mut failed = 0usize;
    for (input, result) in results {
        match result {
            Ok(path) => println!("转换完成 ➜ {}", path.display()),
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}: {}", input.display(), e);
            }
        }
    }

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
