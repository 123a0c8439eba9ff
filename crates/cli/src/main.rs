//! CLI tool for converting presentation files to JSON and Markdown.

use anyhow::{Context, Result};
use clap::Parser;
use deck_pptx::PptxExtractor;
use std::fs;
use std::path::{Path, PathBuf};

/// Extract structured text from presentation files (.pptx) into JSON and
/// Markdown artifacts.
#[derive(Parser, Debug)]
#[command(name = "deck-extract")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input presentation file(s) (.pptx)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the Markdown output to stdout instead of writing files
    #[arg(short, long)]
    print: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let extractor = PptxExtractor::new();
    let mut failed = false;

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        if let Err(e) = process_file(input_path, &args, &extractor) {
            // One bad file must not abort the batch
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Process a single presentation file: extract, render, and write (or
/// print) the output artifacts.
fn process_file(input_path: &Path, args: &Args, extractor: &PptxExtractor) -> Result<()> {
    log::debug!("Extracting {}", input_path.display());
    let presentation = extractor
        .extract_path(input_path)
        .with_context(|| format!("Failed to extract {}", input_path.display()))?;

    if args.verbose {
        eprintln!("  Found {} slides", presentation.slide_count);
    }

    let markdown = deck_core::to_markdown(&presentation);
    if args.print {
        print!("{}", markdown);
        return Ok(());
    }

    let json = deck_core::to_json(&presentation)?;
    let (json_path, markdown_path) = output_paths(input_path, args.output.as_ref())?;

    fs::write(&json_path, json)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    fs::write(&markdown_path, markdown)
        .with_context(|| format!("Failed to write {}", markdown_path.display()))?;

    if args.verbose {
        eprintln!(
            "Written to: {} and {}",
            json_path.display(),
            markdown_path.display()
        );
    }
    Ok(())
}

/// Derive the two output paths from the input path by replacing the
/// extension with `.json` and `.md`.
fn output_paths(input_path: &Path, output_dir: Option<&PathBuf>) -> Result<(PathBuf, PathBuf)> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let dir = match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.clone()
        }
        None => input_path.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    Ok((
        dir.join(format!("{}.json", stem)),
        dir.join(format!("{}.md", stem)),
    ))
}
