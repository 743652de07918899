//! mdpad - Markdown preview renderer

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use mdpad::render;

#[derive(Parser)]
#[command(name = "mdpad")]
#[command(version, about = "Markdown preview renderer", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdpad notes.md notes.html   Render Markdown to HTML
    mdpad -i notes.md           Show document statistics")]
struct Cli {
    /// Input file (Markdown)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (HTML)
    #[arg(value_name = "OUTPUT", required_unless_present = "info")]
    output: Option<String>,

    /// Show document statistics without rendering
    #[arg(short, long)]
    info: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.info {
        match show_info(&cli.input) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        let output = cli.output.expect("output required");
        match convert(&cli.input, &output, cli.quiet) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

fn show_info(path: &str) -> Result<(), String> {
    let source = fs::read_to_string(path).map_err(|e| e.to_string())?;

    println!("File: {path}");
    println!("Bytes: {}", source.len());
    println!("Lines: {}", source.lines().count());
    println!("Words: {}", source.split_whitespace().count());
    let headings = source
        .lines()
        .filter(|line| line.starts_with('#'))
        .count();
    println!("Headings: {headings}");

    Ok(())
}

fn convert(input: &str, output: &str, quiet: bool) -> Result<(), String> {
    let source = fs::read_to_string(input).map_err(|e| e.to_string())?;
    let html = render(&source);
    fs::write(output, &html).map_err(|e| e.to_string())?;

    if !quiet {
        println!("{input} -> {output} ({} bytes)", html.len());
    }

    Ok(())
}
