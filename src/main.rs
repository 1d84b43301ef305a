#![deny(unsafe_code)]

mod compose;
mod constants;
mod font;
mod render;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level as TraceLevel;
use tracing_subscriber::FmtSubscriber;

use compose::Layout;
use constants::cli;

#[derive(Parser)]
#[command(name = "contrib-matrix")]
#[command(version)]
#[command(about = "Render text as a GitHub-contribution-style pixel matrix", long_about = None)]
struct Cli {
    /// Text to render (quote it if it contains spaces); prompts on stdin when omitted
    text: Option<String>,

    /// Blank columns between letters
    #[arg(short, long, default_value_t = cli::DEFAULT_SPACING)]
    spacing: usize,

    /// Pixel scale factor (integer >= 1); larger means bigger letters
    #[arg(short = 'k', long, default_value_t = cli::DEFAULT_SCALE,
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    scale: usize,

    /// Blank rows added above the rendered text
    #[arg(long, default_value_t = 0)]
    pad_top: usize,

    /// Blank rows added below the rendered text
    #[arg(long, default_value_t = 0)]
    pad_bottom: usize,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(TraceLevel::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let cli = Cli::parse();

    let text = match cli.text {
        Some(text) => text,
        None => prompt_for_text()?,
    };

    let layout = Layout::new(cli.spacing, cli.scale, cli.pad_top, cli.pad_bottom)?;
    let grid = compose::compose(&text, &layout);

    println!("\n=== Preview ===\n");
    println!("{}", render::preview(&grid));
    println!("\n=== matrix string (drop this into your commit script) ===\n");
    println!("\"\"\"");
    println!("{}", render::literal(&grid));
    println!("\"\"\"");

    Ok(())
}


/// Read the text to render from stdin when no argument was given
fn prompt_for_text() -> Result<String> {
    print!("Enter text to render (A-Z, 0-9, space, . !): ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read text from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
