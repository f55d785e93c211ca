//! readmark CLI - article rendering tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use readmark::render::ArticleStats;
use readmark::{parse_file, HeadingLevel, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "readmark")]
#[command(version)]
#[command(about = "Render long-form articles to HTML, text, and JSON", long_about = None)]
struct Cli {
    /// Input article file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an article to all formats (HTML, text, JSON)
    Convert {
        /// Input article file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Render an article to HTML
    Html {
        /// Input article file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Prefix the output with a table of contents
        #[arg(long)]
        toc: bool,

        /// Table of contents title
        #[arg(long, default_value = "On this page")]
        toc_title: String,

        /// Keep links in the current browsing context
        #[arg(long)]
        internal_links: bool,
    },

    /// Render an article to plain text
    Text {
        /// Input article file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render an article to JSON
    Json {
        /// Input article file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the table of contents
    Toc {
        /// Input article file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show article statistics
    Info {
        /// Input article file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Reading speed for the reading time estimate
        #[arg(long, default_value = "200", env = "READMARK_WPM")]
        wpm: u32,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Html {
            input,
            output,
            toc,
            toc_title,
            internal_links,
        }) => {
            let options = RenderOptions::new()
                .with_toc(toc)
                .with_toc_title(toc_title)
                .with_external_links(!internal_links);
            cmd_html(&input, output.as_deref(), &options)
        }
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Toc { input, output }) => cmd_toc(&input, output.as_deref()),
        Some(Commands::Info { input, wpm }) => cmd_info(&input, wpm),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: readmark <FILE> [OUTPUT]".yellow());
                println!("       readmark --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Write to `path`, or print to stdout when no path is given.
fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let doc = parse_file(input)?;
    log::debug!("Converting {} into {}", input.display(), output_dir.display());

    let options = RenderOptions::new().with_toc(true);
    let html = readmark::render::to_html(&doc, &options)?;
    fs::write(output_dir.join("article.html"), &html)?;

    let text = readmark::render::to_text(&doc)?;
    fs::write(output_dir.join("article.txt"), &text)?;

    let json = readmark::render::to_json(&doc, JsonFormat::Pretty)?;
    fs::write(output_dir.join("article.json"), &json)?;

    println!("{}", "Output files:".green().bold());
    println!("  {} article.html", "├─".dimmed());
    println!("  {} article.txt", "├─".dimmed());
    println!("  {} article.json", "└─".dimmed());

    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let html = readmark::render::to_html(&doc, options)?;
    emit(&html, output)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let text = readmark::render::to_text(&doc)?;
    emit(&text, output)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = readmark::render::to_json(&doc, format)?;
    emit(&json, output)
}

fn cmd_toc(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    emit(&format_toc(&doc.toc), output)
}

/// One line per entry, subsections indented, each with its `#id` anchor.
fn format_toc(toc: &[readmark::TocEntry]) -> String {
    toc.iter()
        .map(|entry| {
            let indent = match entry.level {
                HeadingLevel::H2 => "",
                HeadingLevel::H3 => "  ",
            };
            format!("{}- {} (#{})", indent, entry.text, entry.id)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cmd_info(input: &Path, wpm: u32) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let stats = ArticleStats::from_document(&doc, wpm);

    println!("{}", "Article Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(first) = doc.toc.first() {
        println!("{}: {}", "First section".bold(), first.text);
    }
    println!("{}: {}", "Sections".bold(), doc.toc.len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Quotes".bold(), stats.blockquote_count);
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!(
        "{}: {} min",
        "Reading time".bold(),
        stats.reading_time_minutes
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "readmark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Article rendering and reading navigation tool");
    println!();
    println!("License: MIT");
}
