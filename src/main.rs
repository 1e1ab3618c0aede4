use barfly_extract::{
    markdown_to_html, process_scraped_items_with_config, render_markdown, search, BarflyError,
    ExtractConfig, Item,
};
use clap::{Parser, Subcommand};
use log::info;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "barfly-extract",
    about = "Extract drink recipes from video descriptions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract recipes from a JSON array of items and print them as Markdown
    Extract {
        /// JSON input file, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,
        /// Markdown output file (default: stdout)
        output: Option<PathBuf>,
        /// Also write the recipes as HTML to this file
        #[arg(long)]
        html: Option<PathBuf>,
        /// Write items without a recipe to this file as JSON
        #[arg(long)]
        skipped: Option<PathBuf>,
    },
    /// Search recipe HTML for recipes containing all query tokens
    Search {
        /// HTML file written by `extract --html`
        recipe_html: PathBuf,
        /// Tokens that must all appear in a recipe's title or lines
        #[arg(required = true)]
        query: Vec<String>,
    },
}

fn read_items(input: &str) -> Result<Vec<Item>, BarflyError> {
    let items = if input == "-" {
        serde_json::from_reader(io::stdin().lock())?
    } else {
        serde_json::from_reader(BufReader::new(File::open(input)?))?
    };
    Ok(items)
}

fn run_extract(
    input: &str,
    output: Option<PathBuf>,
    html: Option<PathBuf>,
    skipped_path: Option<PathBuf>,
) -> Result<(), BarflyError> {
    let config = ExtractConfig::load()?;
    let items = read_items(input)?;

    let (processed, skipped) = process_scraped_items_with_config(items, &config);
    let markdown = render_markdown(&processed);

    match output {
        Some(path) => fs::write(path, &markdown)?,
        None => io::stdout().lock().write_all(markdown.as_bytes())?,
    }
    if let Some(path) = html {
        fs::write(path, markdown_to_html(&markdown))?;
    }
    if let Some(path) = skipped_path {
        fs::write(path, serde_json::to_string_pretty(&skipped)?)?;
    }

    info!(
        "Collected {} recipes. Skipped {} items.",
        processed.len(),
        skipped.len()
    );
    Ok(())
}

fn run_search(recipe_html: PathBuf, query: Vec<String>) -> Result<(), BarflyError> {
    let html = fs::read_to_string(recipe_html)?;
    let mut stdout = io::stdout().lock();

    for hit in search(&html, &query) {
        writeln!(stdout, "{}", hit.title)?;
        writeln!(stdout, "{}", hit.recipe)?;
        writeln!(stdout)?;
    }
    Ok(())
}

fn main() -> Result<(), BarflyError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract {
            input,
            output,
            html,
            skipped,
        } => run_extract(&input, output, html, skipped),
        Commands::Search { recipe_html, query } => run_search(recipe_html, query),
    }
}
