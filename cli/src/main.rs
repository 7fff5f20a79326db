//! blockgrid CLI - table reconstruction from document-analysis responses

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use blockgrid::parser::decode::pages_from_slice;
use blockgrid::{
    reconstruct_batch, BlockGrid, JsonFormat, ReconstructOptions, RenderOptions, ReportStyle,
    RowOrder,
};

#[derive(Parser)]
#[command(name = "blockgrid")]
#[command(version)]
#[command(about = "Rebuild tables from document-analysis responses", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Response JSON files, merged as pages of one document
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    #[command(flatten)]
    options: ReconstructArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render tables as a delimited-text report
    Report {
        /// Response JSON files, merged as pages of one document
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: ReconstructArgs,
    },

    /// Render tables as JSON
    Json {
        /// Response JSON files, merged as pages of one document
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        options: ReconstructArgs,
    },

    /// Show block and table statistics
    Info {
        /// Response JSON files, merged as pages of one document
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        options: ReconstructArgs,
    },

    /// Render one report per file, each file being its own document
    Batch {
        /// Response JSON files, one document each
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "blockgrid_output")]
        output: PathBuf,

        #[command(flatten)]
        options: ReconstructArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone, Debug)]
struct ReconstructArgs {
    /// Minimum word confidence (0-100)
    #[arg(short, long, default_value_t = 0.0, env = "BLOCKGRID_CONFIDENCE")]
    confidence: f64,

    /// Resolve block ids within their own page
    #[arg(long)]
    per_page_ids: bool,

    /// Write rows and columns in ascending index order
    #[arg(long)]
    sorted: bool,

    /// Use the legacy report layout
    #[arg(long)]
    legacy: bool,

    /// Disable parallel processing
    #[arg(long)]
    sequential: bool,
}

impl ReconstructArgs {
    fn reconstruct_options(&self) -> ReconstructOptions {
        let mut options = ReconstructOptions::new()
            .with_confidence(self.confidence)
            .with_parallel(!self.sequential);
        if self.per_page_ids {
            options = options.per_page_ids();
        }
        options
    }

    fn render_options(&self) -> RenderOptions {
        let order = if self.sorted {
            RowOrder::Sorted
        } else {
            RowOrder::Discovery
        };
        let style = if self.legacy {
            ReportStyle::Legacy
        } else {
            ReportStyle::Plain
        };
        RenderOptions::new().with_row_order(order).with_style(style)
    }

    fn builder(&self) -> BlockGrid {
        BlockGrid::with_options(self.reconstruct_options(), self.render_options())
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Report {
            inputs,
            output,
            options,
        }) => cmd_report(&inputs, output.as_deref(), &options),
        Some(Commands::Json {
            inputs,
            output,
            compact,
            options,
        }) => cmd_json(&inputs, output.as_deref(), compact, &options),
        Some(Commands::Info {
            inputs,
            json,
            options,
        }) => cmd_info(&inputs, json, &options),
        Some(Commands::Batch {
            inputs,
            output,
            options,
        }) => cmd_batch(&inputs, &output, &options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: report if inputs are provided
            if cli.inputs.is_empty() {
                println!("{}", "Usage: blockgrid <FILE>...".yellow());
                println!("       blockgrid --help for more information");
                Ok(())
            } else {
                cmd_report(&cli.inputs, None, &cli.options)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_or_print(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        emit(content, &mut io::stdout().lock())?;
    }
    Ok(())
}

/// Write the rendered output byte for byte, without a trailing newline.
fn emit(content: &str, out: &mut impl Write) -> io::Result<()> {
    out.write_all(content.as_bytes())?;
    out.flush()
}

fn cmd_report(
    inputs: &[PathBuf],
    output: Option<&Path>,
    options: &ReconstructArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = options.builder().reconstruct_files(inputs)?.to_report()?;
    write_or_print(&report, output)
}

fn cmd_json(
    inputs: &[PathBuf],
    output: Option<&Path>,
    compact: bool,
    options: &ReconstructArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = options.builder().reconstruct_files(inputs)?.to_json(format)?;
    write_or_print(&json, output)
}

fn cmd_info(
    inputs: &[PathBuf],
    json: bool,
    options: &ReconstructArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = options.builder().reconstruct_files(inputs)?;
    let stats = result.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for input in inputs {
        println!("{}: {}", "File".bold(), input.display());
    }
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!("{}: {}", "Id collisions".bold(), stats.id_collisions);
    println!("{}: {}", "Dangling references".bold(), stats.dangling_references);

    println!();
    println!("{}", "Tables".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Cells".bold(), stats.cell_count);
    for (index, grid) in result.tables().iter().enumerate() {
        println!(
            "  {} Table_{}: {} rows, {} columns",
            "├─".dimmed(),
            index,
            grid.row_count(),
            grid.column_count()
        );
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    options: &ReconstructArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading responses...");
    let mut documents = Vec::with_capacity(inputs.len());
    for input in inputs {
        documents.push(pages_from_slice(&fs::read(input)?)?);
        pb.inc(1);
    }

    pb.set_message("Rebuilding tables...");
    log::debug!("Rebuilding {} documents", documents.len());
    let results = reconstruct_batch(
        documents,
        &options.reconstruct_options(),
        &options.render_options(),
    );

    let paths = output_paths(inputs, output_dir);
    for (path, result) in paths.iter().zip(results) {
        fs::write(path, result?)?;
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, path) in paths.iter().enumerate() {
        let branch = if i + 1 == paths.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    Ok(())
}

/// Report paths for a batch: `<dir>/<stem>.csv`, or `<dir>/<stem>-<position>.csv`
/// when an earlier input already took that name.
fn output_paths(inputs: &[PathBuf], output_dir: &Path) -> Vec<PathBuf> {
    let mut taken = HashSet::new();
    let mut paths = Vec::with_capacity(inputs.len());

    for (position, input) in inputs.iter().enumerate() {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let mut name = format!("{}.csv", stem);
        let mut suffix = position;
        while !taken.insert(name.clone()) {
            name = format!("{}-{}.csv", stem, suffix);
            suffix += 1;
        }
        if suffix != position {
            log::debug!("Writing {} as {}", input.display(), name);
        }
        paths.push(output_dir.join(name));
    }

    paths
}

fn cmd_version() {
    println!("{} {}", "blockgrid".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Table reconstruction from document-analysis responses");
    println!();
    println!("License: MIT");
}
