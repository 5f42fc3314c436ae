//! Easel CLI - Command-line interface for the easel document model.
//!
//! Build the demo project, inspect saved documents, and convert between
//! the JSON and XML interchange formats.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use interchange::{export_json, export_xml, load_json, load_xml};
use scene::{Canvas, Circle, Drawable, Project, Rectangle, Text};
use std::path::{Path, PathBuf};

/// Easel CLI - inspect and convert easel documents
#[derive(Parser)]
#[command(name = "easel")]
#[command(about = "Command-line interface for the easel drawing model")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the demo project and print its draw output
    Demo {
        /// Also export the project as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,

        /// Also export the project as XML to this path
        #[arg(long)]
        xml: Option<PathBuf>,
    },

    /// Load a saved document and print its draw output
    Show {
        /// Document to load (.json or .xml)
        file: PathBuf,
    },

    /// Convert a document between the interchange formats
    Convert {
        /// Source document (.json or .xml)
        input: PathBuf,

        /// Destination document (.json or .xml)
        output: PathBuf,
    },
}

enum Format {
    Json,
    Xml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Demo { json, xml } => run_demo(json.as_deref(), xml.as_deref()),
        Commands::Show { file } => show(&file),
        Commands::Convert { input, output } => convert(&input, &output),
    }
}

/// `--verbose` raises the base level to debug; `RUST_LOG` still wins.
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Build the demo project, print it, and export it where asked.
fn run_demo(json: Option<&Path>, xml: Option<&Path>) -> Result<()> {
    let project = sample_project()?;
    println!("{}", project.draw());

    if let Some(path) = json {
        export_json(path, &project)
            .with_context(|| format!("failed to export {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    if let Some(path) = xml {
        export_xml(path, &project)
            .with_context(|| format!("failed to export {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

/// Load a saved document and print its draw output.
fn show(file: &Path) -> Result<()> {
    let project = load_project(file)?;
    println!("{}", project.draw());
    Ok(())
}

/// Load a document in one format and write it out in another.
fn convert(input: &Path, output: &Path) -> Result<()> {
    let project = load_project(input)?;
    match format_of(output)? {
        Format::Json => export_json(output, &project),
        Format::Xml => export_xml(output, &project),
    }
    .with_context(|| format!("failed to export {}", output.display()))?;

    println!("wrote {}", output.display());
    Ok(())
}

/// A small canvas holding one of each primitive kind.
fn sample_project() -> Result<Project> {
    let mut canvas = Canvas::new(800.0, 600.0)?;
    canvas.add_element(Circle::new("red", 50.0)?);
    canvas.add_element(Rectangle::new("blue", 100.0, 200.0)?);
    canvas.add_element(Text::new("Hello, World!", 24.0)?);

    let mut project = Project::new("My Design")?;
    project.set_canvas(canvas);
    Ok(project)
}

fn load_project(path: &Path) -> Result<Project> {
    let project = match format_of(path)? {
        Format::Json => load_json(path),
        Format::Xml => load_xml(path),
    }
    .with_context(|| format!("failed to load {}", path.display()))?;

    log::debug!("loaded project '{}' from {}", project.name(), path.display());
    Ok(project)
}

/// Pick the interchange format from a path's extension.
fn format_of(path: &Path) -> Result<Format> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => Ok(Format::Json),
        Some("xml") => Ok(Format::Xml),
        _ => Err(anyhow::anyhow!(
            "cannot tell the format of {} from its extension (expected .json or .xml)",
            path.display()
        )),
    }
}
