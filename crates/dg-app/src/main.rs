// ABOUTME: Main application entry point.
// ABOUTME: Reads a grid layout file, reconciles it, and prints the physical layout.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use dg_core::{Axis, GridSettings};
use dg_layout::{Content, DynamicGrid, GridSurface, LayoutSnapshot, Placement, SizeMode};

#[derive(Parser, Debug)]
#[command(name = "dyngrid")]
#[command(version)]
#[command(about = "Lay out a dynamic grid and print its physical tracks and separators")]
struct Args {
    /// Layout file (falls back to the user config, then to defaults)
    file: Option<PathBuf>,

    /// Print the layout as JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Grid settings plus the children to place in it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct LayoutFile {
    #[serde(flatten)]
    settings: GridSettings,
    children: Vec<ChildEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChildEntry {
    name: String,
    row: Option<usize>,
    column: Option<usize>,
    #[serde(default = "single")]
    row_span: usize,
    #[serde(default = "single")]
    column_span: usize,
}

fn single() -> usize {
    1
}

impl ChildEntry {
    /// Children without a row or column stay out of grid placement
    fn content(&self) -> Content {
        if self.row.is_none() && self.column.is_none() {
            return Content::unplaced(self.name.clone());
        }
        let placement = Placement::at(self.row.unwrap_or(0), self.column.unwrap_or(0))
            .with_span(self.row_span.max(1), self.column_span.max(1));
        Content::new(self.name.clone(), placement)
    }
}

impl LayoutFile {
    fn from_toml(content: &str) -> Result<Self> {
        let mut file: Self = toml::from_str(content).context("Failed to parse layout file")?;
        file.settings = file.settings.sanitized();
        Ok(file)
    }

    fn load(args: &Args) -> Result<Self> {
        if let Some(path) = &args.file {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            tracing::info!("Loaded layout from {}", path.display());
            return Self::from_toml(&content);
        }

        let settings = GridSettings::load_or_default();
        Ok(Self {
            settings,
            children: Vec::new(),
        })
    }

    fn build(&self) -> (DynamicGrid, GridSurface) {
        let mut surface = GridSurface::new();
        let mut grid = DynamicGrid::attach(&mut surface, self.settings.clone());
        for entry in &self.children {
            grid.add_child(&mut surface, entry.content());
        }
        (grid, surface)
    }
}

fn mode_label(index: usize, mode: SizeMode, separators: bool) -> &'static str {
    match mode {
        SizeMode::Auto if separators && index % 2 == 1 => "sep",
        SizeMode::Auto => "auto",
        SizeMode::Star => "star",
    }
}

/// Plain-text view of a reconciled layout
struct LayoutTable<'a> {
    snapshot: &'a LayoutSnapshot,
    settings: &'a GridSettings,
}

impl fmt::Display for LayoutTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in Axis::ALL {
            let separators = self.settings.axis(axis).separators;
            let labels: Vec<&str> = self
                .snapshot
                .tracks(axis)
                .iter()
                .enumerate()
                .map(|(i, mode)| mode_label(i, *mode, separators))
                .collect();
            let name = match axis {
                Axis::Row => "rows:",
                Axis::Column => "columns:",
            };
            writeln!(f, "{:<9}{}", name, labels.join(" | "))?;
        }

        if !self.snapshot.separators.is_empty() {
            writeln!(f, "separators:")?;
            for separator in &self.snapshot.separators {
                writeln!(
                    f,
                    "  {} at track {}, crossing {} track(s), {}px {}",
                    separator.axis.separator_label(),
                    separator.track,
                    separator.cross_span,
                    separator.thickness,
                    separator.color
                )?;
            }
        }

        if !self.snapshot.children.is_empty() {
            writeln!(f, "children:")?;
            for child in &self.snapshot.children {
                match child.placement {
                    Some(p) => writeln!(
                        f,
                        "  {} at ({}, {}) spanning {}x{}",
                        child.name, p.row, p.column, p.row_span, p.column_span
                    )?,
                    None => writeln!(f, "  {} (not placed)", child.name)?,
                }
            }
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!("Starting dyngrid with {:?}", args);

    let layout = LayoutFile::load(&args)?;
    let (grid, surface) = layout.build();
    let snapshot = LayoutSnapshot::capture(&surface);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize layout")?
        );
    } else {
        let table = LayoutTable {
            snapshot: &snapshot,
            settings: grid.settings(),
        };
        print!("{}", table);
    }

    Ok(())
}
