//! Report rendering service
//!
//! Drives the per-run pipeline: segment the report into projects, then for each
//! project build, number and render its tree with a fresh palette.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use tracing::{debug, instrument, warn};

use crate::application::render::render_tree;
use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{assign_numbering, segment, LineClassifier, Palette, TreeBuilder};
use crate::infrastructure::traits::FileSystem;

const SEPARATOR: &str = "---------- next project ----------";

/// What happened to one project section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectOutcome {
    /// Tree printed with this many coordinate nodes
    Rendered { nodes: usize },
    /// Section held no dependency coordinates
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReport {
    pub name: String,
    pub outcome: ProjectOutcome,
}

/// Result of rendering one report, one entry per project in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub projects: Vec<ProjectReport>,
}

impl ReportSummary {
    pub fn rendered_count(&self) -> usize {
        self.projects
            .iter()
            .filter(|p| matches!(p.outcome, ProjectOutcome::Rendered { .. }))
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.projects.len() - self.rendered_count()
    }
}

/// Service for turning dependency:tree reports into numbered, colored trees.
pub struct ReportService {
    fs: Arc<dyn FileSystem>,
    builder: TreeBuilder,
    separators: bool,
}

impl ReportService {
    /// Create a new report service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: &Settings) -> Self {
        Self {
            fs,
            builder: TreeBuilder::new(LineClassifier::new(settings.marker.as_str())),
            separators: settings.separators,
        }
    }

    /// Read the whole report into memory.
    pub fn read_report(&self, path: &Path) -> ApplicationResult<String> {
        debug!("read_report: path={}", path.display());
        self.fs
            .read_to_string(path)
            .with_path_context("failed to read", path)
    }

    /// Read and render the report at `path`.
    pub fn render_file<W: Write, E: Write>(
        &self,
        path: &Path,
        out: &mut W,
        diag: &mut E,
    ) -> ApplicationResult<ReportSummary> {
        let input = self.read_report(path)?;
        self.render(&input, out, diag)
    }

    /// Render every project of `input` to `out`.
    ///
    /// Fails only when the report holds no project at all. A project without
    /// dependency data is reported on `diag` and the run continues.
    #[instrument(level = "debug", skip_all)]
    pub fn render<W: Write, E: Write>(
        &self,
        input: &str,
        out: &mut W,
        diag: &mut E,
    ) -> ApplicationResult<ReportSummary> {
        let blocks = segment(input)?;
        debug!("render: {} projects", blocks.len());

        let mut summary = ReportSummary::default();
        for (i, block) in blocks.iter().enumerate() {
            writeln!(out, "\n{}\n", format!("Project: {}", block.name).blue().bold())
                .with_context("write output")?;

            let outcome = match self.builder.build_from_lines(block.lines.iter().copied()) {
                Some(mut tree) => {
                    assign_numbering(&mut tree);
                    let mut palette = Palette::new();
                    let nodes =
                        render_tree(&tree, &mut palette, out).with_context("write output")?;
                    debug!(
                        "project {}: {} nodes, {} levels, {} packages",
                        block.name,
                        nodes,
                        tree.depth(),
                        palette.len()
                    );
                    ProjectOutcome::Rendered { nodes }
                }
                None => {
                    warn!("project {} has no dependency data", block.name);
                    writeln!(
                        diag,
                        "{}: project {} ({}): no dependency data found",
                        "Warning".yellow(),
                        i + 1,
                        block.name
                    )
                    .with_context("write diagnostics")?;
                    ProjectOutcome::Empty
                }
            };
            summary.projects.push(ProjectReport {
                name: block.name.clone(),
                outcome,
            });

            if let Some(next) = blocks.get(i + 1) {
                if self.separators {
                    writeln!(out, "\n{}", SEPARATOR.bright_black())
                        .with_context("write output")?;
                    writeln!(out, "{}\n", format!("Up next: {}", next.name).bright_black())
                        .with_context("write output")?;
                }
            }
        }
        Ok(summary)
    }
}
