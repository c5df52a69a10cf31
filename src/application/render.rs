//! Terminal rendering of numbered dependency trees.

use std::io::{self, Write};

use colored::Colorize;
use tracing::instrument;

use crate::domain::{package_key, DependencyTree, Palette};

/// Format one tree line: `<numbering> <icon> <name>`, icon and name colored.
pub fn format_line(numbering: &str, icon: &str, name: &str, color: colored::Color) -> String {
    let label = format!("{} {}", icon, name).color(color);
    if numbering.is_empty() {
        label.to_string()
    } else {
        format!("{} {}", numbering, label)
    }
}

/// Write `tree` depth-first, children in source order, one line per node.
///
/// The synthetic root is skipped. Package styles are requested in visit
/// order, so the palette's first-seen order equals print order.
/// Returns the number of lines written.
#[instrument(level = "debug", skip_all)]
pub fn render_tree<W: Write>(
    tree: &DependencyTree,
    palette: &mut Palette,
    out: &mut W,
) -> io::Result<usize> {
    let mut written = 0;
    for (_, node) in tree.iter() {
        let style = palette.style_for(package_key(&node.name));
        writeln!(
            out,
            "{}",
            format_line(&node.numbering, &style.icon, &node.name, style.color)
        )?;
        written += 1;
    }
    Ok(written)
}
