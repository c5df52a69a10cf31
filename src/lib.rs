//! mvntree: numbered, color- and icon-coded rendering of Maven dependency:tree reports
//!
//! Layers, innermost first:
//! - `domain`: line classification, depth parsing, tree building, project
//!   segmentation, numbering and package palettes (pure, no I/O)
//! - `application`: the report service and tree renderer
//! - `infrastructure`: filesystem boundary and service wiring
//! - `cli`: argument parsing, command execution, terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
