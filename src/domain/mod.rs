//! Domain layer: report parsing, tree building and visual mapping
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod classifier;
pub mod depth;
pub mod error;
pub mod numbering;
pub mod palette;
pub mod segmenter;

pub use arena::{DependencyTree, TreeNode, ROOT_DEPTH};
pub use builder::TreeBuilder;
pub use classifier::{LineClassifier, DEFAULT_MARKER};
pub use depth::{parse_depth_and_name, DependencyLine};
pub use error::{DomainError, DomainResult};
pub use numbering::assign_numbering;
pub use palette::{package_key, style_at, Palette, PackageStyle};
pub use segmenter::{project_start, segment, ProjectBlock, UNKNOWN_PROJECT};
