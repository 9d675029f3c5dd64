#![forbid(unsafe_code)]

//! Layout for styled terminal output.
//!
//! Every block here measures its content with [`ansikit_text`], so widths
//! stay correct when cells carry escape sequences:
//! - [`columns`] - column widths under a [`LayoutBudget`]
//! - [`table`] - bordered tables
//! - [`divider`] - horizontal rules with a centered title
//! - [`panel`] - boxes around wrapped text
//! - [`tree`] - hierarchical listings, including directory trees

pub mod borders;
pub mod columns;
pub mod divider;
pub mod panel;
pub mod table;
pub mod tree;

pub use borders::{BorderSet, BorderType};
pub use columns::{
    Alignment, ColumnSpec, LayoutBudget, MIN_COLUMN_WIDTH, Row, column_count,
    compute_column_widths, row,
};
pub use divider::{Divider, DividerOptions, render_divider};
pub use panel::{BoxOptions, render_box};
pub use table::{Table, TableOptions, render_table};
pub use tree::{TreeBuildOptions, TreeGuides, TreeNode, TreeOptions, render_tree};
