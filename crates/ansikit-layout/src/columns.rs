#![forbid(unsafe_code)]

//! Column width distribution under a width budget.
//!
//! Widths come from one of two places:
//!
//! - **Requested**: a [`ColumnSpec`] with `width: Some(_)`. Requested widths
//!   are used verbatim. Columns without a request share what is left of the
//!   budget, left to right.
//! - **Content**: the widest visible cell plus one space of padding per
//!   side. When the total exceeds the budget every column is scaled by
//!   `budget / total` and floored at [`MIN_COLUMN_WIDTH`].
//!
//! The floor wins over the budget: a table with many columns and a tiny
//! budget comes out wider than asked rather than collapsing columns to
//! nothing.
//!
//! # Example
//!
//! ```
//! use ansikit_layout::columns::{LayoutBudget, compute_column_widths, row};
//!
//! let content = vec![row(["Name", "Qty"]), row(["Widget", "12"])];
//! let widths = compute_column_widths(&content, None, LayoutBudget::new(80));
//! assert_eq!(widths, vec![8, 5]);
//! ```

use ansikit_text::{Side, visible_length};

/// Narrowest column produced by scaling.
pub const MIN_COLUMN_WIDTH: usize = 3;

/// A table row; `None` cells render empty.
pub type Row = Vec<Option<String>>;

/// Build a [`Row`] with every cell present.
#[must_use]
pub fn row<I, S>(cells: I) -> Row
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    cells.into_iter().map(|c| Some(c.into())).collect()
}

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    /// Align text to the left.
    Left,
    /// Center text horizontally.
    Center,
    /// Align text to the right.
    Right,
}

impl Alignment {
    /// The side that receives padding for this alignment.
    #[must_use]
    pub const fn pad_side(self) -> Side {
        match self {
            Self::Left => Side::Right,
            Self::Center => Side::Center,
            Self::Right => Side::Left,
        }
    }
}

/// Per-column layout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnSpec {
    /// Fixed width, or `None` to size automatically.
    pub width: Option<usize>,
    pub alignment: Alignment,
}

impl ColumnSpec {
    /// Automatically sized, left aligned.
    #[must_use]
    pub const fn auto() -> Self {
        Self {
            width: None,
            alignment: Alignment::Left,
        }
    }

    /// Fixed width, left aligned.
    #[must_use]
    pub const fn fixed(width: usize) -> Self {
        Self {
            width: Some(width),
            alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub const fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Total width available to the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutBudget {
    pub total_width: usize,
}

impl LayoutBudget {
    #[must_use]
    pub const fn new(total_width: usize) -> Self {
        Self { total_width }
    }

    /// Budget left after reserving `n` columns (borders, separators).
    #[must_use]
    pub const fn reserve(self, n: usize) -> Self {
        Self {
            total_width: self.total_width.saturating_sub(n),
        }
    }
}

impl Default for LayoutBudget {
    fn default() -> Self {
        Self::new(80)
    }
}

/// Number of columns implied by the content and the spec.
#[must_use]
pub fn column_count(content: &[Row], spec: Option<&[ColumnSpec]>) -> usize {
    let from_content = content.iter().map(Vec::len).max().unwrap_or(0);
    from_content.max(spec.map_or(0, <[ColumnSpec]>::len))
}

/// Final width of every column.
#[must_use]
pub fn compute_column_widths(
    content: &[Row],
    spec: Option<&[ColumnSpec]>,
    budget: LayoutBudget,
) -> Vec<usize> {
    let columns = column_count(content, spec);
    if columns == 0 {
        return Vec::new();
    }

    let requested: Vec<Option<usize>> = (0..columns)
        .map(|i| spec.and_then(|s| s.get(i)).and_then(|c| c.width))
        .collect();

    if requested.iter().any(Option::is_some) {
        return distribute_requested(&requested, budget);
    }

    let natural: Vec<usize> = (0..columns)
        .map(|col| {
            content
                .iter()
                .filter_map(|r| r.get(col).and_then(Option::as_deref))
                .map(visible_length)
                .max()
                .unwrap_or(0)
                + 2
        })
        .collect();

    let total: usize = natural.iter().sum();
    if total <= budget.total_width {
        return natural;
    }

    let scaled: Vec<usize> = natural
        .iter()
        .map(|&w| scale(w, budget.total_width, total).max(MIN_COLUMN_WIDTH))
        .collect();

    let scaled_total: usize = scaled.iter().sum();
    if scaled_total > budget.total_width {
        tracing::debug!(
            columns,
            budget = budget.total_width,
            width = scaled_total,
            "column floor exceeds width budget"
        );
    }
    scaled
}

/// `w * budget / total`, floored, without intermediate overflow.
fn scale(w: usize, budget: usize, total: usize) -> usize {
    ((w as u128 * budget as u128) / total as u128) as usize
}

fn distribute_requested(requested: &[Option<usize>], budget: LayoutBudget) -> Vec<usize> {
    let reserved: usize = requested.iter().flatten().sum();
    let mut unassigned = requested.iter().filter(|w| w.is_none()).count();
    let mut remaining = budget.total_width.saturating_sub(reserved);

    requested
        .iter()
        .map(|req| match *req {
            Some(w) => w,
            None => {
                let share = (remaining / unassigned.max(1)).max(MIN_COLUMN_WIDTH);
                remaining = remaining.saturating_sub(share);
                unassigned -= 1;
                share
            }
        })
        .collect()
}
