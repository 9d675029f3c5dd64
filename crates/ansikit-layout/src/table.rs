#![forbid(unsafe_code)]

//! Bordered tables.
//!
//! [`render_table`] is the low-level renderer: it takes final column widths
//! and draws every row between square borders with a separator after each
//! row. [`Table`] is the builder most callers want; it measures content,
//! fits it to a width budget, and supports a header row and other border
//! styles.
//!
//! ```
//! use ansikit_layout::table::Table;
//!
//! let out = Table::new()
//!     .header(["Name", "Qty"])
//!     .row(["Widget", "12"])
//!     .render();
//! assert_eq!(
//!     out,
//!     "┌────────┬─────┐\n\
//!      │ Name   │ Qty │\n\
//!      ├────────┼─────┤\n\
//!      │ Widget │ 12  │\n\
//!      └────────┴─────┘\n"
//! );
//! ```

use std::fmt;

use ansikit_core::terminal_size::{DEFAULT_WIDTH, terminal_width};
use ansikit_style::{Style, apply};
use ansikit_text::fit;

use crate::borders::{BorderSet, BorderType};
use crate::columns::{Alignment, ColumnSpec, LayoutBudget, Row, column_count, compute_column_widths};

/// Render `content` with the given column widths.
///
/// Square borders are drawn when `borders` is set, with a separator line
/// between every pair of rows; `style` colors the border glyphs. Cells are
/// truncated to `width - 2` and padded with one space on each side.
/// Rows shorter than `widths` get empty cells.
#[must_use]
pub fn render_table(
    content: &[Row],
    widths: &[usize],
    alignments: &[Alignment],
    borders: bool,
    style: &Style,
) -> String {
    let frame = TableFrame {
        widths,
        alignments,
        set: borders.then_some(BorderSet::SQUARE),
        border_style: style,
        header_style: &Style::new(),
        row_separators: true,
    };
    frame.render(None, content)
}

/// Settings for [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Total width budget, borders included.
    pub width: usize,
    pub borders: bool,
    pub border_type: BorderType,
    /// Draw a separator between body rows (the header always gets one).
    pub row_separators: bool,
    pub border_style: Style,
    pub header_style: Style,
    pub columns: Vec<ColumnSpec>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            borders: true,
            border_type: BorderType::Square,
            row_separators: true,
            border_style: Style::new(),
            header_style: Style::new(),
            columns: Vec::new(),
        }
    }
}

impl TableOptions {
    /// Defaults sized to the current terminal width.
    ///
    /// [`Default`] always uses [`DEFAULT_WIDTH`] so output stays
    /// reproducible; reach for this when rendering to a live terminal.
    #[must_use]
    pub fn for_terminal() -> Self {
        Self {
            width: terminal_width(),
            ..Self::default()
        }
    }
}

/// Table builder.
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Option<Row>,
    rows: Vec<Row>,
    options: TableOptions,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header row.
    #[must_use]
    pub fn header<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(crate::columns::row(cells));
        self
    }

    /// Append a row of present cells.
    #[must_use]
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(crate::columns::row(cells));
        self
    }

    /// Append a row that may contain missing cells.
    #[must_use]
    pub fn row_cells(mut self, cells: Row) -> Self {
        self.rows.push(cells);
        self
    }

    #[must_use]
    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.options.width = width;
        self
    }

    #[must_use]
    pub fn borders(mut self, borders: bool) -> Self {
        self.options.borders = borders;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.options.border_type = border_type;
        self
    }

    #[must_use]
    pub fn row_separators(mut self, on: bool) -> Self {
        self.options.row_separators = on;
        self
    }

    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.options.border_style = style;
        self
    }

    #[must_use]
    pub fn header_style(mut self, style: Style) -> Self {
        self.options.header_style = style;
        self
    }

    /// Append a column spec; specs apply to columns in order.
    #[must_use]
    pub fn column(mut self, spec: ColumnSpec) -> Self {
        self.options.columns.push(spec);
        self
    }

    /// Final column widths for the current content and options.
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        let all = self.all_rows();
        let spec = Some(self.options.columns.as_slice());
        let columns = column_count(&all, spec);
        let overhead = if self.options.borders { columns + 1 } else { 0 };
        let budget = LayoutBudget::new(self.options.width).reserve(overhead);
        compute_column_widths(&all, spec, budget)
    }

    /// Render the table; empty when there is neither a header nor rows.
    #[must_use]
    pub fn render(&self) -> String {
        let _span = tracing::debug_span!("table_render", rows = self.rows.len()).entered();
        let widths = self.column_widths();
        let alignments: Vec<Alignment> = (0..widths.len())
            .map(|i| self.options.columns.get(i).map_or(Alignment::Left, |c| c.alignment))
            .collect();
        let frame = TableFrame {
            widths: &widths,
            alignments: &alignments,
            set: self
                .options
                .borders
                .then(|| self.options.border_type.to_border_set()),
            border_style: &self.options.border_style,
            header_style: &self.options.header_style,
            row_separators: self.options.row_separators,
        };
        frame.render(self.header.as_ref(), &self.rows)
    }

    fn all_rows(&self) -> Vec<Row> {
        self.header.iter().chain(self.rows.iter()).cloned().collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Everything needed to draw rows once widths are known.
struct TableFrame<'a> {
    widths: &'a [usize],
    alignments: &'a [Alignment],
    set: Option<BorderSet>,
    border_style: &'a Style,
    header_style: &'a Style,
    row_separators: bool,
}

impl TableFrame<'_> {
    fn render(&self, header: Option<&Row>, body: &[Row]) -> String {
        if self.widths.is_empty() || (header.is_none() && body.is_empty()) {
            return String::new();
        }

        let mut out = String::new();
        if let Some(set) = self.set {
            self.rule(&mut out, set.top_left, set.top_tee, set.top_right, set.horizontal);
        }
        if let Some(header) = header {
            self.row(&mut out, header, self.header_style);
            if !body.is_empty() {
                self.separator(&mut out);
            }
        }
        for (i, row) in body.iter().enumerate() {
            self.row(&mut out, row, &Style::new());
            if self.row_separators && i + 1 < body.len() {
                self.separator(&mut out);
            }
        }
        if let Some(set) = self.set {
            self.rule(&mut out, set.bottom_left, set.bottom_tee, set.bottom_right, set.horizontal);
        }
        out
    }

    fn separator(&self, out: &mut String) {
        if let Some(set) = self.set {
            self.rule(out, set.left_tee, set.cross, set.right_tee, set.horizontal);
        }
    }

    fn rule(&self, out: &mut String, left: char, junction: char, right: char, fill: char) {
        let mut line = String::new();
        line.push(left);
        for (i, &w) in self.widths.iter().enumerate() {
            if i > 0 {
                line.push(junction);
            }
            line.extend(std::iter::repeat_n(fill, w));
        }
        line.push(right);
        out.push_str(&apply(self.border_style, &line));
        out.push('\n');
    }

    fn row(&self, out: &mut String, row: &Row, text_style: &Style) {
        let vertical = self
            .set
            .map(|set| apply(self.border_style, &set.vertical.to_string()));
        if let Some(v) = &vertical {
            out.push_str(v);
        }
        for (i, &w) in self.widths.iter().enumerate() {
            let text = row.get(i).and_then(Option::as_deref).unwrap_or("");
            let side = self
                .alignments
                .get(i)
                .copied()
                .unwrap_or_default()
                .pad_side();
            let cell = if w >= 2 {
                format!(" {} ", fit(text, w - 2, side))
            } else {
                fit(text, w, side)
            };
            out.push_str(&apply(text_style, &cell));
            if let Some(v) = &vertical {
                out.push_str(v);
            }
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::row;
    use ansikit_style::Color;
    use ansikit_text::visible_length;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_table_separates_every_row() {
        let content = vec![row(["a", "b"]), row(["c", "d"]), row(["e", "f"])];
        let out = render_table(&content, &[3, 3], &[], true, &Style::new());
        assert_eq!(
            out,
            "┌───┬───┐\n\
             │ a │ b │\n\
             ├───┼───┤\n\
             │ c │ d │\n\
             ├───┼───┤\n\
             │ e │ f │\n\
             └───┴───┘\n"
        );
    }

    #[test]
    fn render_table_without_borders() {
        let content = vec![row(["ab", "c"])];
        let out = render_table(&content, &[4, 3], &[], false, &Style::new());
        assert_eq!(out, " ab  c \n");
    }

    #[test]
    fn missing_cells_are_blank() {
        let content = vec![vec![Some("x".to_owned()), None]];
        let out = render_table(&content, &[3, 3], &[], false, &Style::new());
        assert_eq!(out, " x    \n");
    }

    #[test]
    fn long_cells_truncate() {
        let content = vec![row(["abcdefgh"])];
        let out = render_table(&content, &[5], &[], true, &Style::new());
        assert!(out.contains("│ abc │"), "{out}");
    }

    #[test]
    fn alignment_is_honored() {
        let content = vec![row(["a", "b", "c"])];
        let aligns = [Alignment::Left, Alignment::Center, Alignment::Right];
        let out = render_table(&content, &[5, 5, 5], &aligns, false, &Style::new());
        assert_eq!(out, " a     b     c \n");
    }

    #[test]
    fn border_style_wraps_glyphs_only() {
        let style = Style::new().fg(Color::rgb(100, 100, 100));
        let content = vec![row(["ok"])];
        let out = render_table(&content, &[4], &[], true, &style);
        assert!(out.contains(" ok "));
        assert!(out.contains("\x1b[38;2;100;100;100m│\x1b[0m"));
        for line in out.lines() {
            assert_eq!(visible_length(line), 6);
        }
    }

    #[test]
    fn builder_fits_budget_including_borders() {
        let long = "x".repeat(60);
        let table = Table::new()
            .width(40)
            .row([long.as_str(), long.as_str()]);
        for line in table.render().lines() {
            assert!(visible_length(line) <= 40, "{line}");
        }
    }

    #[test]
    fn builder_header_without_body_separators() {
        let out = Table::new()
            .header(["k", "v"])
            .row(["a", "1"])
            .row(["b", "2"])
            .row_separators(false)
            .border_type(BorderType::Ascii)
            .render();
        assert_eq!(
            out,
            "+---+---+\n\
             | k | v |\n\
             +---+---+\n\
             | a | 1 |\n\
             | b | 2 |\n\
             +---+---+\n"
        );
    }

    #[test]
    fn builder_column_spec_width_and_alignment() {
        let out = Table::new()
            .borders(false)
            .column(ColumnSpec::fixed(6).align(Alignment::Right))
            .row(["7"])
            .render();
        assert_eq!(out, "    7 \n");
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert_eq!(Table::new().render(), "");
        assert_eq!(render_table(&[], &[], &[], true, &Style::new()), "");
    }

    #[test]
    fn header_style_applied() {
        let out = Table::new()
            .borders(false)
            .header_style(Style::new().bold())
            .header(["H"])
            .row(["b"])
            .render();
        assert!(out.starts_with("\x1b[1m H \x1b[0m\n"), "{out:?}");
    }

    #[test]
    fn display_matches_render() {
        let table = Table::new().row(["a"]);
        assert_eq!(table.to_string(), table.render());
    }

    // --- Width default tests ---

    #[test]
    fn default_width_is_fixed_and_for_terminal_follows_terminal() {
        assert_eq!(TableOptions::default().width, DEFAULT_WIDTH);
        let sized = TableOptions::for_terminal();
        assert_eq!(sized.width, terminal_width());
        assert_eq!(
            TableOptions {
                width: DEFAULT_WIDTH,
                ..sized
            },
            TableOptions::default()
        );
    }
}
