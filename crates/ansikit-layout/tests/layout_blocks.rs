//! End-to-end layout checks: every block keeps its frame aligned when the
//! content carries escape sequences.

use ansikit_core::terminal_width;
use ansikit_layout::{
    Alignment, BorderType, BoxOptions, ColumnSpec, Divider, DividerOptions, Table, TableOptions,
    TreeNode, TreeOptions, row, render_box, render_divider, render_table, render_tree,
};
use ansikit_style::{Color, Rgb, Style, apply};
use ansikit_text::{strip_ansi, visible_length};
use pretty_assertions::assert_eq;

fn red(s: &str) -> String {
    apply(&Style::new().fg(Color::rgb(255, 0, 0)), s)
}

fn assert_uniform_width(block: &str, width: usize) {
    for line in block.lines() {
        assert_eq!(visible_length(line), width, "line {line:?}");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Tables
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn styled_cells_do_not_skew_columns() {
    let table = Table::new()
        .header(["Service", "Status"])
        .row([red("api").as_str(), "up"])
        .row(["worker", red("degraded").as_str()])
        .border_style(Style::new().fg(Rgb::new(100, 100, 100)));
    let out = table.render();
    assert_uniform_width(&out, 22);
    assert_eq!(
        strip_ansi(&out),
        "┌─────────┬──────────┐\n\
         │ Service │ Status   │\n\
         ├─────────┼──────────┤\n\
         │ api     │ up       │\n\
         ├─────────┼──────────┤\n\
         │ worker  │ degraded │\n\
         └─────────┴──────────┘\n"
    );
}

#[test]
fn truncated_styled_cell_is_reset() {
    let content = vec![row([red("overflowing").as_str()])];
    let out = render_table(&content, &[6], &[], true, &Style::new());
    let body = out.lines().nth(1).unwrap();
    assert_eq!(body, "│ \x1b[38;2;255;0;0mover\x1b[0m │");
}

#[test]
fn ragged_rows_and_alignment() {
    let out = Table::new()
        .border_type(BorderType::Ascii)
        .row_separators(false)
        .column(ColumnSpec::auto())
        .column(ColumnSpec::auto().align(Alignment::Right))
        .row(["apples", "3"])
        .row_cells(vec![Some("pears".to_owned())])
        .render();
    assert_eq!(
        out,
        "+--------+---+\n\
         | apples | 3 |\n\
         | pears  |   |\n\
         +--------+---+\n"
    );
}

#[test]
fn narrow_budget_scales_columns() {
    let long = "y".repeat(50);
    let table = Table::new()
        .width(34)
        .row([long.as_str(), long.as_str(), long.as_str()]);
    assert_eq!(table.column_widths(), vec![10, 10, 10]);
    assert_uniform_width(&table.render(), 34);
}

// ═════════════════════════════════════════════════════════════════════════
// Dividers, boxes, trees
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn divider_with_styled_title() {
    let line = render_divider(&red("Build"), 21, '-', &Style::new());
    assert_eq!(strip_ansi(&line), "------- Build -------");
    let spaced = Divider::new().title("x").width(5).line_char('=');
    assert_eq!(spaced.to_string(), "\n= x =\n");
}

#[test]
fn box_with_title_and_styled_body() {
    let opts = BoxOptions::default()
        .width(16)
        .title(" Report ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Double)
        .padding(1);
    let body = format!("{} passed\n{} failed", red("12"), red("0"));
    let out = render_box(&body, &opts);
    assert_uniform_width(&out, 16);
    assert_eq!(
        strip_ansi(&out),
        "╔═══ Report ═══╗\n\
         ║              ║\n\
         ║12 passed     ║\n\
         ║0 failed      ║\n\
         ║              ║\n\
         ╚══════════════╝"
    );
}

#[test]
fn tree_from_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("proj");
    std::fs::create_dir_all(root.join("src")).unwrap();
    std::fs::write(root.join("src").join("main.rs"), "").unwrap();
    std::fs::write(root.join("Cargo.toml"), "").unwrap();

    let tree = TreeNode::from_path(&root, &Default::default()).unwrap();
    assert_eq!(
        render_tree(&tree, &TreeOptions::default()),
        "proj/\n\
         ├── src/\n\
         │   └── main.rs\n\
         └── Cargo.toml\n"
    );
}

// ═════════════════════════════════════════════════════════════════════════
// Terminal-sized options
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn for_terminal_options_share_the_terminal_width() {
    let width = terminal_width();
    assert_eq!(TableOptions::for_terminal().width, width);
    assert_eq!(DividerOptions::for_terminal().width, width);
    assert_eq!(BoxOptions::for_terminal().width, width);
    assert_eq!(TreeOptions::for_terminal().width, width);
    assert_eq!(
        BoxOptions::for_terminal().width(12),
        BoxOptions::default().width(12)
    );
}
