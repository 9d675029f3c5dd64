#![forbid(unsafe_code)]

//! Tree rendering for hierarchical labels and directory listings.
//!
//! # Example
//!
//! ```
//! use ansikit_layout::tree::{TreeNode, TreeOptions, render_tree};
//!
//! let root = TreeNode::new("root")
//!     .child(TreeNode::new("src").child(TreeNode::new("main.rs")))
//!     .child(TreeNode::new("Cargo.toml"));
//!
//! assert_eq!(
//!     render_tree(&root, &TreeOptions::default()),
//!     "root\n├── src\n│   └── main.rs\n└── Cargo.toml\n"
//! );
//! ```

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

use ansikit_core::terminal_size::{DEFAULT_WIDTH, terminal_width};
use ansikit_style::{Style, apply};
use ansikit_text::{truncate, visible_length};

/// Guide character styles for tree rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TreeGuides {
    /// ASCII guides: `|`, `+--`, `` `-- ``.
    Ascii,
    /// Unicode box-drawing characters (default).
    #[default]
    Unicode,
    /// Heavy box-drawing characters.
    Bold,
    /// Double-line characters.
    Double,
    /// Unicode with a rounded last-item corner.
    Rounded,
}

impl TreeGuides {
    /// Continuation under an ancestor that has siblings below.
    #[must_use]
    pub const fn vertical(&self) -> &'static str {
        match self {
            Self::Ascii => "|   ",
            Self::Unicode | Self::Rounded => "│   ",
            Self::Bold => "┃   ",
            Self::Double => "║   ",
        }
    }

    /// Guide for an item with siblings below.
    #[must_use]
    pub const fn branch(&self) -> &'static str {
        match self {
            Self::Ascii => "+-- ",
            Self::Unicode | Self::Rounded => "├── ",
            Self::Bold => "┣━━ ",
            Self::Double => "╠══ ",
        }
    }

    /// Guide for the last item among its siblings.
    #[must_use]
    pub const fn last(&self) -> &'static str {
        match self {
            Self::Ascii => "`-- ",
            Self::Unicode => "└── ",
            Self::Bold => "┗━━ ",
            Self::Double => "╚══ ",
            Self::Rounded => "╰── ",
        }
    }

    #[must_use]
    pub const fn space(&self) -> &'static str {
        "    "
    }

    /// Columns taken by each guide segment.
    #[must_use]
    pub const fn width(&self) -> usize {
        4
    }
}

/// A node in the tree hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
    expanded: bool,
}

impl TreeNode {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
            expanded: true,
        }
    }

    #[must_use]
    pub fn child(mut self, node: TreeNode) -> Self {
        self.children.push(node);
        self
    }

    #[must_use]
    pub fn with_children(mut self, nodes: Vec<TreeNode>) -> Self {
        self.children = nodes;
        self
    }

    /// Collapsed nodes render without their children.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Number of nodes a render would emit, this one included.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        1 + if self.expanded {
            self.children.iter().map(TreeNode::visible_count).sum()
        } else {
            0
        }
    }

    /// Build a tree from the directory at `path`.
    ///
    /// Directory labels end with `/`. Entries are sorted directories first,
    /// then by name. Symlinks are listed but not followed. Only an error on
    /// `path` itself is returned; unreadable subdirectories are listed
    /// without children.
    pub fn from_path(path: impl AsRef<Path>, options: &TreeBuildOptions) -> io::Result<TreeNode> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        if !meta.is_dir() {
            return Ok(TreeNode::new(name));
        }
        let children = read_children(path, 1, options)?;
        Ok(TreeNode::new(format!("{name}/")).with_children(children))
    }
}

/// Settings for [`TreeNode::from_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBuildOptions {
    /// Deepest level to read; the root is level 0.
    pub max_depth: Option<usize>,
    /// Include entries whose name starts with `.`.
    pub show_hidden: bool,
    pub dirs_first: bool,
}

impl Default for TreeBuildOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            show_hidden: false,
            dirs_first: true,
        }
    }
}

fn read_children(dir: &Path, depth: usize, options: &TreeBuildOptions) -> io::Result<Vec<TreeNode>> {
    if options.max_depth.is_some_and(|max| depth > max) {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if !options.show_hidden && name.starts_with('.') {
            continue;
        }
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        entries.push((is_dir, name, entry.path()));
    }

    entries.sort_by(|a, b| {
        let by_kind = if options.dirs_first {
            b.0.cmp(&a.0)
        } else {
            Ordering::Equal
        };
        by_kind
            .then_with(|| a.1.to_lowercase().cmp(&b.1.to_lowercase()))
            .then_with(|| a.1.cmp(&b.1))
    });

    let nodes = entries
        .into_iter()
        .map(|(is_dir, name, path)| {
            if !is_dir {
                return TreeNode::new(name);
            }
            let children = read_children(&path, depth + 1, options).unwrap_or_else(|err| {
                tracing::debug!(dir = %path.display(), error = %err, "skipping unreadable directory");
                Vec::new()
            });
            TreeNode::new(format!("{name}/")).with_children(children)
        })
        .collect();
    Ok(nodes)
}

/// Settings for [`render_tree`].
#[derive(Debug, Clone, PartialEq)]
pub struct TreeOptions {
    /// Maximum visible width of a line, guides included.
    pub width: usize,
    /// Deepest level to render; the root is level 0.
    pub max_depth: Option<usize>,
    pub guides: TreeGuides,
    pub guide_style: Style,
    pub label_style: Style,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            max_depth: None,
            guides: TreeGuides::Unicode,
            guide_style: Style::new(),
            label_style: Style::new(),
        }
    }
}

impl TreeOptions {
    #[must_use]
    pub fn for_terminal() -> Self {
        Self {
            width: terminal_width(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    #[must_use]
    pub fn guides(mut self, guides: TreeGuides) -> Self {
        self.guides = guides;
        self
    }

    #[must_use]
    pub fn guide_style(mut self, style: Style) -> Self {
        self.guide_style = style;
        self
    }

    #[must_use]
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }
}

/// Render `root` and its expanded descendants, one line per node, each
/// ending in `\n`.
#[must_use]
pub fn render_tree(root: &TreeNode, options: &TreeOptions) -> String {
    let mut out = String::new();
    let mut is_last = Vec::new();
    render_node(root, options, &mut is_last, &mut out);
    out
}

fn render_node(node: &TreeNode, options: &TreeOptions, is_last: &mut Vec<bool>, out: &mut String) {
    let depth = is_last.len();
    let guides = options.guides;

    let mut prefix = String::new();
    for (d, &last) in is_last.iter().enumerate() {
        let guide = if d + 1 == depth {
            if last { guides.last() } else { guides.branch() }
        } else if last {
            guides.space()
        } else {
            guides.vertical()
        };
        prefix.push_str(guide);
    }

    let room = options.width.saturating_sub(visible_length(&prefix));
    if !prefix.is_empty() {
        out.push_str(&apply(&options.guide_style, &prefix));
    }
    out.push_str(&apply(&options.label_style, &truncate(&node.label, room)));
    out.push('\n');

    if !node.expanded || options.max_depth.is_some_and(|max| depth >= max) {
        return;
    }
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        is_last.push(i + 1 == count);
        render_node(child, options, is_last, out);
        is_last.pop();
    }
}
