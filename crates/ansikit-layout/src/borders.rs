#![forbid(unsafe_code)]

//! Border glyph sets shared by tables, boxes, and dividers.

/// Glyphs for one border style, junctions included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// `┬`: column boundary on the top edge.
    pub top_tee: char,
    /// `┴`: column boundary on the bottom edge.
    pub bottom_tee: char,
    /// `├`: row separator meeting the left edge.
    pub left_tee: char,
    /// `┤`: row separator meeting the right edge.
    pub right_tee: char,
    /// `┼`: row separator crossing a column boundary.
    pub cross: char,
}

impl BorderSet {
    /// Single-line box drawing.
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
        top_tee: '┬',
        bottom_tee: '┴',
        left_tee: '├',
        right_tee: '┤',
        cross: '┼',
    };

    /// Single-line with rounded corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..Self::SQUARE
    };

    /// Double-line box drawing.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
        top_tee: '╦',
        bottom_tee: '╩',
        left_tee: '╠',
        right_tee: '╣',
        cross: '╬',
    };

    /// Heavy box drawing.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
        top_tee: '┳',
        bottom_tee: '┻',
        left_tee: '┣',
        right_tee: '┫',
        cross: '╋',
    };

    /// Plain ASCII for terminals without box drawing glyphs.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
        top_tee: '+',
        bottom_tee: '+',
        left_tee: '+',
        right_tee: '+',
        cross: '+',
    };
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::SQUARE
    }
}

/// Named border styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderType {
    #[default]
    Square,
    Rounded,
    Double,
    Heavy,
    Ascii,
}

impl BorderType {
    /// Glyphs for this style.
    #[must_use]
    pub const fn to_border_set(self) -> BorderSet {
        match self {
            Self::Square => BorderSet::SQUARE,
            Self::Rounded => BorderSet::ROUNDED,
            Self::Double => BorderSet::DOUBLE,
            Self::Heavy => BorderSet::HEAVY,
            Self::Ascii => BorderSet::ASCII,
        }
    }
}
