#![forbid(unsafe_code)]

//! Terminal width discovery.

use std::env;

/// Width assumed when nothing better is known.
pub const DEFAULT_WIDTH: usize = 80;

/// Current terminal width in columns.
///
/// `COLUMNS` wins when it holds a positive integer; otherwise the tty is
/// asked; otherwise [`DEFAULT_WIDTH`].
#[must_use]
pub fn terminal_width() -> usize {
    let columns = env::var("COLUMNS").ok();
    let width = width_from(columns.as_deref(), tty_width());
    crate::trace!(width, "terminal width resolved");
    width
}

/// Resolve a width from an optional `COLUMNS` value and an optional tty query.
#[must_use]
pub fn width_from(columns: Option<&str>, tty: Option<u16>) -> usize {
    columns
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&w| w > 0)
        .or_else(|| tty.filter(|&w| w > 0).map(usize::from))
        .unwrap_or(DEFAULT_WIDTH)
}

#[cfg(not(target_arch = "wasm32"))]
fn tty_width() -> Option<u16> {
    crossterm::terminal::size().ok().map(|(cols, _rows)| cols)
}

#[cfg(target_arch = "wasm32")]
fn tty_width() -> Option<u16> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_env_takes_priority() {
        assert_eq!(width_from(Some("132"), Some(100)), 132);
    }

    #[test]
    fn garbage_columns_falls_through_to_tty() {
        assert_eq!(width_from(Some("wide"), Some(100)), 100);
        assert_eq!(width_from(Some("0"), Some(90)), 90);
    }

    #[test]
    fn nothing_known_is_default() {
        assert_eq!(width_from(None, None), DEFAULT_WIDTH);
        assert_eq!(width_from(None, Some(0)), DEFAULT_WIDTH);
    }

    #[test]
    fn columns_is_trimmed() {
        assert_eq!(width_from(Some(" 40\n"), None), 40);
    }
}
