#![forbid(unsafe_code)]

//! Text measuring for strings that carry ANSI escape sequences.
//!
//! Every function here treats escape sequences as zero-width and never
//! splits one:
//! - [`visible_length`] / [`display_width`] - how wide a styled string is
//! - [`truncate`] - cut to a visible width, closing any style left open
//! - [`pad`], [`pad_left`], [`pad_right`], [`center`], [`fit`] - align
//! - [`wrap::wrap`] - break into lines, carrying style across breaks
//! - [`scanner::tokens`] - the underlying escape/text tokenizer
//!
//! # Example
//! ```
//! use ansikit_text::{Side, fit, truncate, visible_length};
//!
//! let red = "\x1b[31mHello World\x1b[0m";
//! assert_eq!(visible_length(red), 11);
//! assert_eq!(truncate(red, 5), "\x1b[31mHello\x1b[0m");
//! assert_eq!(visible_length(&fit(red, 8, Side::Right)), 8);
//! ```

pub mod measure;
pub mod scanner;
pub mod wrap;

pub use measure::{
    Side, center, display_width, fit, pad, pad_left, pad_right, repeat, strip_ansi, truncate,
    visible_length,
};
pub use scanner::{Token, tokens};
pub use wrap::{WrapMode, wrap};
