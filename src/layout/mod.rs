//! Text layout: tables and wrapped paragraphs
//!
//! Both measure with [`crate::width::visual_width`], so colored text lays
//! out the same as plain text.

mod table;
mod wrap;

pub use table::{column_widths, render_table};
pub use wrap::{wrap, wrap_lines, wrap_with_terminal_width};
