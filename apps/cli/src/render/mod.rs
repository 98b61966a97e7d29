//! Terminal output: number formatting, boxed tables and line plots.

mod format;
mod plot;
mod table;

pub use format::{format_amount, format_duration, format_price};
pub use plot::{plot, series, PlotOptions};
pub use table::Table;

/// ANSI sequence that clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
