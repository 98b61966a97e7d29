pub mod summary;
pub mod valuation;

pub use summary::{summarize, Summary};
pub use valuation::*;
