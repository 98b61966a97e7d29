//! Quotes module - active price selection and per-pass quote resolution.

mod model;
mod resolver;

pub use model::{active_price, Quote};
pub use resolver::QuoteResolver;
