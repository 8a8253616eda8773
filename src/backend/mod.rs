// ABOUTME: External collaborators the leaf tools delegate to.
// ABOUTME: Feed retrieval, chart rendering, and text polarity scoring.

mod chart;
mod feed;
mod polarity;

pub use chart::*;
pub use feed::*;
pub use polarity::*;
