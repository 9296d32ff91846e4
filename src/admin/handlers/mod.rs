//! Admin handlers.

mod metrics;
mod reset;

pub use metrics::metrics_handler;
pub use reset::reset_handler;
