//! Library side of the spend JSON runner.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod publication;
pub mod sink;
