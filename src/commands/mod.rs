//! Command implementations for the Köln match archive CLI

pub mod fetch;
pub mod report;
pub mod rivals;
pub mod stats;
