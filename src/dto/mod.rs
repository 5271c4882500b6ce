//!
//! Module with all dtos that are passed between the backend and the feed
//!

pub mod input;
pub mod output;
