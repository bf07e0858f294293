/// Utility functions for the portfolio UI
///
/// Class merging, display formatting, and markdown rendering helpers.

pub mod class;
pub mod format;
pub mod markdown;
