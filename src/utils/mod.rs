//! Shared utility functions.

pub mod format;
