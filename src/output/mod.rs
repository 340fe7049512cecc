//! Batch-mode output

pub mod formatter;

pub use formatter::ConsoleFormatter;
