//! Output formats for benchmark records

pub mod markdown;

pub use markdown::MarkdownTable;
