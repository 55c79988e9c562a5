//! Visualization and plotting

pub mod segments;

pub use segments::SegmentsPlotter;
