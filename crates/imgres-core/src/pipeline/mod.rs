//! Scan pipeline components.
//!
//! - **discovery**: Find candidate files in a folder
//! - **dimensions**: Read width/height from image headers
//! - **scanner**: Orchestrates one pass over a folder

pub mod dimensions;
pub mod discovery;
pub mod scanner;

// Re-exports for convenient access
pub use dimensions::{DimensionReader, Dimensions};
pub use discovery::{DiscoveredFile, FileDiscovery};
pub use scanner::{ScanProgress, Scanner};
