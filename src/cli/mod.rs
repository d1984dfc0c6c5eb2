//! Command-line surface.
//!
//! Sheet-expression parsing is always built so it can be reused and tested
//! without the binary; the clap argument handling is gated behind the
//! `cli` feature.

pub mod sheets;

#[cfg(feature = "cli")]
pub mod app;

pub use sheets::parse_sheets;
