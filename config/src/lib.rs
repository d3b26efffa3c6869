//! # Config Crate
//!
//! Centralized configuration constants for the arraydraw pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CUBE_SIZE, LINE_SIZE_DIVISOR, approx_equal};
//!
//! // Stroke width defaults to a tenth of the cube size
//! let line_size = DEFAULT_CUBE_SIZE / LINE_SIZE_DIVISOR;
//! assert!(approx_equal(line_size, 3.0));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency-Free**: Plain values usable from any crate
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
