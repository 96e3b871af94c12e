//! Metadata facts the output sink works with.
//!
//! The sink does not load assemblies. Producers hand it methods and debug records built
//! elsewhere; this module defines those values.
//!
//! # Key Components
//!
//! - [`token`] - Metadata tokens identifying methods
//! - [`method`] - Methods and their body headers
//! - [`debuginfo`] - Debug information attached to generated method text

/// Debug information of generated method text
pub mod debuginfo;
/// Methods and method body headers
pub mod method;
/// Commonly used metadata token type
pub mod token;
