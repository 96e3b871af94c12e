//! Access to raw binary data.
//!
//! Only the bounds-checked little-endian readers in [`io`] are needed here; they back the
//! method body header parser in [`crate::metadata::method`].

pub mod io;
