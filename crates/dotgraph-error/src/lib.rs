//! # dotgraph-error
//!
//! Unified error handling for dotgraph.
//!
//! - **ErrorKind**: what went wrong (e.g. WriteFailed, FileNotFound)
//! - **Error Context**: operation name plus key/value pairs locating the cause
//! - **Error Source**: the underlying error, kept without leaking its raw type
//!
//! ## Usage
//!
//! ```rust
//! use dotgraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::WriteFailed, "sink closed")
//!         .with_operation("dot::write")
//!         .with_context("line", "3"))
//! }
//! ```
//!
//! Building and compiling graphs never fails; only writing the compiled
//! document to a sink (and the CLI's file handling) produce errors.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using dotgraph Error
pub type Result<T> = std::result::Result<T, Error>;
