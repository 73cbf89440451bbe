//! Indentation engine for emitting block-structured text.
//!
//! This crate provides the core primitives for writing correctly indented
//! output (source code, markup, documents) to any [`std::io::Write`] sink:
//!
//! - [`Writer`] - depth-tracking line emission with newline extension
//! - [`Scope`] / [`ScopeKind`] - nested regions with entry and exit lines
//! - [`ScopeGuard`] - RAII handle that closes a scope on every exit path
//! - [`Indent`] - indentation configuration
//!
//! Language vocabularies (`scribe-fortran`, `scribe-latex`, `scribe-python`)
//! are layered on top of these primitives; they build entry/exit strings and
//! delegate all depth bookkeeping to the [`Writer`].
//!
//! # Example
//!
//! ```
//! use scribe_core::{Indent, Writer};
//!
//! let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
//! writer.print("Line 1")?;
//! {
//!     let mut block = writer.block("BEGIN", "END")?;
//!     block.print("Line 2")?;
//! }
//! let output = String::from_utf8(writer.into_sink()).unwrap();
//! assert_eq!(output, "Line 1\nBEGIN\n  Line 2\nEND\n");
//! # Ok::<(), scribe_core::Error>(())
//! ```

mod error;
mod indent;
mod scope;
mod writer;

pub use error::{Error, Result};
pub use indent::Indent;
pub use scope::{Scope, ScopeKind};
pub use writer::{ScopeGuard, Writer};
