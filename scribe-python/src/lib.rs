//! Python vocabulary for the scribe indentation engine.
//!
//! Block constructs ([`Class`], [`Def`], [`ForLoop`], [`WhileLoop`], [`If`])
//! are builders that render to `scribe-core` scopes; the [`PythonWriter`]
//! extension trait drives them through any [`scribe_core::Writer`].
//!
//! `elif` and `else` are not scopes of their own: they are one-shot depth
//! perturbations on the currently open conditional scope and fail with a
//! usage error anywhere else.
//!
//! # Example
//!
//! ```
//! use scribe_core::Writer;
//! use scribe_python::{Def, PythonWriter};
//!
//! let mut writer = Writer::new(Vec::new());
//! {
//!     let mut main = writer.function_def(Def::new("main"))?;
//!     let mut branch = main.if_statement("ready")?;
//!     branch.print("run()")?;
//!     branch.else_clause()?;
//!     branch.print("wait()")?;
//! }
//! # Ok::<(), scribe_core::Error>(())
//! ```

mod blocks;
mod writer;

pub use blocks::{Class, Def, ForLoop, If, WhileLoop};
pub use writer::PythonWriter;
