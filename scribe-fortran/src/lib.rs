//! Fortran vocabulary for the scribe indentation engine.
//!
//! Block constructs ([`Module`], [`Function`], [`Subroutine`], [`IfThen`],
//! [`Select`]) are builders that render to `scribe-core` scopes; the
//! [`FortranWriter`] extension trait drives them through any
//! [`scribe_core::Writer`] and adds the leaf emitters (`use`, declarations,
//! comments, `contains`).
//!
//! # Example
//!
//! ```
//! use scribe_core::Writer;
//! use scribe_fortran::{Declaration, FortranWriter, Function, Intent};
//!
//! let mut writer = Writer::new(Vec::new());
//! {
//!     let mut function = writer.function(Function::new("area").arg("r").result("a").pure())?;
//!     function.declare(&Declaration::new("real").name("r").intent(Intent::In))?;
//!     function.print("a = 3.14159 * r * r")?;
//! }
//! # Ok::<(), scribe_core::Error>(())
//! ```

mod blocks;
mod decl;
mod writer;

pub use blocks::{Function, IfThen, Module, Select, Subroutine};
pub use decl::{Declaration, Intent};
pub use writer::FortranWriter;
