//! LaTeX vocabulary for the scribe indentation engine.
//!
//! [`Environment`] and [`ItemList`] are builders that render to
//! `scribe-core` scopes; the [`LatexWriter`] extension trait drives them
//! through any [`scribe_core::Writer`]. List entries are emitted with the
//! core `item` operation and come out as `\item` lines.
//!
//! # Example
//!
//! ```
//! use scribe_core::Writer;
//! use scribe_latex::{Environment, ItemList, LatexWriter};
//!
//! let mut writer = Writer::new(Vec::new());
//! {
//!     let mut document = writer.environment(Environment::new("document"))?;
//!     let mut list = document.item_list(ItemList::itemize())?;
//!     list.item("first entry")?;
//! }
//! # Ok::<(), scribe_core::Error>(())
//! ```

mod env;
mod writer;

pub use env::{Environment, ItemList};
pub use writer::LatexWriter;
