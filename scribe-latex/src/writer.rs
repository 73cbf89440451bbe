//! The `LatexWriter` extension trait over the core writer.

use std::io::Write;

use scribe_core::{Result, ScopeGuard, Writer};

use crate::{Environment, ItemList};

/// LaTeX vocabulary layered over [`Writer`].
pub trait LatexWriter<W: Write> {
    /// Open an environment scope.
    fn environment(&mut self, environment: Environment) -> Result<ScopeGuard<'_, W>>;

    /// Open a configured list environment.
    fn item_list(&mut self, list: ItemList) -> Result<ScopeGuard<'_, W>>;

    /// Open a plain `itemize` listing.
    fn itemize(&mut self) -> Result<ScopeGuard<'_, W>>;

    /// Open a plain `enumerate` listing.
    fn enumerate(&mut self) -> Result<ScopeGuard<'_, W>>;

    /// Emit `text` as `%` comment lines.
    fn comment(&mut self, text: &str) -> Result<()>;
}

impl<W: Write> LatexWriter<W> for Writer<W> {
    fn environment(&mut self, environment: Environment) -> Result<ScopeGuard<'_, W>> {
        self.scope(environment.into())
    }

    fn item_list(&mut self, list: ItemList) -> Result<ScopeGuard<'_, W>> {
        self.scope(list.into())
    }

    fn itemize(&mut self) -> Result<ScopeGuard<'_, W>> {
        self.item_list(ItemList::itemize())
    }

    fn enumerate(&mut self) -> Result<ScopeGuard<'_, W>> {
        self.item_list(ItemList::enumerate())
    }

    fn comment(&mut self, text: &str) -> Result<()> {
        self.print(format!("% {}", text.replace('\n', "\n% ")))
    }
}
