//! The `PythonWriter` extension trait over the core writer.

use std::io::Write;

use scribe_core::{Error, Result, ScopeGuard, ScopeKind, Writer};

use crate::{Class, Def, ForLoop, If, WhileLoop};

/// Python vocabulary layered over [`Writer`].
pub trait PythonWriter<W: Write> {
    /// Open a `class` scope.
    fn class_def(&mut self, class: Class) -> Result<ScopeGuard<'_, W>>;

    /// Open a `def` scope.
    fn function_def(&mut self, def: Def) -> Result<ScopeGuard<'_, W>>;

    /// Open a `for` loop scope.
    fn for_loop(&mut self, for_loop: ForLoop) -> Result<ScopeGuard<'_, W>>;

    /// Open a `while` loop scope.
    fn while_loop(&mut self, condition: &str) -> Result<ScopeGuard<'_, W>>;

    /// Open an `if` conditional scope.
    fn if_statement(&mut self, condition: &str) -> Result<ScopeGuard<'_, W>>;

    /// Emit an `elif` clause of the innermost `if` scope.
    fn elif_clause(&mut self, condition: &str) -> Result<()>;

    /// Emit the `else` clause of the innermost `if` scope.
    fn else_clause(&mut self) -> Result<()>;

    /// Emit `text` as `#` comment lines.
    fn comment(&mut self, text: &str) -> Result<()>;
}

impl<W: Write> PythonWriter<W> for Writer<W> {
    fn class_def(&mut self, class: Class) -> Result<ScopeGuard<'_, W>> {
        self.scope(class.into())
    }

    fn function_def(&mut self, def: Def) -> Result<ScopeGuard<'_, W>> {
        self.scope(def.into())
    }

    fn for_loop(&mut self, for_loop: ForLoop) -> Result<ScopeGuard<'_, W>> {
        self.scope(for_loop.into())
    }

    fn while_loop(&mut self, condition: &str) -> Result<ScopeGuard<'_, W>> {
        self.scope(WhileLoop::new(condition).into())
    }

    fn if_statement(&mut self, condition: &str) -> Result<ScopeGuard<'_, W>> {
        self.scope(If::new(condition).into())
    }

    fn elif_clause(&mut self, condition: &str) -> Result<()> {
        expect_conditional(self)?;
        self.print_dedented(format!("elif {condition}:"))
    }

    fn else_clause(&mut self) -> Result<()> {
        expect_conditional(self)?;
        self.print_dedented("else:")
    }

    fn comment(&mut self, text: &str) -> Result<()> {
        self.print(format!("# {}", text.replace('\n', "\n# ")))
    }
}

fn expect_conditional<W: Write>(writer: &Writer<W>) -> Result<()> {
    match writer.innermost_kind() {
        None => Err(Error::NoOpenScope),
        Some(ScopeKind::Conditional) => Ok(()),
        Some(kind) => Err(Error::ScopeKindMismatch {
            expected: "conditional",
            found: kind.name(),
        }),
    }
}
