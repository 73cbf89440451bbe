//! The `FortranWriter` extension trait over the core writer.

use std::io::Write;

use scribe_core::{Error, Result, ScopeGuard, ScopeKind, Writer};

use crate::{Declaration, Function, IfThen, Module, Select, Subroutine};

/// Fortran vocabulary layered over [`Writer`].
///
/// Block constructs return a [`ScopeGuard`] closing the construct when
/// dropped; leaf emitters print single lines at the current depth.
pub trait FortranWriter<W: Write> {
    /// Open a `module` scope.
    fn module(&mut self, name: &str) -> Result<ScopeGuard<'_, W>>;

    /// Open a `function` scope.
    fn function(&mut self, function: Function) -> Result<ScopeGuard<'_, W>>;

    /// Open a `subroutine` scope.
    fn subroutine(&mut self, subroutine: Subroutine) -> Result<ScopeGuard<'_, W>>;

    /// Open an `if (...) then` scope.
    fn if_then(&mut self, condition: &str) -> Result<ScopeGuard<'_, W>>;

    /// Open a `select case (...)` listing.
    fn select(&mut self, selector: &str) -> Result<ScopeGuard<'_, W>>;

    /// Emit a `case (label)` item of the innermost `select` listing.
    fn case(&mut self, label: &str) -> Result<()>;

    /// Emit the `case default` item of the innermost `select` listing.
    fn case_default(&mut self) -> Result<()>;

    /// Emit the `else` clause of the innermost `if (...) then` scope.
    fn else_branch(&mut self) -> Result<()>;

    /// Emit an `else if (...) then` clause of the innermost `if` scope.
    fn else_if(&mut self, condition: &str) -> Result<()>;

    /// Emit a `use` statement.
    fn use_module(&mut self, module: &str) -> Result<()>;

    /// Emit a variable declaration line.
    fn declare(&mut self, declaration: &Declaration) -> Result<()>;

    /// Emit `text` as `!` comment lines, stripping the common leading
    /// whitespace first.
    fn comment(&mut self, text: &str) -> Result<()>;

    /// Emit the `contains` separator one level shallower than the module
    /// body, leaving the depth unchanged.
    fn contains(&mut self) -> Result<()>;
}

impl<W: Write> FortranWriter<W> for Writer<W> {
    fn module(&mut self, name: &str) -> Result<ScopeGuard<'_, W>> {
        self.scope(Module::new(name).into())
    }

    fn function(&mut self, function: Function) -> Result<ScopeGuard<'_, W>> {
        self.scope(function.into())
    }

    fn subroutine(&mut self, subroutine: Subroutine) -> Result<ScopeGuard<'_, W>> {
        self.scope(subroutine.into())
    }

    fn if_then(&mut self, condition: &str) -> Result<ScopeGuard<'_, W>> {
        self.scope(IfThen::new(condition).into())
    }

    fn select(&mut self, selector: &str) -> Result<ScopeGuard<'_, W>> {
        self.scope(Select::new(selector).into())
    }

    fn case(&mut self, label: &str) -> Result<()> {
        self.item(format!("({label})"))
    }

    fn case_default(&mut self) -> Result<()> {
        self.item("default")
    }

    fn else_branch(&mut self) -> Result<()> {
        expect_conditional(self)?;
        self.print_dedented("else")
    }

    fn else_if(&mut self, condition: &str) -> Result<()> {
        expect_conditional(self)?;
        self.print_dedented(format!("else if ({condition}) then"))
    }

    fn use_module(&mut self, module: &str) -> Result<()> {
        self.print(format!("use {module}"))
    }

    fn declare(&mut self, declaration: &Declaration) -> Result<()> {
        self.print(declaration.to_line())
    }

    fn comment(&mut self, text: &str) -> Result<()> {
        let text = dedent(text);
        self.print(format!("! {}", text.replace('\n', "\n! ")))
    }

    fn contains(&mut self) -> Result<()> {
        self.print_dedented("contains")
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

/// Strip the longest common leading whitespace from every non-blank line.
///
/// The margin is measured and removed in characters, not bytes, so multibyte
/// whitespace such as U+00A0 cannot split a character.
fn dedent(text: &str) -> String {
    fn leading_whitespace(line: &str) -> usize {
        line.chars().take_while(|c| c.is_whitespace()).count()
    }
    let margin = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(leading_whitespace)
        .min()
        .unwrap_or(0);
    text.lines()
        .map(|line| {
            let cut = margin.min(leading_whitespace(line));
            let start = line
                .char_indices()
                .nth(cut)
                .map_or(line.len(), |(index, _)| index);
            &line[start..]
        })
        .collect::<Vec<_>>()
        .join("\n")
}
