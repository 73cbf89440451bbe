//! Depth-tracking writer for indented, block-structured output.

use std::io::{self, Write};
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};

use tracing::{trace, warn};

use crate::{Error, Indent, Result, Scope, ScopeKind};

/// Writer that emits correctly indented text to a sink.
///
/// The writer owns the indentation unit, the current nesting depth, and the
/// stack of open scopes. Every printed line is prefixed with the current
/// indentation, and line breaks embedded in printed text are extended with it
/// so continuation lines stay aligned with the surrounding block.
///
/// Scopes are opened with [`Writer::block`], [`Writer::listing`], or
/// [`Writer::scope`] and closed by dropping the returned [`ScopeGuard`]; the
/// guard dereferences to the writer, so body lines are written through it.
///
/// A writer is single-threaded and writes strictly in call order. Use one
/// writer per output artifact.
#[derive(Debug)]
pub struct Writer<W: Write> {
    indent: Indent,
    depth: usize,
    stack: Vec<Scope>,
    sink: W,
}

impl Writer<io::Stdout> {
    /// A writer targeting standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Writer<W> {
    /// Create a writer over `sink` with the default four-space unit at depth
    /// zero.
    pub fn new(sink: W) -> Self {
        Self {
            indent: Indent::default(),
            depth: 0,
            stack: Vec::new(),
            sink,
        }
    }

    /// Set the indentation unit.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the starting depth.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of currently open scopes.
    pub fn open_scopes(&self) -> usize {
        self.stack.len()
    }

    /// Kind of the innermost open scope, if any.
    ///
    /// Dialects use this to validate mid-scope operations before emitting.
    pub fn innermost_kind(&self) -> Option<&ScopeKind> {
        self.stack.last().map(Scope::kind)
    }

    /// Consume the writer, returning the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn prefix(&self) -> String {
        self.indent.prefix(self.depth)
    }

    /// Extend every embedded line break with the current indentation.
    ///
    /// A continuation line that already starts with the full current prefix is
    /// left alone, so extending an already-extended string is a no-op.
    fn extend_newlines(&self, text: &str) -> String {
        let prefix = self.prefix();
        let mut out = String::with_capacity(text.len());
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                out.push('\n');
                if !line.starts_with(prefix.as_str()) {
                    out.push_str(&prefix);
                }
            }
            out.push_str(line);
        }
        out
    }

    /// Print `text` at the current depth, followed by a newline.
    ///
    /// Embedded line breaks are extended with the current indentation; see
    /// [`print_with`](Writer::print_with) for the exact rules.
    pub fn print(&mut self, text: impl AsRef<str>) -> Result<()> {
        self.print_with(&[text.as_ref()], " ", "\n")
    }

    /// Print `parts` joined by single spaces, followed by a newline.
    pub fn print_all(&mut self, parts: &[&str]) -> Result<()> {
        self.print_with(parts, " ", "\n")
    }

    /// Print `parts` joined by `sep` and terminated by `end`.
    ///
    /// Line breaks embedded in the parts or in `sep` are extended with the
    /// current indentation. A continuation line that already starts with the
    /// full current indentation is left as-is rather than indented again, so
    /// pre-indenting continuation lines relative to the block loses that
    /// relative indent; pass unindented continuation lines and let the writer
    /// align them.
    ///
    /// A terminator that does not end in a line break is written as requested
    /// but reported as a warning, since the next call's indentation then
    /// starts mid-line.
    pub fn print_with(&mut self, parts: &[&str], sep: &str, end: &str) -> Result<()> {
        if !end.ends_with('\n') {
            warn!(
                terminator = end,
                "terminator does not end with a line break; subsequent indentation may be wrong"
            );
        }
        let sep = self.extend_newlines(sep);
        let joined = parts
            .iter()
            .map(|part| self.extend_newlines(part))
            .collect::<Vec<_>>()
            .join(&sep);
        self.sink.write_all(self.prefix().as_bytes())?;
        self.sink.write_all(joined.as_bytes())?;
        self.sink.write_all(end.as_bytes())?;
        Ok(())
    }

    /// Print `text` one level shallower, then restore the current depth.
    ///
    /// A one-shot perturbation for section markers and branch clauses that sit
    /// outside the entered scope's body without closing it.
    pub fn print_dedented(&mut self, text: impl AsRef<str>) -> Result<()> {
        let dedented = self.depth > 0;
        if dedented {
            self.depth -= 1;
        }
        let result = self.print(text);
        if dedented {
            self.depth += 1;
        }
        result
    }

    /// Open a plain block scope.
    pub fn block(
        &mut self,
        entry: impl Into<String>,
        exit: impl Into<String>,
    ) -> Result<ScopeGuard<'_, W>> {
        self.scope(Scope::block(entry, exit))
    }

    /// Open a listing scope whose items are emitted through [`Writer::item`].
    pub fn listing(
        &mut self,
        entry: impl Into<String>,
        marker: impl Into<String>,
        exit: impl Into<String>,
    ) -> Result<ScopeGuard<'_, W>> {
        self.scope(Scope::listing(entry, marker, exit))
    }

    /// Open a pre-built scope.
    ///
    /// This is how dialect constructs enter the stack: they build a [`Scope`]
    /// with dialect-specific entry/exit strings and hand it over. The entry
    /// line is printed at the current depth, then the depth is incremented.
    pub fn scope(&mut self, scope: Scope) -> Result<ScopeGuard<'_, W>> {
        self.print(scope.entry())?;
        trace!(kind = scope.kind().name(), depth = self.depth, "entering scope");
        self.depth += 1;
        self.stack.push(scope);
        Ok(ScopeGuard { writer: self })
    }

    /// Emit one item of the innermost listing.
    ///
    /// Item markers all align at the listing's base depth; text printed after
    /// an item is indented one level deeper than the marker, and the next
    /// item's marker returns to the base depth.
    ///
    /// Fails with [`Error::NoOpenScope`] when no scope is open and with
    /// [`Error::ScopeKindMismatch`] when the innermost scope is not a listing;
    /// a rejected call leaves depth and stack untouched.
    pub fn item(&mut self, line: impl AsRef<str>) -> Result<()> {
        let (marker, repeat) = match self.stack.last() {
            None => return Err(Error::NoOpenScope),
            Some(scope) => match scope.kind() {
                ScopeKind::Listing { marker } => (marker.clone(), scope.entered_item),
                kind => {
                    return Err(Error::ScopeKindMismatch {
                        expected: "listing",
                        found: kind.name(),
                    });
                }
            },
        };
        if repeat {
            self.depth = self.depth.saturating_sub(1);
        }
        let line = line.as_ref();
        let result = if line.is_empty() {
            self.print(&marker)
        } else {
            self.print_all(&[&marker, line])
        };
        if let Err(err) = result {
            // undo the alternation dedent so one sink failure does not skew
            // the depth of every following item
            if repeat {
                self.depth += 1;
            }
            return Err(err);
        }
        if let Some(scope) = self.stack.last_mut() {
            scope.entered_item = true;
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_scope(&mut self) -> Result<()> {
        // guards guarantee this pairs with an open, so the stack cannot be
        // empty here; an empty pop is still a no-op rather than a panic
        let Some(scope) = self.stack.pop() else {
            return Ok(());
        };
        if scope.entered_item {
            self.depth = self.depth.saturating_sub(1);
        }
        self.depth = self.depth.saturating_sub(1);
        trace!(kind = scope.kind().name(), depth = self.depth, "exiting scope");
        if !scope.exit().is_empty() {
            self.print(scope.exit())?;
        }
        Ok(())
    }
}

/// Guard for an open scope; closes the scope when dropped.
///
/// The guard dereferences to the underlying [`Writer`], so body lines and
/// nested scopes are written through the guard itself. Dropping it restores
/// the previous depth, prints the exit line (if any), and pops the stack, on
/// every exit path including early returns and unwinds.
#[must_use = "dropping the guard closes the scope"]
#[derive(Debug)]
pub struct ScopeGuard<'w, W: Write> {
    writer: &'w mut Writer<W>,
}

impl<W: Write> ScopeGuard<'_, W> {
    /// Close the scope now, surfacing sink errors.
    ///
    /// Dropping the guard closes the scope as well, but a failed exit-line
    /// write can then only be logged.
    pub fn close(self) -> Result<()> {
        let mut guard = ManuallyDrop::new(self);
        guard.writer.exit_scope()
    }
}

impl<W: Write> Deref for ScopeGuard<'_, W> {
    type Target = Writer<W>;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl<W: Write> DerefMut for ScopeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl<W: Write> Drop for ScopeGuard<'_, W> {
    fn drop(&mut self) {
        if let Err(err) = self.writer.exit_scope() {
            warn!(%err, "failed to write scope exit line");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rendered(writer: Writer<Vec<u8>>) -> String {
        String::from_utf8(writer.into_sink()).expect("output is utf-8")
    }

    #[test]
    fn test_print_indents_at_current_depth() -> Result<()> {
        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
        writer.print("top")?;
        {
            let mut block = writer.block("begin", "end")?;
            block.print("inside")?;
        }
        assert_eq!(rendered(writer), "top\nbegin\n  inside\nend\n");
        Ok(())
    }

    #[test]
    fn test_depth_and_stack_return_to_baseline() -> Result<()> {
        let mut writer = Writer::new(Vec::new());
        assert_eq!(writer.depth(), 0);
        {
            let mut outer = writer.block("a", "")?;
            assert_eq!(outer.depth(), 1);
            assert_eq!(outer.open_scopes(), 1);
            {
                let inner = outer.block("b", "")?;
                assert_eq!(inner.depth(), 2);
                assert_eq!(inner.open_scopes(), 2);
            }
            assert_eq!(outer.depth(), 1);
        }
        assert_eq!(writer.depth(), 0);
        assert_eq!(writer.open_scopes(), 0);
        Ok(())
    }

    #[test]
    fn test_embedded_line_breaks_are_extended() -> Result<()> {
        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
        let mut block = writer.block("begin", "end")?;
        block.print("one\ntwo\nthree")?;
        block.close()?;
        assert_eq!(rendered(writer), "begin\n  one\n  two\n  three\nend\n");
        Ok(())
    }

    #[test]
    fn test_extension_is_not_applied_twice() -> Result<()> {
        // a continuation line already carrying the current indentation is
        // left alone, so re-printing extended text cannot double the prefix
        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
        let mut block = writer.block("begin", "")?;
        block.print("one\ntwo")?;
        block.print("one\n  two")?;
        block.close()?;
        assert_eq!(rendered(writer), "begin\n  one\n  two\n  one\n  two\n");
        Ok(())
    }

    #[test]
    fn test_separator_line_breaks_are_extended() -> Result<()> {
        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
        let mut block = writer.block("begin", "")?;
        block.print_with(&["one", "two"], "\n", "\n")?;
        block.close()?;
        assert_eq!(rendered(writer), "begin\n  one\n  two\n");
        Ok(())
    }

    #[test]
    fn test_missing_line_break_in_terminator_still_writes() -> Result<()> {
        // reported as a warning, not an error; output proceeds as requested
        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
        writer.print_with(&["left"], " ", "")?;
        writer.print("right")?;
        assert_eq!(rendered(writer), "leftright\n");
        Ok(())
    }

    #[test]
    fn test_empty_print_emits_indented_blank_line() -> Result<()> {
        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
        let mut block = writer.block("begin", "")?;
        block.print("")?;
        block.close()?;
        assert_eq!(rendered(writer), "begin\n  \n");
        Ok(())
    }

    #[test]
    fn test_listing_items_alternate_depth() -> Result<()> {
        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
        {
            let mut listing = writer.listing("begin", "-", "end")?;
            listing.item("first")?;
            listing.print("under first")?;
            listing.item("second")?;
            listing.print("under second")?;
        }
        assert_eq!(
            rendered(writer),
            concat!(
                "begin\n",
                "  - first\n",
                "    under first\n",
                "  - second\n",
                "    under second\n",
                "end\n",
            )
        );
        Ok(())
    }

    #[test]
    fn test_empty_listing_needs_no_extra_dedent() -> Result<()> {
        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
        writer.listing("begin", "-", "end")?.close()?;
        assert_eq!(writer.depth(), 0);
        assert_eq!(rendered(writer), "begin\nend\n");
        Ok(())
    }

    #[test]
    fn test_item_with_empty_line_prints_bare_marker() -> Result<()> {
        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
        {
            let mut listing = writer.listing("begin", "*", "end")?;
            listing.item("")?;
        }
        assert_eq!(rendered(writer), "begin\n  *\nend\n");
        Ok(())
    }

    /// Sink that accepts a fixed number of bytes and then reports a broken
    /// pipe.
    struct ClosingSink {
        remaining: usize,
    }

    impl Write for ClosingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.len() > self.remaining {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.remaining -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_item_write_restores_alternation_depth() {
        // "begin\n" plus the first item line fit exactly; the second item's
        // writes are rejected by the sink
        let sink = ClosingSink { remaining: 16 };
        let mut writer = Writer::new(sink).with_indent(Indent::Spaces(2));
        let mut listing = writer.listing("begin", "-", "end").unwrap();
        listing.item("first").unwrap();
        assert_eq!(listing.depth(), 2);

        let err = listing.item("second").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(listing.depth(), 2);
        assert_eq!(listing.open_scopes(), 1);
    }

    #[test]
    fn test_item_without_open_scope_fails() {
        let mut writer = Writer::new(Vec::new());
        let err = writer.item("entry").unwrap_err();
        assert!(matches!(err, Error::NoOpenScope));
        assert_eq!(writer.depth(), 0);
    }

    #[test]
    fn test_item_in_plain_block_fails_without_mutating_state() -> Result<()> {
        let mut writer = Writer::new(Vec::new());
        let mut block = writer.block("begin", "end")?;
        let err = block.item("entry").unwrap_err();
        assert!(matches!(
            err,
            Error::ScopeKindMismatch {
                expected: "listing",
                found: "block",
            }
        ));
        assert_eq!(block.depth(), 1);
        assert_eq!(block.open_scopes(), 1);
        Ok(())
    }

    #[test]
    fn test_guard_closes_scope_on_early_error_return() {
        fn aborts_mid_scope(writer: &mut Writer<Vec<u8>>) -> Result<()> {
            let mut block = writer.block("begin", "end")?;
            block.print("partial")?;
            Err(Error::NoOpenScope)
        }

        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
        assert!(aborts_mid_scope(&mut writer).is_err());
        assert_eq!(writer.depth(), 0);
        assert_eq!(writer.open_scopes(), 0);
        assert_eq!(rendered(writer), "begin\n  partial\nend\n");
    }

    #[test]
    fn test_guard_closes_scope_on_unwind() {
        let mut writer = Writer::new(Vec::new());
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _block = writer.block("begin", "end").unwrap();
            panic!("abort inside the scope body");
        }));
        assert!(caught.is_err());
        assert_eq!(writer.depth(), 0);
        assert_eq!(writer.open_scopes(), 0);
        assert_eq!(rendered(writer), "begin\nend\n");
    }

    #[test]
    fn test_print_dedented_restores_depth() -> Result<()> {
        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Spaces(2));
        {
            let mut block = writer.block("begin", "end")?;
            block.print("before")?;
            block.print_dedented("marker")?;
            block.print("after")?;
        }
        assert_eq!(
            rendered(writer),
            "begin\n  before\nmarker\n  after\nend\n"
        );
        Ok(())
    }

    #[test]
    fn test_print_dedented_at_depth_zero_is_plain_print() -> Result<()> {
        let mut writer = Writer::new(Vec::new());
        writer.print_dedented("top")?;
        assert_eq!(writer.depth(), 0);
        assert_eq!(rendered(writer), "top\n");
        Ok(())
    }

    #[test]
    fn test_prebuilt_scope_reports_its_kind() -> Result<()> {
        let mut writer = Writer::new(Vec::new());
        assert!(writer.innermost_kind().is_none());
        let branch = writer.scope(Scope::conditional("if x:", ""))?;
        assert_eq!(branch.innermost_kind(), Some(&ScopeKind::Conditional));
        branch.close()?;
        Ok(())
    }

    #[test]
    fn test_starting_depth_offsets_all_output() -> Result<()> {
        let mut writer = Writer::new(Vec::new())
            .with_indent(Indent::Spaces(2))
            .with_depth(2);
        writer.print("nested from the start")?;
        assert_eq!(rendered(writer), "    nested from the start\n");
        Ok(())
    }

    #[test]
    fn test_tab_indentation() -> Result<()> {
        let mut writer = Writer::new(Vec::new()).with_indent(Indent::Tab);
        let mut block = writer.block("begin", "end")?;
        block.print("inside")?;
        block.close()?;
        assert_eq!(rendered(writer), "begin\n\tinside\nend\n");
        Ok(())
    }
}
