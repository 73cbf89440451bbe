//! Scope records tracked on the writer's stack.

/// Kind tag carried by every [`Scope`].
///
/// Dialects match on this tag to validate operations that only make sense
/// inside a particular kind of scope, such as listing items or `else` clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeKind {
    /// A plain bracketed region.
    Block,
    /// A region whose repeated entries are emitted through `Writer::item`.
    Listing {
        /// String prefixed to every item line.
        marker: String,
    },
    /// A region that accepts mid-scope branch clauses (`elif`/`else` style).
    Conditional,
}

impl ScopeKind {
    /// Label used in usage-error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Listing { .. } => "listing",
            Self::Conditional => "conditional",
        }
    }
}

/// One nested region of output: an entry line, an optional exit line, and a
/// kind tag.
///
/// A scope is owned by the writer that opened it for as long as it is open;
/// dialect constructs build scopes and hand them to `Writer::scope`.
#[derive(Debug, Clone)]
pub struct Scope {
    entry: String,
    exit: String,
    kind: ScopeKind,
    pub(crate) entered_item: bool,
}

impl Scope {
    /// A plain block scope. An empty `exit` emits nothing on exit.
    pub fn block(entry: impl Into<String>, exit: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            exit: exit.into(),
            kind: ScopeKind::Block,
            entered_item: false,
        }
    }

    /// A listing scope whose items are prefixed with `marker`.
    pub fn listing(
        entry: impl Into<String>,
        marker: impl Into<String>,
        exit: impl Into<String>,
    ) -> Self {
        Self {
            entry: entry.into(),
            exit: exit.into(),
            kind: ScopeKind::Listing {
                marker: marker.into(),
            },
            entered_item: false,
        }
    }

    /// A conditional scope accepting mid-scope branch clauses.
    pub fn conditional(entry: impl Into<String>, exit: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            exit: exit.into(),
            kind: ScopeKind::Conditional,
            entered_item: false,
        }
    }

    /// Line printed when the scope is entered.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Line printed when the scope is closed; empty means nothing is printed.
    pub fn exit(&self) -> &str {
        &self.exit
    }

    /// The scope's kind tag.
    pub fn kind(&self) -> &ScopeKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(Scope::block("begin", "end").kind(), &ScopeKind::Block);
        assert_eq!(
            Scope::listing("begin", "-", "end").kind(),
            &ScopeKind::Listing {
                marker: "-".to_string()
            }
        );
        assert_eq!(
            Scope::conditional("if x:", "").kind(),
            &ScopeKind::Conditional
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ScopeKind::Block.name(), "block");
        assert_eq!(
            ScopeKind::Listing {
                marker: String::new()
            }
            .name(),
            "listing"
        );
        assert_eq!(ScopeKind::Conditional.name(), "conditional");
    }

    #[test]
    fn test_empty_exit_means_silent_close() {
        let scope = Scope::block("for x in y:", "");
        assert!(scope.exit().is_empty());
    }
}
