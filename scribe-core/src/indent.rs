//! Indentation configuration for emitted output.

use std::borrow::Cow;

/// Indentation unit used for one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// One level of indentation as a string.
    pub fn unit(&self) -> Cow<'static, str> {
        match self {
            Self::Spaces(2) => Cow::Borrowed("  "),
            Self::Spaces(4) => Cow::Borrowed("    "),
            Self::Spaces(8) => Cow::Borrowed("        "),
            Self::Spaces(width) => Cow::Owned(" ".repeat(usize::from(*width))),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }

    /// The full indentation prefix for `depth` nesting levels.
    pub fn prefix(&self, depth: usize) -> String {
        self.unit().repeat(depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(4)
    }
}
