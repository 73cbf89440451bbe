//! LaTeX environment and list constructs.

use scribe_core::Scope;

/// A `\begin{...}` ... `\end{...}` environment scope.
///
/// The optional argument renders before the required one:
/// `\begin{name}[optional]{required}`. Empty arguments are omitted entirely.
#[derive(Debug, Clone)]
pub struct Environment {
    name: String,
    required: String,
    optional: String,
}

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: String::new(),
            optional: String::new(),
        }
    }

    /// Set the required `{...}` argument.
    pub fn required(mut self, required: impl Into<String>) -> Self {
        self.required = required.into();
        self
    }

    /// Set the optional `[...]` argument.
    pub fn optional(mut self, optional: impl Into<String>) -> Self {
        self.optional = optional.into();
        self
    }

    fn arguments(&self) -> String {
        let mut out = String::new();
        if !self.optional.is_empty() {
            out.push('[');
            out.push_str(&self.optional);
            out.push(']');
        }
        if !self.required.is_empty() {
            out.push('{');
            out.push_str(&self.required);
            out.push('}');
        }
        out
    }
}

impl From<Environment> for Scope {
    fn from(env: Environment) -> Self {
        let arguments = env.arguments();
        Scope::block(
            format!("\\begin{{{}}}{arguments}", env.name),
            format!("\\end{{{}}}", env.name),
        )
    }
}

/// An itemized environment whose entries are emitted as `\item` lines.
///
/// A `label=` option is merged into the environment's optional argument slot,
/// before any further options.
#[derive(Debug, Clone)]
pub struct ItemList {
    name: String,
    label: String,
    optional: String,
    marker: String,
}

impl ItemList {
    /// An `itemize` list.
    pub fn itemize() -> Self {
        Self::new("itemize")
    }

    /// An `enumerate` list.
    pub fn enumerate() -> Self {
        Self::new("enumerate")
    }

    /// A list based on a custom environment name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            optional: String::new(),
            marker: "\\item".to_string(),
        }
    }

    /// Set the `label=` option.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set further options for the optional argument slot.
    pub fn optional(mut self, optional: impl Into<String>) -> Self {
        self.optional = optional.into();
        self
    }

    /// Override the item marker (`\item` by default).
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    fn options(&self) -> String {
        let label = if self.label.is_empty() {
            String::new()
        } else {
            format!("label={}", self.label)
        };
        match (label.is_empty(), self.optional.is_empty()) {
            (true, true) => String::new(),
            (true, false) => format!("[{}]", self.optional),
            (false, true) => format!("[{label}]"),
            (false, false) => format!("[{label}, {}]", self.optional),
        }
    }
}

impl From<ItemList> for Scope {
    fn from(list: ItemList) -> Self {
        let options = list.options();
        Scope::listing(
            format!("\\begin{{{}}}{options}", list.name),
            list.marker,
            format!("\\end{{{}}}", list.name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::ScopeKind;

    #[test]
    fn test_environment_argument_combinations() {
        let both = Scope::from(Environment::new("env").required("req").optional("opt"));
        assert_eq!(both.entry(), "\\begin{env}[opt]{req}");
        assert_eq!(both.exit(), "\\end{env}");

        let required = Scope::from(Environment::new("env").required("req"));
        assert_eq!(required.entry(), "\\begin{env}{req}");

        let optional = Scope::from(Environment::new("env").optional("opt"));
        assert_eq!(optional.entry(), "\\begin{env}[opt]");

        let neither = Scope::from(Environment::new("env"));
        assert_eq!(neither.entry(), "\\begin{env}");
    }

    #[test]
    fn test_item_list_option_merging() {
        let plain = Scope::from(ItemList::itemize());
        assert_eq!(plain.entry(), "\\begin{itemize}");

        let labeled = Scope::from(ItemList::itemize().label("alpha"));
        assert_eq!(labeled.entry(), "\\begin{itemize}[label=alpha]");

        let merged = Scope::from(ItemList::enumerate().label("alpha").optional("noitemsep"));
        assert_eq!(merged.entry(), "\\begin{enumerate}[label=alpha, noitemsep]");

        let options_only = Scope::from(ItemList::enumerate().optional("noitemsep"));
        assert_eq!(options_only.entry(), "\\begin{enumerate}[noitemsep]");
    }

    #[test]
    fn test_item_list_marker() {
        let scope = Scope::from(ItemList::new("description").marker("\\item[term]"));
        assert_eq!(
            scope.kind(),
            &ScopeKind::Listing {
                marker: "\\item[term]".to_string()
            }
        );
    }
}
