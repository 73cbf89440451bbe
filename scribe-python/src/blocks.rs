//! Python block constructs rendered as writer scopes.
//!
//! Classes and functions close with a single-space separator line; loops and
//! conditionals close silently.

use scribe_core::Scope;

/// `class Name(bases):` scope.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    parents: Vec<String>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parents: Vec::new(),
        }
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    pub fn parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parents.extend(parents.into_iter().map(Into::into));
        self
    }
}

impl From<Class> for Scope {
    fn from(class: Class) -> Self {
        let parents = if class.parents.is_empty() {
            String::new()
        } else {
            format!("({})", class.parents.join(", "))
        };
        Scope::block(format!("class {}{parents}:", class.name), " ")
    }
}

/// `def name(args):` scope with an optional return annotation.
#[derive(Debug, Clone)]
pub struct Def {
    name: String,
    args: Vec<String>,
    returns: Option<String>,
}

impl Def {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            returns: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the `-> type` return annotation.
    pub fn returns(mut self, returns: impl Into<String>) -> Self {
        self.returns = Some(returns.into());
        self
    }
}

impl From<Def> for Scope {
    fn from(def: Def) -> Self {
        let returns = match &def.returns {
            Some(returns) => format!(" -> {returns}"),
            None => String::new(),
        };
        Scope::block(
            format!("def {}({}){returns}:", def.name, def.args.join(", ")),
            " ",
        )
    }
}

/// `for ... in ...:` loop scope.
#[derive(Debug, Clone)]
pub struct ForLoop {
    variable: String,
    iterable: String,
}

impl ForLoop {
    pub fn new(variable: impl Into<String>, iterable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            iterable: iterable.into(),
        }
    }

    /// Loop over `range(...)`; empty `stop` and `step` arguments are omitted.
    pub fn range(variable: impl Into<String>, start: &str, stop: &str, step: &str) -> Self {
        let arguments = [start, stop, step]
            .iter()
            .filter(|argument| !argument.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(variable, format!("range({arguments})"))
    }
}

impl From<ForLoop> for Scope {
    fn from(for_loop: ForLoop) -> Self {
        Scope::block(
            format!("for {} in {}:", for_loop.variable, for_loop.iterable),
            "",
        )
    }
}

/// `while ...:` loop scope.
#[derive(Debug, Clone)]
pub struct WhileLoop {
    condition: String,
}

impl WhileLoop {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
        }
    }
}

impl From<WhileLoop> for Scope {
    fn from(while_loop: WhileLoop) -> Self {
        Scope::block(format!("while {}:", while_loop.condition), "")
    }
}

/// `if ...:` conditional scope accepting `elif`/`else` clauses.
#[derive(Debug, Clone)]
pub struct If {
    condition: String,
}

impl If {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
        }
    }
}

impl From<If> for Scope {
    fn from(branch: If) -> Self {
        Scope::conditional(format!("if {}:", branch.condition), "")
    }
}
