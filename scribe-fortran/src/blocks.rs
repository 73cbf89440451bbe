//! Fortran block constructs rendered as writer scopes.

use scribe_core::Scope;

/// `module` ... `end module` scope.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<Module> for Scope {
    fn from(module: Module) -> Self {
        Scope::block(
            format!("module {}", module.name),
            format!("end module {}", module.name),
        )
    }
}

/// `function` ... `end function` scope with optional purity attributes.
///
/// The closing line is followed by a blank separator line unless [`bare`]
/// is set.
///
/// [`bare`]: Function::bare
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    args: Vec<String>,
    result: Option<String>,
    elemental: bool,
    pure: bool,
    trailing: bool,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            result: None,
            elemental: false,
            pure: false,
            trailing: true,
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

    /// Name the `result(...)` variable.
    pub fn result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }

    /// Mark the function `elemental`. Takes precedence over [`pure`].
    ///
    /// [`pure`]: Function::pure
    pub fn elemental(mut self) -> Self {
        self.elemental = true;
        self
    }

    /// Mark the function `pure`.
    pub fn pure(mut self) -> Self {
        self.pure = true;
        self
    }

    /// Skip the blank separator line after `end function`.
    pub fn bare(mut self) -> Self {
        self.trailing = false;
        self
    }
}

impl From<Function> for Scope {
    fn from(function: Function) -> Self {
        let keyword = if function.elemental {
            "elemental function"
        } else if function.pure {
            "pure function"
        } else {
            "function"
        };
        let result = match &function.result {
            Some(result) => format!(" result({result})"),
            None => String::new(),
        };
        let mut exit = format!("end function {}", function.name);
        if function.trailing {
            exit.push('\n');
        }
        Scope::block(
            format!("{keyword} {}({}){result}", function.name, function.args.join(", ")),
            exit,
        )
    }
}

/// `subroutine` ... `end subroutine` scope.
#[derive(Debug, Clone)]
pub struct Subroutine {
    name: String,
    args: Vec<String>,
    trailing: bool,
}

impl Subroutine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            trailing: true,
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

    /// Skip the blank separator line after `end subroutine`.
    pub fn bare(mut self) -> Self {
        self.trailing = false;
        self
    }
}

impl From<Subroutine> for Scope {
    fn from(subroutine: Subroutine) -> Self {
        let mut exit = format!("end subroutine {}", subroutine.name);
        if subroutine.trailing {
            exit.push('\n');
        }
        Scope::block(
            format!("subroutine {}({})", subroutine.name, subroutine.args.join(", ")),
            exit,
        )
    }
}

/// `if (...) then` ... `end if` conditional scope.
///
/// `else` and `else if` clauses are emitted through the extension trait while
/// the scope is open.
#[derive(Debug, Clone)]
pub struct IfThen {
    condition: String,
}

impl IfThen {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
        }
    }
}

impl From<IfThen> for Scope {
    fn from(branch: IfThen) -> Self {
        Scope::conditional(format!("if ({}) then", branch.condition), "end if")
    }
}

/// `select case (...)` ... `end select` listing whose items are `case` labels.
#[derive(Debug, Clone)]
pub struct Select {
    selector: String,
}

impl Select {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

impl From<Select> for Scope {
    fn from(select: Select) -> Self {
        Scope::listing(
            format!("select case ({})", select.selector),
            "case",
            "end select",
        )
    }
}
