//! Variable declaration builder.

/// Argument intent attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    In,
    Out,
    InOut,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inout",
        }
    }
}

/// Builder for `type[, attributes] :: names` declaration lines.
#[derive(Debug, Clone)]
pub struct Declaration {
    type_spec: String,
    names: Vec<String>,
    allocatable: bool,
    intent: Option<Intent>,
}

impl Declaration {
    pub fn new(type_spec: impl Into<String>) -> Self {
        Self {
            type_spec: type_spec.into(),
            names: Vec::new(),
            allocatable: false,
            intent: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn allocatable(mut self) -> Self {
        self.allocatable = true;
        self
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    /// Render the declaration as a single source line.
    pub fn to_line(&self) -> String {
        let mut spec = self.type_spec.clone();
        if self.allocatable {
            spec.push_str(", allocatable");
        }
        if let Some(intent) = self.intent {
            spec.push_str(", intent(");
            spec.push_str(intent.as_str());
            spec.push(')');
        }
        format!("{spec} :: {}", self.names.join(", "))
    }
}
