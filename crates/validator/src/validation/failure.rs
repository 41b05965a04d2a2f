use std::fmt;

/// One reason an object failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailure {
    field_name: Option<String>,
    sub_field_name: Option<String>,
    missing: bool,
    semantic_error: bool,
    internal_error: bool,
    reason: Option<String>,
}

impl ValidationFailure {
    pub fn builder() -> ValidationFailureBuilder { ValidationFailureBuilder::default() }

    pub fn field_name(&self) -> Option<&str> { self.field_name.as_deref() }
    pub fn sub_field_name(&self) -> Option<&str> { self.sub_field_name.as_deref() }
    pub fn reason(&self) -> Option<&str> { self.reason.as_deref() }
    pub fn is_missing(&self) -> bool { self.missing }
    pub fn is_semantic_error(&self) -> bool { self.semantic_error }
    pub fn is_internal_error(&self) -> bool { self.internal_error }

    fn kind(&self) -> &'static str {
        if self.internal_error {
            "internal error"
        } else if self.missing {
            "missing"
        } else if self.semantic_error {
            "semantically incorrect"
        } else {
            "syntax error"
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Validation failure: field[{}], subfield[{}], type[{}], reason[{}]",
            self.field_name.as_deref().unwrap_or_default(),
            self.sub_field_name.as_deref().unwrap_or_default(),
            self.kind(),
            self.reason.as_deref().unwrap_or_default(),
        )
    }
}

/// Render failures for an error message, one per clause.
pub fn serialize_failures(failures: &[ValidationFailure]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

#[derive(Debug, Default)]
pub struct ValidationFailureBuilder {
    inner: ValidationFailure,
}

impl ValidationFailureBuilder {
    pub fn field(mut self, name: &str) -> Self {
        self.inner.field_name = Some(name.to_string());
        self
    }

    pub fn sub_field(mut self, name: &str) -> Self {
        self.inner.sub_field_name = Some(name.to_string());
        self
    }

    pub fn is_missing(mut self) -> Self {
        self.inner.missing = true;
        self
    }

    pub fn is_semantically_incorrect(mut self) -> Self {
        self.inner.semantic_error = true;
        self
    }

    pub fn is_an_internal_error(mut self) -> Self {
        self.inner.internal_error = true;
        self
    }

    pub fn because_of(mut self, reason: impl Into<String>) -> Self {
        self.inner.reason = Some(reason.into());
        self
    }

    pub fn build(self) -> ValidationFailure { self.inner }
}
