use std::fmt;

/// Free-form address text as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressQuery(String);

impl AddressQuery {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-only text counts as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for AddressQuery {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for AddressQuery {
    fn from(from: &str) -> Self {
        Self(from.to_string())
    }
}

impl From<AddressQuery> for String {
    fn from(from: AddressQuery) -> Self {
        from.0
    }
}

impl AsRef<str> for AddressQuery {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AddressQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
