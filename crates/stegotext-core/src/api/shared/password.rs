use std::fmt::{self, Debug, Formatter};

/// optional password that never shows up in debug output
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Password(Option<String>);

impl Password {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(_) => f.write_str("Password(****)"),
            None => f.write_str("Password(None)"),
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password)
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(Some(password))
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(password.to_string()))
    }
}
