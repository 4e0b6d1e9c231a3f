use std::fmt::{self, Debug, Formatter};

/// The key that decides where the bits are hidden.
///
/// A missing password behaves exactly like the empty one.
#[derive(Default, Clone)]
pub struct Password(Option<String>);

impl Password {
    /// the text the pixel order is derived from
    pub fn as_key(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(password) = &self.0 {
            write!(f, "Password({})", "*".repeat(password.chars().count()))
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password)
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(password.to_string()))
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(Some(password))
    }
}
