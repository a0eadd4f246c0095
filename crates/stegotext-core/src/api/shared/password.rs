use std::fmt::{self, Debug, Formatter};

/// An optional password whose `Debug` output is masked, so builder dumps in
/// logs never leak the secret, not even its length.
#[derive(Default, Clone)]
pub struct Password(Option<String>);

impl Password {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_some() {
            write!(f, "Password(***)")
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
