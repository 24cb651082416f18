use std::{
    borrow::Borrow,
    fmt::Display,
    hash::{Hash, Hasher},
};

use smol_str::SmolStr;

use crate::parser::decode_name;

/// A PDF name object, stored with its leading slash (`/Pages`).
///
/// `#xx` escapes are kept as written; use [`Name::decoded`] to resolve them.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct Name {
    data: SmolStr,
}

impl Name {
    pub(crate) fn from_token(token: &[u8]) -> Self {
        Self::from(String::from_utf8_lossy(token).as_ref())
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns the name without its slash and with `#xx` escapes resolved.
    pub fn decoded(&self) -> Vec<u8> {
        decode_name(self.data.as_bytes())
    }
}

impl<T: std::convert::Into<SmolStr>> From<T> for Name {
    fn from(value: T) -> Self {
        Self { data: value.into() }
    }
}

impl std::ops::Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

// Hashes like `str` so dictionaries can be queried with `&str` keys.
impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.as_str().hash(state);
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.data
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}
