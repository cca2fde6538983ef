//! Text normalization shared by job descriptions and resumes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase text restricted to `[a-z0-9+#]` words separated by single spaces.
///
/// Only [`normalize`] builds one, so every value upholds the invariant: no leading,
/// trailing or doubled spaces, and no characters outside the allowed set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-delimited words, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ').filter(|t| !t.is_empty())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+' || c == '#'
}

/// Lowercase, replace everything outside `[a-z0-9+#]` with a space, collapse and trim.
pub fn normalize(text: &str) -> NormalizedText {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();

    NormalizedText(replaced.split_whitespace().collect::<Vec<_>>().join(" "))
}
