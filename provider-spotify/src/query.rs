//! Ordered query string builder
//!
//! Keys and values are percent-encoded individually. List parameters encode
//! each element and join them with a literal `,`, so a comma inside an
//! identifier can never split it in two.

use std::fmt;

/// Ordered `key=value` pairs, encoded on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single parameter.
    pub fn push(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.pairs.push((
            urlencoding::encode(key).into_owned(),
            urlencoding::encode(&value.to_string()).into_owned(),
        ));
        self
    }

    /// Append a parameter only when a value is present.
    pub fn push_opt<T: fmt::Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Append a comma-joined list parameter, preserving order and duplicates.
    pub fn push_list<S: AsRef<str>>(mut self, key: &str, values: &[S]) -> Self {
        let joined = values
            .iter()
            .map(|value| urlencoding::encode(value.as_ref()).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        self.pairs.push((urlencoding::encode(key).into_owned(), joined));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}
