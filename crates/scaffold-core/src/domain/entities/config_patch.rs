use std::fmt;

/// Location of a key in a JSON document: top level or one level nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPath {
    Top(String),
    Nested { parent: String, key: String },
}

impl KeyPath {
    /// Parse `name` or `info.productName`.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('.') {
            Some((parent, key)) => Self::Nested {
                parent: parent.to_string(),
                key: key.to_string(),
            },
            None => Self::Top(raw.to_string()),
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top(key) => f.write_str(key),
            Self::Nested { parent, key } => write!(f, "{parent}.{key}"),
        }
    }
}

/// Set the string value at `key`, creating the parent object if absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonMutation {
    pub key: KeyPath,
    pub value: String,
}

impl JsonMutation {
    pub fn set(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: KeyPath::parse(key),
            value: value.into(),
        }
    }
}
