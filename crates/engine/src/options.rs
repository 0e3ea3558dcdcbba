use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification outcome of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Integer,
    Float,
    String,
}

impl Category {
    /// File name of the category's output, without the user prefix.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Integer => "integers.txt",
            Self::Float => "floats.txt",
            Self::String => "strings.txt",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Integer => "integers",
            Self::Float => "floats",
            Self::String => "strings",
        };
        f.write_str(label)
    }
}

/// How existing output files are treated when a sink is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteMode {
    #[default]
    Overwrite,
    Append,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatFormat {
    #[default]
    Text,
    Json,
}
