use std::fmt;

/// A classified line together with its typed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classified<'a> {
    Integer(i64),
    Float(f64),
    Text(&'a str),
}

impl Classified<'_> {
    #[must_use]
    pub const fn category(&self) -> crate::options::Category {
        use crate::options::Category;
        match self {
            Self::Integer(_) => Category::Integer,
            Self::Float(_) => Category::Float,
            Self::Text(_) => Category::String,
        }
    }
}

/// Text written to the output files.
///
/// Floats use the `Debug` form so that whole values keep their `.0` and
/// the float file classifies back as floats.
impl fmt::Display for Classified<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Classify a non-empty line.
///
/// Integers win over floats, floats over text. A literal outside the `i64`
/// range is not an integer and is retried as a float; a float literal that
/// only parses to infinity or NaN is kept as text.
#[must_use]
pub fn classify(line: &str) -> Classified<'_> {
    parse_integer(line)
        .map(Classified::Integer)
        .or_else(|| parse_float(line).map(Classified::Float))
        .unwrap_or(Classified::Text(line))
}

fn parse_integer(line: &str) -> Option<i64> {
    line.parse::<i64>().ok()
}

fn parse_float(line: &str) -> Option<f64> {
    line.parse::<f64>().ok().filter(|f| f.is_finite())
}
