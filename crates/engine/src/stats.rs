//! Running per-category statistics.
//!
//! Integer sums use wrapping `i64` addition, so a run whose integers add up
//! past the `i64` range reports a wrapped sum. Float sums are exact decimals.

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::ToPrimitive;
use serde::Serialize;
use std::fmt::Write;
use std::str::FromStr;

/// Fractional digits kept when dividing a decimal sum for an average.
const AVERAGE_SCALE: i64 = 16;

const UNSET: &str = "N/A";

#[derive(Debug, Clone, Default)]
struct IntegerStats {
    count: u64,
    min: Option<i64>,
    max: Option<i64>,
    sum: i64,
}

#[derive(Debug, Clone, Default)]
struct FloatStats {
    count: u64,
    min: Option<f64>,
    max: Option<f64>,
    sum: BigDecimal,
}

#[derive(Debug, Clone, Default)]
struct StringStats {
    count: u64,
    min_len: Option<usize>,
    max_len: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    integers: IntegerStats,
    floats: FloatStats,
    strings: StringStats,
}

impl StatAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_integer(&mut self, n: i64) {
        let s = &mut self.integers;
        s.count += 1;
        s.min = Some(s.min.map_or(n, |m| m.min(n)));
        s.max = Some(s.max.map_or(n, |m| m.max(n)));
        s.sum = s.sum.wrapping_add(n);
    }

    pub fn update_float(&mut self, f: f64) {
        let s = &mut self.floats;
        s.count += 1;
        s.min = Some(s.min.map_or(f, |m| m.min(f)));
        s.max = Some(s.max.map_or(f, |m| m.max(f)));
        if let Some(exact) = decimal_from_f64(f) {
            s.sum += exact;
        }
    }

    pub fn update_string(&mut self, text: &str) {
        let len = text.chars().count();
        let s = &mut self.strings;
        s.count += 1;
        s.min_len = Some(s.min_len.map_or(len, |m| m.min(len)));
        s.max_len = Some(s.max_len.map_or(len, |m| m.max(len)));
    }

    #[must_use]
    pub const fn count(&self, category: crate::options::Category) -> u64 {
        use crate::options::Category;
        match category {
            Category::Integer => self.integers.count,
            Category::Float => self.floats.count,
            Category::String => self.strings.count,
        }
    }

    /// Snapshot of every category with derived averages.
    #[must_use]
    pub fn summary(&self) -> StatsSummary {
        let ints = &self.integers;
        let floats = &self.floats;
        let strings = &self.strings;

        let (int_average, int_average_truncated) = if ints.count == 0 {
            (0.0, 0)
        } else {
            let precise = decimal_average(&BigDecimal::from(ints.sum), ints.count);
            let truncated = i64::try_from(ints.count).map_or(0, |c| ints.sum / c);
            (precise, truncated)
        };
        let float_average = if floats.count == 0 {
            0.0
        } else {
            decimal_average(&floats.sum, floats.count)
        };

        StatsSummary {
            integers: IntegerSummary {
                count: ints.count,
                min: ints.min,
                max: ints.max,
                sum: ints.sum,
                average: int_average,
                average_truncated: int_average_truncated,
            },
            floats: FloatSummary {
                count: floats.count,
                min: floats.min,
                max: floats.max,
                sum: floats.sum.to_string(),
                average: float_average,
            },
            strings: StringSummary {
                count: strings.count,
                min_length: strings.min_len,
                max_length: strings.max_len,
            },
        }
    }

    /// Human readable statistics; empty when neither part is requested.
    #[must_use]
    pub fn report(&self, short: bool, full: bool) -> String {
        self.summary().render(short, full)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub integers: IntegerSummary,
    pub floats: FloatSummary,
    pub strings: StringSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegerSummary {
    pub count: u64,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub sum: i64,
    pub average: f64,
    pub average_truncated: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatSummary {
    pub count: u64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Exact decimal sum, kept as text to avoid losing digits.
    pub sum: String,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringSummary {
    pub count: u64,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCounts {
    pub integers: u64,
    pub floats: u64,
    pub strings: u64,
}

impl StatsSummary {
    #[must_use]
    pub const fn counts(&self) -> StatCounts {
        StatCounts {
            integers: self.integers.count,
            floats: self.floats.count,
            strings: self.strings.count,
        }
    }

    #[must_use]
    pub fn render(&self, short: bool, full: bool) -> String {
        let mut out = String::new();
        if short {
            self.write_short(&mut out);
        }
        if full {
            if short {
                out.push('\n');
            }
            self.write_full(&mut out);
        }
        out
    }

    fn write_short(&self, out: &mut String) {
        let c = self.counts();
        out.push_str("Short statistics:\n");
        let _ = writeln!(out, "   integers: {}", c.integers);
        let _ = writeln!(out, "   floats: {}", c.floats);
        let _ = writeln!(out, "   strings: {}", c.strings);
    }

    fn write_full(&self, out: &mut String) {
        let i = &self.integers;
        let f = &self.floats;
        let s = &self.strings;

        out.push_str("Full statistics:\n");
        out.push_str("    integers:\n");
        let _ = writeln!(out, "       count: {}", i.count);
        let _ = writeln!(out, "       max: {}", or_unset(i.max));
        let _ = writeln!(out, "       min: {}", or_unset(i.min));
        let _ = writeln!(out, "       sum: {}", i.sum);
        let _ = writeln!(
            out,
            "       average: {:?} (integer = {})",
            i.average, i.average_truncated
        );

        out.push_str("    floats:\n");
        let _ = writeln!(out, "       count: {}", f.count);
        let _ = writeln!(out, "       max: {}", or_unset(f.max.map(|v| format!("{v:?}"))));
        let _ = writeln!(out, "       min: {}", or_unset(f.min.map(|v| format!("{v:?}"))));
        let _ = writeln!(out, "       sum: {}", f.sum);
        let _ = writeln!(out, "       average: {:?}", f.average);

        out.push_str("    strings:\n");
        let _ = writeln!(out, "       count: {}", s.count);
        let _ = writeln!(out, "       max length: {}", or_unset(s.max_length));
        let _ = writeln!(out, "       min length: {}", or_unset(s.min_length));
    }
}

fn or_unset<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| UNSET.to_string(), |v| v.to_string())
}

/// Exact decimal for the shortest text that round-trips to `f`, so that
/// `0.1` contributes exactly one tenth rather than its binary expansion.
fn decimal_from_f64(f: f64) -> Option<BigDecimal> {
    BigDecimal::from_str(&format!("{f:e}")).ok()
}

fn decimal_average(sum: &BigDecimal, count: u64) -> f64 {
    let mean = (sum / &BigDecimal::from(count)).with_scale_round(AVERAGE_SCALE, RoundingMode::HalfUp);
    mean.to_string()
        .parse::<f64>()
        .ok()
        .or_else(|| mean.to_f64())
        .unwrap_or(0.0)
}
