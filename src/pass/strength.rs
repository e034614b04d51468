//! Entropy-based strength estimation.

use super::charset;
use crate::options::GenerationOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    Excellent,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
    pub bits: f64,
}

/// Entropy in bits for `password_length` uniform draws from a pool of
/// `pool_size` characters.
pub fn calculate_entropy(password_length: usize, pool_size: usize) -> f64 {
    password_length as f64 * (pool_size.max(1) as f64).log2()
}

/// Estimate password strength from length and pool size.
///
/// A heuristic upper bound: assumes every character was an independent
/// uniform draw from the full pool, ignoring coverage seeding and repeat
/// rejection. An empty password is the only way to score 0; any non-empty
/// password rates at least Weak.
pub fn estimate(password: &str, options: &GenerationOptions) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult {
            score: 0,
            label: StrengthLabel::VeryWeak,
            bits: 0.0,
        };
    }

    let bits = calculate_entropy(password.chars().count(), charset::size(options));

    let (score, label) = if bits < 40.0 {
        (1, StrengthLabel::Weak)
    } else if bits < 60.0 {
        (2, StrengthLabel::Fair)
    } else if bits < 80.0 {
        (3, StrengthLabel::Strong)
    } else {
        (4, StrengthLabel::Excellent)
    };

    StrengthResult { score, label, bits }
}
