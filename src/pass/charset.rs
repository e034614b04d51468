//! Character set building for password generation.

use crate::options::GenerationOptions;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.?/~`|<>";

/// Characters easily mistaken for one another at a glance.
const AMBIGUOUS: &[u8] = b"Il1O0B8S5Z2";

/// The four character classes, in the fixed order they contribute to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Lowercase,
        Category::Uppercase,
        Category::Digits,
        Category::Symbols,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Category::Lowercase => LOWERCASE,
            Category::Uppercase => UPPERCASE,
            Category::Digits => DIGITS,
            Category::Symbols => SYMBOLS,
        }
    }

    pub fn enabled_in(self, options: &GenerationOptions) -> bool {
        match self {
            Category::Lowercase => options.include_lowercase,
            Category::Uppercase => options.include_uppercase,
            Category::Digits => options.include_digits,
            Category::Symbols => options.include_symbols,
        }
    }
}

pub fn is_ambiguous(c: u8) -> bool {
    AMBIGUOUS.contains(&c)
}

/// Category alphabet after optional ambiguous-character removal, relative
/// order preserved. May be empty (the category then contributes no
/// coverage seed).
pub fn filtered_alphabet(category: Category, options: &GenerationOptions) -> Vec<u8> {
    let alphabet = category.alphabet().iter().copied();
    if options.exclude_ambiguous {
        alphabet.filter(|&c| !is_ambiguous(c)).collect()
    } else {
        alphabet.collect()
    }
}

/// Build the full candidate pool: enabled categories concatenated in fixed
/// order, each filtered. Identical options always yield an identical pool.
pub fn build(options: &GenerationOptions) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::new();

    for category in Category::ALL {
        if category.enabled_in(options) {
            chars.extend(filtered_alphabet(category, options));
        }
    }

    chars
}

/// Effective pool size (for entropy calculation).
pub fn size(options: &GenerationOptions) -> usize {
    Category::ALL
        .iter()
        .filter(|c| c.enabled_in(options))
        .map(|&c| filtered_alphabet(c, options).len())
        .sum()
}
