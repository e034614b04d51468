//! Password generation.

use super::charset::{self, Category};
use crate::options::GenerationOptions;
use crate::rand::RandomSource;

#[derive(Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// `forbid_repeats` with a pool smaller than the requested length:
    /// there are not enough distinct characters to fill the password.
    Infeasible { requested: usize, available: usize },
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::Infeasible {
                requested,
                available,
            } => write!(
                f,
                "cannot draw {} unique characters from a pool of {}",
                requested, available
            ),
        }
    }
}

/// Generate a single password.
///
/// An empty pool (no category enabled) yields an empty string, not an
/// error; callers check `has_enabled_category` first. The output always
/// contains at least one character from each enabled category whose
/// filtered alphabet is non-empty.
pub fn generate(
    options: &GenerationOptions,
    rng: &mut dyn RandomSource,
) -> Result<String, GenerateError> {
    let pool = charset::build(options);
    if pool.is_empty() {
        return Ok(String::new());
    }

    let length = options.effective_length();
    if options.forbid_repeats && pool.len() < length {
        return Err(GenerateError::Infeasible {
            requested: length,
            available: pool.len(),
        });
    }

    let mut out: Vec<u8> = Vec::with_capacity(length);

    // Seed one character per enabled category so every selected class is
    // represented. Categories are disjoint, so seeds never collide even
    // under forbid_repeats. At most 4 seeds against a minimum length of 4.
    for category in Category::ALL {
        if !category.enabled_in(options) {
            continue;
        }
        let alphabet = charset::filtered_alphabet(category, options);
        if alphabet.is_empty() {
            continue;
        }
        out.push(alphabet[rng.below(alphabet.len())]);
    }

    // Fill from the full pool. Under forbid_repeats, redraw on collision;
    // the pool-size check above guarantees this terminates.
    while out.len() < length {
        let candidate = pool[rng.below(pool.len())];
        if options.forbid_repeats && out.contains(&candidate) {
            continue;
        }
        out.push(candidate);
    }

    // Fisher-Yates, so the seeded characters are not pinned to the front.
    for i in (1..out.len()).rev() {
        let j = rng.below(i + 1);
        out.swap(i, j);
    }

    // Safety: charset is all ASCII
    Ok(unsafe { String::from_utf8_unchecked(out) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::SplitMix64;

    fn options() -> GenerationOptions {
        GenerationOptions {
            exclude_ambiguous: false,
            ..Default::default()
        }
    }

    #[test]
    fn length_matches_clamped_request() {
        let mut rng = SplitMix64::new(1);
        for (requested, expected) in [(16, 16), (1, 4), (300, 128)] {
            let mut opts = options();
            opts.length = requested;
            assert_eq!(generate(&opts, &mut rng).unwrap().len(), expected);
        }
    }

    #[test]
    fn every_character_comes_from_the_pool() {
        let mut rng = SplitMix64::new(2);
        let opts = options();
        let pool = charset::build(&opts);
        for _ in 0..200 {
            let password = generate(&opts, &mut rng).unwrap();
            assert!(password.bytes().all(|c| pool.contains(&c)));
        }
    }

    #[test]
    fn exclude_ambiguous_never_emits_the_similar_set() {
        let mut rng = SplitMix64::new(3);
        let opts = GenerationOptions::default();
        for _ in 0..200 {
            let password = generate(&opts, &mut rng).unwrap();
            assert!(password.bytes().all(|c| !charset::is_ambiguous(c)));
        }
    }

    #[test]
    fn every_enabled_category_is_covered() {
        let mut rng = SplitMix64::new(4);
        let opts = GenerationOptions::default();
        for _ in 0..1000 {
            let password = generate(&opts, &mut rng).unwrap();
            for category in Category::ALL {
                let alphabet = charset::filtered_alphabet(category, &opts);
                assert!(
                    password.bytes().any(|c| alphabet.contains(&c)),
                    "missing {:?} in {:?}",
                    category,
                    password
                );
            }
        }
    }

    #[test]
    fn coverage_holds_for_partial_category_selections() {
        let mut rng = SplitMix64::new(5);
        let opts = GenerationOptions {
            include_uppercase: false,
            include_symbols: false,
            length: 4,
            ..Default::default()
        };
        for _ in 0..1000 {
            let password = generate(&opts, &mut rng).unwrap();
            assert!(password.bytes().any(|c| c.is_ascii_lowercase()));
            assert!(password.bytes().any(|c| c.is_ascii_digit()));
            assert!(password.bytes().all(|c| !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn forbid_repeats_never_duplicates() {
        let mut rng = SplitMix64::new(6);
        let opts = GenerationOptions {
            forbid_repeats: true,
            length: 32,
            ..options()
        };
        for _ in 0..200 {
            let password = generate(&opts, &mut rng).unwrap();
            let mut seen = password.bytes().collect::<Vec<_>>();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), password.len());
        }
    }

    #[test]
    fn forbid_repeats_with_small_pool_is_infeasible() {
        let mut rng = SplitMix64::new(7);
        let opts = GenerationOptions {
            include_lowercase: false,
            include_uppercase: false,
            include_symbols: false,
            exclude_ambiguous: false,
            forbid_repeats: true,
            length: 16,
            ..Default::default()
        };
        assert_eq!(
            generate(&opts, &mut rng),
            Err(GenerateError::Infeasible {
                requested: 16,
                available: 10
            })
        );
    }

    #[test]
    fn forbid_repeats_at_exact_pool_size_uses_every_character() {
        let mut rng = SplitMix64::new(8);
        let opts = GenerationOptions {
            include_lowercase: false,
            include_uppercase: false,
            include_symbols: false,
            exclude_ambiguous: false,
            forbid_repeats: true,
            length: 10,
            ..Default::default()
        };
        let password = generate(&opts, &mut rng).unwrap();
        let mut chars = password.into_bytes();
        chars.sort_unstable();
        assert_eq!(chars, b"0123456789");
    }

    #[test]
    fn no_enabled_category_yields_empty_string() {
        let mut rng = SplitMix64::new(9);
        let opts = GenerationOptions {
            include_lowercase: false,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
            length: 24,
            ..Default::default()
        };
        assert_eq!(generate(&opts, &mut rng).unwrap(), "");
    }

    #[test]
    fn same_seed_reproduces_the_same_password() {
        let opts = GenerationOptions::default();
        let a = generate(&opts, &mut SplitMix64::new(99)).unwrap();
        let b = generate(&opts, &mut SplitMix64::new(99)).unwrap();
        assert_eq!(a, b);
    }
}
