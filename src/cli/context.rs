//! CLI context - bundles options, flags, and clipboard state.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, print_help, prompts};
use crate::options::GenerationOptions;
use crate::pass;
use crate::rand::OsRandom;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub options: GenerationOptions,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        Ok(Self {
            options: GenerationOptions::default(),
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.apply_flags();
        self.validate_categories();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to the generation options.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.options.length = len;
            if self.options.effective_length() != len {
                prompts::warn(&format!(
                    "Length clamped to {}.",
                    self.options.effective_length()
                ));
            }
        }

        self.options.include_lowercase = !self.flags.no_lowercase;
        self.options.include_uppercase = !self.flags.no_uppercase;
        self.options.include_digits = !self.flags.no_digits;
        self.options.include_symbols = !self.flags.no_symbols;
        self.options.exclude_ambiguous = !self.flags.allow_ambiguous;
        self.options.forbid_repeats = self.flags.no_repeats;

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    /// Disabling every category is the one reserved non-zero exit.
    fn validate_categories(&self) {
        if !self.options.has_enabled_category() {
            prompts::error("No character category selected.");
            std::process::exit(2);
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) {
        let mut rng = match OsRandom::open() {
            Ok(rng) => rng,
            Err(e) => {
                prompts::error(&format!("Entropy source unavailable: {}", e));
                std::process::exit(1);
            }
        };

        let count = self.flags.number.unwrap_or(1).max(1);
        let mut passwords =
            String::with_capacity((self.options.effective_length() + 1) * count);

        for _ in 0..count {
            match pass::generate(&self.options, &mut rng) {
                Ok(password) => {
                    passwords.push_str(&password);
                    passwords.push('\n');
                }
                Err(e) => {
                    prompts::error(&e.to_string());
                    std::process::exit(1);
                }
            }
        }

        // Every password in the batch shares (length, pool), so one
        // estimate covers the whole run.
        let strength = pass::estimate(passwords.lines().next().unwrap_or(""), &self.options);

        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(passwords.clone()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                }
            }
        } else {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let _ = out.write_all(passwords.as_bytes());
        }

        prompts::strength_summary(&strength);
        passwords.zeroize();
    }
}
