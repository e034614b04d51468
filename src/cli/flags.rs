#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub no_lowercase: bool,
    pub no_uppercase: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub allow_ambiguous: bool,
    pub no_repeats: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}
