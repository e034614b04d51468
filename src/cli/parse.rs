use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-lower" => flags.no_lowercase = true,
            "--no-upper" => flags.no_uppercase = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "--ambiguous" => flags.allow_ambiguous = true,
            "-r" | "--no-repeat" => flags.no_repeats = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(numeric_value(args, i, "--length")?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(numeric_value(args, i, "--number")?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn numeric_value(args: &[String], i: usize, flag: &str) -> Result<usize, ParseError> {
    let value = args
        .get(i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_yields_defaults() {
        let flags = parse(&args(&[])).unwrap();
        assert!(!flags.help && !flags.clipboard && !flags.no_repeats);
        assert_eq!(flags.length, None);
    }

    #[test]
    fn length_and_number_take_values() {
        let flags = parse(&args(&["-l", "24", "--number", "5"])).unwrap();
        assert_eq!(flags.length, Some(24));
        assert_eq!(flags.number, Some(5));
    }

    #[test]
    fn category_and_constraint_toggles() {
        let flags = parse(&args(&["--no-symbols", "--ambiguous", "-r", "-q"])).unwrap();
        assert!(flags.no_symbols && flags.allow_ambiguous && flags.no_repeats && flags.quiet);
        assert!(!flags.no_lowercase);
    }

    #[test]
    fn bad_number_is_rejected() {
        assert_eq!(
            parse(&args(&["-l", "many"])),
            Err(ParseError::InvalidNumber("many".to_string()))
        );
    }

    #[test]
    fn trailing_value_flag_is_rejected() {
        assert_eq!(
            parse(&args(&["-n"])),
            Err(ParseError::MissingValue("--number".to_string()))
        );
    }

    #[test]
    fn unknown_arg_is_rejected() {
        assert_eq!(
            parse(&args(&["--frobnicate"])),
            Err(ParseError::UnknownArg("--frobnicate".to_string()))
        );
    }
}
