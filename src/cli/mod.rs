mod context;
mod flags;
mod parse;
mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode to completion, exiting the process on failure.
pub fn run(args: Vec<String>) {
    let mut context = match Context::new(args) {
        Ok(context) => context,
        Err(e) => {
            prompts::error(&e);
            eprintln!("Try 'passforge --help'.");
            std::process::exit(1);
        }
    };

    // Err(Done) means an early exit like --help; nothing left to do.
    let _ = context.run();
}

fn print_help() {
    println!("passforge - password generator with per-category coverage");
    println!();
    println!("Each enabled category is guaranteed at least one character in the");
    println!("output. Length is clamped to 4..=128.");
    println!();
    println!("USAGE:");
    println!("  passforge [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!(" Password:");
    println!("  -l, --length <N>   Characters per password (default: 16)");
    println!("  -n, --number <N>   How many to generate (default: 1)");
    println!("      --no-lower     Exclude lowercase letters");
    println!("      --no-upper     Exclude uppercase letters");
    println!("      --no-digits    Exclude digits");
    println!("      --no-symbols   Exclude symbols");
    println!("      --ambiguous    Allow similar-looking characters (Il1O0B8S5Z2)");
    println!("  -r, --no-repeat    Never repeat a character within a password");
    println!();
    println!(" Output:");
    println!("  -b, --board        Copy to clipboard instead of printing");
    println!("  -q, --quiet        Suppress everything except passwords");
    println!();
    println!(" Info:");
    println!("  -h, --help         Display this help message");
    println!("  -v, --version      Display version");
    println!();
    println!("EXAMPLES:");
    println!("  passforge                  One 16-character password");
    println!("  passforge -l 24 -n 5       Five passwords, 24 characters each");
    println!("  passforge --no-symbols -b  Alphanumeric password to clipboard");
}
