use std::env;

mod cli;
mod options;
mod pass;
mod rand;

fn main() {
    // Passwords pass through this process's memory; keep them out of core dumps.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();
    cli::run(args);
}
