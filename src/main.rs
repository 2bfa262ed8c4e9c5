use std::env;

mod cli;
mod exits;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    // Generated strings are secrets; keep them out of core dumps.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if cli::prompts::is_interactive() => tui::run(),
        _ => cli::run(args),
    }
}
