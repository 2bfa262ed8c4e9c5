//! Interactive menu for building generation requests.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use randstr::{Kind, Request, generate};

use crate::terminal::{
    BOLD, RESET, RawModeGuard, box_bottom, box_line, box_opt, box_top, clear, entropy_bits,
    entropy_strength, flush, print_error, reset_terminal,
};

struct Menu {
    kind_idx: usize,
    length: usize,
    count: usize,
}

impl Menu {
    fn kind(&self) -> Kind {
        Kind::ALL[self.kind_idx]
    }
}

/// Run TUI interactive mode.
pub fn run() {
    reset_terminal();
    clear();

    let mut menu = Menu {
        kind_idx: 0,
        length: crate::cli::DEFAULT_LENGTH,
        count: 1,
    };
    let mut print_invalid = false;

    loop {
        print_main_menu(&menu, &mut print_invalid);

        let input = match read_input_line("Enter menu option (Enter generates)") {
            Some(input) => input,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" => {
                println!();
                generate_to_terminal(&menu);
                println!();
            }
            "1" => {
                menu.kind_idx = (menu.kind_idx + 1) % Kind::ALL.len();
                clear();
            }
            "2" => {
                if let Some(n) = read_number("Length", menu.length) {
                    menu.length = n;
                }
                clear();
            }
            "3" => {
                if let Some(n) = read_number("Count", menu.count) {
                    menu.count = n.max(1);
                }
                clear();
            }
            "4" => {
                clear();
                print_help();
            }
            "5" | "q" => {
                clear();
                break;
            }
            _ => {
                clear();
                print_invalid = true;
            }
        }
    }
}

fn print_main_menu(menu: &Menu, print_invalid: &mut bool) {
    let bits = entropy_bits(menu.length, menu.kind().size());

    box_top("Randstr");
    box_line("");
    box_line(&format!(
        "  1) Type:   {} ({} symbols)",
        menu.kind().name(),
        menu.kind().size()
    ));
    box_line(&format!("  2) Length: {}", menu.length));
    box_line(&format!("  3) Count:  {}", menu.count));
    box_line("");
    box_line(&format!(
        "  Entropy: {:.1} bits ({})",
        bits,
        entropy_strength(bits)
    ));
    box_line("");
    box_line("  4) Help   5) Quit");
    box_line("");
    box_bottom();

    if *print_invalid {
        print_error("Invalid choice.");
        *print_invalid = false;
    }
}

fn generate_to_terminal(menu: &Menu) {
    let request = Request::new(menu.length).kind(menu.kind());
    for _ in 0..menu.count {
        match generate(&request) {
            Ok(s) => println!("{BOLD}{s}{RESET}"),
            Err(e) => {
                print_error(&e.to_string());
                return;
            }
        }
    }
}

/// Read a line of input in raw mode. Esc cancels, Ctrl+C exits.
fn read_input_line(prompt: &str) -> Option<String> {
    print!("{}: ", prompt);
    flush();

    let mut guard = match RawModeGuard::new() {
        Ok(guard) => guard,
        Err(_) => return None,
    };

    let mut input = String::new();
    loop {
        let Ok(Event::Key(key_event)) = read() else {
            continue;
        };
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                guard.disable();
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Esc => {
                guard.disable();
                println!();
                return None;
            }
            KeyCode::Enter => {
                guard.disable();
                println!();
                return Some(input);
            }
            KeyCode::Backspace => {
                if input.pop().is_some() {
                    print!("\x08 \x08");
                    flush();
                }
            }
            KeyCode::Char(c) => {
                input.push(c);
                print!("{c}");
                flush();
            }
            _ => {}
        }
    }
}

/// Prompt for a number; empty or invalid input keeps the current value.
fn read_number(prompt: &str, current: usize) -> Option<usize> {
    let input = read_input_line(&format!("{} [{}]", prompt, current))?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

pub fn print_help() {
    box_top("Randstr");
    box_line("Cryptographically secure random strings");
    box_line("");
    box_line("Characters are drawn uniformly from the chosen alphabet;");
    box_line("selection is rejection-sampled, so no symbol is ever more");
    box_line("likely than another.");
    box_line("");
    box_line("USAGE:");
    box_line("  randstr [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Symbols per string (default: 32)");
    box_opt("  -t, --type <TYPE>", "hex, base64, url-safe, numeric, distinguishable, ascii-printable, alphanumeric");
    box_opt("      --characters <SET>", "Custom alphabet (1-65536 symbols); excludes --type");
    box_opt("  -n, --number <N>", "How many strings. With --bytes, a byte count with K/M/G suffixes.");
    box_opt("      --bytes", "Stream raw random bytes instead of strings");
    box_opt("  -o, --output <FILE>", "Append output to a file");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except strings/bytes");
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_line("");
    box_line("Run without arguments for the interactive menu.");
    box_bottom();
}
