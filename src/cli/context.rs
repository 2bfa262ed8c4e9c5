//! CLI context - bundles the generation request, flags, and clipboard state.

use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use randstr::{Kind, Request, generate};

use super::{CliFlags, output_bytes, parse_byte_count, prompts};
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// CLI default; 32 hex symbols carry 128 bits of entropy.
pub const DEFAULT_LENGTH: usize = 32;

/// Application context for CLI mode.
pub struct Context {
    pub request: Request,
    pub count: usize,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing or validation fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let kind = match flags.kind.as_deref() {
            Some(name) => Some(Kind::from_str(name).map_err(|e| e.to_string())?),
            None => None,
        };

        let request = Request {
            length: flags.length.unwrap_or(DEFAULT_LENGTH),
            kind,
            characters: flags.characters.clone(),
        };

        Ok(Self {
            request,
            count: flags.number.unwrap_or(1),
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.handle_bytes()?;
        self.handle_clipboard();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("randstr {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn handle_bytes(&self) -> Result<(), Done> {
        if self.flags.bytes {
            let limit = self.flags.number_raw.as_deref().and_then(parse_byte_count);
            if self.flags.number_raw.is_some() && limit.is_none() {
                prompts::warn("Unrecognized byte count; streaming until interrupted");
            }
            output_bytes(limit, self.flags.output.as_deref());
            return Err(Done);
        }
        Ok(())
    }

    fn handle_clipboard(&mut self) {
        if !self.flags.clipboard {
            return;
        }
        match ClipboardContext::new() {
            Ok(ctx) => self.clipboard = Some(ctx),
            Err(_) => {
                if !prompts::clipboard_fallback_prompt() {
                    std::process::exit(0);
                }
            }
        }
    }

    fn next_string(&self) -> String {
        match generate(&self.request) {
            Ok(s) => s,
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(2);
            }
        }
    }

    /// Write one string per line, zeroizing each buffer after it leaves.
    fn emit<W: Write>(&self, out: &mut W) {
        for _ in 0..self.count {
            let mut s = self.next_string();
            let result = writeln!(out, "{s}");
            s.zeroize();
            if result.is_err() {
                return;
            }
        }
    }

    /// Generate strings and route them to clipboard, file, or stdout.
    fn generate_output(&mut self) {
        if self.clipboard.is_some() {
            let mut batch = String::new();
            for _ in 0..self.count {
                let mut s = self.next_string();
                batch.push_str(&s);
                batch.push('\n');
                s.zeroize();
            }

            if let Some(ctx) = self.clipboard.as_mut() {
                match ctx.set_contents(batch.clone()) {
                    Ok(_) => {
                        // Some providers hand back an owned copy; scrub it too.
                        if let Ok(mut retrieved) = ctx.get_contents() {
                            retrieved.zeroize();
                        }
                        prompts::clipboard_copied();
                    }
                    Err(e) => {
                        prompts::clipboard_error(&e.to_string());
                    }
                }
            }
            batch.zeroize();
        } else if let Some(path) = self.flags.output.clone() {
            let mut file = match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => file,
                Err(e) => {
                    prompts::error(&format!("Failed to open {path}: {e}"));
                    std::process::exit(1);
                }
            };
            self.emit(&mut file);
            let full_path = std::fs::canonicalize(&path)
                .map(|p| p.display().to_string())
                .unwrap_or(path);
            prompts::tokens_written(self.count, &full_path);
        } else {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            self.emit(&mut out);
        }
    }
}
