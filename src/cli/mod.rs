mod bytes;
mod context;
mod flags;
mod parse;
pub mod prompts;

pub use bytes::output as output_bytes;
pub use bytes::parse_byte_count;
pub use context::{Context, DEFAULT_LENGTH};
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode with the given arguments.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(msg) => {
            prompts::error(&msg);
            std::process::exit(2);
        }
    };
    let _ = ctx.run();
}
