use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => {
                write!(f, "Expected a non-negative finite number: {}", s)
            }
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
            "--bytes" => flags.bytes = true,
            "-b" | "--board" => flags.clipboard = true,
            "-l" | "--length" => {
                i += 1;
                if i < args.len() {
                    flags.length = Some(
                        args[i]
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                    );
                }
            }
            "-n" | "--number" => {
                i += 1;
                if i < args.len() {
                    flags.number_raw = Some(args[i].clone());
                    // Plain number for string count; K/M/G suffixes are only
                    // meaningful in --bytes mode, where number_raw is used.
                    flags.number = args[i].parse().ok();
                }
            }
            "-t" | "--type" => {
                i += 1;
                if i < args.len() {
                    flags.kind = Some(args[i].clone());
                } else {
                    return Err(ParseError::MissingValue("--type".to_string()));
                }
            }
            "--characters" => {
                i += 1;
                if i < args.len() {
                    flags.characters = Some(args[i].clone());
                } else {
                    return Err(ParseError::MissingValue("--characters".to_string()));
                }
            }
            "-o" | "--output" => {
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    return Err(ParseError::MissingValue("--output".to_string()));
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}
