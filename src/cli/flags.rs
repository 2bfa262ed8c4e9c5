#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub bytes: bool,
    pub clipboard: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub number_raw: Option<String>,
    pub kind: Option<String>,
    pub characters: Option<String>,
    pub output: Option<String>,
}
