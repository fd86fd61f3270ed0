pub const HEADER_TITLE: &str = "Popular deals";
pub const LOADING_PLACEHOLDER_ROWS: usize = 8;
pub const PLACEHOLDER_ROW: &str = "  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░";
pub const SEPARATOR: &str = "----------------------------------------";
pub const RETRY_COMMAND: &str = ":retry";
pub const QUIT_COMMAND: &str = ":quit";
