use deals_core::Msg;

use super::ui::constants::{QUIT_COMMAND, RETRY_COMMAND};

/// Maps one line typed by the user to a message; `None` means quit.
pub fn line_to_msg(line: &str) -> Option<Msg> {
    match line.trim() {
        QUIT_COMMAND | ":q" => None,
        RETRY_COMMAND => Some(Msg::RetryRequested),
        _ => Some(Msg::SearchChanged(line.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::line_to_msg;
    use deals_core::Msg;

    #[test]
    fn commands_and_search_terms() {
        assert_eq!(line_to_msg(":quit"), None);
        assert_eq!(line_to_msg(" :q "), None);
        assert_eq!(line_to_msg(":retry"), Some(Msg::RetryRequested));
        assert_eq!(
            line_to_msg("Dark "),
            Some(Msg::SearchChanged("Dark ".to_string()))
        );
        assert_eq!(line_to_msg(""), Some(Msg::SearchChanged(String::new())));
    }
}
