//! Classify and parse responses from the HAProxy admin socket.

/// Informational reply to `del acl` for a key that is already absent.
pub const KEY_NOT_FOUND: &str = "Key not found.";

/// Diagnostic returned when a command names an ACL HAProxy does not know.
pub const UNKNOWN_ACL: &str = "Unknown ACL identifier. Please use #<id> or <file>.";

/// The verdict for one executed command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommandOutcome {
    Success,
    /// The server's diagnostic, with multi-line replies joined into one
    /// message.
    Failure(String),
}

/// Classify a command's response lines.
///
/// Most commands reply with nothing on success, so an empty sequence is a
/// success. Some commands return an informative message that still denotes
/// success (`"Key not found."` on delete); callers list those in
/// `ignorable`. Anything else is a failure carrying the full reply.
pub fn classify(lines: &[String], ignorable: &[&str]) -> CommandOutcome {
    match lines.first() {
        None => CommandOutcome::Success,
        Some(first) if ignorable.contains(&first.as_str()) => CommandOutcome::Success,
        Some(_) => CommandOutcome::Failure(lines.join(" ")),
    }
}

/// The `match=` token of a `get acl` reply.
///
/// `get acl` answers with a single descriptive line in one of two shapes:
///
/// * `type=ip, case=sensitive, match=no`
/// * `type=ip, case=sensitive, match=yes, idx=tree, pattern="1.2.3.4"`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchToken {
    /// Whether the queried entry matched.
    pub matched: bool,
    /// The stored pattern, present when the entry matched.
    pub pattern: Option<String>,
}

impl MatchToken {
    /// Extract the match token from a `get acl` reply line.
    ///
    /// Returns `None` when the line carries no well-formed `match=` field.
    pub fn from_line(line: &str) -> Option<MatchToken> {
        let mut matched = None;
        let mut pattern = None;

        for field in line.split(',').map(str::trim) {
            if let Some(value) = field.strip_prefix("match=") {
                matched = match value {
                    "yes" => Some(true),
                    "no" => Some(false),
                    _ => return None,
                };
            } else if let Some(value) = field.strip_prefix("pattern=") {
                pattern = Some(value.trim_matches('"').to_owned());
            }
        }

        matched.map(|matched| MatchToken { matched, pattern })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classify_empty_response_is_success() {
        assert_eq!(classify(&[], &[]), CommandOutcome::Success);
    }

    #[test]
    fn classify_ignorable_first_line_is_success() {
        let response = lines(&[KEY_NOT_FOUND]);
        assert_eq!(classify(&response, &[KEY_NOT_FOUND]), CommandOutcome::Success);
    }

    #[test]
    fn classify_unlisted_message_is_failure() {
        let response = lines(&[UNKNOWN_ACL]);
        assert_eq!(
            classify(&response, &[KEY_NOT_FOUND]),
            CommandOutcome::Failure(UNKNOWN_ACL.to_string())
        );
    }

    #[test]
    fn classify_joins_multiline_diagnostics() {
        let response = lines(&["'add' expects two parameters:", "<acl> and <pattern>."]);
        assert_eq!(
            classify(&response, &[]),
            CommandOutcome::Failure(
                "'add' expects two parameters: <acl> and <pattern>.".to_string()
            )
        );
    }

    #[test]
    fn match_token_negative_reply() {
        assert_eq!(
            MatchToken::from_line("type=ip, case=sensitive, match=no"),
            Some(MatchToken {
                matched: false,
                pattern: None
            })
        );
    }

    #[test]
    fn match_token_positive_reply_with_pattern() {
        assert_eq!(
            MatchToken::from_line(
                "type=ip, case=sensitive, match=yes, idx=tree, pattern=\"1.2.3.4\""
            ),
            Some(MatchToken {
                matched: true,
                pattern: Some("1.2.3.4".to_string())
            })
        );
    }

    #[test]
    fn match_token_absent_or_malformed_is_none() {
        assert_eq!(MatchToken::from_line("type=ip, case=sensitive"), None);
        assert_eq!(MatchToken::from_line("match=maybe"), None);
        assert_eq!(MatchToken::from_line(""), None);
    }
}
