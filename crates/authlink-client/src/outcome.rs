//! What a verify or status call resolved to.

use authlink_protocol::NotificationResponse;

use crate::Reply;

/// Result of `verify_player`.
///
/// There is no separate "error" outcome. A network failure, a rejected
/// code, and an unreadable body all come out as `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Linked,
    Failed,
}

impl VerifyOutcome {
    pub fn from_response(response: &NotificationResponse) -> Self {
        if response.is_success() {
            Self::Linked
        } else {
            Self::Failed
        }
    }

    pub fn reply(self) -> Reply {
        match self {
            Self::Linked => Reply::VerifySucceeded,
            Self::Failed => Reply::VerifyFailed,
        }
    }
}

/// Result of `get_player_status`. Same collapsing rule as [`VerifyOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Linked,
    NotLinked,
}

impl LinkStatus {
    pub fn from_response(response: &NotificationResponse) -> Self {
        if response.is_linked_discord() {
            Self::Linked
        } else {
            Self::NotLinked
        }
    }

    pub fn reply(self) -> Reply {
        match self {
            Self::Linked => Reply::DiscordLinked,
            Self::NotLinked => Reply::DiscordNotLinked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(s: &str) -> NotificationResponse {
        NotificationResponse::Body(s.into())
    }

    #[test]
    fn test_verify_outcome_collapses_failures() {
        assert_eq!(
            VerifyOutcome::from_response(&body(r#"{"success":true}"#)),
            VerifyOutcome::Linked
        );
        for response in [
            NotificationResponse::Absent,
            body("{}"),
            body(r#"{"success":false}"#),
            body("<html>502 Bad Gateway</html>"),
        ] {
            assert_eq!(VerifyOutcome::from_response(&response), VerifyOutcome::Failed);
        }
    }

    #[test]
    fn test_link_status_collapses_failures() {
        assert_eq!(
            LinkStatus::from_response(&body(r#"{"linkedDiscord":true}"#)),
            LinkStatus::Linked
        );
        for response in [
            NotificationResponse::Absent,
            body("{}"),
            body(r#"{"linkedDiscord":false}"#),
        ] {
            assert_eq!(LinkStatus::from_response(&response), LinkStatus::NotLinked);
        }
    }

    #[test]
    fn test_outcome_replies() {
        assert_eq!(VerifyOutcome::Linked.reply(), Reply::VerifySucceeded);
        assert_eq!(VerifyOutcome::Failed.reply(), Reply::VerifyFailed);
        assert_eq!(LinkStatus::Linked.reply(), Reply::DiscordLinked);
        assert_eq!(LinkStatus::NotLinked.reply(), Reply::DiscordNotLinked);
    }
}
