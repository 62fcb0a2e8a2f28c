//! The fixed set of lines a player can see.
//!
//! `§` followed by a hex digit or letter is the host's colour code:
//! `§a` green, `§b` aqua, `§c` red, `§e` yellow, `§f` white.

use std::fmt;

/// A player-facing message.
///
/// Every reply except [`PlayersOnly`](Self::PlayersOnly) and
/// [`VerifyUsage`](Self::VerifyUsage) carries the [`Reply::TAG`] prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reply {
    /// Answer to `discordlink`.
    LinkInstructions,
    /// `verify` called with the wrong number of arguments.
    VerifyUsage,
    /// The API accepted the verification code.
    VerifySucceeded,
    /// Rejected code, API down, or a response we couldn't read.
    VerifyFailed,
    /// `discordstatus` for a linked player.
    DiscordLinked,
    /// `discordstatus` for anyone else, including when the API is down.
    DiscordNotLinked,
    /// A command was issued by something that isn't a player.
    PlayersOnly,
}

impl Reply {
    /// Prefix shared by the plugin's own messages.
    pub const TAG: &'static str = "[DiscordAuth]";

    pub fn text(self) -> &'static str {
        match self {
            Self::LinkInstructions => {
                "§b[DiscordAuth] §fTo link your Discord, use /link in Discord and follow the instructions."
            }
            Self::VerifyUsage => "§cUsage: /verify <code>",
            Self::VerifySucceeded => {
                "§a[DiscordAuth] Account linked! You can now use Discord features."
            }
            Self::VerifyFailed => {
                "§c[DiscordAuth] Verification failed. Check your code and try again."
            }
            Self::DiscordLinked => "§a[DiscordAuth] Your Discord is linked!",
            Self::DiscordNotLinked => {
                "§e[DiscordAuth] Your Discord is not linked. Use /link in Discord to start."
            }
            Self::PlayersOnly => "This command can only be used by players.",
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Reply; 7] = [
        Reply::LinkInstructions,
        Reply::VerifyUsage,
        Reply::VerifySucceeded,
        Reply::VerifyFailed,
        Reply::DiscordLinked,
        Reply::DiscordNotLinked,
        Reply::PlayersOnly,
    ];

    #[test]
    fn test_replies_are_single_line() {
        for reply in ALL {
            assert!(!reply.text().contains('\n'), "{reply:?}");
        }
    }

    #[test]
    fn test_outcome_replies_are_tagged() {
        for reply in [
            Reply::LinkInstructions,
            Reply::VerifySucceeded,
            Reply::VerifyFailed,
            Reply::DiscordLinked,
            Reply::DiscordNotLinked,
        ] {
            assert!(reply.text().starts_with('§'), "{reply:?}");
            assert!(reply.text().contains(Reply::TAG), "{reply:?}");
        }
    }

    #[test]
    fn test_success_and_failure_are_distinguishable() {
        assert_ne!(Reply::VerifySucceeded.text(), Reply::VerifyFailed.text());
        assert_ne!(Reply::DiscordLinked.text(), Reply::DiscordNotLinked.text());
    }

    #[test]
    fn test_display_matches_text() {
        assert_eq!(Reply::VerifyUsage.to_string(), "§cUsage: /verify <code>");
    }
}
