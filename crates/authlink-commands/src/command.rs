//! The commands this crate handles.

use std::fmt;

/// A recognized command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `discordlink`: explains how to start linking from Discord.
    DiscordLink,
    /// `verify <code>`: submits the code Discord handed out.
    Verify,
    /// `discordstatus`: asks whether this player is linked.
    DiscordStatus,
}

impl Command {
    /// Every command, in registration order.
    pub const ALL: [Command; 3] = [Self::DiscordLink, Self::Verify, Self::DiscordStatus];

    /// Matches a command name, ignoring ASCII case.
    ///
    /// Case folding is ASCII-only, so a non-ASCII name never matches.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::DiscordLink => "discordlink",
            Self::Verify => "verify",
            Self::DiscordStatus => "discordstatus",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
