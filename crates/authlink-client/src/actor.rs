//! Seams for delivering replies back to whoever started a call.
//!
//! The host runtime decides what "sending a message" means and on which
//! thread it has to happen. The client only needs somewhere to put
//! one line of text.

use authlink_protocol::PlayerRef;

use crate::Reply;

/// Anything that can receive a chat line: a player, the server console.
///
/// `Send + Sync + 'static` because replies are produced on background
/// tasks. If the host only allows messaging from its main thread, its
/// implementation of [`send_message`](Self::send_message) must hand the
/// text over to that thread itself.
pub trait MessageSink: Send + Sync + 'static {
    /// Delivers one line of text, colour markers included.
    fn send_message(&self, message: &str);

    /// Delivers one of the fixed replies.
    fn send_reply(&self, reply: Reply) {
        self.send_message(reply.text());
    }
}

/// A player-equivalent invoker: it can be messaged and has an identity.
pub trait Actor: MessageSink {
    /// The player's identity at the moment of the call.
    fn player(&self) -> PlayerRef;
}
