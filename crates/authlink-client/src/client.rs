//! The notification client: one event in, one HTTP call out.
//!
//! Each public operation comes in two forms:
//!
//! - an `async` form ([`join`](NotificationClient::join),
//!   [`verify`](NotificationClient::verify), ...) that performs the call
//!   and returns the interpreted result. Tests and async hosts use these.
//! - a fire-and-forget form ([`notify_player_join`](NotificationClient::notify_player_join),
//!   [`verify_player`](NotificationClient::verify_player), ...) that
//!   submits the async form to the scheduler and delivers the reply to
//!   the actor when it finishes. Host callbacks use these.

use std::sync::Arc;

use authlink_protocol::{
    Codec, JsonCodec, NotificationRequest, NotificationResponse, PlayerRef,
};
use authlink_transport::{HttpTransport, PostRequest};

use crate::{Actor, ClientConfig, LinkStatus, TaskScheduler, VerifyOutcome};

struct Inner<T, S> {
    config: ClientConfig,
    transport: T,
    scheduler: S,
    codec: JsonCodec,
}

/// Client for the account-linking API.
///
/// Cloning is cheap: all clones share one config, transport, and
/// scheduler through an `Arc`. Background tasks hold a clone, so the
/// client outlives any call still in flight.
///
/// # Failure model
///
/// Nothing here returns an error. A transport failure or a non-200
/// status is logged at warn level and becomes
/// [`NotificationResponse::Absent`]. After that it is treated exactly like
/// a negative answer from the API.
pub struct NotificationClient<T, S> {
    inner: Arc<Inner<T, S>>,
}

impl<T, S> Clone for NotificationClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, S> NotificationClient<T, S>
where
    T: HttpTransport,
    S: TaskScheduler,
{
    pub fn new(config: ClientConfig, transport: T, scheduler: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                transport,
                scheduler,
                codec: JsonCodec,
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    // -----------------------------------------------------------------
    // Network primitive
    // -----------------------------------------------------------------

    /// POSTs `request` to the configured endpoint.
    ///
    /// Returns the body verbatim for status 200. Every other outcome
    /// (another status, a transport error, an encode error) is
    /// `Absent`.
    pub async fn send(&self, request: &NotificationRequest) -> NotificationResponse {
        let action = request.action();

        let body = match self.inner.codec.encode(request) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(action, error = %e, "failed to encode notification request");
                return NotificationResponse::Absent;
            }
        };

        tracing::debug!(action, player = %request.player_id(), "dispatching notification request");

        let post = PostRequest {
            url: self.inner.config.api_url().to_string(),
            bearer_token: self.inner.config.api_key().to_string(),
            body,
        };

        match self.inner.transport.post(post).await {
            Ok(reply) if reply.is_ok() => NotificationResponse::Body(reply.body),
            Ok(reply) => {
                tracing::warn!(
                    action,
                    status = reply.status,
                    "linking API answered with non-success status"
                );
                NotificationResponse::Absent
            }
            Err(e) => {
                tracing::warn!(action, error = %e, "HTTP error");
                NotificationResponse::Absent
            }
        }
    }

    // -----------------------------------------------------------------
    // Awaitable forms
    // -----------------------------------------------------------------

    /// Reports a join. The response is ignored.
    pub async fn join(&self, player: &PlayerRef) {
        self.send(&NotificationRequest::player_join(player)).await;
    }

    /// Reports a leave. The response is ignored.
    pub async fn leave(&self, player: &PlayerRef) {
        self.send(&NotificationRequest::player_leave(player)).await;
    }

    /// Submits a verification code.
    pub async fn verify(&self, player: &PlayerRef, code: &str) -> VerifyOutcome {
        let response = self
            .send(&NotificationRequest::verify_player(player, code))
            .await;
        VerifyOutcome::from_response(&response)
    }

    /// Looks up whether `player` has a linked Discord account.
    pub async fn status(&self, player: &PlayerRef) -> LinkStatus {
        let response = self
            .send(&NotificationRequest::get_player_status(player))
            .await;
        LinkStatus::from_response(&response)
    }

    // -----------------------------------------------------------------
    // Fire-and-forget forms
    // -----------------------------------------------------------------

    /// Reports a join in the background. Produces no message.
    pub fn notify_player_join(&self, player: &PlayerRef) {
        let client = self.clone();
        let player = player.clone();
        self.inner.scheduler.submit(async move {
            client.join(&player).await;
        });
    }

    /// Reports a leave in the background. Produces no message.
    pub fn notify_player_leave(&self, player: &PlayerRef) {
        let client = self.clone();
        let player = player.clone();
        self.inner.scheduler.submit(async move {
            client.leave(&player).await;
        });
    }

    /// Verifies `code` in the background and tells `actor` how it went.
    pub fn verify_player<A>(&self, actor: Arc<A>, code: impl Into<String>)
    where
        A: Actor + ?Sized,
    {
        let client = self.clone();
        let player = actor.player();
        let code = code.into();
        self.inner.scheduler.submit(async move {
            let outcome = client.verify(&player, &code).await;
            tracing::debug!(%player, ?outcome, "verification finished");
            actor.send_reply(outcome.reply());
        });
    }

    /// Looks up link status in the background and tells `actor`.
    pub fn get_player_status<A>(&self, actor: Arc<A>)
    where
        A: Actor + ?Sized,
    {
        let client = self.clone();
        let player = actor.player();
        self.inner.scheduler.submit(async move {
            let status = client.status(&player).await;
            actor.send_reply(status.reply());
        });
    }
}
