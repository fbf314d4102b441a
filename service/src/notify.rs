//! User-facing [`Notification`]s.

use derive_more::Display;
use tokio::sync::mpsc;
use tracing as log;

/// Severity of a [`Notification`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Level {
    /// Operation succeeded.
    #[display("success")]
    Success,

    /// Operation failed.
    #[display("error")]
    Error,
}

/// Transient message shown to the user after an operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    /// [`Level`] of this [`Notification`].
    pub level: Level,

    /// Title of this [`Notification`].
    pub title: String,

    /// Optional details of this [`Notification`].
    pub description: Option<String>,
}

impl Notification {
    /// Creates a new [`Level::Success`] [`Notification`].
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            title: title.into(),
            description: None,
        }
    }

    /// Creates a new [`Level::Error`] [`Notification`].
    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            title: title.into(),
            description: None,
        }
    }

    /// Attaches the provided `description` to this [`Notification`].
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Sink of [`Notification`]s.
pub trait Notifier {
    /// Delivers the provided [`Notification`] to the user.
    fn notify(&self, notification: Notification);
}

/// [`Notifier`] only logging [`Notification`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct Log;

impl Notifier for Log {
    fn notify(&self, n: Notification) {
        let description = n.description.as_deref().unwrap_or_default();
        match n.level {
            Level::Success => log::info!("{}. {description}", n.title),
            Level::Error => log::warn!("{}. {description}", n.title),
        }
    }
}

/// [`Notifier`] forwarding [`Notification`]s into a channel.
#[derive(Clone, Debug)]
pub struct Channel(mpsc::UnboundedSender<Notification>);

impl Channel {
    /// Creates a new [`Channel`] along with the receiving end of it.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self(tx), rx)
    }
}

impl Notifier for Channel {
    fn notify(&self, notification: Notification) {
        if let Err(e) = self.0.send(notification) {
            log::debug!("`Notification` dropped: {}", e.0.title);
        }
    }
}
