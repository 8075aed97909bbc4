// src/modules/auth/application/session_watch.rs

use tokio::sync::watch;

use crate::modules::auth::application::domain::Session;

/// Push-style view of the current auth state.
///
/// Contract: a subscriber observes the current value immediately and is
/// then notified on every sign-in/out transition. This replaces the
/// original callback registration with an explicit channel.
#[derive(Clone)]
pub struct SessionWatch {
    tx: watch::Sender<Option<Session>>,
}

impl SessionWatch {
    /// Starts logged out; the first observation fires with `None`.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }

    pub fn signed_in(&self, session: Session) {
        // send_replace never fails even with no live subscriber.
        self.tx.send_replace(Some(session));
    }

    pub fn signed_out(&self) {
        self.tx.send_replace(None);
    }
}

impl Default for SessionWatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            uid: "uid-1".into(),
            email: "natan@example.com".into(),
            display_name: None,
        }
    }

    #[tokio::test]
    async fn new_subscription_sees_current_state_immediately() {
        let watch = SessionWatch::new();
        watch.signed_in(sample_session());

        let rx = watch.subscribe();
        assert_eq!(rx.borrow().clone(), Some(sample_session()));
    }

    #[tokio::test]
    async fn subscriber_is_notified_on_every_transition() {
        let watch = SessionWatch::new();
        let mut rx = watch.subscribe();

        watch.signed_in(sample_session());
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_some());

        watch.signed_out();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }

    #[tokio::test]
    async fn starts_logged_out() {
        let watch = SessionWatch::new();
        assert_eq!(watch.current(), None);
    }
}
