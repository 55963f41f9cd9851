use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::oneshot;
use tracing::debug;

pub const CANCEL_REASON: &str = "cancel";
pub const DELETE_FAILED_REASON: &str = "delete-failed";
/// Reported when the host is dropped before anything resolved the modal.
pub const HOST_DROPPED_REASON: &str = "closed";

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DialogOutcome {
    Dismissed(String),
    Closed(bool),
}

impl DialogOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, DialogOutcome::Closed(true))
    }
}

/// The surface a dialog controller reports its single outcome to.
pub trait ModalHost: Send + Sync {
    fn dismiss(&self, reason: &str);

    fn close(&self, result: bool);
}

impl<T: ModalHost + ?Sized> ModalHost for Arc<T> {
    fn dismiss(&self, reason: &str) {
        (**self).dismiss(reason)
    }

    fn close(&self, result: bool) {
        (**self).close(result)
    }
}

/// Host side of an open modal. Only the first `dismiss`/`close` reaches the
/// opener; later calls are dropped.
pub struct ModalInstance {
    sender: Mutex<Option<oneshot::Sender<DialogOutcome>>>,
}

/// Opener side of an open modal.
pub struct ModalResult {
    receiver: oneshot::Receiver<DialogOutcome>,
}

pub fn open_modal() -> (ModalInstance, ModalResult) {
    let (sender, receiver) = oneshot::channel();
    (
        ModalInstance {
            sender: Mutex::new(Some(sender)),
        },
        ModalResult { receiver },
    )
}

impl ModalInstance {
    fn resolve(&self, outcome: DialogOutcome) -> bool {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match sender {
            Some(sender) => sender.send(outcome).is_ok(),
            None => {
                debug!("Modal already resolved, dropping {:?}", outcome);
                false
            }
        }
    }
}

impl ModalHost for ModalInstance {
    fn dismiss(&self, reason: &str) {
        self.resolve(DialogOutcome::Dismissed(reason.to_string()));
    }

    fn close(&self, result: bool) {
        self.resolve(DialogOutcome::Closed(result));
    }
}

impl ModalResult {
    pub async fn wait(self) -> DialogOutcome {
        self.receiver
            .await
            .unwrap_or_else(|_| DialogOutcome::Dismissed(HOST_DROPPED_REASON.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_close_reaches_opener() {
        let (modal, result) = open_modal();
        modal.close(true);

        let outcome = result.wait().await;
        assert_eq!(outcome, DialogOutcome::Closed(true));
        assert!(outcome.is_confirmed());
    }

    #[tokio::test]
    async fn test_only_first_outcome_is_delivered() {
        let (modal, result) = open_modal();
        modal.dismiss(CANCEL_REASON);
        modal.close(true);

        assert_eq!(
            result.wait().await,
            DialogOutcome::Dismissed(CANCEL_REASON.to_string())
        );
    }

    #[tokio::test]
    async fn test_dropped_host_dismisses() {
        let (modal, result) = open_modal();
        drop(modal);

        let outcome = result.wait().await;
        assert_eq!(
            outcome,
            DialogOutcome::Dismissed(HOST_DROPPED_REASON.to_string())
        );
        assert!(!outcome.is_confirmed());
    }
}
