use crate::dialog::modal::{CANCEL_REASON, DELETE_FAILED_REASON, ModalHost};
use crate::team::{Team, TeamApiError, TeamId, TeamResource};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// What the dialog does when the remote delete fails.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Leave the modal open so the user can retry or cancel.
    #[default]
    KeepOpen,
    /// Dismiss the modal with [`DELETE_FAILED_REASON`].
    Dismiss,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogPhase {
    Open,
    Deleting,
    Finished,
}

/// Effect an action had on the modal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogAction {
    Dismissed,
    Closed,
    /// The server deleted the team, but the modal had already been
    /// dismissed, so the opener never saw a close.
    DeletedAfterDismiss,
    Ignored,
}

#[derive(Error, Debug)]
pub enum DeleteDialogError {
    #[error("Team id {requested} does not match the team being deleted ({expected})")]
    IdMismatch { requested: TeamId, expected: TeamId },
    #[error(transparent)]
    Delete(#[from] TeamApiError),
}

pub type Result<T> = std::result::Result<T, DeleteDialogError>;

/// Confirmation dialog for deleting one team.
///
/// The modal host hears from the dialog at most once: either a dismissal
/// (cancel, or a failed delete under [`FailurePolicy::Dismiss`]) or a close
/// with `true` after the delete succeeded. Actions arriving after that are
/// ignored.
pub struct DeleteTeamDialog<M: ModalHost> {
    modal: M,
    team: Team,
    resource: Arc<dyn TeamResource>,
    failure_policy: FailurePolicy,
    phase: Mutex<DialogPhase>,
}

impl<M: ModalHost> DeleteTeamDialog<M> {
    pub fn new(
        modal: M,
        team: Team,
        resource: Arc<dyn TeamResource>,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            modal,
            team,
            resource,
            failure_policy,
            phase: Mutex::new(DialogPhase::Open),
        }
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn phase(&self) -> DialogPhase {
        *self.lock_phase()
    }

    fn lock_phase(&self) -> MutexGuard<'_, DialogPhase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves to `Finished`. Returns false if the dialog had already finished.
    fn finish(&self) -> bool {
        let mut phase = self.lock_phase();
        let was_finished = *phase == DialogPhase::Finished;
        *phase = DialogPhase::Finished;
        !was_finished
    }

    pub fn cancel(&self) -> DialogAction {
        if !self.finish() {
            debug!("Ignoring cancel for team {}: dialog already finished", self.team.id);
            return DialogAction::Ignored;
        }

        self.modal.dismiss(CANCEL_REASON);
        DialogAction::Dismissed
    }

    /// Deletes the team and closes the modal with `true` once the server
    /// confirmed it. A cancel that lands while the request is in flight does
    /// not abort it, and the later completion reports
    /// [`DialogAction::DeletedAfterDismiss`] without touching the modal.
    ///
    /// A dialog that is not open ignores the call before the id is checked.
    pub async fn confirm_delete(&self, id: TeamId) -> Result<DialogAction> {
        {
            let mut phase = self.lock_phase();
            if *phase != DialogPhase::Open {
                debug!("Ignoring confirm for team {} in phase {:?}", id, *phase);
                return Ok(DialogAction::Ignored);
            }
            if id != self.team.id {
                return Err(DeleteDialogError::IdMismatch {
                    requested: id,
                    expected: self.team.id,
                });
            }
            *phase = DialogPhase::Deleting;
        }

        match self.resource.delete(id).await {
            Ok(()) => {
                if !self.finish() {
                    info!("Team {} deleted after its dialog was dismissed", id);
                    return Ok(DialogAction::DeletedAfterDismiss);
                }
                info!("Team \"{}\" ({}) deleted", self.team.name, id);
                self.modal.close(true);
                Ok(DialogAction::Closed)
            }
            Err(e) => {
                warn!("Failed to delete team {}: {}", id, e);
                match self.failure_policy {
                    FailurePolicy::KeepOpen => {
                        let mut phase = self.lock_phase();
                        if *phase == DialogPhase::Deleting {
                            *phase = DialogPhase::Open;
                        }
                    }
                    FailurePolicy::Dismiss => {
                        if self.finish() {
                            self.modal.dismiss(DELETE_FAILED_REASON);
                        }
                    }
                }
                Err(e.into())
            }
        }
    }
}
