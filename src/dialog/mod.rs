pub mod controller;
pub mod modal;

pub use controller::{DeleteDialogError, DeleteTeamDialog, DialogAction, DialogPhase, FailurePolicy};
pub use modal::{DialogOutcome, ModalInstance, open_modal};
