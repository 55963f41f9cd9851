use crate::dialog::{
    DeleteDialogError, DeleteTeamDialog, DialogAction, DialogOutcome, FailurePolicy,
    ModalInstance,
};
use crate::team::{Team, TeamId, TeamResource};
use std::sync::Arc;

pub type TeamDeleteDialog = DeleteTeamDialog<ModalInstance>;

/// Collaborators handed to the UI at launch.
#[derive(Clone)]
pub struct Services {
    pub teams: Arc<dyn TeamResource>,
    pub failure_policy: FailurePolicy,
    pub api_url: String,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub teams: Vec<Team>,
    pub message: Option<Message>,
    pub is_loading: bool,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            teams: Vec::new(),
            message: None,
            is_loading: false,
        }
    }

    pub fn find_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn sorted_teams(&self) -> Vec<&Team> {
        let mut teams: Vec<&Team> = self.teams.iter().collect();
        teams.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        teams
    }

    pub fn remove_team(&mut self, id: TeamId) {
        self.teams.retain(|t| t.id != id);
    }

    fn team_deleted(&mut self, team: &Team) {
        self.remove_team(team.id);
        self.set_message(Message::success(format!("Team \"{}\" deleted", team.name)));
    }

    /// Applies what the modal reported back to the opener.
    pub fn apply_dialog_outcome(&mut self, team: &Team, outcome: &DialogOutcome) {
        if outcome.is_confirmed() {
            self.team_deleted(team);
        }
    }

    /// Applies the result of pressing Delete. A close is handled through the
    /// modal outcome; a delete that finished after the modal was dismissed
    /// is only visible here.
    pub fn apply_delete_result(
        &mut self,
        team: &Team,
        result: Result<DialogAction, DeleteDialogError>,
    ) {
        match result {
            Ok(DialogAction::DeletedAfterDismiss) => self.team_deleted(team),
            Ok(_) => {}
            Err(e) => {
                self.set_message(Message::error(format!("Failed to delete team: {}", e)));
            }
        }
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
