use crate::components::*;
use crate::dialog::{DeleteTeamDialog, DialogOutcome, DialogPhase, open_modal};
use crate::state::{AppState, Message, Services, TeamDeleteDialog};
use crate::team::{Team, TeamId, TeamResource};
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::debug;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let services = use_context::<Services>();
    let mut state = use_signal(AppState::new);
    let active_dialog: Signal<Option<Arc<TeamDeleteDialog>>> = use_signal(|| None);

    let teams = services.teams.clone();
    use_effect(move || {
        let teams = teams.clone();
        spawn(async move {
            refresh_teams(state, teams).await;
        });
    });

    let on_refresh = {
        let teams = services.teams.clone();
        move |_| {
            let teams = teams.clone();
            spawn(async move {
                refresh_teams(state, teams).await;
            });
        }
    };

    let on_delete = {
        let services = services.clone();
        move |id: TeamId| {
            let team = state.read().find_team(id).cloned();
            match team {
                Some(team) => open_delete_dialog(state, active_dialog, &services, team),
                None => state
                    .write()
                    .set_message(Message::error(format!("Team {} is no longer listed", id))),
            }
        }
    };

    let on_confirm = move |_| {
        let dialog = active_dialog.read().clone();
        if let Some(dialog) = dialog {
            spawn(async move {
                confirm_team_delete(state, dialog).await;
            });
        }
    };

    let on_cancel = move |_| {
        let dialog = active_dialog.read().clone();
        if let Some(dialog) = dialog {
            dialog.cancel();
        }
    };

    // phase is not a signal; is_loading brackets the delete and drives the re-render
    let is_loading = state.read().is_loading;
    let dialog_view = active_dialog
        .read()
        .as_ref()
        .map(|d| (d.team().name.clone(), is_loading && d.phase() == DialogPhase::Deleting));

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            Header { state: state }
            div { class: "content",
                TeamList {
                    state: state,
                    disabled: dialog_view.is_some(),
                    on_refresh: on_refresh,
                    on_delete: on_delete
                }
            }
            StatusBar { state: state, api_url: services.api_url.clone() }
            if let Some((team_name, deleting)) = dialog_view {
                DeleteConfirmDialog {
                    team_name: team_name,
                    deleting: deleting,
                    on_confirm: on_confirm,
                    on_cancel: on_cancel
                }
            }
        }
    }
}

async fn refresh_teams(mut state: Signal<AppState>, teams: Arc<dyn TeamResource>) {
    {
        let mut write_state = state.write();
        write_state.clear_message();
        write_state.set_loading(true);
    }

    let result = teams.list().await;

    state.write().set_loading(false);

    match result {
        Ok(teams) => {
            debug!("Loaded {} teams", teams.len());
            state.write().teams = teams;
        }
        Err(e) => {
            state
                .write()
                .set_message(Message::error(format!("Failed to load teams: {}", e)));
        }
    }
}

fn open_delete_dialog(
    mut state: Signal<AppState>,
    mut active_dialog: Signal<Option<Arc<TeamDeleteDialog>>>,
    services: &Services,
    team: Team,
) {
    let (modal, result) = open_modal();
    let dialog = Arc::new(DeleteTeamDialog::new(
        modal,
        team.clone(),
        services.teams.clone(),
        services.failure_policy,
    ));

    state.write().clear_message();
    active_dialog.set(Some(dialog));

    spawn(async move {
        let outcome = result.wait().await;
        finish_delete_dialog(state, active_dialog, team, outcome);
    });
}

async fn confirm_team_delete(mut state: Signal<AppState>, dialog: Arc<TeamDeleteDialog>) {
    {
        let mut write_state = state.write();
        write_state.clear_message();
        write_state.set_loading(true);
    }

    let team = dialog.team().clone();
    let result = dialog.confirm_delete(team.id).await;

    let mut write_state = state.write();
    write_state.set_loading(false);
    write_state.apply_delete_result(&team, result);
}

fn finish_delete_dialog(
    mut state: Signal<AppState>,
    mut active_dialog: Signal<Option<Arc<TeamDeleteDialog>>>,
    team: Team,
    outcome: DialogOutcome,
) {
    active_dialog.set(None);
    debug!("Delete dialog for team {} closed with {:?}", team.id, outcome);
    state.write().apply_dialog_outcome(&team, &outcome);
}
