use crate::state::AppState;
use crate::team::TeamId;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdRefresh;

#[component]
pub fn TeamList(
    state: Signal<AppState>,
    disabled: bool,
    on_refresh: EventHandler<()>,
    on_delete: EventHandler<TeamId>,
) -> Element {
    let (rows, is_loading) = {
        let state = state.read();
        let rows = state
            .sorted_teams()
            .into_iter()
            .map(|t| (t.id, t.name.clone(), t.summary()))
            .collect::<Vec<_>>();
        (rows, state.is_loading)
    };
    let has_teams = !rows.is_empty();

    rsx! {
        div { class: "team-list",
            div { class: "team-list-header",
                h2 { "Teams" }
                button {
                    class: "secondary",
                    disabled: disabled || is_loading,
                    onclick: move |_| on_refresh.call(()),
                    Icon {
                        width: 16,
                        height: 16,
                        icon: MdRefresh
                    }
                    "Refresh"
                }
            }
            if !has_teams {
                p { class: "empty", "No teams found" }
            }
            for (id, name, summary) in rows {
                div { key: "{id}", class: "team-row",
                    div { class: "team-info",
                        div { class: "team-name", "{name}" }
                        div { class: "team-summary", "{summary}" }
                    }
                    button {
                        class: "secondary danger delete-btn",
                        disabled: disabled,
                        onclick: move |_| on_delete.call(id),
                        "Delete"
                    }
                }
            }
        }
    }
}
