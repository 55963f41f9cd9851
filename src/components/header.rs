use crate::state::AppState;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_social_icons::MdGroup;

fn team_count_label(count: usize, is_loading: bool) -> String {
    match (count, is_loading) {
        (0, true) => "Loading teams...".to_string(),
        (1, _) => "1 team".to_string(),
        (n, _) => format!("{} teams", n),
    }
}

#[component]
pub fn Header(state: Signal<AppState>) -> Element {
    let label = {
        let state = state.read();
        team_count_label(state.teams.len(), state.is_loading)
    };

    rsx! {
        div { class: "header",
            Icon {
                width: 28,
                height: 28,
                icon: MdGroup
            }
            div { class: "header-titles",
                h1 { "Team Administration" }
                span { class: "header-subtitle", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_count_label() {
        assert_eq!(team_count_label(0, true), "Loading teams...");
        assert_eq!(team_count_label(0, false), "0 teams");
        assert_eq!(team_count_label(1, false), "1 team");
        assert_eq!(team_count_label(12, true), "12 teams");
    }
}
