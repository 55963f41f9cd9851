use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdDelete;

#[component]
pub fn DeleteConfirmDialog(
    team_name: String,
    deleting: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "dialog-overlay",
            div { class: "delete-confirm-dialog",
                h3 { "Confirm delete operation" }
                p { "Are you sure you want to delete the team \"{team_name}\"?" }
                div { class: "dialog-buttons",
                    button {
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "primary danger",
                        disabled: deleting,
                        onclick: move |_| on_confirm.call(()),
                        Icon {
                            width: 16,
                            height: 16,
                            icon: MdDelete
                        }
                        if deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
