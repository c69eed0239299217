use dioxus::prelude::*;

use crate::icons::{FaMinus, FaPlus};
use crate::Icon;

/// Hint shown next to the toolbar buttons.
pub const TOOLBAR_HINT: &str = "Select a row to remove it";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    AddEntry,
    DeleteEntry,
}

impl ToolbarAction {
    /// Buttons in the order the toolbar shows them.
    pub const ALL: [ToolbarAction; 2] = [ToolbarAction::AddEntry, ToolbarAction::DeleteEntry];

    pub fn title(self) -> &'static str {
        match self {
            ToolbarAction::AddEntry => "Add row",
            ToolbarAction::DeleteEntry => "Remove row",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TableToolbarProps {
    pub on_add_entry: EventHandler,
    pub on_delete_entry: EventHandler,
    pub is_delete_disabled: bool,
}

impl TableToolbarProps {
    /// Forward `action` to its callback. Returns `false` when the action is
    /// currently inert and nothing was called.
    pub fn trigger(&self, action: ToolbarAction) -> bool {
        if self.is_disabled(action) {
            return false;
        }
        match action {
            ToolbarAction::AddEntry => self.on_add_entry.call(()),
            ToolbarAction::DeleteEntry => self.on_delete_entry.call(()),
        }
        true
    }

    pub fn is_disabled(&self, action: ToolbarAction) -> bool {
        action == ToolbarAction::DeleteEntry && self.is_delete_disabled
    }
}

/// Add/remove row buttons for an editable table.
#[component]
pub fn TableToolbar(props: TableToolbarProps) -> Element {
    rsx! {
        div {
            class: "table-toolbar",
            for action in ToolbarAction::ALL {
                ToolbarButton {
                    key: "{action:?}",
                    action: action,
                    toolbar: props.clone(),
                }
            }
            span { class: "toolbar-hint", "{TOOLBAR_HINT}" }
        }
    }
}

#[component]
fn ToolbarButton(action: ToolbarAction, toolbar: TableToolbarProps) -> Element {
    let disabled = toolbar.is_disabled(action);

    rsx! {
        button {
            class: "toolbar-btn",
            title: action.title(),
            disabled: disabled,
            onclick: move |_| {
                toolbar.trigger(action);
            },
            {match action {
                ToolbarAction::AddEntry => rsx! {
                    Icon { icon: FaPlus, width: 14, height: 14 }
                },
                ToolbarAction::DeleteEntry => rsx! {
                    Icon { icon: FaMinus, width: 14, height: 14 }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{render, Calls};

    #[derive(Clone)]
    struct Harness {
        calls: Calls,
        disabled: bool,
        press: Option<ToolbarAction>,
    }

    fn harness(props: Harness) -> Element {
        let toolbar = TableToolbarProps {
            on_add_entry: props.calls.handler("add"),
            on_delete_entry: props.calls.handler("delete"),
            is_delete_disabled: props.disabled,
        };
        if let Some(action) = props.press {
            let forwarded = toolbar.trigger(action);
            props.calls.record(if forwarded { "forwarded" } else { "ignored" });
        }
        rsx! {
            TableToolbar {
                on_add_entry: toolbar.on_add_entry,
                on_delete_entry: toolbar.on_delete_entry,
                is_delete_disabled: toolbar.is_delete_disabled,
            }
        }
    }

    fn press(disabled: bool, action: ToolbarAction) -> Vec<&'static str> {
        let calls = Calls::default();
        render(
            harness,
            Harness {
                calls: calls.clone(),
                disabled,
                press: Some(action),
            },
        );
        calls.recorded()
    }

    #[test]
    fn disabled_delete_does_not_forward() {
        assert_eq!(press(true, ToolbarAction::DeleteEntry), vec!["ignored"]);
    }

    #[test]
    fn enabled_delete_forwards_once() {
        assert_eq!(
            press(false, ToolbarAction::DeleteEntry),
            vec!["delete", "forwarded"]
        );
    }

    #[test]
    fn add_forwards_even_when_delete_disabled() {
        assert_eq!(press(true, ToolbarAction::AddEntry), vec!["add", "forwarded"]);
    }

    fn markup(disabled: bool) -> String {
        render(
            harness,
            Harness {
                calls: Calls::default(),
                disabled,
                press: None,
            },
        )
    }

    #[test]
    fn renders_hint_and_disabled_delete_button() {
        let html = markup(true);
        assert!(html.contains(TOOLBAR_HINT));
        assert_eq!(html.matches("disabled").count(), 1);
        let delete = html.find(ToolbarAction::DeleteEntry.title()).unwrap();
        let add = html.find(ToolbarAction::AddEntry.title()).unwrap();
        assert!(add < delete);
    }

    #[test]
    fn enabled_delete_button_has_no_disabled_attribute() {
        let html = markup(false);
        assert!(html.contains(ToolbarAction::DeleteEntry.title()));
        assert!(!html.contains("disabled"));
    }
}
