//! Page title bar with the edit toggle and the export/print/share actions.

use dioxus::prelude::*;

use crate::icons::{FaDownload, FaFloppyDisk, FaPenToSquare, FaPrint, FaShareNodes};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    ToggleEditing,
    Download,
    Print,
    Share,
}

impl HeaderAction {
    /// Actions in the order the header shows them.
    pub const ALL: [HeaderAction; 4] = [
        HeaderAction::ToggleEditing,
        HeaderAction::Download,
        HeaderAction::Print,
        HeaderAction::Share,
    ];

    pub fn label(self, is_editing: bool) -> &'static str {
        match self {
            HeaderAction::ToggleEditing if is_editing => "Save",
            HeaderAction::ToggleEditing => "Edit",
            HeaderAction::Download => "Export",
            HeaderAction::Print => "Print",
            HeaderAction::Share => "Share",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    pub is_editing: bool,
    pub toggle_editing: EventHandler,
    pub handle_download: EventHandler,
    pub handle_print: EventHandler,
    pub handle_share: EventHandler,
}

impl PageHeaderProps {
    pub fn handler(&self, action: HeaderAction) -> &EventHandler {
        match action {
            HeaderAction::ToggleEditing => &self.toggle_editing,
            HeaderAction::Download => &self.handle_download,
            HeaderAction::Print => &self.handle_print,
            HeaderAction::Share => &self.handle_share,
        }
    }

    pub fn trigger(&self, action: HeaderAction) {
        self.handler(action).call(());
    }
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    let is_editing = props.is_editing;

    rsx! {
        header {
            class: "page-header",
            h1 { class: "page-header-title", "{props.title}" }
            div {
                class: "page-header-actions",
                for action in HeaderAction::ALL {
                    HeaderButton {
                        key: "{action:?}",
                        action: action,
                        is_editing: is_editing,
                        on_press: *props.handler(action),
                    }
                }
            }
        }
    }
}

#[component]
fn HeaderButton(action: HeaderAction, is_editing: bool, on_press: EventHandler) -> Element {
    let label = action.label(is_editing);
    let primary = action == HeaderAction::ToggleEditing && is_editing;

    rsx! {
        button {
            class: if primary { "header-btn header-btn--primary" } else { "header-btn" },
            title: "{label}",
            onclick: move |_| on_press.call(()),
            {match action {
                HeaderAction::ToggleEditing if is_editing => rsx! {
                    Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                },
                HeaderAction::ToggleEditing => rsx! {
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                },
                HeaderAction::Download => rsx! {
                    Icon { icon: FaDownload, width: 14, height: 14 }
                },
                HeaderAction::Print => rsx! {
                    Icon { icon: FaPrint, width: 14, height: 14 }
                },
                HeaderAction::Share => rsx! {
                    Icon { icon: FaShareNodes, width: 14, height: 14 }
                },
            }}
            span { "{label}" }
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
        is_editing: bool,
        press: Option<HeaderAction>,
    }

    fn harness(props: Harness) -> Element {
        let header = PageHeaderProps {
            title: "Surfaces".to_string(),
            is_editing: props.is_editing,
            toggle_editing: props.calls.handler("toggle_editing"),
            handle_download: props.calls.handler("download"),
            handle_print: props.calls.handler("print"),
            handle_share: props.calls.handler("share"),
        };
        if let Some(action) = props.press {
            header.trigger(action);
        }
        rsx! {
            PageHeader {
                title: header.title,
                is_editing: header.is_editing,
                toggle_editing: header.toggle_editing,
                handle_download: header.handle_download,
                handle_print: header.handle_print,
                handle_share: header.handle_share,
            }
        }
    }

    fn run(is_editing: bool, press: Option<HeaderAction>) -> (String, Vec<&'static str>) {
        let calls = Calls::default();
        let html = render(
            harness,
            Harness {
                calls: calls.clone(),
                is_editing,
                press,
            },
        );
        (html, calls.recorded())
    }

    #[test]
    fn editing_shows_save_and_toggles_once() {
        let (html, calls) = run(true, Some(HeaderAction::ToggleEditing));
        assert!(html.contains("Save"));
        assert!(!html.contains("Edit"));
        assert!(html.contains("header-btn--primary"));
        assert_eq!(calls, vec!["toggle_editing"]);
    }

    #[test]
    fn not_editing_shows_edit() {
        let (html, calls) = run(false, None);
        assert!(html.contains("Edit"));
        assert!(!html.contains("Save"));
        assert!(calls.is_empty());
    }

    #[test]
    fn each_action_calls_only_its_handler() {
        let expected = [
            (HeaderAction::Download, "download"),
            (HeaderAction::Print, "print"),
            (HeaderAction::Share, "share"),
        ];
        for (action, name) in expected {
            let (_, calls) = run(false, Some(action));
            assert_eq!(calls, vec![name], "{action:?}");
        }
    }

    #[test]
    fn renders_title_and_all_labels() {
        let (html, _) = run(false, None);
        assert!(html.contains("Surfaces"));
        for action in HeaderAction::ALL {
            assert!(html.contains(action.label(false)));
        }
    }
}
