//! The surface sheet: an editable table of rooms and their total area.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, PageHeader, SurfaceSummary, TableToolbar, SURFACE_UNIT};

use crate::session;
use crate::settings::Settings;
use crate::share::{self, ShareError};
use crate::sheet::SurfaceSheet;

#[component]
pub fn Surfaces() -> Element {
    let settings = use_context::<Settings>();
    let auth = use_auth();
    let mut sheet = use_signal(SurfaceSheet::default);
    let mut is_editing = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);

    let title = settings.page.title.clone();
    let share_title = title.clone();
    let filename = settings.export.filename.clone();

    let handle_download = move |_| {
        if let Err(e) = share::export_csv(&filename, &sheet.read().to_csv()) {
            report(&mut notice, "Export", e);
        }
    };
    let handle_print = move |_| {
        if let Err(e) = share::print_page() {
            report(&mut notice, "Print", e);
        }
    };
    let handle_share = move |_| {
        if let Err(e) = share::share_summary(&sheet.read().share_text(&share_title)) {
            report(&mut notice, "Share", e);
        }
    };

    let on_logout = move |_| {
        if let Err(e) = session::clear() {
            tracing::error!("Failed to clear session: {}", e);
        }
    };

    let editing = is_editing();
    let current = sheet();

    rsx! {
        div {
            class: "surfaces-page",

            PageHeader {
                title: title,
                is_editing: editing,
                toggle_editing: move |_| is_editing.set(!editing),
                handle_download: handle_download,
                handle_print: handle_print,
                handle_share: handle_share,
            }

            div {
                class: "surfaces-account",
                if let Some(user) = auth().user {
                    span { "{user.display_name()}" }
                }
                LogoutButton { class: "header-btn", on_logout: on_logout }
            }

            if let Some(message) = notice() {
                div {
                    class: "notice",
                    span { "{message}" }
                    button { onclick: move |_| notice.set(None), "Dismiss" }
                }
            }

            TableToolbar {
                on_add_entry: move |_| {
                    sheet.write().add_entry();
                },
                on_delete_entry: move |_| {
                    if let Some(removed) = sheet.write().delete_selected() {
                        tracing::debug!("Removed {}", removed.label);
                    }
                },
                is_delete_disabled: current.selected.is_none(),
            }

            table {
                class: "surface-table",
                thead {
                    tr {
                        th { "Room" }
                        th { "Area ({SURFACE_UNIT})" }
                    }
                }
                tbody {
                    if current.entries.is_empty() {
                        tr {
                            td { colspan: 2, class: "surface-table-empty", "No rooms yet. Add one with +." }
                        }
                    }
                    for entry in current.entries.iter().cloned() {
                        tr {
                            key: "{entry.id}",
                            class: if current.selected == Some(entry.id) { "selected" } else { "" },
                            onclick: move |_| sheet.write().select(entry.id),
                            if editing {
                                td {
                                    input {
                                        r#type: "text",
                                        value: "{entry.label}",
                                        oninput: move |evt: FormEvent| sheet.write().rename(entry.id, &evt.value()),
                                    }
                                }
                                td {
                                    input {
                                        r#type: "text",
                                        value: "{entry.area}",
                                        onchange: move |evt: FormEvent| {
                                            let input = evt.value();
                                            if !sheet.write().set_area(entry.id, &input) {
                                                notice.set(Some(format!("\"{input}\" is not a valid area")));
                                            }
                                        },
                                    }
                                }
                            } else {
                                td { "{entry.label}" }
                                td { "{entry.area}" }
                            }
                        }
                    }
                }
            }

            SurfaceSummary { total_surface: current.total() }
        }
    }
}

fn report(notice: &mut Signal<Option<String>>, action: &str, err: ShareError) {
    tracing::error!("{} failed: {}", action, err);
    notice.set(Some(format!("{action} failed: {err}")));
}
