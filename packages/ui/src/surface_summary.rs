use dioxus::prelude::*;

pub const SURFACE_UNIT: &str = "m²";

/// Read-only total of all surfaces, shown as-is.
#[component]
pub fn SurfaceSummary(total_surface: f64) -> Element {
    rsx! {
        div {
            class: "surface-summary",
            span { class: "surface-summary-label", "Total surface:" }
            span { class: "surface-summary-value", "{total_surface} {SURFACE_UNIT}" }
        }
    }
}
