//! The editable table of surfaces behind the surfaces page.

use ui::SURFACE_UNIT;

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceEntry {
    pub id: u32,
    pub label: String,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSheet {
    pub entries: Vec<SurfaceEntry>,
    pub selected: Option<u32>,
    next_id: u32,
}

impl Default for SurfaceSheet {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            next_id: 1,
        }
    }
}

impl SurfaceSheet {
    /// Append a blank room and select it.
    pub fn add_entry(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(SurfaceEntry {
            id,
            label: format!("Room {id}"),
            area: 0.0,
        });
        self.selected = Some(id);
        id
    }

    /// Remove the selected row. Returns the removed entry.
    pub fn delete_selected(&mut self) -> Option<SurfaceEntry> {
        let id = self.selected.take()?;
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn select(&mut self, id: u32) {
        if self.entries.iter().any(|e| e.id == id) {
            self.selected = Some(id);
        }
    }

    pub fn rename(&mut self, id: u32, label: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.label = label.to_string();
        }
    }

    /// Set the area from user input. Input that is not a non-negative
    /// number leaves the previous value in place.
    pub fn set_area(&mut self, id: u32, input: &str) -> bool {
        let Ok(area) = input.trim().replace(',', ".").parse::<f64>() else {
            return false;
        };
        if !area.is_finite() || area < 0.0 {
            return false;
        }
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.area = area;
                true
            }
            None => false,
        }
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.area).sum()
    }

    /// CSV export: a header line, then one `label,area` line per row.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("label,area_m2\n");
        for entry in &self.entries {
            out.push_str(&csv_field(&entry.label));
            out.push(',');
            out.push_str(&entry.area.to_string());
            out.push('\n');
        }
        out
    }

    /// Plain-text summary for sharing.
    pub fn share_text(&self, title: &str) -> String {
        let mut out = format!("{title}\n");
        for entry in &self.entries {
            out.push_str(&format!("- {}: {} {SURFACE_UNIT}\n", entry.label, entry.area));
        }
        out.push_str(&format!("Total: {} {SURFACE_UNIT}", self.total()));
        out
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
