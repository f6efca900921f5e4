//! Cutout information export for listing views.

use serde::{Deserialize, Serialize};

use panelkit_core::units::{format_length, get_unit_label, MeasurementSystem};

/// Panel-local center of a cutout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
}

/// Snapshot of one cutout, independent of selection and clash state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutoutInfo {
    pub id: String,
    pub placement: Placement,
    pub size: String,
}

/// Renders the export as concatenated JSON objects, one per cutout.
pub fn format_listing(infos: &[CutoutInfo]) -> serde_json::Result<String> {
    let mut listing = String::new();
    for info in infos {
        listing.push_str(&serde_json::to_string(info)?);
    }
    Ok(listing)
}

/// Renders a human-readable table with lengths in the chosen units.
pub fn format_table(infos: &[CutoutInfo], system: MeasurementSystem) -> String {
    let unit = get_unit_label(system);
    let mut table = format!("{:<12} {:>12} {:>12}  size\n", "id", "x", "y");
    for info in infos {
        table.push_str(&format!(
            "{:<12} {:>12} {:>12}  {} ({})\n",
            info.id,
            format_length(info.placement.x, system),
            format_length(info.placement.y, system),
            info.size,
            unit
        ));
    }
    table
}
