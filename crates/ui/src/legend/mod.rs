//! Color legend for the selected attribute.
//!
//! A bottom panel below the maps with the attribute heading and one row per
//! bucket: a round swatch in the bucket color and `"<label> (<range>)"`.
//! The open-ended top bucket reads `"Hot (10+)"`.

mod metadata;
mod systems;
#[cfg(test)]
mod tests;
mod types;

pub use metadata::{legend_entries, legend_title};
pub use types::LegendEntry;

pub(crate) use systems::legend_ui;
