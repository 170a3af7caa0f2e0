//! Mapping from base-map region names to dataset column names.
//!
//! The base map draws all 16 federal states, while the regional averages
//! merge the city states into their neighbours (Berlin into
//! "Brandenburg/Berlin", Hamburg and Bremen into
//! "Niedersachsen/Hamburg/Bremen") and spell umlauts out.

use bevy::prelude::*;

/// `(drawing name, dataset name)` in base-map order.
pub const REGION_NAME_TABLE: [(&str, &str); 16] = [
    ("Baden-Württemberg", "Baden-Wuerttemberg"),
    ("Bayern", "Bayern"),
    ("Brandenburg", "Brandenburg"),
    ("Berlin", "Brandenburg/Berlin"),
    ("Hamburg", "Niedersachsen/Hamburg/Bremen"),
    ("Hessen", "Hessen"),
    ("Mecklenburg-Vorpommern", "Mecklenburg-Vorpommern"),
    ("Niedersachsen", "Niedersachsen"),
    ("Nordrhein-Westfalen", "Nordrhein-Westfalen"),
    ("Rheinland-Pfalz", "Rheinland-Pfalz"),
    ("Saarland", "Saarland"),
    ("Sachsen", "Sachsen"),
    ("Sachsen-Anhalt", "Sachsen-Anhalt"),
    ("Schleswig-Holstein", "Schleswig-Holstein"),
    ("Thüringen", "Thueringen"),
    ("Bremen", "Niedersachsen/Hamburg/Bremen"),
];

/// Resource wrapping the drawing→dataset name table.
#[derive(Resource, Debug, Clone)]
pub struct RegionNameMap {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for RegionNameMap {
    fn default() -> Self {
        Self {
            entries: &REGION_NAME_TABLE,
        }
    }
}

impl RegionNameMap {
    /// Dataset column for a base-map region, or `None` if unmapped.
    pub fn dataset_name(&self, drawing_name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(drawing, _)| *drawing == drawing_name)
            .map(|&(_, dataset)| dataset)
    }

    pub fn drawing_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(drawing, _)| drawing)
    }

    /// Distinct dataset names, first occurrence order.
    pub fn dataset_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::with_capacity(self.entries.len());
        for &(_, dataset) in self.entries {
            if !names.contains(&dataset) {
                names.push(dataset);
            }
        }
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
