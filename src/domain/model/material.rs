//! Material-related type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::FREQUENCY_BANDS;

/// Absorption data for one catalog entry
///
/// Surface materials carry dimensionless absorption coefficients; suspended
/// raft and baffle entries carry total sabins per unit instead. Both kinds
/// share this shape and are summed the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name (catalog key)
    pub name: String,
    /// Absorption values, one per octave band in `FREQUENCY_BANDS` order
    pub absorption: [f64; 6],
}

impl Material {
    pub fn new(name: impl Into<String>, absorption: [f64; 6]) -> Self {
        Self {
            name: name.into(),
            absorption,
        }
    }

    /// Absorption value at a band centre frequency
    ///
    /// Returns 0.0 for frequencies outside the fixed band set.
    pub fn absorption_at(&self, band: u32) -> f64 {
        FREQUENCY_BANDS
            .iter()
            .position(|&b| b == band)
            .map(|i| self.absorption[i])
            .unwrap_or(0.0)
    }
}

/// Name-keyed lookup table of materials
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: HashMap<String, Material>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_materials(materials: Vec<Material>) -> Self {
        let materials = materials
            .into_iter()
            .map(|m| (m.name.clone(), m))
            .collect();
        Self { materials }
    }

    /// Absorption for a named material at a band centre frequency
    ///
    /// Unknown names and unknown bands both resolve to 0.0 so that
    /// placeholder selections simply contribute no absorption.
    pub fn lookup(&self, name: &str, band: u32) -> f64 {
        self.materials
            .get(name)
            .map(|m| m.absorption_at(band))
            .unwrap_or(0.0)
    }

    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    /// Insert a material, replacing any existing entry with the same name
    pub fn insert(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    /// All material names in alphabetical order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.materials.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
