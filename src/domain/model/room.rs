//! Room geometry and surface treatment definitions

use serde::{Deserialize, Serialize};

use crate::constants::NO_SELECTION;

/// Rectangular room dimensions in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomGeometry {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl RoomGeometry {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Room volume in m³
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Combined area of all four walls in m²
    pub fn wall_area(&self) -> f64 {
        2.0 * (self.length + self.width) * self.height
    }

    /// Ceiling area in m²
    pub fn ceiling_area(&self) -> f64 {
        self.length * self.width
    }

    /// Floor area in m² (equal to the ceiling for a rectangular room)
    pub fn floor_area(&self) -> f64 {
        self.length * self.width
    }
}

impl Default for RoomGeometry {
    fn default() -> Self {
        Self {
            length: 5.0,
            width: 4.0,
            height: 3.0,
        }
    }
}

/// Treatment of one boundary surface (ceiling, walls or floor)
///
/// The main material covers the surface except for the patch claimed by the
/// additional material. The patch area is clamped so the main contribution
/// never goes negative when the patch exceeds the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    /// Material covering the bulk of the surface
    pub main_material: String,
    /// Material applied over a patch of the surface
    pub add_material: String,
    /// Patch area in m²
    pub add_area: f64,
}

impl SurfaceSpec {
    pub fn new(
        main_material: impl Into<String>,
        add_material: impl Into<String>,
        add_area: f64,
    ) -> Self {
        Self {
            main_material: main_material.into(),
            add_material: add_material.into(),
            add_area,
        }
    }

    /// Surface fully covered by a single material
    pub fn uniform(main_material: impl Into<String>) -> Self {
        Self::new(main_material, NO_SELECTION, 0.0)
    }

    /// Area left to the main material after subtracting the patch
    pub fn effective_main_area(&self, total_area: f64) -> f64 {
        (total_area - self.add_area).max(0.0)
    }
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        Self::uniform(NO_SELECTION)
    }
}

/// Suspended absorber units hung below the ceiling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaftSpec {
    /// Catalog entry carrying sabins per unit
    pub material: String,
    /// Number of units installed
    pub count: u32,
}

impl RaftSpec {
    pub fn new(material: impl Into<String>, count: u32) -> Self {
        Self {
            material: material.into(),
            count,
        }
    }
}

impl Default for RaftSpec {
    fn default() -> Self {
        Self::new(NO_SELECTION, 0)
    }
}
