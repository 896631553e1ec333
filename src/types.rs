//! Core types for reverberation estimation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::model::{RaftSpec, RoomGeometry, SurfaceSpec};

/// Full set of inputs for one estimation run
///
/// The default value mirrors an untouched input form: a 5 x 4 x 3 m room
/// with no materials selected and no rafts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Room dimensions
    pub room: RoomGeometry,
    /// Ceiling treatment
    pub ceiling: SurfaceSpec,
    /// Wall treatment, applied to all four walls together
    pub walls: SurfaceSpec,
    /// Floor treatment
    pub floor: SurfaceSpec,
    /// Suspended rafts or baffles
    pub raft: RaftSpec,
}

/// One completed estimate together with the inputs that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier
    pub id: String,
    /// When the estimate was computed
    pub computed_at: chrono::DateTime<chrono::Utc>,
    /// Inputs the estimate was derived from
    pub input: CalculationInput,
    /// T60 in seconds per band centre frequency, rounded to 3 decimals
    pub t60: BTreeMap<u32, f64>,
    /// Mid-frequency average (500-2000 Hz) in seconds, rounded to 3 decimals
    pub tmf: f64,
}

impl CalculationResult {
    pub fn new(input: CalculationInput, t60: BTreeMap<u32, f64>, tmf: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            computed_at: chrono::Utc::now(),
            input,
            t60,
            tmf,
        }
    }

    /// T60 at a band centre frequency, 0.0 when the band was not computed
    pub fn t60_at(&self, band: u32) -> f64 {
        self.t60.get(&band).copied().unwrap_or(0.0)
    }
}
