//! Constants for reverberation estimation

pub mod materials;

pub use materials::{builtin_catalog, NO_SELECTION};

/// Octave band centre frequencies evaluated by the estimator (Hz), ascending.
pub const FREQUENCY_BANDS: [u32; 6] = [125, 250, 500, 1000, 2000, 4000];

/// Bands averaged into the mid-frequency summary (TMF), 500-2000 Hz inclusive.
pub const MID_FREQUENCY_BANDS: [u32; 3] = [500, 1000, 2000];

/// Sabine's constant for metric units: T60 = 0.161 * V / A.
pub const SABINE_COEFFICIENT: f64 = 0.161;
