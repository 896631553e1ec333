//! Sabine reverberation time estimation
//!
//! Pure functions that turn room geometry and surface treatments into
//! octave-band T60 estimates. Absorption is accumulated in sabins (m²)
//! from surface coefficients and per-unit raft values, then applied as
//! T60 = 0.161 x V / A.

use std::collections::BTreeMap;

use crate::constants::{FREQUENCY_BANDS, MID_FREQUENCY_BANDS, SABINE_COEFFICIENT};
use crate::domain::model::{MaterialCatalog, SurfaceSpec};
use crate::types::{CalculationInput, CalculationResult};

/// Round to 3 decimal places for stored results
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Sabine reverberation time for a single band
///
/// # Formula
/// T60 = 0.161 x volume / total_absorption
///
/// # Arguments
/// * `volume` - Room volume in m³
/// * `total_absorption` - Total absorption in sabins (m²)
///
/// # Returns
/// T60 in seconds. A room with no absorption reports 0.0 rather than an
/// unbounded decay time, so untreated rooms read as "no estimate".
pub fn t60_sabine(volume: f64, total_absorption: f64) -> f64 {
    if total_absorption > 0.0 {
        SABINE_COEFFICIENT * volume / total_absorption
    } else {
        0.0
    }
}

/// Absorption contributed by one surface at one band, in sabins
///
/// The additional material claims its patch area at full value even when
/// the patch exceeds the surface; only the main material's share is
/// clamped at zero.
pub fn surface_absorption(
    surface: &SurfaceSpec,
    total_area: f64,
    catalog: &MaterialCatalog,
    band: u32,
) -> f64 {
    let main =
        surface.effective_main_area(total_area) * catalog.lookup(&surface.main_material, band);
    let add = surface.add_area * catalog.lookup(&surface.add_material, band);
    main + add
}

/// Total absorption of the room at one band, in sabins
///
/// Sums the ceiling, wall and floor surfaces plus the suspended rafts
/// (sabins per unit x count).
pub fn band_absorption(input: &CalculationInput, catalog: &MaterialCatalog, band: u32) -> f64 {
    let room = &input.room;
    let surfaces = surface_absorption(&input.ceiling, room.ceiling_area(), catalog, band)
        + surface_absorption(&input.walls, room.wall_area(), catalog, band)
        + surface_absorption(&input.floor, room.floor_area(), catalog, band);
    let rafts = f64::from(input.raft.count) * catalog.lookup(&input.raft.material, band);
    surfaces + rafts
}

/// Unrounded T60 per band for an arbitrary band list
pub fn compute_for_bands(
    input: &CalculationInput,
    catalog: &MaterialCatalog,
    bands: &[u32],
) -> BTreeMap<u32, f64> {
    let volume = input.room.volume();
    bands
        .iter()
        .map(|&band| (band, t60_sabine(volume, band_absorption(input, catalog, band))))
        .collect()
}

/// Average T60 over the mid-frequency bands present in the map
///
/// Returns 0.0 when none of the mid bands were computed.
pub fn mid_frequency_average(t60: &BTreeMap<u32, f64>) -> f64 {
    let mid: Vec<f64> = t60
        .iter()
        .filter(|(band, _)| MID_FREQUENCY_BANDS.contains(band))
        .map(|(_, value)| *value)
        .collect();
    if mid.is_empty() {
        0.0
    } else {
        mid.iter().sum::<f64>() / mid.len() as f64
    }
}

/// Run a full estimate over the standard octave bands
///
/// TMF is averaged from the exact per-band values before any rounding;
/// both the band values and TMF are then rounded to 3 decimals for
/// storage.
pub fn compute(input: &CalculationInput, catalog: &MaterialCatalog) -> CalculationResult {
    let exact = compute_for_bands(input, catalog, &FREQUENCY_BANDS);
    let tmf = mid_frequency_average(&exact);
    let t60 = exact
        .into_iter()
        .map(|(band, value)| (band, round3(value)))
        .collect();
    CalculationResult::new(input.clone(), t60, round3(tmf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{builtin_catalog, NO_SELECTION};
    use crate::domain::model::RaftSpec;

    fn ceiling_only(main: &str) -> CalculationInput {
        CalculationInput {
            ceiling: SurfaceSpec::uniform(main),
            ..Default::default()
        }
    }

    // ==========================================
    // Sabine formula
    // ==========================================

    #[test]
    fn test_t60_sabine_basic() {
        // 60m³ room with 18 sabins: 0.161 x 60 / 18 = 0.5367s
        let t60 = t60_sabine(60.0, 18.0);
        assert!((t60 - 0.53667).abs() < 0.0001);
    }

    #[test]
    fn test_t60_sabine_zero_absorption() {
        // No absorption reports 0.0, not an unbounded decay
        assert_eq!(t60_sabine(60.0, 0.0), 0.0);
    }

    #[test]
    fn test_t60_sabine_negative_absorption() {
        assert_eq!(t60_sabine(60.0, -1.0), 0.0);
    }

    #[test]
    fn test_t60_sabine_zero_volume() {
        assert_eq!(t60_sabine(0.0, 18.0), 0.0);
    }

    // ==========================================
    // Surface absorption
    // ==========================================

    #[test]
    fn test_surface_absorption_main_plus_patch() {
        // 20m² ceiling, Class A main with a 5m² concrete patch at 500 Hz:
        // (20 - 5) x 0.90 + 5 x 0.02 = 13.5 + 0.1 = 13.6 sabins
        let surface = SurfaceSpec::new("Class A", "Smooth Unpainted Concrete", 5.0);
        let a = surface_absorption(&surface, 20.0, builtin_catalog(), 500);
        assert!((a - 13.6).abs() < 1e-9);
    }

    #[test]
    fn test_surface_absorption_patch_exceeds_surface() {
        // 25m² patch on a 20m² ceiling: main area clamps to zero while
        // the patch still counts in full: 25 x 0.02 = 0.5 sabins
        let surface = SurfaceSpec::new("Class A", "Smooth Unpainted Concrete", 25.0);
        let a = surface_absorption(&surface, 20.0, builtin_catalog(), 500);
        assert!((a - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_surface_absorption_unknown_material() {
        let surface = SurfaceSpec::uniform("Unobtainium");
        let a = surface_absorption(&surface, 20.0, builtin_catalog(), 500);
        assert_eq!(a, 0.0);
    }

    // ==========================================
    // Band absorption
    // ==========================================

    #[test]
    fn test_band_absorption_sums_surfaces_and_rafts() {
        // Class A ceiling at 125 Hz: 20 x 0.50 = 10 sabins
        // Two 200mm ODS rafts at 125 Hz: 2 x 1.30 = 2.6 sabins
        let input = CalculationInput {
            raft: RaftSpec::new("Ecophon Solo Raft 2.4x1.2m at 200mm ODS", 2),
            ..ceiling_only("Class A")
        };
        let a = band_absorption(&input, builtin_catalog(), 125);
        assert!((a - 12.6).abs() < 1e-9);
    }

    #[test]
    fn test_band_absorption_unknown_raft_material() {
        let input = CalculationInput {
            raft: RaftSpec::new("Unobtainium", 10),
            ..Default::default()
        };
        assert_eq!(band_absorption(&input, builtin_catalog(), 500), 0.0);
    }

    // ==========================================
    // Mid-frequency average
    // ==========================================

    #[test]
    fn test_mid_frequency_average_ignores_extremes() {
        let t60 = BTreeMap::from([
            (125, 10.0),
            (500, 1.0),
            (1000, 2.0),
            (2000, 3.0),
            (4000, 9.0),
        ]);
        assert!((mid_frequency_average(&t60) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_mid_frequency_average_partial_bands() {
        let t60 = BTreeMap::from([(500, 1.0), (1000, 3.0)]);
        assert!((mid_frequency_average(&t60) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_mid_frequency_average_empty() {
        assert_eq!(mid_frequency_average(&BTreeMap::new()), 0.0);
    }

    // ==========================================
    // Full computation
    // ==========================================

    #[test]
    fn test_compute_untreated_room() {
        // All surfaces on the placeholder material: zero absorption in
        // every band, so every T60 and the TMF read 0.0
        let result = compute(&CalculationInput::default(), builtin_catalog());
        for band in FREQUENCY_BANDS {
            assert_eq!(result.t60_at(band), 0.0);
        }
        assert_eq!(result.tmf, 0.0);
    }

    #[test]
    fn test_compute_class_a_ceiling() {
        // 5x4x3 room, Class A ceiling only. V = 60, ceiling area = 20.
        // 125 Hz: A = 20 x 0.50 = 10,  T60 = 9.66 / 10 = 0.966
        // 250 Hz: A = 20 x 0.70 = 14,  T60 = 9.66 / 14 = 0.690
        // 500 Hz+: A = 20 x 0.90 = 18, T60 = 9.66 / 18 = 0.537
        let result = compute(&ceiling_only("Class A"), builtin_catalog());
        assert!((result.t60_at(125) - 0.966).abs() < 1e-9);
        assert!((result.t60_at(250) - 0.690).abs() < 1e-9);
        assert!((result.t60_at(500) - 0.537).abs() < 1e-9);
        assert!((result.t60_at(1000) - 0.537).abs() < 1e-9);
        assert!((result.t60_at(2000) - 0.537).abs() < 1e-9);
        assert!((result.t60_at(4000) - 0.537).abs() < 1e-9);
        assert!((result.tmf - 0.537).abs() < 1e-9);
    }

    #[test]
    fn test_compute_carpet_floor_tmf() {
        // 5mm needlefelt carpet floor only, 20m² at V = 60:
        // 500 Hz:  A = 20 x 0.05 = 1.0, T60 = 9.66
        // 1000 Hz: A = 20 x 0.15 = 3.0, T60 = 3.22
        // 2000 Hz: A = 20 x 0.30 = 6.0, T60 = 1.61
        // TMF = (9.66 + 3.22 + 1.61) / 3 = 4.83
        let input = CalculationInput {
            floor: SurfaceSpec::uniform("5mm Needlefelt Carpet"),
            ..Default::default()
        };
        let result = compute(&input, builtin_catalog());
        assert!((result.t60_at(500) - 9.66).abs() < 1e-9);
        assert!((result.t60_at(1000) - 3.22).abs() < 1e-9);
        assert!((result.t60_at(2000) - 1.61).abs() < 1e-9);
        assert!((result.tmf - 4.83).abs() < 1e-9);
    }

    #[test]
    fn test_compute_covers_all_bands() {
        let result = compute(&ceiling_only("Class B"), builtin_catalog());
        let bands: Vec<u32> = result.t60.keys().copied().collect();
        assert_eq!(bands, FREQUENCY_BANDS.to_vec());
    }

    #[test]
    fn test_compute_preserves_input() {
        let input = ceiling_only("Class C");
        let result = compute(&input, builtin_catalog());
        assert_eq!(result.input, input);
    }

    #[test]
    fn test_compute_for_bands_subset() {
        let t60 = compute_for_bands(&ceiling_only("Class A"), builtin_catalog(), &[500]);
        assert_eq!(t60.len(), 1);
        assert!(t60.contains_key(&500));
    }

    #[test]
    fn test_compute_unknown_materials_act_as_untreated() {
        // Unknown names resolve to zero absorption, same as the placeholder
        let input = CalculationInput {
            ceiling: SurfaceSpec::uniform("Not In Catalog"),
            walls: SurfaceSpec::uniform(NO_SELECTION),
            ..Default::default()
        };
        let result = compute(&input, builtin_catalog());
        assert_eq!(result.t60_at(500), 0.0);
        assert_eq!(result.tmf, 0.0);
    }

    // ==========================================
    // Rounding
    // ==========================================

    #[test]
    fn test_round3() {
        assert!((round3(0.536666) - 0.537).abs() < 1e-12);
        assert!((round3(1.23449) - 1.234).abs() < 1e-12);
        assert!((round3(2.0) - 2.0).abs() < 1e-12);
    }
}
