//! Built-in absorption catalog
//!
//! Values are listed per octave band in `FREQUENCY_BANDS` order
//! (125 Hz to 4 kHz). Surface entries are absorption coefficients;
//! Ecophon raft entries are total sabins per unit at the stated
//! overall depth of system (ODS).

use std::sync::LazyLock;

use crate::domain::model::{Material, MaterialCatalog};

/// Placeholder name shown before a real material is chosen
///
/// It resolves to zero absorption at every band, so untreated surfaces
/// drop out of the calculation without special-casing.
pub const NO_SELECTION: &str = "Select Material";

static BUILTIN_CATALOG: LazyLock<MaterialCatalog> = LazyLock::new(|| {
    MaterialCatalog::from_materials(vec![
        Material::new(NO_SELECTION, [0.00, 0.00, 0.00, 0.00, 0.00, 0.00]),
        Material::new(
            "Plasterboard on Frame 50mm",
            [0.15, 0.10, 0.06, 0.04, 0.04, 0.05],
        ),
        Material::new(
            "Smooth Unpainted Concrete",
            [0.01, 0.01, 0.02, 0.02, 0.02, 0.05],
        ),
        Material::new(
            "5mm Needlefelt Carpet",
            [0.01, 0.02, 0.05, 0.15, 0.30, 0.40],
        ),
        Material::new(
            "Linoleum or vinyl on Concrete",
            [0.02, 0.02, 0.03, 0.04, 0.04, 0.05],
        ),
        Material::new("4mm Glass", [0.30, 0.20, 0.10, 0.07, 0.05, 0.02]),
        Material::new("Class A", [0.50, 0.70, 0.90, 0.90, 0.90, 0.90]),
        Material::new("Class B", [0.40, 0.60, 0.80, 0.80, 0.80, 0.70]),
        Material::new("Class C", [0.20, 0.40, 0.60, 0.60, 0.60, 0.50]),
        Material::new("Class D", [0.10, 0.10, 0.30, 0.30, 0.30, 0.20]),
        Material::new("Class E", [0.05, 0.05, 0.15, 0.15, 0.15, 0.10]),
        // Source data carries the trailing space in this key.
        Material::new(
            "Egg cartons directly on wall ",
            [0.01, 0.07, 0.43, 0.62, 0.51, 0.70],
        ),
        Material::new(
            "Ecophon Solo Raft 2.4x1.2m at 200mm ODS",
            [1.30, 2.80, 3.50, 4.10, 4.10, 3.90],
        ),
        Material::new(
            "Ecophon Solo Raft 2.4x1.2m at 400mm ODS",
            [1.20, 2.40, 3.30, 4.70, 4.90, 4.70],
        ),
        Material::new(
            "Ecophon Solo Raft 2.4x1.2m at 1000mm ODS",
            [1.10, 1.20, 3.70, 5.50, 5.60, 5.30],
        ),
        Material::new(
            "Ecophon Solo Baffle 1.2x0.2m c600 at 200mm ODS",
            [0.10, 0.20, 0.30, 0.40, 0.40, 0.40],
        ),
        Material::new(
            "Ecophon Solo Baffle 1.2x0.3m c600 at 300mm ODS",
            [0.20, 0.30, 0.30, 0.50, 0.50, 0.50],
        ),
        Material::new(
            "Ecophon Solo Baffle 1.2x0.6m c600 at 600mm ODS",
            [0.30, 0.20, 0.40, 0.60, 0.60, 0.60],
        ),
        Material::new(
            "Ecophon Solo Baffle 1.8x0.2m c600 at 200mm ODS",
            [0.10, 0.40, 0.40, 0.60, 0.60, 0.60],
        ),
        Material::new(
            "Ecophon Solo Baffle 1.8x0.3m c600 at 300mm ODS",
            [0.20, 0.40, 0.40, 0.70, 0.70, 0.70],
        ),
        Material::new(
            "Ecophon Solo Baffle 1.8x0.6m c600 at 600mm ODS",
            [0.40, 0.40, 0.70, 1.00, 0.90, 0.90],
        ),
    ])
});

/// Catalog of built-in materials
pub fn builtin_catalog() -> &'static MaterialCatalog {
    &BUILTIN_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(builtin_catalog().len(), 21);
    }

    #[test]
    fn test_no_selection_is_zero_everywhere() {
        let catalog = builtin_catalog();
        for band in crate::constants::FREQUENCY_BANDS {
            assert_eq!(catalog.lookup(NO_SELECTION, band), 0.0);
        }
    }

    #[test]
    fn test_class_a_values() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.lookup("Class A", 125), 0.50);
        assert_eq!(catalog.lookup("Class A", 500), 0.90);
        assert_eq!(catalog.lookup("Class A", 4000), 0.90);
    }

    #[test]
    fn test_raft_sabins_per_unit() {
        let catalog = builtin_catalog();
        assert_eq!(
            catalog.lookup("Ecophon Solo Raft 2.4x1.2m at 1000mm ODS", 1000),
            5.50
        );
    }

    #[test]
    fn test_egg_cartons_key_has_trailing_space() {
        let catalog = builtin_catalog();
        assert!(catalog.contains("Egg cartons directly on wall "));
        assert!(!catalog.contains("Egg cartons directly on wall"));
    }
}
