//! Output formatting module

use std::collections::BTreeMap;

use crate::cli::OutputFormat;
use crate::constants::FREQUENCY_BANDS;
use crate::domain::model::{MaterialCatalog, RaftSpec, SurfaceSpec};
use crate::error::{Error, Result};
use crate::types::CalculationResult;

/// Print one estimate in the requested format
pub fn output_result(output_format: OutputFormat, result: &CalculationResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        let input = &result.input;
        let room = &input.room;

        println!("\nReverberation Estimate");
        println!("======================");
        println!(
            "Room:     {} x {} x {} m",
            room.length, room.width, room.height
        );
        println!("Volume:   {:.2} m³", room.volume());
        println!("Ceiling:  {}", surface_label(&input.ceiling));
        println!("Walls:    {}", surface_label(&input.walls));
        println!("Floor:    {}", surface_label(&input.floor));
        println!("Rafts:    {}", raft_label(&input.raft));

        println!("\nEstimated T60:");
        for band in FREQUENCY_BANDS {
            println!("  {:>4} Hz            {:.2} s", band, result.t60_at(band));
        }
        println!("  TMF (500-2000 Hz)  {:.2} s", result.tmf);
    }

    Ok(())
}

/// Print a history listing, most recent entries last
///
/// Positions are 1-based over the whole history so they line up with
/// `history --remove` even when the listing is truncated.
pub fn output_history(
    output_format: OutputFormat,
    entries: &[CalculationResult],
    limit: usize,
) -> Result<()> {
    let total = entries.len();
    let start = total.saturating_sub(limit);

    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&entries[start..])?;
        println!("{}", content);
        return Ok(());
    }

    if total == 0 {
        println!("No saved results");
        return Ok(());
    }

    if start > 0 {
        println!("Saved results (last {} of {}):", total - start, total);
    } else {
        println!("Saved results ({}):", total);
    }
    for (idx, entry) in entries.iter().enumerate().skip(start) {
        let room = &entry.input.room;
        println!(
            "{:>4}. {}  {} x {} x {} m  TMF {:.2} s",
            idx + 1,
            entry.computed_at.format("%Y-%m-%d %H:%M"),
            room.length,
            room.width,
            room.height,
            entry.tmf
        );
    }

    Ok(())
}

/// Print the material catalog, optionally restricted to one band or name
pub fn output_materials(
    output_format: OutputFormat,
    catalog: &MaterialCatalog,
    band: Option<u32>,
    name: Option<&str>,
) -> Result<()> {
    if let Some(name) = name {
        let material = catalog
            .get(name)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown material: {}", name)))?;

        if output_format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(material)?);
        } else {
            println!("{}", material.name);
            for band in FREQUENCY_BANDS {
                println!("  {:>4} Hz  {:.2}", band, material.absorption_at(band));
            }
        }
        return Ok(());
    }

    if let Some(band) = band {
        if output_format == OutputFormat::Json {
            let values: BTreeMap<String, f64> = catalog
                .names()
                .into_iter()
                .map(|name| (name.to_string(), catalog.lookup(name, band)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&values)?);
        } else {
            println!("{:<48} {:>4} Hz", "Material", band);
            for name in catalog.names() {
                println!("{:<48} {:>7.2}", name, catalog.lookup(name, band));
            }
        }
        return Ok(());
    }

    if output_format == OutputFormat::Json {
        let materials: Vec<_> = catalog
            .names()
            .into_iter()
            .filter_map(|name| catalog.get(name))
            .collect();
        println!("{}", serde_json::to_string_pretty(&materials)?);
    } else {
        print!("{:<48}", "Material");
        for band in FREQUENCY_BANDS {
            print!(" {:>6}", band);
        }
        println!();
        for name in catalog.names() {
            print!("{:<48}", name);
            for band in FREQUENCY_BANDS {
                print!(" {:>6.2}", catalog.lookup(name, band));
            }
            println!();
        }
    }

    Ok(())
}

fn surface_label(surface: &SurfaceSpec) -> String {
    if surface.add_area > 0.0 {
        format!(
            "{} + {} m² {}",
            surface.main_material, surface.add_area, surface.add_material
        )
    } else {
        surface.main_material.clone()
    }
}

fn raft_label(raft: &RaftSpec) -> String {
    if raft.count == 0 {
        "none".to_string()
    } else {
        format!("{} x {}", raft.count, raft.material)
    }
}
