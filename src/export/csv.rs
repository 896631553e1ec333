//! CSV serialization of the result history
//!
//! One row per calculation result: the full input snapshot, the rounded
//! T60 per band and the TMF. Reading the same layout back reconstructs
//! equivalent results, so a written file round-trips.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::constants::FREQUENCY_BANDS;
use crate::domain::model::{RaftSpec, RoomGeometry, SurfaceSpec};
use crate::error::{Error, Result};
use crate::types::{CalculationInput, CalculationResult};

const INPUT_COLUMNS: [&str; 14] = [
    "Room_Length_m",
    "Room_Width_m",
    "Room_Height_m",
    "Ceiling_Main_Material",
    "Ceiling_Add_Material",
    "Ceiling_Add_Area_m2",
    "Walls_Main_Material",
    "Walls_Add_Material",
    "Walls_Add_Area_m2",
    "Floor_Main_Material",
    "Floor_Add_Material",
    "Floor_Add_Area_m2",
    "Raft_Material",
    "Number_of_Rafts",
];

/// Column names in file order
pub fn columns() -> Vec<String> {
    let mut columns: Vec<String> = INPUT_COLUMNS.iter().map(|c| c.to_string()).collect();
    for band in FREQUENCY_BANDS {
        columns.push(format!("T60_{}Hz", band));
    }
    columns.push("TMF".to_string());
    columns
}

/// Write the history as CSV, header row included even when empty
pub fn write_history_csv<W: Write>(writer: W, entries: &[CalculationResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(columns())?;
    for entry in entries {
        csv_writer.write_record(record_fields(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the history as a CSV file
pub fn write_history_csv_to_path(path: &Path, entries: &[CalculationResult]) -> Result<()> {
    let file = File::create(path)?;
    write_history_csv(file, entries)
}

fn record_fields(entry: &CalculationResult) -> Vec<String> {
    let input = &entry.input;
    let mut fields = vec![
        input.room.length.to_string(),
        input.room.width.to_string(),
        input.room.height.to_string(),
        input.ceiling.main_material.clone(),
        input.ceiling.add_material.clone(),
        input.ceiling.add_area.to_string(),
        input.walls.main_material.clone(),
        input.walls.add_material.clone(),
        input.walls.add_area.to_string(),
        input.floor.main_material.clone(),
        input.floor.add_material.clone(),
        input.floor.add_area.to_string(),
        input.raft.material.clone(),
        input.raft.count.to_string(),
    ];
    for band in FREQUENCY_BANDS {
        fields.push(entry.t60_at(band).to_string());
    }
    fields.push(entry.tmf.to_string());
    fields
}

/// Read a history back from CSV
///
/// Columns are matched by header name, so column order does not matter.
/// Each reconstructed result gets a fresh id and timestamp; the stored
/// T60 and TMF values are taken from the file as-is.
pub fn read_history_csv<R: Read>(reader: R) -> Result<Vec<CalculationResult>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let index = header_index(&headers)?;

    let mut entries = Vec::new();
    for (row_idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Header is row 1, so data rows start at 2
        let row_num = row_idx + 2;
        entries.push(parse_record(&record, &index, row_num)?);
    }
    Ok(entries)
}

/// Read a history from a CSV file
pub fn read_history_csv_from_path(path: &Path) -> Result<Vec<CalculationResult>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let file = File::open(path)?;
    read_history_csv(file)
}

fn header_index(headers: &csv::StringRecord) -> Result<HashMap<String, usize>> {
    let index: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), i))
        .collect();

    for column in columns() {
        if !index.contains_key(&column) {
            return Err(Error::InvalidInput(format!(
                "Missing required column: {}",
                column
            )));
        }
    }
    Ok(index)
}

fn parse_record(
    record: &csv::StringRecord,
    index: &HashMap<String, usize>,
    row_num: usize,
) -> Result<CalculationResult> {
    let text = |column: &str| -> String {
        index
            .get(column)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
            .to_string()
    };

    let input = CalculationInput {
        room: RoomGeometry::new(
            parse_f64(&text("Room_Length_m"), row_num, "Room_Length_m")?,
            parse_f64(&text("Room_Width_m"), row_num, "Room_Width_m")?,
            parse_f64(&text("Room_Height_m"), row_num, "Room_Height_m")?,
        ),
        ceiling: SurfaceSpec::new(
            text("Ceiling_Main_Material"),
            text("Ceiling_Add_Material"),
            parse_f64(&text("Ceiling_Add_Area_m2"), row_num, "Ceiling_Add_Area_m2")?,
        ),
        walls: SurfaceSpec::new(
            text("Walls_Main_Material"),
            text("Walls_Add_Material"),
            parse_f64(&text("Walls_Add_Area_m2"), row_num, "Walls_Add_Area_m2")?,
        ),
        floor: SurfaceSpec::new(
            text("Floor_Main_Material"),
            text("Floor_Add_Material"),
            parse_f64(&text("Floor_Add_Area_m2"), row_num, "Floor_Add_Area_m2")?,
        ),
        raft: RaftSpec::new(
            text("Raft_Material"),
            parse_u32(&text("Number_of_Rafts"), row_num, "Number_of_Rafts")?,
        ),
    };

    let mut t60 = std::collections::BTreeMap::new();
    for band in FREQUENCY_BANDS {
        let column = format!("T60_{}Hz", band);
        t60.insert(band, parse_f64(&text(&column), row_num, &column)?);
    }
    let tmf = parse_f64(&text("TMF"), row_num, "TMF")?;

    Ok(CalculationResult::new(input, t60, tmf))
}

fn parse_f64(s: &str, row: usize, column: &str) -> Result<f64> {
    let cleaned = s.trim();
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    cleaned.parse().map_err(|_| {
        Error::InvalidInput(format!(
            "Invalid number in row {}, column {}: {}",
            row, column, s
        ))
    })
}

fn parse_u32(s: &str, row: usize, column: &str) -> Result<u32> {
    let cleaned = s.trim();
    if cleaned.is_empty() {
        return Ok(0);
    }
    cleaned.parse().map_err(|_| {
        Error::InvalidInput(format!(
            "Invalid number in row {}, column {}: {}",
            row, column, s
        ))
    })
}
