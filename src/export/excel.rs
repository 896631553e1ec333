//! Excel export functionality

use crate::constants::FREQUENCY_BANDS;
use crate::error::{Error, Result};
use crate::types::CalculationResult;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Export the result history to an Excel workbook
pub fn export_to_excel(entries: &[CalculationResult], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, entries)?;

    // Add details sheet
    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, entries)?;

    // Save workbook
    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, entries: &[CalculationResult]) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Header format
    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Reverberation Time Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Export Date:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, &chrono::Utc::now().to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(3, 0, "Total Results:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, entries.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .set_column_width(0, 16)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 28)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, entries: &[CalculationResult]) -> Result<()> {
    sheet
        .set_name("Details")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Header format
    let header_format = Format::new().set_bold();

    // Same columns as the CSV layout, plus the computation timestamp
    let mut headers = super::csv::columns();
    headers.push("Computed_At".to_string());

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // Write data
    for (row_idx, entry) in entries.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let input = &entry.input;

        sheet
            .write_number(row, 0, input.room.length)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, input.room.width)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, input.room.height)
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 3, &input.ceiling.main_material)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 4, &input.ceiling.add_material)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, input.ceiling.add_area)
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 6, &input.walls.main_material)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 7, &input.walls.add_material)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 8, input.walls.add_area)
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 9, &input.floor.main_material)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 10, &input.floor.add_material)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 11, input.floor.add_area)
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 12, &input.raft.material)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 13, f64::from(input.raft.count))
            .map_err(|e| Error::Excel(e.to_string()))?;

        for (band_idx, band) in FREQUENCY_BANDS.iter().enumerate() {
            sheet
                .write_number(row, (14 + band_idx) as u16, entry.t60_at(*band))
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
        sheet
            .write_number(row, 20, entry.tmf)
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 21, &entry.computed_at.to_rfc3339())
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // Auto-fit columns (approximate)
    for col in [3, 4, 6, 7, 9, 10, 12] {
        sheet
            .set_column_width(col, 30)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }
    sheet
        .set_column_width(21, 26)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
