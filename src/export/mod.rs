//! Tabular export of calculation results

pub mod csv;
pub mod excel;

pub use csv::{
    read_history_csv, read_history_csv_from_path, write_history_csv, write_history_csv_to_path,
};
pub use excel::export_to_excel;
