//! In-memory history of calculation results
//!
//! The history is a plain insertion-ordered list owned by the caller.
//! Persistence is explicit: `load_from` and `save_to` move the whole
//! history through a JSON file and nothing touches disk otherwise.
//! One session owns a history at a time; callers sharing one across
//! threads must serialize mutation themselves.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::Result;
use crate::types::CalculationResult;

/// Ordered collection of past calculation results
#[derive(Debug, Clone, Default)]
pub struct ResultHistory {
    entries: Vec<CalculationResult>,
}

impl ResultHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a history from a JSON file, empty when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let entries: Vec<CalculationResult> = serde_json::from_reader(reader)?;
        Ok(Self { entries })
    }

    /// Write the history to a JSON file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.entries)?;
        Ok(())
    }

    /// Append a result, keeping insertion order
    pub fn push(&mut self, result: CalculationResult) {
        self.entries.push(result);
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[CalculationResult] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CalculationResult> {
        self.entries.get(index)
    }

    /// Remove and return the entry at a zero-based index
    pub fn remove(&mut self, index: usize) -> Option<CalculationResult> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Remove the entries at the given zero-based indices
    ///
    /// Out-of-range indices are ignored. Returns how many entries were
    /// actually removed.
    pub fn remove_selected(&mut self, indices: &[usize]) -> usize {
        let selected: HashSet<usize> = indices.iter().copied().collect();
        let before = self.entries.len();
        let mut position = 0;
        self.entries.retain(|_| {
            let keep = !selected.contains(&position);
            position += 1;
            keep
        });
        before - self.entries.len()
    }

    /// Remove and return the most recent entry
    pub fn remove_last(&mut self) -> Option<CalculationResult> {
        self.entries.pop()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<CalculationResult> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::builtin_catalog;
    use crate::domain::model::SurfaceSpec;
    use crate::domain::service::reverb_calculator::compute;
    use crate::types::CalculationInput;

    fn sample_result(ceiling_material: &str) -> CalculationResult {
        let input = CalculationInput {
            ceiling: SurfaceSpec::uniform(ceiling_material),
            ..Default::default()
        };
        compute(&input, builtin_catalog())
    }

    #[test]
    fn test_push_preserves_order() {
        let mut history = ResultHistory::new();
        history.push(sample_result("Class A"));
        history.push(sample_result("Class B"));
        history.push(sample_result("Class C"));
        let mains: Vec<&str> = history
            .entries()
            .iter()
            .map(|r| r.input.ceiling.main_material.as_str())
            .collect();
        assert_eq!(mains, vec!["Class A", "Class B", "Class C"]);
    }

    #[test]
    fn test_remove_selected() {
        let mut history = ResultHistory::new();
        history.push(sample_result("Class A"));
        history.push(sample_result("Class B"));
        history.push(sample_result("Class C"));

        let removed = history.remove_selected(&[0, 2]);
        assert_eq!(removed, 2);
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).unwrap().input.ceiling.main_material, "Class B");
    }

    #[test]
    fn test_remove_single_index() {
        let mut history = ResultHistory::new();
        history.push(sample_result("Class A"));
        history.push(sample_result("Class B"));

        let removed = history.remove(0).unwrap();
        assert_eq!(removed.input.ceiling.main_material, "Class A");
        assert_eq!(history.len(), 1);
        assert!(history.remove(5).is_none());
    }

    #[test]
    fn test_remove_selected_ignores_out_of_range() {
        let mut history = ResultHistory::new();
        history.push(sample_result("Class A"));
        let removed = history.remove_selected(&[5, 7]);
        assert_eq!(removed, 0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_remove_selected_empty_selection() {
        let mut history = ResultHistory::new();
        history.push(sample_result("Class A"));
        assert_eq!(history.remove_selected(&[]), 0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_remove_last() {
        let mut history = ResultHistory::new();
        history.push(sample_result("Class A"));
        history.push(sample_result("Class B"));

        let last = history.remove_last().unwrap();
        assert_eq!(last.input.ceiling.main_material, "Class B");
        assert_eq!(history.len(), 1);
        assert!(ResultHistory::new().remove_last().is_none());
    }

    #[test]
    fn test_clear() {
        let mut history = ResultHistory::new();
        history.push(sample_result("Class A"));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = ResultHistory::load_from(&dir.path().join("results.json")).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let mut history = ResultHistory::new();
        history.push(sample_result("Class A"));
        history.push(sample_result("Class D"));
        history.save_to(&path).unwrap();

        let loaded = ResultHistory::load_from(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get(0).unwrap().id, history.get(0).unwrap().id);
        assert_eq!(
            loaded.get(1).unwrap().input.ceiling.main_material,
            "Class D"
        );
        assert_eq!(loaded.get(0).unwrap().tmf, history.get(0).unwrap().tmf);

        let entries = loaded.into_entries();
        assert_eq!(entries.len(), 2);
    }
}
