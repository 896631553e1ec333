//! Command handlers

use std::path::PathBuf;

use crate::cli::{Cli, Commands, ExportFormat, OutputFormat};
use crate::config::Config;
use crate::constants::FREQUENCY_BANDS;
use crate::domain::model::{RaftSpec, RoomGeometry, SurfaceSpec};
use crate::domain::service::reverb_calculator::compute;
use crate::error::{Error, Result};
use crate::export::{export_to_excel, read_history_csv_from_path, write_history_csv_to_path};
use crate::output::{output_history, output_materials, output_result};
use crate::store::ResultHistory;
use crate::types::CalculationInput;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Compute {
            length,
            width,
            height,
            ceiling_main,
            ceiling_add,
            ceiling_add_area,
            walls_main,
            walls_add,
            walls_add_area,
            floor_main,
            floor_add,
            floor_add_area,
            raft,
            raft_count,
            save,
        } => {
            let input = CalculationInput {
                room: RoomGeometry::new(*length, *width, *height),
                ceiling: SurfaceSpec::new(
                    ceiling_main.clone(),
                    ceiling_add.clone(),
                    *ceiling_add_area,
                ),
                walls: SurfaceSpec::new(walls_main.clone(), walls_add.clone(), *walls_add_area),
                floor: SurfaceSpec::new(floor_main.clone(), floor_add.clone(), *floor_add_area),
                raft: RaftSpec::new(raft.clone(), *raft_count),
            };
            cmd_compute(&cli, &config, input, save.clone(), output_format)
        }

        Commands::History {
            results,
            limit,
            remove,
            remove_last,
            clear,
        } => cmd_history(
            &cli,
            &config,
            results.clone(),
            *limit,
            remove.clone(),
            *remove_last,
            *clear,
            output_format,
        ),

        Commands::Export {
            results,
            output,
            format_out,
        } => cmd_export(&cli, &config, results.clone(), output.clone(), *format_out),

        Commands::Import { file, results } => {
            cmd_import(&cli, &config, file.clone(), results.clone())
        }

        Commands::Materials { band, name } => {
            cmd_materials(&config, *band, name.as_deref(), output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_materials_file,
            clear_materials_file,
            set_results_file,
            clear_results_file,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            set_materials_file.clone(),
            *clear_materials_file,
            set_results_file.clone(),
            *clear_results_file,
            *reset,
        ),
    }
}

fn cmd_compute(
    cli: &Cli,
    config: &Config,
    input: CalculationInput,
    save: Option<Option<PathBuf>>,
    output_format: OutputFormat,
) -> Result<()> {
    validate_input(&input)?;

    let catalog = config.material_catalog()?;
    if cli.verbose {
        eprintln!("Catalog holds {} materials", catalog.len());
        let names = [
            &input.ceiling.main_material,
            &input.ceiling.add_material,
            &input.walls.main_material,
            &input.walls.add_material,
            &input.floor.main_material,
            &input.floor.add_material,
            &input.raft.material,
        ];
        for name in names {
            if !catalog.contains(name) {
                eprintln!("Unknown material, contributes nothing: {}", name);
            }
        }
    }

    let result = compute(&input, &catalog);
    output_result(output_format, &result)?;

    if let Some(save) = save {
        let path = match save {
            Some(path) => path,
            None => config.results_path()?,
        };
        let mut history = ResultHistory::load_from(&path)?;
        history.push(result);
        history.save_to(&path)?;

        // Keep stdout machine-readable in json mode
        if output_format == OutputFormat::Json {
            eprintln!("Saved to: {}", path.display());
        } else {
            println!("\nSaved to: {}", path.display());
        }
    }

    Ok(())
}

fn cmd_history(
    cli: &Cli,
    config: &Config,
    results: Option<PathBuf>,
    limit: usize,
    remove: Vec<usize>,
    remove_last: bool,
    clear: bool,
    output_format: OutputFormat,
) -> Result<()> {
    let path = resolve_results_path(config, results)?;
    let mut history = ResultHistory::load_from(&path)?;

    let mutating = !remove.is_empty() || remove_last || clear;
    if !mutating {
        return output_history(output_format, history.entries(), limit);
    }

    if clear {
        let removed = history.len();
        history.clear();
        println!("Removed all {} entries", removed);
    } else if remove_last {
        match history.remove_last() {
            Some(entry) => println!(
                "Removed result from {}",
                entry.computed_at.format("%Y-%m-%d %H:%M")
            ),
            None => println!("History is already empty"),
        }
    } else {
        let indices = positions_to_indices(&remove, history.len())?;
        let removed = history.remove_selected(&indices);
        println!("Removed {} entries", removed);
    }

    history.save_to(&path)?;
    if cli.verbose {
        eprintln!("History saved to {}", path.display());
    }

    Ok(())
}

fn cmd_export(
    cli: &Cli,
    config: &Config,
    results: Option<PathBuf>,
    output: Option<PathBuf>,
    format_out: ExportFormat,
) -> Result<()> {
    let results_path = resolve_results_path(config, results)?;
    if !results_path.exists() {
        return Err(Error::FileNotFound(results_path.display().to_string()));
    }
    let history = ResultHistory::load_from(&results_path)?;

    let extension = match format_out {
        ExportFormat::Csv => "csv",
        ExportFormat::Xlsx => "xlsx",
    };
    let output_path = output.unwrap_or_else(|| results_path.with_extension(extension));

    match format_out {
        ExportFormat::Csv => write_history_csv_to_path(&output_path, history.entries())?,
        ExportFormat::Xlsx => export_to_excel(history.entries(), &output_path)?,
    }

    if cli.verbose {
        eprintln!("Exported {} entries", history.len());
    }
    println!("Exported to: {}", output_path.display());

    Ok(())
}

fn cmd_import(cli: &Cli, config: &Config, file: PathBuf, results: Option<PathBuf>) -> Result<()> {
    let entries = read_history_csv_from_path(&file)?;
    let count = entries.len();

    let path = resolve_results_path(config, results)?;
    let mut history = ResultHistory::load_from(&path)?;
    for entry in entries {
        history.push(entry);
    }
    history.save_to(&path)?;

    if cli.verbose {
        eprintln!("History now holds {} entries", history.len());
    }
    println!("Imported {} results into {}", count, path.display());

    Ok(())
}

fn cmd_materials(
    config: &Config,
    band: Option<u32>,
    name: Option<&str>,
    output_format: OutputFormat,
) -> Result<()> {
    if let Some(band) = band {
        if !FREQUENCY_BANDS.contains(&band) {
            let known: Vec<String> = FREQUENCY_BANDS.iter().map(|b| b.to_string()).collect();
            return Err(Error::InvalidInput(format!(
                "Unknown band: {} Hz (expected one of {})",
                band,
                known.join(", ")
            )));
        }
    }

    let catalog = config.material_catalog()?;
    output_materials(output_format, &catalog, band, name)
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_materials_file: Option<PathBuf>,
    clear_materials_file: bool,
    set_results_file: Option<PathBuf>,
    clear_results_file: bool,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_materials_file {
        config.materials_file = Some(path);
        modified = true;
    }

    if clear_materials_file {
        config.materials_file = None;
        modified = true;
    }

    if let Some(path) = set_results_file {
        config.results_file = Some(path);
        modified = true;
    }

    if clear_results_file {
        config.results_file = None;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

fn resolve_results_path(config: &Config, explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => config.results_path(),
    }
}

/// Check the numeric inputs the engine itself does not validate
fn validate_input(input: &CalculationInput) -> Result<()> {
    let room = &input.room;
    let fields = [
        ("length", room.length),
        ("width", room.width),
        ("height", room.height),
        ("ceiling add area", input.ceiling.add_area),
        ("walls add area", input.walls.add_area),
        ("floor add area", input.floor.add_area),
    ];
    for (label, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidInput(format!(
                "{} must be a non-negative number, got {}",
                label, value
            )));
        }
    }
    Ok(())
}

/// Turn 1-based CLI positions into history indices, rejecting bad ones
fn positions_to_indices(positions: &[usize], len: usize) -> Result<Vec<usize>> {
    let mut indices = Vec::with_capacity(positions.len());
    for &position in positions {
        if position == 0 || position > len {
            return Err(Error::PositionOutOfRange { position, len });
        }
        indices.push(position - 1);
    }
    Ok(indices)
}
