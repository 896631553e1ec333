//! Domain services
//!
//! This module contains business logic services for the domain layer.

pub mod reverb_calculator;

pub use reverb_calculator::{
    band_absorption, compute, compute_for_bands, mid_frequency_average, round3, t60_sabine,
};
