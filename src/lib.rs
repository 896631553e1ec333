//! Reverb Estimator Library
//!
//! Octave-band reverberation time (T60) estimation for rectangular rooms
//! using Sabine's formula.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod export;
pub mod output;
pub mod store;
pub mod types;
