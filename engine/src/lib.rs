// Engine library root
// This file declares the modules for the engine crate.

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod services;
