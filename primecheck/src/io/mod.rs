//! I/O helpers for primecheck commands.

pub mod config;
