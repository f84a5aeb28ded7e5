//! Command implementations for the recomb CLI

pub mod generate;
