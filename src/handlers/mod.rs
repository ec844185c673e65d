// src/handlers/mod.rs
pub mod tags;
