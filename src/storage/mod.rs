// src/storage/mod.rs
pub mod catalog;
