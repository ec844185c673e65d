// src/utils/mod.rs
pub mod cloud;
pub mod color;
pub mod links;
pub mod sort;
pub mod validation;
