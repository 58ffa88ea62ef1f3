// src/models/mod.rs
pub mod analysis;
pub mod user;
