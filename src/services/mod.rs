// src/services/mod.rs
pub mod admin_service;
pub mod analysis_service;
pub mod backend_client;
