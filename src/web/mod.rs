// src/web/mod.rs
pub mod admin_handlers;
pub mod page_handlers;
pub mod routes;
pub mod upload_handlers;
