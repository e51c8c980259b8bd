//! Data model shared by the enrollment flow and the HTTP clients.

pub mod dtos;
pub mod structs;
