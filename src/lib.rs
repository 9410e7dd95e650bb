pub mod config;
pub mod download;
pub mod error;
pub mod index;
pub mod version;
