pub mod catalog;
pub mod closet;
pub mod config;
pub mod error;
pub mod outfits;
pub mod telemetry;
