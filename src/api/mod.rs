pub mod client;
pub mod models;

pub use client::Aoe4WorldClient;
