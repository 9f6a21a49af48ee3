pub mod structs;

pub use structs::{GameCache, Previous};
