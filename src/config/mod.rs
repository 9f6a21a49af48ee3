pub mod civilizations;
pub mod settings;

pub use civilizations::{get_civilizations, resolve_civilization};
pub use settings::AppConfig;
