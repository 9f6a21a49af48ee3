#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://aoe4world.com/api/v0",
            user_agent: "Aoe4Overlay/0.1",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OverlaySettings {
    /// Seconds between background refreshes of the last game
    pub sync_interval_secs: u64,
    /// A game that started longer ago than this is no longer shown
    pub today_window_hours: i64,
    /// Cosmetic theme name handed through to the presentation layer
    pub theme: Option<String>,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            sync_interval_secs: 30,
            today_window_hours: 6,
            theme: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub overlay: OverlaySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            overlay: OverlaySettings::default(),
        }
    }
}
