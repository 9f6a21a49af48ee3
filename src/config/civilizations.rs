use crate::domain::Civilization;

/// Faction display metadata keyed by the AoE4World civilization key.
///
/// Flag values are asset references resolved by the presentation layer;
/// colors are the accent colors used to outline the flag.
#[derive(Debug, Clone)]
pub struct CivilizationConfig {
    pub key: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub color: &'static str,
    pub flag: &'static str,
}

impl CivilizationConfig {
    pub fn new(
        key: &'static str,
        name: &'static str,
        short_name: &'static str,
        color: &'static str,
        flag: &'static str,
    ) -> Self {
        Self {
            key,
            name,
            short_name,
            color,
            flag,
        }
    }
}

/// Get the list of known civilizations
pub fn get_civilizations() -> Vec<CivilizationConfig> {
    vec![
        CivilizationConfig::new("abbasid_dynasty", "Abbasid Dynasty", "Abbasid", "#3B3E41", "flags/ab.png"),
        CivilizationConfig::new("delhi_sultanate", "Delhi Sultanate", "Delhi", "#29A362", "flags/de.png"),
        CivilizationConfig::new("chinese", "Chinese", "Chinese", "#DA593B", "flags/ch.png"),
        CivilizationConfig::new("english", "English", "English", "#C3D1DF", "flags/en.png"),
        CivilizationConfig::new("french", "French", "French", "#2CA5EA", "flags/fr.png"),
        CivilizationConfig::new("holy_roman_empire", "Holy Roman Empire", "HRE", "#EFDA5C", "flags/hr.png"),
        CivilizationConfig::new("malians", "Malians", "Malians", "#D61D60", "flags/ma.png"),
        CivilizationConfig::new("mongols", "Mongols", "Mongols", "#6EC9FF", "flags/mo.png"),
        CivilizationConfig::new("ottomans", "Ottomans", "Ottomans", "#2F6C4D", "flags/ot.png"),
        CivilizationConfig::new("rus", "Rus", "Rus", "#F74C43", "flags/ru.png"),
    ]
}

/// Resolve a civilization key to its display metadata.
///
/// Total over all inputs: an unknown key degrades to a placeholder carrying
/// the original key, it is never an error.
pub fn resolve_civilization(key: &str) -> Civilization {
    match get_civilizations().into_iter().find(|c| c.key == key) {
        Some(config) => Civilization {
            name: config.name.to_string(),
            short_name: config.short_name.to_string(),
            flag: Some(config.flag.to_string()),
            color: config.color.to_string(),
            key: config.key.to_string(),
        },
        None => Civilization {
            name: "Unknown Civilization".to_string(),
            short_name: "Unknown".to_string(),
            flag: None,
            color: "#000000".to_string(),
            key: key.to_string(),
        },
    }
}
