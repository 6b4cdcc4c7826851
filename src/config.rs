use crate::error::*;
use crate::slot_grid::*;
use crate::time_domain::*;
use ::serde::*;
use log::*;
use ron::ser::PrettyConfig;
use std::collections::BTreeSet;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

const DEFAULT_START_HOUR: u32 = 7;
// Last row is 9PM; the 9:30PM half-row is not drawn
const DEFAULT_END_HOUR: u32 = 22;

/// Which part of the week the timetable shows.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    /// Exclusive.
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
    #[serde(default)]
    pub skip_hours: BTreeSet<u32>,
    #[serde(default = "default_days")]
    pub days: Vec<DayCode>,
}

fn default_start_hour() -> u32 {
    DEFAULT_START_HOUR
}

fn default_end_hour() -> u32 {
    DEFAULT_END_HOUR
}

fn default_days() -> Vec<DayCode> {
    DayCode::ALL.to_vec()
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            skip_hours: BTreeSet::new(),
            days: default_days(),
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<()> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(TimetableError::InvalidWindow {
                start_hour: self.start_hour,
                end_hour: self.end_hour,
            });
        }

        if self.days.is_empty() {
            return Err(TimetableError::EmptyDays);
        }

        Ok(())
    }

    pub fn slots(&self) -> Vec<SlotGroup> {
        generate_slots(self.start_hour, self.end_hour, &self.skip_hours)
    }
}

/// Reads a RON grid config. A missing file gives the default window.
pub fn load_config(path: &Path) -> Result<GridConfig> {
    let file = OpenOptions::new().read(true).open(path);

    let mut file = match file {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("No grid config at {}, using the default window", path.display());
            return Ok(GridConfig::default());
        }
        Err(e) => return Err(e.into()),
    };

    let mut data = String::new();
    file.read_to_string(&mut data)?;

    let config: GridConfig = ron::from_str(&data)?;
    config.validate()?;

    info!(
        "Loaded grid config: hours {}..{}, {} day(s)",
        config.start_hour,
        config.end_hour,
        config.days.len()
    );

    Ok(config)
}

pub fn save_config(path: &Path, config: &GridConfig) -> Result<()> {
    let mut writer = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let serialized_output = ron::ser::to_string_pretty(config, PrettyConfig::default())?;

    writer.write_all(serialized_output.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_is_reference_window() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());

        let slots = config.slots();
        assert_eq!(slots.len(), 15);
        assert_eq!(slots[0].get_label(), "7:00AM");
        assert_eq!(slots[slots.len() - 1].get_label(), "9:00PM");
        assert_eq!(config.days.len(), 6);
    }

    #[test]
    fn test_validate() {
        let mut config = GridConfig::default();
        config.end_hour = 7;
        assert!(matches!(
            config.validate(),
            Err(TimetableError::InvalidWindow { start_hour: 7, end_hour: 7 })
        ));

        config.end_hour = 25;
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.days.clear();
        assert!(matches!(config.validate(), Err(TimetableError::EmptyDays)));
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config: GridConfig = ron::from_str("(start_hour: 8, skip_hours: [12])").unwrap();
        assert_eq!(config.start_hour, 8);
        assert_eq!(config.end_hour, 22);
        assert_eq!(config.days, DayCode::ALL.to_vec());

        let hours: Vec<u16> = config.slots().iter().map(|s| s.get_hour()).collect();
        assert!(!hours.contains(&12));
        assert_eq!(hours.len(), 13);
    }

    #[test]
    fn test_ron_days() {
        let config: GridConfig = ron::from_str("(days: [Mon, Wed, Fri])").unwrap();
        assert_eq!(config.days, vec![DayCode::Mon, DayCode::Wed, DayCode::Fri]);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let path = env::temp_dir().join("timetable-grid-no-such-config.ron");
        assert_eq!(load_config(&path).unwrap(), GridConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = env::temp_dir().join(format!("timetable-grid-config-{}.ron", std::process::id()));

        let mut config = GridConfig::default();
        config.start_hour = 8;
        config.skip_hours.insert(12);
        config.days = vec![DayCode::Tue, DayCode::Thu];

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config_file() {
        let path = env::temp_dir().join(format!("timetable-grid-bad-{}.ron", std::process::id()));
        std::fs::write(&path, "(start_hour: 20, end_hour: 8)").unwrap();

        let result = load_config(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(TimetableError::InvalidWindow { .. })));
    }
}
