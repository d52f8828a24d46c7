//! Building registry
//!
//! Static table mapping a building id to the content shown in the info panel.
//! The table ships inside the binary as RON; a file named by
//! `PORTFOLIO_BUILDINGS` replaces it at startup.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use bevy::color::{Color, Srgba};
use bevy::prelude::*;
use serde::Deserialize;

/// Compiled-in building table.
pub const EMBEDDED_TABLE: &str = include_str!("../../../assets/buildings.ron");

/// Environment variable naming a RON file that overrides the embedded table.
pub const OVERRIDE_ENV: &str = "PORTFOLIO_BUILDINGS";

/// Key of one clickable building, e.g. `"AWS"` or `"NAVER Cloud"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct BuildingId(String);

impl BuildingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BuildingId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BuildingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
}

/// Display record for one building.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BuildingRecord {
    pub id: BuildingId,
    pub title: String,
    /// `#rrggbb`; tints the panel divider and the building body.
    pub accent_color: String,
    pub summary: String,
    /// Display order is table order.
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
}

impl BuildingRecord {
    /// Accent as a Bevy color. Validated at load, so the fallback is never hit
    /// for records that came through [`BuildingRegistry::from_ron_str`].
    pub fn accent(&self) -> Color {
        Srgba::hex(&self.accent_color)
            .map(Color::Srgba)
            .unwrap_or(Color::WHITE)
    }

    /// Accent as 8-bit sRGB, for egui.
    pub fn accent_rgb(&self) -> [u8; 3] {
        let c = Srgba::hex(&self.accent_color).unwrap_or(Srgba::WHITE);
        [
            (c.red * 255.0).round() as u8,
            (c.green * 255.0).round() as u8,
            (c.blue * 255.0).round() as u8,
        ]
    }
}

/// Error type for registry loading
#[derive(Debug)]
pub enum RegistryError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    DuplicateId(String),
    Invalid { id: String, reason: String },
}

impl From<std::io::Error> for RegistryError {
    fn from(e: std::io::Error) -> Self {
        RegistryError::Io(e)
    }
}

impl From<ron::error::SpannedError> for RegistryError {
    fn from(e: ron::error::SpannedError) -> Self {
        RegistryError::Parse(e)
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Io(e) => write!(f, "IO error: {}", e),
            RegistryError::Parse(e) => write!(f, "Parse error: {}", e),
            RegistryError::DuplicateId(id) => write!(f, "Duplicate building id: {:?}", id),
            RegistryError::Invalid { id, reason } => {
                write!(f, "Invalid building {:?}: {}", id, reason)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Read-only after startup.
#[derive(Resource, Debug, Default)]
pub struct BuildingRegistry {
    records: Vec<BuildingRecord>,
    index: HashMap<BuildingId, usize>,
}

impl BuildingRegistry {
    pub fn from_records(records: Vec<BuildingRecord>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            validate_record(record)?;
            if index.insert(record.id.clone(), i).is_some() {
                return Err(RegistryError::DuplicateId(record.id.to_string()));
            }
        }
        Ok(Self { records, index })
    }

    pub fn from_ron_str(source: &str) -> Result<Self, RegistryError> {
        let records: Vec<BuildingRecord> = ron::from_str(source)?;
        Self::from_records(records)
    }

    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let source = fs::read_to_string(path)?;
        Self::from_ron_str(&source)
    }

    pub fn embedded() -> Result<Self, RegistryError> {
        Self::from_ron_str(EMBEDDED_TABLE)
    }

    /// Builds the registry, preferring `override_path` when given. A broken
    /// override is logged and the embedded table is used instead.
    pub fn load(override_path: Option<&Path>) -> Result<Self, RegistryError> {
        if let Some(path) = override_path {
            match Self::from_file(path) {
                Ok(registry) => {
                    info!(
                        "Loaded {} buildings from {}",
                        registry.len(),
                        path.display()
                    );
                    return Ok(registry);
                }
                Err(e) => {
                    warn!(
                        "Ignoring building table {}: {}; using embedded table",
                        path.display(),
                        e
                    );
                }
            }
        }
        Self::embedded()
    }

    /// Soft miss on unknown ids.
    pub fn lookup(&self, id: &str) -> Option<&BuildingRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildingRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// `Srgba::hex` also takes short and alpha forms; the table only allows `#rrggbb`.
fn is_rrggbb(color: &str) -> bool {
    color.len() == 7 && color.starts_with('#') && Srgba::hex(color).is_ok()
}

fn validate_record(record: &BuildingRecord) -> Result<(), RegistryError> {
    let invalid = |reason: &str| RegistryError::Invalid {
        id: record.id.to_string(),
        reason: reason.to_string(),
    };
    if record.id.as_str().trim().is_empty() {
        return Err(invalid("empty id"));
    }
    if record.title.trim().is_empty() {
        return Err(invalid("empty title"));
    }
    if !is_rrggbb(&record.accent_color) {
        return Err(invalid(&format!(
            "accent color {:?} is not #rrggbb",
            record.accent_color
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 5] = ["Main", "AWS", "Kubernetes", "NAVER Cloud", "KT Cloud"];

    fn record(id: &str, color: &str) -> BuildingRecord {
        BuildingRecord {
            id: id.into(),
            title: format!("{} title", id),
            accent_color: color.to_string(),
            summary: String::new(),
            projects: Vec::new(),
            skills: Vec::new(),
        }
    }

    #[test]
    fn embedded_table_loads_all_buildings() {
        let registry = BuildingRegistry::embedded().expect("embedded table parses");
        assert_eq!(registry.len(), IDS.len());
        for id in IDS {
            let record = registry.lookup(id).expect("known id");
            assert_eq!(record.id.as_str(), id);
        }
    }

    #[test]
    fn lookup_aws_returns_its_title() {
        let registry = BuildingRegistry::embedded().unwrap();
        let aws = registry.lookup("AWS").unwrap();
        assert_eq!(aws.title, "AWS Cloud Solutions");
        assert_eq!(aws.accent_rgb(), [0xff, 0x99, 0x00]);
        assert_eq!(aws.projects[0].title, "E-commerce Platform Migration");
        assert_eq!(aws.skills.first().map(String::as_str), Some("EC2"));
    }

    #[test]
    fn unknown_id_is_a_soft_miss() {
        let registry = BuildingRegistry::embedded().unwrap();
        assert!(registry.lookup("Azure").is_none());
        assert!(registry.lookup("aws").is_none());
        assert!(!registry.contains(""));
    }

    #[test]
    fn iteration_keeps_table_order() {
        let registry = BuildingRegistry::embedded().unwrap();
        let ids: Vec<&str> = registry.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, IDS);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = BuildingRegistry::from_records(vec![
            record("AWS", "#ff9900"),
            record("AWS", "#000000"),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(ref id) if id == "AWS"));
    }

    #[test]
    fn bad_accent_color_is_rejected() {
        let err = BuildingRegistry::from_records(vec![record("AWS", "orange")]).unwrap_err();
        assert!(matches!(err, RegistryError::Invalid { .. }));
        assert!(err.to_string().contains("orange"));
    }

    #[test]
    fn only_six_digit_hex_colors_pass() {
        for color in ["#fff", "ff9900", "#ffff", "#ff9900cc"] {
            let result = BuildingRegistry::from_records(vec![record("AWS", color)]);
            assert!(
                matches!(result, Err(RegistryError::Invalid { .. })),
                "{color} accepted"
            );
        }
        assert!(BuildingRegistry::from_records(vec![record("AWS", "#FF9900")]).is_ok());
    }

    #[test]
    fn malformed_ron_reports_parse_error() {
        let err = BuildingRegistry::from_ron_str("[ (id: \"AWS\" ").unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));
    }

    #[test]
    fn missing_override_falls_back_to_embedded() {
        let registry =
            BuildingRegistry::load(Some(Path::new("/nonexistent/buildings.ron"))).unwrap();
        assert!(registry.contains("Main"));
    }
}
