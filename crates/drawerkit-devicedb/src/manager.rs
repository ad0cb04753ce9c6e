//! Printer profile manager.
//!
//! Holds the built-in presets plus user-defined custom profiles, and
//! persists the custom set to a JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use drawerkit_core::GridSpec;

use crate::error::{DeviceError, DeviceResult};
use crate::model::{preset_names, PrinterProfile};

/// Manages printer profiles, presets and custom alike.
#[derive(Debug, Clone, Default)]
pub struct PrinterManager {
    custom: BTreeMap<String, PrinterProfile>,
}

impl PrinterManager {
    /// Create a manager with no custom profiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a profile by preset key or custom profile id.
    pub fn get(&self, key: &str) -> DeviceResult<PrinterProfile> {
        if let Ok(preset) = PrinterProfile::from_preset(key) {
            return Ok(preset);
        }
        self.custom
            .get(key)
            .cloned()
            .ok_or_else(|| DeviceError::ProfileNotFound(key.to_string()))
    }

    /// Register a custom profile and return it.
    pub fn add_custom(
        &mut self,
        name: &str,
        max_width_mm: f64,
        max_depth_mm: f64,
        grid: &GridSpec,
    ) -> DeviceResult<PrinterProfile> {
        if self.custom.values().any(|p| p.name == name) {
            return Err(DeviceError::ProfileAlreadyExists(name.to_string()));
        }
        let profile = PrinterProfile::custom(name, max_width_mm, max_depth_mm, grid)?;
        debug!(id = %profile.id, name = %profile.name, "registered custom printer profile");
        self.custom.insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    /// Remove a custom profile by id.
    pub fn remove_custom(&mut self, id: &str) -> DeviceResult<()> {
        self.custom
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DeviceError::ProfileNotFound(id.to_string()))
    }

    /// All built-in presets, sorted by key.
    pub fn presets(&self) -> Vec<PrinterProfile> {
        preset_names()
            .iter()
            .map(|key| {
                PrinterProfile::from_preset(key).expect("preset_names only yields valid keys")
            })
            .collect()
    }

    /// All custom profiles, sorted by id.
    pub fn custom_profiles(&self) -> Vec<&PrinterProfile> {
        self.custom.values().collect()
    }

    /// Load custom profiles from a JSON file, replacing the current set.
    pub fn load_from_file(&mut self, path: &Path) -> DeviceResult<()> {
        let contents = fs::read_to_string(path)?;
        let profiles: Vec<PrinterProfile> = serde_json::from_str(&contents)?;
        self.custom = profiles.into_iter().map(|p| (p.id.clone(), p)).collect();
        info!(path = %path.display(), count = self.custom.len(), "loaded custom printer profiles");
        Ok(())
    }

    /// Save custom profiles to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> DeviceResult<()> {
        let profiles: Vec<&PrinterProfile> = self.custom.values().collect();
        let contents = serde_json::to_string_pretty(&profiles)?;
        fs::write(path, contents)?;
        info!(path = %path.display(), count = profiles.len(), "saved custom printer profiles");
        Ok(())
    }
}
