//! Binding for the external theming/configuration collaborator.

use std::sync::{Mutex, RwLock};

use portal_core::model::{ThemeCapabilities, ThemeConfig, ThemeOverrides, edit_panel_values};
use tracing::debug;

type ThemeListener = Box<dyn Fn(&ThemeConfig) + Send + Sync>;

/// Holds the active theme configuration and fans out changes.
///
/// The collaborator pushes [`ThemeOverrides`]; observers receive the
/// resolved configuration (per-field fallback onto the defaults). For the
/// external editor it exposes the editable-field mapping and the capability
/// manifest.
pub struct ThemeService {
    active: RwLock<ThemeConfig>,
    listeners: Mutex<Vec<ThemeListener>>,
}

impl ThemeService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: RwLock::new(ThemeConfig::default()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// The resolved configuration currently in effect.
    #[must_use]
    pub fn active(&self) -> ThemeConfig {
        self.active
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Register a callback invoked with the active configuration whenever it
    /// changes.
    pub fn subscribe(&self, listener: impl Fn(&ThemeConfig) + Send + Sync + 'static) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(Box::new(listener));
        }
    }

    /// Apply a configuration pushed by the collaborator.
    pub fn apply(&self, overrides: &ThemeOverrides) {
        let resolved = overrides.resolve();
        debug!(title = %resolved.platform_title, "theme configuration applied");
        if let Ok(mut guard) = self.active.write() {
            *guard = resolved.clone();
        }
        if let Ok(listeners) = self.listeners.lock() {
            for listener in listeners.iter() {
                listener(&resolved);
            }
        }
    }

    /// Editable field names → current values, for the external edit panel.
    #[must_use]
    pub fn edit_panel_values(&self) -> Vec<(&'static str, String)> {
        edit_panel_values(&self.active())
    }

    /// Capability manifest: no surface is recolorable, borderable, or
    /// font-editable.
    #[must_use]
    pub fn capabilities(&self) -> ThemeCapabilities {
        ThemeCapabilities::default()
    }
}

impl Default for ThemeService {
    fn default() -> Self {
        Self::new()
    }
}
