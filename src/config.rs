use anyhow::{Context, Result};
use perkit_menu::{MenuConfig, MenuEngine, Settings};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_DIR: &str = "config";
const SETTINGS_FILE: &str = "perkit.toml";
const MENUS_DIR: &str = "menus";

/// A configuration directory: `perkit.toml` plus `menus/*.toml` layout overrides.
#[derive(Debug, Clone)]
pub struct ConfigDir {
    root: PathBuf,
}

impl ConfigDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    pub fn menus_dir(&self) -> PathBuf {
        self.root.join(MENUS_DIR)
    }

    /// Load settings, falling back to defaults on errors.
    pub fn load_settings(&self) -> Settings {
        let path = self.settings_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Settings::from_toml_str(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    Settings::default()
                }
            },
            Err(err) => {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
                Settings::default()
            }
        }
    }

    /// Built-in layouts with every `menus/*.toml` file applied in name order.
    ///
    /// Unlike settings, a broken layout file is an error: serving menus from
    /// a half-applied layout set would hide the mistake.
    pub fn load_layouts(&self) -> Result<MenuConfig> {
        let mut layouts = MenuConfig::builtin().context("built-in layouts are invalid")?;
        for path in self.layout_files()? {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let overrides = MenuConfig::from_toml_str(&contents)
                .with_context(|| format!("Failed to load menu layout {}", path.display()))?;
            layouts = layouts.merged(overrides);
        }
        Ok(layouts)
    }

    /// Reload settings and layouts into `engine`. On a layout error the
    /// engine keeps its current configuration.
    pub fn reload(&self, engine: &MenuEngine) -> Result<()> {
        let layouts = self.load_layouts()?;
        engine.reload(layouts, self.load_settings());
        info!(dir = %self.root.display(), "configuration reloaded");
        Ok(())
    }

    fn layout_files(&self) -> Result<Vec<PathBuf>> {
        let dir = self.menus_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in
            fs::read_dir(&dir).with_context(|| format!("Failed to list {}", dir.display()))?
        {
            let path = entry?.path();
            if is_toml(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_toml(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "toml")
}
