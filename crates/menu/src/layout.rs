//! Declarative menu layouts.
//!
//! A layout document is a TOML file with one table per menu section:
//!
//! ```toml
//! [kit_editor_menu]
//! title = "&9Kit: <kit>"
//! rows = 6
//!
//! [kit_editor_menu.back]
//! slots = [53]
//! material = "OAK_DOOR"
//! name = "&c&lBACK"
//! ```
//!
//! Every key other than `title` and `rows` is a region. A region carries its
//! slots, an `enabled` flag, an inline item definition and optionally named
//! sub-definitions (`kit_exists.exists`, `kit_exists.not_found`).

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::info;

use crate::error::ConfigError;
use crate::view::{COLUMNS, FIXED_ROWS, MAX_ROWS};

/// Main menu section.
pub const MAIN_MENU: &str = "kit_menu";
/// Personal kit editor section.
pub const KIT_EDITOR_MENU: &str = "kit_editor_menu";
/// Ender-chest kit editor section.
pub const ENDER_CHEST_MENU: &str = "ender_chest_menu";
/// Kit inspection section.
pub const INSPECT_MENU: &str = "inspect_menu";
/// Public kit catalog section.
pub const PUBLIC_KIT_MENU: &str = "public_kit_menu";
/// Read-only public kit view section.
pub const PUBLIC_KIT_VIEW_MENU: &str = "public_kit_view_menu";
/// Public kit editor section.
pub const PUBLIC_KIT_EDITOR_MENU: &str = "public_kit_editor_menu";
/// Kit room section.
pub const KIT_ROOM_MENU: &str = "kit_room_menu";

/// Sections whose row count is fixed at six.
const FIXED_SECTIONS: &[&str] = &[
    ENDER_CHEST_MENU,
    INSPECT_MENU,
    PUBLIC_KIT_MENU,
    PUBLIC_KIT_VIEW_MENU,
    PUBLIC_KIT_EDITOR_MENU,
    KIT_ROOM_MENU,
];

const BUILTIN_LAYOUTS: &str = include_str!("../menus/defaults.toml");

/// A configured item before placeholder substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ItemDefinition {
    /// Material token, e.g. `BLUE_STAINED_GLASS_PANE`.
    pub material: Option<String>,
    /// Display name template.
    pub name: Option<String>,
    /// Lore line templates.
    pub lore: Vec<String>,
    /// Item flag tokens.
    pub flags: Vec<String>,
    /// Enchantment tokens (applied at level 1).
    pub enchantments: Vec<String>,
}

impl ItemDefinition {
    /// Definition with only a material.
    pub fn of_material(material: &str) -> Self {
        Self {
            material: Some(material.to_string()),
            ..Self::default()
        }
    }
}

fn enabled_by_default() -> bool {
    true
}

/// A named group of slots sharing one item definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Region {
    /// Absolute slot indices.
    #[serde(default)]
    pub slots: Vec<usize>,
    /// Disabled regions are not rendered or bound.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Item shown in every slot of the region.
    #[serde(flatten)]
    pub item: ItemDefinition,
    /// Named alternative items (e.g. `exists` / `not_found`).
    #[serde(flatten)]
    pub variants: BTreeMap<String, ItemDefinition>,
}

impl Region {
    /// The inline item definition, or `None` when the region declares no material.
    pub fn item(&self) -> Option<&ItemDefinition> {
        self.item.material.as_ref().map(|_| &self.item)
    }

    /// A named sub-definition.
    pub fn variant(&self, name: &str) -> Option<&ItemDefinition> {
        self.variants.get(name)
    }
}

fn default_rows() -> u8 {
    FIXED_ROWS
}

/// Layout of one menu kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuLayout {
    /// Title template.
    pub title: String,
    /// Number of rows (1-6).
    #[serde(default = "default_rows")]
    pub rows: u8,
    /// Regions keyed by name.
    #[serde(flatten)]
    pub regions: BTreeMap<String, Region>,
}

impl MenuLayout {
    /// A region that exists and is enabled.
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.get(name).filter(|region| region.enabled)
    }

    /// Grid size in slots.
    pub fn size(&self) -> usize {
        self.rows as usize * COLUMNS
    }

    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        let (min, max) = if FIXED_SECTIONS.contains(&section) {
            (FIXED_ROWS, FIXED_ROWS)
        } else if section == KIT_EDITOR_MENU {
            // The 41 kit slots need five full rows.
            (5, MAX_ROWS)
        } else {
            (1, MAX_ROWS)
        };
        if !(min..=max).contains(&self.rows) {
            return Err(ConfigError::InvalidRows {
                section: section.to_string(),
                rows: self.rows,
                min,
                max,
            });
        }

        let size = self.size();
        for (name, region) in &self.regions {
            if let Some(&slot) = region.slots.iter().find(|&&slot| slot >= size) {
                return Err(ConfigError::SlotOutOfRange {
                    section: section.to_string(),
                    region: name.clone(),
                    slot,
                    size,
                });
            }
        }
        Ok(())
    }
}

/// All menu layouts, keyed by section name.
///
/// Immutable once built; the engine swaps in a new value on reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuConfig {
    sections: BTreeMap<String, MenuLayout>,
}

impl MenuConfig {
    /// Parse and validate a layout document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let sections: BTreeMap<String, MenuLayout> = toml::from_str(input)?;
        for (name, layout) in &sections {
            layout.validate(name)?;
        }
        Ok(Self { sections })
    }

    /// Layouts shipped with the crate, one per menu kind.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_LAYOUTS)
    }

    /// Replace whole sections with the ones from `overrides`.
    pub fn merged(mut self, overrides: MenuConfig) -> Self {
        for (name, layout) in overrides.sections {
            info!(section = %name, "menu section overridden");
            self.sections.insert(name, layout);
        }
        self
    }

    /// Look up a section; absence is a configuration error.
    pub fn section(&self, name: &str) -> Result<&MenuLayout, ConfigError> {
        self.sections
            .get(name)
            .ok_or_else(|| ConfigError::MissingSection {
                section: name.to_string(),
            })
    }

    /// Section names present in this document.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}
