//! Plugin settings that shape menu behaviour.

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level settings document (`perkit.toml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Import filtering.
    pub anti_exploit: AntiExploit,
    /// Kit room page buttons.
    pub kit_room: KitRoomSettings,
    /// Public kits shown in the catalog, in display order.
    pub public_kits: Vec<PublicKitEntry>,
    /// Editor behaviour.
    pub editor: EditorSettings,
}

impl Settings {
    /// Parse a settings document; omitted keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }
}

/// Anti-exploit switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AntiExploit {
    /// Run imported items through the item filter.
    pub import_filter: bool,
}

/// Kit room page buttons, one per page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KitRoomSettings {
    /// Button for page N at index N.
    pub pages: Vec<PageButton>,
}

impl KitRoomSettings {
    /// Button for `page`.
    pub fn page_button(&self, page: usize) -> Option<&PageButton> {
        self.pages.get(page)
    }
}

impl Default for KitRoomSettings {
    fn default() -> Self {
        let page = |material: &str, name: &str| PageButton {
            material: material.to_string(),
            name: name.to_string(),
        };
        Self {
            pages: vec![
                page("NETHERITE_CHESTPLATE", "&b&lARMORY"),
                page("DIAMOND_SWORD", "&b&lWEAPONS"),
                page("SPLASH_POTION", "&b&lPOTIONS"),
                page("ENDER_PEARL", "&b&lCONSUMABLES"),
                page("TIPPED_ARROW", "&b&lARROWS"),
            ],
        }
    }
}

/// Material and name of one page button.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageButton {
    /// Material token.
    pub material: String,
    /// Display name (`&` codes allowed).
    pub name: String,
}

/// One public kit offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicKitEntry {
    /// Identifier used for storage and commands.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Icon material token.
    pub icon: String,
}

/// Editor behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Persist editor contents when a session leaves an editor.
    pub save_on_close: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let settings = Settings::from_toml_str("").expect("parses");
        assert!(!settings.anti_exploit.import_filter);
        assert!(!settings.editor.save_on_close);
        assert!(settings.public_kits.is_empty());
        assert_eq!(settings.kit_room.pages.len(), 5);
        assert!(settings.kit_room.page_button(5).is_none());
    }

    #[test]
    fn parses_public_kits_and_pages() {
        let settings = Settings::from_toml_str(
            r#"
            [anti_exploit]
            import_filter = true

            [kit_room]
            pages = [{ material = "TOTEM_OF_UNDYING", name = "Misc" }]

            [[public_kits]]
            id = "nethpot"
            name = "&5Nethpot"
            icon = "NETHERITE_SWORD"

            [[public_kits]]
            id = "crystal"
            name = "Crystal"
            icon = "END_CRYSTAL"
            "#,
        )
        .expect("parses");

        assert!(settings.anti_exploit.import_filter);
        assert_eq!(settings.kit_room.pages.len(), 1);
        assert_eq!(
            settings.kit_room.page_button(0).map(|b| b.material.as_str()),
            Some("TOTEM_OF_UNDYING")
        );
        let ids: Vec<&str> = settings.public_kits.iter().map(|k| k.id.as_str()).collect();
        assert_eq!(ids, ["nethpot", "crystal"]);
    }

    #[test]
    fn malformed_settings_are_errors() {
        assert!(matches!(
            Settings::from_toml_str("public_kits = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
