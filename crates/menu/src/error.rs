use perkit_core::MaterialError;
use thiserror::Error;

/// Broken or incomplete menu configuration.
///
/// Always fatal for the menu-open call that hit it: a broken layout must keep
/// the menu from being served rather than render a degraded view.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The layout document has no section for the requested menu.
    #[error("menu section `{section}` not found")]
    MissingSection {
        /// Section name, e.g. `kit_menu`.
        section: String,
    },
    /// An item definition was required but the node is absent.
    #[error("item definition is missing")]
    MissingItem,
    /// The item definition has no `material` key.
    #[error("item definition has no material")]
    MissingMaterial,
    /// The `material` key does not name a known material.
    #[error(transparent)]
    InvalidMaterial(#[from] MaterialError),
    /// Row count outside what the menu kind supports.
    #[error("menu section `{section}` has {rows} rows (allowed {min}..={max})")]
    InvalidRows {
        /// Section name.
        section: String,
        /// Configured rows.
        rows: u8,
        /// Smallest allowed row count.
        min: u8,
        /// Largest allowed row count.
        max: u8,
    },
    /// A region lists a slot beyond the menu grid.
    #[error("slot {slot} of `{section}.{region}` is outside a {size}-slot menu")]
    SlotOutOfRange {
        /// Section name.
        section: String,
        /// Region name.
        region: String,
        /// Offending slot index.
        slot: usize,
        /// Grid size (`rows * 9`).
        size: usize,
    },
    /// A numbered region slot does not map to a kit number (`slot - offset < 1`).
    #[error("slot {slot} of `{section}.{region}` does not map to a kit number")]
    UnmappedSlot {
        /// Section name.
        section: String,
        /// Region name.
        region: String,
        /// Offending slot index.
        slot: usize,
    },
    /// Wraps a failure with the region it came from.
    #[error("in `{section}.{region}`: {source}")]
    InRegion {
        /// Section name.
        section: String,
        /// Region name.
        region: String,
        /// Underlying failure.
        #[source]
        source: Box<ConfigError>,
    },
    /// The document is not valid TOML for the layout schema.
    #[error("failed to parse menu config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub(crate) fn in_region(self, section: &str, region: &str) -> Self {
        ConfigError::InRegion {
            section: section.to_string(),
            region: region.to_string(),
            source: Box::new(self),
        }
    }
}

/// A flag or enchantment token that does not resolve.
///
/// Recovered locally: the parser skips that one decoration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecorationError {
    /// Unknown item flag.
    #[error("unknown item flag `{0}`")]
    UnknownFlag(String),
    /// Unknown enchantment.
    #[error("unknown enchantment `{0}`")]
    UnknownEnchantment(String),
}

/// Errors surfaced by the menu engine.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Configuration failure while building a view.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Kit-room page outside the configured page buttons.
    #[error("kit room page {page} is not configured ({pages} pages)")]
    UnknownKitRoomPage {
        /// Requested page (0-based).
        page: usize,
        /// Number of configured pages.
        pages: usize,
    },
}
