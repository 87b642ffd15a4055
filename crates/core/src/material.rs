//! Material identifiers.
//!
//! Materials are addressed in configuration by their upper-case server name
//! (e.g. `BLUE_STAINED_GLASS_PANE`). Lookups are forgiving about case, spaces
//! and an optional `minecraft:` namespace so that hand-written layout files
//! resolve the same way the server does.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Namespace accepted (and ignored) in front of a material token.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Error returned when a material token does not name a known material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid material: {token}")]
pub struct MaterialError {
    /// The normalised token that failed to resolve.
    pub token: String,
}

/// Known item materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Material {
    /// Empty slot marker used by some inventory snapshots.
    Air,
    /// Plain stone
    Stone,
    /// Cobblestone
    Cobblestone,
    /// Oak planks
    OakPlanks,
    /// Obsidian
    Obsidian,
    /// Glowstone
    Glowstone,
    /// Cobweb
    Cobweb,
    /// Bedrock (never obtainable in survival)
    Bedrock,
    /// Mob spawner
    Spawner,
    /// Command block
    CommandBlock,
    /// Barrier block
    Barrier,
    /// Structure void
    StructureVoid,
    /// Chest
    Chest,
    /// Ender chest
    EnderChest,
    /// Shulker box
    ShulkerBox,
    /// Oak door
    OakDoor,
    /// Beacon
    Beacon,
    /// Anvil
    Anvil,
    /// Respawn anchor
    RespawnAnchor,
    /// End crystal
    EndCrystal,
    /// Book
    Book,
    /// Paper
    Paper,
    /// Name tag
    NameTag,
    /// Compass
    Compass,
    /// Clock
    Clock,
    /// Nether star
    NetherStar,
    /// Player head
    PlayerHead,
    /// Blue stained glass pane
    BlueStainedGlassPane,
    /// Black stained glass pane
    BlackStainedGlassPane,
    /// Gray stained glass pane
    GrayStainedGlassPane,
    /// White stained glass pane
    WhiteStainedGlassPane,
    /// Red stained glass pane
    RedStainedGlassPane,
    /// Lime stained glass pane
    LimeStainedGlassPane,
    /// Leather helmet
    LeatherHelmet,
    /// Leather chestplate
    LeatherChestplate,
    /// Leather leggings
    LeatherLeggings,
    /// Leather boots
    LeatherBoots,
    /// Chainmail helmet
    ChainmailHelmet,
    /// Chainmail chestplate
    ChainmailChestplate,
    /// Chainmail leggings
    ChainmailLeggings,
    /// Chainmail boots
    ChainmailBoots,
    /// Iron helmet
    IronHelmet,
    /// Iron chestplate
    IronChestplate,
    /// Iron leggings
    IronLeggings,
    /// Iron boots
    IronBoots,
    /// Diamond helmet
    DiamondHelmet,
    /// Diamond chestplate
    DiamondChestplate,
    /// Diamond leggings
    DiamondLeggings,
    /// Diamond boots
    DiamondBoots,
    /// Netherite helmet
    NetheriteHelmet,
    /// Netherite chestplate
    NetheriteChestplate,
    /// Netherite leggings
    NetheriteLeggings,
    /// Netherite boots
    NetheriteBoots,
    /// Elytra
    Elytra,
    /// Shield
    Shield,
    /// Diamond sword
    DiamondSword,
    /// Netherite sword
    NetheriteSword,
    /// Diamond axe
    DiamondAxe,
    /// Netherite axe
    NetheriteAxe,
    /// Diamond pickaxe
    DiamondPickaxe,
    /// Netherite pickaxe
    NetheritePickaxe,
    /// Bow
    Bow,
    /// Crossbow
    Crossbow,
    /// Trident
    Trident,
    /// Mace
    Mace,
    /// Arrow
    Arrow,
    /// Spectral arrow
    SpectralArrow,
    /// Tipped arrow
    TippedArrow,
    /// Potion
    Potion,
    /// Splash potion
    SplashPotion,
    /// Lingering potion
    LingeringPotion,
    /// Bottle o' enchanting
    ExperienceBottle,
    /// Totem of undying
    TotemOfUndying,
    /// Ender pearl
    EnderPearl,
    /// Wind charge
    WindCharge,
    /// Firework rocket
    FireworkRocket,
    /// Apple
    Apple,
    /// Golden apple
    GoldenApple,
    /// Enchanted golden apple
    EnchantedGoldenApple,
    /// Golden carrot
    GoldenCarrot,
    /// Cooked beef
    CookedBeef,
    /// Bread
    Bread,
    /// Empty bucket
    Bucket,
    /// Water bucket
    WaterBucket,
    /// Lava bucket
    LavaBucket,
    /// Knowledge book (admin only)
    KnowledgeBook,
    /// Debug stick (admin only)
    DebugStick,
}

impl Material {
    /// Every known material, in declaration order.
    pub const ALL: &'static [Material] = &[
        Material::Air,
        Material::Stone,
        Material::Cobblestone,
        Material::OakPlanks,
        Material::Obsidian,
        Material::Glowstone,
        Material::Cobweb,
        Material::Bedrock,
        Material::Spawner,
        Material::CommandBlock,
        Material::Barrier,
        Material::StructureVoid,
        Material::Chest,
        Material::EnderChest,
        Material::ShulkerBox,
        Material::OakDoor,
        Material::Beacon,
        Material::Anvil,
        Material::RespawnAnchor,
        Material::EndCrystal,
        Material::Book,
        Material::Paper,
        Material::NameTag,
        Material::Compass,
        Material::Clock,
        Material::NetherStar,
        Material::PlayerHead,
        Material::BlueStainedGlassPane,
        Material::BlackStainedGlassPane,
        Material::GrayStainedGlassPane,
        Material::WhiteStainedGlassPane,
        Material::RedStainedGlassPane,
        Material::LimeStainedGlassPane,
        Material::LeatherHelmet,
        Material::LeatherChestplate,
        Material::LeatherLeggings,
        Material::LeatherBoots,
        Material::ChainmailHelmet,
        Material::ChainmailChestplate,
        Material::ChainmailLeggings,
        Material::ChainmailBoots,
        Material::IronHelmet,
        Material::IronChestplate,
        Material::IronLeggings,
        Material::IronBoots,
        Material::DiamondHelmet,
        Material::DiamondChestplate,
        Material::DiamondLeggings,
        Material::DiamondBoots,
        Material::NetheriteHelmet,
        Material::NetheriteChestplate,
        Material::NetheriteLeggings,
        Material::NetheriteBoots,
        Material::Elytra,
        Material::Shield,
        Material::DiamondSword,
        Material::NetheriteSword,
        Material::DiamondAxe,
        Material::NetheriteAxe,
        Material::DiamondPickaxe,
        Material::NetheritePickaxe,
        Material::Bow,
        Material::Crossbow,
        Material::Trident,
        Material::Mace,
        Material::Arrow,
        Material::SpectralArrow,
        Material::TippedArrow,
        Material::Potion,
        Material::SplashPotion,
        Material::LingeringPotion,
        Material::ExperienceBottle,
        Material::TotemOfUndying,
        Material::EnderPearl,
        Material::WindCharge,
        Material::FireworkRocket,
        Material::Apple,
        Material::GoldenApple,
        Material::EnchantedGoldenApple,
        Material::GoldenCarrot,
        Material::CookedBeef,
        Material::Bread,
        Material::Bucket,
        Material::WaterBucket,
        Material::LavaBucket,
        Material::KnowledgeBook,
        Material::DebugStick,
    ];

    /// Canonical upper-case server name.
    pub fn name(self) -> &'static str {
        match self {
            Material::Air => "AIR",
            Material::Stone => "STONE",
            Material::Cobblestone => "COBBLESTONE",
            Material::OakPlanks => "OAK_PLANKS",
            Material::Obsidian => "OBSIDIAN",
            Material::Glowstone => "GLOWSTONE",
            Material::Cobweb => "COBWEB",
            Material::Bedrock => "BEDROCK",
            Material::Spawner => "SPAWNER",
            Material::CommandBlock => "COMMAND_BLOCK",
            Material::Barrier => "BARRIER",
            Material::StructureVoid => "STRUCTURE_VOID",
            Material::Chest => "CHEST",
            Material::EnderChest => "ENDER_CHEST",
            Material::ShulkerBox => "SHULKER_BOX",
            Material::OakDoor => "OAK_DOOR",
            Material::Beacon => "BEACON",
            Material::Anvil => "ANVIL",
            Material::RespawnAnchor => "RESPAWN_ANCHOR",
            Material::EndCrystal => "END_CRYSTAL",
            Material::Book => "BOOK",
            Material::Paper => "PAPER",
            Material::NameTag => "NAME_TAG",
            Material::Compass => "COMPASS",
            Material::Clock => "CLOCK",
            Material::NetherStar => "NETHER_STAR",
            Material::PlayerHead => "PLAYER_HEAD",
            Material::BlueStainedGlassPane => "BLUE_STAINED_GLASS_PANE",
            Material::BlackStainedGlassPane => "BLACK_STAINED_GLASS_PANE",
            Material::GrayStainedGlassPane => "GRAY_STAINED_GLASS_PANE",
            Material::WhiteStainedGlassPane => "WHITE_STAINED_GLASS_PANE",
            Material::RedStainedGlassPane => "RED_STAINED_GLASS_PANE",
            Material::LimeStainedGlassPane => "LIME_STAINED_GLASS_PANE",
            Material::LeatherHelmet => "LEATHER_HELMET",
            Material::LeatherChestplate => "LEATHER_CHESTPLATE",
            Material::LeatherLeggings => "LEATHER_LEGGINGS",
            Material::LeatherBoots => "LEATHER_BOOTS",
            Material::ChainmailHelmet => "CHAINMAIL_HELMET",
            Material::ChainmailChestplate => "CHAINMAIL_CHESTPLATE",
            Material::ChainmailLeggings => "CHAINMAIL_LEGGINGS",
            Material::ChainmailBoots => "CHAINMAIL_BOOTS",
            Material::IronHelmet => "IRON_HELMET",
            Material::IronChestplate => "IRON_CHESTPLATE",
            Material::IronLeggings => "IRON_LEGGINGS",
            Material::IronBoots => "IRON_BOOTS",
            Material::DiamondHelmet => "DIAMOND_HELMET",
            Material::DiamondChestplate => "DIAMOND_CHESTPLATE",
            Material::DiamondLeggings => "DIAMOND_LEGGINGS",
            Material::DiamondBoots => "DIAMOND_BOOTS",
            Material::NetheriteHelmet => "NETHERITE_HELMET",
            Material::NetheriteChestplate => "NETHERITE_CHESTPLATE",
            Material::NetheriteLeggings => "NETHERITE_LEGGINGS",
            Material::NetheriteBoots => "NETHERITE_BOOTS",
            Material::Elytra => "ELYTRA",
            Material::Shield => "SHIELD",
            Material::DiamondSword => "DIAMOND_SWORD",
            Material::NetheriteSword => "NETHERITE_SWORD",
            Material::DiamondAxe => "DIAMOND_AXE",
            Material::NetheriteAxe => "NETHERITE_AXE",
            Material::DiamondPickaxe => "DIAMOND_PICKAXE",
            Material::NetheritePickaxe => "NETHERITE_PICKAXE",
            Material::Bow => "BOW",
            Material::Crossbow => "CROSSBOW",
            Material::Trident => "TRIDENT",
            Material::Mace => "MACE",
            Material::Arrow => "ARROW",
            Material::SpectralArrow => "SPECTRAL_ARROW",
            Material::TippedArrow => "TIPPED_ARROW",
            Material::Potion => "POTION",
            Material::SplashPotion => "SPLASH_POTION",
            Material::LingeringPotion => "LINGERING_POTION",
            Material::ExperienceBottle => "EXPERIENCE_BOTTLE",
            Material::TotemOfUndying => "TOTEM_OF_UNDYING",
            Material::EnderPearl => "ENDER_PEARL",
            Material::WindCharge => "WIND_CHARGE",
            Material::FireworkRocket => "FIREWORK_ROCKET",
            Material::Apple => "APPLE",
            Material::GoldenApple => "GOLDEN_APPLE",
            Material::EnchantedGoldenApple => "ENCHANTED_GOLDEN_APPLE",
            Material::GoldenCarrot => "GOLDEN_CARROT",
            Material::CookedBeef => "COOKED_BEEF",
            Material::Bread => "BREAD",
            Material::Bucket => "BUCKET",
            Material::WaterBucket => "WATER_BUCKET",
            Material::LavaBucket => "LAVA_BUCKET",
            Material::KnowledgeBook => "KNOWLEDGE_BOOK",
            Material::DebugStick => "DEBUG_STICK",
        }
    }

    /// Resolve a configuration token to a material.
    ///
    /// Accepts `diamond sword`, `DIAMOND_SWORD` and `minecraft:diamond_sword`.
    pub fn match_name(token: &str) -> Option<Material> {
        let normalized = normalize_token(token);
        Material::ALL
            .iter()
            .copied()
            .find(|material| material.name() == normalized)
    }

    /// Whether this material represents an empty slot.
    pub fn is_air(self) -> bool {
        matches!(self, Material::Air)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Material::match_name(s).ok_or_else(|| MaterialError {
            token: normalize_token(s),
        })
    }
}

/// Normalise a configuration token the way the server does: trim, strip the
/// default namespace, upper-case, spaces to underscores.
pub fn normalize_token(token: &str) -> String {
    let token = token.trim();
    let token = match token.split_once(':') {
        Some((ns, rest)) if ns.eq_ignore_ascii_case(DEFAULT_NAMESPACE) => rest,
        _ => token,
    };
    token.to_ascii_uppercase().replace(' ', "_")
}
