use serde::{Deserialize, Serialize};

use crate::material::normalize_token;

/// Types of enchantments that can be attached to items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnchantmentType {
    // Tool enchantments
    /// Increases mining speed
    Efficiency,
    /// Allows silk touch harvesting of blocks
    SilkTouch,
    /// Increases block drop amounts
    Fortune,

    // Weapon enchantments
    /// Increases attack damage
    Sharpness,
    /// Extra damage against undead
    Smite,
    /// Increases knockback
    Knockback,
    /// Sets targets on fire
    FireAspect,
    /// Increases mob loot
    Looting,
    /// Increases bow/arrow damage
    Power,
    /// Increases bow/arrow knockback
    Punch,
    /// Bow/arrow sets targets on fire
    Flame,
    /// Allows firing without consuming arrows
    Infinity,
    /// Crossbow fires three arrows
    Multishot,
    /// Faster crossbow reload
    QuickCharge,
    /// Thrown trident returns
    Loyalty,
    /// Extra damage from mace falls
    Density,
    /// Mace ignores armor
    Breach,

    // Armor enchantments
    /// Reduces damage from all sources
    Protection,
    /// Reduces fire damage
    FireProtection,
    /// Reduces explosion damage
    BlastProtection,
    /// Reduces projectile damage
    ProjectileProtection,
    /// Reduces fall damage (boots)
    FeatherFalling,
    /// Damages attackers
    Thorns,
    /// Extends underwater breathing (helmet)
    Respiration,
    /// Increases underwater movement speed (boots)
    DepthStrider,

    // Universal enchantments
    /// Reduces durability loss
    Unbreaking,
    /// Repairs item using XP
    Mending,
    /// Item disappears on death
    VanishingCurse,
    /// Item cannot be removed from an armor slot
    BindingCurse,
}

impl EnchantmentType {
    /// Every known enchantment.
    pub const ALL: &'static [EnchantmentType] = &[
        EnchantmentType::Efficiency,
        EnchantmentType::SilkTouch,
        EnchantmentType::Fortune,
        EnchantmentType::Sharpness,
        EnchantmentType::Smite,
        EnchantmentType::Knockback,
        EnchantmentType::FireAspect,
        EnchantmentType::Looting,
        EnchantmentType::Power,
        EnchantmentType::Punch,
        EnchantmentType::Flame,
        EnchantmentType::Infinity,
        EnchantmentType::Multishot,
        EnchantmentType::QuickCharge,
        EnchantmentType::Loyalty,
        EnchantmentType::Density,
        EnchantmentType::Breach,
        EnchantmentType::Protection,
        EnchantmentType::FireProtection,
        EnchantmentType::BlastProtection,
        EnchantmentType::ProjectileProtection,
        EnchantmentType::FeatherFalling,
        EnchantmentType::Thorns,
        EnchantmentType::Respiration,
        EnchantmentType::DepthStrider,
        EnchantmentType::Unbreaking,
        EnchantmentType::Mending,
        EnchantmentType::VanishingCurse,
        EnchantmentType::BindingCurse,
    ];

    /// Get the maximum level for this enchantment
    pub fn max_level(&self) -> u8 {
        match self {
            EnchantmentType::Efficiency => 5,
            EnchantmentType::SilkTouch => 1,
            EnchantmentType::Fortune => 3,
            EnchantmentType::Sharpness => 5,
            EnchantmentType::Smite => 5,
            EnchantmentType::Knockback => 2,
            EnchantmentType::FireAspect => 2,
            EnchantmentType::Looting => 3,
            EnchantmentType::Power => 5,
            EnchantmentType::Punch => 2,
            EnchantmentType::Flame => 1,
            EnchantmentType::Infinity => 1,
            EnchantmentType::Multishot => 1,
            EnchantmentType::QuickCharge => 3,
            EnchantmentType::Loyalty => 3,
            EnchantmentType::Density => 5,
            EnchantmentType::Breach => 4,
            EnchantmentType::Protection => 4,
            EnchantmentType::FireProtection => 4,
            EnchantmentType::BlastProtection => 4,
            EnchantmentType::ProjectileProtection => 4,
            EnchantmentType::FeatherFalling => 4,
            EnchantmentType::Thorns => 3,
            EnchantmentType::Respiration => 3,
            EnchantmentType::DepthStrider => 3,
            EnchantmentType::Unbreaking => 3,
            EnchantmentType::Mending => 1,
            EnchantmentType::VanishingCurse => 1,
            EnchantmentType::BindingCurse => 1,
        }
    }

    /// Canonical upper-case name, as written in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            EnchantmentType::Efficiency => "EFFICIENCY",
            EnchantmentType::SilkTouch => "SILK_TOUCH",
            EnchantmentType::Fortune => "FORTUNE",
            EnchantmentType::Sharpness => "SHARPNESS",
            EnchantmentType::Smite => "SMITE",
            EnchantmentType::Knockback => "KNOCKBACK",
            EnchantmentType::FireAspect => "FIRE_ASPECT",
            EnchantmentType::Looting => "LOOTING",
            EnchantmentType::Power => "POWER",
            EnchantmentType::Punch => "PUNCH",
            EnchantmentType::Flame => "FLAME",
            EnchantmentType::Infinity => "INFINITY",
            EnchantmentType::Multishot => "MULTISHOT",
            EnchantmentType::QuickCharge => "QUICK_CHARGE",
            EnchantmentType::Loyalty => "LOYALTY",
            EnchantmentType::Density => "DENSITY",
            EnchantmentType::Breach => "BREACH",
            EnchantmentType::Protection => "PROTECTION",
            EnchantmentType::FireProtection => "FIRE_PROTECTION",
            EnchantmentType::BlastProtection => "BLAST_PROTECTION",
            EnchantmentType::ProjectileProtection => "PROJECTILE_PROTECTION",
            EnchantmentType::FeatherFalling => "FEATHER_FALLING",
            EnchantmentType::Thorns => "THORNS",
            EnchantmentType::Respiration => "RESPIRATION",
            EnchantmentType::DepthStrider => "DEPTH_STRIDER",
            EnchantmentType::Unbreaking => "UNBREAKING",
            EnchantmentType::Mending => "MENDING",
            EnchantmentType::VanishingCurse => "VANISHING_CURSE",
            EnchantmentType::BindingCurse => "BINDING_CURSE",
        }
    }

    /// Resolve an enchantment token.
    ///
    /// Both the modern names and the legacy server aliases (`DAMAGE_ALL`,
    /// `DURABILITY`, `PROTECTION_ENVIRONMENTAL`, ...) are accepted.
    pub fn from_name(token: &str) -> Option<EnchantmentType> {
        let normalized = normalize_token(token);
        let legacy = match normalized.as_str() {
            "DIG_SPEED" => Some(EnchantmentType::Efficiency),
            "LOOT_BONUS_BLOCKS" => Some(EnchantmentType::Fortune),
            "DAMAGE_ALL" => Some(EnchantmentType::Sharpness),
            "DAMAGE_UNDEAD" => Some(EnchantmentType::Smite),
            "LOOT_BONUS_MOBS" => Some(EnchantmentType::Looting),
            "ARROW_DAMAGE" => Some(EnchantmentType::Power),
            "ARROW_KNOCKBACK" => Some(EnchantmentType::Punch),
            "ARROW_FIRE" => Some(EnchantmentType::Flame),
            "ARROW_INFINITE" => Some(EnchantmentType::Infinity),
            "PROTECTION_ENVIRONMENTAL" => Some(EnchantmentType::Protection),
            "PROTECTION_FIRE" => Some(EnchantmentType::FireProtection),
            "PROTECTION_EXPLOSIONS" => Some(EnchantmentType::BlastProtection),
            "PROTECTION_PROJECTILE" => Some(EnchantmentType::ProjectileProtection),
            "PROTECTION_FALL" => Some(EnchantmentType::FeatherFalling),
            "OXYGEN" => Some(EnchantmentType::Respiration),
            "DURABILITY" => Some(EnchantmentType::Unbreaking),
            _ => None,
        };
        legacy.or_else(|| {
            EnchantmentType::ALL
                .iter()
                .copied()
                .find(|ty| ty.name() == normalized)
        })
    }
}

/// An enchantment with a specific level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enchantment {
    /// The type of enchantment
    pub enchantment_type: EnchantmentType,
    /// The level of the enchantment (1 to max_level)
    pub level: u8,
}

impl Enchantment {
    /// Create a new enchantment
    pub fn new(enchantment_type: EnchantmentType, level: u8) -> Self {
        let max_level = enchantment_type.max_level();
        let level = level.clamp(1, max_level);
        Self {
            enchantment_type,
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level() {
        assert_eq!(EnchantmentType::Efficiency.max_level(), 5);
        assert_eq!(EnchantmentType::SilkTouch.max_level(), 1);
        assert_eq!(EnchantmentType::Unbreaking.max_level(), 3);
        assert_eq!(EnchantmentType::Mending.max_level(), 1);
    }

    #[test]
    fn test_enchantment_level_clamping() {
        let ench = Enchantment::new(EnchantmentType::SilkTouch, 10);
        assert_eq!(ench.level, 1);

        let ench = Enchantment::new(EnchantmentType::Efficiency, 3);
        assert_eq!(ench.level, 3);

        let ench = Enchantment::new(EnchantmentType::Sharpness, 0);
        assert_eq!(ench.level, 1);
    }

    #[test]
    fn test_names_round_trip() {
        for ty in EnchantmentType::ALL {
            assert_eq!(EnchantmentType::from_name(ty.name()), Some(*ty));
        }
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(
            EnchantmentType::from_name("durability"),
            Some(EnchantmentType::Unbreaking)
        );
        assert_eq!(
            EnchantmentType::from_name("PROTECTION_ENVIRONMENTAL"),
            Some(EnchantmentType::Protection)
        );
        assert_eq!(
            EnchantmentType::from_name("fire aspect"),
            Some(EnchantmentType::FireAspect)
        );
        assert_eq!(EnchantmentType::from_name("SHINY"), None);
    }
}
