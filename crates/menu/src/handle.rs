//! Viewer identity and kit handles.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::view::{ENDER_CHEST_SLOTS, KIT_ROOM_SLOTS, KIT_SLOTS};

/// Stable identity of a player (their UUID string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewerId(pub String);

impl ViewerId {
    /// Wrap an identity string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    /// Capability flags the host grants a viewer.
    pub struct Capabilities: u8 {
        /// Public kit administration.
        const ADMIN = 1 << 0;
        /// May overwrite kit room pages.
        const EDIT_KIT_ROOM = 1 << 1;
    }
}

/// The player a menu is built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    /// Identity.
    pub id: ViewerId,
    /// Display name, used for the `<player>` title placeholder.
    pub name: String,
    /// Capabilities read when a menu is built.
    pub capabilities: Capabilities,
}

impl Viewer {
    /// A viewer without any capabilities.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ViewerId::new(id),
            name: name.into(),
            capabilities: Capabilities::empty(),
        }
    }

    /// Grant extra capabilities.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities |= capabilities;
        self
    }

    /// Public kit administrator.
    pub fn is_admin(&self) -> bool {
        self.capabilities.contains(Capabilities::ADMIN)
    }

    /// Allowed to save kit room pages.
    pub fn can_edit_kit_room(&self) -> bool {
        self.capabilities.contains(Capabilities::EDIT_KIT_ROOM)
    }
}

/// Identifies one storable kit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KitHandle {
    /// Personal kit `slot` (1-9).
    Personal {
        /// Kit owner.
        owner: ViewerId,
        /// Kit number.
        slot: u32,
    },
    /// Ender-chest kit `slot` (1-9).
    EnderChest {
        /// Kit owner.
        owner: ViewerId,
        /// Kit number.
        slot: u32,
    },
    /// Server-wide public kit.
    Public(String),
    /// Kit room page (0-based).
    KitRoomPage(usize),
}

impl KitHandle {
    /// Storage key. Personal and ender-chest keys keep the historical
    /// `<uuid><slot>` and `<uuid>ec<slot>` forms.
    pub fn key(&self) -> String {
        match self {
            KitHandle::Personal { owner, slot } => format!("{owner}{slot}"),
            KitHandle::EnderChest { owner, slot } => format!("{owner}ec{slot}"),
            KitHandle::Public(id) => format!("public:{id}"),
            KitHandle::KitRoomPage(page) => format!("kitroom:{page}"),
        }
    }

    /// Number of item slots stored under this handle.
    pub fn slot_count(&self) -> usize {
        match self {
            KitHandle::Personal { .. } | KitHandle::Public(_) => KIT_SLOTS,
            KitHandle::EnderChest { .. } => ENDER_CHEST_SLOTS,
            KitHandle::KitRoomPage(_) => KIT_ROOM_SLOTS,
        }
    }
}

impl fmt::Display for KitHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID: &str = "8667ba71-b85a-4004-af54-457a9734eed7";

    #[test]
    fn keys_keep_legacy_formats() {
        let owner = ViewerId::new(UUID);
        let personal = KitHandle::Personal {
            owner: owner.clone(),
            slot: 1,
        };
        let ender = KitHandle::EnderChest { owner, slot: 9 };

        assert_eq!(personal.key(), format!("{UUID}1"));
        assert_eq!(ender.key(), format!("{UUID}ec9"));
        assert_eq!(KitHandle::Public("nethpot".into()).key(), "public:nethpot");
        assert_eq!(KitHandle::KitRoomPage(3).to_string(), "kitroom:3");
    }

    #[test]
    fn slot_counts_per_purpose() {
        let owner = ViewerId::new(UUID);
        assert_eq!(
            KitHandle::Personal {
                owner: owner.clone(),
                slot: 2
            }
            .slot_count(),
            41
        );
        assert_eq!(KitHandle::EnderChest { owner, slot: 2 }.slot_count(), 27);
        assert_eq!(KitHandle::Public("x".into()).slot_count(), 41);
        assert_eq!(KitHandle::KitRoomPage(0).slot_count(), 45);
    }

    #[test]
    fn capabilities_accumulate() {
        let viewer = Viewer::new(UUID, "Steve")
            .with_capabilities(Capabilities::ADMIN)
            .with_capabilities(Capabilities::EDIT_KIT_ROOM);
        assert!(viewer.is_admin());
        assert!(viewer.can_edit_kit_room());
        assert!(!Viewer::new(UUID, "Steve").is_admin());
    }
}
