//! Collaborators the host supplies: storage, inventories, filtering,
//! broadcasts and player actions.

use perkit_core::{ItemSlots, Text};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::handle::{KitHandle, Viewer, ViewerId};

/// Kit persistence.
pub trait KitStore: Send + Sync {
    /// Stored contents for `handle`, if any.
    fn get(&self, handle: &KitHandle) -> Option<ItemSlots>;
    /// Replace the contents stored for `handle`.
    fn put(&self, handle: &KitHandle, items: ItemSlots);
    /// Give the stored kit to `viewer`.
    fn apply(&self, viewer: &Viewer, handle: &KitHandle);
}

/// Read access to a player's live inventories.
pub trait InventorySource: Send + Sync {
    /// Carried inventory: 36 main slots, 4 armor, off-hand.
    fn snapshot(&self, viewer: &ViewerId) -> ItemSlots;
    /// Ender chest contents (27 slots).
    fn equipment_snapshot(&self, viewer: &ViewerId) -> ItemSlots;
}

/// Anti-exploit filtering applied to imported items.
pub trait ItemFilter: Send + Sync {
    /// Return `items` with disallowed stacks removed; length is preserved.
    fn filter(&self, items: ItemSlots) -> ItemSlots;
}

/// Server-wide notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BroadcastEvent {
    /// A player entered the kit room.
    OpenedKitRoom {
        /// Player name.
        viewer: String,
    },
    /// A player repaired their gear.
    RepairedItems {
        /// Player name.
        viewer: String,
    },
}

/// Fire-and-forget broadcast delivery.
pub trait BroadcastSink: Send + Sync {
    /// Deliver `event`.
    fn broadcast(&self, event: BroadcastEvent);
}

/// Effects on the player outside the menu.
pub trait PlayerActions: Send + Sync {
    /// Send a chat message.
    fn send_message(&self, viewer: &ViewerId, message: Text);
    /// Repair every item the player carries.
    fn repair_all(&self, viewer: &ViewerId);
    /// Empty the player's inventory.
    fn clear_inventory(&self, viewer: &ViewerId);
}

/// Every collaborator the engine talks to.
#[derive(Clone)]
pub struct Collaborators {
    /// Kit storage.
    pub store: Arc<dyn KitStore>,
    /// Inventory snapshots.
    pub inventory: Arc<dyn InventorySource>,
    /// Import filter; consulted only when the setting enables it.
    pub filter: Option<Arc<dyn ItemFilter>>,
    /// Broadcast delivery.
    pub broadcast: Arc<dyn BroadcastSink>,
    /// Player effects.
    pub player: Arc<dyn PlayerActions>,
}

/// Pad or truncate collaborator output to the expected slot count.
pub(crate) fn fit(mut items: ItemSlots, len: usize, source: &str) -> ItemSlots {
    if items.len() != len {
        warn!(source, expected = len, actual = items.len(), "unexpected item array length");
        items.resize(len, None);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use perkit_core::{ItemStack, Material};

    #[test]
    fn fit_pads_and_truncates() {
        let stone = Some(ItemStack::new(Material::Stone, 1));
        assert_eq!(fit(vec![stone.clone()], 3, "test"), vec![stone.clone(), None, None]);
        assert_eq!(fit(vec![stone.clone(); 5], 2, "test").len(), 2);
        assert_eq!(fit(vec![None; 4], 4, "test").len(), 4);
    }

    #[test]
    fn broadcast_events_serialize_with_tag() {
        let json = serde_json::to_string(&BroadcastEvent::OpenedKitRoom {
            viewer: "Steve".into(),
        })
        .expect("serializes");
        assert_eq!(json, r#"{"event":"opened_kit_room","viewer":"Steve"}"#);
    }
}
