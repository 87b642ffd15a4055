//! In-memory implementations of the menu collaborators.

use perkit_core::{empty_slots, ItemSlots, ItemStack, Material, Text};
use perkit_menu::collab::{
    BroadcastEvent, BroadcastSink, Collaborators, InventorySource, ItemFilter, KitStore,
    PlayerActions,
};
use perkit_menu::{KitHandle, Viewer, ViewerId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::warn;

use crate::{BroadcastRecord, JsonlSink};

/// Kit store backed by a map from storage key to contents.
#[derive(Default)]
pub struct MemoryKitStore {
    kits: Mutex<HashMap<String, ItemSlots>>,
    applied: Mutex<Vec<(ViewerId, KitHandle)>>,
}

impl MemoryKitStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `handle` with `items`.
    pub fn insert(&self, handle: &KitHandle, items: ItemSlots) {
        self.put(handle, items);
    }

    /// Contents stored under `handle`.
    pub fn stored(&self, handle: &KitHandle) -> Option<ItemSlots> {
        self.get(handle)
    }

    /// Every `apply` call so far, in order.
    pub fn applied(&self) -> Vec<(ViewerId, KitHandle)> {
        self.applied.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl KitStore for MemoryKitStore {
    fn get(&self, handle: &KitHandle) -> Option<ItemSlots> {
        self.kits.lock().ok()?.get(&handle.key()).cloned()
    }

    fn put(&self, handle: &KitHandle, items: ItemSlots) {
        if let Ok(mut kits) = self.kits.lock() {
            kits.insert(handle.key(), items);
        }
    }

    fn apply(&self, viewer: &Viewer, handle: &KitHandle) {
        if let Ok(mut applied) = self.applied.lock() {
            applied.push((viewer.id.clone(), handle.clone()));
        }
    }
}

/// Inventories set up ahead of time; unknown viewers have empty ones.
#[derive(Default)]
pub struct FixedInventory {
    inventories: Mutex<HashMap<ViewerId, ItemSlots>>,
    ender_chests: Mutex<HashMap<ViewerId, ItemSlots>>,
}

impl FixedInventory {
    /// No inventories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the carried inventory (41 slots).
    pub fn set_inventory(&self, viewer: &ViewerId, items: ItemSlots) {
        if let Ok(mut map) = self.inventories.lock() {
            map.insert(viewer.clone(), items);
        }
    }

    /// Set the ender chest (27 slots).
    pub fn set_ender_chest(&self, viewer: &ViewerId, items: ItemSlots) {
        if let Ok(mut map) = self.ender_chests.lock() {
            map.insert(viewer.clone(), items);
        }
    }
}

impl InventorySource for FixedInventory {
    fn snapshot(&self, viewer: &ViewerId) -> ItemSlots {
        self.inventories
            .lock()
            .ok()
            .and_then(|map| map.get(viewer).cloned())
            .unwrap_or_else(|| empty_slots(41))
    }

    fn equipment_snapshot(&self, viewer: &ViewerId) -> ItemSlots {
        self.ender_chests
            .lock()
            .ok()
            .and_then(|map| map.get(viewer).cloned())
            .unwrap_or_else(|| empty_slots(27))
    }
}

/// Drops stacks of banned materials.
pub struct BannedMaterialFilter {
    banned: Vec<Material>,
}

impl BannedMaterialFilter {
    /// Filter removing every material in `banned`.
    pub fn new(banned: impl IntoIterator<Item = Material>) -> Self {
        Self {
            banned: banned.into_iter().collect(),
        }
    }

    fn allows(&self, item: &ItemStack) -> bool {
        !self.banned.contains(&item.material)
    }
}

impl Default for BannedMaterialFilter {
    /// Blocks the usual admin-only items.
    fn default() -> Self {
        Self::new([
            Material::Bedrock,
            Material::Barrier,
            Material::CommandBlock,
            Material::Spawner,
            Material::StructureVoid,
            Material::KnowledgeBook,
            Material::DebugStick,
        ])
    }
}

impl ItemFilter for BannedMaterialFilter {
    fn filter(&self, items: ItemSlots) -> ItemSlots {
        items
            .into_iter()
            .map(|slot| slot.filter(|item| self.allows(item)))
            .collect()
    }
}

/// Keeps every broadcast and optionally journals it to disk.
#[derive(Default)]
pub struct RecordingBroadcast {
    events: Mutex<Vec<BroadcastEvent>>,
    journal: Option<Mutex<JsonlSink>>,
}

impl RecordingBroadcast {
    /// Record in memory only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also append each event to `journal`.
    pub fn with_journal(journal: JsonlSink) -> Self {
        Self {
            events: Mutex::default(),
            journal: Some(Mutex::new(journal)),
        }
    }

    /// Events broadcast so far.
    pub fn events(&self) -> Vec<BroadcastEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl BroadcastSink for RecordingBroadcast {
    fn broadcast(&self, event: BroadcastEvent) {
        if let Some(journal) = &self.journal {
            if let Ok(mut sink) = journal.lock() {
                if let Err(err) = sink.write(&BroadcastRecord::now(&event)) {
                    warn!(%err, "failed to journal broadcast");
                }
            }
        }
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

/// Records player-facing effects.
#[derive(Default)]
pub struct RecordingPlayer {
    messages: Mutex<Vec<(ViewerId, Text)>>,
    repaired: Mutex<Vec<ViewerId>>,
    cleared: Mutex<Vec<ViewerId>>,
}

impl RecordingPlayer {
    /// Nothing recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text of the messages sent to `viewer`.
    pub fn messages_for(&self, viewer: &ViewerId) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| {
                messages
                    .iter()
                    .filter(|(to, _)| to == viewer)
                    .map(|(_, text)| text.plain())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Viewers whose gear was repaired.
    pub fn repaired(&self) -> Vec<ViewerId> {
        self.repaired.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Viewers whose inventory was cleared.
    pub fn cleared(&self) -> Vec<ViewerId> {
        self.cleared.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl PlayerActions for RecordingPlayer {
    fn send_message(&self, viewer: &ViewerId, message: Text) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((viewer.clone(), message));
        }
    }

    fn repair_all(&self, viewer: &ViewerId) {
        if let Ok(mut repaired) = self.repaired.lock() {
            repaired.push(viewer.clone());
        }
    }

    fn clear_inventory(&self, viewer: &ViewerId) {
        if let Ok(mut cleared) = self.cleared.lock() {
            cleared.push(viewer.clone());
        }
    }
}

/// One of each in-memory collaborator, with typed handles kept for assertions.
#[derive(Clone)]
pub struct MemoryWorld {
    /// Kit storage.
    pub store: Arc<MemoryKitStore>,
    /// Inventories.
    pub inventory: Arc<FixedInventory>,
    /// Import filter.
    pub filter: Arc<BannedMaterialFilter>,
    /// Broadcast recorder.
    pub broadcast: Arc<RecordingBroadcast>,
    /// Player effect recorder.
    pub player: Arc<RecordingPlayer>,
}

impl MemoryWorld {
    /// Empty world with the default banned-material filter.
    pub fn new() -> Self {
        Self::with_broadcast(RecordingBroadcast::new())
    }

    /// Empty world that records broadcasts through `broadcast`.
    pub fn with_broadcast(broadcast: RecordingBroadcast) -> Self {
        Self {
            store: Arc::new(MemoryKitStore::new()),
            inventory: Arc::new(FixedInventory::new()),
            filter: Arc::new(BannedMaterialFilter::default()),
            broadcast: Arc::new(broadcast),
            player: Arc::new(RecordingPlayer::new()),
        }
    }

    /// Collaborators for a [`perkit_menu::MenuEngine`].
    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            store: self.store.clone(),
            inventory: self.inventory.clone(),
            filter: Some(self.filter.clone()),
            broadcast: self.broadcast.clone(),
            player: self.player.clone(),
        }
    }
}

impl Default for MemoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_round_trips_by_key() {
        let store = MemoryKitStore::new();
        let handle = KitHandle::Personal {
            owner: ViewerId::new("u"),
            slot: 1,
        };
        assert!(store.get(&handle).is_none());
        store.insert(&handle, empty_slots(41));
        assert_eq!(store.stored(&handle).map(|k| k.len()), Some(41));
        assert!(store.get(&KitHandle::Public("u1".into())).is_none());
    }

    #[test]
    fn filter_keeps_slot_positions() {
        let filter = BannedMaterialFilter::default();
        let items = vec![
            Some(ItemStack::new(Material::Bedrock, 1)),
            None,
            Some(ItemStack::new(Material::GoldenApple, 64)),
        ];
        let filtered = filter.filter(items);
        assert_eq!(filtered.len(), 3);
        assert!(filtered[0].is_none());
        assert_eq!(filtered[2].as_ref().map(|i| i.material), Some(Material::GoldenApple));
    }

    #[test]
    fn unknown_viewers_have_empty_inventories() {
        let inventory = FixedInventory::new();
        let viewer = ViewerId::new("nobody");
        assert_eq!(inventory.snapshot(&viewer).len(), 41);
        assert_eq!(inventory.equipment_snapshot(&viewer).len(), 27);
    }
}
