//! Menu views: a grid of slots shown to one viewer.

use perkit_core::{ItemSlots, ItemStack, Text};
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::click::ClickHandler;
use crate::handle::ViewerId;
use crate::layout;
use crate::parser::Placeholders;

/// Slots per row.
pub const COLUMNS: usize = 9;
/// Largest row count a container supports.
pub const MAX_ROWS: u8 = 6;
/// Row count of the fixed-size menu kinds.
pub const FIXED_ROWS: u8 = 6;

/// Slots in a personal or public kit (36 inventory, 4 armor, off-hand).
pub const KIT_SLOTS: usize = 41;
/// Slots in an ender-chest kit.
pub const ENDER_CHEST_SLOTS: usize = 27;
/// Slots in a kit room page.
pub const KIT_ROOM_SLOTS: usize = 45;

/// Which menu a view shows, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuKind {
    /// Kit overview for the viewer.
    Main,
    /// Editor for personal kit N.
    KitEditor(u32),
    /// Editor for ender-chest kit N.
    EnderChestEditor(u32),
    /// Read-only view of another player's kit.
    Inspect {
        /// Kit owner.
        target: ViewerId,
        /// Kit number.
        slot: u32,
    },
    /// List of public kits.
    PublicKitCatalog,
    /// Read-only view of a public kit.
    PublicKitView(String),
    /// Admin editor for a public kit.
    PublicKitEditor(String),
    /// Shared kit room page (0-based).
    KitRoom(usize),
}

impl MenuKind {
    /// Layout section describing this kind.
    pub fn section(&self) -> &'static str {
        match self {
            MenuKind::Main => layout::MAIN_MENU,
            MenuKind::KitEditor(_) => layout::KIT_EDITOR_MENU,
            MenuKind::EnderChestEditor(_) => layout::ENDER_CHEST_MENU,
            MenuKind::Inspect { .. } => layout::INSPECT_MENU,
            MenuKind::PublicKitCatalog => layout::PUBLIC_KIT_MENU,
            MenuKind::PublicKitView(_) => layout::PUBLIC_KIT_VIEW_MENU,
            MenuKind::PublicKitEditor(_) => layout::PUBLIC_KIT_EDITOR_MENU,
            MenuKind::KitRoom(_) => layout::KIT_ROOM_MENU,
        }
    }

    /// Kinds that ignore the configured row count.
    pub fn has_fixed_rows(&self) -> bool {
        !matches!(self, MenuKind::Main | MenuKind::KitEditor(_))
    }
}

/// Whether the viewer may move items in or out of a slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotPolicy {
    /// Display only.
    #[default]
    Locked,
    /// Items may be placed and taken.
    AllowModification,
}

/// One cell of the grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slot {
    /// Displayed item.
    pub item: Option<ItemStack>,
    /// Interaction policy.
    pub policy: SlotPolicy,
    /// Behaviour bound to clicks on this slot.
    pub handler: Option<ClickHandler>,
}

/// A populated menu grid.
///
/// Index arguments must be below [`MenuView::size`]; anything else is a bug in
/// the caller and panics.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    kind: MenuKind,
    title: Text,
    rows: u8,
    slots: Vec<Slot>,
    viewer: Option<ViewerId>,
    cursor_drop: bool,
}

impl MenuView {
    /// Build an empty, fully locked grid.
    ///
    /// Fixed-size kinds always get six rows; other kinds clamp `rows` to 1..=6.
    pub fn build(kind: MenuKind, rows: u8, title: &str, placeholders: &Placeholders) -> Self {
        let rows = if kind.has_fixed_rows() {
            FIXED_ROWS
        } else {
            rows.clamp(1, MAX_ROWS)
        };
        Self {
            title: Text::legacy(&placeholders.apply(title)),
            slots: vec![Slot::default(); rows as usize * COLUMNS],
            kind,
            rows,
            viewer: None,
            cursor_drop: false,
        }
    }

    /// Menu kind and parameters.
    pub fn kind(&self) -> &MenuKind {
        &self.kind
    }

    /// Resolved title.
    pub fn title(&self) -> &Text {
        &self.title
    }

    /// Row count.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of slots (`rows * 9`).
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// All slots in index order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot at `index`.
    pub fn slot(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    /// Item shown at `index`.
    pub fn item(&self, index: usize) -> Option<&ItemStack> {
        self.slots[index].item.as_ref()
    }

    /// Place an item; air and zero-count stacks clear the slot.
    pub fn set_item(&mut self, index: usize, item: Option<ItemStack>) {
        self.slots[index].item = item.filter(|item| !item.is_empty());
    }

    /// Put a copy of `item` in each listed slot.
    pub fn fill(&mut self, indices: &[usize], item: &ItemStack) {
        for &index in indices {
            self.set_item(index, Some(item.clone()));
        }
    }

    /// Empty every slot in `range`.
    pub fn clear_range(&mut self, range: Range<usize>) {
        for slot in &mut self.slots[range] {
            slot.item = None;
        }
    }

    /// Unlock every slot in `range`.
    pub fn allow_modification(&mut self, range: Range<usize>) {
        for slot in &mut self.slots[range] {
            slot.policy = SlotPolicy::AllowModification;
        }
    }

    /// Whether the slot at `index` is unlocked.
    pub fn is_modifiable(&self, index: usize) -> bool {
        self.slots[index].policy == SlotPolicy::AllowModification
    }

    /// Copy `items` into consecutive slots starting at `start`.
    pub fn load_contents(&mut self, start: usize, items: &[Option<ItemStack>]) {
        for (offset, item) in items.iter().enumerate() {
            self.set_item(start + offset, item.clone());
        }
    }

    /// Snapshot the items in `range`.
    pub fn contents(&self, range: Range<usize>) -> ItemSlots {
        self.slots[range].iter().map(|slot| slot.item.clone()).collect()
    }

    /// Bind a handler, replacing any previous one.
    pub fn set_handler(&mut self, index: usize, handler: ClickHandler) {
        self.slots[index].handler = Some(handler);
    }

    /// Handler bound at `index`.
    pub fn handler(&self, index: usize) -> Option<&ClickHandler> {
        self.slots[index].handler.as_ref()
    }

    /// Let the viewer drop the item held on the cursor while this view is open.
    pub fn allow_cursor_drop(&mut self) {
        self.cursor_drop = true;
    }

    /// Whether cursor dropping is enabled.
    pub fn allows_cursor_drop(&self) -> bool {
        self.cursor_drop
    }

    /// Hand the view to `viewer`; a view is shown to one viewer at a time.
    pub fn activate(&mut self, viewer: &ViewerId) {
        self.viewer = Some(viewer.clone());
    }

    /// Viewer the view was activated for.
    pub fn viewer(&self) -> Option<&ViewerId> {
        self.viewer.as_ref()
    }
}
