//! Menu assembly and click execution.
//!
//! Every menu is assembled in the same order: build the shell, fill filler
//! and cosmetic slots, load content from the kit store, unlock the content
//! region, bind buttons, then activate the view for the viewer. Buttons are
//! bound last so they win over anything bound earlier on the same slot.

mod inspect;
mod kit_editor;
mod kit_room;
mod main_menu;
mod public_kits;

use perkit_core::{ItemSlots, Text};
use std::ops::Range;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

use crate::click::{
    bind, bind_clear, bind_import, bind_load, bind_navigate, Action, ClickGate, ClickHandler,
    ClickType, ImportSource,
};
use crate::collab::{fit, BroadcastEvent, Collaborators};
use crate::error::{ConfigError, MenuError};
use crate::handle::{KitHandle, Viewer, ViewerId};
use crate::layout::{MenuConfig, MenuLayout, KIT_ROOM_MENU};
use crate::parser::{self, Placeholders};
use crate::settings::Settings;
use crate::view::{MenuKind, MenuView, ENDER_CHEST_SLOTS, KIT_ROOM_SLOTS, KIT_SLOTS};

/// First view slot of the ender-chest editor's content region.
const ENDER_CHEST_START: usize = 9;

/// Result of a click.
#[derive(Debug)]
pub enum ClickOutcome {
    /// No handler matched; nothing happened.
    Ignored,
    /// The action ran; the current view stays open.
    Handled,
    /// Replace the current view.
    Open(MenuView),
    /// Close the current view.
    Close,
}

/// Builds menus and executes their click actions.
pub struct MenuEngine {
    layouts: RwLock<Arc<MenuConfig>>,
    settings: RwLock<Arc<Settings>>,
    collab: Collaborators,
}

impl MenuEngine {
    /// Create an engine over a layout set, settings and collaborators.
    pub fn new(layouts: MenuConfig, settings: Settings, collab: Collaborators) -> Self {
        check_kit_room_pages(&layouts, &settings);
        Self {
            layouts: RwLock::new(Arc::new(layouts)),
            settings: RwLock::new(Arc::new(settings)),
            collab,
        }
    }

    /// Swap in new layouts and settings. Views already open keep the ones they
    /// were built with.
    pub fn reload(&self, layouts: MenuConfig, settings: Settings) {
        check_kit_room_pages(&layouts, &settings);
        *self.layouts.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(layouts);
        *self.settings.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(settings);
        info!("menu configuration reloaded");
    }

    /// Current layout set.
    pub fn layouts(&self) -> Arc<MenuConfig> {
        self.layouts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current settings.
    pub fn settings(&self) -> Arc<Settings> {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Injected collaborators.
    pub fn collaborators(&self) -> &Collaborators {
        &self.collab
    }

    /// Open any menu kind for `viewer`.
    ///
    /// Returns `Ok(None)` when the menu declines to open (a public kit with
    /// nothing stored); the viewer has been told why.
    pub fn open(&self, viewer: &Viewer, kind: &MenuKind) -> Result<Option<MenuView>, MenuError> {
        let view = match kind {
            MenuKind::Main => self.open_main_menu(viewer)?,
            MenuKind::KitEditor(slot) => self.open_kit_editor(viewer, *slot)?,
            MenuKind::EnderChestEditor(slot) => self.open_ender_chest_editor(viewer, *slot)?,
            MenuKind::Inspect { target, slot } => self.open_inspect(viewer, target, *slot)?,
            MenuKind::PublicKitCatalog => self.open_public_catalog(viewer)?,
            MenuKind::PublicKitView(id) => return self.open_public_kit_view(viewer, id),
            MenuKind::PublicKitEditor(id) => self.open_public_kit_editor(viewer, id)?,
            MenuKind::KitRoom(page) => self.open_kit_room(viewer, *page)?,
        };
        Ok(Some(view))
    }

    /// Run the handler bound at `slot` for `click`.
    ///
    /// Slots outside the view (the viewer's own inventory) are ignored.
    pub fn click(
        &self,
        viewer: &Viewer,
        view: &mut MenuView,
        slot: usize,
        click: ClickType,
    ) -> Result<ClickOutcome, MenuError> {
        if slot >= view.size() {
            return Ok(ClickOutcome::Ignored);
        }
        let Some(action) = view.handler(slot).and_then(|h| h.resolve(click)).cloned() else {
            return Ok(ClickOutcome::Ignored);
        };
        debug!(menu = view.kind().section(), slot, ?click, ?action, "click resolved");
        self.perform(viewer, view, action)
    }

    fn perform(
        &self,
        viewer: &Viewer,
        view: &mut MenuView,
        action: Action,
    ) -> Result<ClickOutcome, MenuError> {
        let outcome = match action {
            Action::Navigate(kind) => match self.open(viewer, &kind)? {
                Some(next) => ClickOutcome::Open(next),
                None => ClickOutcome::Handled,
            },
            Action::EnterKitRoom => {
                let room = self.open_kit_room(viewer, 0)?;
                self.collab.broadcast.broadcast(BroadcastEvent::OpenedKitRoom {
                    viewer: viewer.name.clone(),
                });
                ClickOutcome::Open(room)
            }
            Action::Import { source, start } => {
                let items = self.import_items(&viewer.id, source);
                view.load_contents(start, &items);
                ClickOutcome::Handled
            }
            Action::ClearRange(range) => {
                view.clear_range(range);
                ClickOutcome::Handled
            }
            Action::Load(handle) => {
                self.collab.store.apply(viewer, &handle);
                ClickOutcome::Close
            }
            Action::SaveKitRoom { page } => {
                self.save_kit_room(viewer, page);
                ClickOutcome::Open(self.open_kit_room(viewer, page)?)
            }
            Action::RepairItems => {
                self.collab.broadcast.broadcast(BroadcastEvent::RepairedItems {
                    viewer: viewer.name.clone(),
                });
                self.collab.player.repair_all(&viewer.id);
                ClickOutcome::Handled
            }
            Action::ClearInventory => {
                self.collab.player.clear_inventory(&viewer.id);
                self.collab
                    .player
                    .send_message(&viewer.id, Text::legacy("&aInventory cleared"));
                ClickOutcome::Handled
            }
            Action::Close => ClickOutcome::Close,
        };
        Ok(outcome)
    }

    /// Persist an editor's content region to its kit handle.
    ///
    /// Returns the handle written, or `None` for views that are not editors
    /// or were never activated.
    pub fn commit(&self, view: &MenuView) -> Option<KitHandle> {
        let (handle, range) = editor_target(view)?;
        self.collab.store.put(&handle, view.contents(range));
        debug!(handle = %handle, "editor committed");
        Some(handle)
    }

    fn import_items(&self, viewer: &ViewerId, source: ImportSource) -> ItemSlots {
        let items = match source {
            ImportSource::Inventory => fit(self.collab.inventory.snapshot(viewer), KIT_SLOTS, "inventory"),
            ImportSource::EnderChest => fit(
                self.collab.inventory.equipment_snapshot(viewer),
                ENDER_CHEST_SLOTS,
                "ender chest",
            ),
        };
        match &self.collab.filter {
            Some(filter) if self.settings().anti_exploit.import_filter => {
                let len = items.len();
                fit(filter.filter(items), len, "item filter")
            }
            _ => items,
        }
    }

    fn save_kit_room(&self, viewer: &Viewer, page: usize) {
        let mut items = fit(self.collab.inventory.snapshot(&viewer.id), KIT_SLOTS, "inventory");
        items.resize(KIT_ROOM_SLOTS, None);
        self.collab.store.put(&KitHandle::KitRoomPage(page), items);
        info!(page, viewer = %viewer.name, "kit room page saved");
        self.collab
            .player
            .send_message(&viewer.id, Text::legacy("&aSaved menu"));
    }

    /// Stored items for `handle`, sized to its slot count.
    fn stored(&self, handle: &KitHandle) -> Option<ItemSlots> {
        let items = self.collab.store.get(handle)?;
        Some(fit(items, handle.slot_count(), "kit store"))
    }
}

fn check_kit_room_pages(layouts: &MenuConfig, settings: &Settings) {
    let Ok(layout) = layouts.section(KIT_ROOM_MENU) else {
        return;
    };
    let slots = layout.region("pages").map_or(0, |r| r.slots.len());
    let buttons = settings.kit_room.pages.len();
    if slots != buttons {
        warn!(
            slots,
            buttons,
            "kit room page slots and page buttons differ; extra entries are unused"
        );
    }
}

fn editor_target(view: &MenuView) -> Option<(KitHandle, Range<usize>)> {
    let owner = view.viewer()?.clone();
    let target = match view.kind() {
        MenuKind::KitEditor(slot) => (KitHandle::Personal { owner, slot: *slot }, 0..KIT_SLOTS),
        MenuKind::EnderChestEditor(slot) => (
            KitHandle::EnderChest { owner, slot: *slot },
            ENDER_CHEST_START..ENDER_CHEST_START + ENDER_CHEST_SLOTS,
        ),
        MenuKind::PublicKitEditor(id) => (KitHandle::Public(id.clone()), 0..KIT_SLOTS),
        _ => return None,
    };
    Some(target)
}

/// Look up `kind`'s section and build an empty view from it.
fn shell<'a>(
    layouts: &'a MenuConfig,
    kind: MenuKind,
    placeholders: &Placeholders,
) -> Result<(MenuView, &'a MenuLayout), ConfigError> {
    let layout = layouts.section(kind.section())?;
    let view = MenuView::build(kind, layout.rows, &layout.title, placeholders);
    Ok((view, layout))
}

/// Fill a region with its inline item. Absent or disabled regions are skipped.
fn fill_region(
    view: &mut MenuView,
    layout: &MenuLayout,
    region: &str,
    placeholders: Option<&Placeholders>,
) -> Result<(), ConfigError> {
    let Some(def) = layout.region(region) else {
        return Ok(());
    };
    let section = view.kind().section();
    let item = parser::parse(Some(&def.item), placeholders)
        .map_err(|err| err.in_region(section, region))?;
    view.fill(&def.slots, &item);
    Ok(())
}

/// Render and bind the listed buttons.
fn place_buttons(
    view: &mut MenuView,
    layout: &MenuLayout,
    keys: &[&str],
    placeholders: Option<&Placeholders>,
) -> Result<(), ConfigError> {
    for &key in keys {
        let Some(region) = layout.region(key) else {
            continue;
        };
        fill_region(view, layout, key, placeholders)?;
        for &slot in &region.slots {
            bind_button(view, slot, key);
        }
    }
    Ok(())
}

/// Bind the named button at `slot` for the view's kind. Display-only buttons
/// (`info`, `share_kits`, armor labels) stay unbound.
fn bind_button(view: &mut MenuView, slot: usize, key: &str) {
    let kind = view.kind().clone();
    match key {
        "kit_room" => bind(view, slot, ClickHandler::on(ClickGate::Any, Action::EnterKitRoom)),
        "premade_kits" => bind_navigate(view, slot, MenuKind::PublicKitCatalog),
        "repair_items" => bind(view, slot, ClickHandler::on(ClickGate::Any, Action::RepairItems)),
        "clear_inventory" => bind(
            view,
            slot,
            ClickHandler::on(ClickGate::AnyShift, Action::ClearInventory),
        ),
        "close" => bind(view, slot, ClickHandler::on(ClickGate::Any, Action::Close)),
        "import" => match kind {
            MenuKind::EnderChestEditor(_) => {
                bind_import(view, slot, ImportSource::EnderChest, ENDER_CHEST_START)
            }
            _ => bind_import(view, slot, ImportSource::Inventory, 0),
        },
        "clear_kit" => match kind {
            MenuKind::EnderChestEditor(_) => bind_clear(
                view,
                slot,
                ENDER_CHEST_START..ENDER_CHEST_START + ENDER_CHEST_SLOTS,
            ),
            _ => bind_clear(view, slot, 0..KIT_SLOTS),
        },
        "back" => match kind {
            MenuKind::PublicKitView(_) | MenuKind::PublicKitEditor(_) => {
                bind_navigate(view, slot, MenuKind::PublicKitCatalog)
            }
            _ => bind_navigate(view, slot, MenuKind::Main),
        },
        "refill" => {
            if let MenuKind::KitRoom(page) = kind {
                bind_navigate(view, slot, MenuKind::KitRoom(page));
            }
        }
        "load" => {
            if let MenuKind::PublicKitView(id) = kind {
                bind_load(view, slot, KitHandle::Public(id));
            }
        }
        _ => {}
    }
}

/// Kit number for a slot of a numbered region (`slot - offset`, at least 1).
fn kit_number(section: &str, region: &str, slot: usize, offset: usize) -> Result<u32, ConfigError> {
    slot.checked_sub(offset)
        .filter(|n| *n >= 1)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ConfigError::UnmappedSlot {
            section: section.to_string(),
            region: region.to_string(),
            slot,
        })
}
