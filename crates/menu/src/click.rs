//! Click handlers as data: modifier gates paired with actions.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::handle::KitHandle;
use crate::view::{MenuKind, MenuView};

/// How the viewer clicked a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickType {
    /// Plain left click
    Left,
    /// Plain right click
    Right,
    /// Shift + left click
    ShiftLeft,
    /// Shift + right click
    ShiftRight,
    /// Middle (pick block) click
    Middle,
    /// Left double click
    DoubleClick,
    /// Hotbar number key
    NumberKey,
    /// Drop key
    Drop,
    /// Control + drop key
    ControlDrop,
}

impl ClickType {
    /// Shift was held.
    pub fn is_shift_click(self) -> bool {
        matches!(self, ClickType::ShiftLeft | ClickType::ShiftRight)
    }

    /// Any left-button click.
    pub fn is_left_click(self) -> bool {
        matches!(
            self,
            ClickType::Left | ClickType::ShiftLeft | ClickType::DoubleClick
        )
    }

    /// Any right-button click.
    pub fn is_right_click(self) -> bool {
        matches!(self, ClickType::Right | ClickType::ShiftRight)
    }
}

/// Predicate over click modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickGate {
    /// Every click.
    Any,
    /// Shift-left or shift-right.
    AnyShift,
    /// Plain left only.
    Left,
    /// Plain right only.
    Right,
    /// Shift-right only.
    ShiftRight,
    /// Plain or shift left.
    LeftOrShiftLeft,
    /// Plain or shift right.
    RightOrShiftRight,
    /// Any left- or right-button click, shift and double click included.
    AnyButton,
}

impl ClickGate {
    /// Whether `click` passes the gate.
    pub fn matches(self, click: ClickType) -> bool {
        use ClickType as C;
        match self {
            ClickGate::Any => true,
            ClickGate::AnyShift => click.is_shift_click(),
            ClickGate::Left => click == C::Left,
            ClickGate::Right => click == C::Right,
            ClickGate::ShiftRight => click == C::ShiftRight,
            ClickGate::LeftOrShiftLeft => matches!(click, C::Left | C::ShiftLeft),
            ClickGate::RightOrShiftRight => matches!(click, C::Right | C::ShiftRight),
            ClickGate::AnyButton => click.is_left_click() || click.is_right_click(),
        }
    }
}

/// Where imported items come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportSource {
    /// The viewer's carried inventory (41 slots).
    Inventory,
    /// The viewer's ender chest (27 slots).
    EnderChest,
}

/// Effect of a matched click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open another menu.
    Navigate(MenuKind),
    /// Announce and open kit room page 0.
    EnterKitRoom,
    /// Overwrite slots from `start` with the viewer's items.
    Import {
        /// Item source.
        source: ImportSource,
        /// First view slot written.
        start: usize,
    },
    /// Empty a slot range of the view.
    ClearRange(Range<usize>),
    /// Apply a stored kit to the viewer and close.
    Load(KitHandle),
    /// Store the viewer's inventory as a kit room page.
    SaveKitRoom {
        /// Page written.
        page: usize,
    },
    /// Announce and repair the viewer's gear.
    RepairItems,
    /// Clear the viewer's inventory.
    ClearInventory,
    /// Close the view.
    Close,
}

/// Ordered gate/action rules; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickHandler {
    rules: Vec<(ClickGate, Action)>,
}

impl ClickHandler {
    /// A single-rule handler.
    pub fn on(gate: ClickGate, action: Action) -> Self {
        Self {
            rules: vec![(gate, action)],
        }
    }

    /// Add a lower-priority rule.
    pub fn or(mut self, gate: ClickGate, action: Action) -> Self {
        self.rules.push((gate, action));
        self
    }

    /// Left variants load the kit, right variants open its editor.
    pub fn load_or_edit(handle: KitHandle, editor: MenuKind) -> Self {
        Self::on(ClickGate::LeftOrShiftLeft, Action::Load(handle))
            .or(ClickGate::RightOrShiftRight, Action::Navigate(editor))
    }

    /// Catalog entry for an assigned public kit.
    pub fn public_kit(id: &str) -> Self {
        Self::on(ClickGate::Left, Action::Load(KitHandle::Public(id.to_string())))
            .or(ClickGate::Right, Action::Navigate(MenuKind::PublicKitView(id.to_string())))
    }

    /// Catalog entry for administrators; shift opens the editor before any
    /// plain-click rule is consulted.
    pub fn admin_public_kit(id: &str) -> Self {
        Self::on(
            ClickGate::AnyShift,
            Action::Navigate(MenuKind::PublicKitEditor(id.to_string())),
        )
        .or(ClickGate::Left, Action::Load(KitHandle::Public(id.to_string())))
        .or(ClickGate::Right, Action::Navigate(MenuKind::PublicKitView(id.to_string())))
    }

    /// The action for `click`, if any rule matches.
    pub fn resolve(&self, click: ClickType) -> Option<&Action> {
        self.rules
            .iter()
            .find(|(gate, _)| gate.matches(click))
            .map(|(_, action)| action)
    }
}

/// Bind `handler` to `slot`, replacing the previous binding.
pub fn bind(view: &mut MenuView, slot: usize, handler: ClickHandler) {
    view.set_handler(slot, handler);
}

/// Any click opens `target`.
pub fn bind_navigate(view: &mut MenuView, slot: usize, target: MenuKind) {
    bind(view, slot, ClickHandler::on(ClickGate::Any, Action::Navigate(target)));
}

/// Any click imports from `source` into the view starting at `start`.
pub fn bind_import(view: &mut MenuView, slot: usize, source: ImportSource, start: usize) {
    bind(
        view,
        slot,
        ClickHandler::on(ClickGate::Any, Action::Import { source, start }),
    );
}

/// Shift clicks empty `range`; other clicks do nothing.
pub fn bind_clear(view: &mut MenuView, slot: usize, range: Range<usize>) {
    bind(view, slot, ClickHandler::on(ClickGate::AnyShift, Action::ClearRange(range)));
}

/// Any left or right click opens `editor`.
pub fn bind_edit(view: &mut MenuView, slot: usize, editor: MenuKind) {
    bind(view, slot, ClickHandler::on(ClickGate::AnyButton, Action::Navigate(editor)));
}

/// Left or shift-left loads `handle`.
pub fn bind_load(view: &mut MenuView, slot: usize, handle: KitHandle) {
    bind(view, slot, ClickHandler::on(ClickGate::LeftOrShiftLeft, Action::Load(handle)));
}

/// Shift-right saves kit room `page`.
pub fn bind_save_kit_room(view: &mut MenuView, slot: usize, page: usize) {
    bind(
        view,
        slot,
        ClickHandler::on(ClickGate::ShiftRight, Action::SaveKitRoom { page }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::ViewerId;
    use crate::parser::Placeholders;

    const ALL_CLICKS: [ClickType; 9] = [
        ClickType::Left,
        ClickType::Right,
        ClickType::ShiftLeft,
        ClickType::ShiftRight,
        ClickType::Middle,
        ClickType::DoubleClick,
        ClickType::NumberKey,
        ClickType::Drop,
        ClickType::ControlDrop,
    ];

    #[test]
    fn any_shift_only_matches_shift_clicks() {
        for click in ALL_CLICKS {
            assert_eq!(ClickGate::AnyShift.matches(click), click.is_shift_click());
        }
    }

    #[test]
    fn admin_button_checks_shift_first() {
        let handler = ClickHandler::admin_public_kit("nethpot");
        assert_eq!(
            handler.resolve(ClickType::ShiftLeft),
            Some(&Action::Navigate(MenuKind::PublicKitEditor("nethpot".into())))
        );
        assert_eq!(
            handler.resolve(ClickType::ShiftRight),
            Some(&Action::Navigate(MenuKind::PublicKitEditor("nethpot".into())))
        );
        assert_eq!(
            handler.resolve(ClickType::Left),
            Some(&Action::Load(KitHandle::Public("nethpot".into())))
        );
        assert_eq!(
            handler.resolve(ClickType::Right),
            Some(&Action::Navigate(MenuKind::PublicKitView("nethpot".into())))
        );
        assert_eq!(handler.resolve(ClickType::Middle), None);
    }

    #[test]
    fn load_or_edit_splits_on_button() {
        let handle = KitHandle::Personal {
            owner: ViewerId::new("u"),
            slot: 3,
        };
        let handler = ClickHandler::load_or_edit(handle.clone(), MenuKind::KitEditor(3));
        for click in [ClickType::Left, ClickType::ShiftLeft] {
            assert_eq!(handler.resolve(click), Some(&Action::Load(handle.clone())));
        }
        for click in [ClickType::Right, ClickType::ShiftRight] {
            assert_eq!(
                handler.resolve(click),
                Some(&Action::Navigate(MenuKind::KitEditor(3)))
            );
        }
        assert_eq!(handler.resolve(ClickType::NumberKey), None);
    }

    #[test]
    fn rebinding_replaces_the_handler() {
        let mut view = MenuView::build(MenuKind::KitRoom(0), 6, "t", &Placeholders::new());
        bind_navigate(&mut view, 53, MenuKind::Main);
        bind_save_kit_room(&mut view, 53, 0);

        let handler = view.handler(53).expect("bound");
        assert_eq!(handler.resolve(ClickType::Left), None);
        assert_eq!(
            handler.resolve(ClickType::ShiftRight),
            Some(&Action::SaveKitRoom { page: 0 })
        );
    }

    #[test]
    fn clear_binding_ignores_plain_clicks() {
        let mut view = MenuView::build(MenuKind::KitEditor(1), 6, "t", &Placeholders::new());
        bind_clear(&mut view, 52, 0..41);
        let handler = view.handler(52).expect("bound");
        assert_eq!(handler.resolve(ClickType::Left), None);
        assert_eq!(handler.resolve(ClickType::ShiftLeft), Some(&Action::ClearRange(0..41)));
    }

    #[test]
    fn edit_binding_accepts_every_button_click() {
        let mut view = MenuView::build(MenuKind::Main, 6, "t", &Placeholders::new());
        bind_edit(&mut view, 27, MenuKind::KitEditor(1));
        let handler = view.handler(27).expect("bound");
        for click in [
            ClickType::Left,
            ClickType::Right,
            ClickType::ShiftLeft,
            ClickType::ShiftRight,
            ClickType::DoubleClick,
        ] {
            assert_eq!(
                handler.resolve(click),
                Some(&Action::Navigate(MenuKind::KitEditor(1))),
                "{click:?}"
            );
        }
        for click in [ClickType::Middle, ClickType::NumberKey, ClickType::Drop] {
            assert_eq!(handler.resolve(click), None, "{click:?}");
        }
    }

    #[test]
    fn click_types_deserialize_from_snake_case() {
        let click: ClickType = serde_json::from_str("\"shift_right\"").expect("valid click");
        assert_eq!(click, ClickType::ShiftRight);
    }
}
