//! Serializable summaries of menu views for replay output and assertions.

use perkit_menu::{MenuKind, MenuView, SlotPolicy};
use serde::Serialize;

/// A view reduced to what a client would see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSummary {
    /// Menu kind and parameters.
    pub kind: MenuKind,
    /// Title without format codes.
    pub title: String,
    /// Row count.
    pub rows: u8,
    /// Occupied slots only.
    pub slots: Vec<SlotSummary>,
}

/// One occupied slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotSummary {
    /// Slot index.
    pub index: usize,
    /// Material name.
    pub material: String,
    /// Stack size.
    pub count: u32,
    /// Display name without format codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the slot is unlocked.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub editable: bool,
    /// Whether a click handler is bound.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bound: bool,
}

impl ViewSummary {
    /// Summarise `view`.
    pub fn of(view: &MenuView) -> Self {
        let slots = view
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let item = slot.item.as_ref()?;
                Some(SlotSummary {
                    index,
                    material: item.material.name().to_string(),
                    count: item.count,
                    name: item.plain_name(),
                    editable: slot.policy == SlotPolicy::AllowModification,
                    bound: slot.handler.is_some(),
                })
            })
            .collect();
        Self {
            kind: view.kind().clone(),
            title: view.title().plain(),
            rows: view.rows(),
            slots,
        }
    }

    /// Summary of the slot at `index`, if occupied.
    pub fn slot(&self, index: usize) -> Option<&SlotSummary> {
        self.slots.iter().find(|slot| slot.index == index)
    }
}
