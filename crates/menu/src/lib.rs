#![warn(missing_docs)]
//! Interactive kit menus: declarative layouts rendered into slot grids, with
//! click handlers bound to kit storage, inventories and broadcasts.

pub mod click;
pub mod collab;
pub mod engine;
pub mod error;
pub mod handle;
pub mod layout;
pub mod parser;
pub mod render;
pub mod session;
pub mod settings;
pub mod view;

pub use click::{Action, ClickGate, ClickHandler, ClickType, ImportSource};
pub use collab::{
    BroadcastEvent, BroadcastSink, Collaborators, InventorySource, ItemFilter, KitStore,
    PlayerActions,
};
pub use engine::{ClickOutcome, MenuEngine};
pub use error::{ConfigError, DecorationError, MenuError};
pub use handle::{Capabilities, KitHandle, Viewer, ViewerId};
pub use layout::{ItemDefinition, MenuConfig, MenuLayout, Region};
pub use parser::Placeholders;
pub use session::{MenuSession, SessionEvent};
pub use settings::Settings;
pub use view::{MenuKind, MenuView, Slot, SlotPolicy};
