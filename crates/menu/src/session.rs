//! Per-viewer menu session: the one view a viewer currently has open.

use tracing::debug;

use crate::click::ClickType;
use crate::engine::{ClickOutcome, MenuEngine};
use crate::error::MenuError;
use crate::handle::{KitHandle, Viewer};
use crate::view::{MenuKind, MenuView};

/// What a session step did to the open view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Nothing happened.
    Ignored,
    /// The current view changed in place or an action ran.
    Updated,
    /// A new view replaced the current one.
    Opened,
    /// The view closed.
    Closed,
}

/// Holds a viewer's current view and applies click outcomes to it.
pub struct MenuSession {
    viewer: Viewer,
    current: Option<MenuView>,
}

impl MenuSession {
    /// A session with nothing open.
    pub fn new(viewer: Viewer) -> Self {
        Self {
            viewer,
            current: None,
        }
    }

    /// The session's viewer.
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// The open view, if any.
    pub fn current(&self) -> Option<&MenuView> {
        self.current.as_ref()
    }

    /// Mutable access for host-side item moves in unlocked slots.
    pub fn current_mut(&mut self) -> Option<&mut MenuView> {
        self.current.as_mut()
    }

    /// Open `kind`, replacing whatever is open.
    pub fn open(&mut self, engine: &MenuEngine, kind: &MenuKind) -> Result<SessionEvent, MenuError> {
        match engine.open(&self.viewer, kind)? {
            Some(view) => {
                self.replace(engine, Some(view));
                Ok(SessionEvent::Opened)
            }
            None => Ok(SessionEvent::Updated),
        }
    }

    /// Forward a click on the open view.
    pub fn click(
        &mut self,
        engine: &MenuEngine,
        slot: usize,
        click: ClickType,
    ) -> Result<SessionEvent, MenuError> {
        let Some(view) = self.current.as_mut() else {
            return Ok(SessionEvent::Ignored);
        };
        let event = match engine.click(&self.viewer, view, slot, click)? {
            ClickOutcome::Ignored => SessionEvent::Ignored,
            ClickOutcome::Handled => SessionEvent::Updated,
            ClickOutcome::Open(next) => {
                self.replace(engine, Some(next));
                SessionEvent::Opened
            }
            ClickOutcome::Close => {
                self.replace(engine, None);
                SessionEvent::Closed
            }
        };
        Ok(event)
    }

    /// Close the open view and return it.
    pub fn close(&mut self, engine: &MenuEngine) -> Option<MenuView> {
        self.replace(engine, None)
    }

    fn replace(&mut self, engine: &MenuEngine, next: Option<MenuView>) -> Option<MenuView> {
        let previous = std::mem::replace(&mut self.current, next)?;
        if engine.settings().editor.save_on_close {
            if let Some(handle) = engine.commit(&previous) {
                log_commit(&self.viewer, &handle);
            }
        }
        Some(previous)
    }
}

fn log_commit(viewer: &Viewer, handle: &KitHandle) {
    debug!(viewer = %viewer.name, %handle, "editor saved on close");
}
