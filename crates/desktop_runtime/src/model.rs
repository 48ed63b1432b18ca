use desktop_app_contract::PanelId;
use serde::{Deserialize, Serialize};

/// Viewports narrower than this use the small-screen layout.
pub const SMALL_SCREEN_BREAKPOINT_PX: i32 = 768;
pub const DEFAULT_WINDOW_X: i32 = 50;
pub const DEFAULT_WINDOW_Y: i32 = 50;
pub const DEFAULT_WINDOW_WIDTH: i32 = 400;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn is_small_screen(self) -> bool {
        self.width < SMALL_SCREEN_BREAKPOINT_PX
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Default for WindowPosition {
    fn default() -> Self {
        Self {
            x: DEFAULT_WINDOW_X,
            y: DEFAULT_WINDOW_Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: PanelId,
    pub title: String,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
}

impl WindowRecord {
    /// Whether the window ignores its position and fills the desktop.
    pub fn is_full_screen(&self, viewport: Viewport) -> bool {
        self.maximized || viewport.is_small_screen()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesktopState {
    /// Open windows in open order.
    pub windows: Vec<WindowRecord>,
    pub focused: Option<PanelId>,
    pub viewport: Viewport,
}

impl DesktopState {
    pub fn focused_window_id(&self) -> Option<&PanelId> {
        self.focused.as_ref()
    }

    pub fn window(&self, id: &PanelId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == *id)
    }

    pub fn is_open(&self, id: &PanelId) -> bool {
        self.window(id).is_some()
    }

    pub fn is_focused(&self, id: &PanelId) -> bool {
        self.focused.as_ref() == Some(id)
    }

    /// Windows in taskbar order (open order, minimized included).
    pub fn ordered_taskbar_windows(&self) -> Vec<WindowRecord> {
        self.windows.clone()
    }

    pub fn small_screen(&self) -> bool {
        self.viewport.is_small_screen()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub panel_id: PanelId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
