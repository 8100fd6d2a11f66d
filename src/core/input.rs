use serde::{Deserialize, Serialize};

/// A logical button identifier, as reported by the frontend.
///
/// This is the frontend's abstract vocabulary: which physical key or pad
/// element it maps onto a given button is its own business (and typically
/// something it lets the user configure and persist, hence the serde
/// implementations). The adapter only ever queries player 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonType {
    Keypad1Up,
    Keypad1Down,
    Keypad1Left,
    Keypad1Right,
    Keypad2Up,
    Keypad2Down,
    Keypad2Left,
    Keypad2Right,
    A,
    B,
    X,
    Y,
    Z,
    L1,
    L2,
    L3,
    R1,
    R2,
    R3,
    Start,
    Select,
    /// The touchscreen query. Returns a packed [touch sample][TouchPoint::decode]
    /// instead of a 0/1 state.
    Touch,
    Analog1Up,
    Analog1Down,
    Analog1Left,
    Analog1Right,
    Analog2Up,
    Analog2Down,
    Analog2Left,
    Analog2Right,
}

/// The slots of the engine's input vector.
///
/// Slot order and count ([INPUT_VECTOR_LEN][super::INPUT_VECTOR_LEN]) are a
/// fixed contract with the engine. The adapter drives the twelve digital
/// controls and [EngineKey::PenDown] every frame; the remaining slots are
/// emulator-meta bindings the engine reads from other sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum EngineKey {
    A = 0,
    B = 1,
    X = 2,
    Y = 3,
    Up = 4,
    Down = 5,
    Left = 6,
    Right = 7,
    L = 8,
    R = 9,
    Start = 10,
    Select = 11,
    FoldScreen = 12,
    /// Set while a touchscreen contact is active.
    PenDown = 13,
    EmuPause = 14,
    EmuRewind = 15,
    EmuFf2x = 16,
    EmuFfMax = 17,
    // Slots 18..=25 are the capture/restore pairs for the four save slots,
    // see [EngineKey::capture_state] and [EngineKey::restore_state].
    ResetGame = 26,
    TurboA = 27,
    TurboB = 28,
    TurboX = 29,
    TurboY = 30,
    TurboL = 31,
    TurboR = 32,
    SolarPlus = 33,
    SolarMinus = 34,
    ToggleFullscreen = 35,
}

impl EngineKey {
    /// This key's slot index in the input vector.
    pub const fn slot(self) -> usize {
        self as usize
    }
    /// The capture-state slot for save slot `n` (0..=3).
    pub const fn capture_state(n: usize) -> usize {
        18 + n * 2
    }
    /// The restore-state slot for save slot `n` (0..=3).
    pub const fn restore_state(n: usize) -> usize {
        18 + n * 2 + 1
    }
}

/// Mapping from the frontend's logical buttons to input vector slots, one
/// entry per digital control the adapter drives.
pub const BUTTON_MAP: [(ButtonType, EngineKey); 12] = [
    (ButtonType::Keypad1Left, EngineKey::Left),
    (ButtonType::Keypad1Right, EngineKey::Right),
    (ButtonType::Keypad1Up, EngineKey::Up),
    (ButtonType::Keypad1Down, EngineKey::Down),
    (ButtonType::A, EngineKey::A),
    (ButtonType::B, EngineKey::B),
    (ButtonType::X, EngineKey::X),
    (ButtonType::Y, EngineKey::Y),
    (ButtonType::Select, EngineKey::Select),
    (ButtonType::Start, EngineKey::Start),
    (ButtonType::L1, EngineKey::L),
    (ButtonType::R1, EngineKey::R),
];

/// The [ButtonType::Touch] query result while the pointer is not down.
pub const TOUCH_RELEASED: u32 = u32::MAX;

/// Width of the touchscreen, in pixels.
pub const TOUCHSCREEN_WIDTH: u32 = 256;
/// Height of the touchscreen, in pixels. In the frontend's stacked dual-screen
/// layout this is also the Y coordinate where the touchscreen region begins.
pub const TOUCHSCREEN_HEIGHT: u32 = 192;

/// A touchscreen contact, normalized against the touchscreen dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    /// Decode a packed touch sample (X in the high 16 bits, Y in the low 16)
    /// into a normalized contact point.
    ///
    /// Returns `None` when the pointer is not touching the touchscreen: either
    /// the [TOUCH_RELEASED] sentinel, or a Y coordinate on the top screen.
    /// The row at exactly `y == 192` counts as the top screen, and coordinates
    /// past the touchscreen bounds are normalized to values outside `[0, 1)`
    /// without clamping; both match what the engine expects.
    pub fn decode(raw: u32) -> Option<TouchPoint> {
        let x = (raw >> 16) as u16;
        let y = (raw & 0xFFFF) as u16;
        if raw == TOUCH_RELEASED || y <= TOUCHSCREEN_HEIGHT as u16 {
            return None;
        }
        Some(TouchPoint {
            x: x as f32 / TOUCHSCREEN_WIDTH as f32,
            y: (y - TOUCHSCREEN_HEIGHT as u16) as f32 / TOUCHSCREEN_HEIGHT as f32,
        })
    }
}
