use serde::{Deserialize, Serialize};

use crate::core::ButtonType;

/// A width/height pair, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Receives one rendered RGBA8888 frame per [run_frame][crate::core::HydraCore::run_frame].
///
/// The frame buffer is only valid for the duration of the call; the frontend
/// must copy anything it wants to keep (the borrow makes retaining it
/// impossible anyway).
pub type VideoCallback = Box<dyn FnMut(&[u8], Size)>;
/// Receives batches of interleaved signed 16-bit samples as they are drained
/// from the engine's queue.
pub type AudioCallback = Box<dyn FnMut(&[i16])>;
/// Tells the frontend to refresh its input snapshot before it is queried.
pub type PollInputCallback = Box<dyn FnMut()>;
/// Queries the state of one logical button for one player: 0/1 for digital
/// buttons, a packed touch sample for [ButtonType::Touch].
pub type CheckButtonCallback = Box<dyn FnMut(u32, ButtonType) -> i32>;

/// The frontend's callback set.
///
/// Every slot starts empty and must be registered exactly once before the
/// first frame is run; registration is write-once-then-read-many, with no
/// synchronization because one thread owns the core for its whole lifetime.
#[derive(Default)]
pub(crate) struct Callbacks {
    pub video: Option<VideoCallback>,
    pub audio: Option<AudioCallback>,
    pub poll_input: Option<PollInputCallback>,
    pub check_button: Option<CheckButtonCallback>,
}
