//! The adapter code, provided as a library.
//!
//! Drives a self-contained emulation engine one frame at a time on behalf of a
//! hydra-style frontend. The frontend registers four callbacks (a video sink, an
//! audio sink, an input poll trigger and a button state query), and every call to
//! [HydraCore::run_frame] polls the frontend, latches the input state into the
//! engine's input vector, advances the machine by one frame, and pushes the
//! rendered frame and queued audio samples back out through the sinks.
//! The engine is anything implementing [Engine]; the `plugin` feature binds the
//! crate to the real engine's exported entry points.
//! ```
//! use skyemu_hydra::core::{ButtonType, HydraCore, TOUCH_RELEASED};
//! # use skyemu_hydra::core::{Engine, INPUT_VECTOR_LEN};
//! # struct NullEngine {
//! #     inputs: [f32; INPUT_VECTOR_LEN],
//! # }
//! # impl Engine for NullEngine {
//! #     fn load_rom(&mut self, _path: &str) {}
//! #     fn reset(&mut self) {}
//! #     fn step_frame(&mut self) {}
//! #     fn width(&self) -> u32 { 256 }
//! #     fn height(&self) -> u32 { 384 }
//! #     fn screenshot(&mut self, _buffer: &mut [u8], _width: &mut u32, _height: &mut u32) {}
//! #     fn touch(&mut self, _x: f32, _y: f32) {}
//! #     fn input_vector(&mut self) -> &mut [f32; INPUT_VECTOR_LEN] { &mut self.inputs }
//! #     fn sample_count(&self) -> u32 { 0 }
//! #     fn push_all_samples(&mut self, _sink: &mut dyn FnMut(&[i16])) {}
//! #     fn add_cheat(&mut self, _code: &[u8]) -> u32 { 0 }
//! #     fn remove_cheat(&mut self, _id: u32) {}
//! #     fn enable_cheat(&mut self, _id: u32) {}
//! #     fn disable_cheat(&mut self, _id: u32) {}
//! # }
//! // The engine being driven, behind the [Engine] capability trait
//! let mut core = HydraCore::new(NullEngine { inputs: [0.0; INPUT_VECTOR_LEN] });
//! // Load some content ("rom" is the only recognized kind)
//! assert!(core.load_file("rom", "my_game.nds"));
//! // Register the frontend's callback set
//! core.set_video_callback(|_frame, size| println!("{}x{} frame", size.width, size.height));
//! core.set_audio_callback(|samples| println!("{} samples", samples.len()));
//! core.set_poll_input_callback(|| {});
//! core.set_check_button_callback(|_player, button| {
//!     // Hold A, release everything else
//!     match button {
//!         ButtonType::A => 1,
//!         ButtonType::Touch => TOUCH_RELEASED as i32,
//!         _ => 0,
//!     }
//! });
//! // Advance the emulation by one frame
//! core.run_frame();
//! ```
mod adapter;
pub use adapter::HydraCore;
mod callbacks;
pub use callbacks::{AudioCallback, CheckButtonCallback, PollInputCallback, Size, VideoCallback};
mod cheats;
mod engine;
pub use engine::{Engine, INPUT_VECTOR_LEN};
mod info;
pub use info::{info, InfoType};
mod input;
pub use input::{
    ButtonType, EngineKey, TouchPoint, BUTTON_MAP, TOUCHSCREEN_HEIGHT, TOUCHSCREEN_WIDTH,
    TOUCH_RELEASED,
};

/// The frame rate reported to the frontend, in frames per second. Fixed, not measured.
pub const FPS: u16 = 60;
/// The sample rate of the engine's audio output, in hertz.
pub const SAMPLE_RATE: u32 = 48_000;
