/// The number of slots in the engine's input vector.
///
/// The slot order is a fixed contract shared with the engine, see [EngineKey][crate::core::EngineKey].
pub const INPUT_VECTOR_LEN: usize = 36;

/// The capability surface the adapter consumes from the emulation engine.
///
/// The engine is treated as opaque: it owns all emulation state, rendering and
/// sample generation, and the adapter only drives it through these entry
/// points. Engine-side failures (bad rom data, invalid cheat codes, out of
/// range touches) stay on the engine's side of this boundary and are neither
/// inspected nor translated.
///
/// The engine is assumed single-instance and non-reentrant; one thread owns it
/// for its entire lifetime.
pub trait Engine {
    /// Load a rom image from a file path.
    fn load_rom(&mut self, path: &str);
    /// Reset the machine to its initial power-on state.
    fn reset(&mut self);
    /// Advance the machine by exactly one frame.
    fn step_frame(&mut self);
    /// Current display width in pixels. May change between frames.
    fn width(&self) -> u32;
    /// Current display height in pixels. May change between frames.
    fn height(&self) -> u32;
    /// Capture the current framebuffer as RGBA8888 into `buffer`.
    ///
    /// `buffer` must hold at least `width * height * 4` bytes for the
    /// dimensions passed in. The engine corrects `width` and `height` to the
    /// geometry it actually captured.
    fn screenshot(&mut self, buffer: &mut [u8], width: &mut u32, height: &mut u32);
    /// Forward a touchscreen contact, with both coordinates normalized against
    /// the touchscreen dimensions. Values outside `[0, 1)` are passed through
    /// unclamped and are the engine's concern.
    fn touch(&mut self, x: f32, y: f32);
    /// The input vector read at the next step. The adapter writes individual
    /// slots and never resizes or reallocates it.
    fn input_vector(&mut self) -> &mut [f32; INPUT_VECTOR_LEN];
    /// The number of sample frames queued since the last drain.
    fn sample_count(&self) -> u32;
    /// Drain every queued sample frame to `sink`. How many samples have
    /// accumulated is the engine's business; a frame's worth of stepping may
    /// queue a variable amount, including none.
    fn push_all_samples(&mut self, sink: &mut dyn FnMut(&[i16]));
    /// Register a cheat code and return the id the engine assigned to it.
    fn add_cheat(&mut self, code: &[u8]) -> u32;
    /// Remove a cheat by id.
    fn remove_cheat(&mut self, id: u32);
    /// Enable a cheat by id.
    fn enable_cheat(&mut self, id: u32);
    /// Disable a cheat by id.
    fn disable_cheat(&mut self, id: u32);
}
