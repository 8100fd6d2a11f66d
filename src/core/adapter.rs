use log::*;

use crate::core::{
    callbacks::Callbacks, ButtonType, Engine, EngineKey, Size, TouchPoint, BUTTON_MAP, FPS,
    SAMPLE_RATE,
};

/// The adapter between a hydra-style frontend and the emulation engine.
///
/// The frontend owns the event loop and presentation; the core owns per-frame
/// orchestration. It holds the engine and the frontend's callback set, and
/// [HydraCore::run_frame] is the single entry point that moves input in and
/// video/audio out, one frame at a time.
///
/// Strictly single-threaded: `run_frame` is a blocking call and the frontend's
/// loop is the only scheduler. Dropping the core destroys it.
pub struct HydraCore<E: Engine> {
    /// The engine being driven by this core.
    pub engine: E,
    pub(crate) callbacks: Callbacks,
}

impl<E: Engine> HydraCore<E> {
    /// Create a core driving `engine`. All four callbacks must be registered
    /// before the first [run_frame][HydraCore::run_frame].
    pub fn new(engine: E) -> HydraCore<E> {
        HydraCore {
            engine,
            callbacks: Callbacks::default(),
        }
    }

    /// Load a content file of the given kind.
    ///
    /// Only the `"rom"` kind is recognized; any other kind is rejected with
    /// `false` and no engine call. Whether the rom data itself is valid is the
    /// engine's concern.
    pub fn load_file(&mut self, kind: &str, path: &str) -> bool {
        if kind != "rom" {
            debug!("Refusing to load content of unknown kind {:?}", kind);
            return false;
        }
        info!("Loading rom at {}", path);
        self.engine.load_rom(path);
        true
    }

    /// Reset the machine to its initial state.
    pub fn reset(&mut self) {
        debug!("Resetting the engine");
        self.engine.reset();
    }

    /// The native display size the engine currently reports.
    pub fn native_size(&self) -> Size {
        Size {
            width: self.engine.width(),
            height: self.engine.height(),
        }
    }

    /// Accept a requested output size. The engine dictates the actual output
    /// geometry every frame, so this is a no-op.
    pub fn set_output_size(&mut self, _size: Size) {}

    /// Register the video sink.
    pub fn set_video_callback(&mut self, callback: impl FnMut(&[u8], Size) + 'static) {
        self.callbacks.video = Some(Box::new(callback));
    }
    /// Register the audio sink.
    pub fn set_audio_callback(&mut self, callback: impl FnMut(&[i16]) + 'static) {
        self.callbacks.audio = Some(Box::new(callback));
    }
    /// Register the input poll trigger.
    pub fn set_poll_input_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.poll_input = Some(Box::new(callback));
    }
    /// Register the button state query.
    pub fn set_check_button_callback(
        &mut self,
        callback: impl FnMut(u32, ButtonType) -> i32 + 'static,
    ) {
        self.callbacks.check_button = Some(Box::new(callback));
    }

    /// Advance the emulation by exactly one frame.
    ///
    /// Polls the frontend, latches the state of the twelve digital controls
    /// and the touchscreen into the engine's input vector, steps the engine,
    /// hands the captured frame to the video sink (exactly one call), and
    /// drains the queued audio samples to the audio sink (zero or more calls).
    /// The frame buffer lives on the adapter's side and is released as soon as
    /// the video sink returns.
    ///
    /// # Panics
    /// Calling this with any callback unregistered is a usage error and
    /// panics. Callers must guarantee registration order; there is no
    /// recovering mid-frame.
    pub fn run_frame(&mut self) {
        let poll = self
            .callbacks
            .poll_input
            .as_mut()
            .expect("input poll callback is not registered");
        poll();
        let check = self
            .callbacks
            .check_button
            .as_mut()
            .expect("check button callback is not registered");

        let inputs = self.engine.input_vector();
        for (button, key) in BUTTON_MAP {
            inputs[key.slot()] = if check(0, button) != 0 { 1.0 } else { 0.0 };
        }

        let raw = check(0, ButtonType::Touch) as u32;
        match TouchPoint::decode(raw) {
            Some(point) => {
                inputs[EngineKey::PenDown.slot()] = 1.0;
                self.engine.touch(point.x, point.y);
            }
            None => inputs[EngineKey::PenDown.slot()] = 0.0,
        }

        self.engine.step_frame();

        // The engine may have resized since the last frame (folding or
        // unfolding the screens), and the capture itself reports the corrected
        // geometry, which is what the sink gets.
        let mut width = self.engine.width();
        let mut height = self.engine.height();
        {
            let mut frame = vec![0u8; 4 * width as usize * height as usize];
            self.engine.screenshot(&mut frame, &mut width, &mut height);
            let video = self
                .callbacks
                .video
                .as_mut()
                .expect("video callback is not registered");
            video(&frame, Size { width, height });
        }

        trace!("Draining {} queued samples", self.engine.sample_count());
        let audio = self
            .callbacks
            .audio
            .as_mut()
            .expect("audio callback is not registered");
        self.engine.push_all_samples(&mut **audio);
    }

    /// The frame rate the frontend should drive [run_frame][HydraCore::run_frame] at.
    pub fn fps(&self) -> u16 {
        FPS
    }

    /// The sample rate of the audio stream handed to the audio sink.
    pub fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }
}
