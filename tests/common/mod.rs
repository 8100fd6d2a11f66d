#![allow(dead_code)]
use std::{cell::RefCell, rc::Rc};

use skyemu_hydra::core::{ButtonType, Engine, HydraCore, Size, INPUT_VECTOR_LEN, TOUCH_RELEASED};

/// A cheat operation as the engine saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheatCall {
    Add(Vec<u8>),
    Remove(u32),
    Enable(u32),
    Disable(u32),
}

/// Scripted engine double: records every call it receives and plays back
/// whatever geometry and sample accumulation the test configured.
pub struct TestEngine {
    pub loaded: Vec<String>,
    pub resets: usize,
    pub steps: usize,
    pub touches: Vec<(f32, f32)>,
    pub inputs: [f32; INPUT_VECTOR_LEN],
    pub width: u32,
    pub height: u32,
    /// Geometry the capture reports back, when it differs from the query.
    pub corrected_size: Option<(u32, u32)>,
    /// Buffer length handed to each capture.
    pub captures: Vec<usize>,
    /// Sample frames queued per emulation step.
    pub samples_per_step: usize,
    pub queued: Vec<i16>,
    pub drains: usize,
    pub cheats: Vec<CheatCall>,
    pub next_cheat_id: u32,
}

impl TestEngine {
    pub fn new() -> TestEngine {
        TestEngine {
            loaded: Vec::new(),
            resets: 0,
            steps: 0,
            touches: Vec::new(),
            inputs: [0.0; INPUT_VECTOR_LEN],
            width: 256,
            height: 384,
            corrected_size: None,
            captures: Vec::new(),
            samples_per_step: 0,
            queued: Vec::new(),
            drains: 0,
            cheats: Vec::new(),
            next_cheat_id: 1,
        }
    }
}

impl Engine for TestEngine {
    fn load_rom(&mut self, path: &str) {
        self.loaded.push(path.to_string());
    }
    fn reset(&mut self) {
        self.resets += 1;
    }
    fn step_frame(&mut self) {
        self.steps += 1;
        self.queued
            .extend(std::iter::repeat(0i16).take(self.samples_per_step));
    }
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn screenshot(&mut self, buffer: &mut [u8], width: &mut u32, height: &mut u32) {
        self.captures.push(buffer.len());
        buffer.fill(0xAB);
        if let Some((w, h)) = self.corrected_size {
            *width = w;
            *height = h;
        }
    }
    fn touch(&mut self, x: f32, y: f32) {
        self.touches.push((x, y));
    }
    fn input_vector(&mut self) -> &mut [f32; INPUT_VECTOR_LEN] {
        &mut self.inputs
    }
    fn sample_count(&self) -> u32 {
        self.queued.len() as u32
    }
    fn push_all_samples(&mut self, sink: &mut dyn FnMut(&[i16])) {
        self.drains += 1;
        if self.queued.is_empty() {
            return;
        }
        let samples = std::mem::take(&mut self.queued);
        sink(&samples);
    }
    fn add_cheat(&mut self, code: &[u8]) -> u32 {
        let id = self.next_cheat_id;
        self.next_cheat_id += 1;
        self.cheats.push(CheatCall::Add(code.to_vec()));
        id
    }
    fn remove_cheat(&mut self, id: u32) {
        self.cheats.push(CheatCall::Remove(id));
    }
    fn enable_cheat(&mut self, id: u32) {
        self.cheats.push(CheatCall::Enable(id));
    }
    fn disable_cheat(&mut self, id: u32) {
        self.cheats.push(CheatCall::Disable(id));
    }
}

/// A core with a full frontend double wired in: every sink records what it
/// received, and the button query answers from [Harness::pressed] and
/// [Harness::touch].
pub struct Harness {
    pub core: HydraCore<TestEngine>,
    /// One entry per video sink call: the buffer length and the reported size.
    pub frames: Rc<RefCell<Vec<(usize, Size)>>>,
    /// One entry per audio sink call: the batch's sample count.
    pub audio_batches: Rc<RefCell<Vec<usize>>>,
    pub polls: Rc<RefCell<usize>>,
    pub pressed: Rc<RefCell<Vec<ButtonType>>>,
    pub touch: Rc<RefCell<u32>>,
}

impl Harness {
    pub fn new(engine: TestEngine) -> Harness {
        let mut core = HydraCore::new(engine);
        let frames = Rc::new(RefCell::new(Vec::new()));
        let audio_batches = Rc::new(RefCell::new(Vec::new()));
        let polls = Rc::new(RefCell::new(0));
        let pressed: Rc<RefCell<Vec<ButtonType>>> = Rc::new(RefCell::new(Vec::new()));
        let touch = Rc::new(RefCell::new(TOUCH_RELEASED));

        let sink = frames.clone();
        core.set_video_callback(move |frame, size| sink.borrow_mut().push((frame.len(), size)));
        let sink = audio_batches.clone();
        core.set_audio_callback(move |samples| sink.borrow_mut().push(samples.len()));
        let count = polls.clone();
        core.set_poll_input_callback(move || *count.borrow_mut() += 1);
        let held = pressed.clone();
        let touching = touch.clone();
        core.set_check_button_callback(move |player, button| {
            // The adapter must only ever query player 0
            assert_eq!(player, 0);
            if button == ButtonType::Touch {
                *touching.borrow() as i32
            } else if held.borrow().contains(&button) {
                1
            } else {
                0
            }
        });

        Harness {
            core,
            frames,
            audio_batches,
            polls,
            pressed,
            touch,
        }
    }

    pub fn press(&self, button: ButtonType) {
        self.pressed.borrow_mut().push(button);
    }

    pub fn release_all(&self) {
        self.pressed.borrow_mut().clear();
    }

    pub fn set_touch(&self, raw: u32) {
        *self.touch.borrow_mut() = raw;
    }
}

/// Pack a touch sample the way the frontend reports it.
pub fn packed_touch(x: u16, y: u16) -> u32 {
    (x as u32) << 16 | y as u32
}
