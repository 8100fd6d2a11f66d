//! The plugin surface, used when building this crate as a loadable hydra core.
//!
//! Binds [HydraCore] to the engine's exported entry points and exposes the C
//! entry points a frontend loader resolves: [createEmulator], [destroyEmulator]
//! and [getInfo]. The engine objects must be provided at link time.
//!
//! Everything here inherits the crate's single-threaded ownership model: the
//! engine is single-instance and non-reentrant, and one thread owns the core
//! from [createEmulator] to [destroyEmulator].
use std::cell::RefCell;
use std::ffi::{c_char, c_int, c_void, CString};
use std::slice;

use log::*;
use num_traits::FromPrimitive;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use crate::core::{Engine, HydraCore, InfoType, INPUT_VECTOR_LEN};

extern "C" {
    fn se_load_rom(path: *const c_char);
    fn se_reset_core();
    fn se_emulate_single_frame();
    fn se_screenshot(out: *mut u8, width: *mut c_int, height: *mut c_int);
    fn se_get_width() -> u32;
    fn se_get_height() -> u32;
    fn se_touch(x: f32, y: f32);
    fn se_get_inputs() -> *mut f32;
    fn se_add_cheat(data: *const u8, size: u32) -> u32;
    fn se_remove_cheat(id: u32);
    fn se_enable_cheat(id: u32);
    fn se_disable_cheat(id: u32);
    fn se_push_all_samples(callback: extern "C" fn(*mut c_void, usize));
    fn se_sample_count() -> u32;
}

thread_local! {
    // Staging buffer for the sample drain: the engine pushes chunks through
    // collect_samples, and the whole batch goes to the sink in one call.
    static SAMPLE_BATCH: RefCell<Vec<i16>> = RefCell::new(Vec::new());
}

extern "C" fn collect_samples(data: *mut c_void, count: usize) {
    let samples = unsafe { slice::from_raw_parts(data as *const i16, count) };
    SAMPLE_BATCH.with(|batch| batch.borrow_mut().extend_from_slice(samples));
}

/// The engine as linked into the plugin binary.
///
/// All emulation state lives on the engine's side; this type only witnesses
/// the binding so the adapter has something to own.
pub struct SkyEngine(());

impl Engine for SkyEngine {
    fn load_rom(&mut self, path: &str) {
        let path = CString::new(path).expect("rom path contains a nul byte");
        unsafe { se_load_rom(path.as_ptr()) }
    }
    fn reset(&mut self) {
        unsafe { se_reset_core() }
    }
    fn step_frame(&mut self) {
        unsafe { se_emulate_single_frame() }
    }
    fn width(&self) -> u32 {
        unsafe { se_get_width() }
    }
    fn height(&self) -> u32 {
        unsafe { se_get_height() }
    }
    fn screenshot(&mut self, buffer: &mut [u8], width: &mut u32, height: &mut u32) {
        let mut w = *width as c_int;
        let mut h = *height as c_int;
        unsafe { se_screenshot(buffer.as_mut_ptr(), &mut w, &mut h) };
        *width = w as u32;
        *height = h as u32;
    }
    fn touch(&mut self, x: f32, y: f32) {
        unsafe { se_touch(x, y) }
    }
    fn input_vector(&mut self) -> &mut [f32; INPUT_VECTOR_LEN] {
        unsafe { &mut *(se_get_inputs() as *mut [f32; INPUT_VECTOR_LEN]) }
    }
    fn sample_count(&self) -> u32 {
        unsafe { se_sample_count() }
    }
    fn push_all_samples(&mut self, sink: &mut dyn FnMut(&[i16])) {
        SAMPLE_BATCH.with(|batch| {
            batch.borrow_mut().clear();
            unsafe { se_push_all_samples(collect_samples) };
            let batch = batch.borrow();
            if !batch.is_empty() {
                sink(&batch);
            }
        });
    }
    fn add_cheat(&mut self, code: &[u8]) -> u32 {
        unsafe { se_add_cheat(code.as_ptr(), code.len() as u32) }
    }
    fn remove_cheat(&mut self, id: u32) {
        unsafe { se_remove_cheat(id) }
    }
    fn enable_cheat(&mut self, id: u32) {
        unsafe { se_enable_cheat(id) }
    }
    fn disable_cheat(&mut self, id: u32) {
        unsafe { se_disable_cheat(id) }
    }
}

/// Create the core this plugin wraps. Called by the frontend loader.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn createEmulator() -> *mut HydraCore<SkyEngine> {
    // The library only emits log records; the logger itself is owned here, at
    // the outermost layer. Repeated init attempts are harmless no-ops.
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    debug!("Creating core");
    Box::into_raw(Box::new(HydraCore::new(SkyEngine(()))))
}

/// Destroy a core created by [createEmulator].
///
/// # Safety
/// `core` must have been returned by [createEmulator] and not destroyed since.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn destroyEmulator(core: *mut HydraCore<SkyEngine>) {
    debug!("Destroying core");
    drop(Box::from_raw(core));
}

/// Static plugin metadata by category, as a nul-terminated string, or null
/// for a category value this core does not know.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn getInfo(info_type: u32) -> *const c_char {
    let Some(info_type) = InfoType::from_u32(info_type) else {
        return std::ptr::null();
    };
    let s = match info_type {
        InfoType::CoreName => c"SkyEmu",
        InfoType::SystemName => c"Gameboy Color, Gameboy Advance, Nintendo DS",
        InfoType::Description => {
            c"Game Boy Advance, Game Boy, Game Boy Color, and Nintendo DS Emulator"
        }
        InfoType::Version => c"4.0",
        InfoType::Author => c"Sky",
        InfoType::Extensions => c"gb,gbc,gba,nds",
        InfoType::License => c"MIT",
        InfoType::Website => c"https://skyemu.app",
        InfoType::Firmware => c"",
    };
    s.as_ptr()
}
