use log::*;

use crate::core::{Engine, HydraCore};

/// Cheat management: a stateless pass-through to the engine.
///
/// The engine owns cheat contents, validity and the id space; the adapter
/// keeps no registry of its own, so these can be called in any order and
/// unknown ids are forwarded as-is.
impl<E: Engine> HydraCore<E> {
    /// Register a cheat code with the engine and return the id it assigned.
    /// The code is an opaque blob; whether it parses is the engine's concern.
    pub fn add_cheat(&mut self, code: &[u8]) -> u32 {
        let id = self.engine.add_cheat(code);
        debug!("Added cheat of {} bytes as id {}", code.len(), id);
        id
    }

    /// Remove a cheat by id.
    pub fn remove_cheat(&mut self, id: u32) {
        debug!("Removing cheat {}", id);
        self.engine.remove_cheat(id);
    }

    /// Enable a cheat by id.
    pub fn enable_cheat(&mut self, id: u32) {
        debug!("Enabling cheat {}", id);
        self.engine.enable_cheat(id);
    }

    /// Disable a cheat by id.
    pub fn disable_cheat(&mut self, id: u32) {
        debug!("Disabling cheat {}", id);
        self.engine.disable_cheat(id);
    }
}
