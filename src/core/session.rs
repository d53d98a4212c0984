// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Mandarine contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Emulation session and lifecycle state machine
//!
//! An [`EmulationSession`] is the single process-wide handle to the
//! emulation core. It owns the core handle for its lifetime and mirrors the
//! lifecycle state (`Empty` → `Ready` → `Running` ⇄ `Paused`) as calls pass
//! through. The mirror records call ordering only; the core remains the
//! authority on what each call actually does, and every failure it reports
//! surfaces to the caller unchanged.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::button::PsxButton;
use super::emulator::EmulationCore;
use super::error::{MandarineError, Result};

/// Whether a session currently exists anywhere in the process
static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Lifecycle state of the emulation session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No media loaded
    Empty,
    /// Media loaded, not executing
    Ready,
    /// Executing; frame callbacks fire
    Running,
    /// Execution suspended
    Paused,
}

/// The process-wide emulation session
///
/// Exactly one session exists at a time: construction claims a
/// process-global slot and fails with [`MandarineError::SessionActive`]
/// while another session is alive. The claim is released when the session
/// is dropped.
///
/// Host-initiated calls are expected from a single logical host thread;
/// this type adds no locking around them. Frame callbacks registered
/// through the core arrive on the core's render thread, concurrent with
/// host calls.
pub struct EmulationSession {
    core: Arc<dyn EmulationCore>,
    state: LifecycleState,
}

impl EmulationSession {
    /// Claim the process-wide session slot and wrap the core handle
    ///
    /// # Errors
    ///
    /// Returns `SessionActive` if another session is alive in this process.
    pub fn claim(core: Arc<dyn EmulationCore>) -> Result<Self> {
        if SESSION_ACTIVE.swap(true, Ordering::AcqRel) {
            return Err(MandarineError::SessionActive);
        }
        log::info!("Session: claimed emulation core handle");
        Ok(Self {
            core,
            state: LifecycleState::Empty,
        })
    }

    /// Current lifecycle state, as recorded from call ordering
    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Shared handle to the emulation core
    #[inline]
    pub fn core(&self) -> &Arc<dyn EmulationCore> {
        &self.core
    }

    /// Load media into the core and move to `Ready`
    ///
    /// Valid from `Empty` or `Ready`; the core governs what insertion in
    /// other states does. The state mirror only advances on success.
    ///
    /// # Errors
    ///
    /// Propagates `MediaLoad` from the core unchanged.
    pub fn insert(&mut self, media: &Path) -> Result<()> {
        self.core.insert(media)?;
        self.state = LifecycleState::Ready;
        log::info!("Session: media inserted ({})", media.display());
        Ok(())
    }

    /// Begin core execution and move to `Running`
    ///
    /// Not pre-validated: calling from `Empty` forwards to the core, which
    /// reports `NoActiveSession`. The session never silently transitions
    /// to `Running` on a failed start.
    pub fn start(&mut self) -> Result<()> {
        self.core.start()?;
        self.state = LifecycleState::Running;
        log::info!("Session: started");
        Ok(())
    }

    /// Halt core execution and move back to `Ready`
    ///
    /// Frame callbacks cease once the core's render loop stops.
    pub fn stop(&mut self) -> Result<()> {
        self.core.stop()?;
        self.state = LifecycleState::Ready;
        log::info!("Session: stopped");
        Ok(())
    }

    /// Pause or resume execution
    ///
    /// Always forwarded; idempotent at the state level. The mirror flips
    /// only between `Running` and `Paused`.
    pub fn pause(&mut self, paused: bool) {
        self.core.pause(paused);
        self.state = match (self.state, paused) {
            (LifecycleState::Running, true) => LifecycleState::Paused,
            (LifecycleState::Paused, false) => LifecycleState::Running,
            (state, _) => state,
        };
        log::debug!("Session: pause({paused})");
    }

    /// Whether the core is paused right now
    ///
    /// Queries the core directly rather than the state mirror.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.core.is_paused()
    }

    /// Forward a digital button state change
    ///
    /// Converts the typed symbol to its wire token at this boundary. No
    /// debouncing or queuing; delivery is synchronous.
    pub fn button(&self, button: PsxButton, player: usize, pressed: bool) -> Result<()> {
        log::trace!("Session: button {} player {player} pressed {pressed}", button.token());
        self.core.input(player, button.token(), pressed)
    }

    /// Forward an analog stick-axis magnitude
    ///
    /// `value` passes through unclamped and unscaled.
    pub fn drag(&self, slot: usize, stick: PsxButton, value: i16) -> Result<()> {
        log::trace!("Session: drag {} slot {slot} value {value}", stick.token());
        self.core.drag(slot, stick.token(), value)
    }

    /// Request the core serialize machine state to `to`
    ///
    /// Runs to completion or failure; there is no cancellation.
    pub fn save(&self, to: &Path) -> Result<()> {
        log::debug!("Session: saving state to {}", to.display());
        self.core.save(to)
    }

    /// Request the core restore machine state from `from`
    pub fn load(&self, from: &Path) -> Result<()> {
        log::debug!("Session: loading state from {}", from.display());
        self.core.load(from)
    }
}

impl Drop for EmulationSession {
    fn drop(&mut self) {
        SESSION_ACTIVE.store(false, Ordering::Release);
        log::info!("Session: released emulation core handle");
    }
}
