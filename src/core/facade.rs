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

//! Host-facing façade
//!
//! [`Mandarine`] is the one object a host application holds. It composes
//! the lifecycle session, input routing, frame subscriptions, save-state
//! pass-through, and media identity into a single surface, and keeps the
//! emulation core handle on a single ownership path.

use std::path::Path;
use std::sync::Arc;

use super::button::PsxButton;
use super::emulator::EmulationCore;
use super::error::Result;
use super::frame::{Bgr555Handler, Rgb888Handler};
use super::identity;
use super::session::{EmulationSession, LifecycleState};

/// Process-wide emulator coordination object
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use mandarine::core::{EmulationCore, Mandarine, PsxButton};
///
/// fn play(core: Arc<dyn EmulationCore>) -> mandarine::core::Result<()> {
///     let mut mandarine = Mandarine::new(core)?;
///     mandarine.bgr555(Box::new(|frame| {
///         // blit frame.data to the display surface; the borrow ends here
///         let _ = (frame.width, frame.height, frame.pitch);
///     }));
///     mandarine.insert("crash.cue".as_ref())?;
///     mandarine.start()?;
///     mandarine.button(PsxButton::Start, 0, true)?;
///     Ok(())
/// }
/// ```
pub struct Mandarine {
    session: EmulationSession,
}

impl Mandarine {
    /// Create the façade, claiming the process-wide session
    ///
    /// # Errors
    ///
    /// Returns `SessionActive` if another `Mandarine` is alive in this
    /// process.
    pub fn new(core: Arc<dyn EmulationCore>) -> Result<Self> {
        Ok(Self {
            session: EmulationSession::claim(core)?,
        })
    }

    /// Load a cartridge/disc image
    pub fn insert(&mut self, media: &Path) -> Result<()> {
        self.session.insert(media)
    }

    /// Begin execution
    pub fn start(&mut self) -> Result<()> {
        self.session.start()
    }

    /// Halt execution
    pub fn stop(&mut self) -> Result<()> {
        self.session.stop()
    }

    /// Pause or resume execution
    pub fn pause(&mut self, paused: bool) {
        self.session.pause(paused);
    }

    /// Whether the core is paused
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.session.is_paused()
    }

    /// Property-style setter, sugar for [`pause`](Mandarine::pause)
    #[inline]
    pub fn set_paused(&mut self, paused: bool) {
        self.pause(paused);
    }

    /// Current lifecycle state
    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.session.state()
    }

    /// Subscribe to BGR555 frames, replacing any previous handler
    ///
    /// The handler runs on the core's render thread and must not block.
    pub fn bgr555(&self, handler: Bgr555Handler) {
        self.session.core().set_bgr555(handler);
    }

    /// Subscribe to RGB888 frames, replacing any previous handler
    ///
    /// Independent of the BGR555 subscription; the core chooses which
    /// format it emits per frame.
    pub fn rgb888(&self, handler: Rgb888Handler) {
        self.session.core().set_rgb888(handler);
    }

    /// Inject a digital button state change for a player
    pub fn button(&self, button: PsxButton, player: usize, pressed: bool) -> Result<()> {
        self.session.button(button, player, pressed)
    }

    /// Inject an analog stick-axis magnitude for a slot
    pub fn drag(&self, slot: usize, stick: PsxButton, value: i16) -> Result<()> {
        self.session.drag(slot, stick, value)
    }

    /// Save machine state to a location
    pub fn save_state(&self, to: &Path) -> Result<()> {
        self.session.save(to)
    }

    /// Restore machine state from a location
    pub fn load_state(&self, from: &Path) -> Result<()> {
        self.session.load(from)
    }

    /// Stable, filesystem-safe identity key for a media reference
    ///
    /// Contains no underscores and no periods; suitable as a save-state
    /// directory segment.
    pub fn id(&self, media: &Path) -> String {
        identity::media_id(self.session.core().as_ref(), media)
    }
}
