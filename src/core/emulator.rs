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

//! Emulation core contract
//!
//! The actual console emulation (CPU, GPU, SPU, DMA) lives behind this
//! trait. The control layer drives it through these entry points and never
//! looks inside: media references and save-state locators pass through as
//! plain paths, and the serialized machine state format is entirely the
//! core's own.

use std::path::Path;

use super::error::Result;
use super::frame::{Bgr555Handler, Rgb888Handler};

/// Interface to the console emulation core
///
/// All methods take `&self`: the core serializes its own internal state
/// mutation, and the handle is shared between the host thread and the
/// core's render/execution thread. Host-initiated calls are expected to
/// arrive from a single logical host thread; frame callbacks installed via
/// the subscription setters are the only concurrent re-entry into host
/// code.
///
/// Validation lives on this side of the boundary. The control layer
/// forwards calls in whatever lifecycle state the host issues them;
/// invalid ordering (starting with no media loaded, out-of-range player
/// indices) is reported by the core through the returned `Result`.
pub trait EmulationCore: Send + Sync {
    /// Load a cartridge/disc image into the core
    ///
    /// # Errors
    ///
    /// Returns `MediaLoad` if the image is unreadable, malformed, or an
    /// unsupported format.
    fn insert(&self, media: &Path) -> Result<()>;

    /// Begin execution of the loaded media
    ///
    /// # Errors
    ///
    /// Returns `NoActiveSession` if no media has been inserted.
    fn start(&self) -> Result<()>;

    /// Halt execution
    ///
    /// Frame callbacks cease firing once the render loop has stopped.
    fn stop(&self) -> Result<()>;

    /// Pause or resume execution
    ///
    /// Idempotent: pausing an already-paused core (or resuming a running
    /// one) is a no-op.
    fn pause(&self, paused: bool);

    /// Whether the core is currently paused
    fn is_paused(&self) -> bool;

    /// Install the BGR555 frame handler, replacing any previous one
    fn set_bgr555(&self, handler: Bgr555Handler);

    /// Install the RGB888 frame handler, replacing any previous one
    fn set_rgb888(&self, handler: Rgb888Handler);

    /// Deliver a digital button state change
    ///
    /// `token` is one of the fixed wire tokens from
    /// [`PsxButton::token`](super::button::PsxButton::token). Repeated
    /// presses without an intervening release are tolerated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlayer` if `player` exceeds the core's supported
    /// player count.
    fn input(&self, player: usize, token: &str, pressed: bool) -> Result<()>;

    /// Deliver an analog stick-axis magnitude
    ///
    /// The sign and zero-center convention of `value` is the core's; no
    /// clamping or scaling happens upstream.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSlot` if `slot` is out of range.
    fn drag(&self, slot: usize, token: &str, value: i16) -> Result<()>;

    /// Serialize the complete machine state to `to`
    ///
    /// Synchronous from the caller's point of view: the call returns only
    /// once the state has been written (or the write has failed).
    fn save(&self, to: &Path) -> Result<()>;

    /// Restore machine state from `from`, replacing current state in-place
    fn load(&self, from: &Path) -> Result<()>;

    /// Extract the display filename for a media reference
    ///
    /// Deterministic for a given media path and core version. The control
    /// layer post-processes this into a filesystem-safe identity key.
    fn id(&self, media: &Path) -> String;
}
