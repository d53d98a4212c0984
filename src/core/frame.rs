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

//! Frame delivery channel
//!
//! The emulation core hands each rendered frame to the host through a
//! direct callback, once per frame, on whatever thread the core's render
//! loop runs on. There is no queue and no drop policy: a slow handler paces
//! the render loop. Two pixel formats are supported, each with its own
//! subscription slot:
//!
//! - BGR555: packed 15-bit color, delivered as an untyped byte buffer
//! - RGB888: 16-bit-per-channel packed color, delivered as a `u16` buffer
//!
//! Registering a handler for one format leaves the other format's slot
//! untouched; the core decides per frame which format it emits. Frame views
//! borrow the core's buffer and are valid only for the synchronous extent
//! of the callback, which the lifetimes below enforce.

use std::sync::Mutex;

/// A rendered frame in packed 15-bit BGR555 color
///
/// `data` is the core's own framebuffer, borrowed for the duration of the
/// callback. `pitch` is the distance between rows in bytes and may exceed
/// `width * 2` when the core renders into a wider scratch buffer.
#[derive(Debug)]
pub struct Bgr555Frame<'a> {
    pub data: &'a [u8],
    pub width: usize,
    pub height: usize,
    pub pitch: usize,
}

/// A rendered frame with 16-bit color channels
///
/// `pixels` is borrowed from the core for the duration of the callback.
/// `pitch` is the distance between rows in `u16` units.
#[derive(Debug)]
pub struct Rgb888Frame<'a> {
    pub pixels: &'a [u16],
    pub width: usize,
    pub height: usize,
    pub pitch: usize,
}

/// Handler for BGR555 frames
///
/// Invoked from the core's render thread, possibly concurrent with host
/// calls. Must not block: the render loop stalls until the handler returns.
pub type Bgr555Handler = Box<dyn FnMut(Bgr555Frame<'_>) + Send>;

/// Handler for RGB888 frames
///
/// Same threading contract as [`Bgr555Handler`].
pub type Rgb888Handler = Box<dyn FnMut(Rgb888Frame<'_>) + Send>;

/// Per-format frame subscription slots
///
/// One slot per pixel format, each holding at most one handler. Replacing
/// a handler swaps the slot atomically with respect to in-flight emission:
/// a given frame is seen by either the old handler or the new one, never
/// interleaved. Core implementations embed a `FrameSink` and call the
/// `emit_*` methods exactly once per rendered frame.
pub struct FrameSink {
    bgr555: Mutex<Option<Bgr555Handler>>,
    rgb888: Mutex<Option<Rgb888Handler>>,
}

impl FrameSink {
    /// Create a sink with both slots empty
    pub fn new() -> Self {
        Self {
            bgr555: Mutex::new(None),
            rgb888: Mutex::new(None),
        }
    }

    /// Install or replace the BGR555 handler
    pub fn set_bgr555(&self, handler: Bgr555Handler) {
        *lock_slot(&self.bgr555) = Some(handler);
        log::debug!("FrameSink: BGR555 handler installed");
    }

    /// Install or replace the RGB888 handler
    pub fn set_rgb888(&self, handler: Rgb888Handler) {
        *lock_slot(&self.rgb888) = Some(handler);
        log::debug!("FrameSink: RGB888 handler installed");
    }

    /// Deliver a BGR555 frame to the subscribed handler, if any
    ///
    /// Called by the core once per rendered frame. The frame borrow ends
    /// when the handler returns; the handler cannot retain it.
    pub fn emit_bgr555(&self, frame: Bgr555Frame<'_>) {
        if let Some(handler) = lock_slot(&self.bgr555).as_mut() {
            handler(frame);
        }
    }

    /// Deliver an RGB888 frame to the subscribed handler, if any
    pub fn emit_rgb888(&self, frame: Rgb888Frame<'_>) {
        if let Some(handler) = lock_slot(&self.rgb888).as_mut() {
            handler(frame);
        }
    }
}

impl Default for FrameSink {
    fn default() -> Self {
        Self::new()
    }
}

// A handler that panicked must not wedge the channel for later frames.
fn lock_slot<T>(slot: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
