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

//! Stub emulation core for integration tests
//!
//! Implements the full [`EmulationCore`] contract with observable behavior:
//! forwarded input events are recorded verbatim, rendered frames derive
//! deterministically from a frame counter, and save states are the frame
//! counter serialized with bincode. This pins down the core-defined edges
//! of the contract (what happens on `start()` with no media, out-of-range
//! indices, unreadable media) so the control layer's pass-through behavior
//! can be asserted against something concrete.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bincode::{config, Decode, Encode};
use mandarine::core::{
    Bgr555Frame, Bgr555Handler, EmulationCore, FrameSink, MandarineError, Result, Rgb888Frame,
    Rgb888Handler,
};
use serde::{Deserialize, Serialize};

/// Player/slot count the stub accepts
pub const SUPPORTED_PLAYERS: usize = 2;

/// Frame geometry the stub renders
pub const FRAME_WIDTH: usize = 16;
pub const FRAME_HEIGHT: usize = 8;

/// An input call the control layer forwarded to the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardedEvent {
    Button {
        player: usize,
        token: String,
        pressed: bool,
    },
    Drag {
        slot: usize,
        token: String,
        value: i16,
    },
}

/// The stub's entire machine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
struct MachineState {
    frame_counter: u64,
}

struct Inner {
    media: Option<PathBuf>,
    running: bool,
    paused: bool,
    machine: MachineState,
}

/// Recording stub implementation of the emulation core contract
pub struct StubCore {
    sink: FrameSink,
    inner: Mutex<Inner>,
    events: Mutex<Vec<ForwardedEvent>>,
}

#[allow(dead_code)]
impl StubCore {
    pub fn new() -> Self {
        Self {
            sink: FrameSink::new(),
            inner: Mutex::new(Inner {
                media: None,
                running: false,
                paused: false,
                machine: MachineState { frame_counter: 0 },
            }),
            events: Mutex::new(Vec::new()),
        }
    }

    /// All input events forwarded so far, in delivery order
    pub fn events(&self) -> Vec<ForwardedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear_events(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().unwrap().running
    }

    pub fn frame_counter(&self) -> u64 {
        self.inner.lock().unwrap().machine.frame_counter
    }

    /// Render one BGR555 frame and deliver it through the sink
    ///
    /// The pixel pattern is a pure function of the frame counter, so two
    /// frames rendered from equal machine state are byte-identical.
    pub fn render_bgr555(&self) {
        let index = self.advance_frame();
        let data = frame_pattern(index);
        self.sink.emit_bgr555(Bgr555Frame {
            data: &data,
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            pitch: FRAME_WIDTH * 2,
        });
    }

    /// Render one RGB888 frame and deliver it through the sink
    pub fn render_rgb888(&self) {
        let index = self.advance_frame();
        let pixels: Vec<u16> = frame_pattern(index)
            .iter()
            .map(|&b| u16::from(b) << 3)
            .collect();
        self.sink.emit_rgb888(Rgb888Frame {
            pixels: &pixels,
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            pitch: FRAME_WIDTH,
        });
    }

    fn advance_frame(&self) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        let index = inner.machine.frame_counter;
        inner.machine.frame_counter += 1;
        index
    }
}

impl Default for StubCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic BGR555 byte pattern for a given frame index
pub fn frame_pattern(index: u64) -> Vec<u8> {
    (0..FRAME_WIDTH * FRAME_HEIGHT * 2)
        .map(|i| (index as usize).wrapping_add(i.wrapping_mul(7)) as u8)
        .collect()
}

impl EmulationCore for StubCore {
    fn insert(&self, media: &Path) -> Result<()> {
        if media.extension().is_some_and(|ext| ext == "bad") {
            return Err(MandarineError::MediaLoad {
                path: media.to_path_buf(),
                reason: "unsupported image format".into(),
            });
        }
        let mut inner = self.inner.lock().unwrap();
        inner.media = Some(media.to_path_buf());
        inner.machine = MachineState { frame_counter: 0 };
        Ok(())
    }

    fn start(&self) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.media.is_none() {
            return Err(MandarineError::NoActiveSession);
        }
        inner.running = true;
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        self.inner.lock().unwrap().running = false;
        Ok(())
    }

    fn pause(&self, paused: bool) {
        self.inner.lock().unwrap().paused = paused;
    }

    fn is_paused(&self) -> bool {
        self.inner.lock().unwrap().paused
    }

    fn set_bgr555(&self, handler: Bgr555Handler) {
        self.sink.set_bgr555(handler);
    }

    fn set_rgb888(&self, handler: Rgb888Handler) {
        self.sink.set_rgb888(handler);
    }

    fn input(&self, player: usize, token: &str, pressed: bool) -> Result<()> {
        if player >= SUPPORTED_PLAYERS {
            return Err(MandarineError::InvalidPlayer { player });
        }
        self.events.lock().unwrap().push(ForwardedEvent::Button {
            player,
            token: token.to_string(),
            pressed,
        });
        Ok(())
    }

    fn drag(&self, slot: usize, token: &str, value: i16) -> Result<()> {
        if slot >= SUPPORTED_PLAYERS {
            return Err(MandarineError::InvalidSlot { slot });
        }
        self.events.lock().unwrap().push(ForwardedEvent::Drag {
            slot,
            token: token.to_string(),
            value,
        });
        Ok(())
    }

    fn save(&self, to: &Path) -> Result<()> {
        let machine = {
            let inner = self.inner.lock().unwrap();
            if inner.media.is_none() {
                return Err(MandarineError::NoActiveSession);
            }
            inner.machine
        };
        let bytes = bincode::encode_to_vec(machine, config::standard())
            .map_err(|e| MandarineError::Persistence(e.to_string()))?;
        let mut file = File::create(to)?;
        file.write_all(&bytes)?;
        Ok(())
    }

    fn load(&self, from: &Path) -> Result<()> {
        let mut bytes = Vec::new();
        File::open(from)?.read_to_end(&mut bytes)?;
        let (machine, _) = bincode::decode_from_slice(&bytes, config::standard())
            .map_err(|e| MandarineError::Persistence(e.to_string()))?;
        self.inner.lock().unwrap().machine = machine;
        Ok(())
    }

    fn id(&self, media: &Path) -> String {
        media
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
