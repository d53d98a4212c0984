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

//! Mandarine: control and media boundary for a PlayStation emulation core
//!
//! This library is the host-facing coordination layer of a PSX emulator
//! runtime. It manages the emulation lifecycle (insert media, start, pause,
//! stop), delivers rendered video frames to a host display surface, injects
//! controller input, and persists/restores machine state. The emulation core
//! itself (CPU, GPU, SPU, DMA) is an external collaborator behind the
//! [`core::EmulationCore`] trait; this crate drives it and receives its
//! frame callbacks.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mandarine::core::{EmulationCore, Mandarine, PsxButton};
//!
//! fn run(core: Arc<dyn EmulationCore>) -> mandarine::core::Result<()> {
//!     let mut mandarine = Mandarine::new(core)?;
//!     mandarine.insert("games/crash.cue".as_ref())?;
//!     mandarine.start()?;
//!     mandarine.button(PsxButton::Cross, 0, true)?;
//!     Ok(())
//! }
//! ```

pub mod core;
