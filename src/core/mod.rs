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

//! Core control-layer components
//!
//! This module contains the coordination layer between a host application
//! and the PSX emulation core:
//! - Emulation core contract (the out-of-scope collaborator's interface)
//! - Lifecycle session (insert / start / pause / stop state machine)
//! - Frame delivery channel (per-format video callbacks)
//! - Controller input symbols and routing
//! - Save-state pass-through and media identity

pub mod button;
pub mod emulator;
pub mod error;
pub mod facade;
pub mod frame;
pub mod identity;
pub mod session;

// Re-export commonly used types
pub use button::PsxButton;
pub use emulator::EmulationCore;
pub use error::{MandarineError, Result};
pub use facade::Mandarine;
pub use frame::{Bgr555Frame, Bgr555Handler, FrameSink, Rgb888Frame, Rgb888Handler};
pub use session::{EmulationSession, LifecycleState};
