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

/// Control-layer error types
use std::path::PathBuf;
use thiserror::Error;

/// Result type for control-layer operations
pub type Result<T> = std::result::Result<T, MandarineError>;

/// Main error type for the control layer
///
/// This layer performs no validation of its own; every variant except
/// [`MandarineError::SessionActive`] originates in the emulation core and
/// is surfaced to the caller unchanged. Nothing is swallowed or retried.
#[derive(Error, Debug)]
pub enum MandarineError {
    #[error("failed to load media '{path}': {reason}")]
    MediaLoad { path: PathBuf, reason: String },

    #[error("invalid player index: {player}")]
    InvalidPlayer { player: usize },

    #[error("invalid analog slot: {slot}")]
    InvalidSlot { slot: usize },

    #[error("no media loaded in the emulation core")]
    NoActiveSession,

    #[error("save state error: {0}")]
    Persistence(String),

    #[error("an emulation session is already active in this process")]
    SessionActive,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
