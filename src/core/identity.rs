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

//! Media identity derivation
//!
//! Save states and metadata are keyed by a stable identifier derived from
//! the media filename the core reports. Disc filenames routinely carry
//! underscores and extension dots (`SLUS_000.01`); both are unsafe or
//! ambiguous in directory segments, so underscores become hyphens and
//! periods are removed.

use std::path::Path;

use super::emulator::EmulationCore;

/// Derive a filesystem-safe identity key for a media reference
///
/// Asks the core for the media's display filename, then sanitizes it.
/// Pure function of the core and media path: the same inputs always yield
/// the same key.
pub fn media_id(core: &dyn EmulationCore, media: &Path) -> String {
    sanitize(&core.id(media))
}

/// Replace underscores with hyphens and strip periods
pub(crate) fn sanitize(raw: &str) -> String {
    raw.replace('_', "-").replace('.', "")
}
