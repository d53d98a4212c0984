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

//! PlayStation controller input symbols
//!
//! The emulation core consumes string tokens for every input channel. This
//! module keeps the closed symbol set typed at the API boundary and converts
//! to the wire token only at the core-call boundary, so an invalid symbol is
//! a compile error rather than a silently ignored string.

/// Logical PlayStation controller input
///
/// Fourteen digital buttons plus eight analog-stick directional symbols
/// (two sticks, four directions each). The stick symbols are used both as
/// digital inputs through [`button`](crate::core::Mandarine::button) and as
/// magnitude-bearing drag axes through
/// [`drag`](crate::core::Mandarine::drag).
///
/// The token mapping is total and invariant; the core never sees any
/// string outside [`PsxButton::token`]'s range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsxButton {
    Up,
    Right,
    Down,
    Left,
    Triangle,
    Circle,
    Cross,
    Square,
    Select,
    Start,
    L1,
    R1,
    L2,
    R2,

    LUp,
    LRight,
    LDown,
    LLeft,

    RUp,
    RRight,
    RDown,
    RLeft,
}

impl PsxButton {
    /// Every symbol, digital buttons first, then left stick, then right stick
    pub const ALL: [PsxButton; 22] = [
        PsxButton::Up,
        PsxButton::Right,
        PsxButton::Down,
        PsxButton::Left,
        PsxButton::Triangle,
        PsxButton::Circle,
        PsxButton::Cross,
        PsxButton::Square,
        PsxButton::Select,
        PsxButton::Start,
        PsxButton::L1,
        PsxButton::R1,
        PsxButton::L2,
        PsxButton::R2,
        PsxButton::LUp,
        PsxButton::LRight,
        PsxButton::LDown,
        PsxButton::LLeft,
        PsxButton::RUp,
        PsxButton::RRight,
        PsxButton::RDown,
        PsxButton::RLeft,
    ];

    /// Wire token consumed by the emulation core
    ///
    /// # Returns
    ///
    /// The fixed string identifier for this symbol (e.g. `"dpad_up"`,
    /// `"cross"`, `"l_up"`)
    pub fn token(self) -> &'static str {
        match self {
            PsxButton::Up => "dpad_up",
            PsxButton::Right => "dpad_right",
            PsxButton::Down => "dpad_down",
            PsxButton::Left => "dpad_left",
            PsxButton::Triangle => "triangle",
            PsxButton::Circle => "circle",
            PsxButton::Cross => "cross",
            PsxButton::Square => "square",
            PsxButton::Select => "select",
            PsxButton::Start => "start",
            PsxButton::L1 => "l1",
            PsxButton::R1 => "r1",
            PsxButton::L2 => "l2",
            PsxButton::R2 => "r2",
            PsxButton::LUp => "l_up",
            PsxButton::LRight => "l_right",
            PsxButton::LDown => "l_down",
            PsxButton::LLeft => "l_left",
            PsxButton::RUp => "r_up",
            PsxButton::RRight => "r_right",
            PsxButton::RDown => "r_down",
            PsxButton::RLeft => "r_left",
        }
    }

    /// Whether this symbol is an analog-stick directional axis
    ///
    /// Stick axes carry a signed 16-bit magnitude when routed through
    /// `drag`; the core owns the sign and zero-center convention.
    #[inline]
    pub fn is_stick(self) -> bool {
        matches!(
            self,
            PsxButton::LUp
                | PsxButton::LRight
                | PsxButton::LDown
                | PsxButton::LLeft
                | PsxButton::RUp
                | PsxButton::RRight
                | PsxButton::RDown
                | PsxButton::RLeft
        )
    }
}
