// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A manual score correction supplied by an operator.
///
/// Only the three score tiers can be overridden; the set history and the
/// transition log are never editable. Any field left as `None` keeps its
/// current value. Corrections are validated and applied atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OverridePatch {
    /// New point count for the black side.
    pub point_black: Option<u8>,
    /// New point count for the yellow side.
    pub point_yellow: Option<u8>,
    /// New game count for the black side.
    pub game_black: Option<u8>,
    /// New game count for the yellow side.
    pub game_yellow: Option<u8>,
    /// New set count for the black side.
    pub set_black: Option<u8>,
    /// New set count for the yellow side.
    pub set_yellow: Option<u8>,
}

impl OverridePatch {
    /// Whether the patch supplies no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.point_black.is_none()
            && self.point_yellow.is_none()
            && self.game_black.is_none()
            && self.game_yellow.is_none()
            && self.set_black.is_none()
            && self.set_yellow.is_none()
    }
}
