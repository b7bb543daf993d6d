use serde::{Deserialize, Serialize};

use crate::highlight::Role;

const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const DARK_GRAY: [f32; 3] = [50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0];
const LIGHT_GRAY: [f32; 3] = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0];

/// Palette for bars and backgrounds. Fast mode inverts the scheme so the
/// mode is visible at a glance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB for the primary cursor.
    pub primary: [f32; 3],
    /// RGB for the secondary cursor.
    pub secondary: [f32; 3],
    /// RGB for the quicksort pivot.
    pub pivot: [f32; 3],
    /// RGB for unhighlighted bars.
    pub bar: [f32; 3],
    /// RGB for unhighlighted bars in fast mode.
    pub bar_fast: [f32; 3],
    /// Background while running.
    pub background: [f32; 3],
    /// Background while paused.
    pub background_paused: [f32; 3],
    /// Background while running in fast mode.
    pub background_fast: [f32; 3],
    /// Background while paused in fast mode.
    pub background_fast_paused: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            primary: [1.0, 0.0, 0.0],
            secondary: [0.0, 0.0, 1.0],
            pivot: [0.0, 1.0, 0.0],
            bar: BLACK,
            bar_fast: WHITE,
            background: WHITE,
            background_paused: LIGHT_GRAY,
            background_fast: BLACK,
            background_fast_paused: DARK_GRAY,
        }
    }
}

impl ColorOptions {
    /// Color of a bar with the given highlight role.
    #[must_use]
    pub fn bar_color(&self, role: Option<Role>, fast: bool) -> [f32; 3] {
        match role {
            Some(Role::Primary) => self.primary,
            Some(Role::Secondary) => self.secondary,
            Some(Role::Pivot) => self.pivot,
            None if fast => self.bar_fast,
            None => self.bar,
        }
    }

    /// Background fill for the current mode.
    #[must_use]
    pub fn background(&self, paused: bool, fast: bool) -> [f32; 3] {
        match (fast, paused) {
            (false, false) => self.background,
            (false, true) => self.background_paused,
            (true, false) => self.background_fast,
            (true, true) => self.background_fast_paused,
        }
    }
}
