//! Per-tick snapshot handed to the renderer.
//!
//! The core never draws. Each frame it exposes the values, their normalized
//! heights and the highlight roles; [`BarLayout`] and [`ColorOptions`] turn
//! that into rectangles and colors for whatever backend draws them.

use crate::{
    dispatcher::Dispatcher,
    engine::Algorithm,
    highlight::Role,
    options::ColorOptions,
    sequence::{ratio_between, Value},
};

/// Sequences longer than this are drawn without gaps between bars.
const GAPLESS_ABOVE: usize = 200;

/// One bar of the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Position in the sequence.
    pub index: usize,
    /// Value at that position.
    pub value: Value,
    /// `(value - min) / (max - min)`, `0.0` when all values are equal.
    pub ratio: f32,
    /// Highlight role, if any.
    pub role: Option<Role>,
}

/// Everything the renderer needs for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// One entry per value, in sequence order.
    pub bars: Vec<Bar>,
    /// Algorithm being animated, `None` when idle.
    pub algorithm: Option<Algorithm>,
    /// Whether ticking is paused.
    pub paused: bool,
    /// Whether fast mode is on.
    pub fast: bool,
}

impl Frame {
    /// Snapshot `dispatcher` with the driver's pause/fast flags.
    #[must_use]
    pub fn capture(dispatcher: &Dispatcher, paused: bool, fast: bool) -> Self {
        let seq = dispatcher.sequence();
        let highlights = dispatcher.highlights();
        let (min, max) = (seq.min().unwrap_or(0), seq.max().unwrap_or(0));
        let bars = seq
            .values()
            .iter()
            .enumerate()
            .map(|(index, &value)| Bar {
                index,
                value,
                ratio: ratio_between(value, min, max),
                role: highlights.role(index),
            })
            .collect();
        Self {
            bars,
            algorithm: dispatcher.algorithm(),
            paused,
            fast,
        }
    }

    /// Fill color for each bar, in order.
    #[must_use]
    pub fn bar_colors(&self, colors: &ColorOptions) -> Vec<[f32; 3]> {
        self.bars
            .iter()
            .map(|bar| colors.bar_color(bar.role, self.fast))
            .collect()
    }

    /// Background fill for this frame.
    #[must_use]
    pub fn background(&self, colors: &ColorOptions) -> [f32; 3] {
        colors.background(self.paused, self.fast)
    }
}

/// Bar geometry for a `width` × `height` viewport.
///
/// Bars share the width evenly, keep a one pixel gap on each side while
/// there are few enough of them, and span 10%..90% of the height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    height: f32,
    bar_width: f32,
    gap: f32,
}

impl BarLayout {
    /// Layout for `count` bars.
    #[must_use]
    pub fn new(width: u32, height: u32, count: usize) -> Self {
        Self {
            height: height as f32,
            bar_width: width as f32 / count.max(1) as f32,
            gap: if count > GAPLESS_ABOVE { 0.0 } else { 1.0 },
        }
    }

    /// Horizontal gap applied to each side of a bar.
    #[must_use]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// `[x, y, width, height]` of the bar at `index` with normalized
    /// height `ratio`, reaching down to the bottom edge.
    #[must_use]
    pub fn rect(&self, index: usize, ratio: f32) -> [f32; 4] {
        let top = (self.height * ((1.0 - ratio) * 0.8 + 0.1)).floor();
        [
            index as f32 * self.bar_width + self.gap,
            top,
            (self.bar_width - self.gap * 2.0).max(0.0),
            self.height - top,
        ]
    }
}
