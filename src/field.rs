//! The animated block field: one `Cell` per grid slot, each carrying an
//! interpolation pair for color and height, all driven by one shared clock.
//!
//! The continuity protocol lives in `reroll`: every cell's start value is
//! frozen at whatever is on screen right now, new targets are drawn, and only
//! then is the clock reset. Retarget-all and clock-reset are one operation so
//! a frame can never observe half of a reroll.

use glam::Vec2;

use crate::clock::AnimationClock;
use crate::drivers::DriverSource;
use crate::grid;
use crate::palette::{rainbow, HeightScale, Rgba};
use crate::schema::Scene;

/// Affine interpolation between two values of the same type.
pub trait Lerp: Copy {
    fn lerp(self, target: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    // Weighted form: exact at both endpoints, so convergence and continuity
    // hold bit-for-bit rather than within an epsilon.
    fn lerp(self, target: Self, t: f32) -> Self {
        self * (1.0 - t) + target * t
    }
}

impl Lerp for Rgba {
    fn lerp(self, target: Self, t: f32) -> Self {
        Rgba::new(
            self.r.lerp(target.r, t),
            self.g.lerp(target.g, t),
            self.b.lerp(target.b, t),
            self.a.lerp(target.a, t),
        )
    }
}

/// One interpolation span. `at(1.0)` is exactly `target`, always.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedValue<T: Lerp> {
    start: T,
    target: T,
}

impl<T: Lerp> AnimatedValue<T> {
    /// Both endpoints equal: the value sits still until the first retarget.
    pub fn fixed(value: T) -> Self {
        Self {
            start: value,
            target: value,
        }
    }

    pub fn at(&self, t: f32) -> T {
        self.start.lerp(self.target, t)
    }

    pub fn target(&self) -> T {
        self.target
    }

    fn retarget(&mut self, frozen_start: T, next_target: T) {
        self.start = frozen_start;
        self.target = next_target;
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    index: usize,
    delay: f32,
    grid_offset: Vec2,
    color: AnimatedValue<Rgba>,
    height: AnimatedValue<f32>,
}

impl Cell {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn grid_offset(&self) -> Vec2 {
        self.grid_offset
    }

    pub fn color_target(&self) -> Rgba {
        self.color.target()
    }

    pub fn height_target(&self) -> f32 {
        self.height.target()
    }

    /// Rescales global eased progress into this cell's own span: motion
    /// starts `delay` late but the denominator stretches the remainder so
    /// every cell lands on 1 exactly when the global clock does.
    pub fn local_progress(&self, global_eased: f32, max_delay: f32) -> f32 {
        let shifted = (global_eased - self.delay).max(0.0);
        (shifted / (1.0 - max_delay)).min(1.0)
    }

    pub fn displayed_color(&self, global_eased: f32, max_delay: f32) -> Rgba {
        self.color.at(self.local_progress(global_eased, max_delay))
    }

    pub fn displayed_height(&self, global_eased: f32, max_delay: f32) -> f32 {
        self.height.at(self.local_progress(global_eased, max_delay))
    }

    fn retarget(&mut self, current_eased: f32, max_delay: f32, color: Rgba, height: f32) {
        let frozen_color = self.displayed_color(current_eased, max_delay);
        let frozen_height = self.displayed_height(current_eased, max_delay);
        self.color.retarget(frozen_color, color);
        self.height.retarget(frozen_height, height);
    }
}

/// What one cell contributes to a frame: where it sits and what it shows.
#[derive(Debug, Clone, Copy)]
pub struct DisplayedBlock {
    pub index: usize,
    pub grid_offset: Vec2,
    pub height: f32,
    pub color: Rgba,
}

pub struct BlockField {
    cells: Vec<Cell>,
    clock: AnimationClock,
    drivers: DriverSource,
    heights: HeightScale,
    max_delay: f32,
}

impl BlockField {
    pub fn new(scene: &Scene) -> Self {
        let row_length = scene.grid.row_length;
        let cell_count = scene.cell_count();
        let heights = HeightScale::new(scene.heights.min, scene.heights.max);
        let max_delay = scene.animation.max_delay;
        let mut drivers = DriverSource::new(scene.seed);

        let mut cells = Vec::with_capacity(cell_count);
        for index in 0..cell_count {
            let pair = drivers.next_drivers(index, cell_count);
            cells.push(Cell {
                index,
                delay: (index as f32 / cell_count as f32) * max_delay,
                grid_offset: grid::offset(index, row_length),
                color: AnimatedValue::fixed(rainbow(pair.color)),
                height: AnimatedValue::fixed(heights.map(pair.height)),
            });
        }

        Self {
            cells,
            clock: AnimationClock::new(scene.animation.time_factor),
            drivers,
            heights,
            max_delay,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn max_delay(&self) -> f32 {
        self.max_delay
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// True once every cell has converged on its target.
    pub fn is_settled(&self) -> bool {
        self.clock.is_idle()
    }

    /// Advances the shared clock. Per-cell state is untouched; cells derive
    /// their displayed values from the clock on read.
    pub fn tick(&mut self, elapsed: f32) {
        self.clock.tick(elapsed);
    }

    /// Freezes every cell at its currently displayed value, draws fresh
    /// targets, and restarts the clock. Safe to call back-to-back: a second
    /// reroll captures the progress-0 values of the first.
    pub fn reroll(&mut self) {
        let eased = self.clock.eased();
        let cell_count = self.cells.len();
        for cell in &mut self.cells {
            let pair = self.drivers.next_drivers(cell.index, cell_count);
            cell.retarget(
                eased,
                self.max_delay,
                rainbow(pair.color),
                self.heights.map(pair.height),
            );
        }
        self.clock.reset();
    }

    /// Displayed state of every cell at the clock's current eased progress.
    /// Deterministic for a given clock value and cell state.
    pub fn displayed(&self) -> impl Iterator<Item = DisplayedBlock> + '_ {
        let eased = self.clock.eased();
        self.cells.iter().map(move |cell| DisplayedBlock {
            index: cell.index,
            grid_offset: cell.grid_offset,
            height: cell.displayed_height(eased, self.max_delay),
            color: cell.displayed_color(eased, self.max_delay),
        })
    }
}
