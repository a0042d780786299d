/// Three-layer parallax starfield scrolling right to left. Cosmetic only.

use crate::timers::every_x_frames;

pub const STARS_PER_LAYER: usize = 11;
const WRAP_X: u8 = 127;

const FAST_STARS: [(u8, u8); STARS_PER_LAYER] = [
    (16, 10), (125, 15), (62, 20), (79, 25), (115, 30), (104, 35),
    (16, 40), (117, 45), (65, 50), (98, 55), (23, 60),
];
const MOVING_STARS: [(u8, u8); STARS_PER_LAYER] = [
    (84, 9), (67, 14), (109, 19), (27, 24), (9, 29), (96, 34),
    (31, 39), (45, 44), (82, 49), (19, 54), (57, 59),
];
const SLOW_STARS: [(u8, u8); STARS_PER_LAYER] = [
    (84, 7), (67, 12), (109, 17), (27, 22), (9, 27), (96, 32),
    (31, 37), (45, 42), (82, 47), (19, 52), (57, 57),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Starfield {
    /// Moves every frame.
    pub fast: [(u8, u8); STARS_PER_LAYER],
    /// Moves every second frame.
    pub moving: [(u8, u8); STARS_PER_LAYER],
    /// Moves every third frame.
    pub slow: [(u8, u8); STARS_PER_LAYER],
}

impl Starfield {
    pub fn new() -> Self {
        Self {
            fast: FAST_STARS,
            moving: MOVING_STARS,
            slow: SLOW_STARS,
        }
    }

    pub fn advance(&mut self, frame: u64) {
        let layers: [(&mut [(u8, u8); STARS_PER_LAYER], u64); 3] =
            [(&mut self.fast, 1), (&mut self.moving, 2), (&mut self.slow, 3)];

        for (layer, period) in layers {
            if !every_x_frames(frame, period) {
                continue;
            }
            for star in layer.iter_mut() {
                star.0 = star.0.saturating_sub(1);
                if star.0 < 1 {
                    star.0 = WRAP_X;
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u8, u8)> {
        self.fast.iter().chain(self.moving.iter()).chain(self.slow.iter())
    }
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new()
    }
}
