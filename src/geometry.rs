/// Axis-aligned bounding boxes, expressed as offsets from a sprite's
/// top-left anchor.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub top_left_x: u8,
    pub top_left_y: u8,
    pub bottom_right_x: u8,
    pub bottom_right_y: u8,
}

impl BoundingBox {
    pub const fn new(top_left_x: u8, top_left_y: u8, bottom_right_x: u8, bottom_right_y: u8) -> Self {
        Self {
            top_left_x,
            top_left_y,
            bottom_right_x,
            bottom_right_y,
        }
    }

    /// The four corners of the box in screen space when anchored at
    /// `(x, y)`: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self, x: u8, y: u8) -> [(u16, u16); 4] {
        let (x, y) = (x as u16, y as u16);
        let left = x + self.top_left_x as u16;
        let right = x + self.bottom_right_x as u16;
        let top = y + self.top_left_y as u16;
        let bottom = y + self.bottom_right_y as u16;
        [(left, top), (right, top), (left, bottom), (right, bottom)]
    }
}

// ── Shared boxes ──────────────────────────────────────────────────────────────

pub const TANK_BOX: BoundingBox = BoundingBox::new(0, 0, 8, 7);
pub const BAT_BOX: BoundingBox = BoundingBox::new(1, 2, 6, 4);
pub const DRACULA_BOX: BoundingBox = BoundingBox::new(0, 0, 15, 15);
pub const MEGADRACULA_BOX: BoundingBox = BoundingBox::new(1, 1, 30, 30);

/// True iff `(px, py)` lies inside `bbox` anchored at `(origin_x, origin_y)`.
/// Both edges are inclusive.
pub fn point_in_box(px: u16, py: u16, origin_x: u8, origin_y: u8, bbox: &BoundingBox) -> bool {
    let left = origin_x as u16 + bbox.top_left_x as u16;
    let top = origin_y as u16 + bbox.top_left_y as u16;
    let right = origin_x as u16 + bbox.bottom_right_x as u16;
    let bottom = origin_y as u16 + bbox.bottom_right_y as u16;

    px >= left && px <= right && py >= top && py <= bottom
}
