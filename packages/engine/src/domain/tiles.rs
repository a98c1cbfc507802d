//! Tile definitions - grid cells, tile kinds and pointer buttons
//!
//! Everything here is plain data. The controller in `simulation/` owns the
//! table that ties a `GridCoord` to its physics body.

use serde::Serialize;

use crate::physics::BodyHandle;

/// Side length of one grid cell, in pixels
pub const TILE_SIZE: f32 = 30.0;

/// Half of a cell; offset from a cell corner to its center
pub const HALF_TILE: f32 = TILE_SIZE / 2.0;

/// Integer cell address (column, row).
///
/// Equality and hashing are derived from both components, so two coordinates
/// built separately from the same click always hit the same table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridCoord {
    pub col: i32,
    pub row: i32,
}

impl GridCoord {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Cell containing a pixel position. Floors toward negative infinity.
    ///
    /// Out-of-range values saturate to `i32::MIN`/`i32::MAX` and NaN maps to 0
    /// (the `as` cast); DOM offsets are integers, so neither occurs in practice.
    #[inline]
    pub fn from_pixel(x: f32, y: f32) -> Self {
        Self {
            col: (x / TILE_SIZE).floor() as i32,
            row: (y / TILE_SIZE).floor() as i32,
        }
    }

    /// Top-left corner of the cell, in pixels
    #[inline]
    pub fn corner(&self) -> (f32, f32) {
        (self.col as f32 * TILE_SIZE, self.row as f32 * TILE_SIZE)
    }

    /// Center of the cell, in pixels
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        let (x, y) = self.corner();
        (x + HALF_TILE, y + HALF_TILE)
    }
}

/// What gets spawned on a primary click.
///
/// Discriminants match the `<select>` option values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum TileKind {
    /// Square, static forever
    #[default]
    Block = 0,
    /// Circle, static while editing and dynamic while running
    Variable = 1,
}

impl TileKind {
    /// Parse a selector value. Unknown values yield `None`.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(TileKind::Block),
            1 => Some(TileKind::Variable),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether the body toggles between static and dynamic on start/stop
    #[inline]
    pub fn is_variable(self) -> bool {
        matches!(self, TileKind::Variable)
    }
}

/// One occupied cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub body: BodyHandle,
    pub kind: TileKind,
}

/// `MouseEvent.button` values the sandbox reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

impl PointerButton {
    pub const PRIMARY: i16 = 0;
    pub const SECONDARY: i16 = 2;

    /// Middle button, back/forward and anything else map to `None`
    pub fn from_dom(button: i16) -> Option<Self> {
        match button {
            Self::PRIMARY => Some(PointerButton::Primary),
            Self::SECONDARY => Some(PointerButton::Secondary),
            _ => None,
        }
    }
}

/// Editing vs running
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulationMode {
    #[default]
    Editing,
    Running,
}

impl SimulationMode {
    #[inline]
    pub fn is_editing(self) -> bool {
        matches!(self, SimulationMode::Editing)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, SimulationMode::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_floors_into_cell() {
        assert_eq!(GridCoord::from_pixel(45.0, 17.0), GridCoord::new(1, 0));
        assert_eq!(GridCoord::from_pixel(40.0, 10.0), GridCoord::new(1, 0));
        assert_eq!(GridCoord::from_pixel(29.9, 30.0), GridCoord::new(0, 1));
    }

    #[test]
    fn negative_pixels_floor_toward_negative_cells() {
        assert_eq!(GridCoord::from_pixel(-1.0, -31.0), GridCoord::new(-1, -2));
    }

    #[test]
    fn non_finite_pixels_saturate() {
        assert_eq!(GridCoord::from_pixel(f32::NAN, 1e30), GridCoord::new(0, i32::MAX));
        assert_eq!(GridCoord::from_pixel(-1e30, 0.0).col, i32::MIN);
    }

    #[test]
    fn center_is_offset_by_half_tile() {
        let c = GridCoord::new(1, 0);
        assert_eq!(c.center(), (45.0, 15.0));
        assert_eq!(c.corner(), (30.0, 0.0));
    }

    #[test]
    fn selector_values_map_to_kinds() {
        assert_eq!(TileKind::from_index(0), Some(TileKind::Block));
        assert_eq!(TileKind::from_index(1), Some(TileKind::Variable));
        assert_eq!(TileKind::from_index(7), None);
        assert_eq!(TileKind::default(), TileKind::Block);
    }

    #[test]
    fn only_primary_and_secondary_buttons_are_recognized() {
        assert_eq!(PointerButton::from_dom(0), Some(PointerButton::Primary));
        assert_eq!(PointerButton::from_dom(2), Some(PointerButton::Secondary));
        assert_eq!(PointerButton::from_dom(1), None);
        assert_eq!(PointerButton::from_dom(4), None);
    }
}
