//! Dropped-item records produced by a world-save reader.

use serde::{Deserialize, Serialize};

/// A point in the game world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Text rendering with each coordinate rounded to the nearest integer.
    pub fn to_rounded_string(&self) -> String {
        format!(
            "({}, {}, {})",
            self.x.round() as i64,
            self.y.round() as i64,
            self.z.round() as i64
        )
    }
}

/// A dropped item found in a world save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedItem {
    pub name: String,
    pub count: u32,
    pub position: Position,
    /// Ticks since the item appeared; 0 means the age is unknown.
    pub age: u32,
    /// Signed ticks relative to the last update of the containing chunk.
    pub relative_chunk_update_time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_string_rounds_each_coordinate() {
        let pos = Position::new(12.3, 63.7, -8.4);
        assert_eq!(pos.to_rounded_string(), "(12, 64, -8)");
    }

    #[test]
    fn rounded_string_keeps_exact_integers() {
        let pos = Position::new(0.0, -1.0, 100.0);
        assert_eq!(pos.to_rounded_string(), "(0, -1, 100)");
    }
}
