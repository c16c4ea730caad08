//! Drawing and editing of sketch features.
//!
//! The central type is [`GeodesicSketch`] - the paired geometry of a
//! geodesic circle polygon and its center point. [`DrawSession`] builds one
//! from a draw gesture, [`EditSession`] keeps it consistent while the user
//! drags its vertices and rolls it back when a gesture is abandoned.

mod geodesic;
mod session;

pub use geodesic::{GeodesicSketch, CIRCLE_VERTEX_COUNT};
pub use session::{DrawSession, EditSession, EditState};

/// Shape selected in the draw tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawShape {
    /// A single point.
    Point,
    /// An open line.
    Line,
    /// A polygon.
    Polygon,
    /// A circle in display coordinates.
    Circle,
    /// A circle with geodesic semantics, see [`GeodesicSketch`].
    Geodesic,
}

/// Hint displayed next to the pointer while the draw tool is active.
///
/// `active` is the shape of the sketch currently being drawn, if any.
/// Returns `None` while the pointer is dragging the map, when no hint should
/// be shown.
pub fn pointer_hint(active: Option<DrawShape>, dragging: bool) -> Option<&'static str> {
    if dragging {
        return None;
    }

    Some(match active {
        Some(DrawShape::Line) => "Click to continue drawing the line",
        Some(DrawShape::Polygon) => "Click to continue drawing the polygon",
        _ => "Click to start drawing",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_follows_the_active_sketch() {
        assert_eq!(pointer_hint(None, false), Some("Click to start drawing"));
        assert_eq!(
            pointer_hint(Some(DrawShape::Line), false),
            Some("Click to continue drawing the line")
        );
        assert_eq!(
            pointer_hint(Some(DrawShape::Polygon), false),
            Some("Click to continue drawing the polygon")
        );
    }

    #[test]
    fn no_hint_while_dragging() {
        assert_eq!(pointer_hint(Some(DrawShape::Line), true), None);
    }
}
