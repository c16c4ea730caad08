//! Edit and draw sessions that drive a [`GeodesicSketch`] from pointer
//! gestures.

use geodraw_types::geo::{GeoPoint2d, Projection};
use geodraw_types::{Point2d, Polygon};

use super::geodesic::GeodesicSketch;

/// State of an [`EditSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// No edit gesture is in progress.
    Idle,
    /// A drag gesture is modifying the geometry.
    Editing,
}

/// Direct-manipulation editing of a geodesic circle.
///
/// The session owns the paired geometry for the whole lifetime of the
/// feature and moves between two states:
///
/// ```text
/// Idle --begin()--> Editing --drag_*()...--> Editing --commit()--> Idle
///                      \----------------abandon()---------------> Idle
/// ```
///
/// `begin` snapshots the geometry so an abandoned gesture can roll back;
/// `commit` discards the snapshot and keeps the edits.
#[derive(Debug, Clone)]
pub struct EditSession {
    geometry: GeodesicSketch,
    snapshot: Option<GeodesicSketch>,
}

impl EditSession {
    /// Creates an idle session owning the given geometry.
    pub fn new(geometry: GeodesicSketch) -> Self {
        Self {
            geometry,
            snapshot: None,
        }
    }

    /// Current state of the session.
    pub fn state(&self) -> EditState {
        if self.snapshot.is_some() {
            EditState::Editing
        } else {
            EditState::Idle
        }
    }

    /// The geometry being edited.
    pub fn geometry(&self) -> &GeodesicSketch {
        &self.geometry
    }

    /// Starts an edit gesture, snapshotting the geometry for rollback.
    ///
    /// Calling it again during an ongoing gesture keeps the original
    /// snapshot.
    pub fn begin(&mut self) {
        if self.snapshot.is_none() {
            self.snapshot = Some(self.geometry.clone());
        }
    }

    /// Handles an incremental move of the center handle to `position`.
    ///
    /// Does nothing outside of an edit gesture. Returns whether the geometry
    /// was updated.
    pub fn drag_center<Proj>(&mut self, position: Point2d, projection: &Proj) -> bool
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        if self.snapshot.is_none() {
            return false;
        }

        // The center handle moves with the pointer before the update runs,
        // which is what routes the update down the center-move path.
        let previous = self.geometry.clone();
        self.geometry.set_center(position);
        if self.geometry.update_dragged(position, projection) {
            true
        } else {
            self.geometry = previous;
            false
        }
    }

    /// Handles an incremental move of a rim vertex to `position`.
    ///
    /// Does nothing outside of an edit gesture. Returns whether the geometry
    /// was updated.
    pub fn drag_rim<Proj>(&mut self, position: Point2d, projection: &Proj) -> bool
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        if self.snapshot.is_none() {
            return false;
        }

        self.geometry.update_dragged(position, projection)
    }

    /// Ends the gesture keeping the edits and returns the circle polygon,
    /// the sole geometry of the finished feature.
    pub fn commit(&mut self) -> Polygon<Point2d> {
        self.snapshot = None;
        self.geometry.clone().into_polygon()
    }

    /// Ends the gesture rolling the geometry back to the snapshot.
    pub fn abandon(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.geometry = snapshot;
        }
    }
}

/// Draw gesture creating a new geodesic circle.
///
/// The gesture is anchored at the first click (the circle center); every
/// pointer move rebuilds the circle with the pointer as the rim point.
#[derive(Debug, Clone)]
pub struct DrawSession {
    anchor: Point2d,
    sketch: GeodesicSketch,
}

impl DrawSession {
    /// Starts a draw gesture at `anchor`.
    ///
    /// Returns `None` if the anchor is not projectable.
    pub fn start<Proj>(anchor: Point2d, projection: &Proj) -> Option<Self>
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        let sketch = GeodesicSketch::from_two_points(anchor, anchor, projection)?;
        Some(Self { anchor, sketch })
    }

    /// Rebuilds the circle with the pointer at `position` on the rim.
    ///
    /// Returns whether the sketch was updated.
    pub fn update<Proj>(&mut self, position: Point2d, projection: &Proj) -> bool
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        match GeodesicSketch::from_two_points(self.anchor, position, projection) {
            Some(sketch) => {
                self.sketch = sketch;
                true
            }
            None => false,
        }
    }

    /// The sketch as drawn so far.
    pub fn sketch(&self) -> &GeodesicSketch {
        &self.sketch
    }

    /// Finishes the gesture, handing the drawn geometry over to an edit
    /// session.
    pub fn finish(self) -> EditSession {
        EditSession::new(self.sketch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geodraw_types::geo::Crs;

    fn projection() -> Box<dyn Projection<InPoint = GeoPoint2d, OutPoint = Point2d>> {
        Crs::EPSG3857
            .get_projection()
            .expect("EPSG:3857 is projectable")
    }

    fn session() -> EditSession {
        let projection = projection();
        let sketch = GeodesicSketch::from_two_points(
            Point2d::new(0.0, 0.0),
            Point2d::new(1000.0, 0.0),
            &*projection,
        )
        .expect("points are projectable");
        EditSession::new(sketch)
    }

    #[test]
    fn drags_are_ignored_when_idle() {
        let projection = projection();
        let mut session = session();
        let before = session.geometry().clone();

        assert_eq!(session.state(), EditState::Idle);
        assert!(!session.drag_rim(Point2d::new(5000.0, 0.0), &*projection));
        assert!(!session.drag_center(Point2d::new(5000.0, 0.0), &*projection));
        assert_eq!(*session.geometry(), before);
    }

    #[test]
    fn commit_keeps_the_edits() {
        let projection = projection();
        let mut session = session();

        session.begin();
        assert_eq!(session.state(), EditState::Editing);
        assert!(session.drag_rim(Point2d::new(2000.0, 0.0), &*projection));
        assert!(session.drag_rim(Point2d::new(3000.0, 0.0), &*projection));

        let polygon = session.commit();
        assert_eq!(session.state(), EditState::Idle);
        assert_relative_eq!(
            session.geometry().radius(&*projection).expect("has rim"),
            3000.0,
            max_relative = 1e-4
        );
        assert_eq!(polygon, session.geometry().polygon().clone());
    }

    #[test]
    fn abandon_rolls_back_to_the_snapshot() {
        let projection = projection();
        let mut session = session();
        let before = session.geometry().clone();

        session.begin();
        assert!(session.drag_rim(Point2d::new(9000.0, 0.0), &*projection));
        assert_ne!(*session.geometry(), before);

        session.abandon();
        assert_eq!(session.state(), EditState::Idle);
        assert_eq!(*session.geometry(), before);
    }

    #[test]
    fn repeated_begin_keeps_the_first_snapshot() {
        let projection = projection();
        let mut session = session();
        let before = session.geometry().clone();

        session.begin();
        assert!(session.drag_rim(Point2d::new(9000.0, 0.0), &*projection));
        session.begin();
        session.abandon();
        assert_eq!(*session.geometry(), before);
    }

    #[test]
    fn center_drag_moves_center_and_keeps_radius() {
        let projection = projection();
        let mut session = session();
        let radius_before = session
            .geometry()
            .radius(&*projection)
            .expect("has rim");

        session.begin();
        let target = Point2d::new(40_000.0, -20_000.0);
        assert!(session.drag_center(target, &*projection));

        assert_eq!(session.geometry().center(), target);
        assert_relative_eq!(
            session.geometry().radius(&*projection).expect("has rim"),
            radius_before,
            max_relative = 1e-6
        );
    }

    #[test]
    fn draw_session_grows_from_the_anchor() {
        let projection = projection();
        let mut draw =
            DrawSession::start(Point2d::new(0.0, 0.0), &*projection).expect("anchor projectable");
        assert_relative_eq!(
            draw.sketch().radius(&*projection).expect("has rim"),
            0.0,
            epsilon = 1e-6
        );

        assert!(draw.update(Point2d::new(1000.0, 0.0), &*projection));
        let session = draw.finish();
        assert_relative_eq!(
            session.geometry().radius(&*projection).expect("has rim"),
            1000.0,
            max_relative = 1e-6
        );
    }
}
