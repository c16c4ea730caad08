//! Marker animation along a route.
//!
//! The animation is a scheduled-tick abstraction: the host render loop calls
//! [`RouteAnimation::tick`] with the elapsed time and places the marker at
//! the returned position. All the interpolation logic depends on elapsed
//! time alone, so it runs (and tests) without any display surface.

use geodraw_types::Point2d;
use web_time::{Duration, Instant};

use crate::route::Route;

/// Moves a marker back and forth along a route.
///
/// The travelled distance grows linearly with elapsed time, scaled by the
/// speed setting, and is folded into `[0, 1]` with a ping-pong rule so the
/// marker bounces between the route ends instead of jumping back to the
/// start.
#[derive(Debug, Clone)]
pub struct RouteAnimation {
    route: Route,
    speed: f64,
    started_at: Option<Instant>,
}

impl RouteAnimation {
    /// Creates a stopped animation over `route`.
    ///
    /// `speed` is the unitless speed factor: a marker with speed 1000
    /// traverses the whole route in one second.
    pub fn new(route: Route, speed: f64) -> Self {
        Self {
            route,
            speed,
            started_at: None,
        }
    }

    /// The route the marker moves along.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Current speed factor.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Changes the speed factor.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Whether the animation is running.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Starts the animation. Does nothing if it is already running.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Stops the animation, returning the marker to the route start.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Fraction of the route covered after `elapsed` running time.
    ///
    /// The raw travelled distance `speed · elapsed_ms / 10⁶` is wrapped
    /// modulo 2 and ping-pong mapped into `[0, 1]`: values above 1 run the
    /// route backwards.
    pub fn fraction_at(&self, elapsed: Duration) -> f64 {
        let distance = (self.speed * elapsed.as_millis() as f64) / 1e6 % 2.0;
        if distance > 1.0 {
            2.0 - distance
        } else {
            distance
        }
    }

    /// Marker position after `elapsed` running time.
    ///
    /// While the animation is stopped this is the rest position (the route
    /// start). Returns `None` for an empty route.
    pub fn tick(&self, elapsed: Duration) -> Option<Point2d> {
        if self.started_at.is_none() {
            return self.route.position_at(0.0);
        }
        self.route.position_at(self.fraction_at(elapsed))
    }

    /// Marker position right now, measured from the wall clock time
    /// [`RouteAnimation::start`] was called at.
    pub fn position(&self) -> Option<Point2d> {
        match self.started_at {
            Some(started_at) => self.route.position_at(self.fraction_at(started_at.elapsed())),
            None => self.route.position_at(0.0),
        }
    }
}
