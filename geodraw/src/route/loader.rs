//! Loading of route documents from a routing service.

use geodraw_types::geo::{GeoPoint2d, Projection};
use geodraw_types::Point2d;
use serde::Deserialize;

use super::Route;
use crate::error::GeodrawError;

/// Route document returned by a routing service.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    /// Route alternatives, best one first.
    pub routes: Vec<RouteGeometry>,
}

/// One route alternative of a [`RouteResponse`].
#[derive(Debug, Clone, Deserialize)]
pub struct RouteGeometry {
    /// Geometry of the route as an encoded polyline.
    pub geometry: String,
}

/// Parses a route document and projects its best route into display space.
///
/// The document has the shape `{"routes": [{"geometry": "<encoded
/// polyline>"}]}`. A document without routes is a [`GeodrawError::NotFound`]
/// error.
pub fn route_from_json<Proj>(json: &str, projection: &Proj) -> Result<Route, GeodrawError>
where
    Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
{
    let response: RouteResponse = serde_json::from_str(json)?;
    let best = response.routes.first().ok_or(GeodrawError::NotFound)?;
    Route::from_encoded_polyline(&best.geometry, projection)
}

/// Fetches a route document from `url` and projects its best route into
/// display space.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_route<Proj>(url: &str, projection: &Proj) -> Result<Route, GeodrawError>
where
    Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
{
    let response = reqwest::get(url).await?.error_for_status()?;
    let json = response.text().await?;
    route_from_json(&json, projection)
}

/// Reads a route document from a file and projects its best route into
/// display space.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_route_from_file<Proj>(
    path: &std::path::Path,
    projection: &Proj,
) -> Result<Route, GeodrawError>
where
    Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
{
    let json = std::fs::read_to_string(path)?;
    route_from_json(&json, projection)
}

/// Same as [`load_route`], but logs a failure and returns `None` instead of
/// an error.
///
/// Callers that have no way to surface the error (the animation feature
/// simply stays inert without a route) should still leave a trace in the
/// logs.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_route_or_log<Proj>(url: &str, projection: &Proj) -> Option<Route>
where
    Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
{
    match load_route(url, projection).await {
        Ok(route) => Some(route),
        Err(error) => {
            log::error!("Failed to load route from {url}: {error}");
            None
        }
    }
}
