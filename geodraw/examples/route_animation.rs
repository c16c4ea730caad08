//! This example loads a route document and prints the position of a marker
//! animated along it.
//!
//! Run with `cargo run --example route_animation [path-to-route.json]`.

use std::path::Path;

use geodraw::animation::RouteAnimation;
use geodraw::route::load_route_from_file;
use geodraw_types::geo::Crs;
use web_time::Duration;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "geodraw/examples/data/route.json".into());
    let projection = Crs::EPSG3857
        .get_projection()
        .expect("EPSG:3857 is projectable");

    let route =
        load_route_from_file(Path::new(&path), &*projection).expect("failed to load route");
    println!(
        "Loaded route with {} points, {:.0} units long",
        route.points().len(),
        route.length()
    );

    let mut animation = RouteAnimation::new(route, 1000.0);
    animation.start();

    for ms in (0..=2000).step_by(100) {
        let elapsed = Duration::from_millis(ms);
        let position = animation.tick(elapsed).expect("route is not empty");
        println!(
            "t={ms:>4} ms  fraction={:.2}  position=({:.1}, {:.1})",
            animation.fraction_at(elapsed),
            position.x(),
            position.y()
        );
    }
}
