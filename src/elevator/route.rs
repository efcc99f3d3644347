/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Reorders the destination floors to cut down on travel.
 *
 * The floors are sorted ascending. When every destination lies at or above `start`
 * the ascending order never backtracks, and when every destination lies at or below
 * `start` the descending order never backtracks.
 *
 * When `start` lies strictly between the lowest and highest destination the
 * ascending order is returned unchanged. That route is not necessarily the shortest.
 */
pub fn map_shortest_route(start: i32, floors: &[i32]) -> Vec<i32> {
    let mut route = floors.to_vec();
    if route.is_empty() {
        return route;
    }

    route.sort_unstable();
    let lowest = route[0];
    let highest = route[route.len() - 1];

    if start <= lowest {
        debug!("Start {} at or below all destinations, sweeping up", start);
        return route;
    }
    if start >= highest {
        debug!("Start {} at or above all destinations, sweeping down", start);
        route.reverse();
        return route;
    }

    // TODO: pick the nearer extreme first and sweep back through the rest
    debug!(
        "Start {} lies between {} and {}, keeping ascending order",
        start, lowest, highest
    );
    route
}
