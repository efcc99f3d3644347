/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::config::DEFAULT_MIN_FLOOR;
use crate::elevator::map_shortest_route;
use crate::shared::SimulationResult;

/**
 * Simulates a single elevator car.
 *
 * # Fields
 * - `floor_travel_time`:   Time it takes to pass a single floor.
 * - `current_floor`:       Floor the car is currently stopped at.
 *
 */
#[derive(Debug, Clone)]
pub struct Elevator {
    floor_travel_time: u32,
    current_floor: i32,
}

impl Elevator {
    pub fn new(floor_travel_time: u32) -> Elevator {
        Elevator {
            floor_travel_time,
            current_floor: DEFAULT_MIN_FLOOR,
        }
    }

    /// The car is parked at the lowest configured floor until a trip starts.
    pub fn from_config(config: &ElevatorConfig) -> Elevator {
        Elevator {
            floor_travel_time: config.floor_travel_time,
            current_floor: config.min_floor,
        }
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    /// Moves the car to `destination` and returns the time spent getting there.
    ///
    /// A single move cannot overflow: at most `u32::MAX` floors times a `u32` travel time.
    pub fn move_to(&mut self, destination: i32) -> u64 {
        let floors_passed = self.current_floor.abs_diff(destination) as u64;
        let elapsed = floors_passed * self.floor_travel_time as u64;
        debug!(
            "Moving {} -> {} ({} floors, {} time)",
            self.current_floor, destination, floors_passed, elapsed
        );
        self.current_floor = destination;
        elapsed
    }

    /// Visits `floors` starting from `start`, optionally reordering them first.
    ///
    /// The total saturates at `u64::MAX` instead of wrapping.
    pub fn simulate_route(&mut self, start: i32, floors: &[i32], optimize: bool) -> SimulationResult {
        self.current_floor = start;

        let visit_order = if optimize {
            map_shortest_route(start, floors)
        } else {
            floors.to_vec()
        };

        let total_time = visit_order
            .iter()
            .map(|&destination| self.move_to(destination))
            .fold(0u64, u64::saturating_add);

        info!(
            "Trip from floor {} finished at floor {} after {} time",
            start, self.current_floor, total_time
        );
        SimulationResult::new(total_time, visit_order)
    }
}
