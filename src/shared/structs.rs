/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::SimError;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A validated trip: where the car starts and the floors it must stop at.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub start: i32,
    pub floors: Vec<i32>,
    pub optimize: bool,
}

/// Outcome of one simulated trip.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub total_time: u64,
    pub visited_order: Vec<i32>,
}

impl SimulationResult {
    pub fn new(total_time: u64, visited_order: Vec<i32>) -> SimulationResult {
        SimulationResult {
            total_time,
            visited_order,
        }
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string(self).map_err(|e| SimError::Output(e.to_string()))
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Trip time: {}, Floors visited in order: {:?}",
            self.total_time, self.visited_order
        )
    }
}
