/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::Parser;
use log::debug;
use std::path::PathBuf;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::shared::{SimError, TripRequest};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Parser, Debug)]
#[clap(
    name = "elevator-sim",
    version,
    about = "Simulates an elevator trip and reports the total travel time"
)]
pub struct Args {
    /// Start floor
    #[clap(short, long, value_name = "FLOOR", default_value = "1", overrides_with = "start")]
    pub start: String,

    /// Floors to stop at (comma-separated, no spaces)
    #[clap(short = 'f', long = "floor", value_name = "FLOORS", value_delimiter = ',')]
    pub floors: Vec<String>,

    /// Allow floors to be visited out of order to reduce transit time
    #[clap(short, long, alias = "optimal", overrides_with = "optimize")]
    pub optimize: bool,

    /// Time to pass a single floor, overrides the config file
    #[clap(short = 't', long, value_name = "TIME")]
    pub travel_time: Option<u32>,

    /// Path to a TOML config file
    #[clap(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[clap(long)]
    pub json: bool,

    /// Enable debug logging
    #[clap(short, long)]
    pub verbose: bool,
}

/***************************************/
/*             Public API              */
/***************************************/
impl Args {
    /// Checks the raw flag values against the configured floor range.
    pub fn to_request(&self, config: &ElevatorConfig) -> Result<TripRequest, SimError> {
        let (min, max) = (config.min_floor, config.max_floor);

        let start = parse_floor(&self.start)?;
        if !(min..=max).contains(&start) {
            return Err(SimError::StartOutOfRange { min, max });
        }

        let floors = self
            .floors
            .iter()
            .map(|raw| {
                let floor = parse_floor(raw)?;
                if (min..=max).contains(&floor) {
                    Ok(floor)
                } else {
                    Err(SimError::FloorOutOfRange { min, max })
                }
            })
            .collect::<Result<Vec<i32>, SimError>>()?;

        debug!("Validated trip: start {}, floors {:?}", start, floors);
        Ok(TripRequest {
            start,
            floors,
            optimize: self.optimize,
        })
    }

    /// Applies the command-line overrides on top of the loaded elevator config.
    pub fn apply_overrides(&self, config: &mut ElevatorConfig) -> Result<(), SimError> {
        if let Some(travel_time) = self.travel_time {
            if travel_time == 0 {
                return Err(SimError::InvalidTravelTime);
            }
            config.floor_travel_time = travel_time;
        }
        Ok(())
    }
}

/***************************************/
/*           Local functions           */
/***************************************/
fn parse_floor(raw: &str) -> Result<i32, SimError> {
    raw.trim_start_matches('=')
        .parse::<i32>()
        .map_err(|_| SimError::MalformedFloor(raw.to_string()))
}
