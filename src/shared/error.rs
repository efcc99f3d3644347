/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*             Constants               */
/***************************************/
pub const EXIT_INPUT_ERROR: i32 = 2;
pub const EXIT_CONFIG_ERROR: i32 = 1;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("Input Error: Start floor must be between {min} and {max}")]
    StartOutOfRange { min: i32, max: i32 },
    #[error("Input Error: Destination floors must be between {min} and {max}")]
    FloorOutOfRange { min: i32, max: i32 },
    #[error("Input Error: '{0}' is not a valid floor number")]
    MalformedFloor(String),
    #[error("Input Error: Travel time must be a positive number")]
    InvalidTravelTime,
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Output Error: {0}")]
    Output(String),
}

impl SimError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SimError::Config(_) | SimError::Output(_) => EXIT_CONFIG_ERROR,
            _ => EXIT_INPUT_ERROR,
        }
    }
}
