pub mod error;
pub mod macros;
pub mod structs;

pub use error::SimError;
pub use structs::SimulationResult;
pub use structs::TripRequest;
