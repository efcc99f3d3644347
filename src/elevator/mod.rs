pub mod route;
pub mod route_tests;
pub mod simulator;

pub use route::map_shortest_route;
pub use simulator::Elevator;
