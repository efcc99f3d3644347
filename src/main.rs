/* 3rd party libraries */
use clap::Parser;
use log::{error, info, LevelFilter};

/* Custom libraries */
use cli::Args;
use elevator::Elevator;

/* Modules */
mod cli;
mod config;
mod elevator;
mod shared;

/* Main */
fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    // Load the configuration
    let mut config = unwrap_or_exit!(config::load_config(args.config.as_deref()));
    unwrap_or_exit!(args.apply_overrides(&mut config.elevator));

    // Validate the trip before simulating anything
    let request = unwrap_or_exit!(args.to_request(&config.elevator));

    // Run the simulation
    let mut elevator = Elevator::from_config(&config.elevator);
    let result = elevator.simulate_route(request.start, &request.floors, request.optimize);

    if args.json {
        println!("{}", unwrap_or_exit!(result.to_json()));
    } else {
        println!("{}", result);
    }
    info!("Elevator simulation completed at floor {}", elevator.current_floor());
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}
