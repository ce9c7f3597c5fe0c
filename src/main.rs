use std::process;
use log::{debug, error, LevelFilter};

use geopath::commands::{build_cli, Command, CommandFactory, GeopathCommandFactory};
use geopath::utils::logger::Logger;
use geopath::{Config, GeoPath};

fn main() {
    let matches = build_cli().get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading configuration '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => Config::defaults(),
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        config.log_level
    };

    match &config.log_file {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .format_timestamp(None)
                .init();
        }
    }

    let api = match GeoPath::new(config) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let factory = GeopathCommandFactory::new();

    match factory.create_command(&matches, &api) {
        Ok(command) => {
            debug!("Running {} command", command.name());
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
