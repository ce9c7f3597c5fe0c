//! CLI command implementations
//!
//! This module contains implementations of the subcommands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod simplify_command;
pub mod distance_command;
pub mod project_command;
pub mod region_command;

pub use command_traits::{Command, CommandFactory};
pub use simplify_command::SimplifyCommand;
pub use distance_command::DistanceCommand;
pub use project_command::ProjectCommand;
pub use region_command::RegionCommand;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::api::GeoPath;
use crate::errors::{GeoError, GeoResult};

/// Build the clap definition for the `geopath` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geopath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Great-circle geometry, region queries and GPS track simplification")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file overriding the built-in defaults")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            ClapCommand::new("simplify")
                .about("Simplify track files with Douglas-Peucker")
                .arg(
                    Arg::new("input")
                        .help("Track files with one 'lat,lon' pair per line")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(
                    Arg::new("tolerance")
                        .short('t')
                        .long("tolerance")
                        .help("Tolerance in meters (default from configuration)")
                        .value_name("METERS")
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("output-dir")
                        .short('o')
                        .long("output-dir")
                        .help("Directory for simplified files (default: next to each input)")
                        .value_name("DIR"),
                ),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Great-circle distance and initial bearing between two points")
                .arg(coordinate_arg("from", "Start coordinate").required(true))
                .arg(coordinate_arg("to", "End coordinate").required(true)),
        )
        .subcommand(
            ClapCommand::new("project")
                .about("Destination reached from a point at a distance and bearing")
                .arg(coordinate_arg("from", "Start coordinate").required(true))
                .arg(
                    Arg::new("distance")
                        .long("distance")
                        .help("Distance in meters")
                        .value_name("METERS")
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true)
                        .required(true),
                )
                .arg(
                    Arg::new("bearing")
                        .long("bearing")
                        .help("Initial bearing in degrees clockwise from north")
                        .value_name("DEGREES")
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true)
                        .required(true),
                ),
        )
        .subcommand(
            ClapCommand::new("region")
                .about("Approximate bounding box around a point")
                .arg(coordinate_arg("center", "Center coordinate").required(true))
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .help("Radius in meters (default from configuration)")
                        .value_name("METERS")
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true),
                )
                .arg(coordinate_arg("point", "Test whether this coordinate lies inside")),
        )
        .subcommand(
            ClapCommand::new("bounds")
                .about("Validate a query box and optionally test a point against it")
                .arg(
                    Arg::new("bounds")
                        .long("bounds")
                        .help("Query box as 'north,south,east,west'")
                        .value_name("N,S,E,W")
                        .allow_hyphen_values(true)
                        .required(true),
                )
                .arg(coordinate_arg("point", "Test whether this coordinate lies inside")),
        )
}

/// A `--name LAT,LON` option
fn coordinate_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("LAT,LON")
        .allow_hyphen_values(true)
}

/// Fetch a required string argument
pub(crate) fn required_arg<'m>(args: &'m ArgMatches, name: &str) -> GeoResult<&'m str> {
    args.get_one::<String>(name)
        .map(|s| s.as_str())
        .ok_or_else(|| GeoError::GenericError(format!("Missing --{}", name)))
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the selected subcommand and creates
/// the appropriate command instance for execution.
pub struct GeopathCommandFactory;

impl GeopathCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeopathCommandFactory
    }
}

impl Default for GeopathCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeopathCommandFactory {
    fn create_command(&self, args: &ArgMatches, api: &'a GeoPath) -> GeoResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("simplify", sub)) => Ok(Box::new(SimplifyCommand::new(sub, api)?)),
            Some(("distance", sub)) => Ok(Box::new(DistanceCommand::new(sub, api)?)),
            Some(("project", sub)) => Ok(Box::new(ProjectCommand::new(sub, api)?)),
            Some(("region", sub)) => Ok(Box::new(RegionCommand::around(sub, api)?)),
            Some(("bounds", sub)) => Ok(Box::new(RegionCommand::bounds(sub, api)?)),
            Some((other, _)) => Err(GeoError::GenericError(format!("Unknown command: {}", other))),
            None => Err(GeoError::GenericError("No command given".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_name(argv: &[&str]) -> GeoResult<&'static str> {
        let api = GeoPath::with_defaults();
        let matches = build_cli().try_get_matches_from(argv).unwrap();
        let command = GeopathCommandFactory::new().create_command(&matches, &api)?;
        Ok(command.name())
    }

    #[test]
    fn test_factory_dispatches_by_subcommand() {
        assert_eq!(command_name(&["geopath", "simplify", "a.csv", "b.csv"]).unwrap(), "simplify");
        assert_eq!(command_name(&["geopath", "distance", "--from", "0,0", "--to", "1,1"]).unwrap(), "distance");
        assert_eq!(
            command_name(&["geopath", "project", "--from", "0,0", "--distance", "100", "--bearing", "90"]).unwrap(),
            "project");
        assert_eq!(command_name(&["geopath", "region", "--center", "-33.9,151.2"]).unwrap(), "region");
        assert_eq!(command_name(&["geopath", "bounds", "--bounds", "1,0,1,0"]).unwrap(), "bounds");
    }

    #[test]
    fn test_malformed_coordinate_fails_at_construction() {
        let result = command_name(&["geopath", "distance", "--from", "zero", "--to", "1,1"]);
        assert!(matches!(result, Err(GeoError::ParseError(_))));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["geopath", "region", "--center", "0,0", "--verbose", "--config", "x.toml"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        assert_eq!(matches.get_one::<String>("config").map(String::as_str), Some("x.toml"));
    }

    #[test]
    fn test_simplify_output_path() {
        let api = GeoPath::with_defaults();
        let matches = build_cli()
            .try_get_matches_from(["geopath", "simplify", "data/run.csv", "-o", "out"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let command = SimplifyCommand::new(sub, &api).unwrap();
        assert_eq!(command.output_path_for("data/run.csv"), std::path::PathBuf::from("out/run.simplified.csv"));

        let matches = build_cli().try_get_matches_from(["geopath", "simplify", "data/run.csv"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let command = SimplifyCommand::new(sub, &api).unwrap();
        assert_eq!(command.output_path_for("data/run.csv"), std::path::PathBuf::from("data/run.simplified.csv"));
    }

    #[test]
    fn test_region_resolves_with_default_radius() {
        let api = GeoPath::with_defaults();
        let matches = build_cli().try_get_matches_from(["geopath", "region", "--center", "0,0"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let bbox = RegionCommand::around(sub, &api).unwrap().resolve().unwrap();
        assert!((bbox.north - 500.0 / 111_000.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_enforces_span_limit() {
        let api = GeoPath::with_defaults();
        let matches = build_cli()
            .try_get_matches_from(["geopath", "bounds", "--bounds", "3,0,1,0"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let result = RegionCommand::bounds(sub, &api).unwrap().resolve();
        assert!(matches!(result, Err(GeoError::InvalidBoundingBox(_))));
    }
}
