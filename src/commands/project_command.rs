//! Destination point projection command

use clap::ArgMatches;
use log::info;

use crate::api::GeoPath;
use crate::commands::command_traits::Command;
use crate::commands::required_arg;
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils::parse_pair;

/// Command for solving the direct geodetic problem
pub struct ProjectCommand<'a> {
    from: (f64, f64),
    distance_m: f64,
    bearing_deg: f64,
    api: &'a GeoPath,
}

impl<'a> ProjectCommand<'a> {
    /// Create a new project command from `project` subcommand matches
    pub fn new(args: &ArgMatches, api: &'a GeoPath) -> GeoResult<Self> {
        let distance_m = *args.get_one::<f64>("distance")
            .ok_or_else(|| GeoError::GenericError("Missing --distance".to_string()))?;
        let bearing_deg = *args.get_one::<f64>("bearing")
            .ok_or_else(|| GeoError::GenericError("Missing --bearing".to_string()))?;

        Ok(ProjectCommand {
            from: parse_pair(required_arg(args, "from")?)?,
            distance_m,
            bearing_deg,
            api,
        })
    }
}

impl<'a> Command for ProjectCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let dest = self.api.destination(self.from, self.distance_m, self.bearing_deg)?;
        info!("Projected {:?} by {} m at {}°", self.from, self.distance_m, self.bearing_deg);

        println!("Destination: {}", dest);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "project"
    }
}
