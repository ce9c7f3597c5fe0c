//! Distance and bearing between two coordinates

use clap::ArgMatches;
use log::info;

use crate::api::GeoPath;
use crate::commands::command_traits::Command;
use crate::commands::required_arg;
use crate::errors::GeoResult;
use crate::utils::coordinate_utils::{format_distance, parse_pair};

/// Command for measuring the great-circle distance and initial bearing
pub struct DistanceCommand<'a> {
    from: (f64, f64),
    to: (f64, f64),
    api: &'a GeoPath,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command from `distance` subcommand matches
    pub fn new(args: &ArgMatches, api: &'a GeoPath) -> GeoResult<Self> {
        Ok(DistanceCommand {
            from: parse_pair(required_arg(args, "from")?)?,
            to: parse_pair(required_arg(args, "to")?)?,
            api,
        })
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let meters = self.api.distance(self.from, self.to)?;
        let heading = self.api.bearing(self.from, self.to)?;
        info!("Distance from {:?} to {:?}: {} m, bearing {}°", self.from, self.to, meters, heading);

        println!("Distance: {} ({:.3} m)", format_distance(meters), meters);
        println!("Initial bearing: {:.4}°", heading);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "distance"
    }
}
