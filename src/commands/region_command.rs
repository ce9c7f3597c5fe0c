//! Region commands: a box around a point, or a caller-supplied query box

use clap::ArgMatches;
use log::info;

use crate::api::GeoPath;
use crate::commands::command_traits::Command;
use crate::commands::required_arg;
use crate::coordinate::BoundingBox;
use crate::errors::GeoResult;
use crate::utils::coordinate_utils::parse_pair;

/// How the box is obtained
enum RegionSource {
    /// Approximate box of a radius around a center point
    Around { center: (f64, f64), radius_m: Option<f64> },
    /// Explicit north,south,east,west bounds checked against the span limit
    Bounds(BoundingBox),
}

/// Command for computing a region and optionally testing a point against it
pub struct RegionCommand<'a> {
    source: RegionSource,
    point: Option<(f64, f64)>,
    api: &'a GeoPath,
}

impl<'a> RegionCommand<'a> {
    /// Create from `region` subcommand matches
    pub fn around(args: &ArgMatches, api: &'a GeoPath) -> GeoResult<Self> {
        Ok(RegionCommand {
            source: RegionSource::Around {
                center: parse_pair(required_arg(args, "center")?)?,
                radius_m: args.get_one::<f64>("radius").copied(),
            },
            point: Self::optional_point(args)?,
            api,
        })
    }

    /// Create from `bounds` subcommand matches
    pub fn bounds(args: &ArgMatches, api: &'a GeoPath) -> GeoResult<Self> {
        Ok(RegionCommand {
            source: RegionSource::Bounds(BoundingBox::from_string(required_arg(args, "bounds")?)?),
            point: Self::optional_point(args)?,
            api,
        })
    }

    fn optional_point(args: &ArgMatches) -> GeoResult<Option<(f64, f64)>> {
        args.get_one::<String>("point")
            .map(|p| parse_pair(p))
            .transpose()
    }

    /// Resolve the box this command describes
    pub fn resolve(&self) -> GeoResult<BoundingBox> {
        match &self.source {
            RegionSource::Around { center, radius_m } => self.api.region(*center, *radius_m),
            RegionSource::Bounds(b) => self.api.query_bounds(b.north, b.south, b.east, b.west),
        }
    }
}

impl<'a> Command for RegionCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let bbox = self.resolve()?;
        println!("Bounding box: {}", bbox);

        if let Some(point) = self.point {
            let inside = self.api.contains(&bbox, point)?;
            info!("Point {:?} inside {}: {}", point, bbox, inside);
            println!("Point {},{} inside: {}", point.0, point.1, inside);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        match self.source {
            RegionSource::Around { .. } => "region",
            RegionSource::Bounds(_) => "bounds",
        }
    }
}
