//! Track simplification command
//!
//! Reads one or more track files, simplifies each with Douglas-Peucker,
//! and writes `<stem>.simplified.csv` next to the input or into an
//! output directory.

use std::path::{Path as FsPath, PathBuf};
use clap::ArgMatches;
use log::{debug, info};

use crate::api::GeoPath;
use crate::commands::command_traits::Command;
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils::format_distance;
use crate::utils::progress::ProgressTracker;
use crate::utils::track_utils::{read_track, write_track};

/// Command for simplifying track files
pub struct SimplifyCommand<'a> {
    /// Paths to the input track files
    inputs: Vec<String>,
    /// Tolerance in meters; configured default when absent
    tolerance_m: Option<f64>,
    /// Directory for output files; next to each input when absent
    output_dir: Option<String>,
    /// Library facade
    api: &'a GeoPath,
}

impl<'a> SimplifyCommand<'a> {
    /// Create a new simplify command from `simplify` subcommand matches
    pub fn new(args: &ArgMatches, api: &'a GeoPath) -> GeoResult<Self> {
        let inputs: Vec<String> = args.get_many::<String>("input")
            .ok_or_else(|| GeoError::GenericError("Missing input file".to_string()))?
            .cloned()
            .collect();

        Ok(SimplifyCommand {
            inputs,
            tolerance_m: args.get_one::<f64>("tolerance").copied(),
            output_dir: args.get_one::<String>("output-dir").cloned(),
            api,
        })
    }

    /// Where the simplified version of `input` is written
    pub fn output_path_for(&self, input: &str) -> PathBuf {
        let input_path = FsPath::new(input);
        let stem = input_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "track".to_string());
        let file_name = format!("{}.simplified.csv", stem);

        match &self.output_dir {
            Some(dir) => FsPath::new(dir).join(file_name),
            None => input_path
                .parent()
                .map(|p| p.join(&file_name))
                .unwrap_or_else(|| PathBuf::from(&file_name)),
        }
    }

    /// Simplify a single file and report the reduction
    fn process_file(&self, input: &str) -> GeoResult<()> {
        let track = read_track(input)?;
        let simplified = self.api.simplify_path(&track, self.tolerance_m)?;
        let output = self.output_path_for(input);
        write_track(&output, &simplified)?;

        info!("{}: {} -> {} points, length {} -> {}",
              input,
              track.len(),
              simplified.len(),
              format_distance(track.length_m()),
              format_distance(simplified.length_m()));
        println!("{} -> {} ({} of {} points kept)",
                 input, output.display(), simplified.len(), track.len());
        Ok(())
    }
}

impl<'a> Command for SimplifyCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let tolerance = self.tolerance_m.unwrap_or(self.api.config().tolerance_m);
        info!("Simplifying {} track file(s) at {} m tolerance", self.inputs.len(), tolerance);

        if let Some(dir) = &self.output_dir {
            std::fs::create_dir_all(dir)?;
            debug!("Writing output to {}", dir);
        }

        let progress = ProgressTracker::for_tracks(self.inputs.len());
        for input in &self.inputs {
            progress.start_track(input);
            self.process_file(input)?;
            progress.track_done();
        }
        progress.finish();

        Ok(())
    }

    fn name(&self) -> &'static str {
        "simplify"
    }
}
