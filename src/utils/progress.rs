use indicatif::{ProgressBar, ProgressStyle};

const TRACK_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} tracks ({eta}) {msg}";

/// Progress bar shown while a batch of track files is simplified
///
/// Batches of a single file get a hidden bar so one-off runs print nothing extra.
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// A tracker for `files` track files, drawn only when there is more than one
    pub fn for_tracks(files: usize) -> Self {
        if files > 1 {
            Self::new(files as u64, "Simplifying tracks")
        } else {
            Self::hidden()
        }
    }

    /// Create a bar for `total` files, labelled with `description`
    pub fn new(total: u64, description: &str) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template(TRACK_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message(description.to_string());

        ProgressTracker { bar }
    }

    /// A tracker that draws nothing
    pub fn hidden() -> Self {
        ProgressTracker { bar: ProgressBar::hidden() }
    }

    /// Show the track file currently being simplified
    pub fn start_track(&self, path: &str) {
        self.bar.set_message(path.to_string());
    }

    /// Count one finished track file
    pub fn track_done(&self) {
        self.bar.inc(1);
    }

    /// Number of track files finished so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Mark the batch complete
    pub fn finish(&self) {
        self.bar.finish_with_message(format!("{} tracks simplified", self.completed()));
    }
}
