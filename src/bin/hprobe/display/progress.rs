use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

/// Per-file progress over a sweep. Silent when the session is not
/// interactive; safe to tick from the rayon workers.
pub struct FileProgress {
    bar: Option<ProgressBar>,
}

impl FileProgress {
    pub fn new(interactive: bool, total: u64) -> Self {
        if !interactive {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  {bar:40.cyan/blue} {pos}/{len} {msg}")
                .expect("invalid template"),
        );
        Self { bar: Some(bar) }
    }

    pub fn tick(&self, path: &Path) {
        if let Some(bar) = &self.bar {
            if let Some(name) = path.file_name() {
                bar.set_message(name.to_string_lossy().into_owned());
            }
            bar.inc(1);
        }
    }

    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
