//! Terminal progress for cookbook downloads.

use std::sync::Mutex;

use chefkit_core::{CookbookEvent, CookbookEventEmitter};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const BAR_TEMPLATE: &str = "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} files {msg}";

/// Prints pipeline progress to the terminal.
///
/// Headings go to stdout; the file counter is an indicatif bar on stderr.
/// Completion is left to the caller, which knows the final path.
pub struct ConsoleEmitter {
    bar: Mutex<Option<ProgressBar>>,
    draw_target: fn() -> ProgressDrawTarget,
}

impl ConsoleEmitter {
    /// Emitter drawing its progress bar on stderr.
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            draw_target: ProgressDrawTarget::stderr,
        }
    }

    /// Emitter whose progress bar is never drawn.
    pub fn hidden() -> Self {
        Self {
            bar: Mutex::new(None),
            draw_target: ProgressDrawTarget::hidden,
        }
    }

    /// Files counted so far, if a download has started.
    pub fn files_done(&self) -> Option<u64> {
        self.bar
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(ProgressBar::position))
    }

    fn create_bar(&self, total: usize) -> ProgressBar {
        let bar = ProgressBar::with_draw_target(Some(total as u64), (self.draw_target)());
        bar.set_style(
            ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        bar
    }

    fn println(&self, line: &str) {
        match self.bar.lock().ok().as_deref().and_then(Option::as_ref) {
            Some(bar) if !bar.is_hidden() => bar.println(line),
            _ => println!("{line}"),
        }
    }
}

impl Default for ConsoleEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CookbookEventEmitter for ConsoleEmitter {
    fn emit(&self, event: CookbookEvent) {
        match event {
            CookbookEvent::DownloadStarted {
                cookbook_name,
                version,
                total_files,
            } => {
                println!("Downloading {cookbook_name} cookbook version {version}");
                let bar = self.create_bar(total_files);
                if let Ok(mut guard) = self.bar.lock() {
                    *guard = Some(bar);
                }
            }
            CookbookEvent::CategoryStarted { category } => {
                self.println(&format!("Downloading {category}"));
            }
            CookbookEvent::FileDownloaded { path, .. } => {
                if let Ok(guard) = self.bar.lock() {
                    if let Some(bar) = guard.as_ref() {
                        if let Some(name) = path.file_name() {
                            bar.set_message(name.to_string_lossy().into_owned());
                        }
                        bar.inc(1);
                    }
                }
            }
            CookbookEvent::DownloadCompleted { .. } => {
                if let Ok(guard) = self.bar.lock() {
                    if let Some(bar) = guard.as_ref() {
                        bar.finish_and_clear();
                    }
                }
            }
            CookbookEvent::DownloadFailed { .. } => {
                if let Ok(guard) = self.bar.lock() {
                    if let Some(bar) = guard.as_ref() {
                        bar.abandon();
                    }
                }
            }
        }
    }
}
