//! Progress reporting for the conversion flow

use colored::Colorize;
use examforge_application::ports::progress::ConversionProgress;
use examforge_domain::Model;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while a conversion request is in flight
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Remove the spinner line, if one is active
    fn clear(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// A conversion that fails mid-flight drops the reporter with the spinner
/// still active; clear it so the error message prints on a clean line.
impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionProgress for SpinnerProgress {
    fn on_prompt_built(&self, estimated_tokens: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Prompt ready (~{} tokens)", estimated_tokens));
        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_request_started(&self, model: &Model) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            pb.set_message(format!("Waiting for {}...", model));
        }
    }

    fn on_response_received(&self, bytes: usize) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            pb.set_message(format!("Validating reply ({} bytes)...", bytes));
        }
    }

    fn on_records_validated(&self, count: usize) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_and_clear();
        }
        println!(
            "{} {} record{} validated",
            "v".green(),
            count,
            if count == 1 { "" } else { "s" }
        );
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl ConversionProgress for SimpleProgress {
    fn on_prompt_built(&self, estimated_tokens: usize) {
        println!("{} Prompt ready (~{} tokens)", "->".cyan(), estimated_tokens);
    }

    fn on_request_started(&self, model: &Model) {
        println!("{} Querying {}...", "->".cyan(), model);
    }

    fn on_response_received(&self, bytes: usize) {
        println!("{} Received {} bytes", "->".cyan(), bytes);
    }

    fn on_records_validated(&self, count: usize) {
        println!("{} {} record(s) validated", "v".green(), count);
    }
}
