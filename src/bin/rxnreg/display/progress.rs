use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Numbered step reporting on stderr; a no-op when not interactive.
pub struct Progress {
    enabled: bool,
    spinner: Option<ProgressBar>,
    started: Instant,
    step_started: Instant,
    step: u8,
    total_steps: u8,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        let now = Instant::now();
        Self {
            enabled: interactive,
            spinner: None,
            started: now,
            step_started: now,
            step: 0,
            total_steps,
        }
    }

    pub fn step(&mut self, description: &str) {
        self.step += 1;
        self.step_started = Instant::now();
        if !self.enabled {
            return;
        }
        self.clear();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message(self.label(description));
        self.spinner = Some(spinner);
    }

    pub fn complete_step(&mut self, description: &str, substeps: &[&str]) {
        if !self.enabled {
            return;
        }
        self.clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            description,
            self.step_started.elapsed().as_secs_f64()
        );
        for substep in substeps {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {substep}");
        }
    }

    pub fn finish(mut self) {
        if !self.enabled {
            return;
        }
        self.clear();

        let total = format!("Total: {:.2}s", self.started.elapsed().as_secs_f64());
        let _ = writeln!(io::stderr().lock(), "\n  \x1b[32m✓\x1b[0m Done {total:>45}\n");
    }

    fn label(&self, description: &str) -> String {
        format!("[{}/{}] {}...", self.step, self.total_steps, description)
    }

    fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
