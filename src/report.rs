use crate::executor::outcome::TaskOutcome;
use crate::ui;
use std::collections::BTreeSet;

const LABEL: &str = "able to get switch info!";

/// Partition of the input device list into succeeded and failed sets, built
/// once per run from the pool's collected outcomes.
#[derive(Debug, PartialEq, Eq)]
pub struct RunReport {
    total: usize,
    succeeded: BTreeSet<String>,
    failed: BTreeSet<String>,
}

impl RunReport {
    /// Classifies outcomes against the original input list. The failed set is
    /// a set difference against the input, not the outcome list: a device
    /// that produced no outcome at all still counts as failed.
    pub fn classify(input: &[String], outcomes: &[TaskOutcome]) -> Self {
        let succeeded: BTreeSet<String> = outcomes
            .iter()
            .filter(|o| o.is_success())
            .map(|o| o.device().to_string())
            .collect();

        let failed: BTreeSet<String> = input
            .iter()
            .filter(|device| !succeeded.contains(*device))
            .cloned()
            .collect();

        RunReport {
            total: input.len(),
            succeeded,
            failed,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn succeeded(&self) -> &BTreeSet<String> {
        &self.succeeded
    }

    pub fn failed(&self) -> &BTreeSet<String> {
        &self.failed
    }

    pub fn is_full_success(&self) -> bool {
        !self.succeeded.is_empty() && self.succeeded.len() == self.total
    }

    pub fn full_success_message(&self) -> String {
        format!("All {} hosts {LABEL}", self.total)
    }

    pub fn partial_message(&self) -> String {
        format!("only {}/{} switches {LABEL}:", self.succeeded.len(), self.total)
    }

    pub fn unreachable_message(&self) -> String {
        format!(
            "{}/{} switches unable to connect",
            self.failed.len(),
            self.total
        )
    }

    pub fn no_success_message(&self) -> String {
        format!("No host {LABEL}")
    }

    /// Renders the summary. The raw outcome list is dumped only on full
    /// success, matching the one case where there is nothing else to say.
    pub fn render(&self, outcomes: &[TaskOutcome]) {
        if self.succeeded.is_empty() {
            ui::error(&self.no_success_message());
            return;
        }

        if self.is_full_success() {
            ui::ok(&self.full_success_message());
            println!("{outcomes:?}");
            println!();
        } else {
            ui::warn(&self.partial_message());
            for device in &self.succeeded {
                println!("{device}");
            }
            ui::warn(&self.unreachable_message());
            for device in &self.failed {
                println!("{device}");
            }
        }
    }
}
