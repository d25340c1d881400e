/// Result of one device task. The aggregator only inspects the tag; the
/// failure reason is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Success { device: String, output: String },
    Failure { device: String, reason: FailureReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The device never answered within the transport's deadline.
    ConnectTimeout,
    /// The device rejected the supplied credentials.
    AuthFailure,
    /// The device prompt contained the login name; identity cannot be
    /// resolved for such device families.
    AmbiguousPrompt,
    /// The session completed but the post-submission status check came back
    /// negative.
    Unverified,
}

impl TaskOutcome {
    pub fn success(device: impl Into<String>, output: impl Into<String>) -> Self {
        TaskOutcome::Success {
            device: device.into(),
            output: output.into(),
        }
    }

    pub fn failure(device: impl Into<String>, reason: FailureReason) -> Self {
        TaskOutcome::Failure {
            device: device.into(),
            reason,
        }
    }

    pub fn device(&self) -> &str {
        match self {
            TaskOutcome::Success { device, .. } => device,
            TaskOutcome::Failure { device, .. } => device,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Success { .. })
    }
}
