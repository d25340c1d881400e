use crate::device::Credentials;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("timed out connecting to {0}")]
    ConnectTimeout(String),

    #[error("authentication failed for {0}")]
    AuthFailure(String),

    #[error("session error on {device}: {message}")]
    Protocol { device: String, message: String },
}

/// One open administrative session against one device.
///
/// Operations are strictly sequential within a session: the caller checks the
/// prompt, elevates, applies configuration, verifies, then closes.
#[async_trait]
pub trait DeviceSession: Send {
    /// The command prompt reported by the device right after login.
    fn prompt(&self) -> &str;

    /// Canonical device identity as known to the session.
    fn address(&self) -> &str;

    /// Enter privileged mode.
    async fn elevate(&mut self) -> Result<(), SessionError>;

    /// Submit the command set as a configuration operation; returns the
    /// combined device output.
    async fn apply_config(&mut self, commands: &[String]) -> Result<String, SessionError>;

    /// Post-submission status check: did the configuration commands take
    /// effect.
    async fn verify(&mut self) -> Result<bool, SessionError>;

    async fn close(self: Box<Self>) -> Result<(), SessionError>;
}

/// Opens sessions to devices. Implementations own the wire protocol; the
/// execution engine only sees this boundary.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn open(
        &self,
        device: &str,
        credentials: &Credentials,
        port: u16,
    ) -> Result<Box<dyn DeviceSession>, SessionError>;
}
