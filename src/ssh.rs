use crate::device::Credentials;
use crate::session::{Connector, DeviceSession, SessionError};
use async_trait::async_trait;
use clap::ValueEnum;
use log::debug;
use openssh::{KnownHosts, Session};

/// Platform quirk table: how each supported device family enters privileged
/// mode, wraps configuration commands, and marks a privileged prompt.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceType {
    #[default]
    AristaEos,
    CiscoIos,
    Junos,
}

impl DeviceType {
    /// Command that enters privileged mode, if the platform has one.
    pub fn elevate_command(self) -> Option<&'static str> {
        match self {
            DeviceType::AristaEos | DeviceType::CiscoIos => Some("enable"),
            DeviceType::Junos => None,
        }
    }

    /// Wraps the operator's commands in the platform's configuration-mode
    /// enter/exit sequence.
    pub fn wrap_config(self, commands: &[String]) -> Vec<String> {
        let (enter, exit) = match self {
            DeviceType::AristaEos | DeviceType::CiscoIos => ("configure terminal", "end"),
            DeviceType::Junos => ("configure", "exit configuration-mode"),
        };
        let mut wrapped = Vec::with_capacity(commands.len() + 2);
        wrapped.push(enter.to_string());
        wrapped.extend(commands.iter().cloned());
        wrapped.push(exit.to_string());
        wrapped
    }

    /// Prompt suffix that marks privileged mode.
    pub fn privileged_suffix(self) -> &'static str {
        match self {
            DeviceType::AristaEos | DeviceType::CiscoIos => "#",
            DeviceType::Junos => ">",
        }
    }
}

/// Default session adapter: drives the system ssh binary through `openssh`.
///
/// Authentication follows the operator's ssh configuration and agent;
/// `openssh` has no in-band password channel.
pub struct SshConnector {
    device_type: DeviceType,
}

impl SshConnector {
    pub fn new(device_type: DeviceType) -> Self {
        SshConnector { device_type }
    }
}

#[async_trait]
impl Connector for SshConnector {
    async fn open(
        &self,
        device: &str,
        credentials: &Credentials,
        port: u16,
    ) -> Result<Box<dyn DeviceSession>, SessionError> {
        let destination = format!("ssh://{}@{}:{}", credentials.username, device, port);
        debug!("connecting to {destination}");
        let session = Session::connect_mux(&destination, KnownHosts::Accept)
            .await
            .map_err(|e| classify_error(device, e))?;

        // Network CLIs echo their prompt when handed an empty command line.
        let banner = run_raw(&session, device, "").await?;
        let prompt = last_line(&banner);
        debug!("{device}: prompt is {prompt:?}");

        Ok(Box::new(SshSession {
            device: device.to_string(),
            device_type: self.device_type,
            prompt,
            session,
        }))
    }
}

struct SshSession {
    device: String,
    device_type: DeviceType,
    prompt: String,
    session: Session,
}

#[async_trait]
impl DeviceSession for SshSession {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn address(&self) -> &str {
        &self.device
    }

    async fn elevate(&mut self) -> Result<(), SessionError> {
        if let Some(command) = self.device_type.elevate_command() {
            run_raw(&self.session, &self.device, command).await?;
        }
        Ok(())
    }

    async fn apply_config(&mut self, commands: &[String]) -> Result<String, SessionError> {
        let script = self.device_type.wrap_config(commands).join("\n");
        run_raw(&self.session, &self.device, &script).await
    }

    async fn verify(&mut self) -> Result<bool, SessionError> {
        let banner = run_raw(&self.session, &self.device, "").await?;
        let prompt = last_line(&banner);
        Ok(prompt.ends_with(self.device_type.privileged_suffix()))
    }

    async fn close(self: Box<Self>) -> Result<(), SessionError> {
        let SshSession {
            device, session, ..
        } = *self;
        session.close().await.map_err(|e| classify_error(&device, e))
    }
}

async fn run_raw(session: &Session, device: &str, command: &str) -> Result<String, SessionError> {
    let output = session
        .raw_command(command)
        .output()
        .await
        .map_err(|e| classify_error(device, e))?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn last_line(output: &str) -> String {
    output
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// openssh reports transport failures as opaque errors; the two soft signals
/// the engine cares about are picked out by message.
fn classify_error(device: &str, err: openssh::Error) -> SessionError {
    let text = err.to_string().to_lowercase();
    if text.contains("timed out") || text.contains("timeout") {
        SessionError::ConnectTimeout(device.to_string())
    } else if text.contains("permission denied") || text.contains("authentication") {
        SessionError::AuthFailure(device.to_string())
    } else {
        SessionError::Protocol {
            device: device.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DeviceType::AristaEos, Some("enable"))]
    #[case(DeviceType::CiscoIos, Some("enable"))]
    #[case(DeviceType::Junos, None)]
    fn test_elevate_command(#[case] device_type: DeviceType, #[case] expected: Option<&str>) {
        assert_eq!(device_type.elevate_command(), expected);
    }

    #[test]
    fn test_wrap_config_brackets_commands() {
        let commands = vec!["show version".to_string()];
        let wrapped = DeviceType::AristaEos.wrap_config(&commands);
        assert_eq!(wrapped, vec!["configure terminal", "show version", "end"]);

        let wrapped = DeviceType::Junos.wrap_config(&commands);
        assert_eq!(
            wrapped,
            vec!["configure", "show version", "exit configuration-mode"]
        );
    }

    #[test]
    fn test_last_line_skips_trailing_blanks() {
        assert_eq!(last_line("banner\nsw1#\n\n"), "sw1#");
        assert_eq!(last_line(""), "");
    }
}
