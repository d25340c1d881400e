use crate::device::Credentials;
use crate::executor::outcome::{FailureReason, TaskOutcome};
use crate::session::{Connector, SessionError};
use crate::ui;
use log::debug;

/// Runs the full command sequence against one device and collapses every
/// per-device failure mode into a `Failure` outcome. Only errors that are not
/// attributable to the device itself propagate as `Err`.
pub async fn run_device(
    connector: &dyn Connector,
    device: &str,
    credentials: &Credentials,
    commands: &[String],
    port: u16,
) -> Result<TaskOutcome, SessionError> {
    debug!("running {} command(s) on {}", commands.len(), device);

    let mut session = match connector.open(device, credentials, port).await {
        Ok(session) => session,
        Err(e) => return soften(device, e),
    };

    // Some device families use the login name as part of their own prompt;
    // those cannot be told apart from a renamed device, so skip outright.
    if session.prompt().contains(&credentials.username) {
        debug!("{}: prompt echoes the username, skipping", device);
        let _ = session.close().await;
        return Ok(TaskOutcome::failure(device, FailureReason::AmbiguousPrompt));
    }

    let driven = async {
        session.elevate().await?;
        let output = session.apply_config(commands).await?;
        let verified = session.verify().await?;
        Ok::<_, SessionError>((output, verified))
    }
    .await;

    let closed = session.close().await;

    let (output, verified) = match driven {
        Ok(pair) => pair,
        Err(e) => return soften(device, e),
    };
    if let Err(e) = closed {
        return soften(device, e);
    }

    if verified {
        ui::title(device);
        println!("{output}");
        Ok(TaskOutcome::success(device, output))
    } else {
        debug!("{}: commands submitted but verification failed", device);
        Ok(TaskOutcome::failure(device, FailureReason::Unverified))
    }
}

/// Connectivity timeouts and authentication failures are soft: the device is
/// excluded from the succeeded set and the run continues.
fn soften(device: &str, err: SessionError) -> Result<TaskOutcome, SessionError> {
    match err {
        SessionError::ConnectTimeout(_) => {
            debug!("{}: {}", device, err);
            Ok(TaskOutcome::failure(device, FailureReason::ConnectTimeout))
        }
        SessionError::AuthFailure(_) => {
            debug!("{}: {}", device, err);
            Ok(TaskOutcome::failure(device, FailureReason::AuthFailure))
        }
        other => Err(other),
    }
}
