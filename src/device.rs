use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Login material shared read-only across every worker for the whole run.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Builds credentials from CLI input, prompting for the password when it
    /// was not supplied on the command line.
    pub fn resolve(username: String, password: Option<String>) -> Result<Self> {
        let password = match password {
            Some(p) => p,
            None => rpassword::prompt_password(" Password: ")
                .context("failed to read password from terminal")?,
        };
        Ok(Credentials { username, password })
    }
}

/// Resolves the device list from CLI input: an inline list, a file with one
/// device per line, or an interactive prompt when neither was given.
pub fn resolve_devices(
    switches: Option<Vec<String>>,
    filename: Option<PathBuf>,
) -> Result<Vec<String>> {
    if let Some(path) = filename {
        return load_device_file(&path);
    }
    if let Some(switches) = switches {
        return Ok(switches);
    }

    print!("Enter switches (separated by , ex: a, b, c): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read device list from terminal")?;
    let devices = parse_device_line(&line);
    if devices.is_empty() {
        bail!("no devices given");
    }
    Ok(devices)
}

/// One device per line; surrounding whitespace is trimmed and blank lines are
/// skipped. Identities are otherwise taken as-is.
pub fn load_device_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("{}: check file name and/or path", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Comma-separated interactive input; spaces are stripped before splitting.
pub fn parse_device_line(line: &str) -> Vec<String> {
    line.trim()
        .replace(' ', "")
        .split(',')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
