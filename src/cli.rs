use crate::ssh::DeviceType;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "netfan runs commands on switches very fast. Please use with care.",
    long_about = None,
    after_help = "Defaults:\n       device_type = arista-eos\n       port = 22\n       command = show version"
)]
pub struct Cli {
    /// device platform: arista-eos, cisco-ios, junos
    #[arg(short, long, value_enum, default_value_t = DeviceType::AristaEos)]
    pub device_type: DeviceType,

    /// provide username for switch
    #[arg(short, long)]
    pub username: String,

    /// provide password for switch; prompted for when omitted
    #[arg(short, long)]
    pub password: Option<String>,

    /// switches you want to run commands on, separated by spaces
    #[arg(short, long, num_args = 1..)]
    pub switches: Option<Vec<String>>,

    /// filename with switches in a single column
    #[arg(short, long, value_name = "FILE")]
    pub filename: Option<PathBuf>,

    /// commands applied, in order, within one session
    #[arg(short, long, num_args = 1.., default_values_t = vec![String::from("show version")])]
    pub commands: Vec<String>,

    /// ssh port on the devices
    #[arg(short = 'P', long, default_value_t = 22)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["netfan", "-u", "admin"]);
        assert_eq!(cli.device_type, DeviceType::AristaEos);
        assert_eq!(cli.commands, vec!["show version"]);
        assert_eq!(cli.port, 22);
        assert!(cli.password.is_none());
        assert!(cli.switches.is_none());
    }

    #[test]
    fn test_inline_switch_list() {
        let cli = Cli::parse_from(["netfan", "-u", "admin", "-s", "sw1", "sw2", "sw3"]);
        assert_eq!(
            cli.switches.as_deref(),
            Some(["sw1", "sw2", "sw3"].map(String::from).as_slice())
        );
    }

    #[test]
    fn test_username_is_required() {
        assert!(Cli::try_parse_from(["netfan", "-s", "sw1"]).is_err());
    }

    #[test]
    fn test_custom_command_set() {
        let cli = Cli::parse_from([
            "netfan",
            "-u",
            "admin",
            "-c",
            "ntp server clock.example.com prefer",
            "write memory",
        ]);
        assert_eq!(cli.commands.len(), 2);
    }
}
