use owo_colors::OwoColorize;

/// Plain informational line.
pub fn info(msg: &str) {
    println!("* {msg}");
}

pub fn ok(msg: &str) {
    println!("{}", format!("+ {msg}").green().bold());
}

pub fn warn(msg: &str) {
    println!("{}", format!("- {msg}").yellow().bold());
}

pub fn error(msg: &str) {
    println!("{}", format!("- {msg}").red().bold());
}

/// Per-device results header, printed above the raw command output.
pub fn title(device: &str) {
    println!();
    println!("{}", format!("{device} switch results").bright_white().bold());
}
