//! Configuration: TOML file, defaults and the reduced-motion preference.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AccessibilityConfig, AutoplayConfig, Config, GestureConfig, SlideConfig};

/// Environment override for the reduced-motion preference.
pub const REDUCED_MOTION_ENV: &str = "CAROUSEL_REDUCED_MOTION";

/// Sample the reduced-motion preference once at startup.
///
/// The command-line flag always wins; otherwise a recognizable value of
/// `CAROUSEL_REDUCED_MOTION` overrides the config file.
pub fn resolve_reduced_motion(config: &Config, cli_flag: bool) -> bool {
    let env = std::env::var(REDUCED_MOTION_ENV).ok();
    reduced_motion_from(config, cli_flag, env.as_deref())
}

fn reduced_motion_from(config: &Config, cli_flag: bool, env: Option<&str>) -> bool {
    if cli_flag {
        return true;
    }
    env.and_then(parse_flag)
        .unwrap_or(config.accessibility.reduced_motion)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "reduce" => Some(true),
        "0" | "false" | "no" | "off" | "no-preference" => Some(false),
        _ => None,
    }
}
