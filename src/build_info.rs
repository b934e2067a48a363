//! Build stamp
//!
//! build.rs embeds a local build counter and the compile time; builds made
//! without the script (docs, some IDEs) report them as missing.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const STAMPED_NUMBER: Option<&str> = option_env!("HM_BUILD_NUMBER");
const STAMPED_AT: Option<&str> = option_env!("HM_BUILD_TIMESTAMP");

/// Version plus whatever build.rs recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: Option<u64>,
    pub compiled_at: Option<&'static str>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_stamp(VERSION, STAMPED_NUMBER, STAMPED_AT)
    }

    fn from_stamp(version: &'static str, number: Option<&str>, at: Option<&'static str>) -> Self {
        Self {
            version,
            build_number: number.and_then(|n| n.trim().parse().ok()),
            compiled_at: at.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Semver-style label, e.g. `1.0.0+build.42`
    pub fn label(&self) -> String {
        match self.build_number {
            Some(n) => format!("{}+build.{}", self.version, n),
            None => self.version.to_string(),
        }
    }

    fn banner(&self) -> Vec<String> {
        let mut lines = vec![format!("HealthyMenu {}", self.label())];
        if let Some(at) = self.compiled_at {
            lines.push(format!("compiled {}", at));
        }
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let rule = "-".repeat(width + 4);
        let mut framed = Vec::with_capacity(lines.len() + 2);
        framed.push(rule.clone());
        framed.extend(lines.into_iter().map(|l| format!("  {}", l)));
        framed.push(rule);
        framed
    }
}

/// Startup banner, written to stderr because stdout carries the MCP stream
pub fn print_startup_banner() {
    for line in BuildInfo::current().banner() {
        eprintln!("{}", line);
    }
}
