//! Status Tool
//!
//! Runtime status of the service and the scoring guide served to clients.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// How scores are built and how to refine them, for AI assistants
pub const SCORING_INSTRUCTIONS: &str = r#"
# HealthyMenu Scoring Guide

Scores run from 0 to 100 and start from a neutral 60. Educational tool, not
medical advice.

## Verdicts

| Score    | Verdict   |
|----------|-----------|
| 75-100   | Healthy   |
| 55-74.9  | Decent    |
| 35-54.9  | Caution   |
| 0-34.9   | Unhealthy |

## What lowers a score

- Calories above 400 (full penalty at 1200)
- Saturated fat above 5 g (full penalty at 22 g)
- Sodium above 600 mg (full penalty at 2400 mg), times sodium sensitivity
- Added sugars above 10 g (full penalty at 50 g), times sugar sensitivity
- Trans fat of 0.5 g or more (flat penalty)
- Frying, breading, processed meat and dessert words in the name or ingredients
- Sweetened drinks (soda, shakes, smoothies, sweet tea) unless added sugars are known to be 20 g or less

## What raises a score

- Fiber above 3 g (full credit at 10 g)
- Protein above 10 g (full credit at 30 g)
- Whole grains, vegetables, lean protein (not fried, battered or crispy)
- Healthy cooking words such as grilled, baked or steamed
- Legumes or veggies, when vegetarian emphasis is on

## Workflow

1. `scan_cards` or `score_item` with what the menu shows.
   With no nutrition numbers at all, facts are estimated from the item name
   (`estimated: true`). If any number is given, only the given numbers are used.
2. `parse_label` turns pasted nutrition-label text into numbers.
3. `refine_item` merges the numbers you know into the item and rescores it.
4. `get_settings` / `save_settings` read and change sensitivities:
   lower (0.8), normal (1.0), higher (1.2), strict (1.5), or any positive number.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub build: String,
    pub build_number: Option<u64>,
    pub build_timestamp: Option<&'static str>,
    pub version: &'static str,

    pub database_path: String,
    pub database_size_bytes: Option<u64>,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Collects runtime information since startup
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
        }
    }

    pub fn get_status(&self) -> ServiceStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            build: build_info.label(),
            build_number: build_info.build_number,
            build_timestamp: build_info.compiled_at,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_missing_database() {
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/healthy_menu.db"));
        let status = tracker.get_status();
        assert_eq!(status.database_size_bytes, None);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
        assert!(status.build.starts_with(status.version));
    }
}
