//! Colorful console output for grouping runs.
//!
//! Provides a custom `tracing` layer that formats grouper events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (grouping start/end, final score)
//! - **WARN**: Window search fallbacks
//! - **DEBUG**: Individual groups as they are formed

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static GROUPING_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "groupforge_solver=info,groupforge=info";

/// Initializes the grouping console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides [`DEFAULT_FILTER`].
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(GroupForgeConsoleLayer)
            .try_init();
    });
}

// Marks the start of a grouping run for elapsed time tracking.
fn mark_grouping_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    GROUPING_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = GROUPING_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats grouper events with colors.
pub struct GroupForgeConsoleLayer;

impl<S: Subscriber> Layer<S> for GroupForgeConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("groupforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    grouper: Option<String>,
    respondents: Option<u64>,
    group_size: Option<u64>,
    groups: Option<u64>,
    members: Option<u64>,
    remaining: Option<u64>,
    window: Option<u64>,
    windows: Option<u64>,
    chosen: Option<u64>,
    score: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            "grouper" => self.grouper = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "respondents" => self.respondents = Some(value),
            "group_size" => self.group_size = Some(value),
            "groups" => self.groups = Some(value),
            "members" => self.members = Some(value),
            "remaining" => self.remaining = Some(value),
            "window" => self.window = Some(value),
            "windows" => self.windows = Some(value),
            "chosen" => self.chosen = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "score" {
            self.score = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "grouper" => self.grouper = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "grouping_start" => format_grouping_start(v),
        "grouping_end" => format_grouping_end(v),
        "group_formed" => format_group_formed(v),
        "grouping_scored" => format_grouping_scored(v),
        "window_fallback" => format_window_fallback(v),
        _ if level <= Level::WARN => format_message(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_grouping_start(v: &EventVisitor) -> String {
    mark_grouping_start();
    let grouper = v.grouper.as_deref().unwrap_or("Grouper");

    format!(
        "{} {} {} started │ {} respondents │ groups of {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        grouper.white().bold(),
        v.respondents.unwrap_or(0).bright_yellow(),
        v.group_size.unwrap_or(0).bright_yellow(),
    )
}

fn format_grouping_end(v: &EventVisitor) -> String {
    let grouper = v.grouper.as_deref().unwrap_or("Grouper");

    format!(
        "{} {} {} finished │ {} groups",
        format_elapsed(),
        "■".bright_cyan().bold(),
        grouper.white().bold(),
        v.groups.unwrap_or(0).bright_magenta().bold(),
    )
}

fn format_group_formed(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Group of {}",
        format_elapsed(),
        "+".bright_blue(),
        v.members.unwrap_or(0).white(),
    );

    if let Some(window) = v.window {
        output.push_str(&format!(" │ window {}", window.bright_black()));
    }

    if let Some(remaining) = v.remaining {
        output.push_str(&format!(" │ {} left", remaining.bright_black()));
    }

    output
}

fn format_grouping_scored(v: &EventVisitor) -> String {
    format!(
        "{} {} Score {}",
        format_elapsed(),
        "★".bright_yellow(),
        format_score(v.score.unwrap_or(0.0)),
    )
}

fn format_window_fallback(v: &EventVisitor) -> String {
    format!(
        "{} {} No rising window among {}, using window {}",
        format_elapsed(),
        "!".bright_yellow().bold(),
        v.windows.unwrap_or(0).white(),
        v.chosen.unwrap_or(0).bright_yellow(),
    )
}

fn format_message(v: &EventVisitor, level: Level) -> String {
    let message = v.message.as_deref().unwrap_or("");
    let tag = if level == Level::ERROR {
        "ERROR".bright_red().bold().to_string()
    } else {
        "WARN".bright_yellow().bold().to_string()
    };

    format!("{} {} {}", format_elapsed(), tag, message)
}

// Scores live in [0, 1] for surveys with unit weights.
fn format_score(score: f64) -> String {
    let text = format!("{:.4}", score);
    if score >= 0.75 {
        text.bright_green().bold().to_string()
    } else if score >= 0.25 {
        text.yellow().to_string()
    } else {
        text.bright_red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_lifecycle_events_are_formatted() {
        let mut start = visitor("grouping_start");
        start.grouper = Some("GreedyGrouper".to_string());
        start.respondents = Some(12);
        start.group_size = Some(3);

        let output = format_event(&start, Level::INFO);

        assert!(output.contains("GreedyGrouper"));
        assert!(output.contains("started"));
        assert!(output.contains("12"));
    }

    #[test]
    fn test_group_formed_mentions_window() {
        let mut formed = visitor("group_formed");
        formed.members = Some(2);
        formed.window = Some(4);

        let output = format_event(&formed, Level::DEBUG);

        assert!(output.contains("Group of"));
        assert!(output.contains("window"));
        assert!(!output.contains("left"));
    }

    #[test]
    fn test_unknown_events_only_show_warnings() {
        let mut plain = EventVisitor {
            message: Some("scoring failed".to_string()),
            ..EventVisitor::default()
        };

        assert!(format_event(&plain, Level::DEBUG).is_empty());
        assert!(format_event(&plain, Level::WARN).contains("scoring failed"));

        plain.event = Some("unknown".to_string());
        assert!(format_event(&plain, Level::INFO).is_empty());
    }

    #[test]
    fn test_score_formatting() {
        assert!(format_score(1.0).contains("1.0000"));
        assert!(format_score(0.3333).contains("0.3333"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
