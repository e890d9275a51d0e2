//! Text shown next to the map: travel time, distance, steps and calories.
use serde::Serialize;
use std::{collections::HashMap, fmt, str::FromStr};

use super::routing::error::RoutingError;
use super::routing::route::RouteStats;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl FromStr for Locale {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            other => Err(RoutingError::Config(format!("Unsupported locale: {}", other))),
        }
    }
}

/// Named UI regions the route statistics are written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisplayTarget {
    Time,
    Distance,
    Steps,
    Calories,
}

impl DisplayTarget {
    pub const ALL: [DisplayTarget; 4] = [
        DisplayTarget::Time,
        DisplayTarget::Distance,
        DisplayTarget::Steps,
        DisplayTarget::Calories,
    ];
}

impl fmt::Display for DisplayTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayTarget::Time => "time",
            DisplayTarget::Distance => "dist",
            DisplayTarget::Steps => "steps",
            DisplayTarget::Calories => "caloriBurn",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayStrings {
    pub time: String,
    pub distance: String,
    pub steps: String,
    pub calories: String,
}

/// Human-readable travel time. Exactly one of four forms, chosen by whether the whole hours
/// and the remaining whole minutes are zero.
pub fn format_duration(seconds: u64, locale: Locale) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    match (locale, hours, minutes) {
        (Locale::En, 0, 0) => "arriving immediately".to_string(),
        (Locale::En, 0, m) => format!("{} minutes", m),
        (Locale::En, h, 0) => format!("{} hours", h),
        (Locale::En, h, m) => format!("{} hours{} minutes", h, m),
        (Locale::Ja, 0, 0) => "すぐに到着します".to_string(),
        (Locale::Ja, 0, m) => format!("{} 分", m),
        (Locale::Ja, h, 0) => format!("{} 時間", h),
        (Locale::Ja, h, m) => format!("{} 時間{} 分", h, m),
    }
}

pub fn format_distance(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}

pub fn format_steps(step_count: u64, locale: Locale) -> String {
    match locale {
        Locale::En => format!("{} steps", step_count),
        Locale::Ja => format!("{} 歩", step_count),
    }
}

pub fn format_calories(calorie_burn: f64) -> String {
    format!("{} kcal", calorie_burn)
}

impl DisplayStrings {
    pub fn from_stats(stats: &RouteStats, locale: Locale) -> Self {
        Self {
            time: format_duration(stats.duration_seconds, locale),
            distance: format_distance(stats.distance_meters),
            steps: format_steps(stats.step_count, locale),
            calories: format_calories(stats.calorie_burn),
        }
    }

    pub fn get(&self, target: DisplayTarget) -> &str {
        match target {
            DisplayTarget::Time => &self.time,
            DisplayTarget::Distance => &self.distance,
            DisplayTarget::Steps => &self.steps,
            DisplayTarget::Calories => &self.calories,
        }
    }
}

/// Where formatted statistics end up. Implemented by the UI layer.
pub trait StatsDisplay {
    /// Sets the visible text of a target, or fails with `DisplayTargetMissing`.
    fn set_text(&mut self, target: DisplayTarget, text: &str) -> Result<(), RoutingError>;
}

/// Writes every statistic to its target. A missing target is logged and skipped.
pub fn show_route_info<D: StatsDisplay + ?Sized>(display: &mut D, strings: &DisplayStrings) {
    for target in DisplayTarget::ALL {
        if let Err(e) = display.set_text(target, strings.get(target)) {
            log::error!("Could not show route info: {}", e);
        }
    }
}

/// In-memory display with a fixed set of registered targets.
#[derive(Debug, Clone, Default)]
pub struct DisplayBoard {
    regions: HashMap<DisplayTarget, String>,
}

impl DisplayBoard {
    pub fn with_targets(targets: &[DisplayTarget]) -> Self {
        Self {
            regions: targets.iter().map(|t| (*t, String::new())).collect(),
        }
    }

    /// A board with every target registered.
    pub fn full() -> Self {
        Self::with_targets(&DisplayTarget::ALL)
    }

    pub fn text(&self, target: DisplayTarget) -> Option<&str> {
        self.regions.get(&target).map(String::as_str)
    }
}

impl StatsDisplay for DisplayBoard {
    fn set_text(&mut self, target: DisplayTarget, text: &str) -> Result<(), RoutingError> {
        let region = self
            .regions
            .get_mut(&target)
            .ok_or(RoutingError::DisplayTargetMissing(target))?;
        region.clear();
        region.push_str(text);
        Ok(())
    }
}
