//! Plain-text presentation of the pages. Pure functions of page state.

use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::page::{ListingPage, LoadState, ProfilePage};
use crate::view::{ProfileDisplay, StatsSection};

pub const STATS_NOT_AVAILABLE: &str = "Chess statistics are not available for this player.";
pub const STATS_INCOMPLETE: &str =
    "Chess game statistics are incomplete or unavailable for this player.";

/// Number of placeholder rows drawn while the listing loads.
const SKELETON_ROWS: usize = 12;

pub fn render_listing(page: &ListingPage) -> String {
    let plural = page.title().plural();
    let mut lines = vec![
        "Chess Grandmasters Wiki".to_string(),
        format!("Explore the world's chess {plural} and their achievements"),
    ];

    match page.state() {
        LoadState::Error(err) => {
            return [
                format!("Error Loading {}", capitalize(plural)),
                err.message.clone(),
                "[r] Try Again".to_string(),
            ]
            .join("\n");
        }
        LoadState::Idle | LoadState::Loading => {
            lines.extend((0..SKELETON_ROWS).map(|_| "  ░░░░░░░░░░░░".to_string()));
        }
        LoadState::Success(_) => {
            if page.total() > 0 {
                lines.push(format!(
                    "Showing {} of {} {plural}",
                    page.visible().len(),
                    page.total()
                ));
            }
            lines.push(String::new());
            lines.extend(
                page.visible()
                    .iter()
                    .enumerate()
                    .map(|(i, username)| format!("{:>4}. {username}", i + 1)),
            );
            if page.has_more() {
                lines.push(String::new());
                lines.push(format!("[m] Load More ({} remaining)", page.remaining()));
            }
        }
    }

    lines.join("\n")
}

pub fn render_profile(page: &ProfilePage) -> String {
    render_profile_at(page, Utc::now())
}

pub fn render_profile_at(page: &ProfilePage, now: DateTime<Utc>) -> String {
    match page.state() {
        LoadState::Idle | LoadState::Loading => format!("Loading {}...", page.username()),
        LoadState::Error(err) if err.is_not_found() => [
            "Player Not Found".to_string(),
            format!("The player \"{}\" could not be found.", page.username()),
            "[b] Back to List  [r] Try Again".to_string(),
        ]
        .join("\n"),
        LoadState::Error(err) => [
            "Error Loading Player Profile".to_string(),
            err.message.clone(),
            "[b] Back to List  [r] Try Again".to_string(),
        ]
        .join("\n"),
        LoadState::Success(data) => {
            let display = ProfileDisplay::derive(data, now);
            let offline_for = page
                .clock()
                .map(|clock| clock.current())
                .or_else(|| display.offline_for.clone());
            render_display(&display, offline_for.as_deref())
        }
    }
}

fn render_display(display: &ProfileDisplay, offline_for: Option<&str>) -> String {
    let mut lines = vec!["[b] Back to Grandmasters".to_string(), String::new()];

    lines.push(display.heading.clone());
    let badges = std::iter::once(display.title.as_str())
        .chain(display.verified.then_some("Verified"))
        .chain(display.streamer.then_some("Streamer"))
        .map(|badge| format!("[{badge}]"))
        .join(" ");
    lines.push(badges);
    lines.push(String::new());

    lines.push("Profile Information".to_string());
    lines.push(format!("  {}", display.username));
    if let Some(name) = &display.secondary_name {
        lines.push(format!("  {name}"));
    }
    if let Some(location) = &display.location {
        lines.push(format!("  Location: {location}"));
    }
    if let Some(country) = &display.country_code {
        lines.push(format!("  Country: {country}"));
    }
    if let Some(league) = &display.league {
        lines.push(format!("  League: {league}"));
    }
    if let Some(joined) = &display.joined {
        lines.push(format!("  {joined}"));
    }
    lines.push(format!("  {}", display.presence));
    if let Some(offline_for) = offline_for {
        lines.push(format!("  Time Since Last Online: {offline_for}"));
    }
    lines.push(String::new());

    lines.push("Chess Statistics".to_string());
    match &display.stats {
        StatsSection::NotAvailable => lines.push(format!("  {STATS_NOT_AVAILABLE}")),
        StatsSection::Incomplete => lines.push(format!("  {STATS_INCOMPLETE}")),
        StatsSection::Cards(cards) => {
            for card in cards {
                lines.push(format!("  {}", card.time_control));
                lines.push(format!("    {}", card.current));
                lines.push(format!("    Best: {}", card.best));
                lines.push(format!("    {}", card.record));
            }
        }
    }

    lines.join("\n")
}

fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .join(" ")
}
