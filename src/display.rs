//! Presentation helpers: slugs, asset paths, display names and formatting
//!
//! These are pure string functions shared by every view. Team and driver
//! names arrive in many spellings ("Oracle Red Bull Racing", "Red Bull",
//! "Pérez"), so every lookup goes through [`normalize_slug`] first.
//!
//! ```rust
//! use paddock::display;
//!
//! assert_eq!(display::team_image_path("Oracle Red Bull Racing"), "assets/images/teams/redbullracing.avif");
//! assert_eq!(display::driver_image_path("De Vries"), "assets/images/drivers/vries.avif");
//! assert_eq!(display::format_date(Some("1997-09-30")), "30/09/1997");
//! ```

use chrono::{DateTime, Datelike, Local, NaiveDate};
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

/// Placeholder for a missing or unreadable date
pub const MISSING_DATE: &str = "—";

const TEAM_IMAGE_DIR: &str = "assets/images/teams";
const DRIVER_IMAGE_DIR: &str = "assets/images/drivers";

/// Lowercase ASCII alphanumerics only, with accents folded ("Pérez" → "perez")
pub fn normalize_slug(text: &str) -> String {
    // NFD splits accented letters into base + combining mark; the mark is
    // then dropped along with every other non-alphanumeric
    text.to_lowercase()
        .nfd()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Image file stem for a known team slug
fn team_file(slug: &str) -> Option<&'static str> {
    let file = match slug {
        "redbullracing" | "oracleredbullracing" => "redbullracing",
        "mercedes" | "mercedesamgpetronasf1team" | "mercedesformula1team" => "mercedesc",
        "ferrari" | "scuderiaferrari" | "scuderiaferrarihp" => "ferrari",
        "mclaren" | "mclarenformula1team" => "mclaren",
        "astonmartin"
        | "astonmartinaramcof1team"
        | "astonmartincognizantformulaoneteam"
        | "astonmartincognizantf1team" => "astonmartin",
        "alpine" | "alpinef1team" | "bwtalpinef1team" => "alpine",
        "haas" | "haasf1team" | "moneygramhaasf1team" => "haas",
        "racingbulls" | "rb" | "rbf1team" | "visacashapprbformulaoneteam" => "racingbulls",
        "kicksauber" | "stakef1teamkicksauber" | "sauber" => "kicksauber",
        "williams" | "williamsracing" => "williams",
        _ => return None,
    };
    Some(file)
}

/// Canonical display name for a known team slug
fn canonical_team_name(slug: &str) -> Option<&'static str> {
    let name = match slug {
        "redbullracing" | "oracleredbullracing" => "Red Bull Racing",
        "racingbulls" | "rb" | "rbf1team" | "visacashapprbformulaoneteam" => "Racing Bulls",
        "mercedes" | "mercedesamgpetronasf1team" | "mercedesformula1team" => "Mercedes",
        "mclaren" | "mclarenformula1team" => "McLaren",
        "ferrari" | "scuderiaferrari" | "scuderiaferrarihp" => "Ferrari",
        "astonmartin" | "astonmartinaramcof1team" | "astonmartincognizantformulaoneteam" => {
            "Aston Martin"
        }
        "alpine" | "alpinef1team" | "bwtalpinef1team" => "Alpine",
        "williams" | "williamsracing" => "Williams",
        "haas" | "haasf1team" | "moneygramhaasf1team" => "Haas F1 Team",
        "kicksauber" | "stakef1teamkicksauber" => "Kick Sauber",
        _ => return None,
    };
    Some(name)
}

/// Relative path of a team's logo; empty for an empty name
///
/// Unknown names fall back to substring rules for sponsor-heavy names, and
/// finally to the slug itself.
pub fn team_image_path(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let slug = normalize_slug(name);
    let file = match team_file(&slug) {
        Some(file) => file.to_string(),
        None if slug.contains("sauber") || slug.contains("kick") => "kicksauber".to_string(),
        None if slug.contains("aston") => "astonmartin".to_string(),
        None => {
            trace!(name, slug = %slug, "No image mapping for team");
            slug
        }
    };
    format!("{TEAM_IMAGE_DIR}/{file}.avif")
}

/// Relative path of a driver's portrait, keyed by the last word of the surname
pub fn driver_image_path(surname: &str) -> String {
    let Some(last) = surname.split_whitespace().next_back() else {
        return String::new();
    };
    format!("{DRIVER_IMAGE_DIR}/{}.avif", normalize_slug(last))
}

/// Canonical team name, or the input unchanged when unknown
pub fn team_display_name(name: &str) -> String {
    match canonical_team_name(&normalize_slug(name)) {
        Some(canonical) => canonical.to_string(),
        None => name.to_string(),
    }
}

/// Avatar initials: two letters of a single word, else first and last word
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => "?".to_string(),
        [word] => word.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => {
            let pair: String = first.chars().take(1).chain(last.chars().take(1)).collect();
            pair.to_uppercase()
        }
    }
}

/// Date as `dd/mm/yyyy`
///
/// Values already in that shape are returned untouched. ISO dates and RFC 3339
/// timestamps are converted; anything else renders as [`MISSING_DATE`].
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return MISSING_DATE.to_string();
    };

    if is_day_first(raw) {
        return raw.to_string();
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => {
            trace!(raw, "Unreadable date");
            MISSING_DATE.to_string()
        }
    }
}

/// `dd/mm/yyyy` shape check (digits only, no range validation)
fn is_day_first(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes.iter().enumerate().all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
}

/// Points with one decimal, dropping a trailing `.0` ("25", "12.5")
pub fn format_points(points: f64) -> String {
    let formatted = format!("{points:.1}");
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

/// Calendar year on the local clock
pub fn current_season() -> i32 {
    Local::now().year()
}

/// `count` seasons counting down from `current`
pub fn season_years(current: i32, count: usize) -> Vec<i32> {
    (0..).map(|offset| current - offset).take(count).collect()
}
