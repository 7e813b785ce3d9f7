//! Parsing dates typed on the command line.

use anyhow::Result;
use chrono::NaiveDate;
use countcal_core::constants::DATE_FORMAT;

/// Parse `YYYY-MM-DD`, falling back to natural language ("next friday",
/// "dec 25").
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;
    Ok(dt.date())
}

/// Spell out weekday and month abbreviations, which fuzzydate only accepts
/// in full.
fn expand_abbreviations(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let word = word.to_lowercase();
            full_name(&word).map_or(word, str::to_string)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn full_name(word: &str) -> Option<&'static str> {
    let full = match word {
        "mon" => "monday",
        "tue" | "tues" => "tuesday",
        "wed" => "wednesday",
        "thu" | "thur" | "thurs" => "thursday",
        "fri" => "friday",
        "sat" => "saturday",
        "sun" => "sunday",
        "jan" => "january",
        "feb" => "february",
        "mar" => "march",
        "apr" => "april",
        "jun" => "june",
        "jul" => "july",
        "aug" => "august",
        "sep" | "sept" => "september",
        "oct" => "october",
        "nov" => "november",
        "dec" => "december",
        _ => return None,
    };
    Some(full)
}
