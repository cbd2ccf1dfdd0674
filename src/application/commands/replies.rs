//! Reply text for every command.
//!
//! Each function returns the messages to post, in order, already split so
//! that none exceeds `limit` characters.

use crate::application::handlers::fallen::FallenPick;
use crate::application::handlers::voting::TallyReport;
use crate::application::handlers::wheel::PurgeOutcome;
use crate::domain::foundation::{chunk_lines, chunk_with_header, numbered};
use crate::domain::movie::{MovieSummary, SearchResult};
use crate::domain::registry::WinnerRecord;
use crate::domain::wheel::WheelList;

use super::command::{CommandName, ParseError};

pub const NEXT_WEEK_HEADER: &str = "Next Week on the Wheel:";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";
pub const RUN_SEARCH_FIRST: &str = "Please run .imdb command first to store list of movies";
pub const RUN_FALLEN_FIRST: &str =
    "Please run .fallen or .random_fallen command to see list of movies on The Fallen";

pub fn help(prefix: &str, limit: usize) -> Vec<String> {
    let lines = CommandName::ALL.iter().map(|name| match name.argument() {
        Some(arg) => format!("{}{} {} - {}", prefix, name, arg, name.description()),
        None => format!("{}{} - {}", prefix, name, name.description()),
    });
    chunk_with_header("Commands:", lines, limit)
}

pub fn parse_error(prefix: &str, error: &ParseError) -> String {
    match error {
        ParseError::UnknownCommand(word) => format!(
            "Unknown command: {}{}. Type {}help for a list of commands.",
            prefix, word, prefix
        ),
        ParseError::MissingArgument(name) | ParseError::InvalidIndex { command: name, .. } => {
            format!(
                "Usage: {}{} {}",
                prefix,
                name,
                name.argument().unwrap_or_default()
            )
        }
    }
}

pub fn tally(report: &TallyReport, limit: usize) -> Vec<String> {
    let header = format!("Votes as of {}", report.as_of.display_short());
    let lines = report
        .ranking
        .iter()
        .map(|t| format!("{}  {}", t.total_votes, t.title));
    chunk_with_header(&header, lines, limit)
}

pub fn vote_count(report: &TallyReport) -> String {
    format!("Number of votes: {}", report.vote_count())
}

pub fn movie_count(report: &TallyReport) -> String {
    format!("Number of movies: {}", report.movie_count)
}

pub fn wheel_submitted(url: &str) -> String {
    format!("Submitted. Go to {}", url)
}

pub fn wheel_fallback(list: &WheelList, limit: usize) -> Vec<String> {
    let mut replies = vec!["Wheel List:".to_string()];
    replies.extend(list.render_chunks(limit));
    replies
}

pub fn wheel_failed(status: Option<u16>) -> String {
    match status {
        Some(code) => format!("{} (Status: {})", SOMETHING_WENT_WRONG, code),
        None => SOMETHING_WENT_WRONG.to_string(),
    }
}

pub fn purge(outcomes: &[PurgeOutcome]) -> Vec<String> {
    if outcomes.is_empty() {
        return vec!["No shared wheels to purge".to_string()];
    }
    outcomes
        .iter()
        .map(|o| {
            if o.deleted {
                format!("{} purge complete", o.path)
            } else {
                format!("{} purge failed", o.path)
            }
        })
        .collect()
}

/// Header followed by one message per title.
pub fn next_week<'a, I>(titles: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    std::iter::once(NEXT_WEEK_HEADER.to_string())
        .chain(titles.into_iter().map(str::to_string))
        .collect()
}

pub fn holdover_recorded() -> Vec<String> {
    vec![
        "Holdover list created successfully".to_string(),
        NEXT_WEEK_HEADER.to_string(),
    ]
}

pub fn winner_added(title: &str) -> String {
    format!("Added winner: {}", title)
}

pub fn exclusions(titles: &[String], limit: usize) -> Vec<String> {
    if titles.is_empty() {
        return vec!["No winners excluded".to_string()];
    }
    chunk_with_header("Excluded winners:", titles, limit)
}

pub fn exclusions_cleared() -> String {
    "Winner list cleared".to_string()
}

pub fn winner_recorded(record: &WinnerRecord) -> String {
    format!("Added to Permanent Movie List: {}", record.title)
}

pub fn winners(records: &[WinnerRecord], limit: usize) -> Vec<String> {
    let lines = numbered(records.iter().map(|r| r.title.as_str()));
    chunk_with_header("Clumsy Movie Past Showings:", lines, limit)
}

pub fn winners_runtime(minutes: u32) -> String {
    format!("Estimated Runtime: {} minutes", minutes)
}

pub fn fallen(titles: &[String], limit: usize) -> Vec<String> {
    let lines = numbered(titles.iter().map(String::as_str));
    chunk_with_header("The Fallen:", lines, limit)
}

pub fn fallen_pick(pick: &FallenPick) -> String {
    format!("[{}] {}", pick.display_index, pick.title)
}

pub fn fallen_empty() -> String {
    "The Fallen is empty".to_string()
}

pub fn fallen_removed(title: &str) -> String {
    format!("Removed from The Fallen: {}", title)
}

pub fn search_results(results: &[SearchResult], limit: usize) -> Vec<String> {
    if results.is_empty() {
        return vec!["No results found".to_string()];
    }
    let lines = numbered(results.iter().map(|r| r.long_title.as_str()));
    chunk_with_header("Top 10 Search Results from IMDB:", lines, limit)
}

pub fn movie_summary(summary: &MovieSummary, limit: usize) -> Vec<String> {
    chunk_lines(summary.to_lines(), limit)
}

pub fn trivia(title: &str, facts: &[String], limit: usize) -> Vec<String> {
    let mut replies = vec![format!("Trivia for: {}", title)];
    for fact in facts {
        replies.extend(chunk_lines([fact], limit));
    }
    replies
}

pub fn no_past_showing(index: usize) -> String {
    format!("No past showing at position {}. Run .winners to see the list", index)
}
