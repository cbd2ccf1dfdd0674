//! Movie metadata as returned by the catalog, and its display defaults.
//!
//! Catalog records are sparse: any field may be missing. Each field has a
//! named fallback so a missing value renders as a placeholder instead of
//! failing the command.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::MovieId;

/// Placeholder for missing free-text fields (title, plot).
pub const UNAVAILABLE: &str = "Unavailable";

/// Placeholder for missing numeric fields (score, runtime).
pub const NOT_AVAILABLE: &str = "N/A";

/// Runtime assumed for a winner whose runtime the catalog does not know.
pub const DEFAULT_RUNTIME_MINUTES: u32 = 90;

/// One catalog search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub movie_id: MovieId,
    /// Title with year, e.g. `Hausu (1977)`.
    pub long_title: String,
}

/// Full catalog record for one movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub movie_id: Option<MovieId>,
    pub title: Option<String>,
    pub long_title: Option<String>,
    /// Plot summaries; the first one is displayed.
    #[serde(default)]
    pub plots: Vec<String>,
    pub rating: Option<f32>,
    /// Runtimes in minutes; the first one is used.
    #[serde(default)]
    pub runtimes: Vec<u32>,
    pub cover_url: Option<String>,
    /// `movie`, `tv series`, `video`, ...
    pub kind: Option<String>,
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl MovieDetails {
    pub fn runtime_minutes(&self) -> Option<u32> {
        self.runtimes.first().copied()
    }

    /// Display view with every missing field replaced by its placeholder.
    pub fn summary(&self, movie_id: &MovieId) -> MovieSummary {
        MovieSummary {
            title: self
                .long_title
                .clone()
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            description: self
                .plots
                .first()
                .map(|p| strip_plot_author(p).to_string())
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            score: self
                .rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            runtime: self
                .runtime_minutes()
                .map(|m| format!("{} minutes", m))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            url: imdb_url(movie_id),
            cover_url: self.cover_url.clone(),
        }
    }
}

/// Plots arrive as `text::author`; only the text is shown.
fn strip_plot_author(plot: &str) -> &str {
    plot.split("::").next().unwrap_or(plot)
}

/// Canonical catalog page for a movie.
pub fn imdb_url(movie_id: &MovieId) -> String {
    format!("https://www.imdb.com/title/tt{}", movie_id)
}

/// Ready-to-render movie summary. Every field is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub title: String,
    pub description: String,
    pub score: String,
    pub runtime: String,
    pub url: String,
    pub cover_url: Option<String>,
}

impl MovieSummary {
    /// Text lines for a channel reply.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.title.clone(),
            self.description.clone(),
            format!("IMDB Score: {}", self.score),
            format!("Runtime: {}", self.runtime),
            self.url.clone(),
        ];
        if let Some(cover) = &self.cover_url {
            lines.push(cover.clone());
        }
        lines
    }
}

/// Total runtime of a set of movies, counting unknown runtimes as
/// [`DEFAULT_RUNTIME_MINUTES`].
pub fn estimated_total_runtime<I>(runtimes: I) -> u32
where
    I: IntoIterator<Item = Option<u32>>,
{
    runtimes
        .into_iter()
        .map(|r| r.unwrap_or(DEFAULT_RUNTIME_MINUTES))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> MovieId {
        MovieId::new("0076162").unwrap()
    }

    #[test]
    fn empty_record_uses_every_placeholder() {
        let summary = MovieDetails::default().summary(&id());
        assert_eq!(summary.title, "Unavailable");
        assert_eq!(summary.description, "Unavailable");
        assert_eq!(summary.score, "N/A");
        assert_eq!(summary.runtime, "N/A");
        assert_eq!(summary.url, "https://www.imdb.com/title/tt0076162");
        assert!(summary.cover_url.is_none());
    }

    #[test]
    fn full_record_is_rendered() {
        let details = MovieDetails {
            long_title: Some("Hausu (1977)".into()),
            plots: vec!["A schoolgirl and six classmates travel to a haunted house.::someone".into()],
            rating: Some(7.3),
            runtimes: vec![88, 90],
            ..Default::default()
        };
        let summary = details.summary(&id());
        assert_eq!(summary.title, "Hausu (1977)");
        assert_eq!(
            summary.description,
            "A schoolgirl and six classmates travel to a haunted house."
        );
        assert_eq!(summary.score, "7.3");
        assert_eq!(summary.runtime, "88 minutes");
    }

    #[test]
    fn total_runtime_defaults_missing_to_ninety() {
        assert_eq!(estimated_total_runtime([Some(100), None, Some(80)]), 270);
        assert_eq!(estimated_total_runtime(Vec::new()), 0);
    }

    #[test]
    fn summary_lines_include_cover_when_present() {
        let details = MovieDetails {
            cover_url: Some("https://img.example/hausu.jpg".into()),
            ..Default::default()
        };
        let lines = details.summary(&id()).to_lines();
        assert_eq!(lines.last().unwrap(), "https://img.example/hausu.jpg");
    }
}
