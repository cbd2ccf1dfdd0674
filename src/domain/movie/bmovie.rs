//! Eligibility rules for the random B-movie pick.

use super::MovieDetails;

/// Earliest release year considered.
pub const MIN_YEAR: i32 = 1950;

/// Genres that disqualify a pick.
pub const EXCLUDED_GENRES: [&str; 6] = [
    "War",
    "News",
    "Film-Noir",
    "History",
    "Biography",
    "Documentary",
];

/// A feature film from [`MIN_YEAR`] on, with none of the excluded genres.
///
/// Records missing their kind or year are not eligible.
pub fn is_eligible(details: &MovieDetails) -> bool {
    let is_movie = details.kind.as_deref() == Some("movie");
    let recent_enough = details.year.is_some_and(|y| y >= MIN_YEAR);
    let allowed_genres = !details
        .genres
        .iter()
        .any(|g| EXCLUDED_GENRES.contains(&g.as_str()));

    is_movie && recent_enough && allowed_genres
}
