//! Movie handlers - catalog lookups and the random b-movie pick.

mod movie_summary;
mod random_bmovie;
mod search_movies;
mod search_session;
mod trivia;

pub use movie_summary::{MovieQueryError, MovieSummaryHandler, MovieSummaryQuery};
pub use random_bmovie::{RandomBMovieError, RandomBMovieHandler, RandomBMovieQuery};
pub use search_movies::{SearchMoviesHandler, SearchMoviesQuery, MAX_RESULTS};
pub use search_session::SearchSession;
pub use trivia::{TriviaError, TriviaHandler, TriviaQuery, TriviaResult};
