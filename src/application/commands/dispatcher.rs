//! CommandDispatcher - routes channel text to the command handlers.
//!
//! The dispatcher owns one instance of every handler, applies channel
//! gating, and turns handler results and errors into reply messages.
//! User mistakes get a short explanation. Infrastructure failures are
//! logged and answered with a generic message.

use std::sync::Arc;

use crate::application::handlers::cycle::{
    RecordHoldoverCommand, RecordHoldoverHandler, ReplayHoldoverCommand, ReplayHoldoverHandler,
    RolloverCommand, RolloverHandler,
};
use crate::application::handlers::fallen::{
    ListFallenHandler, ListFallenQuery, RandomFallenHandler, RandomFallenQuery,
    RemoveFallenCommand, RemoveFallenHandler,
};
use crate::application::handlers::movies::{
    MovieQueryError, MovieSummaryHandler, MovieSummaryQuery, RandomBMovieHandler,
    RandomBMovieQuery, SearchMoviesHandler, SearchMoviesQuery, SearchSession, TriviaError,
    TriviaHandler, TriviaQuery,
};
use crate::application::handlers::voting::{GetTallyHandler, GetTallyQuery};
use crate::application::handlers::wheel::{
    PurgeWheelsCommand, PurgeWheelsHandler, SpinFallenWheelCommand, SpinFallenWheelHandler,
    SpinWheelCommand, SpinWheelHandler, SpinWheelResult,
};
use crate::application::handlers::winners::{
    ExclusionCommand, ExclusionResult, ListWinnersHandler, ListWinnersQuery,
    ManageExclusionsHandler, RecordWinnerCommand, RecordWinnerError, RecordWinnerHandler,
    WinnersRuntimeHandler, WinnersRuntimeQuery,
};
use crate::application::ledger::Ledger;
use crate::application::window::WindowReader;
use crate::config::{AppConfig, ChannelsConfig};
use crate::domain::foundation::{CommandMetadata, DomainError, DEFAULT_MESSAGE_LIMIT};
use crate::ports::{ChannelHistory, MovieCatalog, WheelService};

use super::command::BotCommand;
use super::replies;

/// Settings that shape parsing, gating and reply size.
#[derive(Debug, Clone)]
pub struct DispatcherSettings {
    pub command_prefix: String,
    pub max_message_len: usize,
    pub channels: ChannelsConfig,
    pub random_attempts: u32,
}

impl DispatcherSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            command_prefix: config.bot.command_prefix.clone(),
            max_message_len: config.bot.max_message_len,
            channels: config.channels.clone(),
            random_attempts: config.bot.random_attempts,
        }
    }

    /// Default prefix and message limit with the given channels.
    pub fn with_channels(channels: ChannelsConfig) -> Self {
        Self {
            command_prefix: ".".to_string(),
            max_message_len: DEFAULT_MESSAGE_LIMIT,
            channels,
            random_attempts: 25,
        }
    }
}

/// Everything the handlers talk to.
#[derive(Clone)]
pub struct Collaborators {
    pub ledger: Arc<Ledger>,
    pub channel: Arc<dyn ChannelHistory>,
    pub wheel: Arc<dyn WheelService>,
    pub catalog: Arc<dyn MovieCatalog>,
}

/// Single entry point for command text.
pub struct CommandDispatcher {
    settings: DispatcherSettings,
    tally: GetTallyHandler,
    spin_wheel: SpinWheelHandler,
    spin_fallen: SpinFallenWheelHandler,
    purge_wheels: PurgeWheelsHandler,
    rollover: RolloverHandler,
    record_holdover: RecordHoldoverHandler,
    replay_holdover: ReplayHoldoverHandler,
    exclusions: ManageExclusionsHandler,
    record_winner: RecordWinnerHandler,
    list_winners: ListWinnersHandler,
    winners_runtime: WinnersRuntimeHandler,
    list_fallen: ListFallenHandler,
    random_fallen: RandomFallenHandler,
    remove_fallen: RemoveFallenHandler,
    search_movies: SearchMoviesHandler,
    movie_summary: MovieSummaryHandler,
    trivia: TriviaHandler,
    random_bmovie: RandomBMovieHandler,
}

impl CommandDispatcher {
    pub fn new(settings: DispatcherSettings, deps: Collaborators) -> Self {
        let window = WindowReader::new(deps.channel.clone());
        let session = SearchSession::new();
        let ledger = deps.ledger;

        Self {
            tally: GetTallyHandler::new(ledger.clone(), window.clone()),
            spin_wheel: SpinWheelHandler::new(ledger.clone(), window.clone(), deps.wheel.clone()),
            spin_fallen: SpinFallenWheelHandler::new(ledger.clone(), deps.wheel.clone()),
            purge_wheels: PurgeWheelsHandler::new(deps.wheel),
            rollover: RolloverHandler::new(ledger.clone(), window.clone()),
            record_holdover: RecordHoldoverHandler::new(ledger.clone(), window),
            replay_holdover: ReplayHoldoverHandler::new(ledger.clone()),
            exclusions: ManageExclusionsHandler::new(ledger.clone()),
            record_winner: RecordWinnerHandler::new(
                ledger.clone(),
                deps.catalog.clone(),
                session.clone(),
            ),
            list_winners: ListWinnersHandler::new(ledger.clone()),
            winners_runtime: WinnersRuntimeHandler::new(ledger.clone(), deps.catalog.clone()),
            list_fallen: ListFallenHandler::new(ledger.clone()),
            random_fallen: RandomFallenHandler::new(ledger.clone()),
            remove_fallen: RemoveFallenHandler::new(ledger.clone()),
            search_movies: SearchMoviesHandler::new(deps.catalog.clone(), session.clone()),
            movie_summary: MovieSummaryHandler::new(deps.catalog.clone(), session),
            trivia: TriviaHandler::new(ledger, deps.catalog.clone()),
            random_bmovie: RandomBMovieHandler::new(deps.catalog, settings.random_attempts),
            settings,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.settings.command_prefix
    }

    /// Handle one message.
    ///
    /// Returns `None` when the message is not a command for the bot: plain
    /// text, or a command issued in a channel where it is not allowed.
    /// Otherwise returns the replies to post, in order.
    pub async fn dispatch(&self, text: &str, metadata: CommandMetadata) -> Option<Vec<String>> {
        let parsed = BotCommand::parse(&self.settings.command_prefix, text)?;
        let operator = self
            .settings
            .channels
            .is_operator_channel(metadata.channel_id);

        let command = match parsed {
            Ok(command) => command,
            Err(e) => {
                if !operator {
                    tracing::debug!(
                        channel_id = %metadata.channel_id,
                        error = %e,
                        "Ignoring command outside operator channels"
                    );
                    return None;
                }
                return Some(vec![replies::parse_error(&self.settings.command_prefix, &e)]);
            }
        };

        if !operator && !command.allowed_anywhere() {
            tracing::debug!(
                channel_id = %metadata.channel_id,
                command = %command.name(),
                "Command not allowed in this channel"
            );
            return None;
        }

        tracing::info!(
            correlation_id = %metadata.correlation_id(),
            channel_id = %metadata.channel_id,
            command = %command.name(),
            "Dispatching command"
        );

        let name = command.name();
        let correlation_id = metadata.correlation_id().to_string();
        match self.run(command, metadata).await {
            Ok(messages) => Some(messages),
            Err(e) if e.code.is_user_error() => Some(vec![e.message]),
            Err(e) => {
                tracing::error!(
                    correlation_id = %correlation_id,
                    command = %name,
                    error = %e,
                    "Command failed"
                );
                Some(vec![replies::SOMETHING_WENT_WRONG.to_string()])
            }
        }
    }

    async fn run(
        &self,
        command: BotCommand,
        metadata: CommandMetadata,
    ) -> Result<Vec<String>, DomainError> {
        let limit = self.settings.max_message_len;

        match command {
            BotCommand::Help => Ok(replies::help(&self.settings.command_prefix, limit)),

            BotCommand::Tally => {
                let report = self.tally.handle(GetTallyQuery).await?;
                Ok(replies::tally(&report, limit))
            }
            BotCommand::VoteCount => {
                let report = self.tally.handle(GetTallyQuery).await?;
                Ok(vec![replies::vote_count(&report)])
            }
            BotCommand::MovieCount => {
                let report = self.tally.handle(GetTallyQuery).await?;
                Ok(vec![replies::movie_count(&report)])
            }

            BotCommand::Wheel => match self.spin_wheel.handle(SpinWheelCommand, metadata).await? {
                SpinWheelResult::Submitted { url, .. } => Ok(vec![replies::wheel_submitted(&url)]),
                SpinWheelResult::Fallback { list, .. } => Ok(replies::wheel_fallback(&list, limit)),
            },
            BotCommand::WheelFallen => {
                match self.spin_fallen.handle(SpinFallenWheelCommand, metadata).await {
                    Ok(url) => Ok(vec![replies::wheel_submitted(&url)]),
                    Err(e) => {
                        tracing::warn!(error = %e, "Fallen wheel submission failed");
                        Ok(vec![replies::wheel_failed(e.status_code())])
                    }
                }
            }
            BotCommand::WheelPurge => {
                let outcomes = self
                    .purge_wheels
                    .handle(PurgeWheelsCommand, metadata)
                    .await?;
                Ok(replies::purge(&outcomes))
            }

            BotCommand::Rollover => {
                let result = self.rollover.handle(RolloverCommand, metadata).await?;
                Ok(replies::next_week(result.promoted.iter().map(String::as_str)))
            }
            BotCommand::Holdover => {
                self.record_holdover
                    .handle(RecordHoldoverCommand, metadata)
                    .await?;
                Ok(replies::holdover_recorded())
            }
            BotCommand::PrintHoldover => {
                let result = self
                    .replay_holdover
                    .handle(ReplayHoldoverCommand, metadata)
                    .await?;
                Ok(replies::next_week(result.holdover.iter()))
            }

            BotCommand::Winner(title) => {
                self.exclusions
                    .handle(ExclusionCommand::Add(title.clone()), metadata)
                    .await;
                Ok(vec![replies::winner_added(&title)])
            }
            BotCommand::WinnerList => {
                let titles = match self.exclusions.handle(ExclusionCommand::List, metadata).await {
                    ExclusionResult::Listed(titles) => titles,
                    _ => Vec::new(),
                };
                Ok(replies::exclusions(&titles, limit))
            }
            BotCommand::WinnerClear => {
                self.exclusions.handle(ExclusionCommand::Clear, metadata).await;
                Ok(vec![replies::exclusions_cleared()])
            }
            BotCommand::Winner2(display_index) => {
                let cmd = RecordWinnerCommand { display_index };
                match self.record_winner.handle(cmd, metadata).await {
                    Ok(record) => Ok(vec![replies::winner_recorded(&record)]),
                    Err(RecordWinnerError::NoSearchResult) => {
                        Ok(vec![replies::RUN_SEARCH_FIRST.to_string()])
                    }
                    Err(RecordWinnerError::Catalog(e)) => Err(e.into()),
                    Err(RecordWinnerError::Ledger(e)) => Err(e.into()),
                }
            }
            BotCommand::Winners => {
                let records = self.list_winners.handle(ListWinnersQuery).await;
                Ok(replies::winners(&records, limit))
            }
            BotCommand::WinnersRuntime => {
                let minutes = self.winners_runtime.handle(WinnersRuntimeQuery).await;
                Ok(vec![replies::winners_runtime(minutes)])
            }

            BotCommand::Fallen => {
                let titles = self.list_fallen.handle(ListFallenQuery).await;
                Ok(replies::fallen(&titles, limit))
            }
            BotCommand::RandomFallen => match self.random_fallen.handle(RandomFallenQuery).await {
                Ok(pick) => Ok(vec![replies::fallen_pick(&pick)]),
                Err(_) => Ok(vec![replies::fallen_empty()]),
            },
            BotCommand::RemoveFallen(display_index) => {
                let cmd = RemoveFallenCommand { display_index };
                match self.remove_fallen.handle(cmd, metadata).await {
                    Ok(title) => Ok(vec![replies::fallen_removed(&title)]),
                    Err(e) => {
                        let domain: DomainError = e.into();
                        if domain.code.is_user_error() {
                            Ok(vec![replies::RUN_FALLEN_FIRST.to_string()])
                        } else {
                            Err(domain)
                        }
                    }
                }
            }

            BotCommand::Imdb(title) => {
                let results = self.search_movies.handle(SearchMoviesQuery { title }).await?;
                Ok(replies::search_results(&results, limit))
            }
            BotCommand::ImdbSummary(display_index) => {
                let query = MovieSummaryQuery { display_index };
                match self.movie_summary.handle(query).await {
                    Ok(summary) => Ok(replies::movie_summary(&summary, limit)),
                    Err(MovieQueryError::NoSearchResult) => {
                        Ok(vec![replies::RUN_SEARCH_FIRST.to_string()])
                    }
                    Err(MovieQueryError::Catalog(e)) => Err(e.into()),
                }
            }
            BotCommand::Trivia(display_index) => {
                match self.trivia.handle(TriviaQuery { display_index }).await {
                    Ok(result) => Ok(replies::trivia(&result.title, &result.facts, limit)),
                    Err(TriviaError::Registry(_)) => {
                        Ok(vec![replies::no_past_showing(display_index)])
                    }
                    Err(TriviaError::Catalog(e)) => Err(e.into()),
                }
            }
            BotCommand::Random => match self.random_bmovie.handle(RandomBMovieQuery).await {
                Ok(summary) => Ok(replies::movie_summary(&summary, limit)),
                Err(e) => {
                    tracing::warn!(error = %e, "Random b-movie pick failed");
                    Ok(vec![replies::SOMETHING_WENT_WRONG.to_string()])
                }
            },
        }
    }
}
