//! One run: select, prompt, generate, check, write.
use chrono::NaiveDate;
use draftsmith_core::{
    DraftClient,
    generic::GenericMessage,
    provider::{ChatCompletionProvider, RecordStore},
    record::{CreatedRecord, RecordCount},
};
use draftsmith_notion::{NotionAdapter, NotionAdapterBuilder};
use draftsmith_openai::{OpenAiAdapter, OpenAiAdapterBuilder};
use draftsmith_types::{
    catalog::{Category, SERIES_TOPICS, TOPIC_BANK},
    posts::{BlogPostPrompt, DeepDivePrompt, Selection, SeriesPostPrompt, Style},
};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::RunError,
    image,
    profile::{Profile, Strategy},
    publish::build_record,
    quality::{self, QualityReport, QualityRules},
    select::{draw_style, select_random, select_sequential},
};

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One draft was written.
    Published {
        record: CreatedRecord,
        report: QualityReport,
        /// The series cursor came from a truncated count and may lag.
        count_truncated: bool,
    },
    /// Every series topic has already been produced.
    NothingToDo { produced: usize, total: usize },
}

/// The draft pipeline over a generation backend `B` and a record store `S`.
pub struct Pipeline<B, S> {
    profile: Profile,
    client: DraftClient<B>,
    store: S,
    topic_bank: &'static [Category],
    series: &'static [&'static str],
}

impl Pipeline<OpenAiAdapter, NotionAdapter> {
    /// Wire the OpenAI-compatible and Notion adapters from `config`.
    ///
    /// # Errors
    ///
    /// [`RunError::ConfigInvalid`] when either adapter rejects its settings.
    pub fn from_config(config: &Config) -> Result<Self, RunError> {
        let mut backend = OpenAiAdapterBuilder::new().with_api_key(&config.generation.api_key);
        if let Some(base_url) = &config.generation.base_url {
            backend = backend.with_base_url(base_url);
        }
        let backend = backend
            .build()
            .map_err(|err| RunError::ConfigInvalid(err.to_string()))?;

        let mut store = NotionAdapterBuilder::new()
            .with_token(&config.store.token)
            .with_database_id(&config.store.database_id);
        if let Some(base_url) = &config.store.base_url {
            store = store.with_base_url(base_url);
        }
        let store = store
            .build()
            .map_err(|err| RunError::ConfigInvalid(err.to_string()))?;

        Ok(Self::new(
            config.profile,
            DraftClient::new(backend, config.generation.model.clone()),
            store,
        ))
    }
}

impl<B, S> Pipeline<B, S>
where
    B: ChatCompletionProvider,
    S: RecordStore,
    GenericMessage: Into<B::Message>,
{
    pub fn new(profile: Profile, client: DraftClient<B>, store: S) -> Self {
        Self {
            profile,
            client,
            store,
            topic_bank: TOPIC_BANK,
            series: SERIES_TOPICS,
        }
    }

    /// Replace the category bank used by random selection.
    pub fn with_topic_bank(mut self, topic_bank: &'static [Category]) -> Self {
        self.topic_bank = topic_bank;
        self
    }

    /// Replace the ordered topics used by cursor selection.
    pub fn with_series(mut self, series: &'static [&'static str]) -> Self {
        self.series = series;
        self
    }

    pub fn client(&self) -> &DraftClient<B> {
        &self.client
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Produce and store at most one draft dated `today`.
    ///
    /// Nothing is written unless every earlier stage succeeded.
    pub async fn run<R: Rng>(&self, rng: &mut R, today: NaiveDate) -> Result<Outcome, RunError> {
        let (selection, count_truncated) = match self.profile.strategy() {
            Strategy::Random => (
                select_random(self.topic_bank, rng).ok_or(RunError::EmptyCatalog)?,
                false,
            ),
            Strategy::Cursor => {
                let count = self.produced().await?;
                let produced = count.returned;
                match select_sequential(self.series, produced) {
                    Some(selection) => (selection, count.has_more),
                    None => {
                        let total = self.series.len();
                        info!(produced, total, "series complete, nothing to do");
                        return Ok(Outcome::NothingToDo { produced, total });
                    }
                }
            }
        };
        let style = draw_style(rng);

        info!(
            profile = %self.profile,
            topic = %selection.topic,
            category = selection.category.as_deref().unwrap_or("-"),
            voice = style.voice.name,
            structure = style.structure,
            "selected topic"
        );

        let text = self.generate(&selection, &style).await?;
        let report = quality::check(&text, &QualityRules::for_profile(self.profile, &selection))?;
        info!(words = report.words, warnings = report.warnings.len(), "post generated");

        let image = image::for_selection(self.profile, &selection);
        debug!(url = %image.url, embed = image.embed, "image selected");

        let record = build_record(self.profile, &selection, text, &image, today);
        let created = self
            .store
            .create_record(record)
            .await
            .map_err(RunError::Write)?;

        info!(
            id = %created.id,
            url = created.url.as_deref().unwrap_or("-"),
            "draft created"
        );

        Ok(Outcome::Published {
            record: created,
            report,
            count_truncated,
        })
    }

    /// Records already in the store, i.e. the series cursor.
    async fn produced(&self) -> Result<RecordCount, RunError> {
        let count = self
            .store
            .count_records()
            .await
            .map_err(RunError::Count)?;

        if count.has_more {
            warn!(
                returned = count.returned,
                "store holds more records than one query page, series position may lag"
            );
        }

        Ok(count)
    }

    async fn generate(&self, selection: &Selection, style: &Style) -> Result<String, RunError> {
        let text = match (self.profile, selection.sequence) {
            (Profile::Series, Some(sequence)) => {
                self.client
                    .prompt_execute(SeriesPostPrompt::new(selection, sequence, style))
                    .await?
            }
            (Profile::DeepDive, _) => {
                self.client
                    .prompt_execute(DeepDivePrompt::new(selection, style))
                    .await?
            }
            _ => {
                self.client
                    .prompt_execute(BlogPostPrompt::new(selection, style))
                    .await?
            }
        };

        Ok(text)
    }
}

/// Process exit status for a finished run: 0 when published or nothing to
/// do, 1 on any failure.
pub fn exit_status(result: &Result<Outcome, RunError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_exit_with_one() {
        let nothing = Ok(Outcome::NothingToDo {
            produced: 30,
            total: 30,
        });
        let published = Ok(Outcome::Published {
            record: CreatedRecord {
                id: "page".into(),
                url: None,
            },
            report: QualityReport {
                words: 200,
                warnings: Vec::new(),
            },
            count_truncated: false,
        });

        assert_eq!(exit_status(&nothing), 0);
        assert_eq!(exit_status(&published), 0);
        assert_eq!(exit_status(&Err(RunError::EmptyCatalog)), 1);
        assert_eq!(
            exit_status(&Err(RunError::ContentTooShort {
                words: 100,
                minimum: 250
            })),
            1
        );
    }
}
