use std::env;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::thread_rng;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;

use quiz_core::model::{Difficulty, Question, QuestionId};

use crate::error::TriviaError;
use crate::source::QuestionSource;

const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

#[derive(Clone, Debug)]
pub struct TriviaConfig {
    pub base_url: String,
}

impl TriviaConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZ_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self { base_url }
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Client for the live trivia question API.
///
/// One GET per fetch; the response carries an application-level status code
/// (0 = success) and a batch of HTML-escaped question records, which are
/// decoded, shuffled, and numbered here before anyone else sees them.
#[derive(Clone)]
pub struct TriviaService {
    client: Client,
    config: TriviaConfig,
}

impl TriviaService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(TriviaConfig::from_env())
    }

    #[must_use]
    pub fn new(config: TriviaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl QuestionSource for TriviaService {
    /// Fetch and normalize a batch of multiple-choice questions.
    ///
    /// # Errors
    ///
    /// Returns `TriviaError` for a zero amount, a non-success HTTP status,
    /// a non-zero application response code, transport or decode failures,
    /// or an empty result set. No retry is attempted here.
    async fn fetch_questions(
        &self,
        amount: u32,
        difficulty: Difficulty,
    ) -> Result<Vec<Question>, TriviaError> {
        if amount == 0 {
            return Err(TriviaError::ZeroAmount);
        }

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("amount", amount.to_string()),
                ("difficulty", difficulty.to_string()),
                ("type", "multiple".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TriviaError::HttpStatus(response.status()));
        }

        let body: TriviaResponse = response.json().await?;
        if body.response_code != 0 {
            return Err(TriviaError::ResponseCode(body.response_code));
        }
        if body.results.is_empty() {
            return Err(TriviaError::Empty);
        }

        let mut rng = thread_rng();
        normalize_questions(body.results, &mut rng)
    }
}

/// Turn raw API records into display-ready questions: decode HTML entities
/// in every text field, mix the correct answer into the incorrect ones with
/// a uniform shuffle, and number the batch 0-based by position.
///
/// Takes the RNG as a parameter so tests can pass a seeded one and get
/// reproducible option orderings.
///
/// # Errors
///
/// Returns `TriviaError::Question` if a record violates the question
/// invariants (blank text, no options).
pub fn normalize_questions(
    raw: Vec<RawQuestion>,
    rng: &mut impl Rng,
) -> Result<Vec<Question>, TriviaError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let correct = decode(&record.correct_answer);
            let mut options: Vec<String> = Vec::with_capacity(record.incorrect_answers.len() + 1);
            options.push(correct.clone());
            options.extend(record.incorrect_answers.iter().map(|answer| decode(answer)));
            options.as_mut_slice().shuffle(rng);

            Question::new(
                QuestionId::new(index),
                decode(&record.question),
                options,
                correct,
                decode(&record.category),
                record.difficulty,
            )
            .map_err(TriviaError::from)
        })
        .collect()
}

fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Raw question record as the trivia API serves it.
#[derive(Clone, Debug, Deserialize)]
pub struct RawQuestion {
    pub category: String,
    pub difficulty: Difficulty,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
