//! Picture Quiz: name the image from four options.
//!
//! Code layout: `{rounds}-{category}-{slug}`.

use arena_content::ContentPack;
use arena_core::code::{self, CodeFields};
use arena_core::error::{CodeError, DomainError};
use arena_core::rng::DeterministicRng;
use arena_core::shuffle::{sample, shuffle};
use arena_core::slug::Seed;
use serde::{Deserialize, Serialize};

use crate::mode::{GameMode, check_category};

/// Answer options per question, the correct one included.
pub const OPTIONS_PER_QUESTION: usize = 4;

const MIN_ROUNDS: u32 = 1;
const MAX_ROUNDS: u32 = 30;

/// Picture Quiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureQuizConfig {
    /// Questions to ask (1–30).
    pub rounds: u32,
    /// Image category, or `random`.
    pub category: String,
}

/// One question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    /// Image URL or path.
    pub image: String,
    /// Shuffled answer options.
    pub options: Vec<String>,
    /// Index of the correct answer in `options`.
    pub answer_index: usize,
}

impl QuizQuestion {
    /// The correct answer text.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.options[self.answer_index]
    }
}

/// All questions, in play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PictureQuizRound {
    /// One question per round.
    pub questions: Vec<QuizQuestion>,
}

/// The Picture Quiz game mode.
#[derive(Debug, Clone, Copy)]
pub struct PictureQuiz;

impl GameMode for PictureQuiz {
    const ID: &'static str = "picture-quiz";
    type Config = PictureQuizConfig;
    type State = PictureQuizRound;

    fn validate(config: &Self::Config) -> Result<(), CodeError> {
        code::check_bounds("rounds", config.rounds, MIN_ROUNDS, MAX_ROUNDS)?;
        check_category(&config.category)
    }

    fn format_code(config: &Self::Config, seed: Seed) -> String {
        code::join(&[&config.rounds.to_string(), &config.category], seed)
    }

    fn parse_code(code: &str) -> Result<(Self::Config, Seed), CodeError> {
        let fields = CodeFields::parse(code, 1, true)?;
        let config = PictureQuizConfig {
            rounds: code::parse_bounded("rounds", fields.field(0, "rounds")?, MIN_ROUNDS, MAX_ROUNDS)?,
            category: fields.category()?.to_owned(),
        };
        Self::validate(&config)?;
        Ok((config, fields.seed))
    }

    /// Draw order: sample `rounds` images (a full shuffle of the pool);
    /// then, per question in order, sample three distractors from the
    /// other distinct answers (first occurrence in pool order) and shuffle
    /// `[answer, distractors..]`.
    fn setup(
        config: &Self::Config,
        content: &ContentPack,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self::State, DomainError> {
        let pool_name = format!("picture_quiz/{}", config.category);
        let pool = content.picture_quiz(&config.category)?;
        if pool.len() < OPTIONS_PER_QUESTION {
            return Err(DomainError::InsufficientContent {
                pool: pool_name,
                needed: OPTIONS_PER_QUESTION,
                available: pool.len(),
            });
        }

        let chosen = sample(&pool_name, &pool, config.rounds as usize, rng)?;

        let mut questions = Vec::with_capacity(chosen.len());
        for image in chosen {
            let mut others: Vec<String> = Vec::new();
            for candidate in pool.iter() {
                if candidate.answer != image.answer && !others.contains(&candidate.answer) {
                    others.push(candidate.answer.clone());
                }
            }
            let distractors = sample(&pool_name, &others, OPTIONS_PER_QUESTION - 1, rng)?;

            let mut options = Vec::with_capacity(OPTIONS_PER_QUESTION);
            options.push(image.answer.clone());
            options.extend(distractors);
            shuffle(&mut options, rng);

            let answer_index = options
                .iter()
                .position(|option| *option == image.answer)
                .unwrap_or_default();
            questions.push(QuizQuestion {
                image: image.image,
                options,
                answer_index,
            });
        }

        Ok(PictureQuizRound { questions })
    }
}
