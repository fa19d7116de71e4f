use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Score, Term, User},
        dto::{
            request::{CheckAnswerRequest, QuizParams, SaveScoreRequest},
            response::{AnswerResult, QuizQuestion, QuizResponse},
        },
    },
    repositories::{ScoreRepository, TermRepository},
};

/// Samples `min(count, terms.len())` distinct terms and strips each down to
/// what the player may see.
pub fn draw_questions(terms: &[Term], count: usize) -> AppResult<Vec<QuizQuestion>> {
    draw_questions_with_rng(terms, count, &mut rand::thread_rng())
}

pub fn draw_questions_with_rng<R: Rng + ?Sized>(
    terms: &[Term],
    count: usize,
    rng: &mut R,
) -> AppResult<Vec<QuizQuestion>> {
    if terms.is_empty() {
        return Err(AppError::NoContent("No terms available".to_string()));
    }

    let questions = terms
        .choose_multiple(rng, count.min(terms.len()))
        .map(QuizQuestion::from)
        .collect();

    Ok(questions)
}

/// Case-insensitive comparison ignoring surrounding whitespace.
pub fn answers_match(expected: &str, given: &str) -> bool {
    expected.trim().to_lowercase() == given.trim().to_lowercase()
}

pub fn check_answer_against(term: &Term, answer: &str) -> AnswerResult {
    AnswerResult {
        correct: answers_match(&term.term, answer),
        correct_answer: term.term.clone(),
        real_world: term.real_world.clone(),
    }
}

pub struct QuizService {
    terms: Arc<dyn TermRepository>,
    scores: Arc<dyn ScoreRepository>,
}

impl QuizService {
    pub fn new(terms: Arc<dyn TermRepository>, scores: Arc<dyn ScoreRepository>) -> Self {
        Self { terms, scores }
    }

    pub async fn random_quiz(&self, params: QuizParams) -> AppResult<QuizResponse> {
        params.validate()?;

        let terms = self.terms.find_all().await?;
        let questions = draw_questions(&terms, params.count())?;

        Ok(QuizResponse {
            total: questions.len() as i32,
            questions,
        })
    }

    pub async fn check_answer(&self, request: CheckAnswerRequest) -> AppResult<AnswerResult> {
        request.validate()?;

        let term = self
            .terms
            .find_by_id(&request.term_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Term not found".to_string()))?;

        Ok(check_answer_against(&term, &request.user_answer))
    }

    pub async fn record_score(&self, user: &User, request: SaveScoreRequest) -> AppResult<Score> {
        request.validate()?;

        let score = Score::new(&user.id, request.correct, request.total);
        let score = self.scores.create(score).await?;

        log::info!(
            "Recorded score {}/{} for '{}'",
            score.correct,
            score.total,
            user.username
        );
        Ok(score)
    }

    pub async fn score_history(&self, user: &User) -> AppResult<Vec<Score>> {
        self.scores.find_by_user(&user.id).await
    }
}
