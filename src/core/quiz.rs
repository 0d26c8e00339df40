use rand::Rng;

use super::models::{
    Record,
    DIETS,
    PERIODS,
};

/// Questions drawn per session.
pub const SESSION_LENGTH: usize = 5;

/// Options kept on a candidate before the correct answer is merged back in
/// at display time.
const STORED_OPTIONS: usize = 3;

#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: String,
    pub correct: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// What the quiz dialog should render after an advance.
#[derive(Debug)]
pub enum Step<'a> {
    Question { index: usize, question: &'a Question },
    Summary { score: u32, total: usize },
}

/// One quiz run, from open to close. Rebuilt from scratch every time the
/// quiz is opened, so repeated opens yield different question sets.
#[derive(Debug)]
pub struct Session {
    questions: Vec<Question>,
    index: usize,
    score: u32,
    answers: Vec<Option<Verdict>>,
}

impl Session {
    pub fn new(records: &[Record], rng: &mut impl Rng) -> Self {
        let questions = sample_questions(build_pool(records, rng), rng);
        let answers = vec![None; questions.len()];
        Self { questions, index: 0, score: 0, answers }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Advances to whatever comes next: the first call shows question 0, and
    /// once the index moves past the last question every further call yields
    /// the terminal summary. Advancing is never gated on the current question
    /// having been answered.
    pub fn advance(&mut self) -> Step<'_> {
        let i = self.index;
        if i >= self.questions.len() {
            return Step::Summary { score: self.score, total: self.questions.len() };
        }

        self.index += 1;
        Step::Question { index: i, question: &self.questions[i] }
    }

    /// Records the first selection for a question and returns its verdict.
    /// Later selections for the same question are ignored and leave the
    /// score untouched.
    pub fn answer(&mut self, question: usize, choice: &str) -> Option<Verdict> {
        if question >= self.questions.len() || self.answers[question].is_some() {
            return None;
        }

        let verdict = if self.questions[question].correct == choice {
            self.score += 1;
            Verdict::Correct
        } else {
            Verdict::Wrong
        };

        self.answers[question] = Some(verdict);
        Some(verdict)
    }

    pub fn verdict(&self, question: usize) -> Option<Verdict> {
        self.answers.get(question).copied().flatten()
    }
}

/// Two candidates per record: one period question, one diet question.
pub fn build_pool(records: &[Record], rng: &mut impl Rng) -> Vec<Question> {
    let mut pool = Vec::with_capacity(records.len() * 2);

    for record in records {
        pool.push(candidate(
            format!("In which period did {} live?", record.name_primary),
            &record.period,
            &PERIODS,
            rng,
        ));
        pool.push(candidate(
            format!("What did {} eat?", record.name_primary),
            &record.diet,
            &DIETS,
            rng,
        ));
    }

    pool
}

/// Shuffles the pool and keeps a `SESSION_LENGTH` prefix. A smaller pool
/// just means a shorter session.
pub fn sample_questions(mut pool: Vec<Question>, rng: &mut impl Rng) -> Vec<Question> {
    shuffle_by_key(&mut pool, rng);
    pool.truncate(SESSION_LENGTH);
    pool
}

/// Merges the correct answer back into the stored options, dedupes, and
/// shuffles the whole set. Because truncation may have dropped the correct
/// answer from the stored three, the result has 3 or 4 entries; keeping
/// that behavior is deliberate.
pub fn displayed_options(question: &Question, rng: &mut impl Rng) -> Vec<String> {
    let mut options = unique(
        std::iter::once(question.correct.as_str())
            .chain(question.options.iter().map(String::as_str)),
    );
    shuffle_by_key(&mut options, rng);
    options
}

fn candidate(prompt: String, correct: &str, reference: &[&str], rng: &mut impl Rng) -> Question {
    let mut options = unique(std::iter::once(correct).chain(reference.iter().copied()));
    shuffle_by_key(&mut options, rng);
    options.truncate(STORED_OPTIONS);

    Question { prompt, correct: correct.to_string(), options }
}

/// Key-based shuffle: pair every element with an independent random key and
/// sort by it.
fn shuffle_by_key<T>(items: &mut Vec<T>, rng: &mut impl Rng) {
    let mut keyed: Vec<(f32, T)> = items.drain(..).map(|v| (rng.random::<f32>(), v)).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    items.extend(keyed.into_iter().map(|(_, v)| v));
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|seen| seen == value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;
    use crate::core::dataset::fallback_records;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn pool_holds_two_candidates_per_record() {
        let records = fallback_records();
        let pool = build_pool(&records, &mut rng());

        assert_eq!(pool.len(), records.len() * 2);
        for question in &pool {
            assert!(question.options.len() <= 3);
            let mut deduped = question.options.clone();
            deduped.dedup();
            assert_eq!(deduped.len(), question.options.len());
        }
    }

    #[test]
    fn session_length_is_bounded_by_pool_size() {
        let records = fallback_records();
        // 3 records -> pool of 6 -> capped at SESSION_LENGTH.
        assert_eq!(Session::new(&records, &mut rng()).len(), SESSION_LENGTH);

        // 2 records -> pool of 4 -> shorter session, no error.
        assert_eq!(Session::new(&records[..2], &mut rng()).len(), 4);

        assert!(Session::new(&[], &mut rng()).is_empty());
    }

    #[test]
    fn displayed_options_always_contain_the_correct_answer() {
        let records = fallback_records();
        let mut rng = rng();

        for question in build_pool(&records, &mut rng) {
            let shown = displayed_options(&question, &mut rng);
            assert!(shown.contains(&question.correct));
            assert!(shown.len() == 3 || shown.len() == 4);

            let mut deduped = shown.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), shown.len());
        }
    }

    #[test]
    fn first_answer_locks_and_scores() {
        let records = fallback_records();
        let mut session = Session::new(&records, &mut rng());

        let (index, correct) = match session.advance() {
            Step::Question { index, question } => (index, question.correct.clone()),
            Step::Summary { .. } => panic!("expected a question"),
        };

        assert_eq!(session.answer(index, &correct), Some(Verdict::Correct));
        assert_eq!(session.score(), 1);
        assert_eq!(session.verdict(index), Some(Verdict::Correct));

        // Re-selecting the same question never changes the score.
        assert_eq!(session.answer(index, "Omnivore"), None);
        assert_eq!(session.answer(index, &correct), None);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn wrong_answer_scores_nothing() {
        let records = fallback_records();
        let mut session = Session::new(&records, &mut rng());

        let (index, correct) = match session.advance() {
            Step::Question { index, question } => (index, question.correct.clone()),
            Step::Summary { .. } => panic!("expected a question"),
        };
        session.answer(index, &format!("not {}", correct));

        assert_eq!(session.score(), 0);
        assert_eq!(session.verdict(index), Some(Verdict::Wrong));
    }

    #[test]
    fn advancing_past_the_last_question_reaches_the_summary() {
        let records = fallback_records();
        let mut session = Session::new(&records[..2], &mut rng());
        let total = session.len();
        assert_eq!(total, 4);

        // Answering is optional: advance straight through.
        for shown in 0..total {
            match session.advance() {
                Step::Question { index, .. } => assert_eq!(index, shown),
                Step::Summary { .. } => panic!("summary arrived early"),
            }
        }

        match session.advance() {
            Step::Summary { score, total: reported } => {
                assert_eq!(reported, total);
                assert!(score as usize <= total);
            }
            Step::Question { .. } => panic!("expected the summary"),
        }

        // The terminal state is sticky.
        assert!(matches!(session.advance(), Step::Summary { .. }));
    }

    #[test]
    fn empty_collection_summarizes_immediately() {
        let mut session = Session::new(&[], &mut rng());

        match session.advance() {
            Step::Summary { score, total } => {
                assert_eq!(score, 0);
                assert_eq!(total, 0);
            }
            Step::Question { .. } => panic!("expected an immediate summary"),
        }
    }

    #[test]
    fn key_shuffle_preserves_elements() {
        let mut items: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let original = items.clone();

        shuffle_by_key(&mut items, &mut rng());
        assert_eq!(items.len(), original.len());

        let mut sorted = items.clone();
        sorted.sort();
        let mut expected = original.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}
