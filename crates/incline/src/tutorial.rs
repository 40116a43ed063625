//! Guided-learning walkthrough.
//!
//! A headless state machine over six linear steps. Steps 1 to 5 each pose
//! one or two multiple-choice questions; a step can only be left once all of
//! its questions are answered correctly. Step 6 is free play.
//!
//! Some transitions write back into the parameter set: every call that can
//! change the scenario returns a [`ParameterUpdate`] for the caller to apply
//! with [`ParameterSet::apply`](incline_core::params::ParameterSet::apply).
//!
//! # Example
//!
//! ```
//! # use incline::tutorial::GuidedLearning;
//! # use incline_core::params::{MotionDirection, ParameterSet};
//! let mut tutorial = GuidedLearning::new();
//! let mut params = ParameterSet::default();
//!
//! let feedback = tutorial.answer("step1-q1", "upward").unwrap();
//! assert!(feedback.correct());
//!
//! tutorial.advance();
//! tutorial.answer("step2", "left").unwrap();
//! let update = tutorial.advance().unwrap();
//! params = params.apply(&update);
//!
//! assert_eq!(tutorial.step(), 3);
//! assert!(params.tension_enabled());
//! assert_eq!(params.motion_direction(), MotionDirection::UpSlope);
//! ```

use std::collections::BTreeSet;

use log::{debug, info};
use thiserror::Error;

use incline_core::params::{MotionDirection, ParameterSet, ParameterUpdate};

/// First step of the walkthrough.
pub const FIRST_STEP: u8 = 1;

/// Free-play step reached after the last question.
pub const FINAL_STEP: u8 = 6;

/// Errors raised by invalid tutorial interactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TutorialError {
    #[error("question `{question}` is not active on step {step}")]
    QuestionNotActive { question: String, step: u8 },

    #[error("question `{question}` has no choice `{choice}`")]
    UnknownChoice { question: String, choice: String },
}

/// One answer option of a [`Question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    id: &'static str,
    label: &'static str,
    correct: bool,
    feedback: &'static str,
}

impl Choice {
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_correct(&self) -> bool {
        self.correct
    }
}

/// A multiple-choice question posed on one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    id: &'static str,
    step: u8,
    prompt: &'static str,
    /// Question that must be answered before this one is shown.
    requires: Option<&'static str>,
    choices: [Choice; 2],
}

impl Question {
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == id)
    }
}

const fn choice(
    id: &'static str,
    label: &'static str,
    correct: bool,
    feedback: &'static str,
) -> Choice {
    Choice {
        id,
        label,
        correct,
        feedback,
    }
}

const QUESTIONS: [Question; 7] = [
    Question {
        id: "step1-q1",
        step: 1,
        prompt: "On a flat surface, what is the direction of the Normal Reaction Force R_N?",
        requires: None,
        choices: [
            choice(
                "upward",
                "Vertically Upward",
                true,
                "Correct! On a flat surface, R_N points vertically upward, perpendicular to the surface.",
            ),
            choice(
                "parallel",
                "Parallel to Surface",
                false,
                "Not quite. 'Parallel to surface' would mean horizontal. Normal means perpendicular. Try again.",
            ),
        ],
    },
    Question {
        id: "step2",
        step: 2,
        prompt: "The block is about to move right. What is the direction of the friction force (F_f)?",
        requires: None,
        choices: [
            choice(
                "left",
                "Opposite (Left)",
                true,
                "Correct! Friction always opposes the impending motion. The block wants to move right, so friction pulls left.",
            ),
            choice(
                "right",
                "Same (Right)",
                false,
                "Not quite. Friction opposes motion. Try again.",
            ),
        ],
    },
    Question {
        id: "step3-q1",
        step: 3,
        prompt: "What is the direction of the Weight (Mg)?",
        requires: None,
        choices: [
            choice(
                "down",
                "Vertically Down",
                true,
                "Correct! Weight (Mg) always acts vertically down, towards the center of the Earth, regardless of the incline.",
            ),
            choice(
                "perpendicular",
                "Perpendicular",
                false,
                "Not quite. That's the direction of the Normal Force. Weight always points straight down. Try again.",
            ),
        ],
    },
    Question {
        id: "step3-q2",
        step: 3,
        prompt: "What is the direction of the Normal Force (R_N)?",
        requires: Some("step3-q1"),
        choices: [
            choice(
                "perpendicular",
                "Perpendicular",
                true,
                "Perfect! The Normal Force (R_N) is always perpendicular to the surface that provides the support.",
            ),
            choice(
                "vertical",
                "Vertically Up",
                false,
                "Not quite. The Normal Force must be perpendicular (or 'normal') to the surface. Try again.",
            ),
        ],
    },
    Question {
        id: "step4-q1",
        step: 4,
        prompt: "When do we need to split (resolve) the Weight into x- and y-components?",
        requires: None,
        choices: [
            choice(
                "incline",
                "When θ ≠ 0° (Incline)",
                true,
                "Correct! Only when axes are not aligned with the force, e.g. on an inclined plane (θ ≠ 0°) or using rotated axes.",
            ),
            choice(
                "always",
                "Always",
                false,
                "Not quite. On a flat surface (θ = 0°) Mg already aligns with the y-axis. No need to resolve. Try again.",
            ),
        ],
    },
    Question {
        id: "step4-q2",
        step: 4,
        prompt: "Which component of weight does the Normal Force (R_N) balance?",
        requires: Some("step4-q1"),
        choices: [
            choice(
                "cos",
                "Mg·cos(θ)",
                true,
                "Exactly! R_N balances Mg·cos(θ), the perpendicular component.",
            ),
            choice(
                "sin",
                "Mg·sin(θ)",
                false,
                "Not quite. Mg·sin(θ) lies along the plane (x'). R_N is perpendicular (y'). Try again.",
            ),
        ],
    },
    Question {
        id: "step5",
        step: 5,
        prompt: "To prevent the block from sliding down, what direction must the friction force (F_f) act?",
        requires: None,
        choices: [
            choice(
                "up",
                "Up the Incline",
                true,
                "You got it! The block wants to slide down due to Mg·sin(θ), so the friction force (F_f) must act up the incline to oppose it.",
            ),
            choice(
                "down",
                "Down the Incline",
                false,
                "Not quite. Remember, friction opposes impending motion. The block is about to slide down. Try again.",
            ),
        ],
    },
];

/// Result of answering a question.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    correct: bool,
    message: &'static str,
    update: ParameterUpdate,
}

impl Feedback {
    pub fn correct(&self) -> bool {
        self.correct
    }

    /// Text to show the learner.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Parameter changes triggered by the answer; empty for most answers.
    pub fn update(&self) -> &ParameterUpdate {
        &self.update
    }
}

/// Progress through the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidedLearning {
    step: u8,
    answered: BTreeSet<&'static str>,
}

impl Default for GuidedLearning {
    fn default() -> Self {
        Self {
            step: FIRST_STEP,
            answered: BTreeSet::new(),
        }
    }
}

impl GuidedLearning {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step, `1..=6`.
    pub fn step(&self) -> u8 {
        self.step
    }

    /// Heading of the current step.
    pub fn title(&self) -> &'static str {
        match self.step {
            1 => "Flat Surface Basics",
            2 => "Flat Surface (Friction)",
            3 => "Inclined Plane",
            4 => "When & How to Resolve Weight",
            5 => "Equilibrium on Incline",
            _ => "Module Complete",
        }
    }

    pub fn is_answered(&self, question: &str) -> bool {
        self.answered.contains(question)
    }

    /// Returns `true` once the free-play step is reached.
    pub fn is_complete(&self) -> bool {
        self.step >= FINAL_STEP
    }

    /// Unanswered questions that can be answered right now.
    pub fn active_questions(&self) -> impl Iterator<Item = &'static Question> + '_ {
        QUESTIONS.iter().filter(|question| self.is_active(question))
    }

    fn is_active(&self, question: &Question) -> bool {
        question.step == self.step
            && !self.is_answered(question.id)
            && question
                .requires
                .is_none_or(|required| self.is_answered(required))
    }

    fn step_finished(&self) -> bool {
        QUESTIONS
            .iter()
            .filter(|question| question.step == self.step)
            .all(|question| self.is_answered(question.id))
    }

    /// Answers `question_id` with `choice_id`.
    ///
    /// A correct answer marks the question answered. Answering the second
    /// question of step 3 moves on to step 4 directly, and the step 5 answer
    /// switches the scenario to impending down-slope motion.
    ///
    /// # Errors
    ///
    /// [`TutorialError::QuestionNotActive`] if the question is unknown, not
    /// on the current step, already answered, or still waiting for its
    /// prerequisite; [`TutorialError::UnknownChoice`] if the choice does not
    /// belong to the question.
    pub fn answer(&mut self, question_id: &str, choice_id: &str) -> Result<Feedback, TutorialError> {
        let question = QUESTIONS
            .iter()
            .find(|question| question.id == question_id)
            .filter(|question| self.is_active(question))
            .ok_or_else(|| TutorialError::QuestionNotActive {
                question: question_id.to_string(),
                step: self.step,
            })?;

        let choice = question
            .choice(choice_id)
            .ok_or_else(|| TutorialError::UnknownChoice {
                question: question_id.to_string(),
                choice: choice_id.to_string(),
            })?;

        debug!(question = question.id, choice = choice.id, correct = choice.correct; "Question answered");

        let mut update = ParameterUpdate::new();
        if choice.correct {
            self.answered.insert(question.id);

            match question.id {
                "step3-q2" => self.enter_step(4),
                "step5" => update = update.with_motion_direction(MotionDirection::DownSlope),
                _ => {}
            }
        }

        Ok(Feedback {
            correct: choice.correct,
            message: choice.feedback,
            update,
        })
    }

    /// Moves to the next step if every question of the current one is
    /// answered.
    ///
    /// Returns the parameter changes that come with the transition, or
    /// `None` if the tutorial cannot advance. Leaving step 2 enables tension
    /// and sets impending up-slope motion.
    pub fn advance(&mut self) -> Option<ParameterUpdate> {
        if self.is_complete() || !self.step_finished() {
            return None;
        }

        let update = if self.step == 2 {
            ParameterUpdate::new()
                .with_tension_enabled(true)
                .with_motion_direction(MotionDirection::UpSlope)
        } else {
            ParameterUpdate::new()
        };

        self.enter_step(self.step + 1);
        Some(update)
    }

    /// Contextual hint for the current parameters, if any.
    pub fn hint(&self, params: &ParameterSet) -> Option<String> {
        if self.step == FIRST_STEP && params.angle() != 0.0 {
            return Some(format!(
                "Current angle is {}°. Set it to 0° in Controls → Angle slider.",
                params.angle()
            ));
        }
        None
    }

    /// Starts over from step 1 with nothing answered.
    pub fn reset(&mut self) {
        info!("Tutorial reset");
        *self = Self::default();
    }

    fn enter_step(&mut self, step: u8) {
        self.step = step.min(FINAL_STEP);
        info!(step = self.step; "Tutorial step entered");
    }
}
