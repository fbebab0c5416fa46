//! The "how well do you know me" quiz and the valentine ask prompt.
//!
//! Ports the quiz grading and the yes/no button escalation from
//! `script.js`. Grading is pure; the ask prompt is a tiny state machine
//! counting how often "No" has been teased.

use crate::rng::GameRng;
use serde::Serialize;

/// Expected answers, by form field.
pub const COLOR_KEY: &str = "blue";
pub const FOOD_KEY: &str = "your-food";
pub const PERSON_KEY: &str = "you";

/// How far the dodging No button may jump on each axis, in px.
pub const DODGE_SPAN_PX: f32 = 200.0;

/// How long the No button stays displaced before snapping back, in ms.
pub const DODGE_RESET_MS: u32 = 300;

/// No interactions tolerated before the No button gives up and hides.
pub const NO_GIVE_UP_COUNT: u32 = 3;

/// How long the Yes button holds its click pulse before snapping back, in ms.
pub const YES_PULSE_MS: u32 = 200;

/// Font size of the Yes button once the No button has given up, in rem.
pub const YES_FINAL_FONT_REM: f32 = 1.3;

/// How a quiz submission graded.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// At least one question left unanswered.
    Incomplete,
    /// 0 or 1 correct.
    Miss,
    /// 2 correct.
    Close,
    /// All 3 correct.
    Perfect,
}

/// Result of grading one quiz submission.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct QuizOutcome {
    pub score: u8,
    pub verdict: Verdict,
    pub message: String,
    /// True when the submission reveals the valentine ask section.
    pub reveal_ask: bool,
}

impl QuizOutcome {
    /// CSS class for the result line, `None` for incomplete submissions.
    pub fn css_class(&self) -> Option<&'static str> {
        match self.verdict {
            Verdict::Perfect | Verdict::Close => Some("good"),
            Verdict::Miss => Some("bad"),
            Verdict::Incomplete => None,
        }
    }
}

/// Grade a submission. Any missing answer short-circuits to
/// [`Verdict::Incomplete`] without revealing the ask section; otherwise
/// one point per matching answer.
pub fn grade(color: Option<&str>, food: Option<&str>, person: Option<&str>) -> QuizOutcome {
    let (Some(color), Some(food), Some(person)) = (color, food, person) else {
        return QuizOutcome {
            score: 0,
            verdict: Verdict::Incomplete,
            message: "Answer all three questions first, mister/missy \u{1f60f}".to_string(),
            reveal_ask: false,
        };
    };

    let score = [color == COLOR_KEY, food == FOOD_KEY, person == PERSON_KEY]
        .iter()
        .filter(|&&correct| correct)
        .count() as u8;

    let (verdict, message) = match score {
        3 => (
            Verdict::Perfect,
            "3/3 \u{2014} you know me too well. I guess you\u{2019}re stuck with me forever now. \u{1f496}".to_string(),
        ),
        2 => (
            Verdict::Close,
            "2/3 \u{2014} not bad, I\u{2019}ll tease you about the one you missed later. \u{1f609}".to_string(),
        ),
        _ => (
            Verdict::Miss,
            format!("{}/3 \u{2014} wow, someone needs to take me on more dates and pay attention!", score),
        ),
    };

    QuizOutcome {
        score,
        verdict,
        message,
        reveal_ask: true,
    }
}

/// A random jump of the No button.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct Dodge {
    pub dx_px: f32,
    pub dy_px: f32,
}

/// What the response line and buttons should show after an interaction.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct AskResponse {
    pub message: &'static str,
    pub color: &'static str,
    /// True once the No button should disappear for good.
    pub hide_no: bool,
    /// Scale the host applies to the Yes button: a brief 1.1 pulse on a
    /// Yes click, a lasting 1.2 once the No button gives up.
    pub yes_scale: f32,
}

/// The yes/no prompt. Every hover or click on "No" raises the count;
/// past [`NO_GIVE_UP_COUNT`] the button stops dodging and hides.
pub struct AskPrompt {
    no_count: u32,
}

impl AskPrompt {
    pub fn new() -> Self {
        Self { no_count: 0 }
    }

    pub fn no_count(&self) -> u32 {
        self.no_count
    }

    /// Hovering "No": while the give-up count has not been reached the
    /// button jumps away by up to half the span on each axis.
    pub fn on_no_hover(&mut self, rng: &mut GameRng) -> Option<Dodge> {
        self.no_count += 1;
        if self.no_count < NO_GIVE_UP_COUNT {
            Some(Dodge {
                dx_px: rng.unit_f32() * DODGE_SPAN_PX - DODGE_SPAN_PX / 2.0,
                dy_px: rng.unit_f32() * DODGE_SPAN_PX - DODGE_SPAN_PX / 2.0,
            })
        } else {
            None
        }
    }

    /// Clicking "No": teasing retry first, then the button gives up.
    pub fn on_no_click(&mut self) -> AskResponse {
        self.no_count += 1;
        if self.no_count < NO_GIVE_UP_COUNT {
            AskResponse {
                message: "Are you sure? Try again! \u{1f60a}",
                color: "#ff2d75",
                hide_no: false,
                yes_scale: 1.0,
            }
        } else {
            AskResponse {
                message: "Nice try, but you have to say Yes! \u{1f495}",
                color: "#ff4b91",
                hide_no: true,
                yes_scale: 1.2,
            }
        }
    }

    /// Clicking "Yes" always works, at any count. The returned scale is
    /// a pulse the host reverts after [`YES_PULSE_MS`].
    pub fn on_yes(&self) -> AskResponse {
        AskResponse {
            message: "Yay! You made me the happiest person today! \u{1f495}\u{1f496}\u{1f495}",
            color: "#1b8f44",
            hide_no: false,
            yes_scale: 1.1,
        }
    }
}

impl Default for AskPrompt {
    fn default() -> Self {
        Self::new()
    }
}
