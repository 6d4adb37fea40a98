//! View-model for the calculator screen.
//!
//! `Screen` owns every piece of transient state: the selected tab, the four
//! text fields and the outcome of the last successful calculation. The
//! presentation layer only forwards edits and actions and renders `panel()`.

use crate::consts::{MAX_HOURS, MAX_MINUTES, MAX_SECONDS};
use crate::error::PaceError;
use crate::feedback::{classify_feedback, Feedback};
use crate::input::{accept_distance_text, clamp_time_text};
use crate::pace::{calculate_pace, PaceResult};
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, info};

#[derive(
    Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Pace,
    Time,
    Table,
}

impl Mode {
    /// Tab caption.
    pub fn tab_label(&self) -> &'static str {
        match self {
            Self::Pace => "Pace",
            Self::Time => "Tempo",
            Self::Table => "Tabela",
        }
    }
}

pub const PACE_TITLE: &str = "Calcular Pace";
pub const PACE_DESCRIPTION: &str = "Insira a distância e o tempo para descobrir seu ritmo médio";
pub const TIME_COMING_SOON: &str = "Em breve você poderá calcular o tempo da sua prova 🚀";
pub const TABLE_COMING_SOON: &str = "Em breve a planilha km a km com estratégias de prova 🚀";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaceForm {
    pub distance: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

/// What the active tab shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel<'a> {
    Pace {
        form: &'a PaceForm,
        result: Option<&'a PaceResult>,
        feedback: Option<&'a Feedback>,
    },
    ComingSoon {
        mode: Mode,
        message: &'static str,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Screen {
    mode: Mode,
    form: PaceForm,
    result: Option<PaceResult>,
    feedback: Option<Feedback>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn form(&self) -> &PaceForm {
        &self.form
    }

    pub fn result(&self) -> Option<&PaceResult> {
        self.result.as_ref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Returns `true` when the edit was applied, `false` when the field kept
    /// its previous value.
    pub fn set_distance(&mut self, raw: &str) -> bool {
        match accept_distance_text(raw) {
            Some(text) => {
                self.form.distance = text;
                true
            }
            None => {
                debug!("Distance edit '{}' rejected", raw);
                false
            }
        }
    }

    pub fn set_hours(&mut self, raw: &str) {
        self.form.hours = clamp_time_text(raw, MAX_HOURS);
    }

    pub fn set_minutes(&mut self, raw: &str) {
        self.form.minutes = clamp_time_text(raw, MAX_MINUTES);
    }

    pub fn set_seconds(&mut self, raw: &str) {
        self.form.seconds = clamp_time_text(raw, MAX_SECONDS);
    }

    /// The "Calcular" action. On failure the previous result, if any, stays
    /// on screen and the error is handed back for display.
    pub fn calculate(&mut self) -> Result<&PaceResult, PaceError> {
        let outcome = calculate_pace(
            &self.form.distance,
            &self.form.hours,
            &self.form.minutes,
            &self.form.seconds,
        );

        match outcome {
            Ok(result) => {
                let feedback = classify_feedback(result.pace_seconds);
                info!("Calculated pace {} ({})", result.display, feedback.tier);
                self.feedback = Some(feedback);
                let stored: &PaceResult = self.result.insert(result);
                Ok(stored)
            }
            Err(e) => {
                debug!("Calculation rejected: {:?}", e);
                Err(e)
            }
        }
    }

    /// The "Limpar" action.
    pub fn clear(&mut self) {
        self.form = PaceForm::default();
        self.result = None;
        self.feedback = None;
    }

    /// Selects a tab. Always clears, even when re-selecting the current tab.
    pub fn switch_mode(&mut self, mode: Mode) {
        debug!("Switching mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.clear();
    }

    pub fn panel(&self) -> Panel<'_> {
        match self.mode {
            Mode::Pace => Panel::Pace {
                form: &self.form,
                result: self.result.as_ref(),
                feedback: self.feedback.as_ref(),
            },
            Mode::Time => Panel::ComingSoon {
                mode: Mode::Time,
                message: TIME_COMING_SOON,
            },
            Mode::Table => Panel::ComingSoon {
                mode: Mode::Table,
                message: TABLE_COMING_SOON,
            },
        }
    }
}
