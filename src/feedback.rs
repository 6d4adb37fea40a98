use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// Qualitative buckets for a pace, fastest first.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Elite,
    Advanced,
    Intermediate,
    Beginner,
    Encouragement,
}

impl FeedbackTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Elite => "Pace de elite! 🏆",
            Self::Advanced => "Pace avançado! 💪",
            Self::Intermediate => "Pace intermediário! 👏",
            Self::Beginner => "Pace iniciante! 🎯",
            Self::Encouragement => "Continue treinando! 🚀",
        }
    }

    /// Badge color as a hex string. The last tier carries an alpha channel.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Elite => "#A73E12",
            Self::Advanced => "#D9591E",
            Self::Intermediate => "#EC7A42",
            Self::Beginner => "#F29A6A",
            Self::Encouragement => "#f2aa3d3d",
        }
    }

    /// Exclusive upper bound of the bucket, in minutes per km.
    /// `None` for the open-ended last tier.
    pub fn upper_bound_minutes(&self) -> Option<f64> {
        match self {
            Self::Elite => Some(4.0),
            Self::Advanced => Some(5.0),
            Self::Intermediate => Some(6.0),
            Self::Beginner => Some(8.0),
            Self::Encouragement => None,
        }
    }

    /// Decodes `color()` into RGB, dropping any alpha byte.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.color().trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub tier: FeedbackTier,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<FeedbackTier> for Feedback {
    fn from(tier: FeedbackTier) -> Self {
        Self {
            tier,
            label: tier.label(),
            color: tier.color(),
        }
    }
}

/// Buckets a pace given in seconds per km. Each bucket's lower bound is
/// inclusive: exactly 4:00/km is `Advanced`, not `Elite`.
pub fn classify_feedback(pace_seconds: f64) -> Feedback {
    let minutes = pace_seconds / 60.0;

    let tier = if minutes < 4.0 {
        FeedbackTier::Elite
    } else if minutes < 5.0 {
        FeedbackTier::Advanced
    } else if minutes < 6.0 {
        FeedbackTier::Intermediate
    } else if minutes < 8.0 {
        FeedbackTier::Beginner
    } else {
        FeedbackTier::Encouragement
    };

    tier.into()
}
