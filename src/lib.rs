pub mod config;
pub mod consts;
pub mod error;
pub mod feedback;
pub mod input;
pub mod pace;
pub mod screen;

pub use error::{PaceCalcError, PaceError, PcResult};
pub use feedback::{classify_feedback, Feedback, FeedbackTier};
pub use pace::{calculate_pace, format_pace, PaceResult};
pub use screen::{Mode, Panel, Screen};
