use crate::reports;
use clap::Args;
use pacecalc::config::Config;
use pacecalc::feedback::Feedback;
use pacecalc::pace::PaceResult;
use pacecalc::screen::Screen;
use pacecalc::PcResult;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct PaceArgs {
    #[command(flatten)]
    pub config: Config,

    /// Distance in km; `,` or `.` as decimal separator.
    #[arg(short, long, allow_hyphen_values = true)]
    pub distance: String,

    #[arg(short = 'H', long, default_value = "", allow_hyphen_values = true)]
    pub hours: String,

    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub minutes: String,

    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub seconds: String,
}

#[derive(Serialize)]
struct PaceReport<'a> {
    result: &'a PaceResult,
    feedback: &'a Feedback,
}

pub fn run(args: PaceArgs) -> PcResult<()> {
    let mut screen = Screen::new();

    if !screen.set_distance(&args.distance) {
        warn!("Distance '{}' is not a decimal number", args.distance);
    }
    screen.set_hours(&args.hours);
    screen.set_minutes(&args.minutes);
    screen.set_seconds(&args.seconds);

    let form = screen.form();
    info!(
        "Form: distance='{}' h='{}' m='{}' s='{}'",
        form.distance, form.hours, form.minutes, form.seconds
    );

    screen.calculate()?;

    if let (Some(result), Some(feedback)) = (screen.result(), screen.feedback()) {
        if args.config.output.json {
            let report = PaceReport { result, feedback };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "{}",
                reports::pace_table(result, feedback, args.config.output.no_color)
            );
        }
    }
    Ok(())
}
