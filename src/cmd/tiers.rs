use crate::reports;
use clap::Args;
use pacecalc::config::Config;
use pacecalc::feedback::{Feedback, FeedbackTier};
use pacecalc::PcResult;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct TiersArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: TiersArgs) -> PcResult<()> {
    if args.config.output.json {
        let tiers: Vec<Feedback> = FeedbackTier::iter().map(Feedback::from).collect();
        println!("{}", serde_json::to_string_pretty(&tiers)?);
    } else {
        println!("{}", reports::tier_table(args.config.output.no_color));
    }
    Ok(())
}
