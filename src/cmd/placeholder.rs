use clap::Args;
use pacecalc::config::Config;
use pacecalc::screen::{Mode, Panel, Screen};
use pacecalc::PcResult;
use serde_json::json;

#[derive(Args, Debug, Clone)]
pub struct PlaceholderArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(mode: Mode, args: PlaceholderArgs) -> PcResult<()> {
    let mut screen = Screen::new();
    screen.switch_mode(mode);

    if let Panel::ComingSoon { mode, message } = screen.panel() {
        if args.config.output.json {
            let body = json!({ "mode": mode, "message": message });
            println!("{}", serde_json::to_string_pretty(&body)?);
        } else {
            println!("[{}] {}", mode.tab_label(), message);
        }
    }
    Ok(())
}
