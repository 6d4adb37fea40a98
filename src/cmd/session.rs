use crate::reports;
use clap::Args;
use pacecalc::config::Config;
use pacecalc::consts::ALERT_TITLE;
use pacecalc::screen::{Mode, Panel, Screen, PACE_DESCRIPTION, PACE_TITLE};
use pacecalc::{PaceCalcError, PcResult};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumString};
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    #[command(flatten)]
    pub config: Config,

    /// Do not print the `> ` prompt.
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
enum Action {
    #[strum(serialize = "mode", serialize = "aba")]
    Mode,
    #[strum(serialize = "distance", serialize = "d")]
    Distance,
    #[strum(serialize = "hours", serialize = "h")]
    Hours,
    #[strum(serialize = "minutes", serialize = "m")]
    Minutes,
    #[strum(serialize = "seconds", serialize = "s")]
    Seconds,
    #[strum(serialize = "calc", serialize = "calcular")]
    Calculate,
    #[strum(serialize = "clear", serialize = "limpar")]
    Clear,
    #[strum(serialize = "show")]
    Show,
    #[strum(serialize = "help", serialize = "?")]
    Help,
    #[strum(serialize = "quit", serialize = "exit", serialize = "sair")]
    Quit,
}

const HELP: &str = "\
commands:
  mode <pace|time|table>   switch tab (clears everything)
  distance <km>            edit distance, e.g. 10 or 5,5
  hours|minutes|seconds <n>
  calc | calcular          compute the pace
  clear | limpar           reset all fields
  show                     redraw the screen
  quit | sair";

/// Runs the line-driven screen until EOF or `quit`. Validation problems are
/// reported inline and never end the session.
pub fn run<R: BufRead, W: Write>(args: SessionArgs, input: R, mut out: W) -> PcResult<()> {
    let no_color = args.config.output.no_color;
    let mut screen = Screen::new();

    render(&screen, &mut out, no_color)?;

    let mut lines = input.lines();
    loop {
        if !args.quiet {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let action = match Action::from_str(word) {
            Ok(action) => action,
            Err(_) => {
                let err = PaceCalcError::UnknownCommand(word.to_string());
                writeln!(out, "{} (try 'help')", err)?;
                continue;
            }
        };
        debug!("Session action {} '{}'", action, rest);

        match action {
            Action::Quit => break,
            Action::Help => writeln!(out, "{}", HELP)?,
            Action::Show => render(&screen, &mut out, no_color)?,
            Action::Mode => match Mode::from_str(rest) {
                Ok(mode) => {
                    screen.switch_mode(mode);
                    render(&screen, &mut out, no_color)?;
                }
                Err(_) => {
                    let known: Vec<String> = Mode::iter().map(|m| m.to_string()).collect();
                    writeln!(out, "unknown mode '{}' ({})", rest, known.join("|"))?;
                }
            },
            Action::Clear => {
                screen.clear();
                writeln!(out, "cleared")?;
            }
            _ if screen.mode() != Mode::Pace => {
                render(&screen, &mut out, no_color)?;
            }
            Action::Distance => {
                if screen.set_distance(rest) {
                    writeln!(out, "distance = {}", screen.form().distance)?;
                } else {
                    writeln!(
                        out,
                        "distance '{}' ignored, still '{}'",
                        rest,
                        screen.form().distance
                    )?;
                }
            }
            Action::Hours => {
                screen.set_hours(rest);
                writeln!(out, "hours = {}", screen.form().hours)?;
            }
            Action::Minutes => {
                screen.set_minutes(rest);
                writeln!(out, "minutes = {}", screen.form().minutes)?;
            }
            Action::Seconds => {
                screen.set_seconds(rest);
                writeln!(out, "seconds = {}", screen.form().seconds)?;
            }
            Action::Calculate => {
                if let Err(e) = screen.calculate() {
                    writeln!(out, "{}: {}", ALERT_TITLE, e)?;
                    continue;
                }
                if let (Some(result), Some(feedback)) = (screen.result(), screen.feedback()) {
                    writeln!(out, "{}", reports::pace_table(result, feedback, no_color))?;
                }
            }
        }
    }

    Ok(())
}

fn render<W: Write>(screen: &Screen, out: &mut W, no_color: bool) -> PcResult<()> {
    let tabs: Vec<String> = Mode::iter()
        .map(|m| {
            if m == screen.mode() {
                format!("[{}]", m.tab_label())
            } else {
                m.tab_label().to_string()
            }
        })
        .collect();
    writeln!(out, "{}", tabs.join("  "))?;

    match screen.panel() {
        Panel::Pace {
            form,
            result,
            feedback,
        } => {
            writeln!(out, "{}\n{}", PACE_TITLE, PACE_DESCRIPTION)?;
            writeln!(out, "{}", reports::form_table(form))?;
            if let (Some(result), Some(feedback)) = (result, feedback) {
                writeln!(out, "{}", reports::pace_table(result, feedback, no_color))?;
            }
        }
        Panel::ComingSoon { message, .. } => writeln!(out, "{}", message)?,
    }
    Ok(())
}
