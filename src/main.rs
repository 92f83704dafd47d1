mod app;
mod calendar;
mod config;
mod dates;
mod event;
mod help;
mod jumpto;
mod logging;
mod popup;
mod resolver;
mod selection;
#[cfg(test)]
mod testutil;
mod theme;
use crate::app::App;
use crate::config::{Config, YMD_FMT};
use crate::dates::weekday_from_sunday;
use crate::event::demo_events;
use crate::selection::Selection;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{Date, OffsetDateTime, Weekday};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct RunOptions {
    date: Option<Date>,
    events_file: Option<PathBuf>,
    week_start: Option<Weekday>,
    log_dir: Option<PathBuf>,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('e') | Arg::Long("events") => {
                    opts.events_file = Some(parser.value()?.into());
                }
                Arg::Short('W') | Arg::Long("week-start") => {
                    let value = parser.value()?.string()?;
                    let n = value.parse::<u8>().ok();
                    match n.and_then(weekday_from_sunday) {
                        Some(wd) => opts.week_start = Some(wd),
                        None => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: "expected a number from 0 (Sunday) to 6 (Saturday)".into(),
                            })
                        }
                    }
                }
                Arg::Long("log-dir") => opts.log_dir = Some(parser.value()?.into()),
                Arg::Value(value) if opts.date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => opts.date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                let _logger = opts.log_dir.as_deref().map(logging::init).transpose()?;
                let config = match opts.events_file {
                    Some(ref path) => Config::load(path)?,
                    None => Config {
                        week_start: None,
                        events: demo_events(),
                    },
                };
                log::info!("loaded {} events", config.events.len());
                let week_start = opts
                    .week_start
                    .or(config.week_start)
                    .unwrap_or(Weekday::Sunday);
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let selection = Selection::new(opts.date.unwrap_or(today), week_start);
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(config.events, selection, today).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: evcal [options] [YYYY-MM-DD]");
                println!();
                println!("Terminal calendar for browsing dated events in month and week views");
                println!();
                println!("Options:");
                println!("  -e, --events FILE     Read events from the given TOML file");
                println!("  -W, --week-start N    First day of the week, from 0 (Sunday) to 6");
                println!("      --log-dir DIR     Write a log file to the given directory");
                println!("  -h, --help            Display this help message and exit");
                println!("  -V, --version         Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
