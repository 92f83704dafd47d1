use crate::dates::weekday_from_sunday;
use crate::event::{Event, Subtask, DEFAULT_EVENT_COLOR};
use ratatui::style::Color;
use serde::{de::Error as _, Deserialize, Deserializer};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date, Weekday};

pub(crate) static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Contents of an events file after validation
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Config {
    pub(crate) week_start: Option<Weekday>,
    pub(crate) events: Vec<Event>,
}

impl Config {
    pub(crate) fn load(path: &Path) -> Result<Config, ConfigError> {
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let raw = toml::from_str::<RawConfig>(&src).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source: Box::new(source),
        })?;
        raw.try_into()
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read events file {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse events file {}", .path.display())]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },
    #[error("event {id:?} does not end after it starts")]
    EmptyRange { id: String },
    #[error("event id {0:?} is used more than once")]
    DuplicateEvent(String),
    #[error("subtask id {subtask:?} is used more than once in event {event:?}")]
    DuplicateSubtask { event: String, subtask: String },
    #[error("week start must be from 0 (Sunday) to 6 (Saturday), got {0}")]
    WeekStart(u8),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    week_start: Option<u8>,
    #[serde(default, rename = "event")]
    events: Vec<RawEvent>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
struct RawEvent {
    id: String,
    title: String,
    #[serde(deserialize_with = "deserialize_date")]
    start: Date,
    #[serde(default, deserialize_with = "deserialize_opt_date")]
    end: Option<Date>,
    #[serde(default, deserialize_with = "deserialize_opt_color")]
    color: Option<Color>,
    #[serde(default)]
    tags: BTreeSet<String>,
    #[serde(default, rename = "subtask")]
    subtasks: Vec<RawSubtask>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
struct RawSubtask {
    id: String,
    label: String,
    #[serde(default)]
    done: bool,
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Config, ConfigError> {
        let week_start = raw
            .week_start
            .map(|n| weekday_from_sunday(n).ok_or(ConfigError::WeekStart(n)))
            .transpose()?;
        let mut seen = HashSet::new();
        let mut events = Vec::with_capacity(raw.events.len());
        for rev in raw.events {
            if !seen.insert(rev.id.clone()) {
                return Err(ConfigError::DuplicateEvent(rev.id));
            }
            events.push(Event::try_from(rev)?);
        }
        Ok(Config { week_start, events })
    }
}

impl TryFrom<RawEvent> for Event {
    type Error = ConfigError;

    fn try_from(raw: RawEvent) -> Result<Event, ConfigError> {
        if raw.end.is_some_and(|end| end <= raw.start) {
            return Err(ConfigError::EmptyRange { id: raw.id });
        }
        let mut seen = HashSet::new();
        let mut subtasks = Vec::with_capacity(raw.subtasks.len());
        for st in raw.subtasks {
            if !seen.insert(st.id.clone()) {
                return Err(ConfigError::DuplicateSubtask {
                    event: raw.id,
                    subtask: st.id,
                });
            }
            subtasks.push(Subtask::new(st.id, st.label, st.done));
        }
        Ok(Event {
            id: raw.id,
            title: raw.title,
            start: raw.start,
            end: raw.end,
            color: raw.color.unwrap_or(DEFAULT_EVENT_COLOR),
            tags: raw.tags,
            subtasks,
        })
    }
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
    let s = String::deserialize(deserializer)?;
    Date::parse(&s, &YMD_FMT)
        .map_err(|e| D::Error::custom(format!("invalid date {s:?}, expected YYYY-MM-DD: {e}")))
}

fn deserialize_opt_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Date>, D::Error> {
    deserialize_date(deserializer).map(Some)
}

fn deserialize_opt_color<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Color>, D::Error> {
    let s = String::deserialize(deserializer)?;
    Color::from_str(&s)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("invalid color {s:?}")))
}
