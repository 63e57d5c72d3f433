//! Library steps: `set_pages`, `set_duration`.
//!
//! Entities carry a `kind`: `book`, `paper` or `audio`.

use std::io::Write;

use anyhow::bail;
use serde::Serialize;
use serde_json::Value;

use labkit_core::{DomainError, DomainResult, Fields, ShowInfo, ValidatedEntity};
use labkit_library::{AudioBook, Book, PaperBook};

use crate::scenario::{Scenario, common_step};

/// Any book a scenario can declare.
#[derive(Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Volume {
    Book(Book),
    Paper(PaperBook),
    Audio(AudioBook),
}

impl Volume {
    pub fn from_json(value: &Value) -> DomainResult<Self> {
        let fields = Fields::from_value("volume", value)?;
        match fields.text("kind")? {
            "book" => Book::from_fields(&fields).map(Volume::Book),
            "paper" => PaperBook::from_fields(&fields).map(Volume::Paper),
            "audio" => AudioBook::from_fields(&fields).map(Volume::Audio),
            other => Err(DomainError::validation(format!(
                "unknown book kind `{other}` (expected `book`, `paper` or `audio`)"
            ))),
        }
    }
}

impl ShowInfo for Volume {}

impl core::fmt::Display for Volume {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Volume::Book(b) => core::fmt::Display::fmt(b, f),
            Volume::Paper(b) => core::fmt::Display::fmt(b, f),
            Volume::Audio(b) => core::fmt::Display::fmt(b, f),
        }
    }
}

impl core::fmt::Debug for Volume {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Volume::Book(b) => core::fmt::Debug::fmt(b, f),
            Volume::Paper(b) => core::fmt::Debug::fmt(b, f),
            Volume::Audio(b) => core::fmt::Debug::fmt(b, f),
        }
    }
}

pub fn run(scenario: &Scenario, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut shelf = scenario.roster(Volume::from_json)?;

    scenario.for_each_step(|op, fields| {
        if common_step(op, fields, &shelf, out)? {
            return Ok(());
        }
        match op {
            "set_pages" | "set_duration" => {
                let name = fields.text("entity")?;
                match (op, shelf.get_mut(name)?) {
                    ("set_pages", Volume::Paper(book)) => book.set_pages(fields.integer("value")?)?,
                    ("set_duration", Volume::Audio(book)) => {
                        book.set_duration(fields.number("value")?)?
                    }
                    _ => bail!("`{name}` has no such attribute for `{op}`"),
                }
            }
            other => bail!("unknown library step `{other}`"),
        }
        Ok(())
    })
}
