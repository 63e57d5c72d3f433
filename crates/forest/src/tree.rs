use serde::Serialize;

use labkit_core::{rules, BoundedQuantity, DomainResult, Fields, ShowInfo, ValidatedEntity};

/// Heights are stored in centimetres and shown in metres.
pub const HEIGHT_UNIT_DIVISOR: f64 = 100.0;

/// A tree of some kind, growing `growth_rate` per year until `max_height`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tree {
    kind: String,
    growth_rate: f64,
    height: BoundedQuantity,
}

impl Tree {
    pub fn new(
        kind: impl Into<String>,
        height: f64,
        growth_rate: f64,
        max_height: f64,
    ) -> DomainResult<Self> {
        let kind = rules::ensure_not_empty("kind", kind)?;
        let growth_rate = rules::ensure_positive("growth_rate", growth_rate)?;
        let height = rules::ensure_non_negative("height", height)?;
        let max_height = rules::ensure_non_negative("max_height", max_height)?;
        rules::ensure_at_most("height", height, "max_height", max_height)?;

        Ok(Self {
            kind,
            growth_rate,
            height: BoundedQuantity::new("height", max_height, height)?,
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn height(&self) -> f64 {
        self.height.current()
    }

    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    pub fn max_height(&self) -> f64 {
        self.height.capacity()
    }

    /// One year of growth.
    pub fn grow_once(&mut self) -> DomainResult<()> {
        self.grow(1)
    }

    /// Grow for `years` years.
    ///
    /// A year whose growth would overshoot `max_height` is skipped entirely;
    /// since the rate and the ceiling are fixed, so is every later year.
    pub fn grow(&mut self, years: i64) -> DomainResult<()> {
        let years = rules::ensure_non_negative_int("years", years)?;

        let mut grown = 0;
        while grown < years && self.height.fits(self.growth_rate) {
            self.height.add(self.growth_rate)?;
            grown += 1;
        }

        if grown < years {
            tracing::debug!(
                kind = %self.kind,
                skipped = years - grown,
                height = self.height(),
                "growth capped at max height"
            );
        }
        Ok(())
    }

    /// Height in display units (metres).
    pub fn display_height(&self) -> f64 {
        self.height() / HEIGHT_UNIT_DIVISOR
    }
}

impl ValidatedEntity for Tree {
    const KIND: &'static str = "tree";

    fn from_fields(fields: &Fields<'_>) -> DomainResult<Self> {
        let kind = rules::ensure_not_empty("kind", fields.text("kind")?)?;
        let growth_rate = rules::ensure_positive("growth_rate", fields.number("growth_rate")?)?;
        let height = rules::ensure_non_negative("height", fields.number("height")?)?;
        let max_height = fields.number("max_height")?;
        Self::new(kind, height, growth_rate, max_height)
    }
}

impl ShowInfo for Tree {}

impl core::fmt::Display for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Kind: {}\nHeight: {:.2} m.", self.kind, self.display_height())
    }
}
