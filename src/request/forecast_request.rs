//! The per-call parameter accumulator for a forecast or time-machine request.

use crate::types::block::Block;
use crate::types::language::Language;
use crate::units::UnitSystem;
use chrono::{DateTime, Utc};

/// Canonical pattern for the time-machine instant in the URL path.
pub(crate) const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accumulates the parameters of a single request.
///
/// Every setter takes `impl Into<Option<T>>` and is a no-op on `None`, so
/// callers can thread possibly-absent values through without special-casing.
/// Enum validation happens one layer up in the facade; this type stores what
/// it is given verbatim.
///
/// A request is immutable once handed to [`Requester::fetch`]; the facade
/// builds a fresh one per call from its persistent configuration.
///
/// [`Requester::fetch`]: crate::Requester::fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastRequest {
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
    pub(crate) instant: Option<String>,
    pub(crate) units: Option<UnitSystem>,
    pub(crate) language: Option<Language>,
    pub(crate) exclude: Vec<Block>,
    pub(crate) extend_hourly: bool,
}

impl ForecastRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latitude(mut self, value: impl Into<Option<f64>>) -> Self {
        if let Some(latitude) = value.into() {
            self.latitude = Some(latitude);
        }
        self
    }

    pub fn longitude(mut self, value: impl Into<Option<f64>>) -> Self {
        if let Some(longitude) = value.into() {
            self.longitude = Some(longitude);
        }
        self
    }

    /// Formats the instant to the canonical `YYYY-MM-DDTHH:mm:ss` pattern
    /// used in the time-machine URL path.
    pub fn instant(mut self, value: impl Into<Option<DateTime<Utc>>>) -> Self {
        if let Some(instant) = value.into() {
            self.instant = Some(instant.format(INSTANT_FORMAT).to_string());
        }
        self
    }

    pub fn units(mut self, value: impl Into<Option<UnitSystem>>) -> Self {
        if let Some(units) = value.into() {
            self.units = Some(units);
        }
        self
    }

    pub fn language(mut self, value: impl Into<Option<Language>>) -> Self {
        if let Some(language) = value.into() {
            self.language = Some(language);
        }
        self
    }

    /// No-op on `None` and on an empty list.
    pub fn exclude(mut self, value: impl Into<Option<Vec<Block>>>) -> Self {
        if let Some(blocks) = value.into() {
            if !blocks.is_empty() {
                self.exclude = blocks;
            }
        }
        self
    }

    /// No-op on `false`, matching the other setters: an unset flag never
    /// clears a previously requested extension.
    pub fn extend_hourly(mut self, extend: bool) -> Self {
        if extend {
            self.extend_hourly = true;
        }
        self
    }
}
