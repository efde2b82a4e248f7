//! Wire types for the forecast and time-machine responses.
//!
//! Only the fields that the normalization step reads or writes are typed.
//! Everything else the API returns is retained verbatim in the flattened
//! `rest` map, so passthrough blocks (`minutely`, `hourly`, `alerts`,
//! `flags`) and unmodeled record fields survive a round trip untouched.

use crate::types::cardinal::Cardinal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single weather record: the `currently` block, or one entry of the
/// `daily` data sequence.
///
/// The `*Time` fields are epoch seconds as sent by the API. Normalization
/// adds a parsed `*DateTime` counterpart for every `*Time` field present,
/// plus cardinal directions for the wind and nearest-storm bearings. Fields
/// absent on the input stay absent on the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_bearing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_storm_bearing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_min_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_max_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apparent_temperature_min_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apparent_temperature_max_time: Option<i64>,

    // Derived during normalization, never sent by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<Cardinal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_storm_direction: Option<Cardinal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_min_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_max_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apparent_temperature_min_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apparent_temperature_max_date_time: Option<DateTime<Utc>>,

    /// Raw provider fields not modeled above (summary, icon, temperatures,
    /// precipitation, ...), retained as-is.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The `daily` block: a sequence of records plus block metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyBlock {
    pub data: Vec<WeatherRecord>,
    /// When normalization ran, not when the API generated the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The top-level response envelope.
///
/// `currently` and `daily` are normalized when present; every other block
/// passes through untouched inside `rest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Forecast {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currently: Option<WeatherRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<DailyBlock>,
    /// When normalization ran, not when the API generated the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
