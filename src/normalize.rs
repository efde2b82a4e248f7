//! Enriches raw weather records into their application-ready shape.

use crate::types::cardinal::Cardinal;
use crate::types::response::WeatherRecord;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A caller-supplied transformation run last in the normalization pipeline.
///
/// Its return value replaces the enriched record wholesale, so it may add,
/// remove or replace fields freely.
pub type PostProcessor = Arc<dyn Fn(WeatherRecord) -> WeatherRecord + Send + Sync>;

fn epoch_to_datetime(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}

/// Attaches the derived fields to a single record: cardinal directions for
/// the wind and nearest-storm bearings, and a parsed `*DateTime` for every
/// epoch `*Time` field present. Fields absent on the input stay absent.
///
/// The post-processor, when configured, runs after enrichment and its output
/// becomes the final record.
pub(crate) fn enrich(
    mut record: WeatherRecord,
    post_processor: Option<&PostProcessor>,
) -> WeatherRecord {
    if let Some(bearing) = record.wind_bearing {
        record.wind_direction = Some(Cardinal::from_bearing(bearing));
    }
    if let Some(bearing) = record.nearest_storm_bearing {
        record.nearest_storm_direction = Some(Cardinal::from_bearing(bearing));
    }

    record.date_time = record.time.and_then(epoch_to_datetime);
    record.sunrise_date_time = record.sunrise_time.and_then(epoch_to_datetime);
    record.sunset_date_time = record.sunset_time.and_then(epoch_to_datetime);
    record.temperature_min_date_time = record.temperature_min_time.and_then(epoch_to_datetime);
    record.temperature_max_date_time = record.temperature_max_time.and_then(epoch_to_datetime);
    record.apparent_temperature_min_date_time = record
        .apparent_temperature_min_time
        .and_then(epoch_to_datetime);
    record.apparent_temperature_max_date_time = record
        .apparent_temperature_max_time
        .and_then(epoch_to_datetime);

    match post_processor {
        Some(processor) => processor(record),
        None => record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> WeatherRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn wind_bearing_gets_a_cardinal_direction() {
        let enriched = enrich(record(json!({ "windBearing": 90 })), None);
        assert_eq!(enriched.wind_direction, Some(Cardinal::E));
    }

    #[test]
    fn storm_direction_only_appears_with_a_storm_bearing() {
        let with_storm = enrich(
            record(json!({ "windBearing": 0, "nearestStormBearing": 180 })),
            None,
        );
        assert_eq!(with_storm.nearest_storm_direction, Some(Cardinal::S));

        let without_storm = enrich(record(json!({ "windBearing": 0 })), None);
        assert!(without_storm.nearest_storm_direction.is_none());
    }

    #[test]
    fn every_present_epoch_field_is_parsed() {
        let enriched = enrich(
            record(json!({
                "time": 1600000000,
                "sunriseTime": 1600000100,
                "temperatureMaxTime": 1600000200
            })),
            None,
        );
        assert_eq!(
            enriched.date_time,
            DateTime::from_timestamp(1600000000, 0)
        );
        assert_eq!(
            enriched.sunrise_date_time,
            DateTime::from_timestamp(1600000100, 0)
        );
        assert_eq!(
            enriched.temperature_max_date_time,
            DateTime::from_timestamp(1600000200, 0)
        );
        assert!(enriched.sunset_date_time.is_none());
        assert!(enriched.apparent_temperature_min_date_time.is_none());
    }

    #[test]
    fn post_processor_output_replaces_the_enriched_record() {
        let processor: PostProcessor = Arc::new(|mut record| {
            record.rest.remove("summary");
            record.rest.insert("note".to_string(), json!("processed"));
            record
        });
        let enriched = enrich(
            record(json!({ "time": 1600000000, "summary": "Clear" })),
            Some(&processor),
        );
        assert!(!enriched.rest.contains_key("summary"));
        assert_eq!(enriched.rest["note"], json!("processed"));
        // enrichment ran before the processor
        assert!(enriched.date_time.is_some());
    }
}
