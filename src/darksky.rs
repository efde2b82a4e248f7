//! This module provides the main entry point for interacting with the Dark
//! Sky API. It owns the query configuration, resolves the device position on
//! demand, dispatches the four retrieval modes and normalizes every weather
//! record in the response.

use crate::error::DarkSkyError;
use crate::normalize::{enrich, PostProcessor};
use crate::position::{LatLon, PositionProvider};
use crate::request::{Endpoint, ForecastRequest, HttpTransport, RequestError, Requester, Transport};
use crate::types::block::Block;
use crate::types::language::Language;
use crate::types::response::{DailyBlock, Forecast, WeatherRecord};
use crate::units::{UnitSystem, UnitTable};
use bon::bon;
use chrono::{DateTime, Utc};
use log::warn;
use serde_json::Value;
use std::sync::Arc;

/// The Dark Sky client facade.
///
/// Construct one with [`DarkSky::builder()`]; at least one of `api_key` or
/// `proxy` is mandatory and their absence fails the build synchronously.
/// Configuration (units, language, hourly extension, post-processor)
/// persists across calls until changed; it is read fresh for every request
/// and never reset by one.
///
/// Position readiness is a two-state machine: a facade without coordinates
/// resolves them through the configured [`PositionProvider`] on the first
/// retrieval call, stores them, and reuses them afterwards. Supplying an
/// explicit `.position(...)` to any retrieval call sets them immediately.
///
/// # Examples
///
/// ```no_run
/// # use darksky::{DarkSky, DarkSkyError, LatLon};
/// # async fn run() -> Result<(), DarkSkyError> {
/// let mut api = DarkSky::builder()
///     .api_key("your-api-key".to_string())
///     .build()?;
///
/// let current = api
///     .load_current()
///     .position(LatLon(52.52, 13.40))
///     .call()
///     .await?;
/// println!("wind from {:?}", current.wind_direction);
/// # Ok(())
/// # }
/// ```
pub struct DarkSky {
    requester: Requester,
    units: UnitSystem,
    language: Language,
    extend_hourly: bool,
    post_processor: Option<PostProcessor>,
    position: Option<LatLon>,
    position_provider: Option<Arc<dyn PositionProvider>>,
}

#[bon]
impl DarkSky {
    /// Creates a new facade.
    ///
    /// # Arguments
    ///
    /// * `.api_key(String)`: key for direct requests against the provider.
    ///   Consider a proxy instead; a key embedded client-side is visible to
    ///   anyone.
    /// * `.proxy(String)`: proxy endpoint that forwards to the provider and
    ///   keeps the key off the client. Wins over `api_key` when both are set.
    /// * `.units(UnitSystem)` / `.language(Language)`: initial response
    ///   shaping, defaulting to `us` and `en`.
    /// * `.post_processor(PostProcessor)`: transformation applied to every
    ///   normalized record, last.
    /// * `.position(LatLon)`: explicit initial coordinates.
    /// * `.position_provider(Arc<dyn PositionProvider>)`: geolocation
    ///   collaborator used when no coordinates are set.
    /// * `.transport(Arc<dyn Transport>)`: HTTP collaborator, defaulting to
    ///   [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`DarkSkyError::MissingApiKeyOrProxy`] when neither `api_key`
    /// nor `proxy` is given. This is the only synchronous failure; all later
    /// failures surface through the retrieval futures.
    #[builder]
    pub fn new(
        api_key: Option<String>,
        proxy: Option<String>,
        units: Option<UnitSystem>,
        language: Option<Language>,
        post_processor: Option<PostProcessor>,
        position: Option<LatLon>,
        position_provider: Option<Arc<dyn PositionProvider>>,
        transport: Option<Arc<dyn Transport>>,
    ) -> Result<Self, DarkSkyError> {
        let endpoint = match (api_key, proxy) {
            (_, Some(url)) => Endpoint::Proxy { url },
            (Some(api_key), None) => Endpoint::Direct { api_key },
            (None, None) => return Err(DarkSkyError::MissingApiKeyOrProxy),
        };
        let transport = transport.unwrap_or_else(|| Arc::new(HttpTransport::new()));

        Ok(Self {
            requester: Requester::new(endpoint, transport),
            units: units.unwrap_or(UnitSystem::Us),
            language: language.unwrap_or(Language::En),
            extend_hourly: false,
            post_processor,
            position,
            position_provider,
        })
    }

    /// Sets the unit system from its wire token.
    ///
    /// An unrecognized token is logged as a warning and the previous value
    /// kept; this is never fatal.
    pub fn set_units(&mut self, token: &str) -> &mut Self {
        match token.parse::<UnitSystem>() {
            Ok(units) => self.units = units,
            Err(e) => warn!("{e}"),
        }
        self
    }

    /// Sets the unit system. The typed equivalent of [`DarkSky::set_units`].
    pub fn units(&mut self, units: UnitSystem) -> &mut Self {
        self.units = units;
        self
    }

    /// Sets the response language from its wire token, with the same
    /// warn-and-keep policy as [`DarkSky::set_units`].
    pub fn set_language(&mut self, token: &str) -> &mut Self {
        match token.parse::<Language>() {
            Ok(language) => self.language = language,
            Err(e) => warn!("{e}"),
        }
        self
    }

    /// Sets the response language. The typed equivalent of
    /// [`DarkSky::set_language`].
    pub fn language(&mut self, language: Language) -> &mut Self {
        self.language = language;
        self
    }

    /// Whether forecasts return hour-by-hour data for the next 168 hours
    /// instead of the next 48. Applies to the next request.
    pub fn extend_hourly(&mut self, extend: bool) -> &mut Self {
        self.extend_hourly = extend;
        self
    }

    /// Registers a post-processor for weather records, invoked last in the
    /// normalization pipeline. Its output fully replaces the enriched
    /// record.
    pub fn post_processor(&mut self, processor: PostProcessor) -> &mut Self {
        self.post_processor = Some(processor);
        self
    }

    /// Sets the coordinates explicitly, marking the facade initialized.
    pub fn set_position(&mut self, position: LatLon) -> &mut Self {
        self.position = Some(position);
        self
    }

    /// The unit table matching the configured unit system.
    ///
    /// `auto` cannot be resolved to a fixed table because the API picks
    /// units per location; it degrades to the US table with a warning.
    pub fn response_units(&self) -> UnitTable {
        if self.units == UnitSystem::Auto {
            warn!("Can't guess units. Defaulting to Imperial");
        }
        UnitTable::for_system(self.units)
    }

    /// Gets the current conditions.
    ///
    /// Requests only the `currently` block, normalizes it and returns the
    /// single record directly.
    ///
    /// # Arguments
    ///
    /// * `.position(LatLon)`: optional explicit coordinates; without them the
    ///   stored position or the position provider is used.
    ///
    /// # Errors
    ///
    /// [`DarkSkyError::MissingPosition`] before any network access when no
    /// coordinates can be resolved, [`DarkSkyError::MissingBlock`] when the
    /// response lacks `currently`, and transport failures as
    /// [`DarkSkyError::Request`].
    #[builder]
    pub async fn load_current(
        &mut self,
        position: Option<LatLon>,
    ) -> Result<WeatherRecord, DarkSkyError> {
        let position = self.ensure_position(position).await?;
        let request = self
            .base_request(position)
            .exclude(Block::all_except(Block::Currently));
        let forecast = self.fetch_forecast(&request).await?;
        let currently = forecast
            .currently
            .ok_or(DarkSkyError::MissingBlock(Block::Currently))?;
        Ok(enrich(currently, self.post_processor.as_ref()))
    }

    /// Gets the forecasted week of weather.
    ///
    /// Requests only the `daily` block, normalizes every record in its data
    /// sequence, stamps the block with `updatedDateTime` and returns it.
    #[builder]
    pub async fn load_forecast(
        &mut self,
        position: Option<LatLon>,
    ) -> Result<DailyBlock, DarkSkyError> {
        let position = self.ensure_position(position).await?;
        let request = self
            .base_request(position)
            .exclude(Block::all_except(Block::Daily))
            .extend_hourly(self.extend_hourly);
        let forecast = self.fetch_forecast(&request).await?;
        let mut daily = forecast
            .daily
            .ok_or(DarkSkyError::MissingBlock(Block::Daily))?;
        self.normalize_daily(&mut daily);
        daily.updated_date_time = Some(Utc::now());
        Ok(daily)
    }

    /// Gets the whole kit and kaboodle: `currently`, `minutely`, `hourly`,
    /// `daily`, `alerts` and `flags`, minus whatever is excluded.
    ///
    /// `currently` and the `daily` records are normalized when present;
    /// every other block passes through untouched. The envelope is stamped
    /// with `updatedDateTime`.
    ///
    /// # Arguments
    ///
    /// * `.exclude(Vec<Block>)`: optional blocks to drop from the response.
    /// * `.position(LatLon)`: optional explicit coordinates.
    #[builder]
    pub async fn load_it_all(
        &mut self,
        exclude: Option<Vec<Block>>,
        position: Option<LatLon>,
    ) -> Result<Forecast, DarkSkyError> {
        let position = self.ensure_position(position).await?;
        let request = self
            .base_request(position)
            .exclude(exclude)
            .extend_hourly(self.extend_hourly);
        let mut forecast = self.fetch_forecast(&request).await?;
        self.normalize_envelope(&mut forecast);
        forecast.updated_date_time = Some(Utc::now());
        Ok(forecast)
    }

    /// Time-machine request: weather for a specific past or future instant.
    ///
    /// # Arguments
    ///
    /// * `.instant(DateTime<Utc>)`: the point in time. Semantically required:
    ///   omitting it fails with [`DarkSkyError::MissingTime`] before any
    ///   geolocation or network access.
    /// * `.position(LatLon)`: optional explicit coordinates.
    #[builder]
    pub async fn load_time(
        &mut self,
        instant: Option<DateTime<Utc>>,
        position: Option<LatLon>,
    ) -> Result<Forecast, DarkSkyError> {
        let instant = instant.ok_or(DarkSkyError::MissingTime)?;
        let position = self.ensure_position(position).await?;
        let request = self
            .base_request(position)
            .instant(instant)
            .extend_hourly(self.extend_hourly);
        let mut forecast = self.fetch_forecast(&request).await?;
        self.normalize_envelope(&mut forecast);
        Ok(forecast)
    }

    /// The position-readiness guard.
    ///
    /// An explicit position is applied immediately. Otherwise the stored one
    /// is reused, and only an uninitialized facade consults the geolocation
    /// collaborator, exactly once; its result is stored for every later
    /// call.
    async fn ensure_position(
        &mut self,
        explicit: Option<LatLon>,
    ) -> Result<LatLon, DarkSkyError> {
        if let Some(position) = explicit {
            self.position = Some(position);
            return Ok(position);
        }
        if let Some(position) = self.position {
            return Ok(position);
        }
        let provider = self
            .position_provider
            .clone()
            .ok_or(DarkSkyError::MissingPosition)?;
        let position = provider.current_position().await?;
        self.position = Some(position);
        Ok(position)
    }

    fn base_request(&self, position: LatLon) -> ForecastRequest {
        ForecastRequest::new()
            .latitude(position.0)
            .longitude(position.1)
            .units(self.units)
            .language(self.language)
    }

    async fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, DarkSkyError> {
        let raw: Value = self.requester.fetch(request).await?;
        let forecast = serde_json::from_value(raw).map_err(RequestError::Decode)?;
        Ok(forecast)
    }

    fn normalize_daily(&self, daily: &mut DailyBlock) {
        let data = std::mem::take(&mut daily.data);
        daily.data = data
            .into_iter()
            .map(|record| enrich(record, self.post_processor.as_ref()))
            .collect();
    }

    fn normalize_envelope(&self, forecast: &mut Forecast) {
        if let Some(currently) = forecast.currently.take() {
            forecast.currently = Some(enrich(currently, self.post_processor.as_ref()));
        }
        if let Some(daily) = forecast.daily.as_mut() {
            self.normalize_daily(daily);
        }
    }
}
