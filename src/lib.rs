mod darksky;
mod error;
mod normalize;
mod position;
mod request;
mod types;
mod units;

pub use darksky::*;
pub use error::DarkSkyError;
pub use normalize::PostProcessor;
pub use position::{LatLon, PositionError, PositionProvider};
pub use request::{Endpoint, ForecastRequest, HttpTransport, RequestError, Requester, Transport};
pub use types::block::Block;
pub use types::cardinal::Cardinal;
pub use types::language::{Language, UnknownLanguage};
pub use types::response::{DailyBlock, Forecast, WeatherRecord};
pub use units::{UnitSystem, UnitTable, UnknownUnitSystem};
