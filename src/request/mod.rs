mod error;
mod forecast_request;
mod requester;
mod transport;

pub use error::RequestError;
pub use forecast_request::ForecastRequest;
pub use requester::{Endpoint, Requester};
pub use transport::{HttpTransport, Transport};
