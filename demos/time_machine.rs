use chrono::{TimeZone, Utc};
use darksky::{DarkSky, LatLon};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = env::var("DARKSKY_API_KEY")?;
    let mut api = DarkSky::builder().api_key(api_key).build()?;
    let instant = Utc.with_ymd_and_hms(2000, 4, 6, 12, 20, 5).unwrap();

    let forecast = api
        .load_time()
        .instant(instant)
        .position(LatLon(52.520008, 13.404954))
        .call()
        .await?;

    if let Some(currently) = forecast.currently {
        println!(
            "conditions at {:?}: wind from {:?}",
            currently.date_time, currently.wind_direction
        );
    }

    Ok(())
}
