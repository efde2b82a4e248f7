use darksky::{DarkSky, LatLon};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = env::var("DARKSKY_API_KEY")?;
    let mut api = DarkSky::builder().api_key(api_key).build()?;
    api.set_units("si").set_language("en");

    let current = api
        .load_current()
        .position(LatLon(52.520008, 13.404954))
        .call()
        .await?;

    println!(
        "wind from {:?} at {:?}, response units: {:?}",
        current.wind_direction,
        current.date_time,
        api.response_units()
    );
    println!("{:#?}", current);

    Ok(())
}
