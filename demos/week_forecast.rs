use darksky::{DarkSky, LatLon, UnitSystem};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = env::var("DARKSKY_API_KEY")?;
    let mut api = DarkSky::builder()
        .api_key(api_key)
        .units(UnitSystem::Si)
        .build()?;
    api.extend_hourly(true);

    let daily = api
        .load_forecast()
        .position(LatLon(38.0290805555556, 14.0400277777778))
        .call()
        .await?;

    println!("forecast updated at {:?}", daily.updated_date_time);
    for day in &daily.data {
        println!(
            "{:?}: wind {:?}, sunrise {:?}",
            day.date_time, day.wind_direction, day.sunrise_date_time
        );
    }

    Ok(())
}
