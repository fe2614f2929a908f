use anyhow::Result;
use carboninterface::{Client, Country, DistanceUnit, ElectricityUnit, MassUnit, TransportMethod};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Configure the key via CARBONINTERFACE_KEY or a `.carboninterfacerc` file.
    let client = Client::from_env()?;
    let units = client.units();

    let flight = client.estimate_flight("YYZ", "YYC", true)?;
    println!("YYZ <-> YYC round trip: {flight} {units}");

    let electricity =
        client.estimate_electricity(42.0, ElectricityUnit::Mwh, Country::Ca, Some("bc"))?;
    println!("42 MWh in British Columbia: {electricity} {units}");

    let shipping = client.estimate_shipping(
        200.0,
        2000.0,
        TransportMethod::Truck,
        MassUnit::G,
        DistanceUnit::Km,
    )?;
    println!("200 g parcel over 2000 km by truck: {shipping} {units}");

    Ok(())
}
