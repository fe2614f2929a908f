//! A small blocking Rust client for the Carbon Interface emissions API.
//!
//! The client authenticates with an API key, posts one estimate request per call
//! (flight, electricity or shipping) and returns the `carbon_<unit>` value from
//! the response in the unit chosen when the client was built.
//!
//! ## Quick start
//! - Pass the API key explicitly, or configure it via `CARBONINTERFACE_KEY` or a
//!   `.carboninterfacerc` file (current directory or home directory).
//! - Call one of the `estimate_*` methods.
//!
//! ```no_run
//! use carboninterface::{Client, MassUnit, ShippingRequest, TransportMethod};
//!
//! fn main() -> carboninterface::Result<()> {
//!     let client = Client::new("YOUR_API_KEY", MassUnit::Kg)?;
//!
//!     let flight = client.estimate_flight("YYZ", "YYC", true)?;
//!     println!("round trip: {flight} kg");
//!
//!     let parcel = client.estimate(
//!         ShippingRequest::new(200.0, 2000.0).with_method(TransportMethod::Train),
//!     )?;
//!     println!("parcel: {parcel} kg");
//!     Ok(())
//! }
//! ```
//!
//! The library logs through `tracing`; install a subscriber to see it.

#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
mod estimate;
mod response;
mod units;
mod util;

pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, DEFAULT_URL};
pub use error::{Error, Result};
pub use estimate::{ElectricityRequest, EstimateRequest, FlightRequest, Leg, ShippingRequest};
pub use response::extract_carbon;
pub use units::{CabinClass, Country, DistanceUnit, ElectricityUnit, MassUnit, TransportMethod};
