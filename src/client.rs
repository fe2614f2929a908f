use reqwest::blocking::{Client as HttpClient, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::{ClientConfig, load_config};
use crate::error::{Error, Result, error_message};
use crate::estimate::{
    ElectricityRequest, EstimateRequest, FlightRequest, ShippingRequest,
};
use crate::response::extract_carbon;
use crate::units::{Country, DistanceUnit, ElectricityUnit, MassUnit, TransportMethod};
use crate::util::urljoin;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Blocking Carbon Interface client.
///
/// Holds an immutable configuration; clones share one connection pool.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    http: HttpClient,
}

/// Builder for [`Client`].
///
/// Values left unset are taken from `CARBONINTERFACE_*` environment variables,
/// then from `.carboninterfacerc`, then from defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: Option<String>,
    units: Option<MassUnit>,
    url: Option<String>,
    timeout: Duration,
    authenticate: bool,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            units: None,
            url: None,
            timeout: DEFAULT_TIMEOUT,
            authenticate: true,
        }
    }
}

impl ClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn units(mut self, units: MassUnit) -> Self {
        self.units = Some(units);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Uses every value of `config`, bypassing environment and rc lookup.
    pub fn config(self, config: ClientConfig) -> Self {
        self.api_key(config.api_key)
            .units(config.units)
            .base_url(config.url)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether `build` probes `GET /auth` before returning. Defaults to `true`.
    ///
    /// With the probe disabled, a bad key only surfaces on the first estimate.
    pub fn authenticate(mut self, authenticate: bool) -> Self {
        self.authenticate = authenticate;
        self
    }

    pub fn build(self) -> Result<Client> {
        let config = load_config(self.api_key, self.units, self.url)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("carboninterface-rs/{}", env!("CARGO_PKG_VERSION")))
                .unwrap_or(HeaderValue::from_static("carboninterface-rs")),
        );

        let http = HttpClient::builder()
            .default_headers(default_headers)
            .timeout(self.timeout)
            .build()?;

        let client = Client { config, http };
        if self.authenticate {
            client.authenticate()?;
        }
        Ok(client)
    }
}

impl Client {
    /// Connects with `api_key`, reporting estimates in `units`.
    ///
    /// Probes `GET /auth` and fails with [`Error::Authentication`] if the key is rejected.
    pub fn new(api_key: impl Into<String>, units: MassUnit) -> Result<Self> {
        Self::builder().api_key(api_key).units(units).build()
    }

    /// Creates a client from environment variables and/or `.carboninterfacerc`.
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Unit every estimate from this client is reported in.
    pub fn units(&self) -> MassUnit {
        self.config.units
    }

    /// Estimates an economy flight for one passenger.
    pub fn estimate_flight(
        &self,
        departure: &str,
        destination: &str,
        round_trip: bool,
    ) -> Result<f64> {
        let request = if round_trip {
            FlightRequest::round_trip(departure, destination)
        } else {
            FlightRequest::one_way(departure, destination)
        };
        self.estimate(request)
    }

    /// Estimates electricity consumption. An empty `state` is treated as absent.
    pub fn estimate_electricity(
        &self,
        amount: f64,
        unit: ElectricityUnit,
        country: Country,
        state: Option<&str>,
    ) -> Result<f64> {
        let request = ElectricityRequest::new(amount)
            .with_unit(unit)
            .with_country(country)
            .with_state(state);
        self.estimate(request)
    }

    pub fn estimate_shipping(
        &self,
        weight: f64,
        distance: f64,
        method: TransportMethod,
        weight_unit: MassUnit,
        distance_unit: DistanceUnit,
    ) -> Result<f64> {
        let request = ShippingRequest::new(weight, distance)
            .with_method(method)
            .with_weight_unit(weight_unit)
            .with_distance_unit(distance_unit);
        self.estimate(request)
    }

    /// Posts any estimate request and returns the carbon value in [`Client::units`].
    pub fn estimate(&self, request: impl Into<EstimateRequest>) -> Result<f64> {
        let response = self.post(&request.into())?;
        let value = extract_carbon(&response, self.config.units)?;
        debug!(value, units = %self.config.units, "estimate received");
        Ok(value)
    }

    /// Sends `request` to `POST /estimates` and returns the parsed response body.
    pub fn post(&self, request: &EstimateRequest) -> Result<Value> {
        let url = urljoin(&self.config.url, "estimates");
        debug!(kind = request.kind(), %url, "requesting estimate");

        let resp = self.apply_auth(self.http.post(&url)).json(request).send()?;
        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            return Err(Error::Api {
                status,
                message: error_message(status, &text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    fn authenticate(&self) -> Result<()> {
        let url = urljoin(&self.config.url, "auth");
        let resp = self.apply_auth(self.http.get(&url)).send()?;
        let status = resp.status();
        if status.is_success() {
            info!(%status, "authenticated with Carbon Interface");
            return Ok(());
        }

        let message = error_message(status, &resp.text().unwrap_or_default());
        warn!(%status, %message, "Carbon Interface rejected the API key");
        Err(Error::Authentication { status, message })
    }

    fn apply_auth(&self, req: RequestBuilder) -> RequestBuilder {
        req.bearer_auth(self.config.api_key.trim())
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("units", &self.config.units)
            .field("url", &self.config.url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client(units: MassUnit) -> Client {
        Client::builder()
            .api_key("test-key-0000")
            .units(units)
            .base_url("http://127.0.0.1:9")
            .authenticate(false)
            .build()
            .unwrap()
    }

    #[test]
    fn client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Client>();
    }

    #[test]
    fn debug_hides_api_key() {
        let client = offline_client(MassUnit::Lb);
        let text = format!("{client:?}");
        assert!(text.contains("Lb"));
        assert!(!text.contains("test-key-0000"));
    }

    #[test]
    fn builder_keeps_explicit_config() {
        let client = offline_client(MassUnit::Mt);
        assert_eq!(client.units(), MassUnit::Mt);
        assert_eq!(client.config().url, "http://127.0.0.1:9");
        assert_eq!(client.config().api_key, "test-key-0000");
    }

    #[test]
    fn empty_key_is_rejected_before_any_request() {
        let err = Client::builder()
            .api_key("  ")
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
