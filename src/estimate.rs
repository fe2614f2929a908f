//! Request bodies for `POST /estimates`.

use serde::Serialize;

use crate::units::{CabinClass, Country, DistanceUnit, ElectricityUnit, MassUnit, TransportMethod};

/// One estimate request, serialized with its `type` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EstimateRequest {
    Flight(FlightRequest),
    Electricity(ElectricityRequest),
    Shipping(ShippingRequest),
}

impl EstimateRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            EstimateRequest::Flight(_) => "flight",
            EstimateRequest::Electricity(_) => "electricity",
            EstimateRequest::Shipping(_) => "shipping",
        }
    }
}

impl From<FlightRequest> for EstimateRequest {
    fn from(value: FlightRequest) -> Self {
        EstimateRequest::Flight(value)
    }
}

impl From<ElectricityRequest> for EstimateRequest {
    fn from(value: ElectricityRequest) -> Self {
        EstimateRequest::Electricity(value)
    }
}

impl From<ShippingRequest> for EstimateRequest {
    fn from(value: ShippingRequest) -> Self {
        EstimateRequest::Shipping(value)
    }
}

/// Directional flight segment between two IATA airport codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub departure_airport: String,
    pub destination_airport: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabin_class: Option<CabinClass>,
}

impl Leg {
    pub fn new(departure: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            departure_airport: departure.into(),
            destination_airport: destination.into(),
            cabin_class: None,
        }
    }

    pub fn with_cabin_class(mut self, cabin_class: CabinClass) -> Self {
        self.cabin_class = Some(cabin_class);
        self
    }

    /// The same segment flown in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            departure_airport: self.destination_airport.clone(),
            destination_airport: self.departure_airport.clone(),
            cabin_class: self.cabin_class,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightRequest {
    pub passengers: u32,
    pub legs: Vec<Leg>,
}

impl FlightRequest {
    /// Single passenger, single leg.
    pub fn one_way(departure: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            passengers: 1,
            legs: vec![Leg::new(departure, destination)],
        }
    }

    /// Single passenger, outbound leg followed by the return leg.
    pub fn round_trip(departure: impl Into<String>, destination: impl Into<String>) -> Self {
        let outbound = Leg::new(departure, destination);
        let inbound = outbound.reversed();
        Self {
            passengers: 1,
            legs: vec![outbound, inbound],
        }
    }

    pub fn with_passengers(mut self, passengers: u32) -> Self {
        self.passengers = passengers;
        self
    }

    pub fn with_leg(mut self, leg: Leg) -> Self {
        self.legs.push(leg);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectricityRequest {
    pub electricity_value: f64,
    pub electricity_unit: ElectricityUnit,
    pub country: Country,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ElectricityRequest {
    /// `amount` megawatt hours in the US, no state.
    pub fn new(amount: f64) -> Self {
        Self {
            electricity_value: amount,
            electricity_unit: ElectricityUnit::default(),
            country: Country::default(),
            state: None,
        }
    }

    pub fn with_unit(mut self, unit: ElectricityUnit) -> Self {
        self.electricity_unit = unit;
        self
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.country = country;
        self
    }

    /// Two letter state/province code. An empty string clears it.
    pub fn with_state(mut self, state: Option<&str>) -> Self {
        self.state = state.filter(|s| !s.is_empty()).map(str::to_string);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingRequest {
    pub weight_value: f64,
    pub weight_unit: MassUnit,
    pub distance_value: f64,
    pub distance_unit: DistanceUnit,
    pub transport_method: TransportMethod,
}

impl ShippingRequest {
    /// Weight in grams, distance in kilometres, by truck.
    pub fn new(weight: f64, distance: f64) -> Self {
        Self {
            weight_value: weight,
            weight_unit: MassUnit::G,
            distance_value: distance,
            distance_unit: DistanceUnit::default(),
            transport_method: TransportMethod::default(),
        }
    }

    pub fn with_method(mut self, method: TransportMethod) -> Self {
        self.transport_method = method;
        self
    }

    pub fn with_weight_unit(mut self, unit: MassUnit) -> Self {
        self.weight_unit = unit;
        self
    }

    pub fn with_distance_unit(mut self, unit: DistanceUnit) -> Self {
        self.distance_unit = unit;
        self
    }
}
