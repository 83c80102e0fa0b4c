// Domain models for the marketplace: the vehicle record served from the
// static catalog, plus the caller-owned parameter objects (filter criteria,
// sort key, loan parameters) the handlers build from request input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        };
        f.write_str(s)
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Petrol" => Ok(FuelType::Petrol),
            "Diesel" => Ok(FuelType::Diesel),
            "Electric" => Ok(FuelType::Electric),
            "Hybrid" => Ok(FuelType::Hybrid),
            other => Err(format!("unknown fuel type '{other}'")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transmission {
    Automatic,
    Manual,
}

impl FromStr for Transmission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Automatic" => Ok(Transmission::Automatic),
            "Manual" => Ok(Transmission::Manual),
            other => Err(format!("unknown transmission '{other}'")),
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Transmission::Automatic => "Automatic",
            Transmission::Manual => "Manual",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyType {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Hatchback,
    Luxury,
    Sports,
    Electric,
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BodyType::Sedan => "Sedan",
            BodyType::Suv => "SUV",
            BodyType::Hatchback => "Hatchback",
            BodyType::Luxury => "Luxury",
            BodyType::Sports => "Sports",
            BodyType::Electric => "Electric",
        };
        f.write_str(s)
    }
}

impl FromStr for BodyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sedan" => Ok(BodyType::Sedan),
            "SUV" => Ok(BodyType::Suv),
            "Hatchback" => Ok(BodyType::Hatchback),
            "Luxury" => Ok(BodyType::Luxury),
            "Sports" => Ok(BodyType::Sports),
            "Electric" => Ok(BodyType::Electric),
            other => Err(format!("unknown body type '{other}'")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    First,
    Second,
    Third,
    #[serde(rename = "Fourth+")]
    FourthPlus,
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ownership::First => "First",
            Ownership::Second => "Second",
            Ownership::Third => "Third",
            Ownership::FourthPlus => "Fourth+",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SellerType {
    Dealer,
    Individual,
}

impl fmt::Display for SellerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SellerType::Dealer => "Dealer",
            SellerType::Individual => "Individual",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    pub city: String,
    pub state: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub seller_type: SellerType,
    pub rating: f64,
    pub review_count: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub accident_free: bool,
    pub service_history: bool,
    pub warranty_available: bool,
    pub overall_score: f64,
}

// A single listing in the catalog. Field names follow the frontend JSON keys
// (camelCase) so the API responses match what the pages already consume.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub slug: String,
    pub make: String,
    pub model: String,
    pub variant: String,
    pub year: u32,
    pub body_type: BodyType,
    pub color: String,
    pub price: u64,
    pub emi: u64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub engine_cc: u32,
    pub power: String,
    pub torque: String,
    pub fuel_efficiency: String,
    pub mileage: u32,
    pub seating_capacity: u32,
    pub ownership: Ownership,
    pub registration_year: u32,
    pub registration_state: String,
    pub location: Location,
    pub seller: Seller,
    pub condition: Condition,
    pub images: Vec<String>,
    pub thumbnail_image: String,
    pub is_certified: bool,
    pub is_new_arrival: bool,
    pub rating: f64,
    pub views: u64,
    pub posted_date: String,
    pub description: String,
    pub features: Vec<String>,
    pub tags: Vec<String>,
}

impl Vehicle {
    /// Display title used by pages and comparison columns.
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Caller-owned filter constraints. `None` for a category means "accept
/// all"; `Some` restricts to the listed values, and a `Some` with an empty
/// list matches nothing (the unsatisfiable result of merging disjoint
/// constraints). The price range is a closed interval.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub makes: Option<Vec<String>>,
    pub body_types: Option<Vec<BodyType>>,
    pub fuel_types: Option<Vec<FuelType>>,
    pub transmissions: Option<Vec<Transmission>>,
    pub price_range: (u64, u64),
    pub certified_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            makes: None,
            body_types: None,
            fuel_types: None,
            transmissions: None,
            price_range: (0, u64::MAX),
            certified_only: false,
        }
    }
}

impl FilterCriteria {
    /// True when every category accepts everything, i.e. applying this
    /// criteria is the identity filter.
    pub fn is_empty(&self) -> bool {
        self.makes.is_none()
            && self.body_types.is_none()
            && self.fuel_types.is_none()
            && self.transmissions.is_none()
            && self.price_range == (0, u64::MAX)
            && !self.certified_only
    }

    /// Combine two criteria so that filtering once with the result equals
    /// filtering with `self` then with `other`: constrained value sets
    /// intersect (disjoint sets leave an empty, match-nothing set), the
    /// price range narrows, and the certified flags OR together.
    pub fn merge(&self, other: &FilterCriteria) -> FilterCriteria {
        fn intersect<T: Clone + PartialEq>(
            a: &Option<Vec<T>>,
            b: &Option<Vec<T>>,
        ) -> Option<Vec<T>> {
            match (a, b) {
                (None, b) => b.clone(),
                (a, None) => a.clone(),
                (Some(a), Some(b)) => {
                    Some(a.iter().filter(|x| b.contains(x)).cloned().collect())
                }
            }
        }

        FilterCriteria {
            makes: intersect(&self.makes, &other.makes),
            body_types: intersect(&self.body_types, &other.body_types),
            fuel_types: intersect(&self.fuel_types, &other.fuel_types),
            transmissions: intersect(&self.transmissions, &other.transmissions),
            price_range: (
                self.price_range.0.max(other.price_range.0),
                self.price_range.1.min(other.price_range.1),
            ),
            certified_only: self.certified_only || other.certified_only,
        }
    }
}

/// The sort options offered by the browse page dropdown. Wire values match
/// the frontend option values ("price-low", "featured", ...).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Year,
    Mileage,
    #[default]
    Featured,
}

/// Loan calculator inputs, as submitted by the financing page sliders.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanParameters {
    pub loan_amount: f64,
    pub down_payment: f64,
    /// Annual interest rate in percent, e.g. 10.0 for 10%.
    pub interest_rate: f64,
    pub tenure_years: u32,
}

/// Loan calculator output. `monthly_installment` is rounded to a whole
/// currency unit on the interest-bearing path; the totals derive from it.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanSchedule {
    pub monthly_installment: f64,
    pub principal: f64,
    pub total_interest: f64,
    pub total_payable: f64,
}

/// "Sell your car" submission, flattened from the multi-step form. The
/// server logs it and acknowledges; nothing is persisted.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SellCarRequest {
    pub make: String,
    pub model: String,
    pub year: String,
    pub variant: Option<String>,
    pub fuel_type: String,
    pub transmission: String,
    pub mileage: String,
    pub ownership: String,
    pub registration_number: Option<String>,
    pub asking_price: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_vehicles;

    #[test]
    fn vehicle_serializes_with_frontend_keys() {
        let vehicle = &seed_vehicles()[0];
        let json = serde_json::to_value(vehicle).unwrap();
        for key in [
            "bodyType",
            "fuelType",
            "isCertified",
            "thumbnailImage",
            "registrationState",
            "postedDate",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert!(json["seller"].get("type").is_some());
        assert!(json["seller"].get("reviewCount").is_some());
        assert!(json["condition"].get("accidentFree").is_some());
    }

    #[test]
    fn sort_key_uses_dropdown_values() {
        let key: SortKey = serde_json::from_str("\"price-low\"").unwrap();
        assert_eq!(key, SortKey::PriceLow);
        let key: SortKey = serde_json::from_str("\"featured\"").unwrap();
        assert_eq!(key, SortKey::Featured);
        assert_eq!(SortKey::default(), SortKey::Featured);
    }

    #[test]
    fn body_type_round_trips_suv_spelling() {
        let json = serde_json::to_string(&BodyType::Suv).unwrap();
        assert_eq!(json, "\"SUV\"");
        assert_eq!("SUV".parse::<BodyType>().unwrap(), BodyType::Suv);
        assert_eq!(BodyType::Suv.to_string(), "SUV");
    }

    #[test]
    fn merge_of_identity_criteria_is_identity() {
        let identity = FilterCriteria::default();
        let merged = identity.merge(&FilterCriteria::default());
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_keeps_disjoint_sets_unsatisfiable() {
        let c1 = FilterCriteria {
            makes: Some(vec!["Honda".to_string()]),
            ..Default::default()
        };
        let c2 = FilterCriteria {
            makes: Some(vec!["Toyota".to_string()]),
            ..Default::default()
        };
        let merged = c1.merge(&c2);
        assert_eq!(merged.makes, Some(Vec::new()));
        assert!(!merged.is_empty());
    }
}
