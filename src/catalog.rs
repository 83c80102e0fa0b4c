// Read-only access to the static vehicle catalog.
//
// The catalog is fixed at build time (see data.rs) and safely shared between
// handlers; nothing in here mutates a listing.

use crate::data;
use crate::models::Vehicle;
use once_cell::sync::Lazy;

static SEED: Lazy<Vec<Vehicle>> = Lazy::new(data::seed_vehicles);

pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    /// Catalog backed by the built-in seed listings.
    pub fn seeded() -> Self {
        VehicleCatalog {
            vehicles: SEED.clone(),
        }
    }

    /// Catalog over an explicit set of listings (used by tests).
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        VehicleCatalog { vehicles }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.slug == slug)
    }

    /// All listings in insertion order.
    pub fn all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Deterministic featured selection: the first `n` listings, no
    /// randomization or personalization.
    pub fn featured(&self, n: usize) -> &[Vehicle] {
        &self.vehicles[..n.min(self.vehicles.len())]
    }

    /// Distinct makes, sorted, for the filter sidebar.
    pub fn makes(&self) -> Vec<String> {
        let mut makes: Vec<String> = self.vehicles.iter().map(|v| v.make.clone()).collect();
        makes.sort();
        makes.dedup();
        makes
    }

    /// Distinct body types, sorted by display name.
    pub fn body_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .vehicles
            .iter()
            .map(|v| v.body_type.to_string())
            .collect();
        types.sort();
        types.dedup();
        types
    }

    /// Distinct fuel types, sorted by display name.
    pub fn fuel_types(&self) -> Vec<String> {
        let mut fuels: Vec<String> = self
            .vehicles
            .iter()
            .map(|v| v.fuel_type.to_string())
            .collect();
        fuels.sort();
        fuels.dedup();
        fuels
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
