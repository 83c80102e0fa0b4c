// Side-by-side comparison selection. The three-column comparison view drives
// the capacity; enforcing it here means an oversized selection can never be
// constructed, regardless of what the page does.

use crate::models::Vehicle;
use thiserror::Error;

/// Maximum vehicles in one comparison, matching the comparison table columns.
pub const COMPARE_CAPACITY: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("comparison already holds {COMPARE_CAPACITY} vehicles")]
    AlreadyFull,

    #[error("vehicle '{0}' is already in the comparison")]
    DuplicateVehicle(String),
}

/// Ordered selection of vehicles under comparison. Membership is keyed by
/// vehicle id; insertion order is display (column) order.
#[derive(Debug, Default, Clone)]
pub struct ComparisonSet {
    members: Vec<Vehicle>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        ComparisonSet::default()
    }

    /// Comparison pre-seeded with one vehicle, as the compare page opens with.
    pub fn seeded(vehicle: Vehicle) -> Self {
        ComparisonSet {
            members: vec![vehicle],
        }
    }

    /// Append a vehicle. Rejected without change when the set is full or the
    /// id is already present.
    pub fn add(&mut self, vehicle: Vehicle) -> Result<(), CompareError> {
        if self.members.len() >= COMPARE_CAPACITY {
            return Err(CompareError::AlreadyFull);
        }
        if self.members.iter().any(|v| v.id == vehicle.id) {
            return Err(CompareError::DuplicateVehicle(vehicle.id));
        }
        self.members.push(vehicle);
        Ok(())
    }

    /// Remove by id. Removing an absent id is a no-op, not an error; returns
    /// whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|v| v.id != id);
        self.members.len() != before
    }

    /// Members in insertion order (first added renders in the first column).
    pub fn members(&self) -> &[Vehicle] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= COMPARE_CAPACITY
    }
}
