// Client-side filtering of the catalog. Conditions are conjunctive across
// categories and disjunctive (membership) within one, matching the browse
// page sidebar: checking two makes widens that category, adding a fuel type
// narrows the result.

use crate::models::{FilterCriteria, Vehicle};

/// Keep the vehicles matching `criteria`, preserving the input order.
/// An empty criteria is the identity filter; an empty result is valid.
pub fn apply(vehicles: &[Vehicle], criteria: &FilterCriteria) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|v| matches(v, criteria))
        .cloned()
        .collect()
}

fn matches(vehicle: &Vehicle, criteria: &FilterCriteria) -> bool {
    // A constrained category with an empty list is unsatisfiable and
    // rejects everything; `None` accepts everything.
    if let Some(makes) = &criteria.makes {
        if !makes.contains(&vehicle.make) {
            return false;
        }
    }
    if let Some(body_types) = &criteria.body_types {
        if !body_types.contains(&vehicle.body_type) {
            return false;
        }
    }
    if let Some(fuel_types) = &criteria.fuel_types {
        if !fuel_types.contains(&vehicle.fuel_type) {
            return false;
        }
    }
    if let Some(transmissions) = &criteria.transmissions {
        if !transmissions.contains(&vehicle.transmission) {
            return false;
        }
    }
    let (min, max) = criteria.price_range;
    if vehicle.price < min || vehicle.price > max {
        return false;
    }
    if criteria.certified_only && !vehicle.is_certified {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_vehicles;
    use crate::models::{BodyType, FuelType};

    #[test]
    fn empty_criteria_is_identity() {
        let vehicles = seed_vehicles();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(apply(&vehicles, &criteria), vehicles);
    }

    #[test]
    fn make_membership_is_disjunctive_within_category() {
        let vehicles = seed_vehicles();
        let criteria = FilterCriteria {
            makes: Some(vec!["Honda".to_string(), "Toyota".to_string()]),
            ..Default::default()
        };
        let result = apply(&vehicles, &criteria);
        assert!(!result.is_empty());
        assert!(result
            .iter()
            .all(|v| v.make == "Honda" || v.make == "Toyota"));
    }

    #[test]
    fn categories_combine_conjunctively() {
        let vehicles = seed_vehicles();
        let criteria = FilterCriteria {
            body_types: Some(vec![BodyType::Suv]),
            fuel_types: Some(vec![FuelType::Diesel]),
            certified_only: true,
            ..Default::default()
        };
        for v in apply(&vehicles, &criteria) {
            assert_eq!(v.body_type, BodyType::Suv);
            assert_eq!(v.fuel_type, FuelType::Diesel);
            assert!(v.is_certified);
        }
    }

    #[test]
    fn price_range_is_inclusive() {
        let vehicles = seed_vehicles();
        let exact = vehicles[0].price;
        let criteria = FilterCriteria {
            price_range: (exact, exact),
            ..Default::default()
        };
        let result = apply(&vehicles, &criteria);
        assert!(result.iter().any(|v| v.id == vehicles[0].id));
        assert!(result.iter().all(|v| v.price == exact));
    }

    #[test]
    fn rejected_vehicles_violate_some_constraint() {
        let vehicles = seed_vehicles();
        let criteria = FilterCriteria {
            price_range: (0, 2_000_000),
            certified_only: true,
            ..Default::default()
        };
        let result = apply(&vehicles, &criteria);
        for v in &vehicles {
            let kept = result.iter().any(|r| r.id == v.id);
            let passes = v.price <= 2_000_000 && v.is_certified;
            assert_eq!(kept, passes, "vehicle {}", v.id);
        }
    }

    #[test]
    fn sequential_filters_equal_merged_criteria() {
        let vehicles = seed_vehicles();
        let c1 = FilterCriteria {
            makes: Some(vec![
                "Hyundai".to_string(),
                "Toyota".to_string(),
                "Tata".to_string(),
            ]),
            price_range: (0, 4_000_000),
            ..Default::default()
        };
        let c2 = FilterCriteria {
            makes: Some(vec!["Toyota".to_string(), "Tata".to_string()]),
            price_range: (1_000_000, u64::MAX),
            certified_only: true,
            ..Default::default()
        };
        let sequential = apply(&apply(&vehicles, &c1), &c2);
        let merged = apply(&vehicles, &c1.merge(&c2));
        assert_eq!(sequential, merged);
    }

    #[test]
    fn merging_disjoint_sets_matches_nothing() {
        // Disjoint constraints must stay unsatisfiable after a merge: the
        // empty intersection is "match none", not "accept all".
        let vehicles = seed_vehicles();
        let c1 = FilterCriteria {
            makes: Some(vec!["Honda".to_string()]),
            ..Default::default()
        };
        let c2 = FilterCriteria {
            makes: Some(vec!["Toyota".to_string()]),
            ..Default::default()
        };
        let sequential = apply(&apply(&vehicles, &c1), &c2);
        let merged = apply(&vehicles, &c1.merge(&c2));
        assert!(sequential.is_empty());
        assert_eq!(sequential, merged);
    }

    #[test]
    fn filter_preserves_input_order() {
        let vehicles = seed_vehicles();
        let criteria = FilterCriteria {
            certified_only: true,
            ..Default::default()
        };
        let result = apply(&vehicles, &criteria);
        let expected_order: Vec<&str> = vehicles
            .iter()
            .filter(|v| v.is_certified)
            .map(|v| v.id.as_str())
            .collect();
        let actual_order: Vec<&str> = result.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(actual_order, expected_order);
    }

    #[test]
    fn empty_result_is_valid_output() {
        let vehicles = seed_vehicles();
        let criteria = FilterCriteria {
            makes: Some(vec!["Lada".to_string()]),
            ..Default::default()
        };
        assert!(apply(&vehicles, &criteria).is_empty());
    }
}
