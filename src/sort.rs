// Ordering for the browse page. Each sort option maps to a single-key
// comparator; ties keep the incoming (filtered) order so results are
// deterministic. `Featured` is the dropdown default: best rated first.

use crate::models::{SortKey, Vehicle};
use std::cmp::Ordering;

/// Return a new sequence ordered by `key`. The input is not mutated and the
/// sort is stable: equal keys preserve their relative input order, with no
/// secondary key.
pub fn sort(vehicles: &[Vehicle], key: SortKey) -> Vec<Vehicle> {
    let mut sorted = vehicles.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

fn compare(a: &Vehicle, b: &Vehicle, key: SortKey) -> Ordering {
    match key {
        SortKey::PriceLow => a.price.cmp(&b.price),
        SortKey::PriceHigh => b.price.cmp(&a.price),
        SortKey::Year => b.year.cmp(&a.year),
        SortKey::Mileage => a.mileage.cmp(&b.mileage),
        // Ratings are finite by catalog invariant; equal or incomparable
        // pairs fall through to input order.
        SortKey::Featured => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_vehicles;
    use std::collections::HashSet;

    fn ids(vehicles: &[Vehicle]) -> Vec<&str> {
        vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn price_low_sorts_ascending() {
        let vehicles = seed_vehicles();
        let sorted = sort(&vehicles, SortKey::PriceLow);
        assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn price_high_sorts_descending() {
        let vehicles = seed_vehicles();
        let sorted = sort(&vehicles, SortKey::PriceHigh);
        assert!(sorted.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn year_sorts_newest_first() {
        let vehicles = seed_vehicles();
        let sorted = sort(&vehicles, SortKey::Year);
        assert!(sorted.windows(2).all(|w| w[0].year >= w[1].year));
    }

    #[test]
    fn mileage_sorts_lowest_first() {
        let vehicles = seed_vehicles();
        let sorted = sort(&vehicles, SortKey::Mileage);
        assert!(sorted.windows(2).all(|w| w[0].mileage <= w[1].mileage));
    }

    #[test]
    fn featured_sorts_by_rating_descending() {
        let vehicles = seed_vehicles();
        let sorted = sort(&vehicles, SortKey::Featured);
        assert!(sorted.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn sort_is_a_permutation_of_input() {
        let vehicles = seed_vehicles();
        for key in [
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Year,
            SortKey::Mileage,
            SortKey::Featured,
        ] {
            let sorted = sort(&vehicles, key);
            assert_eq!(sorted.len(), vehicles.len());
            let before: HashSet<&str> = ids(&vehicles).into_iter().collect();
            let after: HashSet<&str> = ids(&sorted).into_iter().collect();
            assert_eq!(before, after, "{key:?} dropped or invented a vehicle");
        }
    }

    #[test]
    fn equal_keys_preserve_input_order() {
        let mut a = seed_vehicles()[0].clone();
        let mut b = seed_vehicles()[1].clone();
        let mut c = seed_vehicles()[2].clone();
        a.price = 500_000;
        b.price = 500_000;
        c.price = 300_000;
        a.id = "first".to_string();
        b.id = "second".to_string();
        c.id = "third".to_string();
        let sorted = sort(&[a, b, c], SortKey::PriceLow);
        assert_eq!(ids(&sorted), vec!["third", "first", "second"]);
    }

    #[test]
    fn price_low_example() {
        let mut a = seed_vehicles()[0].clone();
        let mut b = seed_vehicles()[1].clone();
        a.price = 500_000;
        b.price = 300_000;
        let sorted = sort(&[a, b], SortKey::PriceLow);
        assert_eq!(sorted[0].price, 300_000);
        assert_eq!(sorted[1].price, 500_000);
    }

    #[test]
    fn year_example() {
        let mut a = seed_vehicles()[0].clone();
        let mut b = seed_vehicles()[1].clone();
        a.year = 2019;
        b.year = 2021;
        let sorted = sort(&[a, b], SortKey::Year);
        assert_eq!(sorted[0].year, 2021);
        assert_eq!(sorted[1].year, 2019);
    }

    #[test]
    fn input_is_not_mutated() {
        let vehicles = seed_vehicles();
        let original = ids(&vehicles)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let _ = sort(&vehicles, SortKey::PriceHigh);
        assert_eq!(
            ids(&vehicles),
            original.iter().map(String::as_str).collect::<Vec<_>>()
        );
    }
}
