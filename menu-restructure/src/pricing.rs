//! Add-on Price Estimation
//!
//! Infers what each add-on costs by comparing variation rows against their
//! base row. Prices are binary floats end to end (as stored in the document),
//! so estimates come out bit-identical to the catalog's existing tooling.

use indexmap::IndexMap;

use crate::matcher::Variation;

/// Estimate one price per distinct add-on, keyed in first-seen order.
///
/// For each variation, `delta = variation price - base price`:
/// - one add-on: the add-on's estimate becomes `delta` (overwrites)
/// - n add-ons: each observes `delta / n`, folded into an existing
///   estimate as `(estimate + observation) / 2`
///
/// The fold weights later observations more heavily; it is not a mean.
/// Results are not rounded.
pub fn estimate_addon_prices(base_price: f64, variations: &[Variation]) -> IndexMap<String, f64> {
    let mut estimates: IndexMap<String, f64> = IndexMap::new();

    for variation in variations {
        let delta = variation.item.price() - base_price;

        match variation.addons.as_slice() {
            [] => {}
            [single] => {
                estimates.insert(single.clone(), delta);
            }
            addons => {
                let share = delta / addons.len() as f64;
                for addon in addons {
                    estimates
                        .entry(addon.clone())
                        .and_modify(|estimate| *estimate = (*estimate + share) / 2.0)
                        .or_insert(share);
                }
            }
        }
    }

    estimates
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MenuItem;

    fn make_variation(name: &str, price: f64) -> Variation {
        let parsed = crate::parser::parse_item_name(name);
        Variation {
            item: MenuItem::new(format!("id_{name}"), name, price),
            addons: parsed.addons,
        }
    }

    #[test]
    fn test_single_addon_takes_full_delta() {
        let prices = estimate_addon_prices(10.0, &[make_variation("X + Red Bean Fizzy", 13.0)]);
        assert_eq!(prices.len(), 1);
        assert_eq!(prices["Red Bean Fizzy"], 3.0);
    }

    #[test]
    fn test_multiple_addons_split_delta_evenly() {
        let prices = estimate_addon_prices(10.0, &[make_variation("X + A + B", 14.0)]);
        assert_eq!(prices["A"], 2.0);
        assert_eq!(prices["B"], 2.0);
    }

    #[test]
    fn test_uneven_split_is_not_rounded() {
        let prices = estimate_addon_prices(10.0, &[make_variation("X + A + B + C", 14.0)]);
        for addon in ["A", "B", "C"] {
            assert_eq!(prices[addon], 4.0 / 3.0);
            assert_eq!(prices[addon].to_string(), "1.3333333333333333");
        }
    }

    #[test]
    fn test_delta_keeps_float_residue() {
        // 13.1 - 10.0 in binary floating point
        let prices = estimate_addon_prices(10.0, &[make_variation("X + Hot Lemon Tea", 13.1)]);
        assert_eq!(prices["Hot Lemon Tea"], 3.0999999999999996);
    }

    #[test]
    fn test_repeated_observation_is_folded_pairwise() {
        // A observes 3.00 then 5.00
        let prices = estimate_addon_prices(
            10.0,
            &[
                make_variation("X + A + B", 16.0),
                make_variation("X + A + C", 20.0),
            ],
        );
        assert_eq!(prices["A"], 4.0);
    }

    #[test]
    fn test_fold_is_not_an_arithmetic_mean() {
        // A observes 3.00, 5.00, 10.00 -> ((3 + 5) / 2 + 10) / 2 = 7.00, mean would be 6.00
        let prices = estimate_addon_prices(
            10.0,
            &[
                make_variation("X + A + B", 16.0),
                make_variation("X + A + C", 20.0),
                make_variation("X + A + D", 30.0),
            ],
        );
        assert_eq!(prices["A"], 7.0);
    }

    #[test]
    fn test_single_addon_overwrites_previous_estimate() {
        let prices = estimate_addon_prices(
            10.0,
            &[
                make_variation("X + A + B", 16.0),
                make_variation("X + A", 15.0),
            ],
        );
        assert_eq!(prices["A"], 5.0);

        // ...and a later multi-add-on observation folds into it
        let prices = estimate_addon_prices(
            10.0,
            &[make_variation("X + A", 15.0), make_variation("X + A + B", 12.0)],
        );
        assert_eq!(prices["A"], 3.0);
    }

    #[test]
    fn test_negative_delta_and_first_seen_order() {
        let prices = estimate_addon_prices(
            10.0,
            &[make_variation("X + Small Portion", 8.5), make_variation("X + Egg", 12.0)],
        );
        let names: Vec<_> = prices.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Small Portion", "Egg"]);
        assert_eq!(prices["Small Portion"], -1.5);
    }

    #[test]
    fn test_add_on_identity_is_case_sensitive() {
        let prices = estimate_addon_prices(
            10.0,
            &[make_variation("X + Fizzy", 13.0), make_variation("X + fizzy", 14.0)],
        );
        assert_eq!(prices.len(), 2);
        assert_eq!(prices["Fizzy"], 3.0);
        assert_eq!(prices["fizzy"], 4.0);
    }
}
