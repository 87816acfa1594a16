//! Pure gram/deciliter conversion.

/// Convert a weight in grams to deciliters for a given density.
///
/// A non-positive density means the volume is unknown; the result is then
/// defined as 0.0 rather than an error or a division by zero.
pub fn grams_to_deciliters(grams: f64, grams_per_deciliter: f64) -> f64 {
    if grams_per_deciliter <= 0.0 {
        return 0.0;
    }
    grams / grams_per_deciliter
}

/// Convert a volume in deciliters back to grams. Always defined.
pub fn deciliters_to_grams(deciliters: f64, grams_per_deciliter: f64) -> f64 {
    deciliters * grams_per_deciliter
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip_is_stable(grams in 0.0f64..1e6, density in 0.01f64..1e4) {
            let dl = grams_to_deciliters(grams, density);
            let back = grams_to_deciliters(deciliters_to_grams(dl, density), density);
            prop_assert!((back - dl).abs() <= 1e-9 * dl.abs().max(1.0));
        }

        #[test]
        fn nonpositive_density_yields_zero(grams in 0.0f64..1e6, density in -1e4f64..=0.0) {
            prop_assert_eq!(grams_to_deciliters(grams, density), 0.0);
        }

        #[test]
        fn inverse_scales_linearly(dl in 0.0f64..1e4, density in 0.01f64..1e4) {
            let grams = deciliters_to_grams(dl, density);
            prop_assert!((deciliters_to_grams(2.0 * dl, density) - 2.0 * grams).abs() <= 1e-6 * grams.abs().max(1.0));
        }
    }
}
