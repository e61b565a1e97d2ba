//! Crop Husbandry Details Lookup
//!
//! Maps crop names to static agronomy guidance displayed alongside
//! recommendations: planting window, fertilizer programme, irrigation
//! method, and expected yield.
//!
//! The table covers the full 29-crop label set a classifier trained on
//! the standard crop recommendation dataset can emit, a superset of the
//! rule-based catalog. Unknown crops resolve to an "N/A" placeholder
//! rather than an error so a recommendation is never blocked by a
//! missing guidance row.

use serde::Serialize;

/// Husbandry guidance for a single crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropDetails {
    /// Recommended sowing or transplanting window.
    pub planting_window: &'static str,
    /// Fertilizer programme (product names or NPK ratios).
    pub fertilizer: &'static str,
    /// Irrigation method or regime.
    pub irrigation: &'static str,
    /// Typical yield under the recommended programme.
    pub expected_yield: &'static str,
}

/// Guidance row returned for crops missing from the table.
pub static PLACEHOLDER_DETAILS: CropDetails = CropDetails {
    planting_window: "N/A",
    fertilizer: "N/A",
    irrigation: "N/A",
    expected_yield: "N/A",
};

// ============================================================================
// EMBEDDED HUSBANDRY TABLE
// One row per classifier label; yields are indicative field averages.
// ============================================================================

static CROP_DETAILS: &[(&str, CropDetails)] = &[
    ("Rice", CropDetails { planting_window: "June-July", fertilizer: "Urea, DAP, MOP", irrigation: "Flooded field method", expected_yield: "4-6 tons/ha" }),
    ("Wheat", CropDetails { planting_window: "October-November", fertilizer: "NPK 20:20:20", irrigation: "Sprinkler/Furrow", expected_yield: "4-5 tons/ha" }),
    ("Maize", CropDetails { planting_window: "June-July or Feb-March", fertilizer: "Urea, DAP", irrigation: "Drip/Sprinkler", expected_yield: "6-8 tons/ha" }),
    ("Millets", CropDetails { planting_window: "June-August", fertilizer: "NPK 10:10:10", irrigation: "Moderate", expected_yield: "2-4 tons/ha" }),
    ("Pulses", CropDetails { planting_window: "July-August", fertilizer: "DAP, Urea", irrigation: "Low", expected_yield: "1-2 tons/ha" }),
    ("Cotton", CropDetails { planting_window: "April-May", fertilizer: "NPK 20:20:20", irrigation: "Moderate", expected_yield: "2-3 tons/ha" }),
    ("Coffee", CropDetails { planting_window: "June-August", fertilizer: "NPK 10:5:20", irrigation: "Drip/Sprinkler", expected_yield: "1-2 tons/ha" }),
    ("Jute", CropDetails { planting_window: "March-May", fertilizer: "N:P:K 2:1:1", irrigation: "Rainfed/Flooded", expected_yield: "2-3 tons/ha" }),
    ("Tea", CropDetails { planting_window: "June-September", fertilizer: "Ammonium Sulphate", irrigation: "Sprinkler", expected_yield: "2-3 tons/ha" }),
    ("Sugarcane", CropDetails { planting_window: "Feb-March", fertilizer: "250:125:125 NPK kg/ha", irrigation: "Furrow", expected_yield: "80-100 tons/ha" }),
    ("Tobacco", CropDetails { planting_window: "August-October", fertilizer: "NPK 50:50:50", irrigation: "Furrow", expected_yield: "2-3 tons/ha" }),
    ("Rubber", CropDetails { planting_window: "June-July", fertilizer: "NPK 10:10:4", irrigation: "Rainfed", expected_yield: "1-2 tons/ha" }),
    ("Coconut", CropDetails { planting_window: "May-June", fertilizer: "NPK 500:320:1200g/palm", irrigation: "Drip/Basin", expected_yield: "80-100 nuts/palm" }),
    ("Banana", CropDetails { planting_window: "Feb-April", fertilizer: "NPK 200:50:200g/plant", irrigation: "Drip", expected_yield: "30-40 tons/ha" }),
    ("Grapes", CropDetails { planting_window: "Oct-Jan", fertilizer: "FYM + NPK", irrigation: "Drip", expected_yield: "20-30 tons/ha" }),
    ("Apple", CropDetails { planting_window: "Jan-Feb", fertilizer: "FYM + NPK", irrigation: "Drip", expected_yield: "10-15 tons/ha" }),
    ("Mango", CropDetails { planting_window: "July-Aug", fertilizer: "FYM + 1kg NPK/tree", irrigation: "Basin", expected_yield: "8-10 tons/ha" }),
    ("Muskmelon", CropDetails { planting_window: "Feb-March", fertilizer: "NPK 100:50:50", irrigation: "Drip", expected_yield: "15-20 tons/ha" }),
    ("Watermelon", CropDetails { planting_window: "Jan-March", fertilizer: "NPK 100:50:50", irrigation: "Drip", expected_yield: "20-25 tons/ha" }),
    ("Orange", CropDetails { planting_window: "July-Aug", fertilizer: "NPK 600:200:300g/tree", irrigation: "Drip/Basin", expected_yield: "10-12 tons/ha" }),
    ("Papaya", CropDetails { planting_window: "Feb-March or June-July", fertilizer: "NPK 200:200:250g/plant", irrigation: "Drip", expected_yield: "30-40 tons/ha" }),
    ("Pomegranate", CropDetails { planting_window: "Feb-March", fertilizer: "FYM + NPK", irrigation: "Drip", expected_yield: "10-12 tons/ha" }),
    ("Lentil", CropDetails { planting_window: "Oct-Nov", fertilizer: "DAP + Sulphur", irrigation: "Rainfed/Light", expected_yield: "1-1.5 tons/ha" }),
    ("Blackgram", CropDetails { planting_window: "Feb-March or June-July", fertilizer: "DAP", irrigation: "Rainfed", expected_yield: "0.8-1 tons/ha" }),
    ("Mungbean", CropDetails { planting_window: "Feb-March or June-July", fertilizer: "DAP", irrigation: "Rainfed", expected_yield: "0.8-1 tons/ha" }),
    ("Mothbeans", CropDetails { planting_window: "June-July", fertilizer: "FYM", irrigation: "Rainfed", expected_yield: "0.4-0.6 tons/ha" }),
    ("Pigeonpeas", CropDetails { planting_window: "June-July", fertilizer: "DAP + FYM", irrigation: "Rainfed", expected_yield: "1.5-2 tons/ha" }),
    ("Kidneybeans", CropDetails { planting_window: "May-June", fertilizer: "NPK 40:60:40", irrigation: "Rainfed", expected_yield: "1.0-1.5 tons/ha" }),
    ("Chickpea", CropDetails { planting_window: "Oct-Nov", fertilizer: "DAP", irrigation: "Sprinkler", expected_yield: "1.5-2 tons/ha" }),
];

/// Look up the guidance row for a crop.
///
/// Matching trims surrounding whitespace and ignores ASCII case, so
/// `"rice"`, `"Rice"`, and `" RICE "` all resolve to the same row.
///
/// # Examples
/// ```
/// use crop_advisor_rust::details::get_crop_details;
///
/// let details = get_crop_details("rice");
/// assert!(details.is_some());
/// assert_eq!(details.unwrap().planting_window, "June-July");
///
/// assert!(get_crop_details("Dragonfruit").is_none());
/// ```
pub fn get_crop_details(crop: &str) -> Option<&'static CropDetails> {
    let name = crop.trim();
    CROP_DETAILS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, details)| details)
}

/// Look up the guidance row for a crop, substituting the "N/A"
/// placeholder when the crop is not in the table.
pub fn details_or_placeholder(crop: &str) -> &'static CropDetails {
    get_crop_details(crop).unwrap_or(&PLACEHOLDER_DETAILS)
}

/// All guidance rows (for testing/debugging).
pub fn all_details() -> &'static [(&'static str, CropDetails)] {
    CROP_DETAILS
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CropCatalog;

    #[test]
    fn test_table_covers_classifier_label_set() {
        assert_eq!(CROP_DETAILS.len(), 29, "one row per classifier label");
    }

    #[test]
    fn test_no_duplicate_rows() {
        for (i, (name, _)) in CROP_DETAILS.iter().enumerate() {
            let dup = CROP_DETAILS[i + 1..]
                .iter()
                .any(|(other, _)| other.eq_ignore_ascii_case(name));
            assert!(!dup, "duplicate guidance row for {}", name);
        }
    }

    #[test]
    fn test_all_fields_populated() {
        for (name, details) in CROP_DETAILS {
            assert!(!details.planting_window.is_empty(), "{} planting window", name);
            assert!(!details.fertilizer.is_empty(), "{} fertilizer", name);
            assert!(!details.irrigation.is_empty(), "{} irrigation", name);
            assert!(!details.expected_yield.is_empty(), "{} expected yield", name);
        }
    }

    #[test]
    fn test_bundled_catalog_fully_covered() {
        let catalog = CropCatalog::bundled();
        for profile in catalog.profiles() {
            assert!(
                get_crop_details(&profile.name).is_some(),
                "no guidance row for catalog crop {}",
                profile.name
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trims() {
        let exact = get_crop_details("Sugarcane");
        let sloppy = get_crop_details("  sUgArCaNe  ");
        assert_eq!(exact, sloppy);
        assert_eq!(exact.map(|d| d.expected_yield), Some("80-100 tons/ha"));
    }

    #[test]
    fn test_spot_check_rows() {
        let coconut = get_crop_details("Coconut").unwrap();
        assert_eq!(coconut.expected_yield, "80-100 nuts/palm");
        assert_eq!(coconut.irrigation, "Drip/Basin");

        let chickpea = get_crop_details("Chickpea").unwrap();
        assert_eq!(chickpea.planting_window, "Oct-Nov");
        assert_eq!(chickpea.irrigation, "Sprinkler");

        let maize = get_crop_details("Maize").unwrap();
        assert_eq!(maize.planting_window, "June-July or Feb-March");
    }

    #[test]
    fn test_unknown_crop_gets_placeholder() {
        let details = details_or_placeholder("Quinoa");
        assert_eq!(details, &PLACEHOLDER_DETAILS);
        assert_eq!(details.planting_window, "N/A");
        assert_eq!(details.fertilizer, "N/A");
        assert_eq!(details.irrigation, "N/A");
        assert_eq!(details.expected_yield, "N/A");
    }

    #[test]
    fn test_known_crop_bypasses_placeholder() {
        let details = details_or_placeholder("tea");
        assert_eq!(details.fertilizer, "Ammonium Sulphate");
    }
}
