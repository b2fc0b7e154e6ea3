use crate::models::{AttendeeMix, CuisineProportions};

/// Share of the menu every crowd gets from universally palatable dishes
const UNIVERSAL_BASELINE: f64 = 0.15;

/// Derives the target cuisine mix from the attendee demographics.
///
/// Attendees of other backgrounds are split between south and north in
/// proportion to their existing shares (evenly when both are zero). The
/// universal share is the foreigner share plus a fixed baseline, and the
/// regional shares are scaled down to make room for it. After rounding to
/// two decimals only the universal share absorbs the remaining drift.
pub fn calculate_cuisine_proportions(mix: &AttendeeMix) -> CuisineProportions {
    if mix.is_empty() {
        return CuisineProportions::zero();
    }

    let mut south = mix.south_ratio();
    let mut north = mix.north_ratio();

    let others = mix.others_ratio();
    let regional = south + north;
    if regional > 0.0 {
        south += (south / regional) * others;
        north += (north / regional) * others;
    } else {
        south += others / 2.0;
        north += others / 2.0;
    }

    let mut universal = mix.foreigner_ratio() + UNIVERSAL_BASELINE;

    if south + north > 0.0 {
        // A foreigner share above 85% pushes universal past 1.0
        let room = (1.0 - universal).max(0.0);
        south *= room;
        north *= room;
    } else {
        universal = 1.0;
        south = 0.0;
        north = 0.0;
    }

    let south = round2(south);
    let north = round2(north);
    let mut universal = round2(universal);

    // Only universal is corrected; regional rounding error stays
    if south + north + universal != 1.0 {
        universal = 1.0 - (south + north);
    }

    CuisineProportions {
        south_indian: south,
        north_indian: north,
        universal,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
