use std::collections::{HashMap, HashSet};

use crate::models::{CuisineOrigin, CuisineProportions, Dish, DishCategory, EventParameters, MealType};

/// Categories that should have at least one dish on a full meal menu
const COVERAGE_FLOOR: [DishCategory; 5] = [
    DishCategory::Main,
    DishCategory::Side,
    DishCategory::Rice,
    DishCategory::Bread,
    DishCategory::Dessert,
];

/// Share of non-veg attendees above which a second non-veg dish is added
const SECOND_NON_VEG_THRESHOLD: f64 = 0.4;

/// Maximum number of dishes per category for one meal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCaps {
    pub main: usize,
    pub side: usize,
    pub bread: usize,
    pub rice: usize,
    pub dessert: usize,
    pub starter: usize,
}

impl CategoryCaps {
    pub fn for_meal(meal_type: MealType) -> Self {
        if meal_type.is_breakfast() {
            Self {
                main: 2,
                side: 3,
                bread: 1,
                rice: 0,
                dessert: 0,
                starter: 0,
            }
        } else {
            Self {
                main: 4,
                side: 3,
                bread: 2,
                rice: 2,
                dessert: 2,
                starter: 2,
            }
        }
    }

    pub fn cap(&self, category: DishCategory) -> usize {
        match category {
            DishCategory::Main => self.main,
            DishCategory::Side => self.side,
            DishCategory::Bread => self.bread,
            DishCategory::Rice => self.rice,
            DishCategory::Dessert => self.dessert,
            DishCategory::Starter => self.starter,
        }
    }
}

/// Size of the menu the origin quotas are computed against
pub fn target_dish_count(meal_type: MealType) -> usize {
    if meal_type.is_breakfast() {
        6
    } else {
        10
    }
}

/// Number of dishes wanted from one origin
pub fn origin_quota(proportions: &CuisineProportions, origin: CuisineOrigin, total: usize) -> usize {
    (proportions.get(origin) * total as f64).round().max(0.0) as usize
}

/// Picks a bounded, category-balanced menu from ranked dish lists.
///
/// `veg` and `non_veg` must already be filtered and sorted best first.
/// Selection happens in four passes:
/// 1. the top vegetarian dishes of each origin, up to that origin's quota
/// 2. for lunch and dinner, the best vegetarian dish of every floor
///    category, even when that category is already represented
/// 3. the best non-veg main when anyone eats non-veg, plus the next best
///    non-veg dish when they are more than 40% of the crowd
/// 4. de-duplication, then category caps applied in selection order
pub fn select_dishes<'a>(
    veg: &[&'a Dish],
    non_veg: &[&'a Dish],
    proportions: &CuisineProportions,
    params: &EventParameters,
) -> Vec<&'a Dish> {
    let caps = CategoryCaps::for_meal(params.meal_type);
    let total = target_dish_count(params.meal_type);

    let mut candidates: Vec<&Dish> = CuisineOrigin::ALL
        .iter()
        .flat_map(move |&origin| {
            veg.iter()
                .copied()
                .filter(move |d| d.origin == origin)
                .take(origin_quota(proportions, origin, total))
        })
        .collect();

    if !params.meal_type.is_breakfast() {
        add_coverage_floor(&mut candidates, veg, &caps);
    }

    candidates.extend(non_veg_picks(non_veg, params));

    let selected = apply_category_caps(dedup_by_id(candidates), &caps);

    tracing::debug!(
        selected = selected.len(),
        meal_type = ?params.meal_type,
        "Dishes selected"
    );

    selected
}

/// Appends the best dish of each floor category whose cap allows it.
///
/// Repeats and overflow are left to de-duplication and the category caps.
fn add_coverage_floor<'a>(candidates: &mut Vec<&'a Dish>, veg: &[&'a Dish], caps: &CategoryCaps) {
    let picks = COVERAGE_FLOOR
        .iter()
        .filter(|&&category| caps.cap(category) > 0)
        .filter_map(|&category| veg.iter().copied().find(|d| d.category == category));

    candidates.extend(picks);
}

fn non_veg_picks<'a>(non_veg: &[&'a Dish], params: &EventParameters) -> Vec<&'a Dish> {
    let eaters = params.non_veg_attendees();
    if eaters == 0 || non_veg.is_empty() {
        return Vec::new();
    }

    let main = non_veg
        .iter()
        .copied()
        .find(|d| d.category == DishCategory::Main);
    let mut picks: Vec<&Dish> = main.into_iter().collect();

    let total = params.total_attendees() as f64;
    if eaters as f64 > total * SECOND_NON_VEG_THRESHOLD && non_veg.len() > 1 {
        let second = non_veg
            .iter()
            .copied()
            .find(|d| main.map_or(true, |m| m.id != d.id));
        picks.extend(second);
    }

    picks
}

/// Drops repeated dishes, keeping the first occurrence
fn dedup_by_id(dishes: Vec<&Dish>) -> Vec<&Dish> {
    let mut seen = HashSet::new();
    dishes
        .into_iter()
        .filter(|d| seen.insert(d.id.clone()))
        .collect()
}

/// Admits dishes in order while their category still has room
fn apply_category_caps<'a>(dishes: Vec<&'a Dish>, caps: &CategoryCaps) -> Vec<&'a Dish> {
    let (_, kept) = dishes.into_iter().fold(
        (HashMap::<DishCategory, usize>::new(), Vec::new()),
        |(mut counts, mut kept), dish| {
            let count = counts.entry(dish.category).or_insert(0);
            if *count < caps.cap(dish.category) {
                *count += 1;
                kept.push(dish);
            }
            (counts, kept)
        },
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::fixtures::{dish, params};
    use crate::models::{AttendeeMix, DishType, EventType};
    use crate::services::filter::{filter_dishes, TypeFilter};
    use crate::services::proportions::calculate_cuisine_proportions;
    use crate::services::scoring::rank_dishes;

    fn ids(dishes: &[&Dish]) -> Vec<String> {
        dishes.iter().map(|d| d.id.to_string()).collect()
    }

    fn run(catalog: &Catalog, p: &EventParameters) -> Vec<String> {
        let veg = rank_dishes(
            filter_dishes(catalog.dishes(), p, TypeFilter::Only(DishType::Veg)),
            p,
        );
        let non_veg = rank_dishes(
            filter_dishes(catalog.dishes(), p, TypeFilter::Only(DishType::NonVeg)),
            p,
        );
        let proportions = calculate_cuisine_proportions(&p.attendee_mix);
        ids(&select_dishes(&veg, &non_veg, &proportions, p))
    }

    fn non_veg(d: Dish) -> Dish {
        Dish {
            dish_type: DishType::NonVeg,
            ..d
        }
    }

    #[test]
    fn test_caps_by_meal() {
        let breakfast = CategoryCaps::for_meal(MealType::Breakfast);
        assert_eq!(breakfast.cap(DishCategory::Main), 2);
        assert_eq!(breakfast.cap(DishCategory::Bread), 1);
        assert_eq!(breakfast.cap(DishCategory::Rice), 0);
        assert_eq!(breakfast.cap(DishCategory::Starter), 0);

        let dinner = CategoryCaps::for_meal(MealType::Dinner);
        assert_eq!(dinner.cap(DishCategory::Main), 4);
        assert_eq!(dinner.cap(DishCategory::Side), 3);
        assert_eq!(dinner, CategoryCaps::for_meal(MealType::Lunch));

        assert_eq!(target_dish_count(MealType::Breakfast), 6);
        assert_eq!(target_dish_count(MealType::Lunch), 10);
    }

    #[test]
    fn test_origin_quota_rounds() {
        let proportions = CuisineProportions {
            south_indian: 0.45,
            north_indian: 0.22,
            universal: 0.33,
        };
        assert_eq!(origin_quota(&proportions, CuisineOrigin::SouthIndian, 10), 5);
        assert_eq!(origin_quota(&proportions, CuisineOrigin::NorthIndian, 10), 2);
        assert_eq!(origin_quota(&proportions, CuisineOrigin::Universal, 10), 3);
        assert_eq!(origin_quota(&CuisineProportions::zero(), CuisineOrigin::Universal, 10), 0);
    }

    #[test]
    fn test_prefix_per_origin_not_global() {
        let s1 = dish("s1", CuisineOrigin::SouthIndian, DishCategory::Side);
        let n1 = dish("n1", CuisineOrigin::NorthIndian, DishCategory::Side);
        let s2 = dish("s2", CuisineOrigin::SouthIndian, DishCategory::Side);
        let proportions = CuisineProportions {
            south_indian: 0.1,
            north_indian: 0.1,
            universal: 0.8,
        };
        let p = EventParameters {
            meal_type: MealType::Breakfast,
            veg_non_veg_ratio: 1.0,
            ..params(1, 1, 0, 0)
        };

        // breakfast: 6 * 0.1 rounds to 1 per region, no coverage floor
        let selected = select_dishes(&[&s1, &n1, &s2], &[], &proportions, &p);
        assert_eq!(ids(&selected), vec!["s1", "n1"]);
    }

    #[test]
    fn test_coverage_floor_fills_missing_categories_once() {
        let main = dish("main", CuisineOrigin::Universal, DishCategory::Main);
        let side_a = dish("side-a", CuisineOrigin::SouthIndian, DishCategory::Side);
        let side_b = dish("side-b", CuisineOrigin::SouthIndian, DishCategory::Side);
        let rice = dish("rice", CuisineOrigin::NorthIndian, DishCategory::Rice);
        let starter = dish("starter", CuisineOrigin::NorthIndian, DishCategory::Starter);
        let veg = [&main, &side_a, &side_b, &rice, &starter];
        let p = EventParameters {
            veg_non_veg_ratio: 1.0,
            ..params(0, 0, 0, 0)
        };

        // no origin quotas at all: only the floor contributes
        let selected = select_dishes(&veg, &[], &CuisineProportions::zero(), &p);
        assert_eq!(ids(&selected), vec!["main", "side-a", "rice"]);
    }

    #[test]
    fn test_coverage_floor_adds_best_dish_of_covered_category() {
        let top_main = dish("top-main", CuisineOrigin::Universal, DishCategory::Main);
        let south_main = dish("south-main", CuisineOrigin::SouthIndian, DishCategory::Main);
        let proportions = CuisineProportions {
            south_indian: 0.1,
            north_indian: 0.0,
            universal: 0.0,
        };
        let p = EventParameters {
            veg_non_veg_ratio: 1.0,
            ..params(1, 0, 0, 0)
        };

        // the quota already picked a main, the floor still adds the best one
        let selected = select_dishes(&[&top_main, &south_main], &[], &proportions, &p);
        assert_eq!(ids(&selected), vec!["south-main", "top-main"]);
    }

    #[test]
    fn test_coverage_floor_pick_already_selected_is_not_repeated() {
        let south_main = dish("south-main", CuisineOrigin::SouthIndian, DishCategory::Main);
        let proportions = CuisineProportions {
            south_indian: 0.1,
            north_indian: 0.0,
            universal: 0.0,
        };
        let p = EventParameters {
            veg_non_veg_ratio: 1.0,
            ..params(1, 0, 0, 0)
        };

        let selected = select_dishes(&[&south_main], &[], &proportions, &p);
        assert_eq!(ids(&selected), vec!["south-main"]);
    }

    #[test]
    fn test_no_coverage_floor_at_breakfast() {
        let side = dish("side", CuisineOrigin::SouthIndian, DishCategory::Side);
        let p = EventParameters {
            meal_type: MealType::Breakfast,
            veg_non_veg_ratio: 1.0,
            ..params(0, 0, 0, 0)
        };
        assert!(select_dishes(&[&side], &[], &CuisineProportions::zero(), &p).is_empty());
    }

    #[test]
    fn test_single_non_veg_main_for_small_non_veg_crowd() {
        let starter = non_veg(dish("kebab", CuisineOrigin::NorthIndian, DishCategory::Starter));
        let curry = non_veg(dish("curry", CuisineOrigin::SouthIndian, DishCategory::Main));
        let fry = non_veg(dish("fry", CuisineOrigin::SouthIndian, DishCategory::Main));
        let p = EventParameters {
            attendee_mix: AttendeeMix::new(10, 0, 0, 0),
            veg_non_veg_ratio: 0.7,
            ..params(0, 0, 0, 0)
        };

        let picks = non_veg_picks(&[&starter, &curry, &fry], &p);
        assert_eq!(ids(&picks), vec!["curry"]);
    }

    #[test]
    fn test_second_non_veg_dish_above_forty_percent() {
        let starter = non_veg(dish("kebab", CuisineOrigin::NorthIndian, DishCategory::Starter));
        let curry = non_veg(dish("curry", CuisineOrigin::SouthIndian, DishCategory::Main));
        let p = EventParameters {
            attendee_mix: AttendeeMix::new(10, 0, 0, 0),
            veg_non_veg_ratio: 0.5,
            ..params(0, 0, 0, 0)
        };

        // main first, then the best remaining dish of any category
        let picks = non_veg_picks(&[&starter, &curry], &p);
        assert_eq!(ids(&picks), vec!["curry", "kebab"]);
    }

    #[test]
    fn test_second_non_veg_without_any_main() {
        let kebab = non_veg(dish("kebab", CuisineOrigin::NorthIndian, DishCategory::Starter));
        let tikka = non_veg(dish("tikka", CuisineOrigin::NorthIndian, DishCategory::Starter));
        let p = EventParameters {
            attendee_mix: AttendeeMix::new(10, 0, 0, 0),
            veg_non_veg_ratio: 0.0,
            ..params(0, 0, 0, 0)
        };

        let picks = non_veg_picks(&[&kebab, &tikka], &p);
        assert_eq!(ids(&picks), vec!["kebab"]);
    }

    #[test]
    fn test_no_non_veg_for_all_veg_crowd() {
        let curry = non_veg(dish("curry", CuisineOrigin::SouthIndian, DishCategory::Main));
        let p = EventParameters {
            veg_non_veg_ratio: 1.0,
            ..params(10, 10, 0, 0)
        };
        assert!(non_veg_picks(&[&curry], &p).is_empty());
    }

    #[test]
    fn test_caps_drop_overflow_in_selection_order() {
        let mains: Vec<Dish> = (0..6)
            .map(|i| dish(&format!("main-{i}"), CuisineOrigin::Universal, DishCategory::Main))
            .collect();
        let refs: Vec<&Dish> = mains.iter().collect();
        let caps = CategoryCaps::for_meal(MealType::Dinner);

        let kept = apply_category_caps(refs, &caps);
        assert_eq!(ids(&kept), vec!["main-0", "main-1", "main-2", "main-3"]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let a = dish("a", CuisineOrigin::Universal, DishCategory::Side);
        let b = dish("b", CuisineOrigin::Universal, DishCategory::Main);
        let deduped = dedup_by_id(vec![&a, &b, &a, &b, &a]);
        assert_eq!(ids(&deduped), vec!["a", "b"]);
    }

    #[test]
    fn test_builtin_default_dinner() {
        let catalog = Catalog::builtin().unwrap();
        let selected = run(&catalog, &params(60, 30, 10, 0));

        // chicken chettinad is picked but the main cap is already full
        assert_eq!(
            selected,
            vec![
                "dosa",
                "sambar",
                "curd-rice",
                "bisibelebath",
                "paneer-butter-masala",
                "dal-makhani",
                "jeera-rice",
                "naan",
                "gulab-jamun",
            ]
        );
    }

    #[test]
    fn test_builtin_foreigner_heavy_wedding_lunch() {
        let catalog = Catalog::builtin().unwrap();
        let p = EventParameters {
            veg_non_veg_ratio: 0.3,
            meal_type: MealType::Lunch,
            event_type: EventType::Wedding,
            ..params(20, 20, 50, 10)
        };

        assert_eq!(
            run(&catalog, &p),
            vec![
                "sambar",
                "paneer-butter-masala",
                "jeera-rice",
                "mixed-vegetable-curry",
                "dal-tadka",
                "raita",
                "papad",
                "naan",
                "butter-chicken",
            ]
        );
    }

    #[test]
    fn test_builtin_breakfast() {
        let catalog = Catalog::builtin().unwrap();
        let p = EventParameters {
            veg_non_veg_ratio: 1.0,
            meal_type: MealType::Breakfast,
            ..params(10, 10, 0, 0)
        };

        assert_eq!(run(&catalog, &p), vec!["dosa", "idli", "sambar"]);
    }

    #[test]
    fn test_caps_hold_for_every_meal_and_event() {
        let catalog = Catalog::builtin().unwrap();
        for meal_type in [MealType::Breakfast, MealType::Lunch, MealType::Dinner] {
            for event_type in [EventType::Casual, EventType::Wedding, EventType::Corporate] {
                for ratio in [0.0, 0.5, 1.0] {
                    let p = EventParameters {
                        veg_non_veg_ratio: ratio,
                        meal_type,
                        event_type,
                        ..params(30, 40, 20, 10)
                    };
                    let veg = rank_dishes(
                        filter_dishes(catalog.dishes(), &p, TypeFilter::Only(DishType::Veg)),
                        &p,
                    );
                    let non_veg = rank_dishes(
                        filter_dishes(catalog.dishes(), &p, TypeFilter::Only(DishType::NonVeg)),
                        &p,
                    );
                    let proportions = calculate_cuisine_proportions(&p.attendee_mix);
                    let selected = select_dishes(&veg, &non_veg, &proportions, &p);

                    let caps = CategoryCaps::for_meal(meal_type);
                    let mut counts: HashMap<DishCategory, usize> = HashMap::new();
                    for d in &selected {
                        *counts.entry(d.category).or_insert(0) += 1;
                    }
                    for (category, count) in counts {
                        assert!(count <= caps.cap(category));
                    }

                    let unique: HashSet<_> = selected.iter().map(|d| &d.id).collect();
                    assert_eq!(unique.len(), selected.len());
                }
            }
        }
    }
}
