#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use moth_sim::simulation::ecosystem::Ecosystem;
use moth_sim::simulation::locatable::Locatable;
use moth_sim::simulation::params::{ParentSelection, Params};
use moth_sim::simulation::survival::capture_probability;
use proptest::prelude::*;

fn small_params(living_only: bool, mutation_std: f32) -> Params {
    Params {
        arena_size: 250.0,
        initial_population: 25,
        max_population: 40,
        spawn_interval: 0.05,
        mutation_std,
        parent_selection: if living_only {
            ParentSelection::LivingOnly
        } else {
            ParentSelection::AnyPresent
        },
        ..Params::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn population_stays_within_arena_and_trait_range(
        seed in any::<u64>(),
        living_only in any::<bool>(),
        mutation_std in 0.0f32..0.5,
        ticks in 1u64..240,
    ) {
        let params = small_params(living_only, mutation_std);
        let mut ecosystem = Ecosystem::new(&params, seed).unwrap();
        ecosystem.run(ticks, 1.0 / 60.0, || false).unwrap();

        prop_assert!(ecosystem.moths.len() <= params.max_population);
        prop_assert!(ecosystem.predator.in_bounds(&params));
        for moth in &ecosystem.moths {
            prop_assert!(moth.in_bounds(&params));
            prop_assert!((0.0..=1.0).contains(&moth.gray));
            prop_assert!((0.0..=1.0).contains(&moth.fade));
            prop_assert!(moth.fade > params.cull_threshold);
            if moth.is_alive() {
                prop_assert_eq!(moth.fade, 1.0);
            }
        }
    }

    #[test]
    fn eaten_count_never_decreases(seed in any::<u64>(), dt in 0.0f32..0.1) {
        let params = small_params(false, 0.06);
        let mut ecosystem = Ecosystem::new(&params, seed).unwrap();

        let mut previous = 0;
        for _ in 0..120 {
            ecosystem.step(dt).unwrap();
            prop_assert!(ecosystem.eaten_count >= previous);
            previous = ecosystem.eaten_count;
        }
    }

    #[test]
    fn capture_probability_is_a_probability(
        gray in 0.0f32..=1.0,
        background in 0.0f32..=1.0,
        k in 1.01f32..10.0,
    ) {
        let p = capture_probability(gray, background, k);
        prop_assert!((0.0..=1.0).contains(&p));
        if gray == background {
            prop_assert_eq!(p, 0.0);
        }
    }
}
