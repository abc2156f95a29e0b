#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use moth_sim::simulation::locatable::Locatable;
use moth_sim::simulation::moth::Moth;
use moth_sim::simulation::params::{ParentSelection, Params};
use moth_sim::simulation::reproduction::{parent_candidates, spawn_offspring};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_founder_from_empty_population() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(1);

    for id in 0..100 {
        let moth = spawn_offspring(&[], &params, id, &mut rng);
        assert_eq!(moth.id, id);
        assert_eq!(moth.generation, 0);
        assert_eq!(moth.parent_id, None);
        assert!(moth.is_alive());
        assert!(moth.in_bounds(&params));
        assert!((0.0..=1.0).contains(&moth.gray));
    }
}

#[test]
fn test_exact_copy_without_mutation_or_spread() {
    let params = Params {
        mutation_std: 0.0,
        spawn_near_radius: 0.0,
        ..Params::default()
    };
    let parent = Moth::new(7, 3, None, 300.0, 300.0, 0.5, &params);
    let mut rng = StdRng::seed_from_u64(2);

    let child = spawn_offspring(std::slice::from_ref(&parent), &params, 8, &mut rng);

    assert_eq!(child.pos[0], 300.0);
    assert_eq!(child.pos[1], 300.0);
    assert_eq!(child.gray, 0.5);
    assert_eq!(child.generation, 4);
    assert_eq!(child.parent_id, Some(7));
}

#[test]
fn test_offspring_near_parent() {
    let params = Params::default();
    let parent = Moth::new(0, 0, None, 300.0, 300.0, 0.5, &params);
    let mut rng = StdRng::seed_from_u64(3);

    for id in 1..200 {
        let child = spawn_offspring(std::slice::from_ref(&parent), &params, id, &mut rng);
        let dx = child.pos[0] - parent.pos[0];
        let dy = child.pos[1] - parent.pos[1];
        assert!(dx.hypot(dy) <= params.spawn_near_radius + 1e-3);
    }
}

#[test]
fn test_offspring_clamped_near_wall() {
    let params = Params {
        mutation_std: 0.5,
        ..Params::default()
    };
    let parent = Moth::new(0, 0, None, 0.0, 0.0, 0.99, &params);
    let mut rng = StdRng::seed_from_u64(4);

    for id in 1..200 {
        let child = spawn_offspring(std::slice::from_ref(&parent), &params, id, &mut rng);
        assert!(child.in_bounds(&params));
        assert!((0.0..=1.0).contains(&child.gray));
    }
}

#[test]
fn test_fading_moths_can_parent_by_default() {
    let params = Params::default();
    assert_eq!(params.parent_selection, ParentSelection::AnyPresent);

    let mut dead = Moth::new(0, 0, None, 300.0, 300.0, 0.5, &params);
    dead.mark_captured();

    let candidates = parent_candidates(std::slice::from_ref(&dead), &params);
    assert_eq!(candidates.len(), 1);

    let mut rng = StdRng::seed_from_u64(5);
    let child = spawn_offspring(std::slice::from_ref(&dead), &params, 1, &mut rng);
    assert_eq!(child.parent_id, Some(0));
    assert!(child.is_alive());
}

#[test]
fn test_living_only_never_picks_dead_parent() {
    let params = Params {
        parent_selection: ParentSelection::LivingOnly,
        ..Params::default()
    };

    let mut population: Vec<Moth> = (0..10)
        .map(|id| Moth::new(id, 0, None, 300.0, 300.0, 0.5, &params))
        .collect();
    for moth in population.iter_mut().filter(|m| m.id != 4) {
        moth.mark_captured();
    }

    let mut rng = StdRng::seed_from_u64(6);
    for id in 10..110 {
        let child = spawn_offspring(&population, &params, id, &mut rng);
        assert_eq!(child.parent_id, Some(4));
    }
}

#[test]
fn test_living_only_falls_back_to_founder() {
    let params = Params {
        parent_selection: ParentSelection::LivingOnly,
        ..Params::default()
    };
    let mut dead = Moth::new(0, 2, None, 300.0, 300.0, 0.5, &params);
    dead.mark_captured();

    let mut rng = StdRng::seed_from_u64(7);
    let child = spawn_offspring(std::slice::from_ref(&dead), &params, 1, &mut rng);
    assert_eq!(child.parent_id, None);
    assert_eq!(child.generation, 0);
}

#[test]
fn test_parent_choice_is_spread_over_population() {
    let params = Params::default();
    let population: Vec<Moth> = (0..4)
        .map(|id| Moth::new(id, 0, None, 300.0, 300.0, 0.5, &params))
        .collect();

    let mut counts = [0_usize; 4];
    let mut rng = StdRng::seed_from_u64(8);
    for id in 4..4004 {
        let child = spawn_offspring(&population, &params, id, &mut rng);
        if let Some(parent) = child.parent_id {
            counts[parent] += 1;
        }
    }

    for count in counts {
        assert!(count > 800, "parent picked only {count} times out of 4000");
    }
}
