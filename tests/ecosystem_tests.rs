#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use moth_sim::simulation::ecosystem::Ecosystem;
use moth_sim::simulation::error::SimError;
use moth_sim::simulation::events::SimulationEvent;
use moth_sim::simulation::locatable::Locatable;
use moth_sim::simulation::moth::Moth;
use moth_sim::simulation::params::Params;

fn create_test_params() -> Params {
    Params {
        arena_size: 400.0,
        initial_population: 60,
        max_population: 80,
        spawn_interval: 0.1,
        ..Params::default()
    }
}

#[test]
fn test_ecosystem_creation() {
    let params = create_test_params();
    let ecosystem = Ecosystem::new(&params, 1).unwrap();

    assert_eq!(ecosystem.moths.len(), params.initial_population);
    assert_eq!(ecosystem.time, 0.0);
    assert_eq!(ecosystem.eaten_count, 0);
    assert!(ecosystem.predator.in_bounds(&params));

    for (id, moth) in ecosystem.moths.iter().enumerate() {
        assert_eq!(moth.id, id);
        assert!(moth.is_alive());
        assert_eq!(moth.generation, 0);
        assert!(moth.in_bounds(&params));
        assert!((0.0..=1.0).contains(&moth.gray));
    }

    let stats = ecosystem.stats();
    assert_eq!(stats.alive, params.initial_population);
    assert_eq!(stats.on_screen, params.initial_population);
}

#[test]
fn test_invalid_config_rejected() {
    let bad = [
        Params {
            arena_size: 0.0,
            ..create_test_params()
        },
        Params {
            initial_population: 100,
            max_population: 10,
            ..create_test_params()
        },
        Params {
            survival_exponent: 1.0,
            ..create_test_params()
        },
        Params {
            spawn_interval: 0.0,
            ..create_test_params()
        },
        Params {
            predator_radius: 500.0,
            ..create_test_params()
        },
        Params {
            mutation_std: -0.1,
            ..create_test_params()
        },
        Params {
            cull_threshold: 1.0,
            ..create_test_params()
        },
    ];

    for params in &bad {
        let result = Ecosystem::new(params, 0);
        assert!(
            matches!(result, Err(SimError::InvalidConfig { .. })),
            "accepted {params:?}"
        );
    }
}

#[test]
fn test_invalid_dt_leaves_state_untouched() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params, 2).unwrap();
    ecosystem.step(0.05).unwrap();

    let moths_before = ecosystem.moths.clone();
    let predator_before = ecosystem.predator.clone();
    let time_before = ecosystem.time;

    for dt in [-0.01, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        assert!(matches!(
            ecosystem.step(dt),
            Err(SimError::InvalidTimestep(_))
        ));
    }

    assert_eq!(ecosystem.moths, moths_before);
    assert_eq!(ecosystem.predator, predator_before);
    assert_eq!(ecosystem.time, time_before);

    // the generator was not consumed either
    let mut twin = Ecosystem::new(&params, 2).unwrap();
    twin.step(0.05).unwrap();
    let a = ecosystem.step(0.05).unwrap();
    let b = twin.step(0.05).unwrap();
    assert_eq!(a.events, b.events);
    assert_eq!(ecosystem.moths, twin.moths);
}

#[test]
fn test_zero_dt_is_accepted() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params, 3).unwrap();
    let report = ecosystem.step(0.0).unwrap();

    assert_eq!(ecosystem.time, 0.0);
    assert_eq!(report.stats.on_screen, params.initial_population);
}

#[test]
fn test_simulation_step() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params, 4).unwrap();
    let dt = 0.05;

    ecosystem.step(dt).unwrap();
    assert!((ecosystem.time - dt).abs() < 1e-6);

    ecosystem.step(dt).unwrap();
    assert!((ecosystem.time - 2.0 * dt).abs() < 1e-6);
}

#[test]
fn test_spawn_waits_for_interval() {
    let params = Params {
        spawn_interval: 1.0,
        ..create_test_params()
    };
    let mut ecosystem = Ecosystem::new(&params, 5).unwrap();

    let mut spawned = 0;
    for _ in 0..9 {
        let report = ecosystem.step(0.1).unwrap();
        spawned += report
            .events
            .iter()
            .filter(|e| matches!(e, SimulationEvent::MothSpawned { .. }))
            .count();
    }
    assert_eq!(spawned, 0);

    let report = ecosystem.step(0.15).unwrap();
    let spawned: Vec<_> = report
        .events
        .iter()
        .filter(|e| matches!(e, SimulationEvent::MothSpawned { .. }))
        .collect();
    assert_eq!(spawned.len(), 1);
}

#[test]
fn test_population_cap() {
    let params = Params {
        initial_population: 5,
        max_population: 12,
        spawn_interval: 0.01,
        predator_speed: 0.0,
        predator_radius: 1.0,
        ..create_test_params()
    };
    let mut ecosystem = Ecosystem::new(&params, 6).unwrap();

    let mut reached_cap = false;
    for _ in 0..200 {
        ecosystem.step(0.02).unwrap();
        assert!(ecosystem.moths.len() <= params.max_population);
        reached_cap |= ecosystem.moths.len() == params.max_population;
    }
    assert!(reached_cap);
}

#[test]
fn test_spawned_ids_are_unique() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params, 7).unwrap();
    ecosystem.run(600, 1.0 / 60.0, || false).unwrap();

    let mut ids: Vec<usize> = ecosystem.moths.iter().map(|m| m.id).collect();
    let count = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), count);
}

#[test]
fn test_mismatched_moth_under_predator_is_caught() {
    let params = Params {
        initial_population: 0,
        max_population: 10,
        spawn_interval: 100.0,
        prey_radius: 0.0,
        outline_width: 0.0,
        predator_speed: 0.0,
        predator_turn_rate: 0.0,
        wander_speed: 0.0,
        ..create_test_params()
    };
    let mut ecosystem = Ecosystem::new(&params, 8).unwrap();

    // background is black at the left wall; a white moth there has no cover.
    // The predator touches it at exactly its catch radius.
    ecosystem.predator.pos[0] = params.predator_radius;
    ecosystem.predator.pos[1] = 200.0;
    ecosystem
        .moths
        .push(Moth::new(0, 0, None, 0.0, 200.0, 1.0, &params));

    let report = ecosystem.step(1.0 / 60.0).unwrap();

    let capture_probability = match report.events.as_slice() {
        [
            SimulationEvent::MothCaptured {
                moth_id: 0,
                capture_probability,
                ..
            },
        ] => *capture_probability,
        other => panic!("expected one capture, got {other:?}"),
    };
    assert_eq!(capture_probability, 1.0);
    assert!(!ecosystem.moths[0].is_alive());
    assert_eq!(ecosystem.eaten_count, 1);
    assert_eq!(report.captures(), 1);
    assert_eq!(report.stats.alive, 0);
    assert_eq!(report.stats.on_screen, 1);

    // a dead moth is never caught twice
    for _ in 0..10 {
        let report = ecosystem.step(1.0 / 60.0).unwrap();
        assert_eq!(report.captures(), 0);
    }
    assert_eq!(ecosystem.eaten_count, 1);
}

#[test]
fn test_perfect_camouflage_is_never_caught() {
    let params = Params {
        initial_population: 0,
        max_population: 10,
        spawn_interval: 100.0,
        predator_speed: 0.0,
        predator_turn_rate: 0.0,
        wander_speed: 0.0,
        ..create_test_params()
    };
    let mut ecosystem = Ecosystem::new(&params, 9).unwrap();

    ecosystem.predator.pos[0] = 200.0;
    ecosystem.predator.pos[1] = 200.0;
    let background = moth_sim::simulation::background::favorability(200.0, params.arena_size);
    ecosystem
        .moths
        .push(Moth::new(0, 0, None, 200.0, 200.0, background, &params));

    for _ in 0..600 {
        let report = ecosystem.step(1.0 / 60.0).unwrap();
        assert_eq!(report.captures(), 0);
    }
    assert_eq!(ecosystem.eaten_count, 0);
    assert!(ecosystem.moths[0].is_alive());
}

#[test]
fn test_captured_moth_is_removed_after_fade() {
    let params = Params {
        initial_population: 0,
        max_population: 10,
        spawn_interval: 100.0,
        predator_speed: 0.0,
        predator_turn_rate: 0.0,
        ..create_test_params()
    };
    let mut ecosystem = Ecosystem::new(&params, 10).unwrap();

    let mut moth = Moth::new(0, 0, None, 100.0, 100.0, 0.5, &params);
    moth.mark_captured();
    ecosystem.moths.push(moth);

    let mut removed_at = None;
    for tick in 0..200 {
        let report = ecosystem.step(1.0 / 60.0).unwrap();
        if report
            .events
            .iter()
            .any(|e| matches!(e, SimulationEvent::MothRemoved { moth_id: 0 }))
        {
            removed_at = Some(tick);
            break;
        }
        assert_eq!(ecosystem.moths.len(), 1);
    }

    // fade_duration of 1 s at 60 ticks per second
    let tick = removed_at.expect("moth was never removed");
    assert!((58..=60).contains(&tick), "removed at tick {tick}");
    assert!(ecosystem.moths.is_empty());
    // removal does not count as a capture
    assert_eq!(ecosystem.eaten_count, 0);
}

#[test]
fn test_counters_match_events() {
    let params = Params {
        arena_size: 300.0,
        initial_population: 150,
        max_population: 200,
        ..create_test_params()
    };
    let mut ecosystem = Ecosystem::new(&params, 11).unwrap();

    let mut captures = 0_u64;
    let mut spawns = 0_usize;
    let mut removals = 0_usize;
    for _ in 0..1200 {
        let report = ecosystem.step(1.0 / 60.0).unwrap();
        for event in &report.events {
            match event {
                SimulationEvent::MothCaptured { .. } => captures += 1,
                SimulationEvent::MothSpawned { .. } => spawns += 1,
                SimulationEvent::MothRemoved { .. } => removals += 1,
            }
        }
        assert_eq!(report.stats.eaten, ecosystem.eaten_count);
        assert_eq!(report.stats.on_screen, ecosystem.moths.len());
    }

    assert!(captures > 0, "predator never caught anything");
    assert_eq!(ecosystem.eaten_count, captures);
    assert_eq!(
        ecosystem.moths.len(),
        params.initial_population + spawns - removals
    );
    let dead = ecosystem.moths.iter().filter(|m| !m.is_alive()).count();
    assert_eq!(captures as usize, removals + dead);
}

#[test]
fn test_same_seed_same_run() {
    let params = create_test_params();
    let mut a = Ecosystem::new(&params, 42).unwrap();
    let mut b = Ecosystem::new(&params, 42).unwrap();

    for _ in 0..300 {
        let ra = a.step(1.0 / 60.0).unwrap();
        let rb = b.step(1.0 / 60.0).unwrap();
        assert_eq!(ra.events, rb.events);
        assert_eq!(ra.stats, rb.stats);
    }
    assert_eq!(a.moths, b.moths);
    assert_eq!(a.predator, b.predator);
}

#[test]
fn test_different_seeds_diverge() {
    let params = create_test_params();
    let mut a = Ecosystem::new(&params, 1).unwrap();
    let mut b = Ecosystem::new(&params, 2).unwrap();
    a.run(10, 1.0 / 60.0, || false).unwrap();
    b.run(10, 1.0 / 60.0, || false).unwrap();

    assert_ne!(a.moths, b.moths);
}

#[test]
fn test_run_honours_stop_signal() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params, 12).unwrap();

    let mut calls = 0;
    let executed = ecosystem
        .run(100, 1.0 / 60.0, || {
            calls += 1;
            calls > 25
        })
        .unwrap();

    assert_eq!(executed, 25);
    assert!((ecosystem.time - 25.0 / 60.0).abs() < 1e-4);
}

#[test]
fn test_run_rejects_invalid_dt() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params, 13).unwrap();

    assert!(ecosystem.run(10, f32::NAN, || false).is_err());
    assert_eq!(ecosystem.time, 0.0);
}

#[test]
fn test_event_log_records_spawns_and_captures() {
    let params = Params {
        arena_size: 300.0,
        initial_population: 150,
        max_population: 200,
        ..create_test_params()
    };
    let mut ecosystem = Ecosystem::new(&params, 14).unwrap();
    ecosystem.run(600, 1.0 / 60.0, || false).unwrap();

    let log = ecosystem.event_log.events();
    assert!(!log.is_empty());
    assert!(log.len() <= 20);
}

#[test]
fn test_empty_ecosystem_founds_new_population() {
    let params = Params {
        initial_population: 0,
        max_population: 5,
        spawn_interval: 0.1,
        ..create_test_params()
    };
    let mut ecosystem = Ecosystem::new(&params, 15).unwrap();
    assert!(ecosystem.moths.is_empty());

    ecosystem.run(2, 0.1, || false).unwrap();

    assert_eq!(ecosystem.moths.len(), 2);
    assert_eq!(ecosystem.moths[0].parent_id, None);
    assert_eq!(ecosystem.moths[1].parent_id, Some(ecosystem.moths[0].id));
}
