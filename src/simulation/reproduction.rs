//! Offspring placement and gray-value mutation.

use rand::Rng;

use super::geometric_utils::{gaussian, polar_offset, random_angle};
use super::moth::Moth;
use super::params::{ParentSelection, Params};

/// Moths eligible to become parents under the configured selection rule.
pub fn parent_candidates<'a>(population: &'a [Moth], params: &Params) -> Vec<&'a Moth> {
    match params.parent_selection {
        ParentSelection::AnyPresent => population.iter().collect(),
        ParentSelection::LivingOnly => population.iter().filter(|m| m.is_alive()).collect(),
    }
}

/// Produces one new moth with identifier `id`.
///
/// With no eligible parent a founder is placed uniformly in the arena with a
/// uniform gray value. Otherwise a parent is picked uniformly; the child lands
/// at a random heading and a distance in `[0, spawn_near_radius]` from it, and
/// inherits the parent's gray plus `N(0, mutation_std)`, clamped to `[0, 1]`.
pub fn spawn_offspring<R: Rng + ?Sized>(
    population: &[Moth],
    params: &Params,
    id: usize,
    rng: &mut R,
) -> Moth {
    let candidates = parent_candidates(population, params);
    if candidates.is_empty() {
        return Moth::new_random(id, params, rng);
    }

    let parent = candidates[rng.random_range(0..candidates.len())];

    let angle = random_angle(rng);
    let distance = rng.random_range(0.0..=params.spawn_near_radius);
    let pos = &parent.pos + &polar_offset(angle, distance);

    let gray = parent.gray + gaussian(rng, params.mutation_std);

    Moth::new(
        id,
        parent.generation + 1,
        Some(parent.id),
        pos[0],
        pos[1],
        gray,
        params,
    )
}
