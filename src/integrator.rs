//! Explicit Verlet step for the free joints.

use crate::chain::ChainState;
use crate::config::ChainConfig;
use crate::float::Float;
use crate::input::InteractionState;

/// Advance every free joint by one frame.
///
/// Joint 0 is pinned and never integrated; the card joint is skipped while it is
/// kinematic. Damping, gravity and tilt act directly on the position delta, so
/// there is no velocity state to keep in sync.
pub fn integrate<F: Float>(
    chain: &mut ChainState<F>,
    config: &ChainConfig<F>,
    interaction: &InteractionState<F>,
) {
    let last = chain.last_index();
    let tilted = interaction.modality.is_touch() && !interaction.is_dragging();

    for (i, p) in chain.points_mut().iter_mut().enumerate().skip(1) {
        let is_end = i == last;
        if is_end && interaction.kinematic {
            continue;
        }

        let mut v = p.velocity().scale(config.damping);
        v.y = v.y + config.gravity * if is_end { config.end_mass } else { F::one() };
        if is_end && tilted {
            v += interaction.tilt_force;
        }
        p.advance(v);
    }
}
