use lanyard::{
    integrate, satisfy_constraints, ChainConfig, ChainState, InputController, InputModality,
    InteractionState, NoOpStepObserver, Simulation, Vec2, Viewport,
};
use proptest::prelude::*;

fn modality() -> impl Strategy<Value = InputModality> {
    prop_oneof![Just(InputModality::Mouse), Just(InputModality::Touch)]
}

proptest! {
    #[test]
    fn anchor_pinned_after_every_frame(
        width in 320.0f64..2560.0,
        kicks in prop::collection::vec((1usize..8, -60.0f64..60.0, -60.0f64..60.0), 0..6),
        beta in -180.0f64..180.0,
        gamma in -90.0f64..90.0,
        frames in 1usize..40,
        modality in modality(),
    ) {
        let mut sim = Simulation::with_defaults(Viewport::new(width, 900.0), modality).unwrap();
        sim.on_orientation(beta, gamma);
        let origin = sim.origin();
        let mut chain = sim.chain().clone();
        for (index, dx, dy) in kicks {
            chain.point_mut(index).position += Vec2::new(dx, dy);
        }
        let config = sim.config().clone();
        let interaction = sim.interaction().clone();
        for _ in 0..frames {
            integrate(&mut chain, &config, &interaction);
            satisfy_constraints(&mut chain, &config, &interaction, &mut NoOpStepObserver);
            prop_assert_eq!(chain.point(0).position, origin);
        }
        for _ in 0..frames {
            let frame = sim.tick();
            prop_assert_eq!(frame.points[0], origin);
        }
    }

    #[test]
    fn reset_is_straight_and_at_rest(
        joints in 2usize..40,
        length in 1.0f64..2000.0,
        ox in -1000.0f64..1000.0,
        oy in -1000.0f64..1000.0,
    ) {
        let config = ChainConfig::new()
            .with_joint_count(joints)
            .with_total_length(length)
            .with_origin(Vec2::new(ox, oy));
        let chain = ChainState::new(&config);
        let seg = config.segment_length();

        prop_assert_eq!(chain.len(), joints);
        for (i, p) in chain.points().iter().enumerate() {
            prop_assert_eq!(p.position, p.previous);
            prop_assert_eq!(p.position.x, ox);
            prop_assert!((p.position.y - (oy + seg * i as f64)).abs() < 1e-9);
        }
    }

    #[test]
    fn drag_never_exceeds_rope_length(
        px in -3000.0f64..3000.0,
        py in -3000.0f64..3000.0,
        grab_dx in -50.0f64..50.0,
        grab_dy in -50.0f64..50.0,
    ) {
        let config = ChainConfig::new().with_origin(Vec2::new(0.0, 80.0));
        let mut chain = ChainState::new(&config);
        let mut input = InputController::new(InputModality::Mouse);
        let grab = chain.end().position + Vec2::new(grab_dx, grab_dy);
        input.pointer_down(&chain, grab, 1);

        let pointer = Vec2::new(px, py);
        input.pointer_move(&mut chain, &config, pointer, 1);

        let target = pointer - Vec2::new(grab_dx, grab_dy);
        let wanted = target - config.origin;
        let got = chain.end().position - config.origin;
        if wanted.length() > config.total_length {
            prop_assert!((got.length() - config.total_length).abs() < 1e-9);
            // Parallel and pointing the same way.
            prop_assert!((wanted.x * got.y - wanted.y * got.x).abs() < 1e-6 * wanted.length());
            prop_assert!(wanted.dot(got) > 0.0);
        } else {
            prop_assert!((got - wanted).length() < 1e-9);
        }
        prop_assert_eq!(chain.end().position, chain.end().previous);
    }

    #[test]
    fn release_velocity_is_scaled_pointer_delta(
        dx in -80.0f64..80.0,
        dy in -80.0f64..80.0,
        modality in modality(),
    ) {
        let config = ChainConfig::new().with_origin(Vec2::new(0.0, 80.0));
        let mut chain = ChainState::new(&config);
        let mut input = InputController::new(modality);
        let grab = chain.end().position;
        input.pointer_down(&chain, grab, 1);
        input.pointer_move(&mut chain, &config, grab + Vec2::new(dx, dy), 1);
        input.pointer_up(&mut chain, &config, 1);

        let multiplier = match modality {
            InputModality::Touch => config.touch_momentum,
            InputModality::Mouse => config.mouse_momentum,
        };
        let v = chain.end().velocity();
        prop_assert!((v.x - dx * multiplier).abs() < 1e-9);
        prop_assert!((v.y - dy * multiplier).abs() < 1e-9);
    }

    #[test]
    fn kinematic_end_untouched_by_integration(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        tx in -5.0f64..5.0,
        ty in -5.0f64..5.0,
    ) {
        let config = ChainConfig::new();
        let mut chain = ChainState::new(&config);
        let mut interaction = InteractionState::new(InputModality::Touch);
        interaction.kinematic = true;
        interaction.tilt_force = Vec2::new(tx, ty);
        chain.end_mut().position = Vec2::new(x, y);
        chain.end_mut().previous = Vec2::new(y, x);

        integrate(&mut chain, &config, &interaction);
        prop_assert_eq!(chain.end().position, Vec2::new(x, y));
        prop_assert_eq!(chain.end().previous, Vec2::new(y, x));
    }
}
