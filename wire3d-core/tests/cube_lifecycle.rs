use nalgebra::Point2;
use std::f64::consts::TAU;
use wire3d_core::{
    erase_radius, CommandLog, CubeConfig, CubeRenderer, DrawCommand, Palette, Phase, Projector,
    RotationState, Wireframe,
};

fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

#[test]
fn test_angles_after_many_updates() {
    let config = CubeConfig::default();
    let mut cube = CubeRenderer::new(config, CommandLog::new(), Palette::new(1u8, 0u8));
    cube.draw();

    for n in 1..=1500u32 {
        cube.update();
        if n % 250 != 0 {
            continue;
        }
        let rotation = cube.rotation();
        for (angle, delta) in [
            (rotation.x, config.step.x),
            (rotation.y, config.step.y),
            (rotation.z, config.step.z),
        ] {
            assert!((0.0..std::f32::consts::TAU).contains(&angle), "angle {angle} out of range");
            let expected = (n as f64 * delta as f64).rem_euclid(TAU);
            assert!(
                circular_distance(angle as f64, expected) < 1e-3,
                "after {n} updates: {angle} vs {expected}"
            );
        }
    }
    assert_eq!(cube.phase(), Phase::Stepping);
}

#[test]
fn test_erase_radius_bounds_every_orientation() {
    let cube = Wireframe::cube();
    let steps = 24;
    for scale in [3.0f32, 5.0, 10.0, 20.0, 37.5, 64.0] {
        let center = Point2::new(100, 100);
        let projector = Projector::new(center, scale);
        let radius = erase_radius(scale) as f32;
        let mut farthest = 0.0f32;

        for i in 0..steps {
            for j in 0..steps {
                for k in 0..steps {
                    let t = std::f32::consts::TAU / steps as f32;
                    let rotation = RotationState::new(i as f32 * t, j as f32 * t + 0.1, k as f32 * t + 0.05);
                    for p in cube.project(&rotation, &projector) {
                        let d = (p - center).cast::<f32>().norm();
                        farthest = farthest.max(d);
                    }
                }
            }
        }
        assert!(
            farthest <= radius,
            "scale {scale}: vertex at {farthest} outside erase radius {radius}"
        );
    }
}

#[test]
fn test_frame_stays_centered_on_config() {
    let config = CubeConfig::new(Point2::new(64, 80), 24.0);
    let mut cube = CubeRenderer::new(config, CommandLog::new(), Palette::new('#', ' '));
    for _ in 0..50 {
        cube.update();
    }
    let points = cube.projected_vertices();
    // Opposite corners stay symmetric about the center, up to rounding
    for (a, b) in [(0, 6), (1, 7), (2, 4), (3, 5)] {
        let mid_x = points[a].x + points[b].x;
        let mid_y = points[a].y + points[b].y;
        assert!((mid_x - 128).abs() <= 1, "{a}/{b}: {mid_x}");
        assert!((mid_y - 160).abs() <= 1, "{a}/{b}: {mid_y}");
    }
}

#[test]
fn test_scenario_corner_positions() {
    let projector = Projector::new(Point2::new(40, 40), 20.0);
    let cube = Wireframe::cube();

    let at_rest = cube.project(&RotationState::zero(), &projector);
    assert_eq!(at_rest[0], Point2::new(20, 20));

    let flipped = cube.project(&RotationState::new(0.0, 0.0, std::f32::consts::PI), &projector);
    assert_eq!(flipped[0], Point2::new(60, 60));
    assert_eq!(erase_radius(20.0), 38);
}

#[test]
fn test_update_sequence_is_erase_then_edges() {
    let mut cube = CubeRenderer::new(CubeConfig::default(), CommandLog::new(), Palette::new(7u8, 0u8));
    cube.draw();
    for _ in 0..3 {
        cube.update();
    }
    let commands = cube.into_surface().take();
    assert_eq!(commands.len(), 12 + 3 * 13);
    for (i, command) in commands.iter().enumerate() {
        let is_erase = i >= 12 && (i - 12) % 13 == 0;
        match command {
            DrawCommand::FillCircle { radius, color, .. } => {
                assert!(is_erase, "unexpected erase at {i}");
                assert_eq!((*radius, *color), (38, 0));
            }
            DrawCommand::Line { color, .. } => {
                assert!(!is_erase, "expected erase at {i}");
                assert_eq!(*color, 7);
            }
        }
    }
}
