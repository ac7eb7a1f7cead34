//! End-to-end physics scenarios run through `PhysicsSystem::step`.
//!
//! Velocities are in px/tick: forces are scaled by dt when applied and the
//! position step adds velocity unscaled. Drag is one flat multiply per tick.

use glam::Vec2;
use platformer_engine::core::geometry::{overlap, resolve_penetration, Rect};
use platformer_engine::{CollisionBox, Movement, PhysicsSystem, Scene, GRAVITY};

const DT: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

fn floor_at(scene: &mut Scene, y: f32) {
    scene
        .spawn("floor")
        .with_position(Vec2::new(-1000.0, y))
        .with_collision(CollisionBox::new(2000.0, 50.0));
}

#[test]
fn walk_one_tick_in_open_air() {
    let mut scene = Scene::new();
    let mut player = Movement::default().with_mass(10.0).with_walk_force(325.0);
    player.acceleration.x = player.walk_acceleration();
    scene
        .spawn("player")
        .with_position(Vec2::ZERO)
        .with_collision(CollisionBox::new(20.0, 40.0))
        .with_movement(player);

    PhysicsSystem::default().step(&mut scene, DT);

    // (325 / 10) * dt, less one tick of the default 5% drag.
    let m = scene.movement("player").unwrap();
    assert!(approx(m.velocity.x, 32.5 * DT * 0.95, 1e-5), "vx = {}", m.velocity.x);
    assert!(approx(scene.position("player").unwrap().x, m.velocity.x, 1e-6));
}

#[test]
fn walk_one_tick_without_drag_is_exact() {
    let mut scene = Scene::new();
    let mut player = Movement::default().with_drag(0.0);
    player.acceleration.x = player.walk_acceleration();
    scene
        .spawn("player")
        .with_position(Vec2::ZERO)
        .with_collision(CollisionBox::new(20.0, 40.0))
        .with_movement(player);

    PhysicsSystem::default().step(&mut scene, DT);

    assert!(approx(scene.movement("player").unwrap().velocity.x, (325.0 / 10.0) * DT, 1e-6));
}

#[test]
fn overlapping_boxes_resolve_on_the_shallow_axis() {
    let mut scene = Scene::new();
    scene
        .spawn("wall")
        .with_position(Vec2::new(20.0, 0.0))
        .with_collision(CollisionBox::square(40.0));
    scene
        .spawn("mover")
        .with_position(Vec2::ZERO)
        .with_collision(CollisionBox::square(40.0))
        .with_movement(Movement::default().with_velocity(Vec2::new(4.0, 0.0)));

    let mut physics = PhysicsSystem::default();
    physics.step(&mut scene, DT);

    let pos = scene.position("mover").unwrap();
    let m = scene.movement("mover").unwrap();
    assert!(approx(pos.x, -20.0, 1e-5), "x = {}", pos.x);
    assert_eq!(m.velocity.x, 0.0);
    assert!(!m.is_grounded);

    let pair = &physics.collisions()[0];
    assert_eq!(pair.collider.as_str(), "wall");
    assert_eq!(pair.mtv, Vec2::new(-20.0, 0.0));
}

#[test]
fn resting_on_a_static_collider_grounds_after_one_tick() {
    let mut scene = Scene::new();
    floor_at(&mut scene, 100.0);
    scene
        .spawn("player")
        .with_position(Vec2::new(0.0, 60.0))
        .with_collision(CollisionBox::new(20.0, 40.0))
        .with_movement(Movement::default());

    let mut physics = PhysicsSystem::default();
    for _ in 0..30 {
        physics.step(&mut scene, DT);
        let m = scene.movement("player").unwrap();
        assert!(m.is_grounded);
        assert_eq!(m.velocity.y, 0.0);
        assert_eq!(scene.position("player").unwrap().y, 60.0);
    }
}

#[test]
fn friction_stops_without_overshoot() {
    for start in [2.0_f32, -2.0, 0.05, 7.5] {
        let mut scene = Scene::new();
        floor_at(&mut scene, 100.0);
        let mut m = Movement::default().with_velocity(Vec2::new(start, 0.0));
        m.is_grounded = true;
        scene
            .spawn("player")
            .with_position(Vec2::new(0.0, 60.0))
            .with_collision(CollisionBox::new(20.0, 40.0))
            .with_movement(m);

        let mut physics = PhysicsSystem::default();
        let friction_per_tick = m.friction_coefficient * DT;
        let bound = (start.abs() / friction_per_tick).ceil() as usize;

        let mut stopped_at = None;
        for tick in 1..=bound {
            physics.step(&mut scene, DT);
            let vx = scene.movement("player").unwrap().velocity.x;
            assert!(vx * start.signum() >= 0.0, "start {} overshot to {} at tick {}", start, vx, tick);
            if vx == 0.0 {
                stopped_at = Some(tick);
                break;
            }
        }
        assert!(stopped_at.is_some(), "start {} still moving after {} ticks", start, bound);
    }
}

#[test]
fn free_fall_matches_drag_adjusted_closed_form() {
    let mut scene = Scene::new();
    let drag = 0.05_f32;
    scene
        .spawn("box")
        .with_position(Vec2::ZERO)
        .with_collision(CollisionBox::square(10.0))
        .with_movement(Movement::default().with_drag(drag));

    let mut physics = PhysicsSystem::default();
    let mut expected_y = 0.0_f32;
    for n in 1..=90 {
        physics.step(&mut scene, DT);

        let keep = 1.0 - drag;
        let v_n = GRAVITY * DT * keep * (1.0 - keep.powi(n)) / drag;
        expected_y += v_n;

        let vy = scene.movement("box").unwrap().velocity.y;
        assert!(approx(vy, v_n, 1e-4 * v_n.max(1.0)), "tick {}: vy {} vs {}", n, vy, v_n);
        assert!(vy < GRAVITY * n as f32 * DT);
    }
    let y = scene.position("box").unwrap().y;
    assert!(approx(y, expected_y, 1e-3 * expected_y), "y {} vs {}", y, expected_y);
}

#[test]
fn resolving_a_separated_pair_is_a_no_op() {
    let mover = Rect::new(0.0, 0.0, 40.0, 40.0);
    let wall = Rect::new(20.0, 0.0, 40.0, 40.0);

    let mtv = resolve_penetration(&mover, &wall).unwrap();
    let moved = mover.translated(mtv);
    assert_eq!(overlap(&moved, &wall), Vec2::ZERO);
    assert_eq!(resolve_penetration(&moved, &wall), None);
    assert_eq!(resolve_penetration(&moved, &wall), None);
}

#[test]
fn stepping_a_settled_scene_changes_nothing() {
    let mut scene = Scene::new();
    floor_at(&mut scene, 100.0);
    scene
        .spawn("player")
        .with_position(Vec2::new(0.0, 40.0))
        .with_collision(CollisionBox::new(20.0, 40.0))
        .with_movement(Movement::default());

    let mut physics = PhysicsSystem::default();
    for _ in 0..120 {
        physics.step(&mut scene, DT);
    }
    let settled = *scene.position("player").unwrap();
    physics.step(&mut scene, DT);
    assert_eq!(*scene.position("player").unwrap(), settled);
    assert!(approx(settled.y, 60.0, 0.02));
}

#[test]
fn movers_push_each_other_by_mass() {
    let mut scene = Scene::new();
    scene
        .spawn("a_light")
        .with_position(Vec2::ZERO)
        .with_collision(CollisionBox::square(40.0))
        .with_movement(Movement::default().with_mass(10.0).with_drag(0.0));
    scene
        .spawn("b_heavy")
        .with_position(Vec2::new(20.0, 0.0))
        .with_collision(CollisionBox::square(40.0))
        .with_movement(Movement::default().with_mass(30.0).with_drag(0.0));

    PhysicsSystem::default().step(&mut scene, DT);

    // "a_light" goes first and takes 3/4 of the 20px push; "b_heavy" then
    // resolves the remaining 5px overlap with a 1/4 share.
    let a = scene.position("a_light").unwrap().x;
    let b = scene.position("b_heavy").unwrap().x;
    assert!(approx(a, -15.0, 1e-4), "a = {}", a);
    assert!(approx(b, 21.25, 1e-4), "b = {}", b);
}
