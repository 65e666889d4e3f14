//! Tests for the arena pipeline, entity factory, and collision handling.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use braitenberg_core::commands::Command;
use braitenberg_core::components::{Body, Food, Motion, Robot};
use braitenberg_core::config::{ArenaParams, ConfigError};
use braitenberg_core::constants::*;
use braitenberg_core::enums::*;
use braitenberg_core::events::ArenaEvent;
use braitenberg_core::state::{ArenaSnapshot, EntityView};
use braitenberg_core::types::{Pose, WheelVelocity};

use crate::arena::Arena;
use crate::factory::{cell_center, grid_size, EntityFactory};
use crate::systems::collision::{separate, touching_walls, Bounds};
use crate::systems::sensing::is_feeding;

fn empty_params() -> ArenaParams {
    ArenaParams {
        robot_count: 0,
        light_count: 0,
        food_count: 0,
        ..Default::default()
    }
}

fn empty_arena() -> Arena {
    Arena::new(empty_params()).unwrap()
}

fn view(snapshot: &ArenaSnapshot, id: u32) -> &EntityView {
    snapshot.entities.iter().find(|e| e.id == id).unwrap()
}

fn set_hunger(arena: &mut Arena, robot: hecs::Entity, hunger: u32) {
    arena.world_mut().get::<&mut Robot>(robot).unwrap().hunger = hunger;
}

fn hunger_of(arena: &Arena, robot: hecs::Entity) -> u32 {
    arena.world().get::<&Robot>(robot).unwrap().hunger
}

// ---- Construction ----

#[test]
fn test_default_population() {
    let arena = Arena::new(ArenaParams::default()).unwrap();
    let snap = arena.snapshot();

    assert_eq!(snap.count(EntityKind::Robot), 10);
    assert_eq!(snap.count(EntityKind::Light), 4);
    assert_eq!(snap.count(EntityKind::Food), 4);
    assert_eq!(snap.status, GameStatus::Playing);
    assert!(!snap.paused);

    let ids: Vec<u32> = snap.entities.iter().map(|e| e.id).collect();
    assert_eq!(ids, (0..18).collect::<Vec<_>>());

    // First half Fear ("C"), the rest Explorer ("E").
    let names: Vec<&str> = snap.entities[..10].iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["C", "C", "C", "C", "C", "E", "E", "E", "E", "E"]);
    assert_eq!(snap.entities[10].name, "Light10");
    assert_eq!(snap.entities[17].name, "Food");
}

#[test]
fn test_spawned_entities_within_ranges() {
    let arena = Arena::new(ArenaParams::default()).unwrap();
    for e in arena.snapshot().entities {
        let (min, max) = match e.kind {
            EntityKind::Robot => (ROBOT_MIN_RADIUS, ROBOT_MAX_RADIUS),
            EntityKind::Light => (LIGHT_MIN_RADIUS, LIGHT_MAX_RADIUS),
            EntityKind::Food => (FOOD_RADIUS, FOOD_RADIUS),
        };
        assert!(e.radius >= min && e.radius <= max, "{:?} radius {}", e.kind, e.radius);
        assert!(e.pose.x - e.radius > 0.0 && e.pose.x + e.radius < ARENA_WIDTH);
        assert!(e.pose.y - e.radius > 0.0 && e.pose.y + e.radius < ARENA_HEIGHT);
        assert!(e.pose.heading >= 0.0 && e.pose.heading < 360.0);
    }
}

#[test]
fn test_food_disabled_spawns_no_food() {
    let arena = Arena::new(ArenaParams {
        food_enabled: false,
        ..Default::default()
    })
    .unwrap();
    let snap = arena.snapshot();
    assert_eq!(snap.count(EntityKind::Food), 0);
    assert!(!snap.food_enabled);
}

#[test]
fn test_invalid_params_rejected() {
    let result = Arena::new(ArenaParams {
        robot_count: 65,
        ..Default::default()
    });
    assert!(matches!(result, Err(ConfigError::TooMany { kind: "robot", .. })));

    let result = Arena::new(ArenaParams {
        width: 0.0,
        ..Default::default()
    });
    assert!(matches!(result, Err(ConfigError::InvalidDimensions { .. })));
}

#[test]
fn test_fear_ratio_rounds_down() {
    let arena = Arena::new(ArenaParams {
        robot_count: 3,
        fear_ratio: 50,
        ..Default::default()
    })
    .unwrap();
    let fear = arena
        .snapshot()
        .entities
        .iter()
        .filter_map(|e| e.robot.as_ref())
        .filter(|r| r.behavior == BehaviorKind::Fear)
        .count();
    assert_eq!(fear, 1);
}

// ---- Factory ----

#[test]
fn test_spawn_grid_dimensions() {
    assert_eq!(grid_size(1024.0, 768.0), (19, 14));
    assert_eq!(cell_center(0, 0), (30.0, 30.0));
    assert_eq!(cell_center(18, 13), (930.0, 680.0));
    assert_eq!(grid_size(100.0, 40.0), (1, 1));
}

#[test]
fn test_huge_arena_is_rejected() {
    let result = Arena::new(ArenaParams {
        width: 1e7,
        height: 1e7,
        ..Default::default()
    });
    assert!(matches!(result, Err(ConfigError::ArenaTooLarge { .. })));
}

#[test]
fn test_largest_arena_spawns_inside_walls() {
    let arena = Arena::new(ArenaParams {
        width: MAX_ARENA_DIMENSION,
        height: MAX_ARENA_DIMENSION,
        ..Default::default()
    })
    .unwrap();
    let snap = arena.snapshot();
    assert_eq!(snap.entities.len(), 18);
    for entity in &snap.entities {
        assert!(entity.pose.x > 0.0 && entity.pose.x < MAX_ARENA_DIMENSION);
        assert!(entity.pose.y > 0.0 && entity.pose.y < MAX_ARENA_DIMENSION);
    }
}

#[test]
fn test_factory_reuses_cells_once_grid_is_full() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut factory = EntityFactory::new(&mut world, &mut rng, 100.0, 100.0);
    for _ in 0..5 {
        factory.create(EntityKind::Food);
    }
    assert_eq!(world.len(), 5);
}

#[test]
fn test_factory_creates_by_kind() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut factory = EntityFactory::new(&mut world, &mut rng, 1024.0, 768.0);

    let robot = factory.create(EntityKind::Robot);
    let light = factory.create(EntityKind::Light);
    let food = factory.create(EntityKind::Food);

    let body = *world.get::<&Body>(robot).unwrap();
    assert_eq!((body.id, body.kind), (0, EntityKind::Robot));
    assert!(world.get::<&Robot>(robot).is_ok());

    let body = *world.get::<&Body>(light).unwrap();
    assert_eq!((body.id, body.kind), (1, EntityKind::Light));
    assert!(world.get::<&Motion>(light).is_ok());

    let body = *world.get::<&Body>(food).unwrap();
    assert_eq!((body.id, body.kind), (2, EntityKind::Food));
    assert!(world.get::<&Motion>(food).is_err());
}

#[test]
fn test_spawn_cells_are_distinct() {
    let arena = Arena::new(ArenaParams::default()).unwrap();
    let snap = arena.snapshot();
    for (i, a) in snap.entities.iter().enumerate() {
        for b in &snap.entities[i + 1..] {
            assert!(a.pose.distance_to(&b.pose) > 0.0, "{} and {} share a cell", a.id, b.id);
        }
    }
}

// ---- Ticking ----

#[test]
fn test_example_scenario_robot_in_corner() {
    let mut arena = empty_arena();
    arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(0.0, 0.0, 0.0), 30.0);

    arena.advance_time(0.1);

    let snap = arena.snapshot();
    let robot = view(&snap, 0);
    assert!(robot.pose.x >= 0.0);
    assert!(robot.pose.x - robot.radius >= 0.0);
    assert!(robot.pose.y - robot.radius >= 0.0);
    assert!(robot.reversing, "wall contact should start the reverse arc");
}

#[test]
fn test_pause_blocks_ticks() {
    let mut arena = Arena::new(ArenaParams::default()).unwrap();
    arena.accept_command(Command::Pause);
    let before = serde_json::to_string(&arena.snapshot()).unwrap();
    arena.advance_time(1.0);
    assert_eq!(arena.time().tick, 0);

    arena.accept_command(Command::Play);
    let after_play = serde_json::to_string(&arena.snapshot()).unwrap();
    assert_ne!(before, after_play, "paused flag should flip");
    arena.advance_time(1.0);
    assert_eq!(arena.time().tick, 1);
}

#[test]
fn test_non_positive_dt_is_ignored() {
    let mut arena = Arena::new(ArenaParams::default()).unwrap();
    let before = serde_json::to_string(&arena.snapshot()).unwrap();
    for dt in [0.0, -1.0, f64::NAN] {
        arena.advance_time(dt);
    }
    let after = serde_json::to_string(&arena.snapshot()).unwrap();
    assert_eq!(before, after);
    assert_eq!(arena.time().tick, 0);
}

#[test]
fn test_tick_ignores_dt_magnitude() {
    let mut small = Arena::new(ArenaParams::default()).unwrap();
    let mut large = Arena::new(ArenaParams::default()).unwrap();
    small.advance_time(0.001);
    large.advance_time(10.0);
    assert_eq!(
        serde_json::to_string(&small.snapshot()).unwrap(),
        serde_json::to_string(&large.snapshot()).unwrap()
    );
}

#[test]
fn test_stub_commands_do_nothing() {
    let mut arena = Arena::new(ArenaParams::default()).unwrap();
    let before = serde_json::to_string(&arena.snapshot()).unwrap();
    for command in [
        Command::None,
        Command::KeyUp,
        Command::KeyDown,
        Command::KeyLeft,
        Command::KeyRight,
    ] {
        arena.accept_command(command);
    }
    assert_eq!(before, serde_json::to_string(&arena.snapshot()).unwrap());
}

#[test]
fn test_explorer_cruises_in_the_dark() {
    let mut arena = empty_arena();
    arena.spawn_robot_at(BehaviorKind::Explorer, Pose::new(500.0, 400.0, 0.0), 10.0);
    arena.advance_time(1.0);

    let snap = arena.snapshot();
    let robot = view(&snap, 0);
    assert!((robot.pose.x - 510.0).abs() < 1e-9);
    assert!((robot.pose.y - 400.0).abs() < 1e-9);
    assert_eq!(robot.velocity, Some(WheelVelocity::uniform(ROBOT_MAX_SPEED)));
}

#[test]
fn test_light_notifies_robot_sensors() {
    let mut arena = empty_arena();
    arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(300.0, 300.0, 0.0), 10.0);
    // Ahead and to the left (smaller y) of the robot, drifting down.
    arena.spawn_light_at(Pose::new(400.0, 260.0, 90.0), 10.0);
    arena.advance_time(1.0);

    let snap = arena.snapshot();
    let robot = view(&snap, 0);
    let sensors = robot.robot.as_ref().unwrap();
    assert!(sensors.light_left > sensors.light_right);
    assert!(sensors.light_left > 0.0);
    assert_eq!(sensors.food_left, 0.0);
    // Fear swings toward the brighter side.
    assert!(robot.pose.heading > 180.0);
}

// ---- Hunger ----

#[test]
fn test_feeding_resets_hunger() {
    let mut arena = empty_arena();
    let robot = arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(100.0, 100.0, 0.0), 10.0);
    arena.spawn_food_at(Pose::new(125.0, 100.0, 0.0));
    set_hunger(&mut arena, robot, 1000);

    arena.advance_time(1.0);

    // Reset to 0 while sensing, then +1 for the tick.
    assert_eq!(hunger_of(&arena, robot), 1);
    let events = arena.drain_events();
    assert!(events.contains(&ArenaEvent::RobotFed {
        robot_id: 0,
        food_id: 1
    }));

    let snap = arena.snapshot();
    let food = view(&snap, 1);
    assert_eq!(food.captured, Some(true));
    assert_eq!(food.color, FOOD_CAPTURED_COLOR);
}

#[test]
fn test_is_feeding_threshold() {
    let food = Pose::new(0.0, 0.0, 0.0);
    assert!(is_feeding(&Pose::new(35.0, 0.0, 0.0), 10.0, &food, 20.0));
    assert!(!is_feeding(&Pose::new(35.1, 0.0, 0.0), 10.0, &food, 20.0));
}

#[test]
fn test_hunger_grows_until_death() {
    let mut arena = empty_arena();
    let robot = arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(512.0, 384.0, 0.0), 10.0);

    for tick in 1..=DEAD {
        arena.advance_time(1.0);
        assert_eq!(hunger_of(&arena, robot), tick);
        assert_eq!(arena.status(), GameStatus::Playing);
    }

    arena.advance_time(1.0);
    assert_eq!(arena.status(), GameStatus::Lost);
    let robot_status = arena.world().get::<&Robot>(robot).unwrap().status;
    assert_eq!(robot_status, GameStatus::Lost);
    assert!(arena
        .drain_events()
        .iter()
        .any(|e| matches!(e, ArenaEvent::RobotStarved { robot_id: 0, .. })));

    // Lost is terminal: nothing moves any more.
    let frozen = serde_json::to_string(&arena.snapshot()).unwrap();
    for _ in 0..10 {
        arena.advance_time(1.0);
    }
    assert_eq!(frozen, serde_json::to_string(&arena.snapshot()).unwrap());
}

#[test]
fn test_food_disabled_never_starves() {
    let mut arena = Arena::new(ArenaParams {
        food_enabled: false,
        ..empty_params()
    })
    .unwrap();
    let robot = arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(512.0, 384.0, 0.0), 10.0);
    set_hunger(&mut arena, robot, DEAD + 100);

    for _ in 0..50 {
        arena.advance_time(1.0);
    }
    assert_eq!(arena.status(), GameStatus::Playing);
    assert_eq!(hunger_of(&arena, robot), DEAD + 150);
}

#[test]
fn test_food_toggle_restarts_hunger() {
    let mut arena = Arena::new(ArenaParams {
        food_enabled: false,
        ..empty_params()
    })
    .unwrap();
    let robot = arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(512.0, 384.0, 0.0), 10.0);

    for _ in 0..DEAD + 5 {
        arena.advance_time(1.0);
    }
    assert_eq!(hunger_of(&arena, robot), DEAD + 5);

    arena.accept_command(Command::FoodOn);
    assert_eq!(hunger_of(&arena, robot), 0);
    arena.advance_time(1.0);
    assert_eq!(arena.status(), GameStatus::Playing);
    assert_eq!(hunger_of(&arena, robot), 1);

    // Toggling while already on leaves hunger alone.
    set_hunger(&mut arena, robot, HUNGRY);
    arena.accept_command(Command::FoodOn);
    assert_eq!(hunger_of(&arena, robot), HUNGRY);
}

#[test]
fn test_death_stops_remaining_robots() {
    let mut arena = empty_arena();
    let doomed = arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(200.0, 200.0, 0.0), 10.0);
    let next = arena.spawn_robot_at(BehaviorKind::Explorer, Pose::new(600.0, 400.0, 0.0), 10.0);
    set_hunger(&mut arena, doomed, DEAD);

    arena.advance_time(1.0);

    assert_eq!(arena.status(), GameStatus::Lost);
    assert_eq!(hunger_of(&arena, next), 0);
    let snap = arena.snapshot();
    assert_eq!(view(&snap, 1).pose.x, 600.0);
}

#[test]
fn test_food_toggle_applies_to_robots_immediately() {
    let mut arena = Arena::new(ArenaParams::default()).unwrap();
    arena.accept_command(Command::FoodOff);

    assert!(!arena.food_enabled());
    for (_entity, robot) in arena.world().query::<&Robot>().iter() {
        assert!(!robot.food_enabled);
    }
    // Food items stay until the next reset.
    assert_eq!(arena.snapshot().count(EntityKind::Food), 4);

    arena.accept_command(Command::Reset);
    assert_eq!(arena.snapshot().count(EntityKind::Food), 0);

    arena.accept_command(Command::FoodOn);
    arena.accept_command(Command::Reset);
    let snap = arena.snapshot();
    assert_eq!(snap.count(EntityKind::Food), 4);
    assert!(snap.food_enabled);
}

// ---- Reset ----

#[test]
fn test_reset_after_loss() {
    let mut arena = empty_arena();
    let robot = arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(512.0, 384.0, 0.0), 10.0);
    set_hunger(&mut arena, robot, DEAD);
    arena.advance_time(1.0);
    assert_eq!(arena.status(), GameStatus::Lost);

    // Reset rebuilds from params, which ask for no entities.
    arena.accept_command(Command::Reset);
    assert_eq!(arena.status(), GameStatus::Playing);
    assert_eq!(arena.time().tick, 0);
    assert!(arena.snapshot().entities.is_empty());
}

#[test]
fn test_reset_twice() {
    let mut arena = Arena::new(ArenaParams::default()).unwrap();
    for _ in 0..50 {
        arena.advance_time(1.0);
    }
    for _ in 0..2 {
        arena.accept_command(Command::Reset);
        let snap = arena.snapshot();
        assert_eq!(snap.status, GameStatus::Playing);
        assert_eq!(snap.time.tick, 0);
        assert_eq!(snap.count(EntityKind::Robot), 10);
        assert_eq!(snap.count(EntityKind::Light), 4);
        assert_eq!(snap.count(EntityKind::Food), 4);
        for e in &snap.entities {
            if let Some(robot) = &e.robot {
                assert_eq!(robot.hunger, 0);
            }
            assert_ne!(e.captured, Some(true));
        }
    }
}

#[test]
fn test_reset_keeps_pause() {
    let mut arena = Arena::new(ArenaParams::default()).unwrap();
    arena.accept_command(Command::Pause);
    arena.accept_command(Command::Reset);
    assert!(arena.is_paused());
}

#[test]
fn test_reconfigure_validates() {
    let mut arena = Arena::new(ArenaParams::default()).unwrap();
    let bad = ArenaParams {
        fear_ratio: 150,
        ..Default::default()
    };
    assert!(arena.reconfigure(bad).is_err());
    assert_eq!(arena.snapshot().count(EntityKind::Robot), 10);

    arena
        .reconfigure(ArenaParams {
            robot_count: 3,
            light_count: 1,
            food_count: 2,
            ..Default::default()
        })
        .unwrap();
    let snap = arena.snapshot();
    assert_eq!(snap.count(EntityKind::Robot), 3);
    assert_eq!(snap.count(EntityKind::Light), 1);
    assert_eq!(snap.count(EntityKind::Food), 2);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let params = ArenaParams {
        seed: 12345,
        ..Default::default()
    };
    let mut arena_a = Arena::new(params.clone()).unwrap();
    let mut arena_b = Arena::new(params).unwrap();

    for _ in 0..300 {
        arena_a.advance_time(1.0);
        arena_b.advance_time(1.0);
        let json_a = serde_json::to_string(&arena_a.snapshot()).unwrap();
        let json_b = serde_json::to_string(&arena_b.snapshot()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let arena_a = Arena::new(ArenaParams {
        seed: 111,
        ..Default::default()
    })
    .unwrap();
    let arena_b = Arena::new(ArenaParams {
        seed: 222,
        ..Default::default()
    })
    .unwrap();
    assert_ne!(
        serde_json::to_string(&arena_a.snapshot()).unwrap(),
        serde_json::to_string(&arena_b.snapshot()).unwrap()
    );
}

// ---- Collisions ----

#[test]
fn test_touching_walls_reports_both_axes() {
    let bounds = Bounds {
        width: 100.0,
        height: 100.0,
    };
    let walls: Vec<Wall> = touching_walls(&Pose::new(2.0, 99.0, 0.0), 5.0, bounds).collect();
    assert_eq!(walls, vec![Wall::Left, Wall::Bottom]);

    let none: Vec<Wall> = touching_walls(&Pose::new(50.0, 50.0, 0.0), 5.0, bounds).collect();
    assert!(none.is_empty());
}

#[test]
fn test_separate_pushes_along_center_line() {
    let moved = separate(&Pose::new(0.0, 0.0, 0.0), 10.0, &Pose::new(5.0, 0.0, 0.0), 10.0);
    // Overlap 15 + margin 5, pushed toward -x.
    assert!((moved.x + 20.0).abs() < 1e-9);
    assert!(moved.y.abs() < 1e-9);
}

#[test]
fn test_wall_hit_starts_reverse_arc() {
    let mut arena = empty_arena();
    arena.spawn_light_at(Pose::new(1000.0, 384.0, 0.0), 20.0);

    arena.advance_time(1.0);
    let snap = arena.snapshot();
    let light = view(&snap, 0);
    assert!((light.pose.x - (ARENA_WIDTH - 20.0 - COLLISION_MARGIN)).abs() < 1e-9);
    assert!(light.reversing);
    assert!(arena.drain_events().contains(&ArenaEvent::WallCollision {
        entity_id: 0,
        wall: Wall::Right
    }));

    // Next tick backs up while turning.
    arena.advance_time(1.0);
    let snap = arena.snapshot();
    let light = view(&snap, 0);
    assert!((light.pose.heading - 357.0).abs() < 1e-9);
    assert_eq!(light.velocity, Some(WheelVelocity::uniform(-LIGHT_SPEED)));
}

#[test]
fn test_same_kind_robots_pushed_apart() {
    let mut arena = empty_arena();
    arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(300.0, 300.0, 0.0), 10.0);
    arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(305.0, 300.0, 0.0), 10.0);

    arena.advance_time(1.0);

    let snap = arena.snapshot();
    let first = view(&snap, 0);
    let second = view(&snap, 1);
    assert!((first.pose.x - 280.0).abs() < 1e-9);
    assert!(first.pose.distance_to(&second.pose) > 20.0);
    assert!(first.reversing);
    assert!(!second.reversing, "only the pushed entity reacts");
    assert!(arena.drain_events().contains(&ArenaEvent::EntityCollision {
        entity_id: 0,
        other_id: 1
    }));
}

#[test]
fn test_lights_bounce_off_each_other() {
    let mut arena = empty_arena();
    arena.spawn_light_at(Pose::new(400.0, 400.0, 0.0), 20.0);
    arena.spawn_light_at(Pose::new(440.0, 400.0, 180.0), 20.0);

    arena.advance_time(1.0);

    let snap = arena.snapshot();
    assert!(view(&snap, 0).reversing);
    assert!(view(&snap, 0).pose.distance_to(&view(&snap, 1).pose) > 40.0);
}

#[test]
fn test_robot_light_overlap_not_resolved() {
    let mut arena = empty_arena();
    arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(300.0, 300.0, 0.0), 10.0);
    arena.spawn_light_at(Pose::new(305.0, 300.0, 90.0), 20.0);

    arena.advance_time(1.0);

    let snap = arena.snapshot();
    assert!(!view(&snap, 0).reversing);
    assert!(!view(&snap, 1).reversing);
    assert!(!arena
        .drain_events()
        .iter()
        .any(|e| matches!(e, ArenaEvent::EntityCollision { .. })));
}

#[test]
fn test_robot_food_overlap_not_resolved() {
    let mut arena = empty_arena();
    arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(300.0, 300.0, 0.0), 10.0);
    arena.spawn_food_at(Pose::new(300.0, 300.0, 0.0));

    arena.advance_time(1.0);

    let snap = arena.snapshot();
    assert!(!view(&snap, 0).reversing);
    assert_eq!(view(&snap, 1).pose, Pose::new(300.0, 300.0, 0.0));
}

#[test]
fn test_pair_push_stays_inside_walls() {
    let mut arena = empty_arena();
    // Second robot sits between the first and the wall; the push would
    // shove the first through the left wall without the clamp.
    arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(20.0, 300.0, 0.0), 12.0);
    arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(30.0, 300.0, 0.0), 12.0);

    arena.advance_time(1.0);

    for e in arena.snapshot().entities {
        assert!(e.pose.x - e.radius >= 0.0, "{} at {:?}", e.id, e.pose);
    }
}

#[test]
fn test_food_captured_flag_on_world() {
    let mut arena = empty_arena();
    arena.spawn_robot_at(BehaviorKind::Fear, Pose::new(100.0, 100.0, 0.0), 10.0);
    let food = arena.spawn_food_at(Pose::new(500.0, 500.0, 0.0));
    arena.advance_time(1.0);
    assert!(!arena.world().get::<&Food>(food).unwrap().captured);
}
