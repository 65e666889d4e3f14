//! The arena: owns every entity and runs the per-tick pipeline.
//!
//! `Arena` holds the hecs world plus secondary indices into it (insertion
//! order, robots, mobiles), applies commands, and produces
//! `ArenaSnapshot`s. Headless and deterministic for a given seed.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use braitenberg_core::commands::Command;
use braitenberg_core::components::{Body, Light};
use braitenberg_core::config::{ArenaParams, ConfigError};
use braitenberg_core::constants::TICK_DT;
use braitenberg_core::enums::{EntityKind, GameStatus};
use braitenberg_core::events::ArenaEvent;
use braitenberg_core::state::ArenaSnapshot;
use braitenberg_core::types::{Pose, SimTime};

use crate::factory::{self, Population};
use crate::systems;
use crate::systems::collision::Bounds;
use crate::systems::snapshot::ArenaFlags;

/// The arena orchestrator.
pub struct Arena {
    world: World,
    params: ArenaParams,
    status: GameStatus,
    paused: bool,
    food_enabled: bool,
    time: SimTime,
    rng: ChaCha8Rng,
    /// Every entity in construction order.
    order: Vec<Entity>,
    robots: Vec<Entity>,
    /// Robots and lights.
    mobiles: Vec<Entity>,
    /// Events raised by the most recent tick.
    events: Vec<ArenaEvent>,
}

impl Arena {
    /// Validate `params` and build the initial population.
    pub fn new(params: ArenaParams) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut arena = Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(params.seed),
            food_enabled: params.food_enabled,
            params,
            status: GameStatus::Playing,
            paused: false,
            time: SimTime::default(),
            order: Vec::new(),
            robots: Vec::new(),
            mobiles: Vec::new(),
            events: Vec::new(),
        };
        arena.rebuild();
        Ok(arena)
    }

    /// Run one fixed tick if the arena is playing, unpaused, and `dt` is
    /// positive. The tick always integrates `TICK_DT`, whatever `dt` is.
    pub fn advance_time(&mut self, dt: f64) {
        if self.paused || dt.is_nan() || dt <= 0.0 || self.status != GameStatus::Playing {
            return;
        }
        self.events.clear();
        self.run_systems();
        self.time.advance();
    }

    /// Apply a command between ticks.
    pub fn accept_command(&mut self, command: Command) {
        debug!(?command, "arena command");
        match command {
            Command::Play => self.paused = false,
            Command::Pause => self.paused = true,
            Command::Reset => self.reset(),
            Command::FoodOn => self.set_food_enabled(true),
            Command::FoodOff => self.set_food_enabled(false),
            Command::None
            | Command::KeyUp
            | Command::KeyDown
            | Command::KeyLeft
            | Command::KeyRight => {}
        }
    }

    /// Despawn every entity and rebuild the population from the stored
    /// params and the current food setting. The pause flag is kept.
    pub fn reset(&mut self) {
        self.rebuild();
    }

    /// Validate new params, reseed, and rebuild with them. On error the
    /// arena is left untouched.
    pub fn reconfigure(&mut self, params: ArenaParams) -> Result<(), ConfigError> {
        params.validate()?;
        self.rng = ChaCha8Rng::seed_from_u64(params.seed);
        self.food_enabled = params.food_enabled;
        self.params = params;
        self.rebuild();
        Ok(())
    }

    /// Snapshot of every entity in construction order.
    pub fn snapshot(&self) -> ArenaSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.order,
            ArenaFlags {
                time: self.time,
                status: self.status,
                paused: self.paused,
                food_enabled: self.food_enabled,
                width: self.params.width,
                height: self.params.height,
            },
        )
    }

    /// Take the events raised by the most recent tick.
    pub fn drain_events(&mut self) -> Vec<ArenaEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn food_enabled(&self) -> bool {
        self.food_enabled
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn params(&self) -> &ArenaParams {
        &self.params
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Entity handles in construction order.
    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    /// Empty the arena, keeping params and flags (for tests placing
    /// entities by hand).
    #[cfg(test)]
    pub fn clear_entities(&mut self) {
        self.world.clear();
        self.order.clear();
        self.robots.clear();
        self.mobiles.clear();
    }

    /// Spawn a robot at an exact pose (for tests).
    #[cfg(test)]
    pub fn spawn_robot_at(
        &mut self,
        behavior: braitenberg_core::enums::BehaviorKind,
        pose: Pose,
        radius: f64,
    ) -> Entity {
        let base = self.params.light_sensor_base();
        let food_enabled = self.food_enabled;
        let robot = self
            .factory()
            .create_robot_at(behavior, pose, radius, base, food_enabled);
        self.order.push(robot);
        self.robots.push(robot);
        self.mobiles.push(robot);
        robot
    }

    /// Spawn a light at an exact pose (for tests).
    #[cfg(test)]
    pub fn spawn_light_at(&mut self, pose: Pose, radius: f64) -> Entity {
        let light = self.factory().create_light_at(pose, radius);
        self.order.push(light);
        self.mobiles.push(light);
        light
    }

    /// Spawn a food item at an exact pose (for tests).
    #[cfg(test)]
    pub fn spawn_food_at(&mut self, pose: Pose) -> Entity {
        let food = self.factory().create_food_at(pose);
        self.order.push(food);
        food
    }

    /// Mutable access to the world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    fn factory(&mut self) -> factory::EntityFactory<'_> {
        let next_id = self.order.len() as u32;
        factory::EntityFactory::new(
            &mut self.world,
            &mut self.rng,
            self.params.width,
            self.params.height,
        )
        .starting_at(next_id)
    }

    fn rebuild(&mut self) {
        self.world.clear();
        let params = ArenaParams {
            food_enabled: self.food_enabled,
            ..self.params.clone()
        };
        let Population {
            order,
            robots,
            mobiles,
        } = factory::populate(&mut self.world, &mut self.rng, &params);
        self.order = order;
        self.robots = robots;
        self.mobiles = mobiles;
        self.status = GameStatus::Playing;
        self.time = SimTime::default();
        self.events.clear();
        debug!(
            robots = self.robots.len(),
            lights = self.mobiles.len() - self.robots.len(),
            food = self.order.len() - self.mobiles.len(),
            "arena built"
        );
    }

    fn set_food_enabled(&mut self, enabled: bool) {
        self.food_enabled = enabled;
        systems::vitals::set_food_enabled(&mut self.world, enabled);
    }

    /// Run the tick pipeline in order.
    fn run_systems(&mut self) {
        // 1. Sensors start from zero every tick.
        systems::sensing::zero_sensors(&mut self.world);

        // 2. Lights move and shine; food feeds.
        for &entity in &self.order {
            match self.kind(entity) {
                Some(EntityKind::Light) => {
                    systems::movement::timestep_update::<Light>(&mut self.world, entity, TICK_DT);
                    if let Some((pose, radius)) = self.geometry(entity) {
                        systems::sensing::notify_light(&mut self.world, &pose, radius);
                    }
                }
                Some(EntityKind::Food) => {
                    systems::sensing::notify_food(
                        &mut self.world,
                        &self.robots,
                        entity,
                        &mut self.events,
                    );
                }
                Some(EntityKind::Robot) | None => {}
            }
        }

        // 3. Robots steer, move, and get hungrier. A death ends the game.
        for &entity in &self.robots {
            let status = systems::vitals::robot_tick(&mut self.world, entity, TICK_DT);
            if status == GameStatus::Lost {
                self.status = GameStatus::Lost;
                let robot_id = self.id(entity).unwrap_or_default();
                self.events.push(ArenaEvent::RobotStarved {
                    robot_id,
                    tick: self.time.tick,
                });
                info!(robot_id, tick = self.time.tick, "robot starved, game lost");
                break;
            }
        }

        // 4. Walls, then same-kind overlaps.
        systems::collision::run(
            &mut self.world,
            &self.mobiles,
            &self.order,
            Bounds {
                width: self.params.width,
                height: self.params.height,
            },
            &mut self.events,
        );
    }

    fn geometry(&self, entity: Entity) -> Option<(Pose, f64)> {
        let pose = *self.world.get::<&Pose>(entity).ok()?;
        let body = self.world.get::<&Body>(entity).ok()?;
        Some((pose, body.radius))
    }

    fn kind(&self, entity: Entity) -> Option<EntityKind> {
        self.world.get::<&Body>(entity).ok().map(|body| body.kind)
    }

    fn id(&self, entity: Entity) -> Option<u32> {
        self.world.get::<&Body>(entity).ok().map(|body| body.id)
    }
}
