//! Entity factory: builds robots, lights, and food with their component
//! bundles.
//!
//! Spawn positions come from a grid of cells `SPAWN_GRID_SPACING` apart.
//! Cells are drawn at random and remembered, so no two entities share a
//! cell until the grid runs out; only drawn cells are ever stored. Every
//! spawn is nudged inside the wall margin.

use std::collections::HashSet;

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use braitenberg_core::components::*;
use braitenberg_core::config::ArenaParams;
use braitenberg_core::constants::*;
use braitenberg_core::enums::*;
use braitenberg_core::types::{Color, Pose, WheelVelocity};

/// Handles of a freshly built population, in construction order.
#[derive(Debug, Default)]
pub struct Population {
    /// Every entity: robots, then lights, then food.
    pub order: Vec<Entity>,
    pub robots: Vec<Entity>,
    /// Robots and lights.
    pub mobiles: Vec<Entity>,
}

/// Spawns entities into a world, assigning sequential ids.
pub struct EntityFactory<'a> {
    world: &'a mut World,
    rng: &'a mut ChaCha8Rng,
    width: f64,
    height: f64,
    columns: u32,
    rows: u32,
    used: HashSet<(u32, u32)>,
    next_id: u32,
}

/// Build the whole population described by `params`.
pub fn populate(world: &mut World, rng: &mut ChaCha8Rng, params: &ArenaParams) -> Population {
    let mut factory = EntityFactory::new(world, rng, params.width, params.height);
    let mut population = Population::default();
    let light_base = params.light_sensor_base();
    let fear_count = params.fear_count();

    for i in 0..params.robot_count {
        let behavior = if i < fear_count {
            BehaviorKind::Fear
        } else {
            BehaviorKind::Explorer
        };
        let robot = factory.create_robot(behavior, light_base, params.food_enabled);
        population.order.push(robot);
        population.robots.push(robot);
        population.mobiles.push(robot);
    }

    for _ in 0..params.light_count {
        let light = factory.create_light();
        population.order.push(light);
        population.mobiles.push(light);
    }

    for _ in 0..params.spawned_food() {
        let food = factory.create_food();
        population.order.push(food);
    }

    population
}

/// Spawn grid size for an arena as `(columns, rows)`. Cell `(c, r)` is
/// centered at `30 + 50·c, 30 + 50·r`.
pub fn grid_size(width: f64, height: f64) -> (u32, u32) {
    (grid_lines(width), grid_lines(height))
}

/// Center of grid cell `(column, row)`.
pub fn cell_center(column: u32, row: u32) -> (f64, f64) {
    (
        SPAWN_GRID_OFFSET + SPAWN_GRID_SPACING * f64::from(column),
        SPAWN_GRID_OFFSET + SPAWN_GRID_SPACING * f64::from(row),
    )
}

fn grid_lines(extent: f64) -> u32 {
    let lines = ((extent - 2.0 * SPAWN_GRID_OFFSET) / SPAWN_GRID_SPACING).floor();
    if lines.is_finite() && lines >= 1.0 {
        lines.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}

impl<'a> EntityFactory<'a> {
    pub fn new(world: &'a mut World, rng: &'a mut ChaCha8Rng, width: f64, height: f64) -> Self {
        let (columns, rows) = grid_size(width, height);
        Self {
            world,
            rng,
            width,
            height,
            columns,
            rows,
            used: HashSet::new(),
            next_id: 0,
        }
    }

    /// Continue numbering from `next_id` (for spawning into a live arena).
    pub fn starting_at(mut self, next_id: u32) -> Self {
        self.next_id = next_id;
        self
    }

    /// Build an entity of `kind` with default settings: robots are Fear
    /// with the default light base and food enabled.
    pub fn create(&mut self, kind: EntityKind) -> Entity {
        match kind {
            EntityKind::Robot => {
                self.create_robot(BehaviorKind::default(), DEFAULT_LIGHT_SENSOR_BASE, true)
            }
            EntityKind::Light => self.create_light(),
            EntityKind::Food => self.create_food(),
        }
    }

    /// Robot at a random grid cell with a random radius and heading.
    pub fn create_robot(
        &mut self,
        behavior: BehaviorKind,
        light_base: f64,
        food_enabled: bool,
    ) -> Entity {
        let radius = self.rng.gen_range(ROBOT_MIN_RADIUS..=ROBOT_MAX_RADIUS);
        let pose = self.random_pose(radius);
        self.create_robot_at(behavior, pose, radius, light_base, food_enabled)
    }

    pub fn create_robot_at(
        &mut self,
        behavior: BehaviorKind,
        pose: Pose,
        radius: f64,
        light_base: f64,
        food_enabled: bool,
    ) -> Entity {
        let body = self.body(EntityKind::Robot, radius, ROBOT_COLOR);
        self.world.spawn((
            pose,
            body,
            Motion {
                velocity: WheelVelocity::default(),
                max_speed: ROBOT_MAX_SPEED,
                recovery: Recovery::Normal,
            },
            Robot {
                behavior,
                hunger: 0,
                status: GameStatus::Playing,
                food_enabled,
                sensors: RobotSensors::new(light_base),
            },
        ))
    }

    /// Light at a random grid cell with a random radius and heading.
    pub fn create_light(&mut self) -> Entity {
        let radius = self.rng.gen_range(LIGHT_MIN_RADIUS..=LIGHT_MAX_RADIUS);
        let pose = self.random_pose(radius);
        self.create_light_at(pose, radius)
    }

    pub fn create_light_at(&mut self, pose: Pose, radius: f64) -> Entity {
        let body = self.body(EntityKind::Light, radius, LIGHT_COLOR);
        self.world.spawn((
            pose,
            body,
            Motion {
                velocity: WheelVelocity::uniform(LIGHT_SPEED),
                max_speed: LIGHT_SPEED,
                recovery: Recovery::Normal,
            },
            Light { speed: LIGHT_SPEED },
        ))
    }

    /// Food at a random grid cell.
    pub fn create_food(&mut self) -> Entity {
        let pose = self.random_pose(FOOD_RADIUS);
        self.create_food_at(pose)
    }

    pub fn create_food_at(&mut self, pose: Pose) -> Entity {
        let body = self.body(EntityKind::Food, FOOD_RADIUS, FOOD_COLOR);
        self.world.spawn((pose, body, Food::default()))
    }

    fn body(&mut self, kind: EntityKind, radius: f64, color: Color) -> Body {
        let id = self.next_id;
        self.next_id += 1;
        Body {
            id,
            kind,
            radius,
            color,
        }
    }

    fn random_pose(&mut self, radius: f64) -> Pose {
        let (column, row) = self.draw_cell();
        let (cx, cy) = cell_center(column, row);

        let inset = radius + COLLISION_MARGIN;
        let x = cx.clamp(inset, (self.width - inset).max(inset));
        let y = cy.clamp(inset, (self.height - inset).max(inset));
        let heading = self.rng.gen_range(0.0..360.0);
        Pose::new(x, y, heading)
    }

    /// Draw an unused grid cell, starting over once every cell is taken.
    fn draw_cell(&mut self) -> (u32, u32) {
        let total = u64::from(self.columns) * u64::from(self.rows);
        if self.used.len() as u64 >= total {
            self.used.clear();
        }
        loop {
            let cell = (
                self.rng.gen_range(0..self.columns),
                self.rng.gen_range(0..self.rows),
            );
            if self.used.insert(cell) {
                return cell;
            }
        }
    }
}
