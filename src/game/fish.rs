//! Swimming fish and the pool that spawns, moves and respawns them.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{FishId, Rect, Scene};
use crate::levels::{FishType, LevelConfig};

/// A fish swimming across the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct FishEntity {
    pub id: FishId,
    pub kind: FishType,
    pub x: f64,
    pub y: f64,
    /// +1 swims right, -1 swims left.
    pub direction: i8,
    pub speed: f64,
    pub alive: bool,
}

impl FishEntity {
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, self.kind.size.width, self.kind.size.height)
    }

    /// Swim for `dt` seconds. Past the far edge the fish re-enters from a
    /// random side at a random depth.
    pub fn advance<R: Rng>(&mut self, dt: f64, scene: &Scene, rng: &mut R) {
        self.x += f64::from(self.direction) * self.speed * dt;
        if scene.past_far_edge(self.x, self.direction) {
            self.direction = random_direction(rng);
            self.y = random_depth(scene, rng);
            self.x = scene.entry_x(self.direction);
        }
    }
}

/// A caught fish fading out before its replacement appears.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRespawn {
    pub caught: FishEntity,
    pub delay: f64,
    pub remaining: f64,
}

impl PendingRespawn {
    /// How much of the caught fish is still visible: 1.0 at the catch,
    /// 0.0 when the replacement is due.
    pub fn fade(&self) -> f64 {
        if self.delay <= 0.0 {
            0.0
        } else {
            (self.remaining / self.delay).clamp(0.0, 1.0)
        }
    }
}

/// Live fish in spawn order, plus fish waiting to be replaced.
#[derive(Debug, Clone)]
pub struct FishPool {
    scene: Scene,
    live: Vec<FishEntity>,
    pending: Vec<PendingRespawn>,
    next_id: u64,
}

impl FishPool {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            live: Vec::new(),
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Spawn one fish of a uniformly chosen type from `level`, off-screen on
    /// the side it swims in from. Returns `None` if the level has no fish types.
    pub fn spawn<R: Rng>(&mut self, level: &LevelConfig, rng: &mut R) -> Option<FishId> {
        let kind = *level.fishes.choose(rng)?;
        let direction = random_direction(rng);
        let x = self.scene.entry_x(direction);
        let y = random_depth(&self.scene, rng);
        Some(self.spawn_at(kind, x, y, direction))
    }

    /// Place a fish at an exact position.
    pub fn spawn_at(&mut self, kind: FishType, x: f64, y: f64, direction: i8) -> FishId {
        let id = FishId(self.next_id);
        self.next_id += 1;
        self.live.push(FishEntity {
            id,
            kind,
            x,
            y,
            direction: if direction < 0 { -1 } else { 1 },
            speed: kind.speed,
            alive: true,
        });
        id
    }

    /// Spawn until `count` fish are live.
    pub fn fill<R: Rng>(&mut self, level: &LevelConfig, count: usize, rng: &mut R) {
        while self.live.len() < count {
            if self.spawn(level, rng).is_none() {
                log::warn!("level {} has no fish types to spawn", level.id);
                break;
            }
        }
    }

    /// Move every live fish and count down pending respawns, spawning
    /// replacements whose delay has run out.
    pub fn advance<R: Rng>(&mut self, dt: f64, level: &LevelConfig, rng: &mut R) {
        let scene = self.scene;
        for fish in &mut self.live {
            fish.advance(dt, &scene, rng);
        }

        let mut due = 0;
        self.pending.retain_mut(|p| {
            p.remaining -= dt;
            if p.remaining <= 0.0 {
                due += 1;
                false
            } else {
                true
            }
        });
        for _ in 0..due {
            self.spawn(level, rng);
        }
    }

    /// Remove a fish from the live set. No-op (returns `None`) if absent.
    pub fn remove(&mut self, id: FishId) -> Option<FishEntity> {
        let index = self.live.iter().position(|f| f.id == id)?;
        let mut fish = self.live.remove(index);
        fish.alive = false;
        Some(fish)
    }

    /// Remove a caught fish and queue a replacement after `delay` seconds.
    pub fn despawn_and_respawn(&mut self, id: FishId, delay: f64) -> Option<FishEntity> {
        let fish = self.remove(id)?;
        self.pending.push(PendingRespawn {
            caught: fish.clone(),
            delay,
            remaining: delay,
        });
        Some(fish)
    }

    /// Drop queued respawns without spawning them.
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    pub fn live(&self) -> &[FishEntity] {
        &self.live
    }

    pub fn pending(&self) -> &[PendingRespawn] {
        &self.pending
    }

    pub fn get(&self, id: FishId) -> Option<&FishEntity> {
        self.live.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

fn random_direction<R: Rng>(rng: &mut R) -> i8 {
    if rng.gen_bool(0.5) {
        1
    } else {
        -1
    }
}

fn random_depth<R: Rng>(scene: &Scene, rng: &mut R) -> f64 {
    let (top, bottom) = scene.fish_band();
    rng.gen_range(top..=bottom)
}
