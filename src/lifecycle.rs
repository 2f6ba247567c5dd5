/*
 * Galaxy Lifecycle Module
 *
 * The GalaxyLifecycleManager owns the scene and the single live galaxy
 * attached to it. Regeneration detaches and disposes the old galaxy before
 * allocating the new buffers, so at most one galaxy is ever attached and
 * peak memory stays near one generation's worth of buffers.
 *
 * Regeneration is synchronous. Callers must serialize it with the render
 * loop (the app does so by running both on nannou's update thread).
 */

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::generator;
use crate::params::GalaxyParams;
use crate::scene::{GalaxyPoints, ObjectId, PointsMaterial, Scene, SceneGraph};

// Above this many particles a regeneration is noticeably slow
pub const LARGE_COUNT_WARNING: usize = 500_000;

pub struct GalaxyLifecycleManager<S: SceneGraph = Scene, R: Rng = StdRng> {
    scene: S,
    rng: R,
    current: Option<ObjectId>,
    generation: u64,
    last_generation_time: Duration,
}

impl<S: SceneGraph> GalaxyLifecycleManager<S, StdRng> {
    // Manager with an entropy-seeded source, or a fixed one when `seed` is given
    pub fn new(scene: S, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(scene, rng)
    }
}

impl<S: SceneGraph, R: Rng> GalaxyLifecycleManager<S, R> {
    pub fn with_rng(scene: S, rng: R) -> Self {
        Self {
            scene,
            rng,
            current: None,
            generation: 0,
            last_generation_time: Duration::ZERO,
        }
    }

    // Replaces the live galaxy with one generated from `params`
    pub fn regenerate(&mut self, params: &GalaxyParams) -> ObjectId {
        if let Err(e) = params.validate() {
            warn!("Generating with out-of-domain parameters: {e}");
        }
        if params.count > LARGE_COUNT_WARNING {
            warn!(
                "Generating {} particles needs about {} MB of buffers",
                params.count,
                params.count * 6 * std::mem::size_of::<f32>() / (1024 * 1024)
            );
        }

        // Old galaxy's ownership ends here, before any new allocation
        if let Some(id) = self.current.take() {
            match self.scene.detach(id) {
                Some(points) => points.dispose(),
                None => debug!("Galaxy {id:?} was already detached"),
            }
        }

        let started = Instant::now();
        let buffers = generator::generate_with(params, &mut self.rng);
        let points = GalaxyPoints::new(buffers, PointsMaterial::galaxy(params.size));
        let id = self.scene.attach(points);

        self.current = Some(id);
        self.generation += 1;
        self.last_generation_time = started.elapsed();

        info!(
            "Generated galaxy #{} with {} particles in {:.2} ms",
            self.generation,
            params.count,
            self.last_generation_time.as_secs_f64() * 1000.0
        );

        id
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn current(&self) -> Option<ObjectId> {
        self.current
    }

    pub fn current_points(&self) -> Option<&GalaxyPoints> {
        self.current.and_then(|id| self.scene.get(id))
    }

    // Number of completed regenerations
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_generation_time(&self) -> Duration {
        self.last_generation_time
    }
}
