/*
 * Galaxy Generator
 *
 * Procedurally generates a spiral galaxy of point particles and renders it
 * with an orbiting camera. Parameters are tuned live in the egui panel and
 * the galaxy is rebuilt whenever an edit is committed.
 *
 * Set RUST_LOG=info to see regeneration timings and GALAXY_SEED to make
 * generation reproducible.
 */

use galaxy::app;

fn main() {
    env_logger::init();
    nannou::app(app::model).update(app::update).run();
}
