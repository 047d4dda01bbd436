//! Traffic Light Controllers
//!
//! Drives all three controllers through the same input sequence: five
//! light patterns, then a few selections including one out of range.
//!
//! Run with: cargo run --example lights_app
//! More detail: RUST_LOG=debug cargo run --example lights_app

use traffic_lights::{
    CoroutineLights, LightController, LightsError, StateMachineLights, ThreadLights,
};
use tracing_subscriber::EnvFilter;

const OFF: u32 = 0;
const GREEN: u32 = 1;
const YELLOW: u32 = 2;
const RED: u32 = 4;

const S_RED: u32 = 1;
const S_GREEN: u32 = 2;
const S_YELLOW: u32 = 3;
const S_RED_YELLOW: u32 = 4;
const S_LEN: u32 = 5;
const S_OUT_OF_BOUNDS: u32 = 99;

fn init_lights(lights: &mut dyn LightController) {
    lights.submit(S_LEN);

    lights.submit(OFF);
    lights.submit(RED);
    lights.submit(GREEN);
    lights.submit(YELLOW);
    lights.submit(RED | YELLOW);
}

fn init_and_use_lights(lights: &mut dyn LightController) {
    init_lights(lights);

    lights.submit(S_GREEN);
    lights.submit(S_YELLOW);
    lights.submit(S_OUT_OF_BOUNDS);
    lights.submit(S_RED);
    lights.submit(S_RED_YELLOW);
    lights.settle();

    let activity = lights.activity();
    println!(
        "final pattern {}, {} switches, {} out of bounds",
        lights.current_pattern(),
        activity.switches,
        activity.out_of_bounds
    );
}

fn section(name: &str, body: impl FnOnce()) {
    println!("---------------------- [START] {name} ----------------------");
    body();
    println!("---------------------- [END] {name} ------------------------\n");
}

fn main() -> Result<(), LightsError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    section("StateMachineLights", || {
        let mut lights = StateMachineLights::new();
        init_and_use_lights(&mut lights);
    });

    section("CoroutineLights", || {
        let mut lights = CoroutineLights::new();
        init_and_use_lights(&mut lights);
    });

    let mut lights = ThreadLights::new()?;
    section("ThreadLights", move || {
        init_and_use_lights(&mut lights);
    });

    Ok(())
}
