//! Property-based tests for the light controllers.
//!
//! These tests use proptest to check that every controller follows the
//! same intake/run contract for randomly generated input sequences.

use proptest::prelude::*;
use traffic_lights::{
    CoroutineLights, LightController, Phase, StateMachineLights, ThreadLights, OFF,
};

/// Active pattern after each running-phase index, computed directly.
fn expected_patterns(table: &[u32], indices: &[u32]) -> Vec<u32> {
    let mut current = OFF;
    indices
        .iter()
        .map(|&index| {
            if let Some(&pattern) = table.get(index as usize) {
                current = pattern;
            }
            current
        })
        .collect()
}

fn drive(lights: &mut dyn LightController, table: &[u32], indices: &[u32]) -> Vec<u32> {
    lights.submit(table.len() as u32);
    for &pattern in table {
        lights.submit(pattern);
    }
    indices
        .iter()
        .map(|&index| {
            lights.submit(index);
            lights.settle();
            lights.current_pattern()
        })
        .collect()
}

prop_compose! {
    fn arbitrary_script()(
        table in prop::collection::vec(any::<u32>(), 0..8),
        indices in prop::collection::vec(0u32..12, 0..16),
    ) -> (Vec<u32>, Vec<u32>) {
        (table, indices)
    }
}

proptest! {
    #[test]
    fn intake_installs_exact_table_without_switching(
        table in prop::collection::vec(any::<u32>(), 0..16)
    ) {
        let mut lights = StateMachineLights::new();
        lights.submit(table.len() as u32);
        for &pattern in &table {
            lights.submit(pattern);
        }

        prop_assert_eq!(lights.patterns(), Some(table));
        prop_assert_eq!(lights.current_pattern(), OFF);
        prop_assert_eq!(lights.phase(), Phase::Running);
    }

    #[test]
    fn state_machine_follows_model((table, indices) in arbitrary_script()) {
        let mut lights = StateMachineLights::new();
        let seen = drive(&mut lights, &table, &indices);
        prop_assert_eq!(seen, expected_patterns(&table, &indices));
    }

    #[test]
    fn coroutine_follows_model((table, indices) in arbitrary_script()) {
        let mut lights = CoroutineLights::new();
        let seen = drive(&mut lights, &table, &indices);
        prop_assert_eq!(seen, expected_patterns(&table, &indices));
        prop_assert!(lights.is_ready());
    }

    #[test]
    fn out_of_range_count_matches_model((table, indices) in arbitrary_script()) {
        let mut lights = CoroutineLights::new();
        drive(&mut lights, &table, &indices);

        let rejected = indices
            .iter()
            .filter(|&&index| index as usize >= table.len())
            .count() as u64;
        prop_assert_eq!(lights.activity().out_of_bounds, rejected);
        prop_assert_eq!(lights.activity().switches, indices.len() as u64 - rejected);
    }

    #[test]
    fn phase_never_regresses(inputs in prop::collection::vec(0u32..6, 0..20)) {
        let mut lights = StateMachineLights::new();
        let rank = |phase: Phase| match phase {
            Phase::Count => 0,
            Phase::Collecting => 1,
            Phase::Running => 2,
        };

        let mut previous = rank(lights.phase());
        for input in inputs {
            lights.submit(input);
            let now = rank(lights.phase());
            prop_assert!(now >= previous);
            previous = now;
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn thread_follows_model((table, indices) in arbitrary_script()) {
        let mut lights = ThreadLights::new().unwrap();
        let seen = drive(&mut lights, &table, &indices);
        prop_assert_eq!(seen, expected_patterns(&table, &indices));
    }
}
