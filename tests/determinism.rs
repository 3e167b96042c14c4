use blockwave::field::BlockField;
use blockwave::schema::Scene;

#[test]
fn same_seed_produces_identical_animation() {
    let first = run_scripted_session(11);
    let second = run_scripted_session(11);
    assert_eq!(first, second, "seeded sessions should replay bit-for-bit");
}

#[test]
fn different_seeds_produce_different_animation() {
    let first = run_scripted_session(11);
    let second = run_scripted_session(12);
    assert_ne!(first, second, "seed must steer the generated targets");
}

#[test]
fn displayed_state_is_deterministic_at_fixed_progress() {
    // Reading the field twice without ticking in between must yield the
    // same values: draw-time state has no hidden randomness.
    let mut field = BlockField::new(&scene_with_seed(5));
    field.reroll();
    field.tick(0.37);

    let first = hash_displayed(&field);
    let second = hash_displayed(&field);
    assert_eq!(first, second);
}

fn scene_with_seed(seed: u64) -> Scene {
    let mut scene = Scene::default();
    scene.grid.row_length = 8;
    scene.seed = seed;
    scene
}

/// Steps a field through two rerolls with fixed 60fps ticks and hashes every
/// frame's displayed state.
fn run_scripted_session(seed: u64) -> u64 {
    let mut field = BlockField::new(&scene_with_seed(seed));
    let mut hash = 0xcbf2_9ce4_8422_2325_u64;

    field.reroll();
    for frame in 0..180 {
        if frame == 90 {
            field.reroll();
        }
        field.tick(1.0 / 60.0);
        hash ^= hash_displayed(&field);
        hash = hash.wrapping_mul(0x0000_0001_0000_01b3);
    }
    hash
}

fn hash_displayed(field: &BlockField) -> u64 {
    let mut bytes = Vec::with_capacity(field.cell_count() * 20);
    for block in field.displayed() {
        bytes.extend_from_slice(&block.height.to_bits().to_le_bytes());
        for channel in block.color.as_array() {
            bytes.extend_from_slice(&channel.to_bits().to_le_bytes());
        }
    }
    fnv1a64(&bytes)
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325_u64;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0001_0000_01b3);
    }
    hash
}
