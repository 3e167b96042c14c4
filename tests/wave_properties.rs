//! End-to-end checks of the stagger/convergence contract over whole fields.

use blockwave::field::BlockField;
use blockwave::schema::Scene;

fn scene(row_length: u32, max_delay: f32) -> Scene {
    let mut scene = Scene::default();
    scene.grid.row_length = row_length;
    scene.animation.max_delay = max_delay;
    scene.seed = 3;
    scene
}

#[test]
fn staggered_start_synchronized_finish() {
    let mut field = BlockField::new(&scene(6, 0.6));
    field.reroll();

    // Shortly after the reset, early cells have moved and late cells have
    // not: the wave front exists.
    field.tick(0.3);
    let eased = field.clock().eased();
    let first = field.cells().first().expect("cells");
    let last = field.cells().last().expect("cells");
    assert!(first.local_progress(eased, field.max_delay()) > 0.0);
    assert_eq!(last.local_progress(eased, field.max_delay()), 0.0);

    // At the end every cell has arrived, regardless of delay.
    while !field.is_settled() {
        field.tick(0.05);
    }
    let eased = field.clock().eased();
    for cell in field.cells() {
        assert_eq!(cell.local_progress(eased, field.max_delay()), 1.0);
        assert_eq!(
            cell.displayed_height(eased, field.max_delay()),
            cell.height_target()
        );
    }
}

#[test]
fn heights_always_inside_configured_range() {
    let mut field = BlockField::new(&scene(5, 0.6));
    for _ in 0..4 {
        field.reroll();
        for _ in 0..30 {
            field.tick(1.0 / 30.0);
            for block in field.displayed() {
                assert!(
                    block.height >= 0.001 && block.height <= 5.0,
                    "height {} left the configured range",
                    block.height
                );
            }
        }
    }
}

#[test]
fn colors_stay_normalized_throughout_a_transition() {
    let mut field = BlockField::new(&scene(5, 0.6));
    field.reroll();
    for _ in 0..60 {
        field.tick(1.0 / 30.0);
        for block in field.displayed() {
            for channel in block.color.as_array() {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}

#[test]
fn zero_max_delay_moves_all_cells_in_lockstep() {
    let mut field = BlockField::new(&scene(4, 0.0));
    field.reroll();
    field.tick(0.5);
    let eased = field.clock().eased();
    let progresses: Vec<_> = field
        .cells()
        .iter()
        .map(|cell| cell.local_progress(eased, field.max_delay()))
        .collect();
    for progress in &progresses {
        assert_eq!(*progress, progresses[0]);
    }
}

#[test]
fn grid_offsets_cover_a_centered_square() {
    let field = BlockField::new(&scene(4, 0.6));
    let min_x = field
        .cells()
        .iter()
        .map(|c| c.grid_offset().x)
        .fold(f32::INFINITY, f32::min);
    let max_x = field
        .cells()
        .iter()
        .map(|c| c.grid_offset().x)
        .fold(f32::NEG_INFINITY, f32::max);
    assert_eq!(min_x, -2.0);
    assert_eq!(max_x, 1.0);

    let center: f32 = field.cells().iter().map(|c| c.grid_offset().x).sum::<f32>()
        / field.cell_count() as f32;
    assert!(center.abs() < 0.51, "grid should straddle the origin");
}
