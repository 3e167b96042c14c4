use glam::Vec2;

/// Maps a linear cell index to a centered grid offset: the index walks each
/// row in x before stepping y, shifted so the grid is centered on the origin.
pub fn offset(index: usize, row_length: u32) -> Vec2 {
    let row = row_length.max(1) as usize;
    let half = row_length as f32 / 2.0;
    Vec2::new(
        (index % row) as f32 - half,
        (index / row) as f32 - half,
    )
}
