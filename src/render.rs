//! Headless frame export: fixed 1/fps steps through the field, one PNG per
//! frame. Rerolls, when scheduled, are applied before the frame is read so a
//! frame never sees a half-applied retarget.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::camera::OrbitCamera;
use crate::field::BlockField;
use crate::renderer::{BlockInstance, BlockRenderer};
use crate::scene::load_scene_or_default;

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub output_dir: PathBuf,
    pub frames: u32,
    /// Reroll cadence in frames; the first reroll fires on frame 0 so the
    /// export opens with a transition instead of the static initial state.
    pub reroll_every: Option<u32>,
}

pub fn run_render(scene_path: Option<&Path>, args: &RenderArgs) -> Result<()> {
    if args.frames == 0 {
        bail!("--frames must be at least 1");
    }
    if args.reroll_every == Some(0) {
        bail!("--reroll-every must be at least 1");
    }

    let scene = load_scene_or_default(scene_path)?;
    let width = scene.output.resolution.width;
    let height = scene.output.resolution.height;
    let fps = scene.output.fps;

    let mut field = BlockField::new(&scene);
    let mut camera = OrbitCamera::new(&scene.camera);
    let mut renderer = pollster::block_on(BlockRenderer::new_headless(
        width,
        height,
        field.cell_count(),
    ))?;

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;

    eprintln!(
        "[blockwave] render: {}x{} @ {}fps, {} cells, {} frame(s)",
        width,
        height,
        fps,
        field.cell_count(),
        args.frames
    );

    let step = 1.0 / fps as f32;
    let aspect = width as f32 / height as f32;

    for frame_index in 0..args.frames {
        if let Some(every) = args.reroll_every {
            if frame_index % every == 0 {
                field.reroll();
            }
        }

        field.tick(step);
        camera.tick();

        let instances: Vec<BlockInstance> =
            field.displayed().map(|block| BlockInstance::from_block(&block)).collect();
        let view_proj = camera.projection(aspect) * camera.view();
        let rgba = renderer.render_frame_rgba(&instances, view_proj)?;

        let frame_path = args.output_dir.join(format!("frame_{frame_index:05}.png"));
        write_png(&frame_path, width, height, rgba)?;

        if frame_index % fps == 0 {
            eprintln!(
                "[blockwave] rendered frame {}/{}",
                frame_index + 1,
                args.frames
            );
        }
    }

    println!(
        "Wrote {} frame(s) to {}",
        args.frames,
        args.output_dir.display()
    );
    Ok(())
}

fn write_png(path: &Path, width: u32, height: u32, rgba: Vec<u8>) -> Result<()> {
    let image = image::RgbaImage::from_raw(width, height, rgba)
        .context("frame byte count does not match resolution")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{run_render, RenderArgs};

    #[test]
    fn rejects_zero_frames() {
        let args = RenderArgs {
            output_dir: PathBuf::from("unused"),
            frames: 0,
            reroll_every: None,
        };
        assert!(run_render(None, &args).is_err());
    }

    #[test]
    fn rejects_zero_reroll_interval() {
        let args = RenderArgs {
            output_dir: PathBuf::from("unused"),
            frames: 1,
            reroll_every: Some(0),
        };
        assert!(run_render(None, &args).is_err());
    }
}
