#![cfg(feature = "play")]
//! Interactive preview window. One redraw per display refresh drives the
//! field with wall-clock elapsed time; Space or R triggers a reroll, applied
//! in the event handler between frames so cell state is never read half
//! retargeted.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event as WinitEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use crate::camera::OrbitCamera;
use crate::field::BlockField;
use crate::renderer::{BlockInstance, BlockRenderer, RendererGpuContext};
use crate::scene::load_scene_or_default;

pub fn run_play(scene_path: Option<&Path>) -> Result<()> {
    let scene = load_scene_or_default(scene_path)?;
    let fps = scene.output.fps;
    let initial_size = PhysicalSize::new(
        scene.output.resolution.width,
        scene.output.resolution.height,
    );

    let event_loop = EventLoop::new().context("failed to create play event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("blockwave")
            .with_inner_size(initial_size)
            .build(&event_loop)
            .context("failed to create preview window")?,
    );

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
    let surface = instance
        .create_surface(window.clone())
        .context("failed to create wgpu surface")?;
    let gpu_context = pollster::block_on(RendererGpuContext::for_surface(&instance, &surface))
        .context("failed to initialize WGPU context for the preview window")?;

    let caps = surface.get_capabilities(&gpu_context.adapter);
    let format = pick_surface_format(&caps.formats);
    let present_mode = if caps.present_modes.contains(&wgpu::PresentMode::Mailbox) {
        wgpu::PresentMode::Mailbox
    } else {
        wgpu::PresentMode::Fifo
    };
    let alpha_mode = caps
        .alpha_modes
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto);

    let mut field = BlockField::new(&scene);
    let mut camera = OrbitCamera::new(&scene.camera);
    let mut renderer = BlockRenderer::with_context(
        gpu_context,
        format,
        initial_size.width.max(1),
        initial_size.height.max(1),
        field.cell_count(),
    )?;

    let mut surface_config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: initial_size.width.max(1),
        height: initial_size.height.max(1),
        present_mode,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(renderer.device(), &surface_config);

    eprintln!(
        "[blockwave] play: {} cells, {}x{} @ {}fps",
        field.cell_count(),
        surface_config.width,
        surface_config.height,
        fps
    );
    eprintln!("[blockwave] Controls: Space/R reroll, drag to orbit, scroll to zoom, Esc quit");

    let mut last_frame = Instant::now();
    let mut next_redraw_at = Instant::now();
    let mut dragging = false;
    let mut last_cursor: Option<(f64, f64)> = None;

    event_loop
        .run(move |event, target| {
            target.set_control_flow(ControlFlow::Wait);

            match event {
                WinitEvent::WindowEvent { window_id, event } if window_id == window.id() => {
                    match event {
                        WindowEvent::CloseRequested => target.exit(),
                        WindowEvent::KeyboardInput { event, .. } => {
                            if event.state == ElementState::Pressed && !event.repeat {
                                match event.physical_key {
                                    PhysicalKey::Code(KeyCode::Space)
                                    | PhysicalKey::Code(KeyCode::KeyR) => {
                                        field.reroll();
                                        window.request_redraw();
                                    }
                                    PhysicalKey::Code(KeyCode::Escape) => target.exit(),
                                    _ => {}
                                }
                            }
                        }
                        WindowEvent::MouseInput { state, button, .. } => {
                            if button == MouseButton::Left {
                                dragging = state == ElementState::Pressed;
                                if !dragging {
                                    last_cursor = None;
                                }
                            }
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            if dragging {
                                if let Some((last_x, last_y)) = last_cursor {
                                    camera.apply_drag(
                                        (position.x - last_x) as f32,
                                        (position.y - last_y) as f32,
                                    );
                                    window.request_redraw();
                                }
                                last_cursor = Some((position.x, position.y));
                            }
                        }
                        WindowEvent::MouseWheel { delta, .. } => {
                            let lines = match delta {
                                MouseScrollDelta::LineDelta(_, y) => y,
                                MouseScrollDelta::PixelDelta(position) => {
                                    position.y as f32 / 20.0
                                }
                            };
                            camera.apply_zoom(lines);
                            window.request_redraw();
                        }
                        WindowEvent::Resized(size) => {
                            if size.width > 0 && size.height > 0 {
                                surface_config.width = size.width;
                                surface_config.height = size.height;
                                surface.configure(renderer.device(), &surface_config);
                                renderer.resize(size.width, size.height);
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            let now = Instant::now();
                            let elapsed = now.duration_since(last_frame).as_secs_f32();
                            last_frame = now;

                            field.tick(elapsed);
                            camera.tick();
                            if let Err(error) = draw_frame(
                                &surface,
                                &surface_config,
                                &mut renderer,
                                &field,
                                &camera,
                            ) {
                                eprintln!("[blockwave] play: render error: {error:#}");
                            }
                        }
                        _ => {}
                    }
                }
                WinitEvent::AboutToWait => {
                    let frame_duration = frame_interval(fps);
                    let now = Instant::now();
                    if now >= next_redraw_at {
                        window.request_redraw();
                        next_redraw_at = now + frame_duration;
                    }
                    target.set_control_flow(ControlFlow::WaitUntil(next_redraw_at));
                }
                _ => {}
            }
        })
        .map_err(|error| anyhow!("play event loop terminated: {error}"))
}

fn draw_frame(
    surface: &wgpu::Surface<'_>,
    surface_config: &wgpu::SurfaceConfiguration,
    renderer: &mut BlockRenderer,
    field: &BlockField,
    camera: &OrbitCamera,
) -> Result<()> {
    if surface_config.width == 0 || surface_config.height == 0 {
        return Ok(());
    }

    let frame = match surface.get_current_texture() {
        Ok(frame) => frame,
        Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
            surface.configure(renderer.device(), surface_config);
            return Ok(());
        }
        Err(wgpu::SurfaceError::Timeout) => return Ok(()),
        Err(wgpu::SurfaceError::OutOfMemory) => {
            return Err(anyhow!("surface out of memory"));
        }
    };

    let view = frame
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());
    let aspect = surface_config.width as f32 / surface_config.height as f32;
    let view_proj = camera.projection(aspect) * camera.view();
    let instances: Vec<BlockInstance> = field
        .displayed()
        .map(|block| BlockInstance::from_block(&block))
        .collect();

    renderer.render_to_view(&view, &instances, view_proj)?;
    frame.present();
    Ok(())
}

fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps.max(1) as f64)
}

fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    formats
        .iter()
        .copied()
        .find(|format| format.is_srgb())
        .unwrap_or(formats[0])
}
