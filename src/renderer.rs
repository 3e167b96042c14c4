use std::num::NonZeroU32;
use std::sync::mpsc;

use anyhow::{anyhow, bail, Context, Result};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::field::DisplayedBlock;

const BLOCK_SHADER: &str = r#"
struct SceneUniform {
  view_proj: mat4x4<f32>,
  light_dir: vec4<f32>,
}

@group(0) @binding(0) var<uniform> scene: SceneUniform;

struct VertexInput {
  @location(0) position: vec3<f32>,
  @location(1) normal: vec3<f32>,
}

struct InstanceInput {
  @location(2) model_0: vec4<f32>,
  @location(3) model_1: vec4<f32>,
  @location(4) model_2: vec4<f32>,
  @location(5) model_3: vec4<f32>,
  @location(6) color: vec4<f32>,
}

struct VertexOutput {
  @builtin(position) position: vec4<f32>,
  @location(0) color: vec4<f32>,
  @location(1) normal: vec3<f32>,
}

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
  let model = mat4x4<f32>(
    instance.model_0,
    instance.model_1,
    instance.model_2,
    instance.model_3,
  );

  var out: VertexOutput;
  out.position = scene.view_proj * model * vec4<f32>(vertex.position, 1.0);
  out.normal = normalize((model * vec4<f32>(vertex.normal, 0.0)).xyz);
  out.color = instance.color;
  return out;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
  let n_dot_l = max(dot(normalize(input.normal), normalize(scene.light_dir.xyz)), 0.0);
  let shade = 0.62 + 0.38 * n_dot_l;
  return vec4<f32>(input.color.rgb * shade, input.color.a);
}
"#;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.015,
    g: 0.015,
    b: 0.025,
    a: 1.0,
};

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

/// Per-block GPU payload: model matrix columns plus the displayed color.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct BlockInstance {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

impl BlockInstance {
    /// Translate to the cell's grid slot lifted by half the height, then
    /// scale the unit cube along Z, so blocks grow out of the ground plane.
    pub fn from_block(block: &DisplayedBlock) -> Self {
        let model = Mat4::from_translation(Vec3::new(
            block.grid_offset.x,
            block.grid_offset.y,
            block.height / 2.0,
        )) * Mat4::from_scale(Vec3::new(1.0, 1.0, block.height));

        Self {
            model: model.to_cols_array_2d(),
            color: block.color.as_array(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct SceneUniform {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
}

// Unit cube centered in XY, spanning [-0.5, 0.5] in Z before instance scale.
const CUBE_VERTICES: [Vertex; 24] = [
    // +X
    Vertex { position: [0.5, -0.5, -0.5], normal: [1.0, 0.0, 0.0] },
    Vertex { position: [0.5, 0.5, -0.5], normal: [1.0, 0.0, 0.0] },
    Vertex { position: [0.5, 0.5, 0.5], normal: [1.0, 0.0, 0.0] },
    Vertex { position: [0.5, -0.5, 0.5], normal: [1.0, 0.0, 0.0] },
    // -X
    Vertex { position: [-0.5, 0.5, -0.5], normal: [-1.0, 0.0, 0.0] },
    Vertex { position: [-0.5, -0.5, -0.5], normal: [-1.0, 0.0, 0.0] },
    Vertex { position: [-0.5, -0.5, 0.5], normal: [-1.0, 0.0, 0.0] },
    Vertex { position: [-0.5, 0.5, 0.5], normal: [-1.0, 0.0, 0.0] },
    // +Y
    Vertex { position: [0.5, 0.5, -0.5], normal: [0.0, 1.0, 0.0] },
    Vertex { position: [-0.5, 0.5, -0.5], normal: [0.0, 1.0, 0.0] },
    Vertex { position: [-0.5, 0.5, 0.5], normal: [0.0, 1.0, 0.0] },
    Vertex { position: [0.5, 0.5, 0.5], normal: [0.0, 1.0, 0.0] },
    // -Y
    Vertex { position: [-0.5, -0.5, -0.5], normal: [0.0, -1.0, 0.0] },
    Vertex { position: [0.5, -0.5, -0.5], normal: [0.0, -1.0, 0.0] },
    Vertex { position: [0.5, -0.5, 0.5], normal: [0.0, -1.0, 0.0] },
    Vertex { position: [-0.5, -0.5, 0.5], normal: [0.0, -1.0, 0.0] },
    // +Z (top)
    Vertex { position: [-0.5, -0.5, 0.5], normal: [0.0, 0.0, 1.0] },
    Vertex { position: [0.5, -0.5, 0.5], normal: [0.0, 0.0, 1.0] },
    Vertex { position: [0.5, 0.5, 0.5], normal: [0.0, 0.0, 1.0] },
    Vertex { position: [-0.5, 0.5, 0.5], normal: [0.0, 0.0, 1.0] },
    // -Z (bottom)
    Vertex { position: [-0.5, 0.5, -0.5], normal: [0.0, 0.0, -1.0] },
    Vertex { position: [0.5, 0.5, -0.5], normal: [0.0, 0.0, -1.0] },
    Vertex { position: [0.5, -0.5, -0.5], normal: [0.0, 0.0, -1.0] },
    Vertex { position: [-0.5, -0.5, -0.5], normal: [0.0, 0.0, -1.0] },
];

const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // +X
    4, 5, 6, 4, 6, 7, // -X
    8, 9, 10, 8, 10, 11, // +Y
    12, 13, 14, 12, 14, 15, // -Y
    16, 17, 18, 16, 18, 19, // +Z
    20, 21, 22, 20, 22, 23, // -Z
];

/// Adapter/device/queue bundle. Built once, then consumed by the renderer;
/// the adapter is exposed so callers can query surface capabilities first.
pub struct RendererGpuContext {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl RendererGpuContext {
    pub async fn headless() -> Result<Self> {
        let instance = wgpu::Instance::default();
        Self::request(&instance, None).await
    }

    pub async fn for_surface(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<Self> {
        Self::request(instance, Some(surface)).await
    }

    async fn request(
        instance: &wgpu::Instance,
        compatible_surface: Option<&wgpu::Surface<'_>>,
    ) -> Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                force_fallback_adapter: false,
                compatible_surface,
            })
            .await
            .ok_or_else(|| anyhow!("no suitable GPU adapter found"))?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("blockwave-device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("failed to request wgpu device")?;

        Ok(Self {
            adapter,
            device,
            queue,
        })
    }
}

struct HeadlessTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    readback_buffer: wgpu::Buffer,
    unpadded_bytes_per_row: u32,
    padded_bytes_per_row: u32,
}

pub struct BlockRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::RenderPipeline,
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    headless: Option<HeadlessTarget>,
}

impl BlockRenderer {
    /// Offscreen renderer with an Rgba8 target and a padded-row readback
    /// buffer for frame export.
    pub async fn new_headless(width: u32, height: u32, max_instances: usize) -> Result<Self> {
        let context = RendererGpuContext::headless().await?;
        let mut renderer = Self::with_context(
            context,
            wgpu::TextureFormat::Rgba8Unorm,
            width,
            height,
            max_instances,
        )?;

        let texture = renderer.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("blockwave-render-target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let unpadded_bytes_per_row = width
            .checked_mul(4)
            .ok_or_else(|| anyhow!("frame width overflow when computing row bytes"))?;
        let padded_bytes_per_row =
            align_to(unpadded_bytes_per_row, wgpu::COPY_BYTES_PER_ROW_ALIGNMENT);
        let readback_size = u64::from(padded_bytes_per_row) * u64::from(height);
        let readback_buffer = renderer.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("blockwave-readback-buffer"),
            size: readback_size,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        renderer.headless = Some(HeadlessTarget {
            texture,
            view,
            readback_buffer,
            unpadded_bytes_per_row,
            padded_bytes_per_row,
        });
        Ok(renderer)
    }

    /// Renderer drawing into caller-provided texture views (the surface
    /// path). The context should be built with `for_surface`.
    pub fn with_context(
        context: RendererGpuContext,
        target_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        max_instances: usize,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("render target must be non-zero, got {width}x{height}");
        }
        if max_instances == 0 {
            bail!("renderer needs capacity for at least one block instance");
        }

        let RendererGpuContext { device, queue, .. } = context;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("blockwave-block-shader"),
            source: wgpu::ShaderSource::Wgsl(BLOCK_SHADER.into()),
        });

        let scene_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("blockwave-scene-bind-group-layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<SceneUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("blockwave-scene-uniform"),
            size: std::mem::size_of::<SceneUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("blockwave-scene-bind-group"),
            layout: &scene_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("blockwave-pipeline-layout"),
            bind_group_layouts: &[&scene_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("blockwave-block-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<BlockInstance>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            2 => Float32x4,
                            3 => Float32x4,
                            4 => Float32x4,
                            5 => Float32x4,
                            6 => Float32x4,
                        ],
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Back),
                ..wgpu::PrimitiveState::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("blockwave-cube-vertices"),
            size: std::mem::size_of_val(&CUBE_VERTICES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(&CUBE_VERTICES));

        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("blockwave-cube-indices"),
            size: std::mem::size_of_val(&CUBE_INDICES) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&index_buffer, 0, bytemuck::cast_slice(&CUBE_INDICES));

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("blockwave-instances"),
            size: (std::mem::size_of::<BlockInstance>() * max_instances) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let depth_view = create_depth_view(&device, width, height);

        Ok(Self {
            device,
            queue,
            pipeline,
            scene_uniform_buffer,
            scene_bind_group,
            vertex_buffer,
            index_buffer,
            instance_buffer,
            instance_capacity: max_instances,
            depth_view,
            width,
            height,
            headless: None,
        })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Recreates the depth buffer after a surface resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.depth_view = create_depth_view(&self.device, width, height);
    }

    /// Draws one frame of block instances into `target_view`.
    pub fn render_to_view(
        &mut self,
        target_view: &wgpu::TextureView,
        instances: &[BlockInstance],
        view_proj: Mat4,
    ) -> Result<()> {
        if instances.len() > self.instance_capacity {
            bail!(
                "{} block instances exceed renderer capacity {}",
                instances.len(),
                self.instance_capacity
            );
        }

        let uniform = SceneUniform {
            view_proj: view_proj.to_cols_array_2d(),
            light_dir: [0.35, 0.25, 0.9, 0.0],
        };
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&uniform));
        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("blockwave-render-encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("blockwave-block-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.scene_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..CUBE_INDICES.len() as u32, 0, 0..instances.len() as u32);
        }

        self.queue.submit(Some(encoder.finish()));
        Ok(())
    }

    /// Headless path: renders and reads the frame back as tightly packed
    /// RGBA bytes.
    pub fn render_frame_rgba(
        &mut self,
        instances: &[BlockInstance],
        view_proj: Mat4,
    ) -> Result<Vec<u8>> {
        let target = self
            .headless
            .take()
            .ok_or_else(|| anyhow!("render_frame_rgba requires a headless renderer"))?;
        let rendered = self.render_to_view(&target.view, instances, view_proj);
        self.headless = Some(target);
        rendered?;

        self.copy_target_to_readback()?;
        self.read_buffer()
    }

    fn copy_target_to_readback(&self) -> Result<()> {
        let target = self
            .headless
            .as_ref()
            .ok_or_else(|| anyhow!("readback requires a headless renderer"))?;

        let padded_bytes_per_row = NonZeroU32::new(target.padded_bytes_per_row)
            .ok_or_else(|| anyhow!("invalid padded row size {}", target.padded_bytes_per_row))?;
        let rows_per_image = NonZeroU32::new(self.height)
            .ok_or_else(|| anyhow!("invalid render height {}", self.height))?;

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("blockwave-readback-encoder"),
            });
        encoder.copy_texture_to_buffer(
            wgpu::ImageCopyTexture {
                texture: &target.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::ImageCopyBuffer {
                buffer: &target.readback_buffer,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_bytes_per_row.get()),
                    rows_per_image: Some(rows_per_image.get()),
                },
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(Some(encoder.finish()));
        Ok(())
    }

    fn read_buffer(&mut self) -> Result<Vec<u8>> {
        let target = self
            .headless
            .as_ref()
            .ok_or_else(|| anyhow!("readback requires a headless renderer"))?;

        let buffer_slice = target.readback_buffer.slice(..);
        let (sender, receiver) = mpsc::channel();

        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = sender.send(result);
        });
        self.device.poll(wgpu::Maintain::Wait);

        receiver
            .recv()
            .map_err(|_| anyhow!("failed receiving GPU map callback"))?
            .context("GPU buffer mapping failed")?;

        let mapped = buffer_slice.get_mapped_range();
        let mut frame = vec![0_u8; (target.unpadded_bytes_per_row * self.height) as usize];

        for (row_index, chunk) in mapped
            .chunks(target.padded_bytes_per_row as usize)
            .take(self.height as usize)
            .enumerate()
        {
            let dst_start = row_index * target.unpadded_bytes_per_row as usize;
            let dst_end = dst_start + target.unpadded_bytes_per_row as usize;
            frame[dst_start..dst_end]
                .copy_from_slice(&chunk[..target.unpadded_bytes_per_row as usize]);
        }

        drop(mapped);
        target.readback_buffer.unmap();
        Ok(frame)
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("blockwave-depth"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn align_to(value: u32, alignment: u32) -> u32 {
    let mask = alignment - 1;
    (value + mask) & !mask
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::{align_to, BlockInstance, CUBE_INDICES, CUBE_VERTICES};
    use crate::field::DisplayedBlock;
    use crate::palette::Rgba;

    #[test]
    fn align_rounds_up_to_copy_alignment() {
        assert_eq!(align_to(4, 256), 256);
        assert_eq!(align_to(256, 256), 256);
        assert_eq!(align_to(257, 256), 512);
    }

    #[test]
    fn cube_geometry_is_consistent() {
        assert_eq!(CUBE_VERTICES.len(), 24);
        assert_eq!(CUBE_INDICES.len(), 36);
        assert!(CUBE_INDICES
            .iter()
            .all(|&index| (index as usize) < CUBE_VERTICES.len()));
    }

    #[test]
    fn instance_lifts_block_by_half_its_height() {
        let instance = BlockInstance::from_block(&DisplayedBlock {
            index: 0,
            grid_offset: Vec2::new(3.0, -2.0),
            height: 4.0,
            color: Rgba::new(0.2, 0.4, 0.6, 1.0),
        });

        // Column-major: translation lives in the last column, z scale on the
        // third diagonal entry.
        assert_eq!(instance.model[3][0], 3.0);
        assert_eq!(instance.model[3][1], -2.0);
        assert_eq!(instance.model[3][2], 2.0);
        assert_eq!(instance.model[2][2], 4.0);
        assert_eq!(instance.color, [0.2, 0.4, 0.6, 1.0]);
    }
}
