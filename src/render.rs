use crate::core::gradient::GradientImage;
use crate::core::{AppState, Viewport};
use web_sys as web;

mod helpers;
mod points;
mod toon;

use points::{create_points_resources, PointsGlobals, PointsResources};
use toon::{create_toon_resources, MeshUniforms, ToonGlobals, ToonResources};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // sRGB view of the swapchain texture the pipelines render into
    view_format: wgpu::TextureFormat,
    depth_view: wgpu::TextureView,
    toon: ToonResources,
    points: PointsResources,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        state: &AppState,
        gradient: &GradientImage,
    ) -> anyhow::Result<Self> {
        let (width, height) = state.viewport.drawing_buffer_size();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let view_format = format.add_srgb_suffix();
        // Transparent canvas so the page background shows through
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} view={:?} alpha={:?}",
            width,
            height,
            format,
            view_format,
            alpha_mode
        );

        let depth_view = helpers::create_depth_view(&device, width, height);
        let geometries: Vec<_> = state.scene.meshes.iter().map(|m| &m.geometry).collect();
        let toon = create_toon_resources(&device, &queue, view_format, gradient, &geometries);
        let points = create_points_resources(&device, view_format, &state.scene.particles);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            depth_view,
            toon,
            points,
            width,
            height,
        })
    }

    /// Match the drawing buffer to the viewport. Identical sizes are a no-op.
    pub fn resize(&mut self, viewport: &Viewport) {
        let (width, height) = viewport.drawing_buffer_size();
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reapply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = helpers::create_depth_view(&self.device, self.width, self.height);
    }

    fn write_uniforms(&self, state: &AppState) {
        let view_proj = state.rig.view_proj().to_cols_array_2d();
        let scene = &state.scene;
        let light = scene.light;
        let dir = light.direction();
        let [lr, lg, lb] = light.color;
        let [mr, mg, mb] = scene.material.color;
        let globals = ToonGlobals {
            view_proj,
            light_dir: [dir.x, dir.y, dir.z, 0.0],
            light_color: [
                lr * light.intensity,
                lg * light.intensity,
                lb * light.intensity,
                1.0,
            ],
            base_color: [mr, mg, mb, 1.0],
        };
        self.queue
            .write_buffer(&self.toon.globals_buffer, 0, bytemuck::bytes_of(&globals));
        for (gpu, mesh) in self.toon.meshes.iter().zip(&scene.meshes) {
            let u = MeshUniforms {
                model: mesh.model_matrix().to_cols_array_2d(),
            };
            self.queue
                .write_buffer(&gpu.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
        let [pr, pg, pb] = scene.particle_material.color;
        let pg_uniforms = PointsGlobals {
            view_proj,
            color: [pr, pg, pb, 1.0],
            size_aspect: [
                scene.particle_material.size,
                state.viewport.aspect(),
                0.0,
                0.0,
            ],
        };
        self.queue.write_buffer(
            &self.points.uniform_buffer,
            0,
            bytemuck::bytes_of(&pg_uniforms),
        );
    }

    pub fn render(&mut self, state: &AppState) -> Result<(), wgpu::SurfaceError> {
        self.write_uniforms(state);
        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
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
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.toon.pipeline);
            rpass.set_bind_group(0, &self.toon.globals_bind_group, &[]);
            for mesh in &self.toon.meshes {
                rpass.set_bind_group(1, &mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            if let Some(instances) = &self.points.instance_buffer {
                rpass.set_pipeline(&self.points.pipeline);
                rpass.set_bind_group(0, &self.points.bind_group, &[]);
                rpass.set_vertex_buffer(0, instances.slice(..));
                rpass.draw(0..6, 0..self.points.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
