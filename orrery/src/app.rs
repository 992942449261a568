//! Window-side application state: owns the simulator, controls and GPU resources

use std::time::Instant;

use common::{Camera2D, GraphicsContext};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    keyboard::KeyCode,
};

use orrery::clock::FrameClock;
use orrery::input::{command_for_press, HeldKeys};
use orrery::{AppConfig, Command, Controls, Flow, Scene, Simulator, View};

use crate::hud::draw_overlay;
use crate::renderer::Renderer;

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

pub struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    camera: Camera2D,
    egui: EguiState,
    simulator: Simulator,
    controls: Controls,
    held: HeldKeys,
    clock: FrameClock,
    view_bias: f64,
}

impl App {
    pub fn new(ctx: GraphicsContext, simulator: Simulator, controls: Controls, config: &AppConfig) -> Self {
        let camera = Camera2D::new(ctx.size.width, ctx.size.height);
        // Every body can carry a ring, so reserve two discs each.
        let renderer = Renderer::new(&ctx, &camera, simulator.bodies().len() * 2);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            camera,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
            simulator,
            controls,
            held: HeldKeys::default(),
            clock: FrameClock::new(config.target_fps, Instant::now()),
            view_bias: config.view_bias,
        }
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.ctx.size
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.resize(self.ctx.size.width, self.ctx.size.height);
    }

    /// Request a redraw if a frame is due; returns when to wake next
    pub fn pace(&mut self, now: Instant) -> Instant {
        if self.clock.is_due(now) {
            self.clock.tick(now);
            self.ctx.window.request_redraw();
        }
        self.clock.deadline()
    }

    fn apply(&mut self, command: Command) -> Flow {
        match self.controls.apply(command, &self.simulator) {
            Ok(flow) => flow,
            Err(e) => {
                log::error!("Ignoring {:?}: {}", command, e);
                Flow::Continue
            }
        }
    }

    /// Held keys, then the frame's substeps
    pub fn update(&mut self) -> Flow {
        for command in self.held.commands() {
            if self.apply(command) == Flow::Quit {
                return Flow::Quit;
            }
        }
        self.simulator
            .advance_frame(self.controls.substeps, self.controls.time_scale);
        Flow::Continue
    }

    fn view(&self) -> View {
        let reference = self
            .simulator
            .body(&self.controls.reference)
            .unwrap_or_else(|| self.simulator.primary());
        View::new(
            self.ctx.size.width as f64,
            self.ctx.size.height as f64,
            self.view_bias,
            self.controls.scale,
            reference.position,
        )
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let scene = Scene::build(&self.simulator, &self.controls, &self.view());

        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        let frame = self.renderer.prepare(&self.ctx.device, &self.ctx.queue, &scene);

        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| draw_overlay(ctx, &scene));

        self.egui.state.handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self.egui.ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui.renderer.update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view, &frame);

        let egui_commands = self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui.renderer.render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx
            .queue
            .submit(egui_commands.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        Ok(())
    }

    /// Discrete commands fire on the initial press only; held keys track both edges
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) -> Flow {
        let pressed = state == ElementState::Pressed;
        if self.held.set(key, pressed) {
            return if self.held.quit { Flow::Quit } else { Flow::Continue };
        }
        if !pressed || repeat {
            return Flow::Continue;
        }
        match command_for_press(key) {
            Some(command) => self.apply(command),
            None => Flow::Continue,
        }
    }

    /// Forward to egui; true if egui consumed the event
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.state.on_window_event(&self.ctx.window, event).consumed
    }
}
