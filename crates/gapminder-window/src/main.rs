// File: crates/gapminder-window/src/main.rs
// Summary: Interactive dashboard window: hover marks to float a population drill-down, Left/Right to change year.
// Notes:
// - Scenes are rasterized with the core Skia backend to RGBA8 and blitted through softbuffer (0RGB u32).
// - The primary frame is cached; it is re-rasterized only after the year selection changed mark visibility.
// - The overlay frame is cached per show and composited with the current fade opacity.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use clap::Parser;
use gapminder_core::render::{render_to_rgba8, RasterOptions};
use gapminder_core::{theme, DashboardConfig, DashboardState, PointerEvent, Scene};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(author, version, about = "Gapminder dashboard window", long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,
}

/// Straight-alpha RGBA8 pixels of one rasterized scene.
struct Frame {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
}

impl Frame {
    fn render(scene: &Scene, opts: &RasterOptions) -> Option<Self> {
        match render_to_rgba8(scene, opts) {
            Ok((pixels, width, height, stride)) => Some(Self { pixels, width, height, stride }),
            Err(e) => {
                warn!(%e, "rasterization failed");
                None
            }
        }
    }

    fn rgba_at(&self, x: u32, y: u32) -> [u8; 4] {
        let i = y as usize * self.stride + x as usize * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }
}

struct App {
    state: DashboardState,
    opts: RasterOptions,
    primary: Option<Frame>,
    /// Overlay frame keyed by the overlay's show count.
    overlay: Option<(u64, Frame)>,
    scene_size: (u32, u32),
}

impl App {
    fn new(state: DashboardState, opts: RasterOptions, scene_size: (u32, u32)) -> Self {
        Self { state, opts, primary: None, overlay: None, scene_size }
    }

    fn primary_frame(&mut self) -> Option<&Frame> {
        if self.primary.is_none() {
            let scene = self.state.scene(self.scene_size.0, self.scene_size.1);
            self.primary = Frame::render(&scene, &self.opts);
        }
        self.primary.as_ref()
    }

    fn refresh_overlay(&mut self) {
        let DashboardState::Ready(dash) = &self.state else { return };
        let overlay = dash.overlay();
        let shows = overlay.show_count();
        if self.overlay.as_ref().is_some_and(|(n, _)| *n == shows) {
            return;
        }
        self.overlay = overlay.scene().and_then(|s| Frame::render(s, &self.opts)).map(|f| (shows, f));
    }

    fn pointer(&mut self, event: PointerEvent, now: Instant) {
        if let DashboardState::Ready(dash) = &mut self.state {
            for ev in dash.handle_pointer(event, now) {
                debug!(?ev, "hover");
            }
        }
    }

    fn step_year(&mut self, delta: isize) {
        let DashboardState::Ready(dash) = &mut self.state else { return };
        if dash.step_year(delta) {
            info!(year = ?dash.selector().selected(), live = dash.config().live_year_filter, "year selected");
            if dash.config().live_year_filter {
                self.primary = None;
            }
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        matches!(&self.state, DashboardState::Ready(d) if d.overlay().is_animating(now))
    }

    /// Compose the primary frame and the faded overlay into a 0RGB buffer of `size`.
    fn compose(&mut self, size: PhysicalSize<u32>, now: Instant, out: &mut [u32]) {
        self.refresh_overlay();
        let (opacity, anchor) = match &self.state {
            DashboardState::Ready(d) => (d.overlay().opacity(now), d.overlay().anchor()),
            DashboardState::Failed(_) => (0.0, Default::default()),
        };
        let Some(base) = self.primary_frame() else { return };
        let (w, h) = (size.width.min(base.width), size.height.min(base.height));
        out.fill(0x00ff_ffff);
        for y in 0..h {
            for x in 0..w {
                let [r, g, b, _] = base.rgba_at(x, y);
                out[(y * size.width + x) as usize] = pack(r, g, b);
            }
        }

        let Some((_, top)) = self.overlay.as_ref() else { return };
        if opacity <= 0.0 {
            return;
        }
        let (ox, oy) = (anchor.x.round() as i64, anchor.y.round() as i64);
        for y in 0..top.height {
            let ty = oy + y as i64;
            if ty < 0 || ty >= size.height as i64 {
                continue;
            }
            for x in 0..top.width {
                let tx = ox + x as i64;
                if tx < 0 || tx >= size.width as i64 {
                    continue;
                }
                let [r, g, b, a] = top.rgba_at(x, y);
                let alpha = a as f32 / 255.0 * opacity;
                let i = (ty as u32 * size.width + tx as u32) as usize;
                out[i] = blend(out[i], [r, g, b], alpha);
            }
        }
    }
}

fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

fn blend(dst: u32, src: [u8; 3], alpha: f32) -> u32 {
    let mix = |d: u32, s: u8| (s as f32 * alpha + d as f32 * (1.0 - alpha)).round() as u8;
    pack(mix((dst >> 16) & 0xff, src[0]), mix((dst >> 8) & 0xff, src[1]), mix(dst & 0xff, src[2]))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => DashboardConfig::load_from_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(data) = args.data {
        config.data_path = data;
    }
    let opts = RasterOptions { theme: theme::find(&config.theme), draw_text: true };
    let scene_size = (config.primary.width, config.primary.height);
    let state = DashboardState::load(None, config);
    let mut app = App::new(state, opts, scene_size);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Gapminder")
        .with_inner_size(PhysicalSize::new(scene_size.0, scene_size.1))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;
    let mut size = window.inner_size();

    event_loop.run(move |event, _, cf| {
        let now = Instant::now();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    app.pointer(PointerEvent::Move { x: position.x, y: position.y }, now);
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    app.pointer(PointerEvent::Left, now);
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    match key {
                        VirtualKeyCode::Left => app.step_year(-1),
                        VirtualKeyCode::Right => app.step_year(1),
                        VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                        _ => {}
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if app.is_animating(now) {
                    window.request_redraw();
                    cf.set_wait_until(now + FRAME_INTERVAL);
                } else {
                    cf.set_wait();
                }
            }
            Event::RedrawRequested(_) => {
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    warn!(%e, "surface resize failed");
                    return;
                }
                let mut buffer = match surface.buffer_mut() {
                    Ok(b) => b,
                    Err(e) => {
                        warn!(%e, "no frame buffer");
                        return;
                    }
                };
                app.compose(size, now, &mut buffer);
                if let Err(e) = buffer.present() {
                    warn!(%e, "present failed");
                }
            }
            _ => {}
        }
    });
}
