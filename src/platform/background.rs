//! Browser side of the decorative particle field

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::{AnimationLoop, EventListener};
use crate::MountError;
use crate::particles::{ParticleField, ParticleRenderer, RenderInitError};

#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error(transparent)]
    Render(#[from] RenderInitError),
    #[error(transparent)]
    Mount(#[from] MountError),
    #[error("particle field has no points")]
    Empty,
}

struct Scene {
    field: ParticleField,
    renderer: ParticleRenderer,
}

impl Scene {
    fn frame(&mut self) {
        let Scene { field, renderer } = self;
        field.advance();
        match renderer.render(field) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.resize(renderer.size.0, renderer.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Particle field out of GPU memory");
            }
            Err(e) => log::warn!("Particle render error: {:?}", e),
        }
    }
}

/// Backing-store size for a canvas at the current pixel ratio
fn canvas_size(window: &Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
    let dpr = window.device_pixel_ratio();
    let width = (canvas.client_width().max(1) as f64 * dpr) as u32;
    let height = (canvas.client_height().max(1) as f64 * dpr) as u32;
    (width.max(1), height.max(1))
}

/// A running particle field.
///
/// Owns the frame loop, the pointer/resize listeners and the GPU state.
/// Fields drop in declaration order: the frame callback is cancelled first,
/// then the listeners go, then the last reference to the scene releases the
/// surface, device and buffers.
pub struct ParticleFieldHandle {
    _frame: AnimationLoop,
    _listeners: Vec<EventListener>,
    scene: Rc<RefCell<Scene>>,
}

impl ParticleFieldHandle {
    /// Acquire a GPU surface on `canvas` and start animating `count` points
    pub async fn start(canvas: HtmlCanvasElement, count: usize, seed: u64) -> Result<Self, BackgroundError> {
        let field = ParticleField::new(count, seed);
        if field.is_empty() {
            return Err(BackgroundError::Empty);
        }
        let window = super::window()?;

        let (width, height) = canvas_size(&window, &canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(RenderInitError::from)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(RenderInitError::from)?;

        log::info!("Particle adapter: {:?}", adapter.get_info().name);

        let renderer = ParticleRenderer::new(surface, &adapter, &field, width, height).await?;
        let scene = Rc::new(RefCell::new(Scene { field, renderer }));

        let mut listeners = Vec::with_capacity(2);
        {
            let scene = scene.clone();
            let w = window.clone();
            listeners.push(EventListener::passive(&window, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
                let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                scene.borrow_mut().field.set_pointer(
                    event.client_x() as f32,
                    event.client_y() as f32,
                    width as f32,
                    height as f32,
                );
            })?);
        }
        {
            let scene = scene.clone();
            let w = window.clone();
            listeners.push(EventListener::new(&window, "resize", move |_| {
                let (width, height) = canvas_size(&w, &canvas);
                canvas.set_width(width);
                canvas.set_height(height);
                scene.borrow_mut().renderer.resize(width, height);
            })?);
        }

        let frame = {
            let scene = scene.clone();
            AnimationLoop::start(move |_time| scene.borrow_mut().frame())?
        };

        log::info!("Particle field running with {} points (seed {})", count, seed);

        Ok(Self {
            _frame: frame,
            _listeners: listeners,
            scene,
        })
    }

    pub fn point_count(&self) -> usize {
        self.scene.borrow().field.len()
    }
}

impl Drop for ParticleFieldHandle {
    fn drop(&mut self) {
        log::info!("Stopping particle field");
    }
}
