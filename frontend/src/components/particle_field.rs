use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::animation::particles::{
    Camera, ParticleCloud, BACKGROUND_CAMERA, CLOUD_BOUNDS, PARTICLE_COLOR, PARTICLE_COUNT,
};
use crate::animation::ticker::Ticker;
use crate::animation::AnimationError;

struct ParticleRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    cloud: ParticleCloud,
    camera: Camera,
}

impl ParticleRenderer {
    fn mount(canvas_ref: &NodeRef) -> Result<Self, AnimationError> {
        let canvas = canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or(AnimationError::NoCanvas)?;
        let context = canvas
            .get_context("2d")?
            .ok_or(AnimationError::NoCanvasContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AnimationError::NoCanvasContext)?;

        let cloud = ParticleCloud::sample(&mut rand::thread_rng(), PARTICLE_COUNT, CLOUD_BOUNDS);
        debug!("Particle field mounted with {} points", cloud.len());

        Ok(Self {
            canvas,
            context,
            cloud,
            camera: BACKGROUND_CAMERA,
        })
    }

    fn draw(&self, elapsed: f64) {
        // Keep the backing store in step with the laid-out size
        let width = self.canvas.client_width().max(1) as u32;
        let height = self.canvas.client_height().max(1) as u32;
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }

        let (width, height) = (width as f64, height as f64);
        self.context.clear_rect(0.0, 0.0, width, height);
        self.context.set_fill_style_str(PARTICLE_COLOR);
        for point in self.cloud.frame(elapsed, &self.camera, width, height) {
            let half = point.size / 2.0;
            self.context
                .fill_rect(point.x - half, point.y - half, point.size, point.size);
        }
    }
}

/// Decorative rotating point cloud filling its positioned parent.
#[function_component(ParticleField)]
pub fn particle_field() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let ticker = ParticleRenderer::mount(&canvas_ref)
                    .and_then(|renderer| Ticker::start(move |elapsed| renderer.draw(elapsed)));
                let ticker = match ticker {
                    Ok(ticker) => Some(ticker),
                    Err(err) => {
                        warn!("Particle field disabled: {}", err);
                        None
                    }
                };
                move || drop(ticker)
            },
            (),
        );
    }

    html! {
        <div class="particle-layer" aria-hidden="true">
            <canvas ref={canvas_ref} class="particle-canvas" />
        </div>
    }
}
