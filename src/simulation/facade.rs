use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::core::MotionError;
use crate::domain::{FooterConfig, MotionConfig};

use super::perf_stats::PerfStats;
use super::{FooterCore, PerfTimer};

/// Browser handle of the footer canvas.
///
/// Without a canvas (or a 2D context) the handle is inert: every method is
/// a no-op and `mounted` is false.
#[wasm_bindgen]
pub struct Footer {
    core: Option<FooterCore>,
    ctx: Option<CanvasRenderingContext2d>,
    images: Vec<HtmlImageElement>,
    last_frame: Option<PerfTimer>,
}

#[wasm_bindgen]
impl Footer {
    /// `config_json` is a `MotionConfig` document; only its `footer`
    /// section is used. `None` means defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: Option<HtmlCanvasElement>, config_json: Option<String>) -> Result<Footer, JsValue> {
        let config = match config_json {
            Some(json) => MotionConfig::from_json(&json)?.footer,
            None => FooterConfig::default(),
        };

        let ctx = canvas.as_ref().and_then(context_2d);
        let (width, height) = canvas
            .as_ref()
            .map(|c| (c.width() as f32, c.height() as f32))
            .unwrap_or((0.0, 0.0));

        let images = if ctx.is_some() { load_images(&config) } else { Vec::new() };
        let core = FooterCore::mount(width, height, ctx.is_some(), config);

        Ok(Footer {
            core,
            ctx,
            images,
            last_frame: None,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.core.as_ref().map(|c| !c.is_destroyed()).unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.as_ref().map(|c| c.body_count()).unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn gravity_y(&self) -> f32 {
        self.core.as_ref().map(|c| c.gravity().1).unwrap_or(0.0)
    }

    #[wasm_bindgen(getter)]
    pub fn has_interacted(&self) -> bool {
        self.core.as_ref().map(|c| c.has_interacted()).unwrap_or(false)
    }

    /// Number of DOM listeners the glue should currently keep attached
    #[wasm_bindgen(getter)]
    pub fn listener_count(&self) -> usize {
        self.core.as_ref().map(|c| c.listeners().total()).unwrap_or(0)
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        if let Some(core) = self.core.as_mut() {
            core.enable_perf_metrics(enabled);
        }
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.as_ref().map(|c| c.get_perf_stats()).unwrap_or_default()
    }

    /// IntersectionObserver callback
    pub fn set_intersection_ratio(&mut self, ratio: f32) {
        if let Some(core) = self.core.as_mut() {
            core.set_intersection_ratio(ratio);
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.core.as_mut().and_then(|c| c.pointer_down(x, y)).is_some()
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if let Some(core) = self.core.as_mut() {
            core.pointer_move(x, y);
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(core) = self.core.as_mut() {
            core.pointer_up();
        }
    }

    pub fn pointer_leave(&mut self) {
        if let Some(core) = self.core.as_mut() {
            core.pointer_leave();
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if let Some(core) = self.core.as_mut() {
            core.resize(width, height);
        }
    }

    /// Image `index` fired `error`; the body keeps simulating undrawn
    pub fn report_image_error(&self, index: usize) {
        let src = self.images.get(index).map(|img| img.src()).unwrap_or_default();
        motion_warn!("[footer] {}", MotionError::AssetLoad { src });
    }

    /// One animation frame: step by the wall time since the previous
    /// frame, then draw. Returns the number of physics steps.
    pub fn frame(&mut self) -> u32 {
        let elapsed = match self.last_frame.as_mut() {
            Some(timer) => timer.lap_ms(),
            None => {
                self.last_frame = Some(PerfTimer::start());
                0.0
            }
        };
        let (Some(core), Some(ctx)) = (self.core.as_mut(), self.ctx.as_mut()) else {
            return 0;
        };
        let steps = core.frame_tick(elapsed);
        core.render(ctx, &self.images);
        steps
    }

    pub fn snapshot_json(&self) -> String {
        self.core.as_ref().map(|c| c.snapshot_json()).unwrap_or_else(|| "[]".to_string())
    }

    /// Unmount. Idempotent.
    pub fn destroy(&mut self) {
        if let Some(core) = self.core.as_mut() {
            core.destroy();
        }
        self.images.clear();
        self.ctx = None;
        self.last_frame = None;
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(obj)) => obj.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => {
            motion_warn!("[footer] 2d context unavailable");
            None
        }
    }
}

/// One image element per configured icon, in icon order. Bodies index into
/// this list, so creation stops at the first failure rather than shifting.
fn load_images(config: &FooterConfig) -> Vec<HtmlImageElement> {
    let mut images = Vec::with_capacity(config.icons.len());
    for icon in config.icons.iter() {
        match HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(&icon.src);
                images.push(img);
            }
            Err(_) => {
                motion_warn!("[footer] {}", MotionError::AssetLoad { src: icon.src.clone() });
                break;
            }
        }
    }
    images
}
