use wasm_bindgen::prelude::*;
use web_sys::HtmlVideoElement;

use crate::animation::Prop;
use crate::core::MotionError;
use crate::domain::{MotionConfig, PageConfig};
use crate::sequencer::media::WebVideo;

use super::{PageCore, Section};

/// Browser handle of the page sequencer
#[wasm_bindgen]
pub struct PageMotion {
    core: PageCore<WebVideo>,
}

#[wasm_bindgen]
impl PageMotion {
    /// `config_json` is a `MotionConfig` document; only its `page` section
    /// is used. `None` means defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_height: f32, config_json: Option<String>) -> Result<PageMotion, JsValue> {
        let config = match config_json {
            Some(json) => MotionConfig::from_json(&json)?.page,
            None => PageConfig::default(),
        };
        Ok(PageMotion {
            core: PageCore::new(config, viewport_height),
        })
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.core.set_viewport_height(height);
    }

    pub fn set_region(&mut self, name: &str, top: f32, height: f32) {
        self.core.set_region(name, top, height);
    }

    pub fn refresh(&mut self) {
        self.core.refresh();
    }

    /// `None` when the fetch failed; the carousel then stays empty
    pub fn load_logos(&mut self, json: Option<String>) {
        match json {
            Some(body) => self.core.load_logos(Ok(&body)),
            None => self.core.load_logos(Err("fetch failed")),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn logos_json(&self) -> String {
        serde_json::to_string(self.core.logos().logos()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn load_feed(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_feed(json).map_err(JsValue::from)
    }

    #[wasm_bindgen(getter)]
    pub fn feed_json(&self) -> String {
        serde_json::to_string(self.core.feed().items()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn add_video(&mut self, id: u32, video: HtmlVideoElement) {
        video.set_muted(true);
        video.set_preload("auto");
        let _ = video.pause();
        self.core.add_media(id, WebVideo::new(video));
    }

    /// Rejections of `play` promises are caught internally; this is for
    /// failures the host observes on its own
    pub fn report_play_rejected(&mut self, id: u32) {
        self.core.report_play_rejected(id);
    }

    /// Returns the number of triggers registered
    pub fn mount_section(&mut self, key: &str) -> Result<usize, JsValue> {
        let section = parse_section(key)?;
        Ok(self.core.mount_section(section))
    }

    pub fn unmount_section(&mut self, key: &str) -> Result<(), JsValue> {
        let section = parse_section(key)?;
        self.core.unmount_section(section);
        Ok(())
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.core.on_scroll(scroll_y);
    }

    pub fn on_click(&mut self) {
        self.core.on_click();
    }

    pub fn tick(&mut self, dt_ms: f64) {
        self.core.tick(dt_ms);
    }

    #[wasm_bindgen(getter)]
    pub fn background(&self) -> String {
        self.core.background().to_hex()
    }

    /// Current value of `prop` on `target`, if animated
    pub fn value(&self, target: &str, prop: &str) -> Result<Option<f32>, JsValue> {
        let prop: Prop = prop.parse()?;
        Ok(self.core.value(target, prop))
    }

    /// Every animated value as `{target: {prop: value}}`
    pub fn values_json(&self) -> String {
        self.core.props().to_json()
    }

    pub fn counter(&self, key: &str) -> Option<u32> {
        self.core.counter(key)
    }

    #[wasm_bindgen(getter)]
    pub fn header_scrolled(&self) -> bool {
        self.core.header().is_scrolled()
    }

    #[wasm_bindgen(getter)]
    pub fn active_nav(&self) -> usize {
        self.core.header().active()
    }

    pub fn select_nav(&mut self, index: usize) -> bool {
        self.core.header_mut().select(index)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.core.header_mut().toggle_menu()
    }

    #[wasm_bindgen(getter)]
    pub fn menu_open(&self) -> bool {
        self.core.header().is_menu_open()
    }

    #[wasm_bindgen(getter)]
    pub fn logo_index(&self) -> usize {
        self.core.logo_column().index()
    }

    #[wasm_bindgen(getter)]
    pub fn trigger_count(&self) -> usize {
        self.core.trigger_count()
    }

    #[wasm_bindgen(getter)]
    pub fn listener_count(&self) -> usize {
        self.core.listeners().total()
    }

    pub fn destroy(&mut self) {
        self.core.destroy();
    }
}

fn parse_section(key: &str) -> Result<Section, MotionError> {
    Section::from_key(key).ok_or_else(|| MotionError::MissingTarget {
        region: key.to_string(),
    })
}
