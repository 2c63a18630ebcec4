use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::domain::Color;

/// Image handle the surface can draw
pub trait ImageSource {
    /// Loaded with a non-zero natural size. Checked every frame, never
    /// cached.
    fn is_ready(&self) -> bool;
}

/// The subset of a 2D canvas context the bridge needs
pub trait DrawSurface {
    type Image: ImageSource;

    fn clear(&mut self, width: f32, height: f32);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);
    fn set_alpha(&mut self, alpha: f32);
    /// `None` disables the shadow
    fn set_glow(&mut self, color: Option<Color>, blur: f32);
    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32, width: f32, height: f32);
}

impl ImageSource for HtmlImageElement {
    fn is_ready(&self) -> bool {
        self.complete() && self.natural_width() > 0 && self.natural_height() > 0
    }
}

impl DrawSurface for CanvasRenderingContext2d {
    type Image = HtmlImageElement;

    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, x: f32, y: f32) {
        let _ = CanvasRenderingContext2d::translate(self, x as f64, y as f64);
    }

    fn rotate(&mut self, angle: f32) {
        let _ = CanvasRenderingContext2d::rotate(self, angle as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.set_global_alpha(alpha as f64);
    }

    fn set_glow(&mut self, color: Option<Color>, blur: f32) {
        match color {
            Some(c) => {
                self.set_shadow_color(&c.to_hex());
                self.set_shadow_blur(blur as f64);
            }
            None => self.set_shadow_blur(0.0),
        }
    }

    fn draw_image(&mut self, image: &HtmlImageElement, x: f32, y: f32, width: f32, height: f32) {
        if let Err(e) = self.draw_image_with_html_image_element_and_dw_and_dh(image, x as f64, y as f64, width as f64, height as f64) {
            motion_warn!("[render] drawImage failed: {:?}", e);
        }
    }
}
