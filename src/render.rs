use raylib::prelude::*;
use crate::constants::*;
use crate::frame_cache::{FrameCache, Layer};
use crate::stage::Stage;

// Never upscales
pub fn fit_scale(tex_width: f32, tex_height: f32, screen_width: f32, screen_height: f32) -> f32 {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return 1.0;
    }
    let by_width = screen_width * FIT_RATIO / tex_width;
    let by_height = screen_height * FIT_RATIO / tex_height;
    by_width.min(by_height).min(1.0)
}

pub fn frame_rect(tex_width: f32, tex_height: f32, screen_width: f32, screen_height: f32) -> Rectangle {
    let scale = fit_scale(tex_width, tex_height, screen_width, screen_height);
    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;
    Rectangle::new(
        (screen_width - scaled_width) * 0.5,
        (screen_height - scaled_height) * 0.5,
        scaled_width,
        scaled_height,
    )
}

pub fn toggle_button_rect(screen_height: f32) -> Rectangle {
    Rectangle::new(
        BUTTON_MARGIN,
        screen_height - BUTTON_HEIGHT - BUTTON_MARGIN,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

fn draw_layer(d: &mut RaylibDrawHandle, texture: &Texture2D, screen_width: f32, screen_height: f32) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        frame_rect(tex_width, tex_height, screen_width, screen_height),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

pub fn draw_stage(d: &mut RaylibDrawHandle, stage: &Stage, cache: &FrameCache<Texture2D>) {
    let screen_width = d.get_screen_width() as f32;
    let screen_height = d.get_screen_height() as f32;

    d.clear_background(Color::BLACK);

    if stage.container_visible {
        if let Some(texture) = stage.base_source.and_then(|i| cache.ready(Layer::Base, i)) {
            draw_layer(d, texture, screen_width, screen_height);
        }
        // Overlay is composited on top of the base frame
        if let Some(texture) = stage.visible_overlay().and_then(|i| cache.ready(Layer::Overlay, i)) {
            draw_layer(d, texture, screen_width, screen_height);
        }
    }

    let button = toggle_button_rect(screen_height);
    d.draw_rectangle_rec(button, Color::DARKGRAY);
    d.draw_rectangle_lines_ex(button, 2.0, Color::LIGHTGRAY);
    d.draw_text(
        stage.toggle_label,
        (button.x + 12.0) as i32,
        (button.y + (BUTTON_HEIGHT - FONT_SIZE as f32) * 0.5) as i32,
        FONT_SIZE,
        Color::WHITE,
    );

    if stage.status_visible {
        d.draw_text(&stage.status_text, 20, 20, FONT_SIZE, Color::RAYWHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_frames_are_not_upscaled() {
        assert_eq!(fit_scale(640.0, 360.0, 1280.0, 720.0), 1.0);
    }

    #[test]
    fn large_frames_fit_inside_the_window() {
        let rect = frame_rect(3840.0, 2160.0, 1280.0, 720.0);
        assert!(rect.width <= 1280.0 * FIT_RATIO + 0.01);
        assert!(rect.height <= 720.0 * FIT_RATIO + 0.01);
        assert!((rect.x + rect.width * 0.5 - 640.0).abs() < 0.01);
        assert!((rect.y + rect.height * 0.5 - 360.0).abs() < 0.01);
    }

    #[test]
    fn tall_frames_are_limited_by_height() {
        let scale = fit_scale(500.0, 2000.0, 1280.0, 720.0);
        assert!((scale - 720.0 * FIT_RATIO / 2000.0).abs() < 1e-6);
    }

    #[test]
    fn button_sits_in_the_bottom_left_corner() {
        let rect = toggle_button_rect(720.0);
        assert_eq!(rect.x, BUTTON_MARGIN);
        assert_eq!(rect.y + rect.height + BUTTON_MARGIN, 720.0);
    }
}
