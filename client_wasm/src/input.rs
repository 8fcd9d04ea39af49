//! Pointer input handling

/// Map a pointer's viewport y onto the playfield.
///
/// `rect_top`/`rect_height` come from the canvas' bounding rect; the canvas may
/// be scaled by CSS, so the offset is rescaled to the drawing surface height.
pub fn pointer_to_playfield_y(
    client_y: f64,
    rect_top: f64,
    rect_height: f64,
    surface_height: u32,
) -> f32 {
    let offset = client_y - rect_top;
    if rect_height > 0.0 {
        (offset * surface_height as f64 / rect_height) as f32
    } else {
        offset as f32
    }
}

#[cfg(target_arch = "wasm32")]
pub fn canvas_y(canvas: &web_sys::HtmlCanvasElement, client_y: i32) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    pointer_to_playfield_y(client_y as f64, rect.top(), rect.height(), canvas.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscaled_canvas() {
        assert_eq!(pointer_to_playfield_y(150.0, 50.0, 500.0, 500), 100.0);
    }

    #[test]
    fn test_css_scaled_canvas() {
        // Canvas drawn at half size: 250 CSS px tall for a 500 unit surface
        assert_eq!(pointer_to_playfield_y(125.0, 0.0, 250.0, 500), 250.0);
    }

    #[test]
    fn test_pointer_above_canvas_is_negative() {
        assert!(pointer_to_playfield_y(10.0, 40.0, 500.0, 500) < 0.0);
    }

    #[test]
    fn test_collapsed_rect_falls_back_to_offset() {
        assert_eq!(pointer_to_playfield_y(70.0, 20.0, 0.0, 500), 50.0);
    }
}
