//! Canvas 2D painter for the browser build

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::shapes::DrawCmd;

/// Paint a display list onto a 2D canvas context
pub fn paint(ctx: &CanvasRenderingContext2d, cmds: &[DrawCmd]) -> Result<(), JsValue> {
    for cmd in cmds {
        match cmd {
            DrawCmd::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCmd::Rect { rect, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(
                    rect.x as f64,
                    rect.y as f64,
                    rect.width as f64,
                    rect.height as f64,
                );
            }
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.close_path();
                ctx.fill();
            }
            DrawCmd::Text {
                text,
                pos,
                size,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.set_font(&format!("{}px Arial", size));
                ctx.set_text_align("center");
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
    }
    Ok(())
}
