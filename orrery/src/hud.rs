//! Text overlay: body labels and the diagnostics readout

use egui::{Align2, Color32, Context, FontId, Id, LayerId, Order, Pos2};

use orrery::scene::{Scene, Text};

fn color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Scene coordinates are physical pixels; egui works in points
fn to_points(text: &Text, pixels_per_point: f32) -> Pos2 {
    Pos2::new(text.position.x / pixels_per_point, text.position.y / pixels_per_point)
}

/// Draw labels and HUD lines on top of everything
pub fn draw_overlay(ctx: &Context, scene: &Scene) {
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("orrery_overlay")));
    let ppp = ctx.pixels_per_point();

    for label in &scene.labels {
        painter.text(
            to_points(label, ppp),
            Align2::CENTER_CENTER,
            &label.text,
            FontId::proportional(label.size),
            color32(label.color),
        );
    }

    for line in &scene.hud {
        painter.text(
            to_points(line, ppp),
            Align2::LEFT_TOP,
            &line.text,
            FontId::proportional(line.size),
            color32(line.color),
        );
    }
}
