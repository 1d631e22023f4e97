use crate::camera::Camera;
use crate::fog::FogSettings;

/// Score and FPS overlay for the match game, pinned to the top-left
/// corner without chrome.
pub fn score_overlay(ctx: &egui::Context, score: u32, fps: f32) {
    egui::Window::new("Score")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("Score: {}", score))
                    .size(32.0)
                    .color(egui::Color32::from_rgb(74, 158, 255)),
            );
            ui.label(
                egui::RichText::new(format!("{:.0} FPS", fps))
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
        });
}

/// Camera and fog parameter folders for the showcase demo. Sliders go
/// through the clamping setters, so near/far pairs can never invert no
/// matter how the user drags them.
pub fn showcase_panel(ctx: &egui::Context, camera: &mut Camera, fog: &mut FogSettings) {
    egui::Window::new("controls")
        .resizable(false)
        .default_pos(egui::pos2(10.0, 10.0))
        .show(ctx, |ui| {
            ui.collapsing("camera", |ui| {
                let mut fov_degrees = camera.fov_y().to_degrees();
                if ui
                    .add(egui::Slider::new(&mut fov_degrees, 1.0..=150.0).text("fov"))
                    .changed()
                {
                    camera.set_fov_y(fov_degrees.to_radians());
                }

                let mut near = camera.depth().near();
                if ui
                    .add(egui::Slider::new(&mut near, 0.1..=50.0).text("near"))
                    .changed()
                {
                    camera.depth_mut().set_near(near);
                }

                let mut far = camera.depth().far();
                if ui
                    .add(egui::Slider::new(&mut far, 0.1..=1000.0).text("far"))
                    .changed()
                {
                    camera.depth_mut().set_far(far);
                }
            });

            ui.collapsing("fog", |ui| {
                let mut near = fog.near();
                if ui
                    .add(egui::Slider::new(&mut near, 0.1..=100.0).text("near"))
                    .changed()
                {
                    fog.set_near(near);
                }

                let mut far = fog.far();
                if ui
                    .add(egui::Slider::new(&mut far, 0.1..=100.0).text("far"))
                    .changed()
                {
                    fog.set_far(far);
                }

                let mut color = fog.color();
                if ui.color_edit_button_rgb(&mut color).changed() {
                    fog.set_color(color);
                }
            });
        });
}
