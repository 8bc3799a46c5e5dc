// Input handling for the search form
// Keyboard and pointer events that are not tied to a single widget

use crate::app::FindMeThis;
use eframe::egui;

impl FindMeThis {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dropdowns.close_all();
        }

        // Presses outside a dropdown dismiss it. Areas come from the previous frame.
        let press = ctx.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if let Some(pos) = press {
            self.dropdowns.dismiss_outside(pos);
        }
    }
}
