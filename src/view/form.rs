// Search form rendering: heading, the two dropdowns, query field and warning

use crate::app::FindMeThis;
use crate::model::{FileType, FileTypeIcon, SearchEngine, FILE_TYPES};
use crate::state::Dropdown;
use crate::style;
use eframe::egui;

const PLACEHOLDER: &str = "The Batman 2022";

impl FindMeThis {
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        if let Some((message, _)) = &self.ui.error_message {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(style::WARNING_COLOR, message);
                });
            });
        }
    }

    pub(crate) fn render_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(style::SECTION_SPACING);
                        ui.label(
                            egui::RichText::new("Find Me This")
                                .size(style::TITLE_SIZE)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(
                                "Discover direct download links for almost anything.",
                            )
                            .size(style::SUBTITLE_SIZE)
                            .weak(),
                        );
                    });
                    ui.add_space(style::SECTION_SPACING);

                    let width = ui.available_width().min(style::FORM_WIDTH);
                    let indent = (ui.available_width() - width) / 2.0;
                    ui.horizontal(|ui| {
                        ui.add_space(indent);
                        ui.vertical(|ui| {
                            ui.set_width(width);
                            egui::Frame::group(ui.style())
                                .fill(ui.visuals().window_fill)
                                .corner_radius(8.0)
                                .inner_margin(egui::Margin::same(24))
                                .show(ui, |ui| {
                                    self.render_file_type_picker(ui);
                                    ui.add_space(style::SECTION_SPACING);
                                    self.render_engine_picker(ui);
                                    ui.add_space(style::SECTION_SPACING);
                                    self.render_query_field(ui);
                                });
                        });
                    });
                });
        });
    }

    fn render_file_type_picker(&mut self, ui: &mut egui::Ui) {
        let current = self.selection.file_type();
        let section = ui.vertical(|ui| {
            ui.label(egui::RichText::new("Choose File Type").strong());
            let text = match current {
                Some(ft) => format!("{}  {}", style::file_type_glyph(ft.icon), ft.label),
                None => format!(
                    "{}  Select File Type",
                    style::file_type_glyph(FileTypeIcon::Generic)
                ),
            };
            let button = dropdown_button(ui, text);
            if button.clicked() {
                self.dropdowns.toggle(Dropdown::FileType);
            }
            button.rect
        });

        let mut area = section.response.rect;
        if self.dropdowns.is_open(Dropdown::FileType) {
            let list = dropdown_list(ui.ctx(), "file_type_list", section.inner, |ui| {
                let mut chosen: Option<&'static FileType> = None;
                for ft in FILE_TYPES.iter() {
                    let text = format!("{}  {}", style::file_type_glyph(ft.icon), ft.label);
                    if ui.selectable_label(current == Some(ft), text).clicked() {
                        chosen = Some(ft);
                    }
                }
                chosen
            });
            area = area.union(list.response.rect);
            if let Some(ft) = list.inner {
                self.selection.select_file_type(ft);
                self.dropdowns.close(Dropdown::FileType);
            }
        }
        self.dropdowns.set_area(Dropdown::FileType, area);
    }

    fn render_engine_picker(&mut self, ui: &mut egui::Ui) {
        let current = self.selection.engine();
        let section = ui.vertical(|ui| {
            ui.label(egui::RichText::new("Select Search Engine").strong());
            let button = dropdown_button(ui, current.display_name().to_string());
            if button.clicked() {
                self.dropdowns.toggle(Dropdown::Engine);
            }
            button.rect
        });

        let mut area = section.response.rect;
        if self.dropdowns.is_open(Dropdown::Engine) {
            let list = dropdown_list(ui.ctx(), "engine_list", section.inner, |ui| {
                let mut chosen = None;
                for engine in SearchEngine::ALL {
                    if ui
                        .selectable_label(current == engine, engine.display_name())
                        .clicked()
                    {
                        chosen = Some(engine);
                    }
                }
                chosen
            });
            area = area.union(list.response.rect);
            if let Some(engine) = list.inner {
                self.selection.select_engine(engine);
                self.dropdowns.close(Dropdown::Engine);
            }
        }
        self.dropdowns.set_area(Dropdown::Engine, area);
    }

    fn render_query_field(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Search Files").strong());

        let mut submit = false;
        ui.horizontal(|ui| {
            let field_width =
                ui.available_width() - style::SEARCH_BUTTON_SIZE - ui.spacing().item_spacing.x;
            let response = ui.add_sized(
                [field_width, style::FIELD_HEIGHT],
                egui::TextEdit::singleline(&mut self.selection.query)
                    .hint_text(PLACEHOLDER)
                    .vertical_align(egui::Align::Center),
            );
            if self.ui.focus_query {
                response.request_focus();
                self.ui.focus_query = false;
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            let search = ui
                .add_sized(
                    [style::SEARCH_BUTTON_SIZE, style::SEARCH_BUTTON_SIZE],
                    egui::Button::new("🔍"),
                )
                .on_hover_text("Search");
            if search.clicked() {
                submit = true;
            }
        });

        if submit {
            self.start_search();
        }

        if let Some(warning) = self.selection.warning() {
            ui.add_space(4.0);
            ui.colored_label(style::WARNING_COLOR, warning);
        }
    }
}

/// Full-width button that opens a dropdown list.
fn dropdown_button(ui: &mut egui::Ui, text: String) -> egui::Response {
    let size = egui::vec2(ui.available_width(), style::FIELD_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let visuals = ui.style().interact(&response);
    ui.painter()
        .rect_filled(rect, visuals.corner_radius, visuals.weak_bg_fill);
    ui.painter().rect_stroke(
        rect,
        visuals.corner_radius,
        visuals.bg_stroke,
        egui::StrokeKind::Inside,
    );
    let inner = rect.shrink2(egui::vec2(12.0, 0.0));
    ui.scope_builder(egui::UiBuilder::new().max_rect(inner), |ui| {
        ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
            style::truncated_label(ui, text);
        });
    });
    response
}

/// List shown under an open dropdown button, drawn above the rest of the form.
fn dropdown_list<R>(
    ctx: &egui::Context,
    id: &str,
    anchor: egui::Rect,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Area::new(egui::Id::new(id))
        .fixed_pos(anchor.left_bottom() + egui::vec2(0.0, style::LIST_GAP))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .show(ui, |ui| {
                    ui.set_width(anchor.width());
                    ui.with_layout(egui::Layout::top_down_justified(egui::Align::Min), add_contents)
                        .inner
                })
                .inner
        })
}
