use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use audio_qa_common::{PreviewClip, NO_PREVIEW};

use crate::io::{save_download, NativePicker};
use crate::model::{AppState, StatusKind, StatusLine};
use crate::player::Player;

const GOOD_HELP: &str = "Check if the audio is good.";

pub struct DesktopApp {
    state: AppState,
    picker: NativePicker,
    player: Player,
    clip: Option<PreviewClip>,
}

impl Default for DesktopApp {
    fn default() -> Self {
        let state = AppState::default();
        let picker = NativePicker::new(state.session.extension());
        Self {
            state,
            picker,
            player: Player::default(),
            clip: None,
        }
    }
}

impl DesktopApp {
    fn browse(&mut self) {
        self.state.session.pick_folder(&mut self.picker);
    }

    fn load(&mut self) {
        self.player.stop();
        self.clip = None;
        self.state.load();
    }

    fn download(&mut self) {
        let download = match self.state.session.download() {
            Ok(d) => d,
            Err(err) => {
                self.state.status = StatusLine::from_error(&err);
                return;
            }
        };
        match save_download(&download) {
            Ok(Some(path)) => self.state.status = StatusLine::success(format!("Downloaded: {}", path.display())),
            Ok(None) => {}
            Err(err) => self.state.status = StatusLine::error(format!("Download failed: {err:#}")),
        }
    }

    /// 試聴セレクタが変わったらファイルを読み込み直す
    fn select_preview(&mut self, choice: String) {
        self.player.stop();
        self.clip = None;
        self.state.preview_choice = choice;
        if self.state.preview_choice == NO_PREVIEW {
            return;
        }
        match self.state.session.preview(&self.state.preview_choice) {
            Ok(clip) => self.clip = Some(clip),
            Err(err) => self.state.status = StatusLine::from_error(&err),
        }
    }

    fn play(&mut self) {
        let Some(clip) = &self.clip else {
            return;
        };
        if let Err(err) = self.player.play(&clip.filename, &clip.bytes) {
            self.state.status = StatusLine::warning(format!("Could not play audio: {err:#}"));
        }
    }

    fn render_sidebar(&self, ui: &mut egui::Ui) {
        ui.heading("Settings");
        let ext = self.state.session.extension().to_ascii_uppercase();
        ui.label(RichText::new(format!("• Local folder only • Top-level files only • {ext} only")).small());
        ui.label(RichText::new("• Check the box if the audio is good (unchecked by default)").small());
    }

    fn render_picker(&mut self, ui: &mut egui::Ui) {
        ui.heading("1) Pick your folder");
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui.button(RichText::new("Browse…").strong()).clicked() {
                self.browse();
            }
            let folder = self
                .state
                .session
                .selected_folder()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            ui.add(
                egui::TextEdit::singleline(&mut folder.as_str())
                    .hint_text("Selected folder")
                    .desired_width(f32::INFINITY),
            );
        });

        ui.add_space(6.0);
        let label = format!("Load {} files", self.state.session.extension().to_ascii_uppercase());
        if ui.add_sized([ui.available_width(), 24.0], egui::Button::new(label)).clicked() {
            self.load();
        }
    }

    fn render_table(&mut self, ui: &mut egui::Ui) {
        let rows: Vec<(String, bool)> = self
            .state
            .session
            .table()
            .rows()
            .iter()
            .map(|r| (r.filename.clone(), r.is_good))
            .collect();
        let mut changes: Vec<(usize, bool)> = Vec::new();
        let row_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.6;

        ui.push_id("label_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::remainder().at_least(200.0))
                .column(Column::initial(140.0))
                .vscroll(false)
                .header(row_height, |mut header| {
                    header.col(|ui| {
                        ui.strong("filename");
                    });
                    header.col(|ui| {
                        ui.strong("file good or bad").on_hover_text(GOOD_HELP);
                    });
                })
                .body(|body| {
                    body.rows(row_height, rows.len(), |mut row| {
                        let index = row.index();
                        let (name, is_good) = &rows[index];
                        row.col(|ui| {
                            ui.label(name);
                        });
                        row.col(|ui| {
                            let mut checked = *is_good;
                            if ui.checkbox(&mut checked, "").on_hover_text(GOOD_HELP).changed() {
                                changes.push((index, checked));
                            }
                        });
                    });
                });
        });

        if !changes.is_empty() {
            self.state.apply_checks(&changes);
        }
    }

    fn render_preview(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Preview a file:").strong());

        let mut choice = self.state.preview_choice.clone();
        let names: Vec<String> = self.state.session.table().filenames().map(str::to_string).collect();
        egui::ComboBox::from_label("Pick a file to play")
            .selected_text(&choice)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut choice, NO_PREVIEW.to_string(), NO_PREVIEW);
                for name in &names {
                    ui.selectable_value(&mut choice, name.clone(), name);
                }
            });
        if choice != self.state.preview_choice {
            self.select_preview(choice);
        }

        if let Some(clip) = &self.clip {
            ui.horizontal(|ui| {
                ui.label(format!("{} ({}, {} bytes)", clip.filename, clip.mime(), clip.len()));
                if self.player.is_playing() {
                    ui.label(RichText::new(self.player.now_playing()).color(Color32::from_gray(170)));
                }
            });
            ui.horizontal(|ui| {
                if ui.button("▶ Play").clicked() {
                    self.play();
                }
                if ui.add_enabled(self.player.is_playing(), egui::Button::new("■ Stop")).clicked() {
                    self.player.stop();
                }
            });
        }
    }

    fn render_export(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width();
        if ui.add_sized([width, 24.0], egui::Button::new("Download CSV")).clicked() {
            self.download();
        }
        if self.state.session.active_folder().is_some()
            && ui
                .add_sized([width, 24.0], egui::Button::new("Save CSV into selected folder"))
                .clicked()
        {
            self.state.save_to_folder();
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let status = &self.state.status;
        if status.text.is_empty() {
            return;
        }
        let color = match status.kind {
            StatusKind::Info => Color32::from_gray(170),
            StatusKind::Success => Color32::from_rgb(90, 200, 120),
            StatusKind::Warning => Color32::from_rgb(246, 196, 69),
            StatusKind::Error => Color32::from_rgb(230, 90, 90),
        };
        ui.label(RichText::new(&status.text).color(color));
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.player.is_playing() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.heading("🎧 Audio QA CSV Builder");
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.render_status(ui);
        });

        egui::SidePanel::left("settings").resizable(true).show(ctx, |ui| {
            self.render_sidebar(ui);
            ui.separator();
            self.render_picker(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("2) Review & label");
            ui.separator();
            if self.state.session.table().is_empty() {
                let ext = self.state.session.extension();
                ui.label(format!("Load a folder with .{ext} files to begin."));
                return;
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_table(ui);
                ui.add_space(12.0);
                self.render_preview(ui);
                ui.add_space(12.0);
                self.render_export(ui);
            });
        });
    }
}
