//! Main application state and eframe integration.
//!
//! `TikzitApp` is the application controller: it owns the open document and
//! the `open(path)` operation that both startup dispatch paths feed into.
//! Closing the window hides it instead of quitting, so the process stays
//! resident until File > Quit.

use std::fs;
use std::path::PathBuf;

use egui::{CentralPanel, Context, Key, TopBottomPanel};
use tikzit_core::{keys, Settings};

use crate::fonts;
use crate::preferences::PreferenceDialog;

/// A document opened in the editor.
struct Document {
    path: PathBuf,
    source: String,
}

/// Main application state.
pub struct TikzitApp {
    /// The process-wide settings store.
    settings: Settings,
    /// Font families registered with the toolkit, for the preferences picker.
    font_families: Vec<String>,
    /// Currently open document, if any.
    document: Option<Document>,
    /// The preferences dialog while it is open.
    preferences: Option<PreferenceDialog>,
    /// Status bar text.
    status_message: String,
    /// Window is hidden (close was intercepted) but the process is running.
    hidden: bool,
    /// Set by File > Quit; lets the next close request through.
    quit_requested: bool,
}

impl TikzitApp {
    /// Create the application controller.
    pub fn new(cc: &eframe::CreationContext<'_>, initial_file: Option<PathBuf>) -> Self {
        let font_families = fonts::install_families(&cc.egui_ctx);
        Self::with_settings(Settings::open("tikzit", "tikzit"), font_families, initial_file)
    }

    /// Build the controller around an explicit store.
    ///
    /// The startup file argument is opened exactly once here, before the
    /// event loop dispatches anything.
    fn with_settings(
        settings: Settings,
        font_families: Vec<String>,
        initial_file: Option<PathBuf>,
    ) -> Self {
        let mut app = Self {
            settings,
            font_families,
            document: None,
            preferences: None,
            status_message: "No file loaded. Use File > Open or Ctrl+O".to_string(),
            hidden: false,
            quit_requested: false,
        };

        if let Some(path) = initial_file {
            app.open(path);
        }

        app
    }

    /// Open a file, whether requested by the command line, the OS, or the
    /// File menu. Failures are absorbed here; callers have no error channel.
    pub fn open(&mut self, path: PathBuf) {
        match fs::read_to_string(&path) {
            Ok(source) => {
                self.status_message = format!("Opened {}", path.display());
                tracing::info!("opened {}", path.display());
                self.document = Some(Document { path, source });
            }
            Err(e) => {
                self.status_message = format!("Failed to open {}: {}", path.display(), e);
                tracing::error!("failed to open {}: {}", path.display(), e);
            }
        }
    }

    /// Open file dialog and load the selected file.
    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TikZ Files", &["tikz", "tex"])
            .add_filter("All Files", &["*"])
            .pick_file()
        {
            self.open(path);
        }
    }

    /// Show the preferences dialog, snapshotting the current settings.
    fn open_preferences(&mut self) {
        if self.preferences.is_none() {
            self.preferences = Some(PreferenceDialog::from_settings(
                &self.settings,
                self.font_families.clone(),
            ));
        }
    }

    /// The font used for the source preview, from the live settings.
    fn preview_font(&self) -> egui::FontId {
        let size = self
            .settings
            .get_int(keys::PREVIEW_FONT_SIZE, keys::DEFAULT_PREVIEW_FONT_SIZE) as f32;
        let family = self
            .settings
            .get_string(keys::PREVIEW_FONT_FAMILY, keys::DEFAULT_PREVIEW_FONT_FAMILY);
        let family = if self.font_families.iter().any(|f| *f == family) {
            egui::FontFamily::Name(family.as_str().into())
        } else {
            egui::FontFamily::Monospace
        };
        egui::FontId::new(size.max(1.0), family)
    }

    /// Route any OS-delivered open-file events into `open`.
    fn poll_open_events(&mut self, ctx: &Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if dropped.is_empty() {
            return;
        }
        for path in dropped {
            self.open(path);
        }
        if self.hidden {
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
            self.hidden = false;
        }
    }

    /// Keep the process resident: a close request hides the window unless
    /// the user asked to quit.
    fn intercept_close(&mut self, ctx: &Context) {
        if self.quit_requested {
            return;
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
            self.hidden = true;
        }
    }

    fn quit(&mut self, ctx: &Context) {
        self.quit_requested = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    /// Render the menu bar.
    fn render_menu(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open… (Ctrl+O)").clicked() {
                        self.open_file_dialog();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Preferences… (Ctrl+,)").clicked() {
                        self.open_preferences();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit (Ctrl+Q)").clicked() {
                        self.quit(ctx);
                    }
                });
            });
        });
    }

    /// Render the status bar.
    fn render_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(doc) = &self.document {
                        ui.label(doc.path.display().to_string());
                    }
                });
            });
        });
    }

    /// Render the source preview.
    fn render_preview(&mut self, ctx: &Context) {
        let font = self.preview_font();
        CentralPanel::default().show(ctx, |ui| {
            if let Some(doc) = &self.document {
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.label(egui::RichText::new(&doc.source).font(font));
                });
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("No file loaded\n\nUse File > Open or Ctrl+O")
                            .font(egui::FontId::proportional(20.0)),
                    );
                });
            }
        });
    }

    /// Handle keyboard shortcuts.
    fn handle_keyboard(&mut self, ctx: &Context) {
        let (open, prefs, quit) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(Key::O),
                i.modifiers.ctrl && i.key_pressed(Key::Comma),
                i.modifiers.ctrl && i.key_pressed(Key::Q),
            )
        });
        if open {
            self.open_file_dialog();
        }
        if prefs {
            self.open_preferences();
        }
        if quit {
            self.quit(ctx);
        }
    }
}

impl eframe::App for TikzitApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_open_events(ctx);
        self.intercept_close(ctx);
        self.handle_keyboard(ctx);

        self.render_menu(ctx);
        self.render_status_bar(ctx);
        self.render_preview(ctx);

        if let Some(dialog) = &mut self.preferences {
            if let Some(outcome) = dialog.show(ctx, &mut self.settings) {
                tracing::debug!("preferences closed: {:?}", outcome);
                self.preferences = None;
            }
        }
    }
}
