//! The modal preferences dialog.
//!
//! The dialog snapshots every setting into widget state on construction,
//! edits in memory, and writes back in bulk on accept. Two fields are an
//! exception: the preview font size and family commit to the store the
//! moment they change, so cancelling the dialog does not undo them. That
//! asymmetry is part of the settings contract, not an oversight.

use std::path::Path;

use egui::{Color32, Context};
use tikzit_core::{keys, Color, Settings};

/// How a closed preferences dialog was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted,
    Rejected,
}

/// The three grid color swatches, each keyed to its own setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GridSwatch {
    Axes,
    Major,
    Minor,
}

impl GridSwatch {
    const ALL: [GridSwatch; 3] = [GridSwatch::Axes, GridSwatch::Major, GridSwatch::Minor];

    fn index(self) -> usize {
        match self {
            GridSwatch::Axes => 0,
            GridSwatch::Major => 1,
            GridSwatch::Minor => 2,
        }
    }

    fn label(self) -> &'static str {
        match self {
            GridSwatch::Axes => "Axes",
            GridSwatch::Major => "Major",
            GridSwatch::Minor => "Minor",
        }
    }

    fn default_color(self) -> Color {
        match self {
            GridSwatch::Axes => keys::DEFAULT_GRID_COLOR_AXES,
            GridSwatch::Major => keys::DEFAULT_GRID_COLOR_MAJOR,
            GridSwatch::Minor => keys::DEFAULT_GRID_COLOR_MINOR,
        }
    }
}

/// Widget state of the preferences dialog.
pub struct PreferenceDialog {
    auto_detect_pdflatex: bool,
    pdflatex_path: String,
    /// Raw text of the spacing field; parsed (and silently skipped when
    /// unparseable) on accept.
    style_icon_spacing: String,
    /// Swatch colors, indexed by [`GridSwatch::index`].
    grid_colors: [Color; 3],
    select_new_edges: bool,
    shift_to_scroll: bool,
    preview_font_size: i64,
    preview_font_family: String,
    /// Font families registered with the toolkit on this host.
    font_families: Vec<String>,
}

impl PreferenceDialog {
    /// Snapshot the current settings into fresh widget state.
    ///
    /// A stored font family that is not in `font_families` falls back to the
    /// toolkit's default selection (the first family in the list).
    pub fn from_settings(settings: &Settings, font_families: Vec<String>) -> Self {
        let stored_family =
            settings.get_string(keys::PREVIEW_FONT_FAMILY, keys::DEFAULT_PREVIEW_FONT_FAMILY);
        let preview_font_family = if font_families.iter().any(|f| *f == stored_family) {
            stored_family
        } else {
            font_families.first().cloned().unwrap_or_default()
        };

        Self {
            auto_detect_pdflatex: settings
                .get_bool(keys::AUTO_DETECT_PDFLATEX, keys::DEFAULT_AUTO_DETECT_PDFLATEX),
            pdflatex_path: settings.get_string(keys::PDFLATEX_PATH, keys::DEFAULT_PDFLATEX_PATH),
            style_icon_spacing: settings
                .get_int(keys::STYLE_ICON_SPACING, keys::DEFAULT_STYLE_ICON_SPACING)
                .to_string(),
            grid_colors: [
                settings.get_color(keys::GRID_COLOR_AXES, keys::DEFAULT_GRID_COLOR_AXES),
                settings.get_color(keys::GRID_COLOR_MAJOR, keys::DEFAULT_GRID_COLOR_MAJOR),
                settings.get_color(keys::GRID_COLOR_MINOR, keys::DEFAULT_GRID_COLOR_MINOR),
            ],
            select_new_edges: settings
                .get_bool(keys::SELECT_NEW_EDGES, keys::DEFAULT_SELECT_NEW_EDGES),
            shift_to_scroll: settings
                .get_bool(keys::SHIFT_TO_SCROLL, keys::DEFAULT_SHIFT_TO_SCROLL),
            preview_font_size: settings
                .get_int(keys::PREVIEW_FONT_SIZE, keys::DEFAULT_PREVIEW_FONT_SIZE),
            preview_font_family,
            font_families,
        }
    }

    /// Whether the manual pdflatex path field and its browse button are
    /// interactive. They are enabled exactly when auto-detect is off.
    pub fn manual_path_enabled(&self) -> bool {
        !self.auto_detect_pdflatex
    }

    /// Write every field back to the store, in fixed field order.
    ///
    /// Unparseable spacing text is skipped without an error, leaving the
    /// previously stored spacing untouched.
    pub fn accept(&self, settings: &mut Settings) {
        settings.set_bool(keys::AUTO_DETECT_PDFLATEX, self.auto_detect_pdflatex);
        settings.set_string(keys::PDFLATEX_PATH, &self.pdflatex_path);
        if let Ok(spacing) = self.style_icon_spacing.trim().parse::<i64>() {
            settings.set_int(keys::STYLE_ICON_SPACING, spacing);
        }
        settings.set_color(keys::GRID_COLOR_AXES, self.grid_colors[GridSwatch::Axes.index()]);
        settings.set_color(keys::GRID_COLOR_MAJOR, self.grid_colors[GridSwatch::Major.index()]);
        settings.set_color(keys::GRID_COLOR_MINOR, self.grid_colors[GridSwatch::Minor.index()]);
        settings.set_bool(keys::SELECT_NEW_EDGES, self.select_new_edges);
        settings.set_bool(keys::SHIFT_TO_SCROLL, self.shift_to_scroll);
        settings.set_int(keys::PREVIEW_FONT_SIZE, self.preview_font_size);
        settings.set_string(keys::PREVIEW_FONT_FAMILY, &self.preview_font_family);
    }

    /// Restore all three swatches to their hardcoded defaults. The store is
    /// only updated on a later accept.
    pub fn reset_colors(&mut self) {
        for swatch in GridSwatch::ALL {
            self.grid_colors[swatch.index()] = swatch.default_color();
        }
    }

    /// Live commit: the preview font size is written to the store
    /// immediately, independent of dialog acceptance.
    pub fn set_preview_font_size(&mut self, size: i64, settings: &mut Settings) {
        self.preview_font_size = size;
        settings.set_int(keys::PREVIEW_FONT_SIZE, size);
    }

    /// Live commit: the preview font family is written to the store
    /// immediately, independent of dialog acceptance.
    pub fn set_preview_font_family(&mut self, family: String, settings: &mut Settings) {
        settings.set_string(keys::PREVIEW_FONT_FAMILY, &family);
        self.preview_font_family = family;
    }

    /// Open the file picker for the pdflatex executable, seeded with the
    /// directory and basename of the current path text. Cancelling leaves
    /// the path unchanged.
    fn browse_pdflatex(&mut self) {
        let mut dialog = rfd::FileDialog::new().set_title("pdflatex Path");

        let current = Path::new(&self.pdflatex_path);
        if let Some(dir) = current.parent().filter(|d| !d.as_os_str().is_empty()) {
            dialog = dialog.set_directory(dir);
            if let Some(name) = current.file_name().and_then(|n| n.to_str()) {
                dialog = dialog.set_file_name(name);
            }
        }

        if let Some(path) = dialog.pick_file() {
            self.pdflatex_path = path.display().to_string();
        }
    }

    /// Render the dialog for one frame. Returns the outcome once the user
    /// accepts or cancels, `None` while still editing.
    pub fn show(&mut self, ctx: &Context, settings: &mut Settings) -> Option<DialogOutcome> {
        let mut outcome = None;

        egui::Window::new("Preferences")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.heading("LaTeX");
                ui.checkbox(&mut self.auto_detect_pdflatex, "Auto-detect pdflatex");
                let manual = self.manual_path_enabled();
                ui.horizontal(|ui| {
                    ui.label("pdflatex path:");
                    ui.add_enabled(
                        manual,
                        egui::TextEdit::singleline(&mut self.pdflatex_path).desired_width(240.0),
                    );
                    if ui.add_enabled(manual, egui::Button::new("Browse…")).clicked() {
                        self.browse_pdflatex();
                    }
                });

                ui.separator();
                ui.heading("Grid");
                for swatch in GridSwatch::ALL {
                    ui.horizontal(|ui| {
                        let color = &mut self.grid_colors[swatch.index()];
                        let mut rgb = Color32::from_rgb(color.r, color.g, color.b);
                        if ui.color_edit_button_srgba(&mut rgb).changed() {
                            *color = Color::new(rgb.r(), rgb.g(), rgb.b());
                        }
                        ui.label(swatch.label());
                    });
                }
                if ui.button("Reset colors").clicked() {
                    self.reset_colors();
                }

                ui.separator();
                ui.heading("Editor");
                ui.horizontal(|ui| {
                    ui.label("Style icon spacing:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.style_icon_spacing)
                            .desired_width(60.0),
                    );
                });
                ui.checkbox(&mut self.select_new_edges, "Select new edges");
                ui.checkbox(&mut self.shift_to_scroll, "Shift to scroll");

                ui.separator();
                ui.heading("Preview");
                ui.horizontal(|ui| {
                    ui.label("Font size:");
                    let mut size = self.preview_font_size;
                    if ui
                        .add(egui::DragValue::new(&mut size).range(4..=128))
                        .changed()
                    {
                        self.set_preview_font_size(size, settings);
                    }
                });
                ui.horizontal(|ui| {
                    ui.label("Font family:");
                    let mut selected = self.preview_font_family.clone();
                    let changed = egui::ComboBox::from_id_salt("preview_font_family")
                        .selected_text(selected.clone())
                        .show_ui(ui, |ui| {
                            let mut changed = false;
                            for family in &self.font_families {
                                changed |= ui
                                    .selectable_value(&mut selected, family.clone(), family)
                                    .changed();
                            }
                            changed
                        })
                        .inner
                        .unwrap_or(false);
                    if changed {
                        self.set_preview_font_family(selected, settings);
                    }
                });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        self.accept(settings);
                        outcome = Some(DialogOutcome::Accepted);
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = Some(DialogOutcome::Rejected);
                    }
                });
            });

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn families() -> Vec<String> {
        vec!["Hack".to_string(), "Ubuntu-Light".to_string()]
    }

    // ==================== defaults ====================

    #[test]
    fn test_fresh_store_initializes_documented_defaults() {
        let settings = Settings::in_memory();
        let dialog = PreferenceDialog::from_settings(&settings, families());

        assert_eq!(dialog.auto_detect_pdflatex, true);
        assert_eq!(dialog.pdflatex_path, "");
        assert_eq!(dialog.style_icon_spacing, "48");
        assert_eq!(dialog.grid_colors[0], Color::new(220, 220, 240));
        assert_eq!(dialog.grid_colors[1], Color::new(240, 240, 250));
        assert_eq!(dialog.grid_colors[2], Color::new(250, 250, 255));
        assert_eq!(dialog.select_new_edges, false);
        assert_eq!(dialog.shift_to_scroll, false);
        assert_eq!(dialog.preview_font_size, 12);
        // Default family "" is not a registered family, so selection falls
        // back to the first entry.
        assert_eq!(dialog.preview_font_family, "Hack");
    }

    #[test]
    fn test_unavailable_stored_family_falls_back() {
        let mut settings = Settings::in_memory();
        settings.set_string(keys::PREVIEW_FONT_FAMILY, "Comic Sans");
        let dialog = PreferenceDialog::from_settings(&settings, families());
        assert_eq!(dialog.preview_font_family, "Hack");
    }

    #[test]
    fn test_available_stored_family_is_selected() {
        let mut settings = Settings::in_memory();
        settings.set_string(keys::PREVIEW_FONT_FAMILY, "Ubuntu-Light");
        let dialog = PreferenceDialog::from_settings(&settings, families());
        assert_eq!(dialog.preview_font_family, "Ubuntu-Light");
    }

    // ==================== accept ====================

    #[test]
    fn test_accept_round_trips_every_field() {
        let mut settings = Settings::in_memory();

        let mut dialog = PreferenceDialog::from_settings(&settings, families());
        dialog.auto_detect_pdflatex = false;
        dialog.pdflatex_path = "/usr/local/texlive/bin/pdflatex".to_string();
        dialog.style_icon_spacing = "96".to_string();
        dialog.grid_colors = [
            Color::new(1, 2, 3),
            Color::new(4, 5, 6),
            Color::new(7, 8, 9),
        ];
        dialog.select_new_edges = true;
        dialog.shift_to_scroll = true;
        dialog.preview_font_size = 18;
        dialog.preview_font_family = "Ubuntu-Light".to_string();
        dialog.accept(&mut settings);

        let reopened = PreferenceDialog::from_settings(&settings, families());
        assert_eq!(reopened.auto_detect_pdflatex, false);
        assert_eq!(reopened.pdflatex_path, "/usr/local/texlive/bin/pdflatex");
        assert_eq!(reopened.style_icon_spacing, "96");
        assert_eq!(reopened.grid_colors[0], Color::new(1, 2, 3));
        assert_eq!(reopened.grid_colors[1], Color::new(4, 5, 6));
        assert_eq!(reopened.grid_colors[2], Color::new(7, 8, 9));
        assert_eq!(reopened.select_new_edges, true);
        assert_eq!(reopened.shift_to_scroll, true);
        assert_eq!(reopened.preview_font_size, 18);
        assert_eq!(reopened.preview_font_family, "Ubuntu-Light");
    }

    #[test]
    fn test_accept_twice_is_idempotent() {
        let mut settings = Settings::in_memory();
        let mut dialog = PreferenceDialog::from_settings(&settings, families());
        dialog.style_icon_spacing = "64".to_string();

        dialog.accept(&mut settings);
        let first = PreferenceDialog::from_settings(&settings, families());
        dialog.accept(&mut settings);
        let second = PreferenceDialog::from_settings(&settings, families());

        assert_eq!(first.style_icon_spacing, second.style_icon_spacing);
        assert_eq!(first.preview_font_size, second.preview_font_size);
        assert_eq!(first.grid_colors, second.grid_colors);
    }

    #[test]
    fn test_unparseable_spacing_is_silently_skipped() {
        let mut settings = Settings::in_memory();
        settings.set_int(keys::STYLE_ICON_SPACING, 96);

        let mut dialog = PreferenceDialog::from_settings(&settings, families());
        dialog.style_icon_spacing = "very wide".to_string();
        dialog.accept(&mut settings);

        assert_eq!(settings.get_int(keys::STYLE_ICON_SPACING, 48), 96);
    }

    // ==================== live commits ====================

    #[test]
    fn test_live_font_commits_survive_rejection() {
        let mut settings = Settings::in_memory();
        let mut dialog = PreferenceDialog::from_settings(&settings, families());

        dialog.set_preview_font_size(18, &mut settings);
        dialog.set_preview_font_family("Ubuntu-Light".to_string(), &mut settings);
        // Dialog is dropped without accept, as on cancel.
        drop(dialog);

        assert_eq!(settings.get_int(keys::PREVIEW_FONT_SIZE, 12), 18);
        assert_eq!(
            settings.get_string(keys::PREVIEW_FONT_FAMILY, ""),
            "Ubuntu-Light"
        );
    }

    #[test]
    fn test_rejection_discards_non_live_edits() {
        let mut settings = Settings::in_memory();
        let mut dialog = PreferenceDialog::from_settings(&settings, families());
        dialog.select_new_edges = true;
        dialog.grid_colors[0] = Color::new(0, 0, 0);
        drop(dialog);

        assert_eq!(settings.get_bool(keys::SELECT_NEW_EDGES, false), false);
        assert_eq!(
            settings.get_color(keys::GRID_COLOR_AXES, keys::DEFAULT_GRID_COLOR_AXES),
            Color::new(220, 220, 240)
        );
    }

    // ==================== editing side effects ====================

    #[test]
    fn test_manual_path_enabled_tracks_auto_detect() {
        let settings = Settings::in_memory();
        let mut dialog = PreferenceDialog::from_settings(&settings, families());

        assert!(!dialog.manual_path_enabled());
        for _ in 0..3 {
            dialog.auto_detect_pdflatex = false;
            assert!(dialog.manual_path_enabled());
            dialog.auto_detect_pdflatex = true;
            assert!(!dialog.manual_path_enabled());
        }
    }

    #[test]
    fn test_reset_colors_restores_defaults_without_store_writes() {
        let mut settings = Settings::in_memory();
        let mut dialog = PreferenceDialog::from_settings(&settings, families());
        dialog.grid_colors = [
            Color::new(9, 9, 9),
            Color::new(8, 8, 8),
            Color::new(7, 7, 7),
        ];

        dialog.reset_colors();

        assert_eq!(dialog.grid_colors[0], Color::new(220, 220, 240));
        assert_eq!(dialog.grid_colors[1], Color::new(240, 240, 250));
        assert_eq!(dialog.grid_colors[2], Color::new(250, 250, 255));
        // Only a later accept writes the swatches back.
        assert_eq!(
            settings.get_color(keys::GRID_COLOR_AXES, Color::new(0, 0, 0)),
            Color::new(0, 0, 0)
        );
        dialog.accept(&mut settings);
        assert_eq!(
            settings.get_color(keys::GRID_COLOR_AXES, Color::new(0, 0, 0)),
            Color::new(220, 220, 240)
        );
    }
}
