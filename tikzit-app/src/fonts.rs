//! Font family registration for the preview font picker.

use egui::{Context, FontDefinitions, FontFamily};

/// Register every bundled font under its own named family and return the
/// resulting family list, sorted for display in the picker.
///
/// The toolkit ships its fonts grouped into the two generic families; the
/// preview font setting selects a concrete face, so each face is exposed as
/// a selectable family of its own.
pub fn install_families(ctx: &Context) -> Vec<String> {
    let mut definitions = FontDefinitions::default();

    let names: Vec<String> = definitions.font_data.keys().cloned().collect();
    for name in &names {
        definitions
            .families
            .entry(FontFamily::Name(name.as_str().into()))
            .or_insert_with(|| vec![name.clone()]);
    }
    ctx.set_fonts(definitions);

    let mut families = names;
    families.sort();
    families
}
