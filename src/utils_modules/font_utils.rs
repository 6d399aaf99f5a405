use crate::common::*;

use plotters::style::{register_font, FontStyle};
use svg2pdf::usvg::fontdb::{Database, Family, Query, Weight};

/* Preferred faces for the generic `sans-serif` family, first installed one wins */
const SANS_SERIF_CANDIDATES: [&str; 6] = [
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
    "FreeSans",
];

/* Name plotters writes for `FontFamily::SansSerif` */
const PLOTTERS_SANS_SERIF: &str = "sans-serif";

#[derive(Getters)]
#[getset(get = "pub")]
pub struct ChartFonts {
    database: Database,
    family: String,
}

static CHART_FONTS: once_lazy<Result<ChartFonts, String>> = once_lazy::new(|| {
    let mut database: Database = Database::new();
    database.load_system_fonts();

    let family: String = sans_serif_family(&database).ok_or_else(|| {
        "[chart_fonts] No font is installed; chart text cannot be drawn".to_string()
    })?;

    database.set_sans_serif_family(family.clone());

    for (style, weight) in [(FontStyle::Normal, Weight::NORMAL), (FontStyle::Bold, Weight::BOLD)] {
        let face_data: &'static [u8] = face_data(&database, &family, weight)
            .ok_or_else(|| format!("[chart_fonts] Cannot read the '{}' font file", family))?;

        register_font(PLOTTERS_SANS_SERIF, style, face_data)
            .map_err(|_| format!("[chart_fonts] '{}' is not a usable font", family))?;
    }

    info!(
        "Chart text uses '{}' ({} font faces installed)",
        family,
        database.len()
    );

    Ok(ChartFonts { database, family })
});

#[doc = r#"
    Installed fonts used for chart text, loaded once per process.

    The generic `sans-serif` family is pointed at an installed face, and the same face
    is registered with plotters so bitmap charts draw their text with it.

    # Returns
    * `anyhow::Result<&'static ChartFonts>` - error when no usable font is installed
"#]
pub fn chart_fonts() -> anyhow::Result<&'static ChartFonts> {
    CHART_FONTS.as_ref().map_err(|e| anyhow!("{}", e))
}

#[doc = "First preferred sans-serif family that is installed, otherwise any installed family"]
fn sans_serif_family(database: &Database) -> Option<String> {
    let installed: Vec<&str> = database
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.as_str()))
        .collect();

    SANS_SERIF_CANDIDATES
        .iter()
        .find(|candidate| installed.contains(candidate))
        .or_else(|| installed.first())
        .map(|name| name.to_string())
}

/* plotters keeps registered fonts for the whole process, so the bytes are leaked once */
fn face_data(database: &Database, family: &str, weight: Weight) -> Option<&'static [u8]> {
    let families: [Family<'_>; 1] = [Family::Name(family)];
    let query: Query<'_> = Query {
        families: &families,
        weight,
        ..Query::default()
    };

    let id = database.query(&query)?;
    let bytes: Vec<u8> = database.with_face_data(id, |data, _index| data.to_vec())?;

    Some(Box::leak(bytes.into_boxed_slice()))
}
