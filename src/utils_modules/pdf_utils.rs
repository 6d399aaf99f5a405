use crate::common::*;

use crate::utils_modules::font_utils::*;

use svg2pdf::usvg;

#[doc = r#"
    Converts an SVG document into a single-page PDF.

    Text is laid out with the installed sans-serif face picked by `chart_fonts`.
    A document with text fails to convert when no font is installed, so a chart
    is never written without its labels.

    # Arguments
    * `svg` - complete SVG document

    # Returns
    * `anyhow::Result<Vec<u8>>` - PDF bytes
"#]
pub fn svg_to_pdf(svg: &str) -> anyhow::Result<Vec<u8>> {
    let mut options: usvg::Options = usvg::Options::default();

    if svg.contains("<text") {
        let fonts: &ChartFonts = chart_fonts().context("[svg_to_pdf] Cannot embed chart text")?;
        *options.fontdb_mut() = fonts.database().clone();
    }

    let tree: usvg::Tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| anyhow!("[svg_to_pdf] Failed to parse the SVG document: {:?}", e))?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| anyhow!("[svg_to_pdf] Failed to convert SVG to PDF: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    #[test]
    fn converts_a_plain_drawing() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="80" viewBox="0 0 100 80">
            <rect x="10" y="10" width="40" height="60" fill="#1f77b4"/>
            <polyline points="10,70 50,20 90,40" fill="none" stroke="#d62728"/>
        </svg>"##;

        let pdf: Vec<u8> = svg_to_pdf(svg).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn generic_sans_serif_text_embeds_a_font() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="50" viewBox="0 0 200 50">
            <text x="10" y="30" font-family="sans-serif" font-size="14">Cluster Size</text>
        </svg>"##;

        let pdf: Vec<u8> = svg_to_pdf(svg).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert!(contains(&pdf, b"/Font"));
    }

    #[test]
    fn rejects_invalid_markup() {
        assert!(svg_to_pdf("<svg").is_err());
    }
}
