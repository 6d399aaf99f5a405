use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pdf,
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }

    #[doc = "Format implied by the extension of a chart path"]
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let extension: Option<String> = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(OutputFormat::Pdf),
            Some("svg") => Ok(OutputFormat::Svg),
            Some("png") => Ok(OutputFormat::Png),
            _ => Err(anyhow!(
                "[OutputFormat->from_path] Unsupported chart file extension: {:?}",
                path
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_the_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/ac_test.PDF")).unwrap(),
            OutputFormat::Pdf
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("chart.svg")).unwrap(),
            OutputFormat::Svg
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("events/chart.png")).unwrap(),
            OutputFormat::Png
        );
        assert!(OutputFormat::from_path(Path::new("chart.jpg")).is_err());
        assert!(OutputFormat::from_path(Path::new("chart")).is_err());
    }
}
