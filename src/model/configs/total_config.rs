use crate::common::*;

use crate::model::configs::{figure_config::*, output_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_chart_config);

#[doc = "Function to initialize the chart configuration instance"]
pub fn initialize_chart_config() -> TotalConfig {
    info!("initialize_chart_config() START!");
    TotalConfig::new()
}

#[doc = "Chart configuration shared by every binary"]
pub fn get_total_config() -> &'static TotalConfig {
    &TOTAL_CONFIG
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct TotalConfig {
    pub output: OutputConfig,
    pub line_chart: FigureConfig,
    pub combo_chart: FigureConfig,
    pub titles: HashMap<String, String>,
}

#[doc = "Scenario titles keyed by the base name of the input file"]
pub fn default_titles() -> HashMap<String, String> {
    [
        ("execution_data_150", "low-demand scenario (150 Batches)"),
        ("execution_data_300", "medium-demand scenario (300 Batches)"),
        ("execution_data_600", "high-demand scenario (600 Batches)"),
    ]
    .into_iter()
    .map(|(name, title)| (name.to_string(), title.to_string()))
    .collect()
}

impl Default for TotalConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            line_chart: FigureConfig::new(500, 400),
            combo_chart: FigureConfig::new(640, 480),
            titles: default_titles(),
        }
    }
}

impl TotalConfig {
    fn new() -> Self {
        let Some(config_path) = CHART_CONFIG_PATH.as_deref() else {
            info!("[TotalConfig->new] CHART_CONFIG_PATH is not set. Using default chart settings.");
            return TotalConfig::default();
        };

        match read_toml_from_file::<TotalConfig>(config_path) {
            Ok(config) => config.with_default_titles(),
            Err(e) => {
                let err_msg = "Failed to convert the data from CHART_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }

    #[doc = "Parses a TOML document. Titles in the document are merged over the built-in ones."]
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: TotalConfig = toml::from_str(content)
            .context("[TotalConfig->from_toml_str] invalid chart configuration")?;

        Ok(config.with_default_titles())
    }

    fn with_default_titles(mut self) -> Self {
        let mut titles: HashMap<String, String> = default_titles();
        titles.extend(self.titles);
        self.titles = titles;
        self
    }

    #[doc = r#"
        Looks up the chart title of an input file by its base name.

        Unknown base names fall back to the base name itself instead of aborting,
        so ad hoc runs on renamed exports still produce charts.
    "#]
    pub fn title_for(&self, base_name: &str) -> String {
        match self.titles.get(base_name) {
            Some(title) => title.clone(),
            None => {
                warn!(
                    "[TotalConfig->title_for] No title configured for '{}'. Using the file name.",
                    base_name
                );
                base_name.to_string()
            }
        }
    }

    pub fn with_output_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.output.directory = directory.into();
        self
    }
}
