use crate::common::*;

#[doc = r#"
    Reads an optional environment variable.

    # Arguments
    * `key` - environment variable name
    * `default` - value used when `key` is not set

    # Returns
    * `String` - environment value or `default`
"#]
fn get_env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

#[doc = r#"
    Path of the TOML chart configuration file, taken from `CHART_CONFIG_PATH`.

    `None` when the variable is unset; the built-in defaults of `TotalConfig` are used then.
"#]
pub static CHART_CONFIG_PATH: once_lazy<Option<String>> = once_lazy::new(|| {
    env::var("CHART_CONFIG_PATH")
        .ok()
        .filter(|path| !path.trim().is_empty())
});

#[doc = "Directory that receives the rotated log files"]
pub static LOG_DIR: once_lazy<String> = once_lazy::new(|| get_env_or_default("LOG_DIR", "logs"));
