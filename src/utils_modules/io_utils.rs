use crate::common::*;

use crate::enums::output_format::*;

#[doc = r#"
    Generic function that reads a TOML file and deserializes it into the given type.

    1. Reads the file at `file_path` into a string
    2. Parses it into `T` with `toml::from_str()`
    3. Returns an error when the file cannot be read or does not match `T`

    # Type Parameters
    * `T` - struct implementing `DeserializeOwned`

    # Arguments
    * `file_path` - absolute or relative path of the TOML file

    # Returns
    * `Result<T, anyhow::Error>`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    Reads a JSON file and deserializes it into the given type.

    # Arguments
    * `file_path` - path of the JSON document

    # Returns
    * `anyhow::Result<T>` - fails on a missing file or malformed JSON
"#]
pub async fn read_json_from_file<T: DeserializeOwned>(file_path: &Path) -> anyhow::Result<T> {
    let json_content: String = tokio::fs::read_to_string(file_path)
        .await
        .with_context(|| format!("[read_json_from_file] Failed to read {:?}", file_path))?;

    let json: T = serde_json::from_str(&json_content)
        .with_context(|| format!("[read_json_from_file] Malformed JSON in {:?}", file_path))?;

    Ok(json)
}

#[doc = r#"
    Base name of an input file: its last path segment cut at the first `.`.

    `data/execution_data_150.json` -> `execution_data_150`
"#]
pub fn input_base_name(file_path: &Path) -> anyhow::Result<String> {
    let file_name: String = file_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| anyhow!("[input_base_name] {:?} has no file name", file_path))?;

    let base_name: &str = file_name.split('.').next().unwrap_or_default();

    if base_name.is_empty() {
        return Err(anyhow!(
            "[input_base_name] Cannot derive a base name from {:?}",
            file_path
        ));
    }

    Ok(base_name.to_string())
}

#[doc = "`<directory>/<base_name>_<record_key>.<ext>`"]
pub fn chart_output_path(
    directory: &Path,
    base_name: &str,
    record_key: &str,
    format: OutputFormat,
) -> PathBuf {
    directory.join(format!(
        "{}_{}.{}",
        base_name,
        record_key,
        format.extension()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_drops_directories_and_extensions() {
        assert_eq!(
            input_base_name(Path::new("runs/execution_data_150.json")).unwrap(),
            "execution_data_150"
        );
        assert_eq!(
            input_base_name(Path::new("metrics.backup.json")).unwrap(),
            "metrics"
        );
        assert!(input_base_name(Path::new(".json")).is_err());
    }

    #[test]
    fn output_path_joins_base_name_and_key() {
        let path = chart_output_path(
            Path::new("out"),
            "execution_data_150",
            "clusterSizeRecords",
            OutputFormat::Pdf,
        );
        assert_eq!(
            path,
            Path::new("out").join("execution_data_150_clusterSizeRecords.pdf")
        );
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"clusterSizeRecords\": [[3, 0],").unwrap();

        let err = read_json_from_file::<Value>(&path).await.unwrap_err();
        assert!(err.to_string().contains("Malformed JSON"));
    }
}
