use crate::domain::errors::PipelineError;
use crate::domain::report::ResultDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the result document as pretty JSON and as a script that assigns
/// the same JSON to a constant.
pub struct ReportWriter {
    json_path: PathBuf,
    script_path: PathBuf,
    constant: String,
}

impl ReportWriter {
    pub fn new(json_path: PathBuf, script_path: PathBuf, constant: String) -> Self {
        Self {
            json_path,
            script_path,
            constant,
        }
    }

    pub fn write(&self, document: &ResultDocument) -> Result<(), PipelineError> {
        let json = serde_json::to_string_pretty(document)?;
        let script = render_script(&self.constant, &json);

        write_atomic(&self.json_path, &json)?;
        info!("Exported to {}", self.json_path.display());

        write_atomic(&self.script_path, &script)?;
        info!("Exported to {}", self.script_path.display());

        Ok(())
    }
}

/// `const NAME = <json>;`
pub fn render_script(constant: &str, json: &str) -> String {
    format!("const {} = {};", constant, json)
}

/// Atomic write: write to temp file then rename.
fn write_atomic(path: &Path, content: &str) -> Result<(), PipelineError> {
    let write_err = |source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, content).map_err(write_err)?;
    fs::rename(&temp_path, path).map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_script_wraps_payload() {
        let script = render_script("STOCK_DATA", "{\n  \"a\": 1\n}");
        assert_eq!(script, "const STOCK_DATA = {\n  \"a\": 1\n};");
    }

    #[test]
    fn test_write_atomic_creates_parent_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");

        write_atomic(&path, "{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!dir.path().join("nested").join("out.json.tmp").exists());
    }
}
