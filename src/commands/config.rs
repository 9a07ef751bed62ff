use crate::commands::{CmdMessage, CmdResult};
use crate::config::DaybookConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = DaybookConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = DaybookConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = DaybookConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(config_dir)?;
            let mut result = CmdResult::default().with_config(config.clone());
            // Fetch formatted value back
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_show_all_returns_config() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(DaybookConfig::default()));
    }

    #[test]
    fn test_set_then_show_key() {
        let dir = tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("chars-per-line".to_string(), "30".to_string()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("chars-per-line".to_string())).unwrap();
        assert_eq!(result.messages[0].content, "30");
    }

    #[test]
    fn test_invalid_set_reports_error_without_saving() {
        let dir = tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("chars-per-line".to_string(), "wide".to_string()),
        )
        .unwrap();
        assert!(result.config.is_none());
        assert!(result.messages[0].content.contains("positive number"));

        let loaded = DaybookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, DaybookConfig::default());
    }

    #[test]
    fn test_unknown_key_is_an_error_message() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("volume".to_string())).unwrap();
        assert!(result.messages[0].content.contains("Unknown config key"));
    }
}
