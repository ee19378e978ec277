use anyhow::Context;
use crescent_core::GameConfig;
use std::fs;
use std::path::Path;

pub fn load_game_config(path: &Path) -> anyhow::Result<GameConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: GameConfig =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("crescent-{}-{name}", std::process::id()));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn loads_partial_files() {
        let path = write_temp("partial.json", r#"{"seed": 12}"#);
        let config = load_game_config(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.layout.stack_count, 16);
    }

    #[test]
    fn rejects_layouts_too_small_for_the_deck() {
        let path = write_temp("small.json", r#"{"layout": {"stack_count": 4}}"#);
        let err = load_game_config(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(format!("{err:#}").contains("layout holds 12 cards"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_game_config(Path::new("/nonexistent/crescent.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/crescent.json"));
    }
}
