//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_CONFIG_FILES: [&str; 2] = ["quadratic.toml", ".quadratic.toml"];
const APP_DIR: &str = "quadratic-solver";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./quadratic.toml` or `./.quadratic.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/quadratic-solver/config.toml`
    /// 4. Fallback: `~/.config/quadratic-solver/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut sources = Vec::new();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            sources.push(global_path);
        }

        if let Some(project_path) = Self::project_config_path() {
            sources.push(project_path);
        }

        if let Some(path) = config_path {
            sources.push(path.to_path_buf());
        }

        Self::load_files(&sources)
    }

    /// Merge the given TOML files over the defaults, later files winning
    ///
    /// Every listed file must exist.
    pub fn load_files(paths: &[PathBuf]) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in paths {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            debug!("Merging config file {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/quadratic-solver/config.toml if set,
    /// otherwise falls back to ~/.config/quadratic-solver/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./quadratic.toml or ./.quadratic.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadratic_domain::OutputFormat;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.output.format, None);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("quadratic-solver"));
    }

    #[test]
    fn test_load_files_empty_is_default() {
        let config = ConfigLoader::load_files(&[]).unwrap();
        assert_eq!(config.output.format, None);
        assert!(config.output.color);
        assert_eq!(config.output.precision, None);
    }

    #[test]
    fn test_load_files_later_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&global, "[output]\nformat = \"json\"\ncolor = false\n").unwrap();
        fs::write(&explicit, "[output]\nformat = \"detailed\"\nprecision = 3\n").unwrap();

        let config = ConfigLoader::load_files(&[global, explicit]).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Detailed));
        // Keys absent from the later file keep earlier values
        assert!(!config.output.color);
        assert_eq!(config.output.precision, Some(3));
    }

    #[test]
    fn test_load_files_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(ConfigLoader::load_files(&[missing]).is_err());
    }

    #[test]
    fn test_load_files_invalid_value_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[output]\ncolor = \"sometimes\"\n").unwrap();
        assert!(ConfigLoader::load_files(&[path]).is_err());
    }
}
