use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, validates it, and caches it. A missing source yields
/// `TConfig::default()` without caching, so a file created later is still
/// picked up.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(ConfigError::Validation)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct SampleConfig {
        limit: u32,
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.limit > 10 {
                return Err(format!("limit {} is above 10", self.limit));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<MemoryProvider, SampleConfig> {
        let provider = MemoryProvider {
            content: RefCell::new(content.map(str::to_string)),
        };
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn missing_content_gives_default() {
        assert_eq!(manager(None).get_config(), Ok(SampleConfig::default()));
    }

    #[test]
    fn loads_and_validates_content() {
        assert_eq!(manager(Some("limit: 4\n")).get_config(), Ok(SampleConfig { limit: 4 }));
        assert!(matches!(
            manager(Some("limit: 40\n")).get_config(),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            manager(Some("limit: [")).get_config(),
            Err(ConfigError::Deserialize(_))
        ));
    }

    #[test]
    fn set_config_refuses_invalid_values() {
        let manager = manager(None);
        assert!(manager.set_config(&SampleConfig { limit: 11 }).is_err());
        assert!(manager.set_config(&SampleConfig { limit: 3 }).is_ok());
        assert_eq!(manager.get_config(), Ok(SampleConfig { limit: 3 }));
    }
}
