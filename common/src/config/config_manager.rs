use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfig, TProvider = FileContentConfigProvider>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TProvider: ConfigContentProvider,
{
    provider: TProvider,
    serializer: YamlConfigSerializer,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path.to_string()))
    }
}

impl<TConfig, TProvider> ConfigManager<TConfig, TProvider>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TProvider: ConfigContentProvider,
{
    pub fn new(provider: TProvider) -> Self {
        Self {
            provider,
            serializer: YamlConfigSerializer::new(),
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.provider.set_config_content(&content)?;

        let mut cached = self.cached.lock().unwrap();
        *cached = Some(config.clone());
        Ok(())
    }
}
