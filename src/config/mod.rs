pub mod system;
pub mod video;

pub use system::{LogLevel, SystemConfig};
pub use video::VideoConfig;

/// 全局配置結構，所有值皆於編譯期決定
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub video: VideoConfig,
    pub system: SystemConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            video: VideoConfig::default(),
            system: SystemConfig::default(),
        }
    }
}

/// 配置構建器
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::new(),
        }
    }

    pub fn video_config(mut self, config: VideoConfig) -> Self {
        self.config.video = config;
        self
    }

    pub fn system_config(mut self, config: SystemConfig) -> Self {
        self.config.system = config;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder::new()
    }
}
