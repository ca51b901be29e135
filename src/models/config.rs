use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub food_log: FoodLogConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FoodLogConfig {
    #[serde(default = "default_target_calories")]
    pub target_calories: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_stage_delay_ms")]
    pub stage_delay_ms: u64,
    #[serde(default = "default_final_delay_ms")]
    pub final_delay_ms: u64,
}

fn default_target_calories() -> f64 {
    2200.0
}
fn default_stage_delay_ms() -> u64 {
    800
}
fn default_final_delay_ms() -> u64 {
    1000
}

impl Default for FoodLogConfig {
    fn default() -> Self {
        Self {
            target_calories: default_target_calories(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            stage_delay_ms: default_stage_delay_ms(),
            final_delay_ms: default_final_delay_ms(),
        }
    }
}

impl GenerationConfig {
    /// Zero delays, for tests and scripted use.
    pub fn instant() -> Self {
        Self {
            stage_delay_ms: 0,
            final_delay_ms: 0,
        }
    }

    pub fn stage_delay(&self) -> Duration {
        Duration::from_millis(self.stage_delay_ms)
    }

    pub fn final_delay(&self) -> Duration {
        Duration::from_millis(self.final_delay_ms)
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)?;
            file.write_all(contents.as_bytes())?;

            // mode() only applies on create
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a `config set` key. Values are validated before they land.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "target_calories" | "food_log.target_calories" => {
                let v: f64 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("target_calories must be a number"))?;
                if !v.is_finite() || v <= 0.0 {
                    anyhow::bail!("target_calories must be greater than 0");
                }
                self.food_log.target_calories = v;
            }
            "generation.stage_delay_ms" => self.generation.stage_delay_ms = value.parse()?,
            "generation.final_delay_ms" => self.generation.final_delay_ms = value.parse()?,
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("NUTRILIFE_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .map(|h| h.join(".nutrilife"))
            .unwrap_or_else(|| PathBuf::from(".nutrilife"))
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
