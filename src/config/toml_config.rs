use crate::domain::model::{Bounds, Messages};
use crate::utils::error::{LoopError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_ordered_bounds, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub range: Option<RangeConfig>,
    pub messages: Option<MessagesConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeConfig {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesConfig {
    pub range_prompt: Option<String>,
    pub range_error: Option<String>,
    pub pre_check_error: Option<String>,
    pub first_prompt: Option<String>,
    pub second_prompt: Option<String>,
    pub third_prompt: Option<String>,
    pub success: Option<String>,
    pub past_second_loop: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LoopError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LoopError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MIN_VALUE})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LoopError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// File bounds laid over `base`.
    pub fn bounds_over(&self, base: Bounds) -> Bounds {
        match &self.range {
            Some(range) => Bounds {
                min: range.min.unwrap_or(base.min),
                max: range.max.unwrap_or(base.max),
            },
            None => base,
        }
    }

    /// File messages laid over `base`.
    pub fn messages_over(&self, base: Messages) -> Messages {
        let Some(overrides) = &self.messages else {
            return base;
        };
        let pick = |over: &Option<String>, default: String| over.clone().unwrap_or(default);

        Messages {
            range_prompt: pick(&overrides.range_prompt, base.range_prompt),
            range_error: pick(&overrides.range_error, base.range_error),
            pre_check_error: pick(&overrides.pre_check_error, base.pre_check_error),
            first_prompt: pick(&overrides.first_prompt, base.first_prompt),
            second_prompt: pick(&overrides.second_prompt, base.second_prompt),
            third_prompt: pick(&overrides.third_prompt, base.third_prompt),
            success: pick(&overrides.success, base.success),
            past_second_loop: pick(&overrides.past_second_loop, base.past_second_loop),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(RangeConfig {
            min: Some(min),
            max: Some(max),
        }) = &self.range
        {
            validate_ordered_bounds("range", *min, *max)?;
        }

        if let Some(messages) = &self.messages {
            let fields = [
                ("messages.range_prompt", &messages.range_prompt),
                ("messages.range_error", &messages.range_error),
                ("messages.pre_check_error", &messages.pre_check_error),
                ("messages.first_prompt", &messages.first_prompt),
                ("messages.second_prompt", &messages.second_prompt),
                ("messages.third_prompt", &messages.third_prompt),
                ("messages.success", &messages.success),
                ("messages.past_second_loop", &messages.past_second_loop),
            ];
            for (field, value) in fields {
                if let Some(value) = value {
                    validate_non_empty_string(field, value)?;
                }
            }
        }

        Ok(())
    }
}
