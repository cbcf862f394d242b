use serde::{Deserialize, Serialize};

/// Editor configuration (from `tasknote.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Delay between a toggle and its deferred persist, in milliseconds.
    /// Default: 300
    #[serde(default = "default_toggle_delay_ms")]
    pub toggle_delay_ms: u64,
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            toggle_delay_ms: default_toggle_delay_ms(),
            preview: PreviewConfig::default(),
        }
    }
}

/// Limits applied when building host-side previews
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Items listed in the HTML preview before "+N more". Default: 5
    #[serde(default = "default_html_task_limit")]
    pub html_task_limit: usize,
    /// Open task descriptions quoted in the plain preview. Default: 3
    #[serde(default = "default_plain_task_limit")]
    pub plain_task_limit: usize,
    /// Grapheme budget of the plain preview. Default: 90
    #[serde(default = "default_plain_max_chars")]
    pub plain_max_chars: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            html_task_limit: default_html_task_limit(),
            plain_task_limit: default_plain_task_limit(),
            plain_max_chars: default_plain_max_chars(),
        }
    }
}

fn default_toggle_delay_ms() -> u64 {
    300
}

fn default_html_task_limit() -> usize {
    5
}

fn default_plain_task_limit() -> usize {
    3
}

fn default_plain_max_chars() -> usize {
    90
}
