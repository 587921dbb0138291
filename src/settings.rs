//! User settings and preferences
//!
//! Persisted inside the progress record under `settings`. Unknown keys written
//! by other versions of the site are carried along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named settings the front end reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    AudioEnabled,
    ShowAnimations,
    VisitedLobby,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::AudioEnabled,
        SettingKey::ShowAnimations,
        SettingKey::VisitedLobby,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::AudioEnabled => "audio_enabled",
            SettingKey::ShowAnimations => "show_animations",
            SettingKey::VisitedLobby => "visited_lobby",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "audio_enabled" => Some(SettingKey::AudioEnabled),
            "show_animations" => Some(SettingKey::ShowAnimations),
            "visited_lobby" => Some(SettingKey::VisitedLobby),
            _ => None,
        }
    }
}

/// Per-client preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects on/off
    pub audio_enabled: bool,
    /// Play the coin-drop animation before entering a domain
    pub show_animations: bool,
    /// Set once the lobby has been shown (suppresses the welcome banner)
    pub visited_lobby: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            show_animations: true,
            visited_lobby: false,
            extra: Map::new(),
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::AudioEnabled => self.audio_enabled,
            SettingKey::ShowAnimations => self.show_animations,
            SettingKey::VisitedLobby => self.visited_lobby,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::AudioEnabled => self.audio_enabled = value,
            SettingKey::ShowAnimations => self.show_animations = value,
            SettingKey::VisitedLobby => self.visited_lobby = value,
        }
    }
}
