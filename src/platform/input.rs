//! Keyboard input

/// Keys the content pages react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl NavKey {
    /// Parse a `KeyboardEvent.key` value; anything else is ignored
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavKey::ArrowLeft),
            "ArrowRight" => Some(NavKey::ArrowRight),
            "Escape" => Some(NavKey::Escape),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavKey::ArrowLeft => "ArrowLeft",
            NavKey::ArrowRight => "ArrowRight",
            NavKey::Escape => "Escape",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::ArrowLeft));
        assert_eq!(NavKey::from_key("Escape"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key("Esc"), None);
        assert_eq!(NavKey::from_key("a"), None);
        assert_eq!(NavKey::from_key(NavKey::ArrowRight.as_str()), Some(NavKey::ArrowRight));
    }
}
