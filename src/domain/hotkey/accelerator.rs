//! Accelerator value object

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::error::AcceleratorParseError;

/// Modifier keys, declared in canonical display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Control,
    Alt,
    Shift,
    Super,
}

impl Modifier {
    /// Get the canonical name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Control => "Control",
            Self::Alt => "Alt",
            Self::Shift => "Shift",
            Self::Super => "Super",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "control" | "ctrl" => Some(Self::Control),
            "alt" | "option" => Some(Self::Alt),
            "shift" => Some(Self::Shift),
            "super" | "cmd" | "command" | "meta" | "win" => Some(Self::Super),
            _ => None,
        }
    }
}

/// A global key combination such as `Control+Alt+F12`.
///
/// Modifiers are kept sorted and deduplicated so two spellings of the same
/// combination compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Accelerator {
    modifiers: Vec<Modifier>,
    key: String,
}

impl Accelerator {
    /// Build an accelerator from modifiers and an already-normalized key name
    pub fn new(modifiers: &[Modifier], key: impl Into<String>) -> Self {
        let mut modifiers = modifiers.to_vec();
        modifiers.sort();
        modifiers.dedup();
        Self {
            modifiers,
            key: key.into(),
        }
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// User-facing hint text, e.g. `Ctrl+Alt+F12`
    pub fn hint(&self) -> String {
        self.to_string().replace("Control", "Ctrl")
    }

    /// Normalize a key token: function keys as `F<n>`, letters upper-case,
    /// named keys capitalized.
    fn normalize_key(token: &str) -> Option<String> {
        let upper = token.to_uppercase();

        if let Some(num) = upper.strip_prefix('F') {
            if let Ok(n) = num.parse::<u8>() {
                return (1..=24).contains(&n).then(|| format!("F{}", n));
            }
        }

        let mut chars = upper.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return c.is_ascii_alphanumeric().then(|| c.to_string());
        }

        let named = match upper.as_str() {
            "SPACE" => "Space",
            "TAB" => "Tab",
            "ENTER" | "RETURN" => "Enter",
            "ESCAPE" | "ESC" => "Escape",
            "BACKSPACE" => "Backspace",
            "DELETE" => "Delete",
            "INSERT" => "Insert",
            "HOME" => "Home",
            "END" => "End",
            "PAGEUP" => "PageUp",
            "PAGEDOWN" => "PageDown",
            "UP" => "Up",
            "DOWN" => "Down",
            "LEFT" => "Left",
            "RIGHT" => "Right",
            _ => return None,
        };
        Some(named.to_string())
    }
}

impl FromStr for Accelerator {
    type Err = AcceleratorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason: &str| AcceleratorParseError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
        let Some((key_token, modifier_tokens)) = tokens.split_last() else {
            return Err(err("Expected <modifier>+...+<key>"));
        };

        let mut modifiers = Vec::with_capacity(modifier_tokens.len());
        for token in modifier_tokens {
            let modifier =
                Modifier::parse(token).ok_or_else(|| err(&format!("Unknown modifier '{}'", token)))?;
            modifiers.push(modifier);
        }

        if modifiers.is_empty() {
            return Err(err("Global accelerators need at least one modifier"));
        }

        if Modifier::parse(key_token).is_some() {
            return Err(err("The last part must be a key, not a modifier"));
        }

        let key = Self::normalize_key(key_token)
            .ok_or_else(|| err(&format!("Unknown key '{}'", key_token)))?;

        Ok(Self::new(&modifiers, key))
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier.as_str())?;
        }
        f.write_str(&self.key)
    }
}

impl Serialize for Accelerator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
