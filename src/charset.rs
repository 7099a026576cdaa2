//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Character pools

use serde::{Deserialize, Serialize};
use std::fmt;

pub const NUMBERS: &str = "0123456789";
pub const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?~";
/// Symbols that survive unescaped in a URL.
pub const URL_SAFE_CHARACTERS: &str = "-._~";

/// 字符类别，顺序即拼接顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Numbers,
    Uppercase,
    Lowercase,
    Symbols,
}

impl CharacterClass {
    /// Fixed assembly order: numbers, uppercase, lowercase, symbols.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Numbers,
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Symbols,
    ];

    pub fn default_pool(self) -> &'static str {
        match self {
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Uppercase => UPPERCASE_LETTERS,
            CharacterClass::Lowercase => LOWERCASE_LETTERS,
            CharacterClass::Symbols => SPECIAL_CHARACTERS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Numbers => "numbers",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four pools a password is assembled from.
///
/// Defaults to the built-in constants. Only the symbol pool is meant to be
/// swapped out (URL-safe mode, or a user supplied set from the config file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPools {
    pub numbers: String,
    pub uppercase: String,
    pub lowercase: String,
    pub symbols: String,
}

impl Default for CharacterPools {
    fn default() -> Self {
        Self {
            numbers: NUMBERS.to_string(),
            uppercase: UPPERCASE_LETTERS.to_string(),
            lowercase: LOWERCASE_LETTERS.to_string(),
            symbols: SPECIAL_CHARACTERS.to_string(),
        }
    }
}

impl CharacterPools {
    pub fn url_safe() -> Self {
        Self::default().with_symbols(URL_SAFE_CHARACTERS)
    }

    pub fn with_symbols(mut self, symbols: &str) -> Self {
        self.symbols = symbols.to_string();
        self
    }

    pub fn get(&self, class: CharacterClass) -> &str {
        match class {
            CharacterClass::Numbers => &self.numbers,
            CharacterClass::Uppercase => &self.uppercase,
            CharacterClass::Lowercase => &self.lowercase,
            CharacterClass::Symbols => &self.symbols,
        }
    }
}
