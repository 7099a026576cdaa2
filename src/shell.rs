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
// Generator form state

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use tracing::debug;

use crate::charset::{CharacterClass, CharacterPools};
use crate::notify::{Notification, Notifier};
use crate::passgen::IndexSampling;
use crate::selection::{self, SelectionConfig, ValidationError};
use crate::setclip::ClipboardSink;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 26;
pub const DEFAULT_LENGTH: usize = 26;

pub const GENERATED_MESSAGE: &str = "Password generated successfully";
pub const COPIED_MESSAGE: &str = "Password copied to clipboard successfully";
pub const NO_PASSWORD_MESSAGE: &str = "Failed to copy password. No password generated.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    NoPassword,
    Clipboard(String),
    LengthOutOfRange { requested: usize, min: usize, max: usize },
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::NoPassword => write!(f, "{}", NO_PASSWORD_MESSAGE),
            ShellError::Clipboard(msg) => write!(f, "Failed to copy password: {}", msg),
            ShellError::LengthOutOfRange { requested, min, max } => write!(
                f,
                "Password length {} is out of range ({}-{})",
                requested, min, max
            ),
        }
    }
}

impl std::error::Error for ShellError {}

/// 密码生成表单：长度、四个字符类别开关，以及最近一次生成的密码
#[derive(Debug, Clone)]
pub struct PasswordForm {
    selection: SelectionConfig,
    pools: CharacterPools,
    sampling: IndexSampling,
    password: String,
}

impl Default for PasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordForm {
    /// Length 26, every class switched off, nothing generated yet.
    pub fn new() -> Self {
        Self {
            selection: SelectionConfig { length: DEFAULT_LENGTH, ..Default::default() },
            pools: CharacterPools::default(),
            sampling: IndexSampling::default(),
            password: String::new(),
        }
    }

    pub fn with_pools(mut self, pools: CharacterPools) -> Self {
        self.pools = pools;
        self
    }

    pub fn with_sampling(mut self, sampling: IndexSampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn length(&self) -> usize {
        self.selection.length
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), ShellError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(ShellError::LengthOutOfRange {
                requested: length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        self.selection.length = length;
        Ok(())
    }

    pub fn is_included(&self, class: CharacterClass) -> bool {
        self.selection.is_enabled(class)
    }

    pub fn set_included(&mut self, class: CharacterClass, included: bool) {
        self.selection.set_enabled(class, included);
    }

    pub fn selection(&self) -> &SelectionConfig {
        &self.selection
    }

    pub fn sampling(&self) -> IndexSampling {
        self.sampling
    }

    /// The last generated password, if any.
    pub fn password(&self) -> Option<&str> {
        if self.password.is_empty() { None } else { Some(&self.password) }
    }

    pub fn generate(&mut self, notifier: &mut dyn Notifier) -> Result<&str, ValidationError> {
        let mut rng = OsRng;
        self.generate_with(notifier, &mut rng)
    }

    /// Generate a password into the form state. On failure the previous
    /// password is kept.
    pub fn generate_with<R>(&mut self, notifier: &mut dyn Notifier, rng: &mut R) -> Result<&str, ValidationError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        match selection::build_password_with(&self.selection, &self.pools, self.sampling, rng) {
            Ok(password) => {
                self.password = password;
                notifier.notify(Notification::success(GENERATED_MESSAGE));
                Ok(&self.password)
            }
            Err(e) => {
                notifier.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn copy_to_clipboard(
        &self,
        clipboard: &mut dyn ClipboardSink,
        notifier: &mut dyn Notifier,
    ) -> Result<(), ShellError> {
        let Some(password) = self.password() else {
            notifier.notify(Notification::error(NO_PASSWORD_MESSAGE));
            return Err(ShellError::NoPassword);
        };

        match clipboard.set_text(password) {
            Ok(()) => {
                debug!("password copied");
                notifier.notify(Notification::success(COPIED_MESSAGE));
                Ok(())
            }
            Err(msg) => {
                let err = ShellError::Clipboard(msg);
                notifier.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }
}
