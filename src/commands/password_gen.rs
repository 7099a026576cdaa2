use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::charset::{CharacterClass, CharacterPools};
use crate::configtool::GenConfig;
use crate::notify::{Notifier, TerminalNotifier};
use crate::passgen::IndexSampling;
use crate::setclip::SystemClipboard;
use crate::shell::PasswordForm;

/// What the user asked for on the command line. Unset fields fall back to the
/// config file.
#[derive(Debug, Clone, Default)]
pub struct GenOptions {
    pub length: Option<usize>,
    pub numbers: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub symbols: bool,
    pub url_safe: bool,
    pub sampling: Option<IndexSampling>,
    pub copy: bool,
    pub clear_after: Option<u64>,
}

impl GenOptions {
    fn any_class_flag(&self) -> bool {
        self.numbers || self.uppercase || self.lowercase || self.symbols
    }
}

/// Merge the command line over the config defaults into a ready form.
///
/// Class flags given on the command line replace the configured set as a
/// whole; `--url-safe` wins over a configured symbol override.
pub fn build_form(options: &GenOptions, config: &GenConfig) -> Result<PasswordForm> {
    let pools = if options.url_safe {
        CharacterPools::url_safe()
    } else {
        config.pools()
    };
    let sampling = options.sampling.unwrap_or(config.sampling);
    let mut form = PasswordForm::new().with_pools(pools).with_sampling(sampling);

    form.set_length(options.length.unwrap_or(config.length))?;

    let selection = config.selection();
    for class in CharacterClass::ALL {
        let included = if options.any_class_flag() {
            match class {
                CharacterClass::Numbers => options.numbers,
                CharacterClass::Uppercase => options.uppercase,
                CharacterClass::Lowercase => options.lowercase,
                CharacterClass::Symbols => options.symbols,
            }
        } else {
            selection.is_enabled(class)
        };
        form.set_included(class, included);
    }
    Ok(form)
}

pub fn generate_random(options: GenOptions) -> Result<()> {
    let config = GenConfig::load().context("Failed to load configuration")?;
    let mut form = build_form(&options, &config)?;
    debug!(
        length = form.length(),
        sampling = %form.sampling(),
        classes = ?form.selection().enabled_classes(),
        "gen"
    );

    let mut notifier = TerminalNotifier;
    let password = generate_into(&mut form, &mut notifier)?;
    println!("Generated password: {}", password);

    if options.copy {
        copy_password(&form, options.clear_after.unwrap_or(config.clear_clipboard_after), &mut notifier)?;
    }
    Ok(())
}

/// Generate into the form. The notifier has already reported the reason on
/// failure, so the returned error does not repeat it.
pub fn generate_into(form: &mut PasswordForm, notifier: &mut dyn Notifier) -> Result<String> {
    match form.generate(notifier) {
        Ok(password) => Ok(password.to_string()),
        Err(_) => bail!("no password generated"),
    }
}

fn copy_password(form: &PasswordForm, clear_after: u64, notifier: &mut dyn Notifier) -> Result<()> {
    let mut clipboard = SystemClipboard::new(clear_after);
    if form.copy_to_clipboard(&mut clipboard, notifier).is_err() {
        bail!("password not copied");
    }
    if clear_after > 0 {
        println!("⏳ Clipboard will be cleared in {} seconds", clear_after);
    }
    Ok(())
}
