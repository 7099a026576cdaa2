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
// Clipboard handler

use arboard::Clipboard;
use std::io::{Read, Write};
use std::{env, process, thread, time::Duration};
use tracing::{debug, warn};

pub const DAEMON_ENV: &str = "RPAWOGEN_CLIPBOARD_DAEMON";
pub const CLEAR_AFTER_ENV: &str = "RPAWOGEN_CLIPBOARD_CLEAR_AFTER";

/// Somewhere a generated password can be copied to.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The system clipboard. With `clear_after` set, a detached helper process
/// wipes the clipboard after that many seconds if it still holds the secret.
/// The helper gets the secret on its stdin, never in its environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard {
    pub clear_after: Option<u64>,
}

impl SystemClipboard {
    pub fn new(clear_after: u64) -> Self {
        Self {
            clear_after: (clear_after > 0).then_some(clear_after),
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        copy_to_clipboard(text, self.clear_after).map_err(|e| e.to_string())
    }
}

fn spawn_daemon(secret: &str, clear_after: u64) -> Result<(), Box<dyn std::error::Error>> {
    let exe_path = env::current_exe()?;
    let mut cmd = process::Command::new(exe_path);
    cmd.env(DAEMON_ENV, "1")
        .env(CLEAR_AFTER_ENV, clear_after.to_string())
        .stdin(process::Stdio::piped())
        .stdout(process::Stdio::null())
        .stderr(process::Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    let mut child = cmd.spawn()?;
    let mut stdin = child.stdin.take().ok_or("clipboard helper has no stdin")?;
    stdin.write_all(secret.as_bytes())?;
    // EOF tells the helper the secret is complete
    drop(stdin);
    debug!(clear_after, "clipboard clear helper spawned");
    Ok(())
}

/// Wait, then clear the clipboard only if nobody replaced the secret meanwhile.
/// Returns whether the clipboard was cleared.
pub fn clear_if_unchanged(secret: &str, clear_after: u64) -> Result<bool, Box<dyn std::error::Error>> {
    thread::sleep(Duration::from_secs(clear_after));

    let mut ctx = Clipboard::new()?;
    let current_content = ctx.get_text().unwrap_or_default();
    if current_content == secret {
        ctx.set_text("")?;
        debug!("clipboard cleared");
        Ok(true)
    } else {
        debug!("clipboard changed, left untouched");
        Ok(false)
    }
}

/// True when this process was started as the clipboard clear helper.
pub fn is_clipboard_daemon() -> bool {
    env::var(DAEMON_ENV).is_ok()
}

/// Read the secret handed over by the parent process, up to EOF.
pub fn read_secret<R: Read>(mut reader: R) -> Result<String, Box<dyn std::error::Error>> {
    let mut secret = String::new();
    reader.read_to_string(&mut secret)?;
    if secret.is_empty() {
        return Err("no secret received on stdin".into());
    }
    Ok(secret)
}

/// Entry point of the helper process.
pub fn run_clipboard_daemon() -> Result<(), Box<dyn std::error::Error>> {
    let secret = read_secret(std::io::stdin().lock())?;
    let clear_after = env::var(CLEAR_AFTER_ENV)
        .map_err(|_| format!("{} is not set", CLEAR_AFTER_ENV))?
        .parse::<u64>()?;
    if let Err(e) = clear_if_unchanged(&secret, clear_after) {
        warn!(error = %e, "clipboard helper failed");
    }
    Ok(())
}

pub fn copy_to_clipboard(secret: &str, clear_after: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret)?;
    if let Some(seconds) = clear_after {
        spawn_daemon(secret, seconds)?;
    }
    Ok(())
}
