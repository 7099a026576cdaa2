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
// A random password generator written in Rust.

pub mod charset;
pub mod cli;
pub mod commands;
pub mod configtool;
pub mod notify;
pub mod passgen;
pub mod selection;
pub mod setclip;
pub mod shell;

pub use passgen::{IndexSampling, generate};
pub use selection::{SelectionConfig, ValidationError, build_password};
