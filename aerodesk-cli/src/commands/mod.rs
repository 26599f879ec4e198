//! Subcommand implementations

pub mod catalog;
pub mod classify;
pub mod config;
pub mod serve;

/// Load `./.env`, then `~/.aerodesk/.env`; values already set win.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
    if let Some(home) = dirs::home_dir() {
        dotenvy::from_path(home.join(".aerodesk").join(".env")).ok();
    }
}
