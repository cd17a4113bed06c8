//! File system caching utilities for fetched API payloads.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

fn cache_base_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("bdl-stats")
}

/// Path: ~/.cache/bdl-stats/season-averages_{season}_{player_id}.json
pub fn season_averages_path(season: u16, player_id: u64) -> PathBuf {
    cache_base_dir().join(format!("season-averages_{}_{}.json", season, player_id))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
