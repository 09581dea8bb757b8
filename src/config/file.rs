// src/config/file.rs
//
// `key=value` options file. `#` starts a comment line; unknown keys are ignored.

use std::{fs, io, path::Path, time::Duration};

use super::Options;

pub fn load(path: &Path) -> Options {
    match fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                logw!("could not read {}: {e}; using defaults", path.display());
            }
            Options::default()
        }
    }
}

pub fn parse(text: &str) -> Options {
    let mut cfg = Options::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else { continue };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        match key {
            "safety_cap" => set_parsed(key, val, &mut cfg.pagination.safety_cap),
            "label_wait_ms" => set_millis(key, val, &mut cfg.pagination.label_wait),
            "poll_ms" => set_millis(key, val, &mut cfg.pagination.poll_interval),
            "active_marker" => cfg.pagination.active_marker = val.to_string(),
            "label_a" => cfg.recon.label_a = val.to_string(),
            "label_b" => cfg.recon.label_b = val.to_string(),
            "key_field" => cfg.recon.key_field = val.to_string(),
            "api_date_format" => cfg.recon.api_date_format = val.to_string(),
            _ => logd!("ignoring unknown config key '{key}'"),
        }
    }
    cfg
}

fn set_parsed<T: std::str::FromStr>(key: &str, val: &str, slot: &mut T) {
    match val.parse() {
        Ok(v) => *slot = v,
        Err(_) => logw!("config '{key}': '{val}' is not valid, keeping default"),
    }
}

fn set_millis(key: &str, val: &str, slot: &mut Duration) {
    let mut ms: u64 = slot.as_millis() as u64;
    set_parsed(key, val, &mut ms);
    *slot = Duration::from_millis(ms);
}

pub fn render(cfg: &Options) -> String {
    let p = &cfg.pagination;
    let r = &cfg.recon;
    let mut s = String::new();
    s.push_str(&format!("safety_cap={}\n", p.safety_cap));
    s.push_str(&format!("label_wait_ms={}\n", p.label_wait.as_millis()));
    s.push_str(&format!("poll_ms={}\n", p.poll_interval.as_millis()));
    s.push_str(&format!("active_marker={}\n", p.active_marker));
    s.push_str(&format!("label_a={}\n", r.label_a));
    s.push_str(&format!("label_b={}\n", r.label_b));
    s.push_str(&format!("key_field={}\n", r.key_field));
    s.push_str(&format!("api_date_format={}\n", r.api_date_format));
    s
}

pub fn save(path: &Path, cfg: &Options) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render(cfg))
}
