//! Debug-build file logging
//!
//! The terminal is owned by the UI, so log records go to
//! `<cache dir>/typeahead/typeahead.log`. `RUST_LOG` selects the level
//! (default `debug`). Release builds do not install a logger.

#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    let Some(dir) = dirs::cache_dir().map(|dir| dir.join("typeahead")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("typeahead.log"))
    else {
        return;
    };

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();

    if result.is_ok() {
        log::debug!("Logging to {}", dir.join("typeahead.log").display());
    }
}

#[cfg(not(debug_assertions))]
pub fn init() {}
