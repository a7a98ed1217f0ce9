use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use env_logger::{Builder, Env, Target};

/// Route the `log` facade into `path` (append mode). Falls back to stderr
/// when the file cannot be opened.
pub fn init(path: &str) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| write_record(buf, record.level(), record.args()));

    match open_sink(path) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
            builder.init();
        }
        Err(e) => {
            builder.target(Target::Stderr);
            builder.init();
            log::warn!("⚠️ Could not open log file {}: {}, logging to stderr", path, e);
        }
    }
}

/// One line per record: `2024-05-17 08:15:00,123 ERROR:message`.
fn write_record(buf: &mut impl Write, level: log::Level, args: &fmt::Arguments<'_>) -> io::Result<()> {
    writeln!(
        buf,
        "{} {}:{}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
        level,
        args
    )
}

fn open_sink(path: &str) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
