use color_eyre::{Result, eyre::WrapErr};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Sends log records to `path`, since the terminal belongs to the UI.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .wrap_err("installing logger")?;
    Ok(())
}
