use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;

use proxsearch_common::{Error, Result};

static APPENDER: &str = "stderr";

// stdout is reserved for the query results
fn build_config(level: LevelFilter) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{d(%H:%M:%S%.3f)} {h({l})}] {m}{n}")))
        .build();

    Config::builder()
        .appender(Appender::builder().build(APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(APPENDER).build(level))
        .map_err(|e| Error::Config(e.to_string()))
}

pub fn init_logger() -> Result<Handle> {
    log4rs::init_config(build_config(LevelFilter::Info)?)
        .map_err(|e| Error::Config(e.to_string()))
}

pub fn set_log_level(handle: &Handle, level: LevelFilter) -> Result<()> {
    handle.set_config(build_config(level)?);
    Ok(())
}
