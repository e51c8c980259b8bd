use log::LevelFilter;
use simplelog::{ConfigBuilder, SimpleLogger};

use crate::error::Result;

pub fn setup_simple_logger(level: LevelFilter) -> Result<()> {
    let logger_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("course_enroll")
        .build();

    Ok(SimpleLogger::init(level, logger_config)?)
}
