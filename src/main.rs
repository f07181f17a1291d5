mod app;

use std::error::Error;

fn main() {
    log::set_logger(app::logging::AppLogger::init()).expect("failed to set logger");
    let exit_code = if let Err(err) = app::run() {
        log::error!("{}", err);
        let mut last_source: &dyn Error = &*err;
        while let Some(source) = last_source.source() {
            log::error!("  caused by {}", source);
            last_source = source;
        }
        Some(app::exit_code(&err))
    } else {
        None
    };
    log::logger().flush();

    if let Some(code) = exit_code {
        std::process::exit(code);
    }
}
