use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct Logger {
	colors_enabled: bool,
}

impl Logger {
	fn prefix(&self, level: Level) -> ColoredString {
		let text = format!("[{}]", level);
		if !self.colors_enabled {
			return text.normal();
		}
		let colored = match level {
			Level::Error => text.red(),
			Level::Warn => text.yellow(),
			Level::Info => text.cyan(),
			Level::Debug => text.purple(),
			Level::Trace => text.green(),
		};
		colored.bold()
	}
}

impl Log for Logger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &Record) {
		if self.enabled(record.metadata()) {
			eprintln!("{} {}", self.prefix(record.level()), record.args());
		}
	}

	fn flush(&self) {}
}

pub fn init(max_level: LevelFilter, colors_enabled: bool) {
	if log::set_boxed_logger(Box::new(Logger { colors_enabled })).is_ok() {
		log::set_max_level(max_level);
	}
}
