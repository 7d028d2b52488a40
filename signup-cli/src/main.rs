mod command;
mod console;
mod paths;
mod shell;

use std::fs::{self, File};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use signup_lib::{FormModel, InMemoryStore, RecordStore, SqliteStore};
use simplelog::{Config, LevelFilter, WriteLogger};

use console::ConsoleNotifier;

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

/// Open the record database, falling back to memory when it is unavailable.
fn open_store() -> Arc<dyn RecordStore> {
    let Some(path) = paths::records_db() else {
        log::warn!("no data directory, registrations will not outlive this session");
        return Arc::new(InMemoryStore::new());
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match SqliteStore::open(&path) {
        Ok(store) => {
            log::info!("using record database {}", path.display());
            Arc::new(store)
        }
        Err(e) => {
            log::error!("failed to open {}: {}", path.display(), e);
            eprintln!("Could not open {}, registrations are kept in memory", path.display());
            Arc::new(InMemoryStore::new())
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let mut form = FormModel::new(open_store(), Arc::new(ConsoleNotifier));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(e) = shell::run(stdin.lock(), &mut stdout, &mut form) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
