use std::io::BufReader;
use std::path::PathBuf;
use tasklist::app::controller::TaskController;
use tasklist::store::blob::FileBlobStore;
use tasklist::ui::console::ConsoleUi;

/// Where the task list lives between sessions
fn data_dir() -> PathBuf {
    std::env::var_os("TASKLIST_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".tasklist"))
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let dir = data_dir();
    log::debug!("using data directory {}", dir.display());

    let controller = TaskController::new(FileBlobStore::new(dir));
    let mut ui = ConsoleUi::new(controller);

    ui.run(BufReader::new(std::io::stdin()), std::io::stdout())
}
