use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
