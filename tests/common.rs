use std::sync::{Arc, Mutex};

use bookshelf::access::{Decision, RoleHierarchy, RouteGuard, RouteTable, SessionContext};
use bookshelf::api::Navigator;

pub fn standard_table() -> RouteTable {
    RouteTable::standard(&RoleHierarchy::standard()).expect("standard route table is valid")
}

pub fn session(token: Option<&str>, role: Option<&str>) -> SessionContext {
    SessionContext::new(token.map(String::from), role.map(String::from))
}

/// Resolves `path` in the standard table and runs the default guard on it.
pub fn decide(session: &SessionContext, path: &str) -> Decision {
    let table = standard_table();
    let target = table.resolve(path).expect("catch-all matches every path");
    RouteGuard::default().decide(session, &target)
}

/// Navigator that remembers every requested path.
#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_string());
    }
}
