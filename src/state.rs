use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::config::AppConfig;

pub struct AppState {
    pub db: Mutex<Connection>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(conn: Connection, config: AppConfig) -> Self {
        Self {
            db: Mutex::new(conn),
            config,
        }
    }

    /// Borrows the connection for the duration of one request.
    pub fn db(&self) -> MutexGuard<'_, Connection> {
        self.db.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
