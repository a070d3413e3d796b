//! Result persistence interface and an in-memory store.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::StorageError;
use crate::models::analysis::AnalysisResult;
use crate::models::screening::{ScreeningResults, ScreeningSession};

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

pub trait ResultStore: Send + Sync {
    /// Store results and return their id.
    fn save_results(&self, results: &ScreeningResults) -> Result<String, StorageError>;

    fn load_results(&self, id: &str) -> Result<ScreeningResults, StorageError>;

    /// Screening sessions, most recent first.
    fn history(&self, limit: usize) -> Result<Vec<ScreeningSession>, StorageError>;

    fn save_analysis(&self, analysis: &AnalysisResult) -> Result<(), StorageError>;

    /// Latest analysis stored for a ticker.
    fn load_analysis(&self, ticker: &str) -> Result<AnalysisResult, StorageError>;
}

#[derive(Default)]
pub struct InMemoryResultStore {
    results: RwLock<HashMap<String, ScreeningResults>>,
    sessions: RwLock<Vec<ScreeningSession>>,
    analyses: RwLock<HashMap<String, AnalysisResult>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for InMemoryResultStore {
    /// Ids colliding with a stored result get a `_2`, `_3`, ... suffix.
    fn save_results(&self, results: &ScreeningResults) -> Result<String, StorageError> {
        let mut session = ScreeningSession::from(results);
        let mut stored = self.results.write();

        let mut id = session.id.clone();
        let mut suffix = 2;
        while stored.contains_key(&id) {
            id = format!("{}_{}", session.id, suffix);
            suffix += 1;
        }

        stored.insert(id.clone(), results.clone());
        session.id = id.clone();
        self.sessions.write().push(session);
        Ok(id)
    }

    fn load_results(&self, id: &str) -> Result<ScreeningResults, StorageError> {
        self.results
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    fn history(&self, limit: usize) -> Result<Vec<ScreeningSession>, StorageError> {
        let mut sessions = self.sessions.read().clone();
        // later saves first among equal timestamps
        sessions.reverse();
        sessions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sessions.truncate(limit);
        Ok(sessions)
    }

    fn save_analysis(&self, analysis: &AnalysisResult) -> Result<(), StorageError> {
        self.analyses
            .write()
            .insert(analysis.ticker.to_uppercase(), analysis.clone());
        Ok(())
    }

    fn load_analysis(&self, ticker: &str) -> Result<AnalysisResult, StorageError> {
        self.analyses
            .read()
            .get(&ticker.to_uppercase())
            .cloned()
            .ok_or_else(|| StorageError::NotFound(ticker.to_string()))
    }
}
