#![allow(dead_code)]

use async_trait::async_trait;
use pinpoint_dns_application::ports::{QueryLogRepository, QueryLogSink, RecordResolver};
use pinpoint_dns_domain::{DomainError, QueryLog, Question, Resolution};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

/// Resolver answering from a name → resolution table; unknown names get nothing.
#[derive(Clone, Default)]
pub struct MockRecordResolver {
    responses: Arc<RwLock<HashMap<String, Resolution>>>,
    failing: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockRecordResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, name: &str, resolution: Resolution) {
        self.responses
            .write()
            .await
            .insert(name.to_string(), resolution);
    }

    pub async fn set_error(&self, name: &str, error: DomainError) {
        self.failing.write().await.insert(name.to_string(), error);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordResolver for MockRecordResolver {
    async fn resolve(&self, question: &Question) -> Result<Resolution, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.failing.read().await.get(&question.name.to_string()).cloned() {
            return Err(err);
        }

        Ok(self
            .responses
            .read()
            .await
            .get(&question.name.to_string())
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Clone, Default)]
pub struct MockQueryLogSink {
    logs: Arc<Mutex<Vec<QueryLog>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockQueryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn get_logs(&self) -> Vec<QueryLog> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryLogSink for MockQueryLogSink {
    async fn log_query(&self, entry: QueryLog) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::QueryLogError("Mock sink failed".to_string()));
        }
        self.logs.lock().unwrap().push(entry);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockQueryLogRepository {
    logs: Arc<RwLock<Vec<QueryLog>>>,
}

impl MockQueryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QueryLogRepository for MockQueryLogRepository {
    async fn append(&self, entry: QueryLog) -> Result<(), DomainError> {
        self.logs.write().await.push(entry);
        Ok(())
    }

    async fn get_recent(&self, limit: usize) -> Result<Vec<QueryLog>, DomainError> {
        Ok(self
            .logs
            .read()
            .await
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.logs.read().await.len() as u64)
    }
}
