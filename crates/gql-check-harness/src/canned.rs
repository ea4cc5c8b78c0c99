// crates/gql-check-harness/src/canned.rs
// ============================================================================
// Module: Canned Executor
// Description: Executor serving pre-built responses.
// Purpose: Drive assertion tests without resolvers or registration.
// Dependencies: gql-check-core
// ============================================================================

//! ## Overview
//! The canned executor serves responses that tests construct up front.
//! Responses registered against query text match exactly; queued
//! responses are served in registration order when no text match exists.
//! Unmatched requests fail closed with an executor error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::VecDeque;
use std::sync::Mutex;

use gql_check_core::ExecutorError;
use gql_check_core::QueryExecutor;
use gql_check_core::QueryRequest;
use gql_check_core::QueryResponse;

// ============================================================================
// SECTION: Canned Executor
// ============================================================================

/// Executor serving pre-built responses by query text or in order.
///
/// # Invariants
/// - Text-matched responses are served repeatedly; queued responses are
///   consumed once each, in registration order.
#[derive(Debug, Default)]
pub struct CannedExecutor {
    /// Responses keyed by exact query text.
    by_query: BTreeMap<String, QueryResponse>,
    /// Responses served in order when no text match exists.
    queue: Mutex<VecDeque<QueryResponse>>,
}

impl CannedExecutor {
    /// Creates an executor with no canned responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a response for an exact query text.
    pub fn register(&mut self, query: impl Into<String>, response: QueryResponse) {
        self.by_query.insert(query.into(), response);
    }

    /// Queues a response served to the next unmatched request.
    ///
    /// A poisoned queue lock is recovered; queued responses are plain data.
    pub fn enqueue(&self, response: QueryResponse) {
        let mut queue = self.queue.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        queue.push_back(response);
    }

    /// Removes every canned response.
    pub fn reset(&mut self) {
        self.by_query.clear();
        let mut queue = self.queue.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        queue.clear();
    }
}

impl QueryExecutor for CannedExecutor {
    fn execute(&self, request: &QueryRequest) -> Result<QueryResponse, ExecutorError> {
        if let Some(response) = self.by_query.get(&request.query) {
            return Ok(response.clone());
        }
        let mut queue = self.queue.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        queue.pop_front().ok_or_else(|| {
            ExecutorError::UnknownRequest(format!(
                "no canned response for query ({} bytes)",
                request.query.len()
            ))
        })
    }
}
