//! Shared application state.

use std::sync::Arc;

use parking_lot::RwLock;
use salecast_core::ledger::SalesLedger;

use crate::config::ScopePolicy;

/// State injected into every handler: the ledger plus the scoping policy for
/// forecast requests.
///
/// Handlers hold the lock only for the duration of their ledger access and
/// never across an await point, so mutations cannot interleave mid-operation.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<RwLock<SalesLedger>>,
    pub scope: ScopePolicy,
}

impl AppState {
    /// Fresh state with an empty ledger.
    pub fn new(scope: ScopePolicy) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(SalesLedger::new())),
            scope,
        }
    }
}
