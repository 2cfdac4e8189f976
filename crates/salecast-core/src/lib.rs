//! # salecast-core
//!
//! Domain layer of the salecast service: a volatile in-memory ledger of sales
//! transactions and a one-step-ahead linear-trend forecaster over its numeric
//! series.
//!
//! ## Example
//!
//! ```rust
//! use salecast_core::prelude::*;
//!
//! let mut ledger = SalesLedger::new();
//! ledger.add("shop@example.com", 10.0, 15.0, 5.0);
//! ledger.add("shop@example.com", 12.0, 18.0, 6.0);
//!
//! let trend = LinearTrend::fit(&sell_series(ledger.all())).unwrap();
//! assert!((trend.forecast_next() - 21.0).abs() < 1e-10);
//! ```

pub mod ledger;
pub mod trend;
mod error;

pub use error::{Result, SalesError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Result, SalesError};
    pub use crate::ledger::{profit_series, sell_series, SaleRecord, SalesLedger};
    pub use crate::trend::{extrapolate_next, LinearTrend};
}
