//! # Gasless Transfers
//!
//! Fee-sponsored payments via atomic groups and fee pooling.
//!
//! ```text
//!   ┌────────┐        ┌──────────┐        ┌────────┐        ┌─────────┐
//!   │ Client │        │ Relayer  │        │  Node  │        │ Wallet  │
//!   └───┬────┘        └────┬─────┘        └───┬────┘        └────┬────┘
//!       │ GET /sponsor/address                │                  │
//!       ├─────────────────►│                  │                  │
//!       │ GET params       │                  │                  │
//!       ├────────────────────────────────────►│                  │
//!       │ build [user fee 0, sponsor fee 2×min], assign group    │
//!       │ sign [{user,[sender]}, {sponsor,[]}]                   │
//!       ├───────────────────────────────────────────────────────►│
//!       │ POST /sponsor/sign-and-submit       │                  │
//!       ├─────────────────►│ sign sponsor, broadcast group       │
//!       │◄─────────────────┤ { success, txId }                   │
//! ```
//!
//! The user transaction alone would be rejected as underpriced. Inside the
//! group it is valid because the sponsor transaction overpays by exactly one
//! minimum fee. The sponsor's member is never signed client-side; only the
//! relayer may sign for the sponsor.

pub mod orchestrator;
pub mod pipeline;

mod error;

pub use error::{GaslessError, TransportError};
pub use orchestrator::GaslessOrchestrator;
pub use pipeline::{PaymentRequest, SponsoredGroup, SPONSOR_INDEX, USER_INDEX};
