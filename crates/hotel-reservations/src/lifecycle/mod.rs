//! # System Lifecycle
//!
//! Starting, wiring and stopping the three registries.
//!
//! ## Wiring
//!
//! Registries are created first, without dependencies, and receive them when they are
//! run. The reservation registry depends on the other two:
//!
//! ```rust,ignore
//! // No dependencies
//! impl RecordEntity for Customer { type Context = (); }
//! impl RecordEntity for Hotel { type Context = (); }
//!
//! // Checks customers and takes hotel rooms
//! impl RecordEntity for Reservation { type Context = (CustomerClient, HotelClient); }
//! ```
//!
//! All three share one [`RecordStore`](record_actor::RecordStore) rooted at the
//! configured data directory, each with its own store name.
//!
//! ## Shutdown
//!
//! 1. **Drop all clients** - closes the sending side of every channel
//! 2. **Registries drain** - `receiver.recv()` returns `None` once queued requests are served
//! 3. **Await completion** - every actor task is joined
//!
//! The reservation registry holds clones of the customer and hotel clients, so those
//! two only stop after it has. The dependency graph is acyclic, so this always terminates.
//!
//! ## Tracing
//!
//! Call [`setup_tracing`](record_actor::telemetry::setup_tracing) once per process
//! before building the system:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Mutations and refusals
//! RUST_LOG=debug cargo run     # Full payloads and store loads
//! ```

pub mod reservation_system;

pub use reservation_system::*;
