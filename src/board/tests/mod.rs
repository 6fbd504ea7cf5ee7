//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation and attack detection
//! - `castling.rs` - Castling legality, execution, and rights forfeiture
//! - `status.rs` - Checkmate, stalemate, and status transitions
//! - `draw.rs` - Draw detection (50-move rule, stalemate)
//! - `edge_cases.rs` - Pins, discovered checks, and rejection paths
//! - `proptest.rs` - Property-based tests

mod draw;
mod edge_cases;
