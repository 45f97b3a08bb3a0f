//! Domain Ports
//!
//! Contracts the domain needs from the outside world.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`DiagnosticSink`] | Receives bootstrap notices about loading and wiring |

/// Bootstrap diagnostics port
pub mod diagnostics;

pub use diagnostics::DiagnosticSink;
