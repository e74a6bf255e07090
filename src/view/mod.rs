//! View
//!
//! The list/detail presentation state machine and the surface seam it
//! writes through. The controller owns the session's catalog and the
//! current view; the surface abstracts the page so the whole module is
//! testable without a live display.

pub mod controller;
pub mod surface;
