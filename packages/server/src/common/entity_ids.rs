//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Provider entities (service professionals in the directory).
pub struct Provider;

/// Marker type for Review entities (submitted provider reviews).
pub struct Review;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Provider entities.
pub type ProviderId = Id<Provider>;

/// Typed ID for Review entities.
pub type ReviewId = Id<Review>;
