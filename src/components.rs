//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across site pages.
//! The page shell wraps page content with document metadata and the fixed
//! footer; the remaining modules render the footer's sub-blocks.

pub mod footer;
pub mod icons;
pub mod layout;
pub mod team;
