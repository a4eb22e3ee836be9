//! Site adapters behind the [`ListingSource`](crate::scanner::ListingSource)
//! and [`ContentSource`](crate::enrich::ContentSource) traits.
//!
//! The scan and the assembler never see markup; everything that depends on
//! the page structure of a particular site lives here.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`daktilo`] | HTTP client and selectors for the Daktilo1984 WordPress listing |
//! | [`markup`] | Re-serializes an article body without scripts, share widgets or lazy-load attributes |

pub mod daktilo;
pub mod markup;
