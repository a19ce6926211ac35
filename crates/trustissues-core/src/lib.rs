//! Trust Issues core: root-domain resolution and trust warning lookups.
//!
//! [`domain`] derives the lookup key from a URL, [`aggregator`] queries the
//! warning service through [`service`] and merges the answers, and
//! [`presentation`] turns an outcome into the interstitial shown before a
//! sign-up action proceeds.

pub mod aggregator;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod intercept;
pub mod logging;
pub mod presentation;
pub mod reviews;
pub mod service;
pub mod session;

pub use aggregator::{Aggregator, AggregatorOptions, DomainReport, LookupOutcome};
pub use domain::{resolve_display_name, resolve_root_domain, DomainError, RootDomain};
pub use error::LookupError;
