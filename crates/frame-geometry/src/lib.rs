//! Solid geometry for the printable Moxon support frame.
//!
//! Two fidelity tiers over one set of placement arithmetic:
//!
//! - [`compose_frame`] — the full triangle mesh (U-channels, corner
//!   blocks, end caps, bridges, boom) handed to the binary encoder.
//! - [`build_preview`] — coarse axis-aligned boxes for an interactive
//!   viewport.
//!
//! Both consume the same [`layout::FrameLayout`], so the two views can
//! never disagree on feature boundaries. Everything here is pure and
//! stateless; each call returns a fresh, never-mutated collection.

pub mod composer;
pub mod features;
pub mod layout;
pub mod preview;
pub mod primitives;
pub mod types;

pub use composer::compose_frame;
pub use layout::FrameLayout;
pub use preview::build_preview;
pub use types::{FeatureKind, FrameMesh, PreviewBox, Solid, Triangle};
