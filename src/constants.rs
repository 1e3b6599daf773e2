//! Constants for URI decomposition.

/// Lowest port value that survives normalization.
pub const MIN_PORT: u16 = 1;

/// Highest port value that survives normalization.
pub const MAX_PORT: u16 = 65535;

/// Reserved scheme/authority token injected in front of scheme-less inputs
/// so the splitter always sees one generic shape. Retracted before the
/// components are returned; never visible to callers.
pub(crate) const PLACEHOLDER: &str = "placeholder";
