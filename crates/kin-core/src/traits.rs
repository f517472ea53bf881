use crate::error::Result;

/// Validate structural integrity of a trajectory or derived table.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
