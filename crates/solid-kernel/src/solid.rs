//! Move-only ownership wrapper around a kernel solid.

use truck_modeling::topology;

/// Exclusive owner of exactly one kernel solid for its whole lifetime.
///
/// There is deliberately no `Clone`: duplicating a solid goes through the
/// kernel's own copy, `Solid::from_kernel(solid.kernel().clone())`.
pub struct Solid {
    inner: topology::Solid,
}

impl Solid {
    /// Adopt a kernel solid, taking ownership by move.
    ///
    /// This is how results of kernel-level operations (sweeps, future
    /// booleans) enter the facade.
    pub fn from_kernel(inner: topology::Solid) -> Self {
        Self { inner }
    }

    /// Read-only access to the owned kernel solid.
    pub fn kernel(&self) -> &topology::Solid {
        &self.inner
    }

    /// Consume the wrapper and hand the kernel solid back by move.
    pub fn into_kernel(self) -> topology::Solid {
        self.inner
    }
}
