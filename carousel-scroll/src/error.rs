use alloc::string::String;

/// Returned when an easing key is not part of the registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing `{name}`")]
pub struct UnknownEasing {
    name: String,
}

impl UnknownEasing {
    pub(crate) fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// The key that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }
}
