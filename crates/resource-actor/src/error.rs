//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an `EntityError`.
    ///
    /// Returns `Err(self)` unchanged for any other variant, or when the boxed
    /// error is of a different type.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("room is taken")]
    struct Taken;

    #[test]
    fn test_into_entity_error_recovers_typed_error() {
        let err = FrameworkError::EntityError(Box::new(Taken));
        assert_eq!(err.into_entity_error::<Taken>().unwrap(), Taken);
    }

    #[test]
    fn test_into_entity_error_keeps_other_variants() {
        let err = FrameworkError::NotFound("room_9".into());
        assert!(matches!(
            err.into_entity_error::<Taken>(),
            Err(FrameworkError::NotFound(id)) if id == "room_9"
        ));

        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            foreign.into_entity_error::<Taken>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
