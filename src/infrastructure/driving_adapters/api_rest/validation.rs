//! Name Validation
//!
//! Runs the field rules on an inbound payload and then checks the name is
//! free, before any use case is invoked.

use std::sync::Arc;

use crate::domain::gateways::LookupRepository;
use crate::domain::models::{EntityId, EntityKind, EntityName};
use crate::infrastructure::driving_adapters::api_rest::dto::NamePayloadDto;
use crate::shared::errors::{ApiError, DomainError, UseCaseError};

/// Boundary validator for create and update payloads
///
/// The uniqueness read can race with a concurrent write of the same name;
/// the storage unique index reports that case as the same error.
pub struct NameValidator {
    kind: EntityKind,
    repository: Arc<dyn LookupRepository>,
}

impl NameValidator {
    #[must_use]
    pub fn new(kind: EntityKind, repository: Arc<dyn LookupRepository>) -> Self {
        Self { kind, repository }
    }

    /// Validate `payload`, excluding `exclude_id` from the uniqueness check
    ///
    /// # Errors
    ///
    /// Returns a 400-class `ApiError` for the first rule violated, or a 500
    /// if the uniqueness lookup itself fails.
    pub async fn validate(
        &self,
        payload: NamePayloadDto,
        exclude_id: Option<EntityId>,
    ) -> Result<EntityName, ApiError> {
        let name = payload.into_name(self.kind).map_err(|e| {
            tracing::warn!(kind = %self.kind, reason = %e, "Rejected payload");
            e
        })?;

        let taken = self
            .repository
            .exists_by_name(&name, exclude_id)
            .await
            .map_err(UseCaseError::from)?;

        if taken {
            tracing::warn!(kind = %self.kind, name = %name, "Name already in use");
            return Err(DomainError::NameInUse(self.kind).into());
        }

        Ok(name)
    }
}
