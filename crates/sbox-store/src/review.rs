//! Explicit context for the admin response and delete flows.
//!
//! A flow opens a value that carries the record under review, the caller
//! edits it, and `submit`/`confirm` consumes it. Nothing about the open
//! record lives outside that value.

use sbox_core::entities::Suggestion;
use sbox_core::enums::SuggestionStatus;
use sbox_core::ids::SuggestionId;

use crate::adapter::StorageAdapter;
use crate::clock::Clock;
use crate::error::StoreError;
use crate::repo::SuggestionRepo;

/// An admin response being composed for one suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDraft {
    suggestion: Suggestion,
    response: String,
    status: SuggestionStatus,
}

impl ResponseDraft {
    /// Open a draft prefilled with the record's current response and status.
    ///
    /// An unknown stored status prefills as `Pending`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no record has `id`.
    pub fn open<S: StorageAdapter, C: Clock>(
        repo: &mut SuggestionRepo<S, C>,
        id: SuggestionId,
    ) -> Result<Self, StoreError> {
        let suggestion = repo.find_by_id(id)?.ok_or(StoreError::NotFound(id))?;
        Ok(Self {
            response: suggestion.admin_response.clone(),
            status: suggestion.status.kind().unwrap_or_default(),
            suggestion,
        })
    }

    #[must_use]
    pub const fn suggestion(&self) -> &Suggestion {
        &self.suggestion
    }

    #[must_use]
    pub fn response(&self) -> &str {
        &self.response
    }

    #[must_use]
    pub const fn status(&self) -> SuggestionStatus {
        self.status
    }

    #[must_use]
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: SuggestionStatus) -> Self {
        self.status = status;
        self
    }

    /// Persist the draft through [`SuggestionRepo::respond`].
    ///
    /// # Errors
    ///
    /// Same as [`SuggestionRepo::respond`]; the record may have been removed
    /// since the draft was opened.
    pub fn submit<S: StorageAdapter, C: Clock>(
        self,
        repo: &mut SuggestionRepo<S, C>,
    ) -> Result<Suggestion, StoreError> {
        repo.respond(self.suggestion.id, &self.response, self.status)
    }
}

/// A pending deletion awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    suggestion: Suggestion,
}

impl DeleteConfirmation {
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no record has `id`.
    pub fn open<S: StorageAdapter, C: Clock>(
        repo: &mut SuggestionRepo<S, C>,
        id: SuggestionId,
    ) -> Result<Self, StoreError> {
        let suggestion = repo.find_by_id(id)?.ok_or(StoreError::NotFound(id))?;
        Ok(Self { suggestion })
    }

    #[must_use]
    pub const fn suggestion(&self) -> &Suggestion {
        &self.suggestion
    }

    /// # Errors
    ///
    /// Same as [`SuggestionRepo::remove`].
    pub fn confirm<S: StorageAdapter, C: Clock>(
        self,
        repo: &mut SuggestionRepo<S, C>,
    ) -> Result<Suggestion, StoreError> {
        repo.remove(self.suggestion.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_repo;
    use pretty_assertions::assert_eq;

    #[test]
    fn draft_prefills_from_record() {
        let mut repo = test_repo();
        let created = repo.create("", "", "x").unwrap();
        repo.respond(created.id, "Seen", SuggestionStatus::InReview)
            .unwrap();

        let draft = ResponseDraft::open(&mut repo, created.id).unwrap();
        assert_eq!(draft.response(), "Seen");
        assert_eq!(draft.status(), SuggestionStatus::InReview);
        assert_eq!(draft.suggestion().id, created.id);
    }

    #[test]
    fn draft_submit_writes_both_fields() {
        let mut repo = test_repo();
        let created = repo.create("", "", "x").unwrap();

        let updated = ResponseDraft::open(&mut repo, created.id)
            .unwrap()
            .with_response("Shipped")
            .with_status(SuggestionStatus::Implemented)
            .submit(&mut repo)
            .unwrap();
        assert_eq!(updated.admin_response, "Shipped");
        assert_eq!(updated.status.as_str(), "Implemented");
    }

    #[test]
    fn untouched_draft_without_response_is_rejected() {
        let mut repo = test_repo();
        let created = repo.create("", "", "x").unwrap();
        let err = ResponseDraft::open(&mut repo, created.id)
            .unwrap()
            .submit(&mut repo)
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn opening_missing_record_is_not_found() {
        let mut repo = test_repo();
        assert!(matches!(
            ResponseDraft::open(&mut repo, SuggestionId::new(1)),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            DeleteConfirmation::open(&mut repo, SuggestionId::new(1)),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn confirm_deletes_the_opened_record() {
        let mut repo = test_repo();
        let keep = repo.create("", "", "keep").unwrap();
        let gone = repo.create("", "", "drop").unwrap();

        let confirmation = DeleteConfirmation::open(&mut repo, gone.id).unwrap();
        assert_eq!(confirmation.suggestion().text, "drop");
        confirmation.confirm(&mut repo).unwrap();

        assert_eq!(repo.load().unwrap(), vec![keep]);
    }

    #[test]
    fn stale_confirmation_reports_not_found() {
        let mut repo = test_repo();
        let created = repo.create("", "", "x").unwrap();
        let confirmation = DeleteConfirmation::open(&mut repo, created.id).unwrap();
        repo.remove(created.id).unwrap();
        assert!(matches!(
            confirmation.confirm(&mut repo),
            Err(StoreError::NotFound(_))
        ));
    }
}
