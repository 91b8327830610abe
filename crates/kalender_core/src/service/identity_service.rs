//! School-identity edit-session service.
//!
//! # Responsibility
//! - Own the committed in-memory identity plus the draft of an open edit
//!   session.
//! - Persist only on explicit commit; cancellation discards the draft.
//!
//! # Invariants
//! - `committed` always reflects the last loaded or saved value.
//! - At most one draft exists at a time; no draft means no edit session.
//! - Storage is never written outside `commit_edit`.

use crate::model::identity::SchoolIdentity;
use crate::repo::identity_repo::{IdentityRepository, RepoResult};
use log::info;

/// Use-case service for loading, editing and committing the identity.
pub struct IdentityService<R: IdentityRepository> {
    repo: R,
    committed: SchoolIdentity,
    draft: Option<SchoolIdentity>,
}

impl<R: IdentityRepository> IdentityService<R> {
    /// Loads the committed identity through the repository.
    ///
    /// Missing/corrupt stored data surfaces here as the default identity,
    /// never as an error.
    pub fn load(repo: R) -> RepoResult<Self> {
        let committed = repo.load()?;
        Ok(Self {
            repo,
            committed,
            draft: None,
        })
    }

    /// Currently committed identity.
    pub fn committed(&self) -> &SchoolIdentity {
        &self.committed
    }

    /// Whether an edit session is open.
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Opens an edit session, seeding the draft from the committed value.
    ///
    /// Reopening while a session is active re-seeds the draft, matching
    /// the source application's edit button behavior.
    pub fn begin_edit(&mut self) {
        self.draft = Some(self.committed.clone());
    }

    /// Read access to the open draft, if any.
    pub fn draft(&self) -> Option<&SchoolIdentity> {
        self.draft.as_ref()
    }

    /// Mutable access to the open draft for form binding.
    pub fn draft_mut(&mut self) -> Option<&mut SchoolIdentity> {
        self.draft.as_mut()
    }

    /// Discards the draft and keeps the committed value untouched.
    pub fn cancel_edit(&mut self) {
        if self.draft.take().is_some() {
            info!("event=identity_edit module=service status=cancelled");
        }
    }

    /// Persists the draft and promotes it to the committed value.
    ///
    /// A commit without an open session is a no-op. On a repository
    /// failure the draft stays open so the user can retry or cancel.
    pub fn commit_edit(&mut self) -> RepoResult<()> {
        let Some(draft) = self.draft.clone() else {
            return Ok(());
        };

        self.repo.save(&draft)?;
        self.committed = draft;
        self.draft = None;
        info!("event=identity_edit module=service status=committed");
        Ok(())
    }
}
