#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page opened: search for the initial selection.
    Started,
    /// Restore the saved set loaded from persistent storage.
    SavedRestored(crate::SavedSet),
    /// User picked a role.
    RoleSelected(crate::Role),
    /// User picked a location.
    LocationSelected(crate::Location),
    /// User asked to search the current selection again after a failure.
    RetryRequested,
    /// User clicked save/unsave on a job card.
    SaveToggled(crate::JobRecord),
    /// Engine finished a search request.
    SearchCompleted {
        request_id: crate::RequestId,
        key: crate::SearchKey,
        result: Result<Vec<crate::JobRecord>, String>,
    },
}
