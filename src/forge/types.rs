#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to read a file from the repository.
pub struct GetFileContentRequest {
    /// Path relative to the repository root.
    pub path: String,
    /// Branch, tag or sha to read from. Default branch when `None`.
    pub git_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to create a label in the repository's label list.
pub struct CreateLabelRequest {
    pub name: String,
    /// Hex color without a leading `#`.
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to attach labels to an issue or pull request.
pub struct AddLabelsRequest {
    pub issue_number: u64,
    pub labels: Vec<String>,
}
