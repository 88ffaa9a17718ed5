/// Save lifecycle of the question editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Success,
    Error(String),
}

/// Upload lifecycle of one attachment kind. `Done` carries the
/// acknowledgement message shown until the user dismisses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Uploading,
    Done(String),
    Error(String),
}
