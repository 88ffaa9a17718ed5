mod dashboard;
mod editor;
mod state;

pub use dashboard::DashboardView;
pub use editor::QuestionEditor;
pub use state::{SaveState, UploadState};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
