use std::sync::Arc;

use services::{CatalogService, QuestionService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogService>;
    fn questions(&self) -> Arc<QuestionService>;

    /// Scheme + authority of the backend, for resolving relative media paths.
    fn api_origin(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CatalogService>,
    questions: Arc<QuestionService>,
    api_origin: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            questions: app.questions(),
            api_origin: app.api_origin(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn api_origin(&self) -> &str {
        &self.api_origin
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
