use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use api::{CatalogApi, InMemoryApi};
use services::{CatalogService, QuestionService};

use crate::context::{UiApp, build_app_context};
use crate::views::DashboardView;

#[derive(Clone)]
struct TestApp {
    catalog: Arc<CatalogService>,
    questions: Arc<QuestionService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }

    fn api_origin(&self) -> String {
        "http://localhost:4000".into()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn Harness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { DashboardView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: InMemoryApi,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(api: InMemoryApi) -> ViewHarness {
    let shared: Arc<dyn CatalogApi> = Arc::new(api.clone());
    let app = Arc::new(TestApp {
        catalog: Arc::new(CatalogService::new(Arc::clone(&shared))),
        questions: Arc::new(QuestionService::new(shared)),
    });

    let dom = VirtualDom::new_with_props(Harness, HarnessProps { app });
    ViewHarness { dom, api }
}
