use api::InMemoryApi;
use study_core::model::{Standard, StandardId, Subject, SubjectId};

use super::test_harness::setup_view_harness;

fn seeded_api() -> InMemoryApi {
    let api = InMemoryApi::new();
    api.seed_standards(vec![Standard {
        id: StandardId::new(1),
        name: "Common Core".into(),
    }]);
    api.seed_subjects(
        StandardId::new(1),
        vec![Subject {
            id: SubjectId::new(9),
            name: "Math".into(),
        }],
    );
    api
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_seeded_standards() {
    let mut harness = setup_view_harness(seeded_api());
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Standards"), "missing view title in {html}");
    assert!(html.contains("Common Core"), "missing standard in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_shows_empty_message() {
    let mut harness = setup_view_harness(InMemoryApi::new());
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(
        html.contains("No standards found."),
        "missing empty message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_surfaces_fetch_error() {
    let api = InMemoryApi::new();
    api.set_failure("backend down");
    let mut harness = setup_view_harness(api);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("backend down"), "missing error in {html}");
}
