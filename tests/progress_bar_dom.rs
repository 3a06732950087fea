#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use job_progress_bar::{ProgressBar, ProgressBarProps, ProgressStatus};
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

async fn render(props: ProgressBarProps) -> Element {
    let document = gloo::utils::document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    yew::Renderer::<ProgressBar>::with_root_and_props(root.clone(), props).render();
    yew::platform::time::sleep(Duration::ZERO).await;
    root
}

fn inner_bar(root: &Element) -> Element {
    root.query_selector(".progress > [role=progressbar]")
        .unwrap()
        .expect("inner bar rendered")
}

#[wasm_bindgen_test]
async fn renders_active_info_bar() {
    let root = render(yew::props!(ProgressBarProps {
        progress_pct: 45.0,
        progress_message: "Importing...",
        status: ProgressStatus::Info,
        active: true,
    }))
    .await;

    let bar = inner_bar(&root);
    assert_eq!(
        bar.get_attribute("class").unwrap(),
        "progress-bar progress-bar-info progress-bar-striped active"
    );
    assert_eq!(
        bar.get_attribute("style").unwrap(),
        "min-width: 2em; width: 45%"
    );
    assert_eq!(bar.text_content().unwrap(), "Importing...");
}

#[wasm_bindgen_test]
async fn renders_finished_success_bar() {
    let root = render(yew::props!(ProgressBarProps {
        progress_pct: 100.0,
        progress_message: "Done",
        status: ProgressStatus::Success,
    }))
    .await;

    let bar = inner_bar(&root);
    assert_eq!(
        bar.get_attribute("class").unwrap(),
        "progress-bar progress-bar-success"
    );
    assert!(bar.get_attribute("style").unwrap().ends_with("width: 100%"));
    assert_eq!(bar.text_content().unwrap(), "Done");
}

#[wasm_bindgen_test]
async fn empty_message_renders_empty_text() {
    let root = render(yew::props!(ProgressBarProps {
        progress_pct: 0.0,
        progress_message: "",
        status: ProgressStatus::Warning,
    }))
    .await;

    let bar = inner_bar(&root);
    assert_eq!(bar.text_content().unwrap(), "");
    assert!(bar.get_attribute("style").unwrap().ends_with("width: 0%"));
}

#[wasm_bindgen_test]
async fn equal_props_render_identical_markup() {
    let props = yew::props!(ProgressBarProps {
        progress_pct: 72.5,
        progress_message: "Indexing",
        status: ProgressStatus::Primary,
        active: true,
    });
    let first = render(props.clone()).await;
    let second = render(props).await;
    assert_eq!(first.inner_html(), second.inner_html());
}
