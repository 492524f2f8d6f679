use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{MemoryLocation, Viewer, ViewerIntent, ViewerOptions, sample_deck};
use slides_core::model::Deck;

use crate::context::{UiApp, build_app_context};
use crate::views::ViewerView;
use crate::views::viewer::ViewerTestHandles;

#[derive(Clone)]
struct TestApp {
    deck: Arc<Deck>,
    options: ViewerOptions,
    location: String,
}

impl UiApp for TestApp {
    fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    fn options(&self) -> ViewerOptions {
        self.options
    }

    fn location(&self) -> Box<dyn services::Location> {
        Box::new(MemoryLocation::parse(&self.location).expect("test location parses"))
    }
}

#[derive(Props, Clone)]
struct ViewerHarnessProps {
    app: Arc<TestApp>,
    handles: ViewerTestHandles,
}

impl PartialEq for ViewerHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewerHarnessProps {}

#[component]
fn ViewerHarnessRoot(props: ViewerHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { ViewerView {} }
}

pub struct ViewerHarness {
    pub dom: VirtualDom,
    pub handles: ViewerTestHandles,
}

impl ViewerHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: ViewerIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Sends a key to the viewer's keydown handler; returns whether it navigated.
    pub fn press_key(&mut self, key: Key) -> bool {
        let press_key = self.handles.press_key();
        let handled = self.dom.in_runtime(|| press_key.call(key));
        drive_dom(&mut self.dom);
        handled
    }

    /// Reads the viewer state inside the dom's runtime.
    pub fn with_viewer<O>(&self, f: impl FnOnce(&Viewer) -> O) -> O {
        let viewer = self.handles.viewer();
        self.dom.in_runtime(|| f(&viewer.read()))
    }

    /// Runs spawned tasks and re-renders until `duration` has passed.
    pub async fn drive_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        while tokio::time::timeout_at(deadline, self.dom.wait_for_work())
            .await
            .is_ok()
        {
            self.dom.render_immediate(&mut NoOpMutations);
        }
        drive_dom(&mut self.dom);
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

pub fn setup_viewer_harness(options: ViewerOptions, location: &str) -> ViewerHarness {
    let deck = sample_deck().expect("sample deck loads");
    let app = Arc::new(TestApp {
        deck: Arc::new(deck),
        options,
        location: location.to_string(),
    });
    let handles = ViewerTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewerHarnessRoot,
        ViewerHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewerHarness { dom, handles };
    harness.rebuild();
    harness
}
