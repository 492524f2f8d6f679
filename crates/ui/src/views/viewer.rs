use dioxus::document::eval;
use dioxus::prelude::*;
use log::debug;

use services::{NavKey, Viewer, ViewerEffect, ViewerIntent};
use slides_core::COMPLETION_MESSAGE_DELAY;
use slides_core::model::PageBlock;

use crate::context::AppContext;
use crate::views::blocks::{MarkdownText, QuizView, RevealView, TabGroupView};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn page_class(active: bool) -> &'static str {
    if active { "page active" } else { "page" }
}

#[component]
pub fn ViewerView() -> Element {
    let ctx = use_context::<AppContext>();
    let viewer = use_signal(move || ctx.open_viewer());

    let dispatch_intent = use_callback(move |intent: ViewerIntent| {
        let mut viewer = viewer;
        let effect = viewer.write().apply(intent);
        if let ViewerEffect::ScheduleCompletion(quiz) = effect {
            // Owned by this scope: closing the viewer drops the pending message.
            spawn(async move {
                tokio::time::sleep(COMPLETION_MESSAGE_DELAY).await;
                let mut viewer = viewer;
                viewer.write().apply(ViewerIntent::ShowCompletion(quiz));
            });
        }
    });

    use_effect(move || {
        let _ = eval(r#"document.getElementById("viewer-root")?.focus();"#);
    });

    // Returns whether the key moved the viewer.
    let press_key = use_callback(move |key: Key| {
        let Some(key) = NavKey::from_key_name(&key.to_string()) else {
            return false;
        };
        let mut viewer = viewer;
        let handled = viewer.write().handle_key(key) != ViewerEffect::Ignored;
        if !handled {
            debug!("arrow key ignored: {key:?}");
        }
        handled
    });

    let on_key = move |evt: KeyboardEvent| {
        if press_key.call(evt.data.key()) {
            evt.prevent_default();
        }
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ViewerTestHandles>() {
                handles.register(dispatch_intent, press_key, viewer);
            }
        }
    }

    let (deck, indicator, prev_disabled, next_disabled, current) = {
        let guard = viewer.read();
        (
            guard.shared_deck(),
            guard.indicator(),
            guard.prev_disabled(),
            guard.next_disabled(),
            guard.current_page(),
        )
    };

    rsx! {
        div { class: "viewer", id: "viewer-root", tabindex: "0", onkeydown: on_key,
            header { class: "viewer__header",
                h1 { class: "viewer__title", "{deck.title()}" }
            }
            main { class: "viewer__pages",
                for (index, page) in deck.pages().iter().enumerate() {
                    section {
                        key: "{index}",
                        class: page_class(index == current),
                        id: "page-{index + 1}",
                        hidden: index != current,
                        if let Some(title) = page.title.as_deref() {
                            h2 { class: "page__title", "{title}" }
                        }
                        for (position, block) in page.blocks.iter().cloned().enumerate() {
                            PageBlockView { key: "{position}", viewer, block, on_intent: dispatch_intent }
                        }
                    }
                }
            }
            NavBar {
                indicator,
                prev_disabled,
                next_disabled,
                on_intent: dispatch_intent,
            }
        }
    }
}

#[component]
fn NavBar(
    indicator: String,
    prev_disabled: bool,
    next_disabled: bool,
    on_intent: EventHandler<ViewerIntent>,
) -> Element {
    rsx! {
        nav { class: "viewer__nav",
            button {
                class: "nav-btn",
                id: "prev-btn",
                r#type: "button",
                disabled: prev_disabled,
                onclick: move |_| on_intent.call(ViewerIntent::Previous),
                "Previous"
            }
            span { class: "page-indicator", id: "page-indicator", "{indicator}" }
            button {
                class: "nav-btn",
                id: "next-btn",
                r#type: "button",
                disabled: next_disabled,
                onclick: move |_| on_intent.call(ViewerIntent::Next),
                "Next"
            }
        }
    }
}

#[component]
fn PageBlockView(
    viewer: Signal<Viewer>,
    block: PageBlock,
    on_intent: EventHandler<ViewerIntent>,
) -> Element {
    match block {
        PageBlock::Text(markdown) => rsx! { MarkdownText { markdown } },
        PageBlock::Tabs(group) => rsx! { TabGroupView { viewer, group, on_intent } },
        PageBlock::Quiz(quiz) => rsx! { QuizView { viewer, quiz, on_intent } },
        PageBlock::Reveal(reveal) => rsx! { RevealView { viewer, reveal, on_intent } },
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ViewerTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ViewerIntent>>>>,
    press_key: Rc<RefCell<Option<Callback<Key, bool>>>>,
    viewer: Rc<RefCell<Option<Signal<Viewer>>>>,
}

#[cfg(test)]
impl ViewerTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<ViewerIntent>,
        press_key: Callback<Key, bool>,
        viewer: Signal<Viewer>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.press_key.borrow_mut() = Some(press_key);
        *self.viewer.borrow_mut() = Some(viewer);
    }

    pub(crate) fn dispatch(&self) -> Callback<ViewerIntent> {
        (*self.dispatch.borrow()).expect("viewer dispatch registered")
    }

    pub(crate) fn press_key(&self) -> Callback<Key, bool> {
        (*self.press_key.borrow()).expect("viewer key handler registered")
    }

    pub(crate) fn viewer(&self) -> Signal<Viewer> {
        (*self.viewer.borrow()).expect("viewer signal registered")
    }
}
