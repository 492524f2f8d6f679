use dioxus::prelude::*;

use services::{Viewer, ViewerIntent};
use slides_core::model::{GroupId, PanelBlock, QuizId, RevealId};

use crate::vm::{
    inline_markdown_to_html, markdown_to_html, option_class, progress_label, question_class,
};

#[component]
pub fn MarkdownText(markdown: String) -> Element {
    let html = use_memo(use_reactive!(|markdown| markdown_to_html(&markdown)));
    rsx! {
        div { class: "text-block", dangerous_inner_html: "{html}" }
    }
}

//
// ─── TABS ──────────────────────────────────────────────────────────────────────
//

#[component]
pub fn TabGroupView(
    viewer: Signal<Viewer>,
    group: GroupId,
    on_intent: EventHandler<ViewerIntent>,
) -> Element {
    let deck = viewer.read().shared_deck();
    let Some(definition) = deck.group(group) else {
        return rsx! {};
    };
    let active = viewer.read().active_tab(group).map(str::to_string);
    let is_active = |tab_id: &str| active.as_deref() == Some(tab_id);

    rsx! {
        div { class: "content", id: "{group}",
            div { class: "tab-buttons", role: "tablist",
                {definition.tabs.iter().map(|tab| {
                    let tab_id = tab.id.clone();
                    let class = if is_active(&tab.id) { "tab-btn active" } else { "tab-btn" };
                    rsx! {
                        button {
                            key: "{tab.id}",
                            class,
                            r#type: "button",
                            role: "tab",
                            "data-tab": "{tab.id}",
                            aria_selected: is_active(&tab.id),
                            onclick: move |_| on_intent.call(ViewerIntent::SelectTab {
                                group,
                                tab: tab_id.clone(),
                            }),
                            "{tab.label}"
                        }
                    }
                })}
            }
            for tab in definition.tabs.iter() {
                div {
                    key: "{tab.id}",
                    class: if is_active(&tab.id) { "tab-content active" } else { "tab-content" },
                    id: "{group}-{tab.id}",
                    role: "tabpanel",
                    hidden: !is_active(&tab.id),
                    for (position, block) in tab.blocks.iter().cloned().enumerate() {
                        PanelBlockView { key: "{position}", viewer, block, on_intent }
                    }
                }
            }
        }
    }
}

#[component]
fn PanelBlockView(
    viewer: Signal<Viewer>,
    block: PanelBlock,
    on_intent: EventHandler<ViewerIntent>,
) -> Element {
    match block {
        PanelBlock::Text(markdown) => rsx! { MarkdownText { markdown } },
        PanelBlock::Quiz(quiz) => rsx! { QuizView { viewer, quiz, on_intent } },
        PanelBlock::Reveal(reveal) => rsx! { RevealView { viewer, reveal, on_intent } },
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

#[component]
pub fn QuizView(
    viewer: Signal<Viewer>,
    quiz: QuizId,
    on_intent: EventHandler<ViewerIntent>,
) -> Element {
    let deck = viewer.read().shared_deck();
    let Some(definition) = deck.quiz(quiz) else {
        return rsx! {};
    };
    let Some(state) = viewer.read().quiz(quiz).cloned() else {
        return rsx! {};
    };
    let feedback_html = definition
        .feedback
        .as_deref()
        .filter(|_| state.feedback_visible())
        .map(markdown_to_html);

    rsx! {
        section { class: "quiz-section", id: "{quiz}",
            if let Some(title) = definition.title.as_deref() {
                h3 { class: "quiz-title", "{title}" }
            }
            for (question_index, question) in definition.questions.iter().enumerate() {
                div {
                    key: "{question_index}",
                    class: question_class(state.is_answered(question_index)),
                    p {
                        class: "quiz-prompt",
                        dangerous_inner_html: inline_markdown_to_html(&question.prompt),
                    }
                    div { class: "quiz-options",
                        for (option_index, text) in question.options.iter().enumerate() {
                            button {
                                key: "{option_index}",
                                class: option_class(state.option_mark(question_index, option_index)),
                                r#type: "button",
                                onclick: move |_| on_intent.call(ViewerIntent::Answer {
                                    quiz,
                                    question: question_index,
                                    option: option_index,
                                }),
                                dangerous_inner_html: inline_markdown_to_html(text),
                            }
                        }
                    }
                }
            }
            div { class: "score-display",
                span { class: "score-line", "{state.score_line()}" }
                if let Some(message) = state.completion_message() {
                    br {}
                    span { class: "score-message", "{message}" }
                }
            }
            p { class: "quiz-progress", "{progress_label(&state)}" }
            if let Some(html) = feedback_html {
                div { class: "feedback", dangerous_inner_html: "{html}" }
            }
        }
    }
}

//
// ─── REVEAL ────────────────────────────────────────────────────────────────────
//

#[component]
pub fn RevealView(
    viewer: Signal<Viewer>,
    reveal: RevealId,
    on_intent: EventHandler<ViewerIntent>,
) -> Element {
    let deck = viewer.read().shared_deck();
    let Some(definition) = deck.reveal(reveal) else {
        return rsx! {};
    };
    let revealed = viewer.read().is_revealed(reveal);

    rsx! {
        div { class: "reveal", id: "{reveal}",
            button {
                class: "reveal-btn",
                r#type: "button",
                onclick: move |_| on_intent.call(ViewerIntent::Reveal(reveal)),
                "{definition.label}"
            }
            if revealed {
                div {
                    class: "feedback",
                    dangerous_inner_html: markdown_to_html(&definition.feedback),
                }
            }
        }
    }
}
