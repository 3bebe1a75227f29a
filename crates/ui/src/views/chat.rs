use dioxus::prelude::*;

use mentor_core::model::Notice;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::notices::use_notices;
use crate::vm::{ChatIntent, start_chat};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn ChatView() -> Element {
    rsx! {
        div { class: "page chat-page",
            ChatPanel {}
        }
    }
}

#[component]
pub fn ChatPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let notices = use_notices();
    let chat = ctx.chat_service();

    let vm = {
        let chat = chat.clone();
        use_signal(move || start_chat(&chat))
    };
    let draft = use_signal(String::new);
    let error = use_signal(|| None::<ViewError>);

    let dispatch = {
        let chat = chat.clone();
        use_callback(move |intent: ChatIntent| {
            let mut vm = vm;
            let mut draft = draft;
            let mut error = error;

            let text = match intent {
                ChatIntent::Send(text) => text,
                ChatIntent::Suggest(kind) => kind.text().to_string(),
            };
            let pending = match vm.write().submit(&chat, &text) {
                Ok(pending) => pending,
                Err(err) => {
                    error.set(Some(err));
                    return;
                }
            };
            error.set(None);
            draft.set(String::new());
            notices.push(Notice::message_sent());

            let chat = chat.clone();
            spawn(async move {
                let reply = chat.compose_reply(pending).await;
                let delivered = vm.write().deliver(&chat, reply);
                if let Err(err) = delivered {
                    tracing::warn!(?err, "dropped chat reply");
                    error.set(Some(err));
                }
            });
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ChatTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let vm_guard = vm.read();
    let bubbles = vm_guard.bubbles();
    let suggestions = vm_guard.suggestions();
    let is_typing = vm_guard.is_typing();
    let can_send = vm_guard.can_send(&draft.read());
    drop(vm_guard);

    rsx! {
        div { class: "chat-card",
            div { class: "chat-card__header",
                div { class: "avatar avatar--bot", "AI" }
                div { class: "chat-card__heading",
                    h3 { "AI Career Mentor" }
                    p { "Your professional growth companion" }
                }
                span { class: "status-dot" }
            }
            div { class: "chat-card__messages",
                for bubble in bubbles {
                    div {
                        key: "{bubble.key}",
                        class: if bubble.from_user { "message message--user" } else { "message message--bot" },
                        div { class: "message__bubble",
                            p { class: "message__text", "{bubble.content}" }
                            span { class: "message__time", "{bubble.time_label}" }
                        }
                    }
                }
                if is_typing {
                    div { class: "message message--bot message--typing",
                        div { class: "typing-dots",
                            span {}
                            span {}
                            span {}
                        }
                    }
                }
            }
            div { class: "chat-card__composer",
                if !suggestions.is_empty() {
                    div { class: "suggestions",
                        for suggestion in suggestions {
                            button {
                                key: "{suggestion.kind.slug()}",
                                class: "suggestion",
                                r#type: "button",
                                onclick: move |_| dispatch.call(ChatIntent::Suggest(suggestion.kind)),
                                "{suggestion.text}"
                            }
                        }
                    }
                }
                if let Some(err) = *error.read() {
                    p { class: "form-error", "{err.message()}" }
                }
                div { class: "composer",
                    input {
                        class: "composer__input",
                        r#type: "text",
                        placeholder: "Ask about your career, skills, goals, or job market...",
                        value: "{draft}",
                        oninput: move |evt| {
                            let mut draft = draft;
                            draft.set(evt.value());
                        },
                        onkeydown: move |evt| {
                            if evt.data.key() == Key::Enter {
                                evt.prevent_default();
                                dispatch.call(ChatIntent::Send(draft()));
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary composer__send",
                        r#type: "button",
                        disabled: !can_send,
                        onclick: move |_| dispatch.call(ChatIntent::Send(draft())),
                        "Send"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ChatTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ChatIntent>>>>,
}

#[cfg(test)]
impl ChatTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<ChatIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<ChatIntent> {
        (*self.dispatch.borrow()).expect("chat dispatch registered")
    }
}
