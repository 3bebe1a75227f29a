use dioxus::prelude::*;

use mentor_core::model::Notice;

use crate::vm::{NoticeEntry, NoticeStack};

/// Shared handle to the toast stack of the current window.
#[derive(Clone, Copy, PartialEq)]
pub struct Notices(Signal<NoticeStack>);

impl Notices {
    pub fn push(self, notice: Notice) {
        tracing::debug!(title = notice.title(), "notice raised");
        let mut stack = self.0;
        stack.write().push(notice);
    }

    pub fn dismiss(self, id: u64) {
        let mut stack = self.0;
        stack.write().dismiss(id);
    }

    #[must_use]
    pub fn entries(self) -> Vec<NoticeEntry> {
        self.0.read().entries()
    }
}

/// Provide an empty notice stack to the subtree.
pub fn use_notice_provider() -> Notices {
    use_context_provider(|| Notices(Signal::new(NoticeStack::default())))
}

#[must_use]
pub fn use_notices() -> Notices {
    use_context::<Notices>()
}

#[component]
pub fn NoticeTray() -> Element {
    let notices = use_notices();
    let entries = notices.entries();

    rsx! {
        div { class: "notice-tray", role: "status",
            for entry in entries {
                div { key: "{entry.id}", class: "notice",
                    div { class: "notice__body",
                        p { class: "notice__title", "{entry.notice.title()}" }
                        p { class: "notice__description", "{entry.notice.description()}" }
                    }
                    button {
                        class: "notice__dismiss",
                        r#type: "button",
                        aria_label: "Dismiss",
                        onclick: move |_| notices.dismiss(entry.id),
                        "×"
                    }
                }
            }
        }
    }
}
