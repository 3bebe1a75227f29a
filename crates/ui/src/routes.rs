use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AssessmentView, ChatView, HomeView, NoticeTray, use_notice_provider};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/chat", ChatView)] Chat {},
        #[route("/assessment", AssessmentView)] Assessment {},
}

#[component]
fn Layout() -> Element {
    use_notice_provider();

    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "site-footer",
                p { "© 2024 AI 360 Career Mentor. Empowering careers through artificial intelligence." }
            }
            NoticeTray {}
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "brand",
                h1 { class: "brand__title", "AI 360 Career Mentor" }
                p { class: "brand__tagline", "Your Professional Growth Companion" }
                span { class: "badge badge--beta", "BETA" }
            }
            nav { class: "site-nav",
                ul {
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::Chat {}, "Career Chat" } }
                    li { Link { to: Route::Assessment {}, "Assessment" } }
                }
            }
        }
    }
}
