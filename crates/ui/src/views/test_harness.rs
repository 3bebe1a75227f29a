use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use mentor_core::model::AppSettings;
use mentor_core::time::fixed_clock;
use services::{AssessmentLoopService, ChatService};

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::assessment::AssessmentTestHandles;
use crate::views::chat::ChatTestHandles;
use crate::views::notices::{Notices, use_notice_provider};
use crate::views::{AssessmentView, ChatView, HomeView};

#[derive(Clone)]
struct TestApp {
    settings: AppSettings,
    assessment_loop: Arc<AssessmentLoopService>,
    chat_service: Arc<ChatService>,
}

impl UiApp for TestApp {
    fn settings(&self) -> AppSettings {
        self.settings
    }

    fn assessment_loop(&self) -> Arc<AssessmentLoopService> {
        Arc::clone(&self.assessment_loop)
    }

    fn chat_service(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Chat,
    Assessment,
    /// The real route table, layout included.
    App,
}

#[derive(Clone, Default)]
pub struct ViewHandles {
    pub chat: ChatTestHandles,
    pub assessment: AssessmentTestHandles,
    notices: std::rc::Rc<std::cell::RefCell<Option<Notices>>>,
}

impl ViewHandles {
    pub fn notices(&self) -> Notices {
        (*self.notices.borrow()).expect("notices registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: ViewHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.chat.clone());
    use_context_provider(|| props.handles.assessment.clone());
    let notices = use_notice_provider();
    *props.handles.notices.borrow_mut() = Some(notices);

    if props.view == ViewKind::App {
        return rsx! { Router::<Route> {} };
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home | ViewKind::App => rsx! { HomeView {} },
        ViewKind::Chat => rsx! { ChatView {} },
        ViewKind::Assessment => rsx! { AssessmentView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: ViewHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Run `f` inside the DOM runtime, then flush the resulting updates.
    pub fn act<T>(&mut self, f: impl FnOnce(&ViewHandles) -> T) -> T {
        let handles = self.handles.clone();
        let value = self.dom.in_runtime(|| f(&handles));
        drive_dom(&mut self.dom);
        value
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

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_settings(view, AppSettings::instant())
}

pub fn setup_view_harness_with_settings(view: ViewKind, settings: AppSettings) -> ViewHarness {
    let app = Arc::new(TestApp {
        settings,
        assessment_loop: Arc::new(AssessmentLoopService::new(&settings)),
        chat_service: Arc::new(ChatService::new(fixed_clock(), &settings)),
    });
    let handles = ViewHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
