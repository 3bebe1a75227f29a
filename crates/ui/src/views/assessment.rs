use dioxus::prelude::*;

use mentor_core::model::Notice;

use crate::context::AppContext;
use crate::views::notices::use_notices;
use crate::views::{ViewError, ViewState};
use crate::vm::{AssessmentIntent, AssessmentOutcome, ResultCardVm, start_assessment};

#[cfg(test)]
use crate::vm::AssessmentVm;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn AssessmentView() -> Element {
    rsx! {
        div { class: "page assessment-page",
            AssessmentPanel {}
        }
    }
}

#[component]
pub fn AssessmentPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let notices = use_notices();
    let assessment_loop = ctx.assessment_loop();

    let vm = {
        let assessment_loop = assessment_loop.clone();
        use_signal(move || start_assessment(&assessment_loop))
    };
    let error = use_signal(|| None::<ViewError>);

    let dispatch = {
        let assessment_loop = assessment_loop.clone();
        use_callback(move |intent: AssessmentIntent| {
            let mut vm = vm;
            let mut error = error;

            match intent {
                AssessmentIntent::Select(option_index) => {
                    let outcome = vm.write().select(&assessment_loop, option_index);
                    match outcome {
                        Ok(AssessmentOutcome::Continue) => error.set(None),
                        Ok(AssessmentOutcome::Generate(pending)) => {
                            error.set(None);
                            let assessment_loop = assessment_loop.clone();
                            spawn(async move {
                                match assessment_loop.generate_results(pending).await {
                                    Ok(generated) => {
                                        let published = vm.write().publish(generated);
                                        if published {
                                            notices.push(Notice::assessment_complete());
                                        }
                                    }
                                    Err(err) => {
                                        tracing::warn!(%err, "assessment scoring failed");
                                        vm.write().record_generation_failure(&err);
                                    }
                                }
                            });
                        }
                        Err(err) => error.set(Some(err)),
                    }
                }
                AssessmentIntent::Retake => {
                    vm.write().retake();
                    error.set(None);
                }
                AssessmentIntent::DetailedPlan => {
                    notices.push(Notice::detailed_plan_coming_soon());
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AssessmentTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let question = vm_guard.question();
    let results = vm_guard.results_state();
    drop(vm_guard);

    rsx! {
        div { class: "assessment-card",
            if let Some(question) = question {
                header { class: "assessment-card__header",
                    div {
                        h3 { class: "assessment-card__title", "Career Assessment" }
                        p { class: "assessment-card__position", "{question.position_label}" }
                    }
                    div { class: "assessment-card__progress",
                        span { class: "muted", "Progress" }
                        span { class: "assessment-card__percent", "{question.progress_percent}%" }
                    }
                }
                div { class: "progress",
                    div { class: "progress__bar", style: "width: {question.progress_percent}%;" }
                }
                h4 { class: "assessment-card__prompt", "{question.prompt}" }
                div { class: "assessment-options",
                    for (index, option) in question.options.iter().enumerate() {
                        button {
                            key: "{index}",
                            class: "assessment-option",
                            r#type: "button",
                            onclick: move |_| dispatch.call(AssessmentIntent::Select(index)),
                            "{option}"
                        }
                    }
                }
                if let Some(err) = *error.read() {
                    p { class: "form-error", "{err.message()}" }
                }
                div { class: "assessment-card__meta",
                    span { "{question.category_label}" }
                    span { "{question.answered_label}" }
                }
            } else {
                match results {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        div { class: "assessment-analyzing",
                            div { class: "spinner" }
                            p { "Analyzing your responses..." }
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "form-error", "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| dispatch.call(AssessmentIntent::Retake),
                            "Retake Assessment"
                        }
                    },
                    ViewState::Ready(cards) => rsx! {
                        ResultsPanel { cards, on_intent: dispatch }
                    },
                }
            }
        }
    }
}

#[component]
fn ResultsPanel(cards: Vec<ResultCardVm>, on_intent: EventHandler<AssessmentIntent>) -> Element {
    rsx! {
        div { class: "assessment-results",
            header { class: "assessment-results__header",
                h3 { "Your Career Assessment Results" }
                p { class: "muted", "Based on your responses, here are your personalized career insights" }
            }
            for card in cards {
                div { key: "{card.category}", class: "result",
                    div { class: "result__heading",
                        h4 { "{card.category}" }
                        span { class: "badge badge--score", "{card.match_label}" }
                    }
                    div { class: "progress",
                        div { class: "progress__bar", style: "{card.bar_style()}" }
                    }
                    ul { class: "result__recommendations",
                        for recommendation in card.recommendations.iter() {
                            li { "{recommendation}" }
                        }
                    }
                }
            }
            div { class: "assessment-results__actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(AssessmentIntent::Retake),
                    "Retake Assessment"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(AssessmentIntent::DetailedPlan),
                    "Get Detailed Plan"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AssessmentTestHandles {
    dispatch: Rc<RefCell<Option<Callback<AssessmentIntent>>>>,
    vm: Rc<RefCell<Option<Signal<AssessmentVm>>>>,
}

#[cfg(test)]
impl AssessmentTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<AssessmentIntent>, vm: Signal<AssessmentVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<AssessmentIntent> {
        (*self.dispatch.borrow()).expect("assessment dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<AssessmentVm> {
        (*self.vm.borrow()).expect("assessment vm registered")
    }
}
