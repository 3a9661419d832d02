use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{AnswerInputVm, AssessmentIntent, AssessmentOutcome, AssessmentVm, QuestionVm};

#[component]
pub fn AssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| {
        AssessmentVm::start(ctx.catalog())
            .map_err(|err| {
                log::warn!("could not start assessment: {err:?}");
                err
            })
            .ok()
    });

    let dispatch_intent = {
        let ctx = ctx.clone();
        use_callback(move |intent: AssessmentIntent| {
            let mut vm = vm;
            let mut error = error;
            let result = match vm.write().as_mut() {
                Some(vm) => vm.apply(intent),
                None => Err(ViewError::Unknown),
            };
            match result {
                Ok(AssessmentOutcome::Continue) => error.set(None),
                Ok(AssessmentOutcome::Finished(completed)) => {
                    error.set(None);
                    ctx.stash_completed(completed);
                    let _ = navigator.push(Route::Results {});
                }
                Err(err) => error.set(Some(err)),
            }
        })
    };

    let guard = vm.read();
    let Some(vm_ref) = guard.as_ref() else {
        return rsx! {
            div { class: "page",
                p { class: "error", "{ViewError::Unknown.message()}" }
            }
        };
    };

    let steps = vm_ref.steps();
    let section = vm_ref.section();
    let section_label = vm_ref.section_label();
    let assessment_percent = vm_ref.assessment_percent();
    let question_label = vm_ref.question_label();
    let section_percent = vm_ref.section_percent();
    let answered_label = vm_ref.answered_label();
    let question = vm_ref.question();
    let tag_progress = vm_ref.section_progress().tags;
    let can_advance = vm_ref.can_advance();
    let can_go_back = vm_ref.can_go_back();
    let advance_label = vm_ref.advance_label();
    drop(guard);

    rsx! {
        div { class: "page assessment",
            div { class: "assessment-header",
                div { class: "row",
                    span { "Assessment Progress" }
                    span { class: "badge outline", "{section_label}" }
                }
                progress { max: "100", value: "{assessment_percent}" }
                span { class: "muted", "{assessment_percent}% Complete" }
            }

            ol { class: "stepper",
                for step in steps {
                    li { class: "{step.state.class()}", key: "{step.number}",
                        span { class: "step-number", "{step.number}" }
                        div {
                            div { class: "step-title", "{step.title}" }
                            div { class: "step-description", "{step.description}" }
                        }
                    }
                }
            }

            div { class: "card section",
                h2 { "{section.title()}" }
                p { class: "muted", "{section.description()}" }

                div { class: "row",
                    span { "{question_label}" }
                    span { "{section_percent}% Complete" }
                }
                progress { max: "100", value: "{section_percent}" }

                if let Some(question) = question {
                    QuestionCard { question, on_intent: dispatch_intent }
                }

                if let Some(err) = error() {
                    p { class: "error", "{err.message()}" }
                }

                div { class: "row nav",
                    button {
                        id: "assessment-back",
                        class: "btn ghost",
                        disabled: !can_go_back,
                        onclick: move |_| dispatch_intent.call(AssessmentIntent::Back),
                        "Previous"
                    }
                    span { class: "muted", "{answered_label}" }
                    button {
                        id: "assessment-advance",
                        class: "btn primary",
                        disabled: !can_advance,
                        onclick: move |_| dispatch_intent.call(AssessmentIntent::Advance),
                        "{advance_label}"
                    }
                }

                div { class: "tag-progress",
                    for tag in tag_progress {
                        div { class: "tag", key: "{tag.tag.label()}",
                            span { "{tag.tag.label()}" }
                            progress {
                                max: "{tag.total}",
                                value: "{tag.answered}",
                            }
                        }
                    }
                }
            }
        }
    }
}

fn option_class(selected: bool) -> &'static str {
    if selected { "option selected" } else { "option" }
}

#[component]
fn QuestionCard(question: QuestionVm, on_intent: Callback<AssessmentIntent>) -> Element {
    let QuestionVm {
        text,
        tag_label,
        input,
        explanation,
        ..
    } = question;

    rsx! {
        div { class: "question",
            span { class: "badge", "{tag_label}" }
            h3 { "{text}" }

            match input {
                AnswerInputVm::Choice(options) => rsx! {
                    ul { class: "options",
                        for option in options {
                            li { key: "{option.id}",
                                button {
                                    class: "{option_class(option.selected)}",
                                    onclick: move |_| on_intent.call(AssessmentIntent::Choose(option.id)),
                                    "{option.label}"
                                }
                            }
                        }
                    }
                },
                AnswerInputVm::Scale { min, max, value, min_label, max_label, value_label } => rsx! {
                    div { class: "scale",
                        div { class: "scale-points",
                            for point in min..=max {
                                button {
                                    key: "{point}",
                                    class: "{option_class(value == Some(point))}",
                                    onclick: move |_| on_intent.call(AssessmentIntent::Rate(point)),
                                    "{point}"
                                }
                            }
                        }
                        div { class: "row muted",
                            span { "{min_label}" }
                            span { "{max_label}" }
                        }
                        match value_label {
                            Some(label) => rsx! { p { class: "scale-value", "Selected: {label}" } },
                            None => rsx! { p { class: "muted", "Pick a point on the scale" } },
                        }
                    }
                },
            }

            if let Some(explanation) = explanation {
                div { class: "explanation",
                    h5 { "Explanation:" }
                    p { "{explanation}" }
                }
            }
        }
    }
}
