use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{ResultsEntry, ResultsVm, ScoreRowVm, results_entry};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    // The handoff slot is taken exactly once per visit.
    let entry = use_hook(|| results_entry(ctx.take_completed(), &ctx.results()));
    let redirect = matches!(entry, ResultsEntry::Redirect);

    use_effect(move || {
        if redirect {
            log::debug!("no completed assessment, back to landing");
            let _ = navigator.replace(Route::Home {});
        }
    });

    match entry {
        ResultsEntry::Redirect => rsx! {
            div { class: "page",
                p { class: "muted", "Redirecting..." }
            }
        },
        ResultsEntry::Ready(vm) => rsx! {
            ReportPage { vm: *vm }
        },
    }
}

#[component]
fn ReportPage(vm: ResultsVm) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut export = use_signal(|| None::<Result<String, ViewError>>);

    let on_download = {
        let report = vm.report().clone();
        move |_: MouseEvent| {
            let json = ctx.results().export_json(&report).map_err(|err| {
                log::warn!("report export failed: {err}");
                ViewError::Unknown
            });
            export.set(Some(json));
        }
    };

    rsx! {
        div { class: "page results",
            div { class: "row",
                h2 { "Assessment Results" }
                button { id: "results-download", class: "btn outline", onclick: on_download, "Download" }
            }

            div { class: "card overall",
                div { class: "score-circle", "{vm.overall}" }
                h3 { "Your Legal UX Fit Score" }
                span { class: "{vm.tier_class}", "{vm.tier_label}" }
                p { "{vm.tier_summary}" }
            }

            div { class: "grid results-grid",
                div { class: "main",
                    div { class: "card",
                        h3 { "Assessment Breakdown" }
                        for row in vm.sections.iter().cloned() {
                            ScoreRow { row }
                        }
                        h4 { "Technical Categories" }
                        for row in vm.technical_categories.iter().cloned() {
                            ScoreRow { row }
                        }
                        h4 { "WISCAR Framework Scores" }
                        div { class: "grid two",
                            for row in vm.wiscar.iter().cloned() {
                                ScoreRow { row }
                            }
                        }
                    }

                    div { class: "card",
                        h3 { "Recommended Career Paths" }
                        p { class: "muted",
                            "Based on your assessment results, here are your best-fit career opportunities"
                        }
                        for path in vm.career_paths.iter() {
                            div { class: "path", key: "{path.title}",
                                div { class: "row",
                                    h4 { "{path.title}" }
                                    span { class: "badge outline", "{path.match_label}" }
                                }
                                p { class: "muted", "{path.description}" }
                                progress { max: "100", value: "{path.match_percent}" }
                            }
                        }
                    }
                }

                div { class: "sidebar",
                    div { class: "card",
                        h3 { class: "good", "Key Strengths" }
                        if vm.strengths.is_empty() {
                            p { class: "muted", "No standout strengths yet." }
                        }
                        ul {
                            for strength in vm.strengths.iter() {
                                li { "{strength}" }
                            }
                        }
                    }
                    div { class: "card",
                        h3 { class: "warn", "Development Areas" }
                        if vm.development_areas.is_empty() {
                            p { class: "muted", "No major gaps found." }
                        }
                        ul {
                            for area in vm.development_areas.iter() {
                                li { "{area}" }
                            }
                        }
                    }
                    div { class: "card",
                        h3 { "Recommended Next Steps" }
                        ol {
                            for step in vm.next_steps.iter() {
                                li { "{step}" }
                            }
                        }
                    }
                }
            }

            div { class: "card cta",
                h3 { "Ready to Start Your Legal UX Journey?" }
                p { "{vm.closing_message}" }
                button {
                    id: "results-retake",
                    class: "btn secondary",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Assessment {});
                    },
                    "Retake Assessment"
                }
            }

            match export() {
                Some(Ok(json)) => rsx! { pre { class: "export", "{json}" } },
                Some(Err(err)) => rsx! { p { class: "error", "{err.message()}" } },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn ScoreRow(row: ScoreRowVm) -> Element {
    rsx! {
        div { class: "score-row",
            div { class: "row",
                span { "{row.label}" }
                strong { "{row.score}%" }
            }
            progress { max: "100", value: "{row.score}" }
            if let Some(caption) = row.caption {
                p { class: "muted", "{caption}" }
            }
        }
    }
}
