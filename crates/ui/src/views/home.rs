use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
    points: [&'static str; 3],
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Psychometric Evaluation",
        description: "Assess personality traits, cognitive styles, and motivational alignment \
                      with Legal UX roles",
        points: [
            "Big 5 Personality Assessment",
            "Holland Career Codes",
            "Motivation & Grit Analysis",
        ],
    },
    Feature {
        title: "Technical Readiness",
        description: "Evaluate your current skills and aptitude for Legal UX specialist \
                      requirements",
        points: [
            "UX Design Fundamentals",
            "Legal Domain Knowledge",
            "Analytical Reasoning",
        ],
    },
    Feature {
        title: "WISCAR Framework",
        description: "Comprehensive skill mapping across Will, Interest, Skill, Cognitive \
                      ability, Ability to learn, and Real-world alignment",
        points: [
            "Personalized Skill Gap Analysis",
            "Career Path Recommendations",
            "Learning Roadmap",
        ],
    },
];

const RESPONSIBILITIES: [(&str, &str); 3] = [
    (
        "User Research & Analysis",
        "Conduct research on legal professionals' workflows and pain points",
    ),
    (
        "Design & Prototyping",
        "Create user-friendly interfaces for legal software and platforms",
    ),
    (
        "Compliance Integration",
        "Ensure designs meet legal industry regulations and standards",
    ),
];

const PATHWAYS: [(&str, &str); 3] = [
    ("Legal UX Designer", "Focus on designing user-friendly legal software"),
    ("Compliance UX Analyst", "Ensure design compliance with legal standards"),
    ("Legal Product Manager", "Lead product development for legal tech solutions"),
];

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let skip_landing = use_hook(|| ctx.take_skip_landing());

    use_effect(move || {
        if skip_landing {
            log::debug!("skipping landing page");
            let _ = navigator.replace(Route::Assessment {});
        }
    });

    rsx! {
        div { class: "page home",
            section { class: "hero",
                span { class: "badge accent", "Comprehensive Career Assessment" }
                h1 {
                    "Comprehensive Career Readiness & Skill Fit Assessment for "
                    span { class: "highlight", "Legal UX Specialist" }
                }
                p { class: "lead",
                    "Discover if you're ready for a career in Legal UX. Evaluate your psychometric \
                     fit, technical readiness, and career alignment with personalized insights."
                }
                ul { class: "facts",
                    li { "20-30 minutes" }
                    li { "Three sections" }
                    li { "Personalized results" }
                }
                button {
                    id: "home-start",
                    class: "btn primary",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Assessment {});
                    },
                    "Start Assessment"
                }
            }

            section { class: "features",
                h2 { "What You'll Discover" }
                div { class: "grid",
                    for feature in FEATURES.iter() {
                        div { class: "card", key: "{feature.title}",
                            h3 { "{feature.title}" }
                            p { class: "muted", "{feature.description}" }
                            ul {
                                for point in feature.points {
                                    li { "{point}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "role",
                h2 { "About Legal UX Specialist Role" }
                div { class: "grid two",
                    div { class: "card",
                        h3 { "Core Responsibilities" }
                        for (title, text) in RESPONSIBILITIES {
                            h4 { "{title}" }
                            p { class: "muted", "{text}" }
                        }
                    }
                    div { class: "card",
                        h3 { "Career Pathways" }
                        for (title, text) in PATHWAYS {
                            h4 { "{title}" }
                            p { class: "muted", "{text}" }
                        }
                    }
                }
            }

            section { class: "cta",
                h2 { "Ready to Discover Your Legal UX Potential?" }
                button {
                    class: "btn secondary",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Assessment {});
                    },
                    "Start Your Assessment Now"
                }
            }
        }
    }
}
