//! Home page: hero, recent projects, testimonials, FAQ and a closing call to
//! action. All content is static.

use leptos::prelude::*;

use crate::components::book_call_button::BookCallButton;
use crate::components::button::{ButtonSize, ButtonVariant};

#[derive(Clone, Copy)]
struct Project {
    name: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        name: "Booking platform rebuild",
        summary: "Replaced a fragile legacy booking flow with a typed API and a fast, accessible front end.",
        tags: &["Architecture", "API design", "Performance"],
    },
    Project {
        name: "E-commerce scale-up",
        summary: "Untangled a slow checkout, added caching and observability, and cut page load times in half.",
        tags: &["Scaling", "Caching", "Observability"],
    },
    Project {
        name: "Internal tooling",
        summary: "Built reporting and admin tools that removed hours of manual spreadsheet work each week.",
        tags: &["Automation", "Dashboards"],
    },
];

#[derive(Clone, Copy)]
struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Martin got to the root of problems our previous agency had circled for months.",
        author: "Operations Director",
        role: "Hospitality group",
    },
    Testimonial {
        quote: "Clear communication, honest estimates, and a system that simply works.",
        author: "Founder",
        role: "Online retailer",
    },
];

#[derive(Clone, Copy)]
struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: &[Faq] = &[
    Faq {
        question: "What types of projects do you typically work on?",
        answer: "Web applications, APIs and the systems behind them: new builds, rescues of \
                 struggling projects, and performance or scaling work on existing platforms.",
    },
    Faq {
        question: "How do you charge for your services?",
        answer: "Most work is quoted as a fixed price per phase after a free consultation. \
                 Ongoing support is available on a monthly retainer.",
    },
    Faq {
        question: "How long does a typical project take?",
        answer: "Small fixes take days; larger builds usually run from four to twelve weeks. \
                 You get a timeline before any work starts.",
    },
    Faq {
        question: "Do you work with existing teams?",
        answer: "Yes. I often join an in-house team to unblock a problem, then hand over \
                 documentation so the team can carry on confidently.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <section class="hero">
                <h1>"Build, fix and scale your digital systems"</h1>
                <p class="hero__lead">
                    "I help businesses turn slow, fragile software into systems that are fast, \
                     reliable and easy to change."
                </p>
                <BookCallButton size=ButtonSize::Large/>
            </section>

            <section class="projects" aria-labelledby="projects-title">
                <h2 id="projects-title">"Recent Projects"</h2>
                <div class="projects__grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="project-card">
                                    <h3>{project.name}</h3>
                                    <p>{project.summary}</p>
                                    <ul class="project-card__tags">
                                        {project.tags.iter().map(|tag| view! { <li>{*tag}</li> }).collect_view()}
                                    </ul>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="testimonials" aria-labelledby="testimonials-title">
                <h2 id="testimonials-title">"What Clients Say"</h2>
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="testimonial">
                                <blockquote>{t.quote}</blockquote>
                                <figcaption>{t.author}", "{t.role}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="faq" aria-labelledby="faq-title">
                <h2 id="faq-title">"Frequently Asked Questions"</h2>
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(i, faq)| {
                        view! {
                            <details class="faq__item">
                                <summary id=format!("faq-question-{i}")>{faq.question}</summary>
                                <p aria-labelledby=format!("faq-question-{i}")>{faq.answer}</p>
                            </details>
                        }
                    })
                    .collect_view()}
                <div class="faq__more">
                    <p>"Still have questions?"</p>
                    <BookCallButton variant=ButtonVariant::Outline/>
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to talk about your project?"</h2>
                <p>"A free 30 minute call is the quickest way to find out if I can help."</p>
                <BookCallButton size=ButtonSize::Large/>
            </section>
        </main>
    }
}
