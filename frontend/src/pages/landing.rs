//! Landing page. Static content only.

use leptos::*;
use leptos_meta::Title;
use leptos_router::*;
use papercheck::site::{SIGNUP_PATH, UPLOAD_PATH};

use crate::APP_NAME;

struct Card {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Card; 4] = [
    Card {
        icon: "⚡",
        title: "Instant Results",
        description: "Get your paper checked within seconds using our advanced AI technology.",
    },
    Card {
        icon: "🎯",
        title: "Accurate Marking",
        description: "Our AI is trained on thousands of exam papers for precise evaluation.",
    },
    Card {
        icon: "🔒",
        title: "Secure & Private",
        description: "Your papers are encrypted and never shared with third parties.",
    },
    Card {
        icon: "💬",
        title: "Detailed Feedback",
        description: "Receive comprehensive feedback with improvement suggestions.",
    },
];

const STEPS: [Card; 3] = [
    Card {
        icon: "01",
        title: "Upload Your Paper",
        description: "Simply drag and drop your exam paper in PDF, JPG, or PNG format.",
    },
    Card {
        icon: "02",
        title: "AI Processing",
        description: "Our intelligent system analyzes your answers against marking schemes.",
    },
    Card {
        icon: "03",
        title: "Get Results",
        description: "Receive detailed marks breakdown and personalized feedback.",
    },
];

const STATS: [(&str, &str); 4] = [
    ("5,000+", "Active Students"),
    ("4.9/5", "User Rating"),
    ("50K+", "Papers Checked"),
    ("<30s", "Avg. Check Time"),
];

fn cards(items: &'static [Card], class: &'static str) -> impl IntoView {
    items
        .iter()
        .map(|card| {
            view! {
                <div class=class>
                    <div class="card-icon">{card.icon}</div>
                    <h3>{card.title}</h3>
                    <p>{card.description}</p>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <Title text=format!("{} • Instant O & A Level Paper Checking", APP_NAME)/>

        <section class="hero">
            <div class="container hero-inner">
                <span class="hero-badge">"✨ AI-Powered Paper Checking"</span>
                <h1>
                    "Instant O & A Level " <span class="gradient-text">"Paper Checking"</span>
                    " Powered by AI"
                </h1>
                <p class="hero-lead">
                    "Upload your exam papers and get instant, accurate feedback. Perfect for students preparing for exams and tutors streamlining their workflow."
                </p>
                <div class="hero-actions">
                    <A href=UPLOAD_PATH class="btn btn-hero">"Check Your Paper"</A>
                    <A href=SIGNUP_PATH class="btn btn-outline">"Create Free Account"</A>
                </div>
            </div>
        </section>

        <section class="container section">
            <h2 class="section-title">"How It Works"</h2>
            <div class="steps">{cards(&STEPS, "step-card")}</div>
        </section>

        <section class="container section">
            <h2 class="section-title">"Why Choose " {APP_NAME}</h2>
            <div class="features">{cards(&FEATURES, "feature-card")}</div>
        </section>

        <section class="container section audience">
            <div>
                <span class="section-eyebrow">"Who It's For"</span>
                <h2>"Built for Students & Tutors"</h2>
                <p>
                    "Whether you're a student preparing for exams or a tutor looking to streamline your marking process, "
                    {APP_NAME} " has you covered."
                </p>
                <div class="audience-item">
                    <h3>"For Students"</h3>
                    <p>"Practice with past papers and get instant feedback to identify areas for improvement before your exams."</p>
                </div>
                <div class="audience-item">
                    <h3>"For Tutors"</h3>
                    <p>"Save hours of marking time while providing your students with detailed, consistent feedback."</p>
                </div>
            </div>
            <div class="stats">
                {STATS
                    .iter()
                    .map(|(value, label)| view! {
                        <div class="stat">
                            <span class="stat-value">{*value}</span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="container section cta">
            <h2>"Ready to Ace Your Exams?"</h2>
            <p>
                "Join thousands of students and tutors already using " {APP_NAME}
                " to improve their exam performance."
            </p>
            <div class="hero-actions">
                <A href=UPLOAD_PATH class="btn btn-light">"Upload Your First Paper"</A>
                <A href=SIGNUP_PATH class="btn btn-outline-light">"Sign Up Free"</A>
            </div>
        </section>
    }
}
