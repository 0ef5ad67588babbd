use chrono::{Datelike, Local};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::mockup::UiMockup;
use crate::config;
use crate::effects::parallax::ParallaxController;
use crate::effects::reveal::RevealObserver;
use crate::effects::smooth_scroll::SmoothScroll;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub delay: u32,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card will-animate" data-animate="true" data-delay={props.delay.to_string()}>
            <div class="feature-icon">{props.icon}</div>
            <h3>{props.title}</h3>
            <p>{props.description}</p>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"V"}</span>
                    {"Vetori"}
                </div>
                <div class="footer-links">
                    <a href="https://docs.vetori.io" target="_blank" rel="noopener noreferrer">{"Documentation"}</a>
                    <a href="https://twitter.com/vetori" target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                    <a href="https://github.com/vetori" target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                </div>
                <div class="footer-copyright">
                    {format!("© {} Vetori Inc.", year)}
                </div>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Install the scroll effects once the sections are in the DOM; tear them
    // down when the route changes so a remount starts from a clean slate.
    {
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                window.scroll_to_with_x_and_y(0.0, 0.0);

                let reveal = RevealObserver::install(&document);
                let parallax = ParallaxController::install(&window, &document);
                let smooth = SmoothScroll::install(&document);
                move || {
                    drop(reveal);
                    drop(parallax);
                    drop(smooth);
                }
            },
            (),
        );
    }

    let on_signup = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&config::signup_url());
        }
    });

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-glow"></div>
                <div class="hero-content">
                    <span class="hero-badge">{"✦ The Narrative OS for Data"}</span>
                    <h1 class="hero-title">
                        {"Don't just show data."}
                        <br />
                        <span class="hero-gradient">{"Tell the story."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Turn complex network and geospatial datasets into cinematic, \
                          interactive experiences. Move beyond static dashboards to \
                          narrative intelligence."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="cta-primary" onclick={on_signup.clone()}>
                            {"Start Building"}
                            <i class="arrow">{"→"}</i>
                        </button>
                        <a href="#features" class="cta-secondary">
                            {"▶ View Demo"}
                        </a>
                    </div>
                </div>
                <div class="hero-visual" data-parallax="true">
                    <UiMockup />
                </div>
            </header>

            <section id="features" class="features">
                <div class="section-header will-animate" data-animate="true">
                    <h2>{"A complete Narrative OS"}</h2>
                    <p>{"Vetori combines a powerful graph database engine with a cinematic presentation layer."}</p>
                </div>
                <div class="feature-grid">
                    <FeatureCard
                        icon="🗄️"
                        delay={100}
                        title="Graph Native"
                        description="Import nodes and edges directly. Vetori understands relationships, not just rows and columns."
                    />
                    <FeatureCard
                        icon="🧩"
                        delay={200}
                        title="Smart Slides"
                        description="Automatically generate slide sequences from your data using expander templates. Turn 1,000 rows into a guided tour instantly."
                    />
                    <FeatureCard
                        icon="🗺️"
                        delay={300}
                        title="Cinematic Camera"
                        description="Direct the viewer's attention. Pan, zoom, and focus on specific data points with keyframe animation control."
                    />
                    <FeatureCard
                        icon="⚡"
                        delay={400}
                        title="Narrative Intelligence"
                        description="Auto-calculated pacing based on reading speed (WPM). The presentation waits for the user to read before moving on."
                    />
                    <FeatureCard
                        icon="🌐"
                        delay={500}
                        title="Embed Anywhere"
                        description="Publish to the web with a single click. Embed interactive stories into your existing website or Notion docs."
                    />
                    <FeatureCard
                        icon="🔗"
                        delay={600}
                        title="Live Updates"
                        description="Update your data source, and your published stories update automatically. No need to redeploy."
                    />
                </div>
            </section>

            <section id="pricing" class="cta-section">
                <div class="cta-content will-animate" data-animate="true">
                    <h2>{"Ready to tell your story?"}</h2>
                    <p>
                        {"Join forward-thinking teams using Vetori to visualize supply chains, \
                          investigative data, and complex networks."}
                    </p>
                    <div class="cta-group">
                        <button class="cta-primary cta-large" onclick={on_signup}>
                            {"Get Started for Free"}
                        </button>
                        <a href="mailto:sales@vetori.io" class="cta-secondary cta-large">
                            {"Contact Sales"}
                        </a>
                    </div>
                    <p class="cta-note">{"No credit card required for free tier."}</p>
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .landing-page {
                    overflow-x: hidden;
                }

                .hero {
                    position: relative;
                    padding: 9rem 1.5rem 8rem;
                    text-align: center;
                    overflow: hidden;
                }

                .hero-glow {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    background: radial-gradient(ellipse at top, rgba(110, 118, 255, 0.2), #0d1117 60%);
                }

                .hero-content {
                    max-width: 56rem;
                    margin: 0 auto 5rem;
                }

                .hero-badge {
                    display: inline-block;
                    margin-bottom: 1.5rem;
                    padding: 0.375rem 1rem;
                    font-size: 0.875rem;
                    color: #6e76ff;
                    border: 1px solid rgba(110, 118, 255, 0.3);
                    border-radius: 999px;
                    background: rgba(110, 118, 255, 0.05);
                }

                .hero-title {
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    font-weight: 800;
                    letter-spacing: -0.025em;
                    line-height: 1.1;
                    margin-bottom: 2rem;
                }

                .hero-gradient {
                    background: linear-gradient(90deg, #6e76ff, #a855f7);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #8b949e;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }

                .hero-visual {
                    position: relative;
                    z-index: 1;
                    will-change: opacity, transform;
                }

                .features {
                    padding: 6rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(22, 27, 34, 0.3);
                }

                .section-header {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                }

                .section-header h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .section-header p {
                    font-size: 1.125rem;
                    color: #8b949e;
                }

                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .cta-section {
                    padding: 6rem 1.5rem;
                    background: rgba(110, 118, 255, 0.05);
                    text-align: center;
                }

                .cta-content h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .cta-content > p {
                    font-size: 1.25rem;
                    color: #8b949e;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }

                .cta-note {
                    margin-top: 1.5rem;
                    font-size: 0.875rem;
                    color: #8b949e;
                }

                @media (max-width: 768px) {
                    .hero {
                        padding: 7rem 1rem 5rem;
                    }

                    .hero-subtitle {
                        font-size: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
