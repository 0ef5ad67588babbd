use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::mockup::UiMockup;
use crate::config;
use crate::effects::parallax::ParallaxController;
use crate::effects::reveal::RevealObserver;
use crate::effects::smooth_scroll::SmoothScroll;
use crate::pages::home::{FeatureCard, Footer};

/// Alternate take on the landing page: side-by-side hero instead of the
/// stacked one, trimmed feature grid. Same effects, same copy source.
#[function_component(HomeNew)]
pub fn home_new() -> Html {
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
        <div class="landing-page landing-split">
            <header class="hero-split">
                <div class="hero-split-copy">
                    <span class="hero-badge">{"✦ The Narrative OS for Data"}</span>
                    <h1>
                        {"Don't just show data."}
                        <br />
                        <span class="hero-gradient">{"Tell the story."}</span>
                    </h1>
                    <p>
                        {"Turn complex network and geospatial datasets into cinematic, \
                          interactive experiences."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="cta-primary" onclick={on_signup.clone()}>
                            {"Start Building"}
                            <i class="arrow">{"→"}</i>
                        </button>
                        <a href="#features" class="cta-secondary">
                            {"See the features"}
                        </a>
                    </div>
                </div>
                <div class="hero-split-visual" data-parallax="true">
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
                        icon="🗺️"
                        delay={200}
                        title="Cinematic Camera"
                        description="Direct the viewer's attention. Pan, zoom, and focus on specific data points with keyframe animation control."
                    />
                    <FeatureCard
                        icon="🌐"
                        delay={300}
                        title="Embed Anywhere"
                        description="Publish to the web with a single click. Embed interactive stories into your existing website or Notion docs."
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
                    </div>
                    <p class="cta-note">{"No credit card required for free tier."}</p>
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .landing-split {
                    overflow-x: hidden;
                }

                .hero-split {
                    display: grid;
                    grid-template-columns: minmax(0, 5fr) minmax(0, 7fr);
                    align-items: center;
                    gap: 3rem;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 6rem;
                }

                .hero-split-copy {
                    text-align: left;
                }

                .hero-split-copy h1 {
                    font-size: clamp(2.5rem, 5vw, 3.5rem);
                    font-weight: 800;
                    letter-spacing: -0.025em;
                    line-height: 1.1;
                    margin: 1.5rem 0;
                }

                .hero-split-copy p {
                    font-size: 1.125rem;
                    color: #8b949e;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .hero-split-visual {
                    will-change: opacity, transform;
                }

                .landing-split .features {
                    padding: 6rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(22, 27, 34, 0.3);
                }

                .landing-split .section-header {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                }

                .landing-split .section-header h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .landing-split .section-header p {
                    font-size: 1.125rem;
                    color: #8b949e;
                }

                .landing-split .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .landing-split .cta-section {
                    padding: 6rem 1.5rem;
                    background: rgba(110, 118, 255, 0.05);
                    text-align: center;
                }

                .landing-split .cta-content h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .landing-split .cta-content > p {
                    font-size: 1.25rem;
                    color: #8b949e;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }

                .landing-split .cta-note {
                    margin-top: 1.5rem;
                    font-size: 0.875rem;
                    color: #8b949e;
                }

                .landing-split .hero-badge {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    font-size: 0.875rem;
                    color: #6e76ff;
                    border: 1px solid rgba(110, 118, 255, 0.3);
                    border-radius: 999px;
                    background: rgba(110, 118, 255, 0.05);
                }

                .landing-split .hero-gradient {
                    background: linear-gradient(90deg, #6e76ff, #a855f7);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                @media (max-width: 900px) {
                    .hero-split {
                        grid-template-columns: 1fr;
                        padding: 7rem 1rem 4rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
