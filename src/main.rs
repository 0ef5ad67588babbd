use log::{info, Level};
use stylist::{css, yew::Global};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod mockup;
}
mod effects {
    pub mod parallax;
    pub mod reveal;
    pub mod smooth_scroll;
}
mod pages {
    pub mod home;
    pub mod home_new;
}

use pages::{home::Home, home_new::HomeNew};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/new")]
    HomeNew,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::HomeNew => {
            info!("Rendering HomeNew page");
            html! { <HomeNew /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let on_sign_in = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&config::login_url());
        }
    });

    let on_get_started = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&config::signup_url());
        }
    });

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark">{"V"}</span>
                    {"Vetori"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={close_menu.clone()}>
                        {"Features"}
                    </a>
                    <a href="#solutions" class="nav-link" onclick={close_menu.clone()}>
                        {"Solutions"}
                    </a>
                    <a href="#pricing" class="nav-link" onclick={close_menu}>
                        {"Pricing"}
                    </a>
                    <button class="nav-login-button" onclick={on_sign_in}>
                        {"Sign In"}
                    </button>
                    <button class="nav-cta-button" onclick={on_get_started}>
                        {"Get Started"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global css={css!(r#"
                html, body, h1, h2, h3, p, ul, button {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                body {
                    background: #0d1117;
                    color: #e6edf3;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                    -webkit-font-smoothing: antialiased;
                }

                ::selection {
                    background: rgba(110, 118, 255, 0.25);
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(13, 17, 23, 0.6);
                    backdrop-filter: blur(12px);
                    transition: background 0.3s ease, border-color 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(13, 17, 23, 0.92);
                    border-bottom-color: rgba(255, 255, 255, 0.1);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    height: 4rem;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    font-size: 1.25rem;
                    letter-spacing: -0.025em;
                    color: #e6edf3;
                    text-decoration: none;
                }

                .nav-logo-mark {
                    width: 2rem;
                    height: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.5rem;
                    background: #6e76ff;
                    color: #fff;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #8b949e;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #e6edf3;
                }

                .nav-login-button {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #e6edf3;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .nav-cta-button {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #fff;
                    background: #6e76ff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .nav-cta-button:hover {
                    background: #5a62f0;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #e6edf3;
                    border-radius: 1px;
                }

                .will-animate {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .will-animate.animate-in {
                    opacity: 1;
                    transform: translateY(0);
                }

                .cta-primary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.875rem 2rem;
                    font-size: 1rem;
                    font-weight: 600;
                    color: #fff;
                    background: #6e76ff;
                    border: none;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    transition: background 0.2s ease, transform 0.2s ease;
                }

                .cta-primary:hover {
                    background: #5a62f0;
                    transform: translateY(-2px);
                }

                .cta-primary .arrow {
                    font-style: normal;
                    transition: transform 0.2s ease;
                }

                .cta-primary:hover .arrow {
                    transform: translateX(4px);
                }

                .cta-secondary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.875rem 2rem;
                    font-size: 1rem;
                    font-weight: 600;
                    color: #e6edf3;
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 0.75rem;
                    text-decoration: none;
                    cursor: pointer;
                    transition: border-color 0.2s ease;
                }

                .cta-secondary:hover {
                    border-color: rgba(255, 255, 255, 0.45);
                }

                .cta-large {
                    padding: 1.125rem 2.5rem;
                    font-size: 1.125rem;
                }

                .hero-cta-group,
                .cta-group {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .hero-split-copy .hero-cta-group {
                    justify-content: flex-start;
                }

                .feature-card {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(22, 27, 34, 0.6);
                    text-align: left;
                    transition: border-color 0.3s ease;
                }

                .feature-card:hover {
                    border-color: rgba(110, 118, 255, 0.5);
                }

                .feature-icon {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    border-radius: 0.5rem;
                    background: rgba(110, 118, 255, 0.1);
                    margin-bottom: 1rem;
                }

                .feature-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }

                .feature-card p {
                    color: #8b949e;
                    line-height: 1.6;
                }

                .footer {
                    padding: 3rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(22, 27, 34, 0.6);
                }

                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    font-size: 1.25rem;
                }

                .footer-logo {
                    width: 1.5rem;
                    height: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.75rem;
                    border-radius: 0.25rem;
                    background: #6e76ff;
                    color: #fff;
                }

                .footer-links {
                    display: flex;
                    gap: 2rem;
                }

                .footer-links a {
                    font-size: 0.875rem;
                    color: #8b949e;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .footer-links a:hover {
                    color: #e6edf3;
                }

                .footer-copyright {
                    font-size: 0.875rem;
                    color: #8b949e;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        position: absolute;
                        top: 4rem;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: stretch;
                        padding: 1rem 1.5rem;
                        background: rgba(13, 17, 23, 0.97);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
            "#)} />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
