use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod data;
mod components {
    pub mod contact;
    pub mod fade_in;
    pub mod footer;
    pub mod match_card;
    pub mod player_card;
    pub mod stat_feature;
}
mod pages {
    pub mod home;
}

use pages::home::{scroll_to_section, Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("Матчи", "matches"),
    ("Игроки", "players"),
    ("Статистика", "stats"),
    ("О нас", "about"),
];

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
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
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

    // Selecting a section closes the mobile menu before scrolling there.
    let section_link = {
        let menu_open = menu_open.clone();
        move |target: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                scroll_to_section(target);
            })
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(2, 6, 23, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(30, 41, 59, 0.5);
                    transition: box-shadow 0.3s;
                }
                .top-nav.scrolled {
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.5rem;
                    font-weight: 900;
                    color: #fff;
                    letter-spacing: -0.02em;
                    cursor: pointer;
                }
                .nav-logo-mark {
                    width: 40px;
                    height: 40px;
                    background: linear-gradient(135deg, #f59e0b, #ea580c);
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                }
                .nav-logo .accent { color: #f59e0b; }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                    color: #cbd5e1;
                    font-size: 1rem;
                    font-weight: 500;
                    transition: color 0.3s;
                }
                .nav-link:hover { color: #f59e0b; }
                .nav-search {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #cbd5e1;
                    font-size: 1.125rem;
                    transition: color 0.3s;
                }
                .nav-search:hover { color: #fff; }
                .nav-login-button {
                    background: #f59e0b;
                    color: #020617;
                    border: none;
                    border-radius: 8px;
                    padding: 0.625rem 1.5rem;
                    font-weight: 700;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .nav-login-button:hover {
                    background: #d97706;
                    transform: scale(1.05);
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #fff;
                    margin: 5px 0;
                    transition: all 0.3s;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: block; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1rem;
                        background: rgba(2, 6, 23, 0.98);
                        border-bottom: 1px solid rgba(30, 41, 59, 0.5);
                        padding: 1.5rem;
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                    .nav-right .nav-login-button { width: 100%; }
                }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <div class="nav-logo-mark">{"🎯"}</div>
                    <span>{"CS:GO"}<span class="accent">{"HUB"}</span></span>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    {
                        NAV_SECTIONS.iter().map(|&(label, target)| {
                            html! {
                                <button key={target} class="nav-link" onclick={section_link(target)}>
                                    {label}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                    <button class="nav-search" title="Поиск">{"🔍"}</button>
                    <button class="nav-login-button">{"Войти"}</button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Readable panics in the browser console.
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
