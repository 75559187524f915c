use std::rc::Rc;

use chrono::Datelike;
use log::{error, info};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod icons;
mod scroll;
mod selection;
mod sections;

use catalog::{Catalog, CompanyInfo};
use sections::{contact::{tel_href, Contact}, services::Services};

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
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub company_name: String,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLL_THRESHOLD;

    let go_to = |anchor: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll::scroll_to_anchor(anchor);
        })
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {&props.company_name}
                </Link<Route>>
                <div class="nav-right">
                    <a class="nav-link" href={format!("#{}", config::SERVICES_ANCHOR)} onclick={go_to(config::SERVICES_ANCHOR)}>
                        {"Услуги"}
                    </a>
                    <a class="nav-link" href={format!("#{}", config::CONTACT_ANCHOR)} onclick={go_to(config::CONTACT_ANCHOR)}>
                        {"Контакты"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    company: CompanyInfo,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <p>{format!("© {} {}", year, props.company.name)}</p>
            <a href={tel_href(&props.company.phone)}>{&props.company.phone}</a>
        </footer>
    }
}

#[function_component(Home)]
fn home() -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();

    html! {
        <>
            <Nav company_name={catalog.company.name.clone()} />
            <main class="home-page">
                <Services catalog={catalog.clone()} />
                <Contact company={catalog.company.clone()} />
            </main>
            <Footer company={catalog.company.clone()} />
        </>
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Страница не найдена"}</h1>
            <Link<Route> to={Route::Home} classes="nav-link">
                {"На главную"}
            </Link<Route>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    catalog: Rc<Catalog>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<Catalog>> context={props.catalog.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #111827;
                    scroll-behavior: smooth;
                }
                h1, h2, h3, h4, p {
                    margin: 0;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 16px 0;
                    background: transparent;
                    transition: background 0.3s, box-shadow 0.3s;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 24px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #e8577e;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 24px;
                }
                .nav-link {
                    color: #374151;
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-link:hover {
                    color: #e8577e;
                }
                .home-page {
                    padding-top: 64px;
                }
                .section-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 24px;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 64px;
                }
                .section-header h2 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 16px;
                }
                .section-header p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    max-width: 672px;
                    margin: 0 auto;
                }
                .section-badge {
                    display: inline-block;
                    padding: 8px 16px;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 600;
                    margin-bottom: 16px;
                }
                .section-badge--pink {
                    background: #fdf2f8;
                    color: #e8577e;
                }
                .section-badge--blue {
                    background: #eff6ff;
                    color: #3b82f6;
                }
                .text-gradient {
                    background: linear-gradient(to right, #e8577e, #d9774b);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .site-footer {
                    padding: 32px 24px;
                    text-align: center;
                    background: #111827;
                    color: #9ca3af;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                }
                .site-footer a {
                    color: #ffffff;
                    text-decoration: none;
                }
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 24px;
                }
                @media (max-width: 768px) {
                    .section-header h2 {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </ContextProvider<Rc<Catalog>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    // Only fails when a logger is already installed
    let _ = console_log::init_with_level(config::get_log_level());

    let catalog = match Catalog::bundled() {
        Ok(catalog) => {
            info!("Loaded catalog with {} services", catalog.services.len());
            catalog
        }
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            Catalog::default()
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { catalog: Rc::new(catalog) }).render();
}
