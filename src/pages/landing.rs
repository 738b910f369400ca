use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::animation::{keyframes_css, Entrance};
use crate::components::demo_video::DemoVideo;
use crate::components::entrance::EntranceBlock;
use crate::components::header::Header;
use crate::components::icon::Icon;
use crate::config;
use crate::content::{numbered_steps, Icon as IconKind, FAQ_ITEMS, FEATURES};
use crate::navigation::{scroll_to_section, SectionRefs};
use crate::reveal::use_reveal_timer;
use crate::state::{LandingAction, LandingState, Section};
use crate::subscribe::{self, LogMailingList, MailingList};

/// Closes the mobile menu, then scrolls `section` into view.
fn navigate_to(dispatch: impl Fn(LandingAction), refs: &SectionRefs, section: Section) {
    dispatch(LandingAction::Navigate(section));
    scroll_to_section(refs, section);
}

/// Forwards the field value when it is a valid address. The field is reset either way.
fn submit_email<M: MailingList + ?Sized>(list: &M, field_value: &str) -> LandingAction {
    if let Ok(subscription) = subscribe::submit(list, field_value) {
        debug!("Forwarded signup for {}", subscription.email);
    }
    LandingAction::EmailSubmitted
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(LandingState::default);
    let refs = SectionRefs {
        features: use_node_ref(),
        how_to_use: use_node_ref(),
        faq: use_node_ref(),
    };

    use_reveal_timer(config::REVEAL_DELAY_MS, {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(LandingAction::Reveal))
    });

    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(LandingAction::ToggleMenu))
    };

    let on_navigate = {
        let dispatcher = state.dispatcher();
        let refs = refs.clone();
        Callback::from(move |section: Section| {
            navigate_to(|action| dispatcher.dispatch(action), &refs, section);
        })
    };

    let on_email_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                dispatcher.dispatch(LandingAction::SetEmail(input.value()));
            }
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(submit_email(&LogMailingList, &state.email));
        })
    };

    html! {
        <div class="landing-page" data-revealed={state.revealed.to_string()}>
            <Header
                menu_open={state.menu_open}
                on_toggle_menu={on_toggle_menu}
                on_navigate={on_navigate}
            />
            <main>
                // Hero
                <section class="hero">
                    <EntranceBlock class="hero-content">
                        <h1>{"Manage Your Tabs with Me-Tabs"}</h1>
                        <p class="hero-subtitle">
                            {"Streamline your browsing experience with our powerful Chrome extension. Organize, search, and manage your tabs effortlessly."}
                        </p>
                        <div class="hero-actions">
                            <a class="button" href={config::DOWNLOAD_URL}>
                                {"Download Me-Tabs"}
                                <Icon kind={IconKind::Download} class="icon-trailing" />
                            </a>
                            <button class="button outline">{"Learn More"}</button>
                        </div>
                    </EntranceBlock>
                </section>

                <section ref={refs.features.clone()} id={Section::Features.id()} class="features muted-bg">
                    <h2>{"Features"}</h2>
                    <div class="features-grid">
                        { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <EntranceBlock key={feature.title} entrance={Entrance::staggered(index)} class="feature-card">
                                <Icon kind={feature.icon} class="feature-icon" />
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </EntranceBlock>
                        }) }
                    </div>
                </section>

                <section class="demo">
                    <h2>{"See Me-Tabs in Action"}</h2>
                    <div class="video-frame">
                        <DemoVideo />
                    </div>
                </section>

                <section ref={refs.how_to_use.clone()} id={Section::HowToUse.id()} class="how-to-use">
                    <h2>{"How to Use Me-Tabs"}</h2>
                    <div class="steps-grid">
                        { for numbered_steps().map(|(number, step)| html! {
                            <EntranceBlock key={step.title} entrance={Entrance::staggered(number - 1)} class="step-card">
                                <div class="step-number">{number}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </EntranceBlock>
                        }) }
                    </div>
                </section>

                <section ref={refs.faq.clone()} id={Section::Faq.id()} class="faq muted-bg">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <div class="faq-grid">
                        { for FAQ_ITEMS.iter().enumerate().map(|(index, item)| html! {
                            <EntranceBlock key={item.question} entrance={Entrance::staggered(index)} class="faq-item">
                                <h3>{item.question}</h3>
                                <p>{item.answer}</p>
                            </EntranceBlock>
                        }) }
                    </div>
                </section>

                <section class="footer-cta">
                    <EntranceBlock class="cta-content">
                        <h2>{"Ready to Organize Your Tabs?"}</h2>
                        <p class="subtitle">
                            {"Join thousands of users who have streamlined their browsing experience with Me-Tabs."}
                        </p>
                        <form class="signup-form" onsubmit={on_submit}>
                            <input
                                type="email"
                                placeholder="Enter your email"
                                required=true
                                value={state.email.clone()}
                                oninput={on_email_input}
                            />
                            <button class="button" type="submit">
                                {"Subscribe"}
                                <Icon kind={IconKind::ArrowRight} class="icon-trailing" />
                            </button>
                        </form>
                        <p class="disclaimer">
                            {"Get notified about updates and be the first to get early access to new features."}
                        </p>
                    </EntranceBlock>
                </section>
            </main>
            <footer class="site-footer">
                <p>{format!("© {} Me-Tabs. All rights reserved.", config::COPYRIGHT_YEAR)}</p>
                <nav>
                    <a href="#">{"Terms of Service"}</a>
                    <a href="#">{"Privacy"}</a>
                </nav>
            </footer>
            <style>
                { keyframes_css() }
                {r#"
                    * { box-sizing: border-box; }
                    body {
                        margin: 0;
                        font-family: system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
                        color: #111827;
                        background: #ffffff;
                    }
                    .landing-page {
                        display: flex;
                        flex-direction: column;
                        min-height: 100vh;
                    }
                    .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .icon-trailing {
                        width: 1rem;
                        height: 1rem;
                        margin-left: 0.5rem;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        height: 3.5rem;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        background: #ffffff;
                        z-index: 50;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 700;
                        font-size: 1.25rem;
                        color: inherit;
                        text-decoration: none;
                    }
                    .nav-links {
                        margin-left: auto;
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-underline-offset: 4px;
                    }
                    .nav-link:hover {
                        text-decoration: underline;
                    }
                    .burger-menu {
                        display: none;
                        margin-left: auto;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        position: fixed;
                        left: 0;
                        right: 0;
                        top: 3.5rem;
                        padding: 1rem;
                        background: #ffffff;
                        z-index: 40;
                        opacity: 0;
                        transform: translateY(-10px);
                        visibility: hidden;
                        pointer-events: none;
                        transition: opacity 0.2s ease, transform 0.2s ease, visibility 0.2s;
                    }
                    .mobile-menu.open {
                        opacity: 1;
                        transform: translateY(0);
                        visibility: visible;
                        pointer-events: auto;
                    }
                    .mobile-links {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1rem;
                    }
                    main {
                        flex: 1;
                        padding-top: 3.5rem;
                    }
                    section {
                        width: 100%;
                        padding: 6rem 1.5rem;
                    }
                    section h2 {
                        text-align: center;
                        font-size: 2.5rem;
                        letter-spacing: -0.03em;
                        margin: 0 0 3rem;
                    }
                    .muted-bg {
                        background: #f3f4f6;
                    }
                    .hero {
                        padding: 12rem 1.5rem;
                    }
                    .hero-content, .cta-content {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        gap: 1rem;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        letter-spacing: -0.04em;
                        margin: 0;
                    }
                    .hero-subtitle, .subtitle {
                        max-width: 700px;
                        color: #6b7280;
                        font-size: 1.25rem;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                    }
                    .button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0.5rem 1rem;
                        border-radius: 0.375rem;
                        border: 1px solid #111827;
                        background: #111827;
                        color: #ffffff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .button.outline {
                        background: transparent;
                        color: #111827;
                    }
                    .features-grid, .steps-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2.5rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .faq-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .feature-card, .step-card {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        padding: 1rem;
                        border-radius: 0.5rem;
                    }
                    .step-card {
                        border: 1px solid #e5e7eb;
                    }
                    .feature-icon {
                        width: 2rem;
                        height: 2rem;
                        color: #3b82f6;
                    }
                    .feature-card p, .step-card p, .faq-item p {
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    .step-number {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: #3b82f6;
                        color: #ffffff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        font-size: 1.25rem;
                    }
                    .video-frame {
                        max-width: 1100px;
                        margin: 0 auto;
                        aspect-ratio: 16 / 9;
                        border-radius: 0.75rem;
                        overflow: hidden;
                    }
                    .demo-video {
                        width: 100%;
                        height: 100%;
                    }
                    .footer-cta {
                        border-top: 1px solid #e5e7eb;
                    }
                    .signup-form {
                        display: flex;
                        gap: 0.5rem;
                        width: 100%;
                        max-width: 24rem;
                    }
                    .signup-form input {
                        flex: 1;
                        padding: 0.5rem 0.75rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                    }
                    .disclaimer {
                        font-size: 0.75rem;
                        color: #6b7280;
                    }
                    .site-footer {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1.5rem;
                        border-top: 1px solid #e5e7eb;
                        font-size: 0.75rem;
                        color: #6b7280;
                    }
                    .site-footer nav {
                        margin-left: auto;
                        display: flex;
                        gap: 1.5rem;
                    }
                    .site-footer a {
                        color: inherit;
                        text-underline-offset: 4px;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .hero {
                            padding: 3rem 1rem;
                        }
                        .hero h1 {
                            font-size: 2rem;
                        }
                        .features-grid, .steps-grid, .faq-grid {
                            grid-template-columns: 1fr;
                        }
                        .site-footer {
                            flex-direction: column;
                        }
                        .site-footer nav {
                            margin-left: 0;
                        }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
