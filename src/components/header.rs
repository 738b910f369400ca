use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::icon::Icon;
use crate::content::Icon as IconKind;
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<Section>,
}

fn section_links(on_navigate: &Callback<Section>) -> Html {
    Section::ALL
        .iter()
        .map(|&section| {
            let on_navigate = on_navigate.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(section);
            });
            html! {
                <button key={section.id()} class="nav-link" {onclick}>
                    {section.label()}
                </button>
            }
        })
        .collect()
}

/// Fixed top bar: brand, desktop section links, and the mobile hamburger menu.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { menu_open, on_toggle_menu, on_navigate } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let menu_class = classes!("mobile-menu", (*menu_open).then(|| "open"));

    html! {
        <>
            <header class="top-nav">
                <a class="nav-logo" href="#">
                    <Icon kind={IconKind::Layers} />
                    <span>{"Me-Tabs"}</span>
                </a>
                <nav class="nav-links">
                    { section_links(on_navigate) }
                </nav>
                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <Icon kind={if *menu_open { IconKind::Close } else { IconKind::Menu }} />
                </button>
            </header>
            <div class={menu_class} aria-hidden={(!*menu_open).to_string()}>
                <nav class="mobile-links">
                    { section_links(on_navigate) }
                </nav>
            </div>
        </>
    }
}
