use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{SectionId, NAV_LINKS};
use crate::navigation::MenuState;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub menu: MenuState,
    pub on_toggle_theme: Callback<()>,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        theme,
        menu,
        on_toggle_theme,
        on_toggle_menu,
        on_navigate,
    } = props;

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    // Anchors keep their default scroll; the menu just closes.
    let close_menu = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(()))
    };

    let theme_icon = if theme.is_dark() { Icon::Sun } else { Icon::Moon };
    let menu_icon = if menu.is_open() { Icon::X } else { Icon::Menu };

    let links = |item_class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|link| {
                html! {
                    <a href={link.href()} class={item_class} onclick={close_menu.clone()}>
                        {link.label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <nav class="top-nav" data-section={SectionId::Nav.key()}>
            <div class="nav-content">
                <img src="/assets/logo.png" alt="N-Track" class="nav-logo" />
                <div class="nav-links">
                    { links("nav-link") }
                    <button class="icon-button" aria-label="Toggle theme" onclick={toggle_theme.clone()}>
                        <IconView icon={theme_icon} size={18} />
                    </button>
                </div>
                <div class="nav-compact">
                    <button class="icon-button" aria-label="Toggle theme" onclick={toggle_theme}>
                        <IconView icon={theme_icon} size={18} />
                    </button>
                    <button class="icon-button burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                        <IconView icon={menu_icon} size={24} />
                    </button>
                </div>
            </div>
            {
                if menu.is_open() {
                    html! {
                        <div class="mobile-menu">
                            { links("mobile-link") }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
