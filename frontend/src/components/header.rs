use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{FIRM, NAV_ITEMS};
use crate::controllers::menu::{MenuAction, MenuState};
use crate::listeners::{is_mobile_viewport, listen, scroll_y, BodyScrollLock};

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_reducer(MenuState::default);

    {
        let menu = menu.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = listen("scroll", move || {
                    menu.dispatch(MenuAction::Scrolled(scroll_y()));
                });
                if let Some(listener) = &listener {
                    listener.fire();
                }
                move || drop(listener)
            },
            (),
        );
    }

    {
        let menu = menu.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = listen("resize", move || {
                    menu.dispatch(MenuAction::Viewport {
                        mobile: is_mobile_viewport(),
                    });
                });
                if let Some(listener) = &listener {
                    listener.fire();
                }
                move || drop(listener)
            },
            (),
        );
    }

    // Lock page scroll behind the open mobile menu.
    use_effect_with_deps(
        move |locked| {
            let lock = if *locked { BodyScrollLock::acquire() } else { None };
            move || drop(lock)
        },
        menu.locks_scroll(),
    );

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // Links keep their default action so the anchor jump still happens.
    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| {
            debug!("nav link activated, closing menu");
            menu.dispatch(MenuAction::Close);
        })
    };

    let open = menu.is_open();

    html! {
        <header id="top" class={classes!("site-header", menu.is_scrolled().then(|| "scrolled"))}>
            <div class="header-content">
                <a href="#top" class="header-logo">
                    <div class="logo-mark">{FIRM.monogram}</div>
                    <div class="logo-text">
                        <span class="logo-name">{FIRM.name}</span>
                        <span class="logo-tagline">{FIRM.tagline}</span>
                    </div>
                </a>

                <nav class="header-nav">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a key={item.href} href={item.href} class="nav-link">{item.label}</a>
                    }) }
                </nav>

                <div class="header-contact">
                    <a href={FIRM.phone_href} class="phone-button">
                        <span class="icon">{"📞"}</span>
                        <span>{FIRM.phone_display}</span>
                    </a>
                    <a href={format!("mailto:{}", FIRM.email)} class="mail-button" aria-label="שלח אימייל">
                        {"✉️"}
                    </a>
                </div>

                <button
                    class={classes!("burger-menu", open.then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label={if open { "סגור תפריט" } else { "פתח תפריט" }}
                    aria-expanded={open.to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            if open {
                <div class="mobile-menu">
                    <nav class="mobile-nav">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a key={item.href} href={item.href} class="mobile-link" onclick={close_menu.clone()}>
                                {item.label}
                            </a>
                        }) }
                        <div class="mobile-contact">
                            <a href={FIRM.phone_href} class="phone-button" onclick={close_menu.clone()}>
                                <span class="icon">{"📞"}</span>
                                <span>{FIRM.phone_display}</span>
                            </a>
                            <a
                                href={format!("mailto:{}", FIRM.email)}
                                class="mail-button wide"
                                aria-label="שלח אימייל"
                                onclick={close_menu.clone()}
                            >
                                <span class="icon">{"✉️"}</span>
                                <span>{FIRM.email}</span>
                            </a>
                        </div>
                    </nav>
                </div>
            }

            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                    transition: all 0.3s ease;
                }

                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    box-shadow: var(--shadow-neumorphic);
                }

                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    animation: fadeIn 0.5s ease-out;
                }

                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                }

                .logo-mark {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: linear-gradient(135deg, var(--primary), var(--primary-light));
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: var(--shadow-neumorphic-sm);
                }

                .logo-text {
                    display: flex;
                    flex-direction: column;
                }

                .logo-name {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1f2937;
                }

                .logo-tagline {
                    font-size: 0.75rem;
                    color: #4b5563;
                }

                .header-nav {
                    display: flex;
                    gap: 0.25rem;
                }

                .nav-link {
                    padding: 0.5rem 0.75rem;
                    color: #374151;
                    border-radius: 6px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }

                .nav-link:hover {
                    color: var(--primary);
                    background: rgba(243, 244, 246, 0.5);
                }

                .header-contact {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .phone-button,
                .mail-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border-radius: 9999px;
                    padding: 0.5rem 1rem;
                    text-decoration: none;
                    box-shadow: var(--shadow-neumorphic-sm);
                    transition: all 0.3s ease;
                }

                .phone-button {
                    background: var(--primary);
                    color: #fff;
                }

                .phone-button:hover {
                    background: var(--primary-dark);
                }

                .mail-button {
                    background: #fff;
                    color: var(--secondary);
                    border: 1px solid rgba(255, 107, 107, 0.2);
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    padding: 0.6rem;
                    border: none;
                    border-radius: 50%;
                    background: #fff;
                    box-shadow: var(--shadow-neumorphic-sm);
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: var(--primary);
                    transition: transform 0.2s ease, opacity 0.2s ease;
                }

                .burger-menu:active {
                    transform: scale(0.95);
                }

                .burger-menu.open span {
                    background: var(--secondary);
                }

                .burger-menu.open span:nth-child(1) {
                    transform: translateY(6px) rotate(45deg);
                }

                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }

                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-6px) rotate(-45deg);
                }

                .mobile-menu {
                    display: none;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    animation: menuOpen 0.3s ease-in-out;
                    overflow: hidden;
                }

                .mobile-nav {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 1rem;
                }

                .mobile-link {
                    padding: 0.75rem 1rem;
                    color: #374151;
                    border-radius: 8px;
                    font-weight: 500;
                    text-decoration: none;
                }

                .mobile-link:hover {
                    color: var(--primary);
                    background: rgba(243, 244, 246, 0.8);
                }

                .mobile-contact {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-top: 1rem;
                    padding-top: 1rem;
                    border-top: 1px solid #e5e7eb;
                }

                .mobile-contact a {
                    padding: 0.75rem 1rem;
                }

                @keyframes menuOpen {
                    from { opacity: 0; max-height: 0; }
                    to { opacity: 1; max-height: 600px; }
                }

                @media (max-width: 768px) {
                    .header-nav,
                    .header-contact {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }

                    .mobile-menu {
                        display: block;
                    }
                }
                "#}
            </style>
        </header>
    }
}
