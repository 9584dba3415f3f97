use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{BUSINESS_HOURS, FIRM, LEGAL_LINKS, NAV_ITEMS, SOCIAL_LINKS};

fn copyright_line(year: i32) -> String {
    format!("© {} {}. כל הזכויות שמורות.", year, FIRM.name)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <a href="#top" class="footer-logo">
                        <span class="logo-mark">{FIRM.monogram}</span>
                        <span>{FIRM.name}</span>
                    </a>
                    <p class="footer-about">
                        {"משרד עורכי דין המתמחה בליווי משפטי לתעשיית המזון. אנו מעניקים שירות אישי ומקצועי לחברות מזון, יצרנים, יבואנים ומסעדות."}
                    </p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a
                                key={link.href}
                                href={link.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={link.label}
                            >
                                {link.glyph}
                            </a>
                        }) }
                    </div>
                </div>

                <div class="footer-column">
                    <h3>{"צור קשר"}</h3>
                    <ul>
                        <li><a href={FIRM.phone_href}>{FIRM.phone_display}</a></li>
                        <li><a href={format!("mailto:{}", FIRM.email)}>{FIRM.email}</a></li>
                        <li>{FIRM.street}</li>
                        <li>{FIRM.postal}</li>
                    </ul>
                </div>

                <div class="footer-column">
                    <h3>{"שעות פעילות"}</h3>
                    <ul>
                        { for BUSINESS_HOURS.iter().map(|slot| html! {
                            <li key={slot.days} class="hours-line">
                                <span>{slot.days}</span>
                                <span>{slot.hours}</span>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h3>{"קישורים מהירים"}</h3>
                    <ul>
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li key={item.href}><a href={item.href}>{item.label}</a></li>
                        }) }
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{copyright_line(year)}</p>
                <div class="legal-links">
                    { for LEGAL_LINKS.iter().map(|link| html! {
                        <a key={link.href} href={link.href}>{link.label}</a>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #1f2937;
                    color: #d1d5db;
                    padding: 4rem 1rem 2rem;
                }

                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                }

                .footer-logo {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-decoration: none;
                }

                .footer-about {
                    line-height: 1.7;
                    color: #9ca3af;
                }

                .footer-column h3 {
                    color: #fff;
                    font-size: 1.125rem;
                    margin-top: 0;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .footer-column li {
                    margin-bottom: 0.625rem;
                }

                .footer-column a {
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .footer-column a:hover {
                    color: var(--primary);
                }

                .hours-line {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                }

                .social-links {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }

                .social-links a {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #374151;
                    color: #fff;
                    font-weight: 700;
                }

                .social-links a:hover {
                    background: var(--primary);
                    color: #fff;
                }

                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid #374151;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .legal-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .legal-links a {
                    color: #9ca3af;
                    text-decoration: none;
                }

                .legal-links a:hover {
                    color: #fff;
                }

                @media (max-width: 1024px) {
                    .footer-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .footer-bottom {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_firm() {
        let line = copyright_line(2031);
        assert!(line.starts_with("© 2031 "));
        assert!(line.contains(FIRM.name));
    }
}
