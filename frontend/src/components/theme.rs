use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Site-wide base rules, palette variables, shared classes and keyframes.
/// Mounted once at the root; sections only add their own local styles.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <>
            <Global css={css!(r#"
                html {
                    scroll-behavior: smooth;
                    scroll-padding-top: 5rem;
                }

                body {
                    margin: 0;
                    direction: rtl;
                    font-family: "Heebo", "Assistant", "Rubik", Arial, sans-serif;
                    line-height: 1.5;
                    color: #1f2937;
                    background: #f3f4f6;
                    -webkit-font-smoothing: antialiased;
                }

                *, *::before, *::after {
                    box-sizing: border-box;
                }

                img {
                    max-width: 100%;
                    display: block;
                }

                button {
                    font-family: inherit;
                }
            "#)} />

            <style>
                {r#"
                :root {
                    --primary: #45B7D1;
                    --primary-light: #a5e0ee;
                    --primary-dark: #2f90a5;
                    --secondary: #FF6B6B;
                    --light-bg: #f0f4f8;
                    --shadow-neumorphic: 8px 8px 16px #d1d9e6, -8px -8px 16px #ffffff;
                    --shadow-neumorphic-sm: 4px 4px 8px #d1d9e6, -4px -4px 8px #ffffff;
                    --shadow-neumorphic-hover: 12px 12px 24px #d1d9e6, -12px -12px 24px #ffffff;
                    --shadow-neumorphic-pressed: inset 4px 4px 8px #d1d9e6, inset -4px -4px 8px #ffffff;
                }

                .section-container {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .section-container.narrow {
                    max-width: 56rem;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-heading h2 {
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin: 0 0 1rem;
                }

                .section-heading p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    max-width: 48rem;
                    margin: 1.5rem auto 0;
                }

                .heading-bar {
                    width: 6rem;
                    height: 0.25rem;
                    margin: 0 auto;
                    border-radius: 9999px;
                }

                .bar-primary {
                    background: var(--primary);
                }

                .bar-secondary {
                    background: var(--secondary);
                }

                .glass-card {
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    box-shadow: var(--shadow-neumorphic);
                }

                .info-card {
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: #fff;
                    box-shadow: var(--shadow-neumorphic);
                    transition: all 0.3s ease;
                }

                .info-card:hover {
                    transform: translateY(-5px);
                    box-shadow: var(--shadow-neumorphic-hover);
                }

                .info-card h3 {
                    font-size: 1.25rem;
                    color: #1f2937;
                    margin: 1rem 0 0.75rem;
                }

                .info-card p {
                    color: #4b5563;
                    line-height: 1.6;
                }

                .card-icon {
                    font-size: 2rem;
                    line-height: 1;
                }

                .pill-button {
                    display: inline-block;
                    padding: 0.875rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    font-weight: 600;
                    font-size: 1rem;
                    text-decoration: none;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .pill-button.primary {
                    background: var(--primary);
                    color: #fff;
                    box-shadow: var(--shadow-neumorphic-sm);
                }

                .pill-button.primary:hover {
                    background: var(--primary-dark);
                    transform: translateY(-2px);
                }

                .section-cta {
                    margin-top: 3rem;
                    text-align: center;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .fade-up {
                    animation: fadeUp 0.7s ease-out both;
                }

                .fade-up.delayed {
                    animation-delay: 0.6s;
                }

                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes fadeDown {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes spin {
                    to { transform: rotate(360deg); }
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal,
                    .fade-up {
                        animation: none;
                        transition: none;
                        opacity: 1;
                        transform: none;
                    }
                }
                "#}
            </style>
        </>
    }
}
