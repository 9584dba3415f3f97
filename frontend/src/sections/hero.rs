use yew::prelude::*;
use yew_hooks::use_mount;

use crate::content::FIRM;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1589391886645-d51941baf7fb?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub on_cta_click: Option<Callback<()>>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        use_mount(move || entered.set(true));
    }

    let handle_cta = {
        let on_cta_click = props.on_cta_click.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(cb) = &on_cta_click {
                cb.emit(());
            }
        })
    };

    html! {
        <section class="hero-section" aria-label="אזור ראשי">
            <div class="blob blob-primary"></div>
            <div class="blob blob-secondary"></div>

            <div class={classes!("hero-inner", (*entered).then(|| "entered"))}>
                <div class="hero-text stagger">
                    <div class="hero-badge">
                        <span class="icon">{"⚖️"}</span>
                        <span>{"מומחים בייעוץ משפטי לתעשיית המזון"}</span>
                    </div>

                    <h1>{"משרד עורכי דין "}<span class="accent">{"מוביל"}</span>{" בישראל"}</h1>

                    <p class="hero-subtitle">
                        {"חווית לקוח מושלמת בכל ביקור, עם צוות מקצועי ומסור שמלווה אותך בכל צעד בדרך"}
                    </p>

                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={handle_cta} aria-label="קבע תור עכשיו">
                            {"קבע תור עכשיו"}
                            <span class="arrow">{"←"}</span>
                        </button>
                        <a href={FIRM.phone_href} class="hero-call" aria-label="התקשר עכשיו">
                            <span class="icon">{"📞"}</span>
                            {"התקשר עכשיו"}
                        </a>
                    </div>

                    <div class="social-proof">
                        <div class="client-faces">
                            { for (31..=34).map(|id| html! {
                                <img
                                    key={id}
                                    src={format!("https://randomuser.me/api/portraits/men/{}.jpg", id)}
                                    alt="תמונת לקוח מרוצה"
                                />
                            }) }
                        </div>
                        <div>
                            <div class="proof-title">{"למעלה מ-500 לקוחות מרוצים"}</div>
                            <div class="stars">{"★★★★★"}</div>
                        </div>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="visual-shadow"></div>
                    <div class="visual-card">
                        <img src={HERO_IMAGE} alt={FIRM.name} />
                        <div class="visual-overlay"></div>
                        <div class="visual-caption">
                            <h3>{FIRM.name}</h3>
                            <p>{"מומחים בייעוץ משפטי לתעשיית המזון"}</p>
                        </div>
                    </div>
                    <div class="floating-card">
                        <div class="floating-icon">{"⚖️"}</div>
                        <div>
                            <h4>{"ייעוץ משפטי מקצועי"}</h4>
                            <p>{"פגישת ייעוץ ראשונה ללא עלות"}</p>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 85vh;
                    width: 100%;
                    overflow: hidden;
                    background: linear-gradient(135deg, #f9fafb, #f3f4f6);
                }

                .blob {
                    position: absolute;
                    border-radius: 50%;
                    opacity: 0.1;
                    filter: blur(64px);
                }

                .blob-primary {
                    top: -8rem;
                    left: -8rem;
                    width: 16rem;
                    height: 16rem;
                    background: var(--primary);
                }

                .blob-secondary {
                    top: 50%;
                    right: -8rem;
                    width: 24rem;
                    height: 24rem;
                    background: var(--secondary);
                }

                .hero-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 3rem;
                }

                .hero-text,
                .hero-visual {
                    flex: 1;
                }

                .hero-inner > * {
                    opacity: 0;
                    transform: translateY(20px);
                }

                .hero-inner.entered > * {
                    animation: fadeUp 0.7s cubic-bezier(0.6, 0.05, 0.01, 0.9) forwards;
                }

                .hero-inner.entered > *:nth-child(1) { animation-delay: 0.3s; }
                .hero-inner.entered > *:nth-child(2) { animation-delay: 0.5s; }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: #fff;
                    box-shadow: var(--shadow-neumorphic);
                    font-size: 0.875rem;
                    color: #374151;
                }

                .hero-text h1 {
                    font-size: 3.5rem;
                    line-height: 1.2;
                    color: #111827;
                    margin: 0 0 1.5rem;
                }

                .hero-text h1 .accent {
                    color: var(--primary);
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .hero-cta,
                .hero-call {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    font-size: 1.125rem;
                    font-weight: 500;
                    box-shadow: var(--shadow-neumorphic);
                    transition: all 0.3s ease;
                    text-decoration: none;
                    cursor: pointer;
                    border: none;
                }

                .hero-cta {
                    background: var(--primary);
                    color: #fff;
                }

                .hero-cta:hover {
                    background: var(--primary-dark);
                    box-shadow: var(--shadow-neumorphic-pressed);
                }

                .hero-cta .arrow {
                    transition: transform 0.3s ease;
                }

                .hero-cta:hover .arrow {
                    transform: translateX(-4px);
                }

                .hero-call {
                    background: #fff;
                    color: #374151;
                }

                .social-proof {
                    margin-top: 2rem;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .client-faces {
                    display: flex;
                }

                .client-faces img {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    border: 2px solid #fff;
                    margin-left: -8px;
                }

                .proof-title {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #111827;
                }

                .stars {
                    color: var(--primary);
                    letter-spacing: 2px;
                }

                .hero-visual {
                    position: relative;
                }

                .visual-shadow {
                    position: absolute;
                    left: -1.5rem;
                    top: -1.5rem;
                    width: 100%;
                    height: 100%;
                    border-radius: 16px;
                    background: var(--secondary);
                    opacity: 0.1;
                }

                .visual-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.4);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .visual-card img {
                    display: block;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .visual-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(17, 24, 39, 0.7), transparent);
                }

                .visual-caption {
                    position: absolute;
                    bottom: 0;
                    right: 0;
                    padding: 1.5rem;
                    color: #fff;
                }

                .visual-caption h3 {
                    margin: 0;
                }

                .floating-card {
                    position: absolute;
                    bottom: -1.5rem;
                    left: -1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    max-width: 20rem;
                    padding: 1rem;
                    border-radius: 8px;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    opacity: 0;
                }

                .hero-inner.entered .floating-card {
                    animation: fadeUp 0.5s ease-out 1s forwards;
                }

                .floating-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .floating-card h4 {
                    margin: 0;
                    color: #111827;
                }

                .floating-card p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #4b5563;
                }

                @media (max-width: 1024px) {
                    .hero-inner {
                        flex-direction: column;
                        text-align: center;
                        padding: 4rem 1rem;
                    }

                    .hero-cta-group,
                    .social-proof {
                        justify-content: center;
                    }

                    .hero-text h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
