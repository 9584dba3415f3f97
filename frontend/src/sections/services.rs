use yew::prelude::*;

use crate::components::card::InfoCard;
use crate::components::heading::SectionHeading;
use crate::components::reveal::{use_reveal, RevealMode};
use crate::content::SERVICES;

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let grid_ref = use_node_ref();
    let visible = use_reveal(grid_ref.clone(), RevealMode::Once);

    html! {
        <section id="services" class="services-section">
            <div class="section-container">
                <SectionHeading
                    title="השירותים המשפטיים שלנו"
                    subtitle={AttrValue::from("משרד עורכי דין דלתא מתמחה במתן פתרונות משפטיים מקיפים לחברות בתעשיית המזון, תוך התמקדות בצרכים הייחודיים של הלקוחות שלנו והבנה מעמיקה של הענף.")}
                    accent="secondary"
                />

                <div ref={grid_ref} class={classes!("services-grid", "reveal", visible.then(|| "visible"))}>
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <InfoCard
                            key={i}
                            icon={service.icon}
                            title={service.title}
                            description={service.description}
                            variant={classes!("service")}
                        >
                            <a href="#contact" class="read-more">
                                <span>{"קרא עוד"}</span>
                                <span class="arrow">{"←"}</span>
                            </a>
                        </InfoCard>
                    }) }
                </div>

                <div class="section-cta">
                    <a href="#contact" class="pill-button primary">{"לפגישת ייעוץ ראשונית"}</a>
                </div>
            </div>

            <style>
                {r#"
                .services-section {
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, #f9fafb, #f3f4f6);
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .info-card.service {
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }

                .info-card.service:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 15px 30px rgba(0, 0, 0, 0.1);
                }

                .info-card.service .card-icon {
                    display: inline-flex;
                    padding: 0.75rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, var(--primary-light), var(--primary));
                }

                .read-more {
                    display: flex;
                    justify-content: flex-end;
                    gap: 0.25rem;
                    color: var(--secondary);
                    font-weight: 500;
                    text-decoration: none;
                }

                .read-more .arrow {
                    transition: transform 0.2s ease;
                }

                .read-more:hover .arrow {
                    transform: translateX(-5px);
                }

                @media (max-width: 1024px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
