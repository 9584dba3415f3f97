use yew::prelude::*;

use crate::components::card::render_cards;
use crate::components::heading::SectionHeading;
use crate::components::reveal::{use_reveal, RevealMode};
use crate::content::EXPERTISE;

#[function_component(ExpertiseSection)]
pub fn expertise_section() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), RevealMode::Once);

    html! {
        <section id="expertise" class="expertise-section">
            <div class="blob blob-primary"></div>
            <div class="blob blob-secondary"></div>

            <div ref={section_ref} class={classes!("section-container", "reveal", visible.then(|| "visible"))}>
                <SectionHeading
                    title="תחומי התמחות"
                    subtitle={AttrValue::from("משרד עורכי דין דלתא מתמחה בליווי משפטי מקיף לחברות בתעשיית המזון, עם מומחיות ייחודית בכל ההיבטים המשפטיים של הענף")}
                />

                <div class="expertise-grid">
                    { render_cards(EXPERTISE, "expertise") }
                </div>

                <div class="expertise-prompt">
                    <h3>{"צריכים ייעוץ משפטי מקצועי בתחום המזון?"}</h3>
                    <p>{"צוות המומחים שלנו ישמח לעמוד לרשותכם בכל שאלה או אתגר משפטי"}</p>
                    <a href="#contact" class="pill-button primary">{"צרו קשר עכשיו"}</a>
                </div>
            </div>

            <style>
                {r#"
                .expertise-section {
                    position: relative;
                    overflow: hidden;
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, #f9fafb, #f3f4f6);
                }

                .expertise-section .section-container {
                    position: relative;
                    z-index: 1;
                }

                .expertise-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .info-card.expertise {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .info-card.expertise .card-icon {
                    padding: 0.75rem;
                    border-radius: 50%;
                    background: var(--primary-light);
                }

                .expertise-prompt {
                    margin: 4rem auto 0;
                    max-width: 36rem;
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.5);
                    backdrop-filter: blur(16px);
                    box-shadow: var(--shadow-neumorphic);
                }

                .expertise-prompt h3 {
                    margin-top: 0;
                    color: #1f2937;
                }

                .expertise-prompt p {
                    color: #4b5563;
                    margin-bottom: 1.25rem;
                }

                @media (max-width: 1024px) {
                    .expertise-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .expertise-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
