use yew::prelude::*;

use crate::components::card::render_cards;
use crate::components::heading::SectionHeading;
use crate::components::reveal::{use_reveal, RevealMode};
use crate::content::{ABOUT_FEATURES, FIRM};

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let features_ref = use_node_ref();
    let features_visible = use_reveal(features_ref.clone(), RevealMode::Once);

    html! {
        <section id="about" class="about-section">
            <div class="section-container">
                <div class="fade-up">
                    <SectionHeading
                        title={format!("אודות {}", FIRM.name)}
                        subtitle={AttrValue::from("אנו מתמחים במתן ייעוץ משפטי מקצועי לתעשיית המזון בישראל, עם ניסיון של למעלה מ-15 שנה בתחום.")}
                    />
                </div>

                <div class="about-columns">
                    <div class="glass-card slide-from-left">
                        <h3>{"המומחיות שלנו"}</h3>
                        <p>
                            {"משרדנו מתמחה בכל ההיבטים המשפטיים של תעשיית המזון, כולל רגולציה, בטיחות מזון, תקנות סימון ואריזה, רישוי עסקים, ייבוא וייצוא, וקניין רוחני בתחום המזון."}
                        </p>
                        <p>
                            {"אנו מלווים חברות מזון, יצרנים, יבואנים, רשתות קמעונאיות ומסעדות בכל שלבי הפעילות העסקית, מייעוץ משפטי שוטף ועד ייצוג בהליכים משפטיים."}
                        </p>
                    </div>
                    <div class="glass-card slide-from-right">
                        <h3>{"הגישה שלנו"}</h3>
                        <p>
                            {"אנו מאמינים במתן שירות אישי ומקצועי לכל לקוח, תוך הבנה מעמיקה של צרכיו העסקיים והמשפטיים."}
                        </p>
                        <p>
                            {"הצוות המשפטי שלנו משלב ידע משפטי מעמיק עם הבנה עסקית של תעשיית המזון, מה שמאפשר לנו לספק פתרונות משפטיים יעילים ומותאמים אישית לכל לקוח."}
                        </p>
                    </div>
                </div>

                <div ref={features_ref} class={classes!("feature-grid", "reveal", features_visible.then(|| "visible"))}>
                    { render_cards(ABOUT_FEATURES, "feature") }
                </div>

                <div class="about-contact fade-up delayed">
                    <h3>{"צור קשר עמנו"}</h3>
                    <p>{"אנו מזמינים אותך לפנות אלינו לייעוץ ראשוני ללא התחייבות, כדי לדון בצרכים המשפטיים של העסק שלך."}</p>
                    <a href="#contact" class="pill-button primary">{"צור קשר"}</a>
                </div>
            </div>

            <style>
                {r#"
                .about-section {
                    padding: 4rem 1rem;
                    background: var(--light-bg);
                }

                .about-columns {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    margin-bottom: 4rem;
                }

                .about-columns h3 {
                    font-size: 1.5rem;
                    color: #1f2937;
                    margin-top: 0;
                }

                .about-columns p {
                    color: #4b5563;
                    line-height: 1.7;
                }

                .slide-from-left {
                    animation: slideFromLeft 0.7s ease-out 0.2s both;
                }

                .slide-from-right {
                    animation: slideFromRight 0.7s ease-out 0.4s both;
                }

                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }

                .about-contact {
                    text-align: center;
                }

                .about-contact h3 {
                    font-size: 1.5rem;
                    color: #1f2937;
                }

                .about-contact p {
                    color: #4b5563;
                    margin-bottom: 2rem;
                }

                @keyframes slideFromLeft {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes slideFromRight {
                    from { opacity: 0; transform: translateX(50px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @media (max-width: 1024px) {
                    .feature-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .about-columns,
                    .feature-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
