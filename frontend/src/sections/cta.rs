use yew::prelude::*;

use crate::components::reveal::{use_reveal, RevealMode};

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    #[prop_or(AttrValue::from("צריכים ייעוץ משפטי בתחום המזון?"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::from("צוות המומחים שלנו זמין עבורכם לייעוץ ראשוני ללא התחייבות. פנו אלינו עוד היום ונשמח לסייע לעסק שלכם."))]
    pub description: AttrValue,
    #[prop_or(AttrValue::from("לתיאום פגישת ייעוץ"))]
    pub button_text: AttrValue,
    #[prop_or(AttrValue::from("/images/cta-background.jpg"))]
    pub background_image: AttrValue,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    let panel_ref = use_node_ref();
    let visible = use_reveal(panel_ref.clone(), RevealMode::Repeat);

    html! {
        <section class="cta-section">
            <div
                class="cta-backdrop"
                style={format!("background-image: url('{}');", props.background_image)}
            ></div>
            <div class="cta-tint"></div>

            <div ref={panel_ref} class={classes!("cta-panel", "reveal", visible.then(|| "visible"))}>
                <h2>{&props.title}</h2>
                <p>{&props.description}</p>
                <a href="#contact" class="cta-button">{&props.button_text}</a>
            </div>

            <style>
                {r#"
                .cta-section {
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 1rem;
                    text-align: center;
                }

                .cta-backdrop {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                }

                .cta-tint {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(69, 183, 209, 0.9), rgba(47, 144, 165, 0.85));
                }

                .cta-panel {
                    position: relative;
                    z-index: 1;
                    max-width: 48rem;
                    margin: 0 auto;
                    color: #fff;
                }

                .cta-panel h2 {
                    font-size: 2.5rem;
                    margin: 0 0 1.5rem;
                }

                .cta-panel p {
                    font-size: 1.25rem;
                    line-height: 1.7;
                    opacity: 0.9;
                    margin-bottom: 2.5rem;
                }

                .cta-button {
                    display: inline-block;
                    padding: 1rem 2.5rem;
                    border-radius: 9999px;
                    background: #fff;
                    color: var(--primary-dark);
                    font-weight: 700;
                    font-size: 1.125rem;
                    text-decoration: none;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                    transition: all 0.3s ease;
                }

                .cta-button:hover {
                    transform: translateY(-3px);
                    box-shadow: 0 15px 30px rgba(0, 0, 0, 0.2);
                }

                @media (max-width: 768px) {
                    .cta-panel h2 {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
