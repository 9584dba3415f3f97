use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::content::{faq_entry, FAQ};
use crate::controllers::accordion::Accordion;
use crate::listeners::location_hash;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: AttrValue,
    question: AttrValue,
    answer: AttrValue,
    expanded: bool,
    on_toggle: Callback<AttrValue>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let id = props.id.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id.clone());
        })
    };

    let answer_id = format!("{}-answer", props.id);

    html! {
        <div id={props.id.clone()} class={classes!("faq-item", props.expanded.then(|| "open"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={props.expanded.to_string()}
                aria-controls={answer_id.clone()}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.expanded { "−" } else { "+" }}</span>
            </button>
            if props.expanded {
                <div id={answer_id} class="faq-answer" role="region">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

/// Accordion state seeded from a `#faq-n` link, if it names an entry.
fn initial_accordion() -> Accordion {
    location_hash()
        .and_then(|hash| faq_entry(hash.trim_start_matches('#')))
        .map(|entry| {
            debug!("faq {} opened from location hash", entry.id);
            Accordion::with_expanded(entry.id)
        })
        .unwrap_or_default()
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_state(initial_accordion);

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |id: AttrValue| {
            let mut next = (*accordion).clone();
            next.toggle(&id);
            accordion.set(next);
        })
    };

    html! {
        <section id="faq" class="faq-section">
            <div class="section-container narrow">
                <SectionHeading
                    title="שאלות נפוצות"
                    subtitle={AttrValue::from("תשובות לשאלות הנפוצות ביותר שלקוחותינו שואלים אותנו")}
                />

                <div class="faq-list">
                    { for FAQ.iter().map(|entry| html! {
                        <FaqItem
                            key={entry.id}
                            id={entry.id}
                            question={entry.question}
                            answer={entry.answer}
                            expanded={accordion.is_expanded(entry.id)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>

                <div class="faq-prompt">
                    <p>{"יש לכם שאלה שלא מופיעה כאן?"}</p>
                    <a href="#contact" class="pill-button primary">{"צרו איתנו קשר"}</a>
                </div>
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 4rem 1rem;
                    background: var(--light-bg);
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    border-radius: 12px;
                    background: #fff;
                    box-shadow: var(--shadow-neumorphic-sm);
                    overflow: hidden;
                    transition: box-shadow 0.3s ease;
                }

                .faq-item.open {
                    box-shadow: var(--shadow-neumorphic);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    border: none;
                    background: none;
                    font: inherit;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #1f2937;
                    text-align: right;
                    cursor: pointer;
                }

                .faq-question:hover .question-text {
                    color: var(--primary);
                }

                .toggle-icon {
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: var(--light-bg);
                    color: var(--primary);
                    font-size: 1.25rem;
                }

                .faq-item.open .toggle-icon {
                    background: var(--primary);
                    color: #fff;
                }

                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                    animation: fadeIn 0.3s ease-out;
                }

                .faq-answer p {
                    margin: 0;
                    color: #4b5563;
                    line-height: 1.7;
                }

                .faq-prompt {
                    margin-top: 3rem;
                    text-align: center;
                }

                .faq-prompt p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    margin-bottom: 1rem;
                }
                "#}
            </style>
        </section>
    }
}
