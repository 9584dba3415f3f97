use log::debug;
use web_sys::TouchList;
use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::config::AUTOPLAY_INTERVAL_MS;
use crate::content::TESTIMONIALS;
use crate::controllers::carousel::{Carousel, CarouselAction, Direction};
use crate::timers::{TaskSlot, Timer};

fn first_touch_x(touches: TouchList) -> Option<f64> {
    touches.get(0).map(|touch| touch.client_x() as f64)
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let deck = use_reducer(|| Carousel::new(TESTIMONIALS.len()));
    let autoplay = use_mut_ref(TaskSlot::<Timer>::default);

    // Re-armed whenever autoplay flips or a manual move restarts the clock.
    {
        let dispatcher = deck.dispatcher();
        let slot = autoplay.clone();
        use_effect_with_deps(
            move |(playing, _)| {
                if *playing {
                    slot.borrow_mut().every(AUTOPLAY_INTERVAL_MS, move || {
                        dispatcher.dispatch(CarouselAction::Tick);
                    });
                } else {
                    slot.borrow_mut().disarm();
                }
                move || {
                    slot.borrow_mut().disarm();
                }
            },
            (deck.is_autoplaying(), deck.generation()),
        );
    }

    let on_previous = {
        let deck = deck.dispatcher();
        Callback::from(move |_: MouseEvent| deck.dispatch(CarouselAction::Previous))
    };

    let on_next = {
        let deck = deck.dispatcher();
        Callback::from(move |_: MouseEvent| deck.dispatch(CarouselAction::Next))
    };

    let on_mouse_enter = {
        let deck = deck.dispatcher();
        Callback::from(move |_: MouseEvent| deck.dispatch(CarouselAction::Pause))
    };

    let on_mouse_leave = {
        let deck = deck.dispatcher();
        Callback::from(move |_: MouseEvent| deck.dispatch(CarouselAction::Resume))
    };

    let on_touch_start = {
        let deck = deck.dispatcher();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(e.touches()) {
                deck.dispatch(CarouselAction::TouchStart(x));
            }
        })
    };

    let on_touch_end = {
        let deck = deck.dispatcher();
        Callback::from(move |e: TouchEvent| match first_touch_x(e.changed_touches()) {
            Some(x) => deck.dispatch(CarouselAction::TouchEnd(x)),
            None => deck.dispatch(CarouselAction::Resume),
        })
    };

    let current = deck.current();
    let Some(testimonial) = TESTIMONIALS.get(current) else {
        return html! {};
    };
    let slide_class = match deck.direction() {
        Direction::Forward => "slide-forward",
        Direction::Backward => "slide-backward",
    };

    html! {
        <section class="testimonials-section" aria-labelledby="testimonials-heading">
            <div class="section-container narrow">
                <SectionHeading
                    id={AttrValue::from("testimonials-heading")}
                    title="לקוחות ממליצים"
                    subtitle={AttrValue::from("מה אומרים עלינו לקוחותינו מתעשיית המזון שנעזרו בשירותים המשפטיים שלנו")}
                />

                <div
                    class="carousel glass-card"
                    onmouseenter={on_mouse_enter}
                    onmouseleave={on_mouse_leave}
                    ontouchstart={on_touch_start}
                    ontouchend={on_touch_end}
                    aria-live="polite"
                >
                    <div class="deco deco-top"></div>
                    <div class="deco deco-bottom"></div>

                    <div class="carousel-stage">
                        <div key={current} class={classes!("slide", slide_class)}>
                            {
                                match testimonial.avatar {
                                    Some(src) => html! {
                                        <div class="avatar">
                                            <img src={src} alt={testimonial.name} />
                                        </div>
                                    },
                                    None => html! {
                                        <div class="avatar initial">{testimonial.initial()}</div>
                                    },
                                }
                            }
                            <blockquote>
                                <div class="quote-mark">{"❞"}</div>
                                <p>{testimonial.quote}</p>
                                <footer>
                                    <div class="who">{testimonial.name}</div>
                                    <div class="byline">{testimonial.byline()}</div>
                                </footer>
                            </blockquote>
                        </div>
                    </div>

                    <div class="carousel-controls">
                        <button class="round-button" onclick={on_previous} aria-label="הצג המלצה קודמת">
                            {"›"}
                        </button>

                        <div class="dots">
                            { for (0..deck.len()).map(|index| {
                                let deck = deck.dispatcher();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    debug!("testimonial dot {} selected", index);
                                    deck.dispatch(CarouselAction::GoTo(index));
                                });
                                let active = index == current;
                                html! {
                                    <button
                                        key={index}
                                        class={classes!("dot", active.then(|| "active"))}
                                        {onclick}
                                        aria-label={format!("עבור להמלצה {}", index + 1)}
                                        aria-current={active.to_string()}
                                    />
                                }
                            }) }
                        </div>

                        <button class="round-button" onclick={on_next} aria-label="הצג המלצה הבאה">
                            {"‹"}
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .testimonials-section {
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, #f9fafb, #f3f4f6);
                }

                .carousel {
                    position: relative;
                    overflow: hidden;
                    padding: 2.5rem;
                    border-radius: 16px;
                }

                .deco {
                    position: absolute;
                    width: 10rem;
                    height: 10rem;
                    border-radius: 50%;
                    opacity: 0.1;
                }

                .deco-top {
                    top: -5rem;
                    right: -5rem;
                    background: var(--primary);
                }

                .deco-bottom {
                    bottom: -5rem;
                    left: -5rem;
                    background: var(--secondary);
                }

                .carousel-stage {
                    position: relative;
                    min-height: 250px;
                }

                .slide {
                    display: flex;
                    align-items: flex-start;
                    gap: 2rem;
                }

                .slide-forward {
                    animation: slideInForward 0.4s ease-out;
                }

                .slide-backward {
                    animation: slideInBackward 0.4s ease-out;
                }

                @keyframes slideInForward {
                    from { opacity: 0; transform: translateX(-120px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes slideInBackward {
                    from { opacity: 0; transform: translateX(120px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                .avatar {
                    flex-shrink: 0;
                    width: 7rem;
                    height: 7rem;
                    border-radius: 50%;
                    overflow: hidden;
                    border: 4px solid #fff;
                    box-shadow: var(--shadow-neumorphic);
                }

                .avatar img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .avatar.initial {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #e5e7eb;
                    color: #9ca3af;
                    font-size: 1.5rem;
                }

                .slide blockquote {
                    flex: 1;
                    margin: 0;
                }

                .quote-mark {
                    color: var(--primary);
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .slide blockquote p {
                    font-size: 1.25rem;
                    line-height: 1.7;
                    color: #374151;
                    margin-bottom: 1.5rem;
                }

                .who {
                    font-weight: 700;
                    font-size: 1.25rem;
                    color: #1f2937;
                }

                .byline {
                    color: #4b5563;
                }

                .carousel-controls {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-top: 2rem;
                }

                .round-button {
                    width: 44px;
                    height: 44px;
                    border: none;
                    border-radius: 50%;
                    background: var(--light-bg);
                    color: #4b5563;
                    font-size: 1.5rem;
                    box-shadow: var(--shadow-neumorphic-sm);
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .round-button:hover {
                    color: var(--primary);
                }

                .dots {
                    display: flex;
                    gap: 0.5rem;
                }

                .dot {
                    width: 12px;
                    height: 12px;
                    padding: 0;
                    border: none;
                    border-radius: 50%;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .dot:hover {
                    background: #9ca3af;
                }

                .dot.active {
                    background: var(--primary);
                    transform: scale(1.25);
                }

                @media (max-width: 768px) {
                    .carousel {
                        padding: 1.5rem;
                    }

                    .slide {
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }

                    .carousel-stage {
                        min-height: 300px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
