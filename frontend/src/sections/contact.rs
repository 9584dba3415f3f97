use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::config::{SUBMIT_DEADLINE_MS, SUBMIT_DELAY_MS, SUCCESS_DISPLAY_MS};
use crate::content::{BUSINESS_HOURS, FIRM};
use crate::controllers::contact_form::{
    deliver_within, ContactForm, Field, FormAction, SimulatedSink, SubmissionStatus,
};
use crate::timers::{TaskSlot, Timer};

fn field_error(form: &ContactForm, field: Field) -> Html {
    match form.error(field) {
        Some(error) => html! {
            <p id={format!("{}-error", field.id())} class="field-error" role="alert">
                {error.to_string()}
            </p>
        },
        None => html! {},
    }
}

fn field_classes(form: &ContactForm, field: Field) -> Classes {
    classes!("form-control", form.error(field).is_some().then(|| "invalid"))
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(ContactForm::default);
    let revert = use_mut_ref(TaskSlot::<Timer>::default);

    // The success panel stays up for a while, then the empty form comes back.
    {
        let dispatcher = form.dispatcher();
        let slot = revert.clone();
        use_effect_with_deps(
            move |succeeded| {
                if *succeeded {
                    slot.borrow_mut().once(SUCCESS_DISPLAY_MS, move || {
                        dispatcher.dispatch(FormAction::Revert);
                    });
                }
                move || {
                    slot.borrow_mut().disarm();
                }
            },
            form.status == SubmissionStatus::Succeeded,
        );
    }

    let on_input = |field: Field| {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let on_message_input = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Message, input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = form.ready_request();
            form.dispatch(FormAction::Submit);
            if let Some(request) = request {
                let form = form.dispatcher();
                spawn_local(async move {
                    let sink = SimulatedSink::new(SUBMIT_DELAY_MS);
                    let result = deliver_within(
                        &sink,
                        request,
                        TimeoutFuture::new(SUBMIT_DEADLINE_MS),
                        SUBMIT_DEADLINE_MS,
                    )
                    .await;
                    form.dispatch(FormAction::Settle(result));
                });
            }
        })
    };

    let submitting = form.status.is_submitting();
    let succeeded = form.status == SubmissionStatus::Succeeded;

    html! {
        <section id="contact" class="contact-section">
            <div class="section-container">
                <SectionHeading
                    title="צור קשר"
                    subtitle={AttrValue::from("השאירו פרטים ונחזור אליכם בהקדם לתיאום פגישת ייעוץ ראשונית")}
                />

                <div class="contact-layout">
                    <aside class="contact-info glass-card">
                        <h3>{"פרטי התקשרות"}</h3>
                        <ul class="contact-lines">
                            <li>
                                <span class="line-icon">{"☎"}</span>
                                <a href={FIRM.phone_href}>{FIRM.phone_display}</a>
                            </li>
                            <li>
                                <span class="line-icon">{"✉"}</span>
                                <a href={format!("mailto:{}", FIRM.email)}>{FIRM.email}</a>
                            </li>
                            <li>
                                <span class="line-icon">{"⌖"}</span>
                                <span>{FIRM.street}<br />{FIRM.postal}</span>
                            </li>
                        </ul>
                        <h4>{"שעות פעילות"}</h4>
                        <ul class="hours">
                            { for BUSINESS_HOURS.iter().map(|slot| html! {
                                <li key={slot.days}>
                                    <span>{slot.days}</span>
                                    <span>{slot.hours}</span>
                                </li>
                            }) }
                        </ul>
                    </aside>

                    <div class="contact-form-card glass-card">
                        if succeeded {
                            <div class="success-panel" role="status">
                                <div class="success-icon">{"✓"}</div>
                                <h3>{"תודה על פנייתך!"}</h3>
                                <p>{"ההודעה נשלחה בהצלחה. אחד מעורכי הדין שלנו יחזור אליך בהקדם."}</p>
                            </div>
                        } else {
                            <form {onsubmit} novalidate=true>
                                if let SubmissionStatus::Failed(message) = &form.status {
                                    <div class="failure-banner" role="alert">{message.clone()}</div>
                                }
                                if form.values.is_empty() {
                                    <p class="form-hint">{"כל השדות הם שדות חובה"}</p>
                                }

                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="name">{"שם מלא"}</label>
                                        <input
                                            id="name"
                                            type="text"
                                            class={field_classes(&form, Field::Name)}
                                            value={form.values.name.clone()}
                                            oninput={on_input(Field::Name)}
                                            disabled={submitting}
                                            aria-invalid={form.error(Field::Name).is_some().to_string()}
                                        />
                                        { field_error(&form, Field::Name) }
                                    </div>

                                    <div class="form-group">
                                        <label for="phone">{"טלפון"}</label>
                                        <input
                                            id="phone"
                                            type="tel"
                                            dir="ltr"
                                            class={field_classes(&form, Field::Phone)}
                                            value={form.values.phone.clone()}
                                            oninput={on_input(Field::Phone)}
                                            disabled={submitting}
                                            aria-invalid={form.error(Field::Phone).is_some().to_string()}
                                        />
                                        { field_error(&form, Field::Phone) }
                                    </div>
                                </div>

                                <div class="form-group">
                                    <label for="email">{"דוא״ל"}</label>
                                    <input
                                        id="email"
                                        type="email"
                                        dir="ltr"
                                        class={field_classes(&form, Field::Email)}
                                        value={form.values.email.clone()}
                                        oninput={on_input(Field::Email)}
                                        disabled={submitting}
                                        aria-invalid={form.error(Field::Email).is_some().to_string()}
                                    />
                                    { field_error(&form, Field::Email) }
                                </div>

                                <div class="form-group">
                                    <label for="message">{"הודעה"}</label>
                                    <textarea
                                        id="message"
                                        rows="5"
                                        class={field_classes(&form, Field::Message)}
                                        value={form.values.message.clone()}
                                        oninput={on_message_input}
                                        disabled={submitting}
                                        aria-invalid={form.error(Field::Message).is_some().to_string()}
                                    />
                                    { field_error(&form, Field::Message) }
                                </div>

                                <button type="submit" class="pill-button primary submit" disabled={submitting}>
                                    if submitting {
                                        <span class="spinner"></span>
                                        {"שולח..."}
                                    } else {
                                        {"שלח הודעה"}
                                    }
                                </button>
                            </form>
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact-section {
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, #f9fafb, #f3f4f6);
                }

                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 2rem;
                    align-items: start;
                }

                .contact-info h3,
                .contact-info h4 {
                    margin-top: 0;
                    color: #1f2937;
                }

                .contact-lines,
                .hours {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1.5rem;
                }

                .contact-lines li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    color: #4b5563;
                }

                .contact-lines a {
                    color: #4b5563;
                    text-decoration: none;
                }

                .contact-lines a:hover {
                    color: var(--primary);
                }

                .line-icon {
                    width: 2rem;
                    height: 2rem;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: var(--primary-light);
                    color: var(--primary-dark);
                }

                .hours li {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.5rem 0;
                    border-bottom: 1px solid #e5e7eb;
                    color: #4b5563;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }

                .form-group {
                    margin-bottom: 1.25rem;
                }

                .form-group label {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-weight: 500;
                    color: #374151;
                }

                .form-control {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 8px;
                    background: var(--light-bg);
                    font: inherit;
                    box-shadow: var(--shadow-neumorphic-pressed);
                    transition: border-color 0.2s ease;
                }

                .form-control:focus {
                    outline: none;
                    border-color: var(--primary);
                }

                .form-control.invalid {
                    border-color: var(--secondary);
                }

                .field-error {
                    margin: 0.375rem 0 0;
                    font-size: 0.875rem;
                    color: #dc2626;
                }

                .form-hint {
                    margin-top: 0;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .failure-banner {
                    margin-bottom: 1.25rem;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    background: #fef2f2;
                    border: 1px solid #fecaca;
                    color: #b91c1c;
                }

                .submit {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }

                .submit:disabled {
                    opacity: 0.7;
                    cursor: not-allowed;
                }

                .spinner {
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid rgba(255, 255, 255, 0.4);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: spin 0.8s linear infinite;
                }

                .success-panel {
                    text-align: center;
                    padding: 3rem 1rem;
                    animation: fadeIn 0.4s ease-out;
                }

                .success-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #dcfce7;
                    color: #16a34a;
                    font-size: 2rem;
                }

                .success-panel h3 {
                    color: #1f2937;
                }

                .success-panel p {
                    color: #4b5563;
                }

                @media (max-width: 768px) {
                    .contact-layout,
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
