use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::fade_in::FadeInSection;
use crate::config;

pub const GENERIC_FAILURE: &str = "Что-то пошло не так";
pub const NETWORK_FAILURE: &str = "Ошибка сети. Попробуйте снова.";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Delivered,
    Rejected(String),
}

impl RelayResponse {
    // A parsed body either confirms delivery or rejects with a display
    // message; a missing message falls back to the generic site copy.
    pub fn into_outcome(self) -> SubmitOutcome {
        if self.success {
            SubmitOutcome::Delivered
        } else {
            SubmitOutcome::Rejected(self.message.unwrap_or_else(|| GENERIC_FAILURE.to_string()))
        }
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let is_submitting = use_state(|| false);
    let is_success = use_state(|| false);
    let error = use_state(|| None::<String>);

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let is_submitting = is_submitting.clone();
        let is_success = is_success.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // The button is disabled while pending; the guard covers
            // Enter-key resubmission as well.
            if *is_submitting {
                return;
            }
            is_submitting.set(true);
            error.set(None);

            let form = match FormData::new() {
                Ok(form) => form,
                Err(_) => {
                    error.set(Some(NETWORK_FAILURE.to_string()));
                    is_submitting.set(false);
                    return;
                }
            };
            let _ = form.append_with_str("name", &name);
            let _ = form.append_with_str("email", &email);
            let _ = form.append_with_str("message", &message);
            let _ = form.append_with_str("access_key", config::get_access_key());

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let is_submitting = is_submitting.clone();
            let is_success = is_success.clone();
            let error = error.clone();
            spawn_local(async move {
                match Request::post(config::get_relay_url()).body(form).send().await {
                    Ok(response) => match response.json::<RelayResponse>().await {
                        Ok(data) => match data.into_outcome() {
                            SubmitOutcome::Delivered => {
                                is_success.set(true);
                                name.set(String::new());
                                email.set(String::new());
                                message.set(String::new());
                            }
                            SubmitOutcome::Rejected(reason) => {
                                log!("relay rejected the submission:", reason.clone());
                                error.set(Some(reason));
                            }
                        },
                        Err(e) => {
                            log!("failed to decode relay response:", e.to_string());
                            error.set(Some(NETWORK_FAILURE.to_string()));
                        }
                    },
                    Err(e) => {
                        log!("relay request failed:", e.to_string());
                        error.set(Some(NETWORK_FAILURE.to_string()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_reset = {
        let is_success = is_success.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            is_success.set(false);
            error.set(None);
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                .contact-section {
                    padding: 5rem 0;
                    background: linear-gradient(to bottom, #020617, #0f172a);
                }
                .contact-heading {
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    text-align: center;
                }
                .contact-card {
                    max-width: 36rem;
                    margin: 0 auto;
                    background: rgba(30, 41, 59, 0.5);
                    backdrop-filter: blur(10px);
                    border: 1px solid #334155;
                    border-radius: 16px;
                    padding: 2rem;
                }
                .contact-form .form-field { margin-bottom: 1.5rem; }
                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #cbd5e1;
                    margin-bottom: 0.5rem;
                }
                .form-field input,
                .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    background: #0f172a;
                    border: 1px solid #334155;
                    border-radius: 8px;
                    color: #fff;
                    font-size: 1rem;
                    font-family: inherit;
                    transition: border-color 0.3s;
                    resize: none;
                }
                .form-field input::placeholder,
                .form-field textarea::placeholder { color: #64748b; }
                .form-field input:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: #f59e0b;
                }
                .form-error {
                    color: #f87171;
                    font-size: 0.875rem;
                    margin-bottom: 1.5rem;
                }
                .submit-button {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    background: #f59e0b;
                    color: #020617;
                    border: none;
                    border-radius: 8px;
                    padding: 1rem 2rem;
                    font-size: 1rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .submit-button:hover:enabled {
                    background: #d97706;
                    transform: scale(1.02);
                }
                .submit-button:disabled {
                    background: #475569;
                    cursor: not-allowed;
                }
                .button-spinner {
                    display: inline-block;
                    width: 20px;
                    height: 20px;
                    border: 2px solid rgba(2, 6, 23, 0.3);
                    border-top-color: #020617;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .contact-success {
                    text-align: center;
                    padding: 3rem 0;
                }
                .success-badge {
                    width: 80px;
                    height: 80px;
                    margin: 0 auto 1.5rem;
                    background: rgba(34, 197, 94, 0.2);
                    color: #22c55e;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.5rem;
                }
                .contact-success h3 {
                    color: #fff;
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                }
                .contact-success p { color: #94a3b8; margin: 0 0 2rem; }
                .reset-link {
                    background: none;
                    border: none;
                    padding: 0;
                    color: #f59e0b;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: color 0.3s;
                }
                .reset-link:hover { color: #fbbf24; }
                "#}
            </style>
            <div class="container">
                <FadeInSection>
                    <div class="contact-heading section-heading">
                        <h2>{"Свяжитесь с "}<span class="accent">{"нами"}</span></h2>
                        <p>{"Есть вопросы или предложения? Напишите нам!"}</p>
                    </div>
                </FadeInSection>

                <FadeInSection delay_ms={200}>
                    <div class="contact-card">
                    {
                        if !*is_success {
                            html! {
                                <form class="contact-form" onsubmit={onsubmit}>
                                    <div class="form-field">
                                        <label for="contact-name">{"Имя"}</label>
                                        <input
                                            id="contact-name"
                                            type="text"
                                            name="name"
                                            required={true}
                                            placeholder="Ваше имя"
                                            value={(*name).clone()}
                                            oninput={oninput_name}
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label for="contact-email">{"Email"}</label>
                                        <input
                                            id="contact-email"
                                            type="email"
                                            name="email"
                                            required={true}
                                            placeholder="your@email.com"
                                            value={(*email).clone()}
                                            oninput={oninput_email}
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label for="contact-message">{"Сообщение"}</label>
                                        <textarea
                                            id="contact-message"
                                            name="message"
                                            rows="4"
                                            required={true}
                                            placeholder="Ваше сообщение..."
                                            value={(*message).clone()}
                                            oninput={oninput_message}
                                        />
                                    </div>
                                    {
                                        if let Some(reason) = (*error).as_ref() {
                                            html! { <div class="form-error">{"⚠ "}{reason.clone()}</div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <button type="submit" class="submit-button" disabled={*is_submitting}>
                                        {
                                            if *is_submitting {
                                                html! { <><span class="button-spinner"></span>{"Отправка..."}</> }
                                            } else {
                                                html! { {"Отправить сообщение"} }
                                            }
                                        }
                                    </button>
                                </form>
                            }
                        } else {
                            html! {
                                <div class="contact-success">
                                    <div class="success-badge">{"✓"}</div>
                                    <h3>{"Сообщение отправлено!"}</h3>
                                    <p>{"Спасибо за обращение. Мы ответим вам в ближайшее время."}</p>
                                    <button class="reset-link" onclick={on_reset}>{"Отправить еще"}</button>
                                </div>
                            }
                        }
                    }
                    </div>
                </FadeInSection>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> RelayResponse {
        serde_json::from_str(body).expect("relay body should decode")
    }

    #[test]
    fn successful_response_is_delivered() {
        let outcome = parse(r#"{"success": true, "message": "Email sent"}"#).into_outcome();
        assert_eq!(outcome, SubmitOutcome::Delivered);
    }

    #[test]
    fn failure_shows_server_message_verbatim() {
        let outcome = parse(r#"{"success": false, "message": "Invalid access key"}"#).into_outcome();
        assert_eq!(outcome, SubmitOutcome::Rejected("Invalid access key".to_string()));
    }

    #[test]
    fn failure_without_message_uses_generic_fallback() {
        let outcome = parse(r#"{"success": false}"#).into_outcome();
        assert_eq!(outcome, SubmitOutcome::Rejected(GENERIC_FAILURE.to_string()));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let outcome = parse(r#"{"success": true, "statusCode": 200, "body": {}}"#).into_outcome();
        assert_eq!(outcome, SubmitOutcome::Delivered);
    }

    #[test]
    fn network_fallback_is_not_the_server_copy() {
        // Transport failures must never leak a half-parsed server message.
        assert_ne!(NETWORK_FAILURE, GENERIC_FAILURE);
    }
}
