//! Login page - phone number + one-time code

use dioxus::prelude::*;

use crate::auth::{send_otp, use_auth, verify_otp, LoginFlow, LoginStep, SendCodeOutcome, VerifyOutcome};
use crate::routes::Route;

/// Two-step OTP login page.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut flow = use_signal(LoginFlow::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Already signed in - nothing to do here
    if auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Venues {} }
        };
    }

    let handle_send_code = move |_| {
        let Some(phone) = flow.read().submittable_phone() else {
            error.set(Some("Please enter your phone number".to_string()));
            return;
        };

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match send_otp(phone).await {
                Ok(SendCodeOutcome::Sent) => flow.write().code_sent(),
                Ok(SendCodeOutcome::InvalidPhone(detail)) => error.set(Some(detail)),
                Ok(SendCodeOutcome::RateLimited) => {
                    error.set(Some("Too many attempts. Please try again later.".to_string()))
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    let handle_verify = move |_| {
        let Some(code) = flow.read().submittable_code() else {
            error.set(Some("Please enter the code you received".to_string()));
            return;
        };
        let phone = flow.read().phone().trim().to_string();

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match verify_otp(phone, code).await {
                Ok(VerifyOutcome::Verified(_user)) => {
                    auth.refresh().await;
                    navigator.push(Route::Venues {});
                }
                Ok(VerifyOutcome::InvalidCode(detail)) => error.set(Some(detail)),
                Ok(VerifyOutcome::RateLimited) => {
                    error.set(Some("Too many attempts. Please try again later.".to_string()))
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    let step = flow.read().step();
    let phone_value = flow.read().phone().to_string();
    let code_value = flow.read().code().to_string();

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50",

            div {
                class: "max-w-md w-full bg-white rounded-lg shadow-md p-8",

                h2 { class: "text-2xl font-bold text-center mb-6", "Login" }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm",
                        "{err}"
                    }
                }

                match step {
                    LoginStep::Phone => rsx! {
                        form {
                            onsubmit: handle_send_code,
                            div {
                                class: "mb-4",
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Phone Number"
                                }
                                input {
                                    r#type: "tel",
                                    value: "{phone_value}",
                                    oninput: move |e| flow.write().set_phone(e.value()),
                                    placeholder: "+1234567890",
                                    required: true,
                                    disabled: is_pending(),
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "w-full bg-blue-600 text-white py-2 rounded-md hover:bg-blue-700 transition disabled:opacity-50 disabled:cursor-not-allowed",
                                disabled: is_pending(),
                                if is_pending() { "Sending..." } else { "Send OTP" }
                            }
                        }
                    },
                    LoginStep::Otp => rsx! {
                        form {
                            onsubmit: handle_verify,
                            div {
                                class: "mb-4",
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Enter OTP"
                                }
                                input {
                                    r#type: "text",
                                    value: "{code_value}",
                                    oninput: move |e| flow.write().set_code(e.value()),
                                    placeholder: "123456",
                                    required: true,
                                    disabled: is_pending(),
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                }
                                p {
                                    class: "mt-1 text-xs text-gray-500",
                                    "Enter the code sent to {phone_value}"
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "w-full bg-blue-600 text-white py-2 rounded-md hover:bg-blue-700 transition disabled:opacity-50 disabled:cursor-not-allowed",
                                disabled: is_pending(),
                                if is_pending() { "Verifying..." } else { "Verify OTP" }
                            }
                            button {
                                r#type: "button",
                                class: "w-full mt-2 text-blue-600 hover:text-blue-700",
                                onclick: move |_| {
                                    flow.write().change_phone();
                                    error.set(None);
                                },
                                "Change Phone Number"
                            }
                        }
                    }
                }
            }
        }
    }
}
