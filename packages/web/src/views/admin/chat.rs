use dioxus::prelude::*;
use ui::chat::{ChatLog, Sender};
use ui::components::{Button, Card, Input, Spinner};
use ui::icons::{FaPaperPlane, FaRobot, FaUser};
use ui::{use_api, use_reporter, Client, Icon, Reporter};

/// Post the typed message unless it is blank or a reply is still pending.
fn send(client: Client, reporter: Reporter, mut log: Signal<ChatLog>, mut input: Signal<String>) {
    let Some(message) = log.write().begin_send(&input.peek()) else {
        return;
    };
    input.set(String::new());
    spawn(async move {
        match client.send_chat(&message).await {
            Ok(reply) => log.write().receive(reply),
            Err(e) => {
                log.write().fail();
                reporter.error_with("Failed to get a response", &e);
            }
        }
    });
}

#[component]
pub fn Chat() -> Element {
    let client = use_api();
    let reporter = use_reporter();
    let log = use_signal(ChatLog::new);
    let mut input = use_signal(String::new);

    let pending = log.read().is_pending();
    let messages = log.read().messages().to_vec();

    rsx! {
        div {
            class: "page chat-page",
            header {
                class: "page-header",
                h1 { "AI Chat" }
            }
            Card {
                class: "chat-card",
                title: "Attendance Assistant",
                description: "Ask questions about attendance, teams and employees",
                div {
                    class: "chat-messages",
                    for message in messages {
                        div {
                            key: "{message.id}",
                            class: if message.sender == Sender::User { "chat-message user" } else { "chat-message assistant" },
                            span {
                                class: "chat-avatar",
                                if message.sender == Sender::User {
                                    Icon { icon: FaUser, width: 14, height: 14 }
                                } else {
                                    Icon { icon: FaRobot, width: 14, height: 14 }
                                }
                            }
                            div {
                                class: "chat-bubble",
                                p { "{message.content}" }
                                time { class: "chat-time", "{message.timestamp}" }
                            }
                        }
                    }
                    if pending {
                        div {
                            class: "chat-message assistant",
                            Spinner {}
                        }
                    }
                }
                div {
                    class: "chat-input",
                    Input {
                        id: "chat-input",
                        placeholder: "Type your message...",
                        value: input(),
                        disabled: pending,
                        oninput: move |v| input.set(v),
                        onkeydown: {
                            let client = client.clone();
                            move |evt: KeyboardEvent| {
                                if evt.key() == Key::Enter {
                                    evt.prevent_default();
                                    send(client.clone(), reporter, log, input);
                                }
                            }
                        },
                    }
                    Button {
                        title: "Send",
                        disabled: pending || input.read().trim().is_empty(),
                        onclick: move |_| send(client.clone(), reporter, log, input),
                        Icon { icon: FaPaperPlane, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
