//! HTML fragments for the chat transcript
//!
//! Everything interpolated here is escaped. User text in particular must
//! never reach the page raw.

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn user_message(text: &str) -> String {
    format!(
        r#"<div class="chat-message user-message"><div class="message-content">{}</div></div>"#,
        escape_html(text)
    )
}

pub fn bot_message(text: &str) -> String {
    format!(
        r#"<div class="chat-message bot-message"><div class="message-avatar">🌾</div><div class="message-content">{}</div></div>"#,
        escape_html(text)
    )
}

/// One exchange: the user's message followed by the bot's reply
pub fn exchange(user: &str, reply: &str) -> String {
    let mut html = user_message(user);
    html.push_str(&bot_message(reply));
    html
}
