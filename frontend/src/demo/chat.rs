use web_sys::Document;

use super::Handles;
use crate::config::DemoConfig;
use crate::dom;
use crate::error::DemoError;

pub const COMPLETION_TEXT: &str = "✨ Your stunning photography portfolio is ready! \
    I've created a modern dark theme with elegant galleries and smooth animations.";

pub fn completion_markup() -> String {
    format!(
        r#"<div class="message-avatar"><i class="fas fa-robot"></i></div>
<div class="message-content">
    <p>{}</p>
    <div class="message-time">Just now</div>
</div>"#,
        COMPLETION_TEXT
    )
}

/// Swaps the typing placeholder's indicators for a finished AI reply.
/// Returns `Ok(false)` when there is no typing message to complete.
pub fn complete_typing(document: &Document) -> Result<bool, DemoError> {
    // Looked up when the reply fires, not at start, so markup mounted late still completes.
    let Some(typing) = dom::select(document, ".typing-message") else {
        return Ok(false);
    };
    let container = dom::required(document, ".chat-messages")?;

    for selector in [".typing-indicator", ".ai-progress"] {
        if let Some(el) = dom::child(&typing, selector) {
            dom::set_style(&el, "display", "none")?;
        }
    }

    let message = dom::create_div(document, "message ai-message", "")?;
    message.set_inner_html(&completion_markup());
    container.append_child(&message)?;
    container.set_scroll_top(container.scroll_height());
    Ok(true)
}

pub(super) fn init(document: &Document, config: &DemoConfig, handles: &mut Handles) -> Result<(), DemoError> {
    let document = document.clone();
    handles.timeout(config.chat_reply_delay_ms, move || match complete_typing(&document) {
        Ok(true) => log::debug!("Chat reply delivered"),
        Ok(false) => log::debug!("No typing message, chat left as is"),
        Err(e) => log::warn!("Chat reply failed: {}", e),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_message_text() {
        assert_eq!(
            COMPLETION_TEXT,
            "✨ Your stunning photography portfolio is ready! I've created a modern dark theme with elegant galleries and smooth animations."
        );
        let markup = completion_markup();
        assert!(markup.contains(COMPLETION_TEXT));
        assert!(markup.contains("fa-robot"));
        assert!(markup.contains("Just now"));
    }
}
