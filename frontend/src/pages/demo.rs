use yew::prelude::*;

use crate::config::DemoConfig;
use crate::demo::CanvasDemo;

const PARTICLE_COUNT: usize = 30;

const DEVICES: [(&str, &str, &str); 3] = [
    ("desktop", "fas fa-desktop", "Desktop"),
    ("tablet", "fas fa-tablet-alt", "Tablet"),
    ("mobile", "fas fa-mobile-alt", "Mobile"),
];

const CAPABILITIES: [(&str, &str); 4] = [
    ("fas fa-palette", "Generates on-brand color palettes"),
    ("fas fa-pen-nib", "Writes copy for every section"),
    ("fas fa-images", "Curates and crops your gallery"),
    ("fas fa-mobile-alt", "Responsive on every screen"),
];

const STEPS: [&str; 4] = ["Analyzing brief", "Designing layout", "Writing content", "Polishing details"];

const GALLERY: [&str; 6] = [
    "linear-gradient(135deg, #1e3a8a, #00d4ff)",
    "linear-gradient(135deg, #581c87, #a855f7)",
    "linear-gradient(135deg, #7f1d1d, #ff6b6b)",
    "linear-gradient(135deg, #134e4a, #4ecdc4)",
    "linear-gradient(135deg, #78350f, #fbbf24)",
    "linear-gradient(135deg, #111827, #6b7280)",
];

const EDIT_POINTS: [(&str, &str); 3] = [
    ("top: 12%; left: 20%;", "Headline tone adjusted"),
    ("top: 45%; left: 70%;", "Gallery spacing tuned"),
    ("top: 80%; left: 35%;", "Contrast improved"),
];

const DEMO_CSS: &str = r#"
    .canvas-demo {
        min-height: 100vh;
        background: #0b0f19;
        color: #e5e7eb;
        font-family: system-ui, -apple-system, sans-serif;
        position: relative;
        overflow: hidden;
        padding: 2rem;
    }
    .particles {
        position: absolute;
        inset: 0;
        pointer-events: none;
        z-index: 0;
    }
    .particle {
        position: absolute;
        width: 4px;
        height: 4px;
        border-radius: 50%;
        background: #00d4ff;
        animation: particleDrift 20s linear infinite;
    }
    @keyframes particleDrift {
        from { transform: translateY(100vh); }
        to { transform: translateY(-10vh); }
    }
    .demo-header, .demo-interface {
        position: relative;
        z-index: 1;
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .demo-header { text-align: center; margin-bottom: 2rem; }
    .demo-interface {
        display: grid;
        grid-template-columns: 280px 1fr;
        gap: 1.5rem;
    }
    .device-selector { display: flex; gap: 0.5rem; justify-content: center; margin-bottom: 1rem; }
    .device-btn {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        color: #9ca3af;
        padding: 0.5rem 1rem;
        border-radius: 8px;
        cursor: pointer;
    }
    .device-btn.active { color: #fff; border-color: #00d4ff; }
    .website-mockup {
        background: #111827;
        border-radius: 12px;
        padding: 1rem;
        position: relative;
    }
    .gallery-grid {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        grid-template-rows: 1fr 1fr;
        gap: 0.75rem;
        min-height: 320px;
    }
    .gallery-item {
        border-radius: 8px;
        cursor: pointer;
        overflow: hidden;
        transition: transform 0.3s ease;
    }
    .edit-indicator {
        position: absolute;
        width: 14px;
        height: 14px;
        border-radius: 50%;
        background: #a855f7;
        animation: indicatorPulse 2s ease-in-out infinite;
    }
    @keyframes indicatorPulse {
        0%, 100% { box-shadow: 0 0 0 0 rgba(168, 85, 247, 0.6); }
        50% { box-shadow: 0 0 0 10px rgba(168, 85, 247, 0); }
    }
    .indicator-tooltip {
        position: absolute;
        bottom: 150%;
        left: 50%;
        white-space: nowrap;
        background: #1f2937;
        padding: 0.25rem 0.5rem;
        border-radius: 6px;
        font-size: 0.75rem;
        opacity: 0;
        transform: translateX(-50%) translateY(-10px) scale(1);
        transition: opacity 0.2s ease, transform 0.2s ease;
    }
    .capability-item, .step {
        padding: 0.5rem 0.75rem;
        border-radius: 8px;
        color: #6b7280;
        transition: all 0.3s ease;
    }
    .capability-item.active { color: #fff; background: rgba(0, 212, 255, 0.1); }
    .step.active { color: #00d4ff; }
    .step.completed { color: #4ecdc4; }
    .chat-messages { max-height: 260px; overflow-y: auto; display: flex; flex-direction: column; gap: 0.75rem; }
    .message { display: flex; gap: 0.5rem; }
    .message-time { font-size: 0.7rem; color: #6b7280; }
    .typing-indicator span {
        display: inline-block;
        width: 6px;
        height: 6px;
        margin-right: 3px;
        border-radius: 50%;
        background: #9ca3af;
        animation: typingBounce 1s infinite;
    }
    @keyframes typingBounce {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-4px); }
    }
    .ai-progress { height: 3px; background: rgba(255, 255, 255, 0.1); border-radius: 2px; overflow: hidden; }
    .ai-progress-fill { width: 60%; height: 100%; background: linear-gradient(90deg, #00d4ff, #a855f7); }
    @media (max-width: 768px) {
        .demo-interface { grid-template-columns: 1fr; }
    }
"#;

#[function_component(Demo)]
pub fn demo() -> Html {
    // Start once the markup is mounted; shut down on unmount.
    use_effect_with_deps(
        move |_| {
            let running = match CanvasDemo::start(DemoConfig::load()) {
                Ok(demo) => Some(demo),
                Err(e) => {
                    gloo_console::error!("Failed to start canvas demo:", e.to_string());
                    None
                }
            };
            move || {
                if let Some(demo) = running {
                    demo.shutdown();
                }
            }
        },
        (),
    );

    let particles = (0..PARTICLE_COUNT)
        .map(|i| {
            let left = (i * 37) % 100;
            html! { <div class="particle" style={format!("left: {}%;", left)}></div> }
        })
        .collect::<Html>();

    html! {
        <div class="canvas-demo">
            <style>{DEMO_CSS}</style>
            <div class="particles">{particles}</div>

            <header class="demo-header">
                <h1>{"Canvas AI"}</h1>
                <p>{"Describe your site. Watch it build itself."}</p>
                <div class="device-selector">
                    { for DEVICES.iter().enumerate().map(|(i, (tag, icon, label))| html! {
                        <button class={classes!("device-btn", (i == 0).then_some("active"))} data-device={*tag}>
                            <i class={*icon}></i>{" "}{*label}
                        </button>
                    }) }
                </div>
            </header>

            <div class="demo-interface">
                <aside class="demo-sidebar">
                    <h3>{"AI Capabilities"}</h3>
                    <div class="capability-list">
                        { for CAPABILITIES.iter().enumerate().map(|(i, (icon, text))| html! {
                            <div class={classes!("capability-item", (i == 0).then_some("active"))}>
                                <i class={*icon}></i>{" "}{*text}
                            </div>
                        }) }
                    </div>

                    <h3>{"Build Progress"}</h3>
                    <div class="progress-steps">
                        { for STEPS.iter().enumerate().map(|(i, label)| html! {
                            <div class="step">
                                <span class="step-number">{(i + 1).to_string()}</span>{" "}{*label}
                            </div>
                        }) }
                    </div>

                    <div class="chat-panel">
                        <div class="chat-messages">
                            <div class="message user-message">
                                <div class="message-content">
                                    <p>{"Build me a dark, moody portfolio for my landscape photography."}</p>
                                    <div class="message-time">{"2 min ago"}</div>
                                </div>
                            </div>
                            <div class="message ai-message typing-message">
                                <div class="message-avatar"><i class="fas fa-robot"></i></div>
                                <div class="message-content">
                                    <p>{"On it! Building your gallery layout..."}</p>
                                    <div class="typing-indicator"><span></span><span></span><span></span></div>
                                    <div class="ai-progress"><div class="ai-progress-fill"></div></div>
                                </div>
                            </div>
                        </div>
                    </div>
                </aside>

                <main class="preview-frame">
                    <div class="website-mockup">
                        <div class="gallery-grid">
                            { for GALLERY.iter().map(|background| html! {
                                <div class="gallery-item" style={format!("background: {};", background)}></div>
                            }) }
                        </div>
                        { for EDIT_POINTS.iter().map(|(position, tip)| html! {
                            <div class="edit-indicator" style={*position}>
                                <div class="indicator-tooltip">{*tip}</div>
                            </div>
                        }) }
                    </div>
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_tiles_fill_stacked_grid_exactly() {
        assert_eq!(GALLERY.len(), 6);
        assert!(!DEMO_CSS.contains("grid-row: span"));
    }
}
