use yew::prelude::*;

// Scattered "shipment" nodes for the fake map. Fixed positions so the
// mockup renders the same on every load.
const NODE_POSITIONS: [(u32, u32); 14] = [
    (12, 8),
    (22, 31),
    (9, 54),
    (35, 18),
    (41, 72),
    (18, 88),
    (55, 12),
    (61, 44),
    (48, 63),
    (72, 27),
    (79, 58),
    (66, 81),
    (88, 39),
    (84, 70),
];

/// Static product-UI mockup shown in the hero: a mocked editor window with a
/// slide sidebar and an animated "live map" viewport. Pure decoration.
#[function_component(UiMockup)]
pub fn ui_mockup() -> Html {
    html! {
        <div class="mockup">
            <div class="mockup-header">
                <div class="mockup-header-left">
                    <div class="mockup-dots">
                        <span class="dot dot-red"></span>
                        <span class="dot dot-amber"></span>
                        <span class="dot dot-green"></span>
                    </div>
                    <span class="mockup-title">
                        {"Global Supply Chain"}
                        <span class="mockup-version">{"v2.4"}</span>
                    </span>
                </div>
                <span class="mockup-live">{"● Live"}</span>
            </div>

            <div class="mockup-body">
                <div class="mockup-sidebar">
                    {
                        (1..=3).map(|i| {
                            let active = i == 2;
                            html! {
                                <div class={classes!("mockup-slide", active.then(|| "active"))}>
                                    <div class="mockup-slide-top">
                                        <span class="mockup-slide-number">{format!("0{}", i)}</span>
                                        { if active { html! { <span class="mockup-spark">{"✦"}</span> } } else { html! {} } }
                                    </div>
                                    <div class="mockup-slide-thumb"></div>
                                    <div class="mockup-slide-line"></div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="mockup-map">
                    <div class="mockup-nodes">
                        {
                            NODE_POSITIONS.iter().map(|(top, left)| {
                                html! {
                                    <span
                                        class="mockup-node"
                                        style={format!("top: {}%; left: {}%;", top, left)}
                                    ></span>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="mockup-caption">
                        <div class="caption-bar caption-bar-title"></div>
                        <div class="caption-bar"></div>
                        <div class="caption-bar caption-bar-short"></div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .mockup {
                    width: 100%;
                    max-width: 960px;
                    margin: 0 auto;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    background: rgba(13, 17, 23, 0.6);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    overflow: hidden;
                    aspect-ratio: 16 / 9;
                    display: flex;
                    flex-direction: column;
                    text-align: left;
                }

                .mockup-header {
                    height: 48px;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 1rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(22, 27, 34, 0.5);
                }

                .mockup-header-left {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .mockup-dots {
                    display: flex;
                    gap: 0.5rem;
                }

                .dot {
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                }

                .dot-red { background: rgba(239, 68, 68, 0.2); border: 1px solid rgba(239, 68, 68, 0.5); }
                .dot-amber { background: rgba(245, 158, 11, 0.2); border: 1px solid rgba(245, 158, 11, 0.5); }
                .dot-green { background: rgba(34, 197, 94, 0.2); border: 1px solid rgba(34, 197, 94, 0.5); }

                .mockup-title {
                    font-size: 0.75rem;
                    font-weight: 500;
                    color: #8b949e;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .mockup-version {
                    font-size: 0.625rem;
                    padding: 0.1rem 0.4rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 999px;
                }

                .mockup-live {
                    font-size: 0.75rem;
                    color: #22c55e;
                    background: rgba(34, 197, 94, 0.1);
                    border: 1px solid rgba(34, 197, 94, 0.2);
                    border-radius: 999px;
                    padding: 0.15rem 0.6rem;
                    animation: mockup-pulse 2s ease-in-out infinite;
                }

                @keyframes mockup-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }

                .mockup-body {
                    flex: 1;
                    display: flex;
                    overflow: hidden;
                }

                .mockup-sidebar {
                    width: 200px;
                    flex-shrink: 0;
                    border-right: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(22, 27, 34, 0.3);
                    padding: 0.75rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .mockup-slide {
                    padding: 0.75rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(13, 17, 23, 0.6);
                }

                .mockup-slide.active {
                    border-color: rgba(110, 118, 255, 0.5);
                    background: rgba(110, 118, 255, 0.05);
                }

                .mockup-slide-top {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 0.5rem;
                }

                .mockup-slide-number {
                    font-family: monospace;
                    font-size: 0.625rem;
                    color: #8b949e;
                }

                .mockup-spark {
                    font-size: 0.625rem;
                    color: #6e76ff;
                }

                .mockup-slide-thumb {
                    height: 44px;
                    border-radius: 4px;
                    background: rgba(110, 118, 255, 0.08);
                    margin-bottom: 0.5rem;
                }

                .mockup-slide-line {
                    height: 8px;
                    width: 66%;
                    border-radius: 4px;
                    background: rgba(255, 255, 255, 0.08);
                }

                .mockup-map {
                    flex: 1;
                    position: relative;
                    background: #020617;
                    overflow: hidden;
                }

                .mockup-nodes {
                    position: absolute;
                    inset: 0;
                    animation: mockup-drift 20s linear infinite;
                }

                .mockup-node {
                    position: absolute;
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: rgba(59, 130, 246, 0.6);
                    filter: blur(1px);
                }

                @keyframes mockup-drift {
                    0% { transform: scale(1) translate(0, 0); }
                    25% { transform: scale(1.2) translate(-50px, 20px); }
                    60% { transform: scale(1.2) translate(-100px, -20px); }
                    100% { transform: scale(1) translate(0, 0); }
                }

                .mockup-caption {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: min(480px, 80%);
                    padding: 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(13, 17, 23, 0.8);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }

                .caption-bar {
                    height: 10px;
                    border-radius: 4px;
                    background: rgba(139, 148, 158, 0.3);
                    margin-bottom: 0.5rem;
                }

                .caption-bar-title {
                    height: 14px;
                    width: 75%;
                    background: rgba(230, 237, 243, 0.8);
                    margin-bottom: 0.75rem;
                }

                .caption-bar-short {
                    width: 83%;
                    margin-bottom: 0;
                }

                @media (max-width: 768px) {
                    .mockup-sidebar {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
